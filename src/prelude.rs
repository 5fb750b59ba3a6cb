//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use input_relay::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Identities
pub use crate::core::action::{ActionId, ActionKind, ContextId};

// Action catalog
pub use crate::core::registry::{ActionRegistry, RegistryBuilder, RegistryError};

// Routing facade
pub use crate::core::router::InputRouter;

// Registration types
pub use crate::core::context_manager::ContextObserver;
pub use crate::core::subscriptions::ActionCallback;

// Continuous axes
pub use crate::core::axis_cache::{AxisReader, AxisValue};

// Event intake
pub use crate::core::intake::{intake_channel, EventIntake, IntakeControl, RawActionEvent};
