//=========================================================================
// Routing Core
//
// The input-routing core: identities, the static action catalog, the
// context-switching state machine, the per-action subscription registry,
// the continuous-axis cache, and the channel intake — composed behind
// the `InputRouter` facade.
//
// Responsibilities:
// - Enforce "exactly one active context at a time, or none"
// - Fan raw per-action events out to subscribed callbacks, in order
// - Notify observers synchronously on every effective context switch
// - Snapshot continuous axis values once per simulation tick
//
// Notes:
// All mutation happens on the single simulation thread. The intake
// channel is the only cross-thread boundary; it hands events to that
// thread for dispatch.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub mod axis_cache;
pub mod context_manager;
pub mod intake;
pub mod registry;
pub mod router;
pub mod subscriptions;

//=== Re-exports ==========================================================

pub use action::{ActionId, ActionKind, ContextId};
pub use axis_cache::{AxisReader, AxisValue};
pub use context_manager::ContextObserver;
pub use intake::{intake_channel, EventIntake, IntakeControl, RawActionEvent};
pub use registry::{ActionRegistry, RegistryBuilder, RegistryError};
pub use router::InputRouter;
pub use subscriptions::ActionCallback;
