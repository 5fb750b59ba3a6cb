//=========================================================================
// Action & Context Identities
//=========================================================================
//
// Identity types for the routing layer.
//
// Contexts: The closed set of mutually-exclusive input contexts. At most
// one context is active process-wide at any time.
//
// Actions: Opaque handles assigned by the `ActionRegistry`. Two actions
// with the same name in different contexts are distinct identities —
// comparison is always by handle, never by name string.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::Deserialize;

//=== ContextId ===========================================================

/// Identifies one of the mutually-exclusive input contexts.
///
/// Contexts group logical actions and carry an enable/disable lifecycle:
/// raw events are only delivered for actions whose owning context is the
/// currently active one. The set is closed — a fixed tagged variant, not
/// an open hierarchy — so exhaustive matches stay honest.
///
/// # Example
///
/// ```
/// use input_relay::prelude::*;
///
/// let ctx = ContextId::Player;
/// assert_ne!(ctx, ContextId::Ui);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextId {
    /// Direct character control.
    Player,

    /// Menu and pause-screen navigation.
    Ui,

    /// Non-interactive sequences (skip/advance only).
    Cutscene,

    /// Conversation flow control.
    Dialogue,
}

impl ContextId {
    /// All contexts, in declaration order.
    pub const ALL: [Self; 4] = [Self::Player, Self::Ui, Self::Cutscene, Self::Dialogue];
}

//=== ActionId ============================================================

/// Opaque handle for a named logical action (e.g. "Attack", "Move").
///
/// Handles are assigned by the [`ActionRegistry`](super::registry::ActionRegistry)
/// at construction and are unique across the whole catalog, so identity
/// comparison distinguishes same-named actions in different contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(u32);

impl ActionId {
    /// Creates a handle from a registry slot index.
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the registry slot index backing this handle.
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

//=== ActionKind ==========================================================

/// The two discrete event kinds a logical action can raise.
///
/// Roughly "activated" and "deactivated/released". Continuous axes do not
/// raise these — they are polled per tick instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// The action was activated.
    Performed,

    /// The action was deactivated or released.
    Canceled,
}

//=========================================================================
// Unit Tests
//=========================================================================
