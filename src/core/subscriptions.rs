//=========================================================================
// Subscription Router
//=========================================================================
//
// Per-action callback registry and fan-out.
//
// Architecture:
//   (action, kind) → Vec<callback> → dispatch() invokes in order
//
// Registration mirrors delegate `+=`/`-=` accumulation: append on
// subscribe, remove-one-occurrence-by-identity on unsubscribe, duplicates
// permitted. Map entries are created lazily on first subscription and
// never removed — unsubscribing only mutates list contents.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

//=== Internal Dependencies ===============================================

use super::action::{ActionId, ActionKind};

//=== ActionCallback ======================================================

/// Callback invoked when a subscribed action event is dispatched.
///
/// Identity is the `Rc` allocation: cloning the same `Rc` yields the same
/// identity (so a clone can unsubscribe the original), while two separately
/// constructed callbacks are always distinct, even for identical closures.
pub type ActionCallback = Rc<dyn Fn()>;

//=== SubscriptionRouter ==================================================

/// The only path by which raw per-action events reach application callbacks.
///
/// Holds one ordered callback list per `(action, kind)` pair. The router
/// performs no context validation — the caller is responsible for
/// subscribing only to actions of the currently active context; a callback
/// accumulated against an inactive context's action simply fires once that
/// context is active again and its events are delivered.
pub struct SubscriptionRouter {
    performed: RefCell<HashMap<ActionId, Vec<ActionCallback>>>,
    canceled: RefCell<HashMap<ActionId, Vec<ActionCallback>>>,
}

impl SubscriptionRouter {
    //--- Construction -----------------------------------------------------

    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            performed: RefCell::new(HashMap::new()),
            canceled: RefCell::new(HashMap::new()),
        }
    }

    //--- Registration -------------------------------------------------------

    /// Appends `callback` to the list for `(action, kind)`.
    ///
    /// The entry is created on first subscription. Duplicate subscriptions
    /// are permitted and each occurrence fires.
    pub fn subscribe(&self, kind: ActionKind, action: ActionId, callback: ActionCallback) {
        self.map_for(kind)
            .borrow_mut()
            .entry(action)
            .or_default()
            .push(callback);

        debug!("Subscribed {:?} callback for {:?}", kind, action);
    }

    /// Removes the last matching occurrence of `callback` by `Rc` identity.
    ///
    /// A no-op, not an error, when the callback is not present — this
    /// covers the defensive "unsubscribe from an action I may never have
    /// subscribed to" pattern collaborators use when switching contexts.
    pub fn unsubscribe(&self, kind: ActionKind, action: ActionId, callback: &ActionCallback) {
        let mut map = self.map_for(kind).borrow_mut();
        let Some(list) = map.get_mut(&action) else {
            return;
        };

        // Emptied lists persist: entries are never removed from the map.
        if let Some(pos) = list.iter().rposition(|cb| Rc::ptr_eq(cb, callback)) {
            list.remove(pos);
            debug!("Unsubscribed {:?} callback for {:?}", kind, action);
        }
    }

    //--- Dispatch -------------------------------------------------------------

    /// Fans one raw event out to every callback registered for
    /// `(action, kind)`, in registration order, synchronously.
    ///
    /// Iterates a stable snapshot taken at dispatch start, so a callback
    /// that subscribes or unsubscribes during dispatch of the same event
    /// cannot invalidate the iteration. No registered callbacks is a
    /// silent no-op. Returns the number of callbacks invoked.
    pub fn dispatch(&self, action: ActionId, kind: ActionKind) -> usize {
        let snapshot: Vec<ActionCallback> = match self.map_for(kind).borrow().get(&action) {
            Some(list) => list.clone(),
            None => return 0,
        };

        for callback in &snapshot {
            callback();
        }

        snapshot.len()
    }

    //--- Internal Helpers -------------------------------------------------

    fn map_for(&self, kind: ActionKind) -> &RefCell<HashMap<ActionId, Vec<ActionCallback>>> {
        match kind {
            ActionKind::Performed => &self.performed,
            ActionKind::Canceled => &self.canceled,
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for SubscriptionRouter {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
