//=========================================================================
// Context Manager
//=========================================================================
//
// The context-switching state machine.
//
// Owns the single nullable active-context cell and the ordered list of
// change observers. Enforces "exactly one context active at a time, or
// none" and mediates every transition.
//
// Invariant: the active cell is updated BEFORE observers are notified, so
// context queries made from inside an observer already see the new
// context. Observers conventionally resubscribe their callbacks there.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;

//=== Internal Dependencies ===============================================

use super::action::ContextId;

//=== ContextObserver =====================================================

/// Callback invoked with the new context after every effective switch.
///
/// Registered and removed by `Rc` identity, mirroring delegate `+=`/`-=`
/// accumulation: duplicates are permitted and all registered occurrences
/// fire, in registration order.
pub type ContextObserver = Rc<dyn Fn(ContextId)>;

//=== ContextManager ======================================================

/// Enforces the single-active-context invariant.
///
/// All methods take `&self`: state lives behind `Cell`/`RefCell` so that
/// observers may reenter the manager (switch again, register, remove)
/// while a notification is in flight. Notification always iterates a
/// stable snapshot of the observer list taken when the switch commits.
pub struct ContextManager {
    active: Cell<Option<ContextId>>,
    observers: RefCell<Vec<ContextObserver>>,
}

impl ContextManager {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with no active context and no observers.
    pub fn new() -> Self {
        Self {
            active: Cell::new(None),
            observers: RefCell::new(Vec::new()),
        }
    }

    //--- Transitions --------------------------------------------------------

    /// Switches the active context to `target`.
    ///
    /// A no-op returning `false` when `target` is already active — no
    /// spurious notification is emitted. Otherwise the active cell is
    /// updated first, then every observer runs to completion synchronously,
    /// in registration order, before this method returns.
    pub fn switch(&self, target: ContextId) -> bool {
        if self.active.get() == Some(target) {
            return false;
        }

        self.active.set(Some(target));
        info!("Switched to context: {:?}", target);

        // Snapshot so observers can register/remove observers reentrantly.
        let snapshot: Vec<ContextObserver> = self.observers.borrow().clone();
        for observer in snapshot {
            observer(target);
        }

        true
    }

    /// Disables the active context without activating another.
    ///
    /// Distinct from switching: every `is_active` query returns `false`
    /// afterwards and no change notification is emitted. A no-op returning
    /// `false` when nothing is active.
    pub fn disable_all(&self) -> bool {
        if self.active.get().is_none() {
            return false;
        }

        self.active.set(None);
        info!("All input disabled");
        true
    }

    //--- Queries ------------------------------------------------------------

    /// Returns the currently active context, if any.
    pub fn active(&self) -> Option<ContextId> {
        self.active.get()
    }

    /// Returns `true` if `context` is the active one.
    pub fn is_active(&self, context: ContextId) -> bool {
        self.active.get() == Some(context)
    }

    //--- Observer Registration ----------------------------------------------

    /// Appends a change observer.
    pub fn observe(&self, observer: ContextObserver) {
        self.observers.borrow_mut().push(observer);
    }

    /// Removes the last registered occurrence of `observer`.
    ///
    /// Matching is by `Rc` identity. A no-op when the observer was never
    /// registered.
    pub fn remove_observer(&self, observer: &ContextObserver) {
        let mut observers = self.observers.borrow_mut();
        if let Some(pos) = observers.iter().rposition(|o| Rc::ptr_eq(o, observer)) {
            observers.remove(pos);
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for ContextManager {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell as StdRefCell;

    //--- Test Helpers -----------------------------------------------------

    // Observer that appends a tag to a shared log on every notification.
    fn recording_observer(
        log: &Rc<StdRefCell<Vec<(&'static str, ContextId)>>>,
        tag: &'static str,
    ) -> ContextObserver {
        let log = Rc::clone(log);
        Rc::new(move |ctx| log.borrow_mut().push((tag, ctx)))
    }

    //=====================================================================
    // Exclusivity Tests
    //=====================================================================

    #[test]
    fn exactly_one_context_active_after_switches() {
        let manager = ContextManager::new();

        manager.switch(ContextId::Player);
        assert!(manager.is_active(ContextId::Player));
        assert!(!manager.is_active(ContextId::Ui));

        manager.switch(ContextId::Ui);
        assert!(!manager.is_active(ContextId::Player));
        assert!(manager.is_active(ContextId::Ui));

        let active: Vec<_> = ContextId::ALL
            .into_iter()
            .filter(|&ctx| manager.is_active(ctx))
            .collect();
        assert_eq!(active, [ContextId::Ui]);
    }

    #[test]
    fn starts_with_no_active_context() {
        let manager = ContextManager::new();

        assert_eq!(manager.active(), None);
        for ctx in ContextId::ALL {
            assert!(!manager.is_active(ctx));
        }
    }

    #[test]
    fn disable_all_deactivates_everything() {
        let manager = ContextManager::new();
        manager.switch(ContextId::Player);

        assert!(manager.disable_all());
        assert_eq!(manager.active(), None);
        assert!(!manager.is_active(ContextId::Player));
        assert!(!manager.is_active(ContextId::Ui));
    }

    //=====================================================================
    // Idempotence Tests
    //=====================================================================

    #[test]
    fn switch_to_active_context_is_noop() {
        let manager = ContextManager::new();
        let log = Rc::new(StdRefCell::new(Vec::new()));
        manager.observe(recording_observer(&log, "obs"));

        assert!(manager.switch(ContextId::Player));
        assert!(!manager.switch(ContextId::Player));

        // Exactly one notification, not two.
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn disable_all_when_nothing_active_is_noop() {
        let manager = ContextManager::new();
        assert!(!manager.disable_all());
    }

    #[test]
    fn disable_all_emits_no_notification() {
        let manager = ContextManager::new();
        let log = Rc::new(StdRefCell::new(Vec::new()));
        manager.observe(recording_observer(&log, "obs"));

        manager.switch(ContextId::Player);
        manager.disable_all();

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn switch_after_disable_all_notifies_again() {
        let manager = ContextManager::new();
        let log = Rc::new(StdRefCell::new(Vec::new()));
        manager.observe(recording_observer(&log, "obs"));

        manager.switch(ContextId::Player);
        manager.disable_all();
        manager.switch(ContextId::Player);

        assert_eq!(log.borrow().len(), 2);
    }

    //=====================================================================
    // Notification Tests
    //=====================================================================

    #[test]
    fn observers_run_in_registration_order() {
        let manager = ContextManager::new();
        let log = Rc::new(StdRefCell::new(Vec::new()));

        manager.observe(recording_observer(&log, "first"));
        manager.observe(recording_observer(&log, "second"));

        manager.switch(ContextId::Ui);

        assert_eq!(
            *log.borrow(),
            [("first", ContextId::Ui), ("second", ContextId::Ui)]
        );
    }

    #[test]
    fn notification_fires_after_active_cell_updated() {
        let manager = Rc::new(ContextManager::new());
        let seen = Rc::new(StdRefCell::new(None));

        let weak = Rc::downgrade(&manager);
        let seen_inner = Rc::clone(&seen);
        manager.observe(Rc::new(move |_| {
            if let Some(mgr) = weak.upgrade() {
                *seen_inner.borrow_mut() = mgr.active();
            }
        }));

        manager.switch(ContextId::Dialogue);

        // Queries made inside the observer saw the new context.
        assert_eq!(*seen.borrow(), Some(ContextId::Dialogue));
    }

    #[test]
    fn duplicate_observers_both_fire() {
        let manager = ContextManager::new();
        let log = Rc::new(StdRefCell::new(Vec::new()));

        let observer = recording_observer(&log, "dup");
        manager.observe(Rc::clone(&observer));
        manager.observe(observer);

        manager.switch(ContextId::Player);

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn remove_observer_removes_one_occurrence() {
        let manager = ContextManager::new();
        let log = Rc::new(StdRefCell::new(Vec::new()));

        let observer = recording_observer(&log, "dup");
        manager.observe(Rc::clone(&observer));
        manager.observe(Rc::clone(&observer));
        manager.remove_observer(&observer);

        manager.switch(ContextId::Player);

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn remove_never_registered_observer_is_noop() {
        let manager = ContextManager::new();
        let log = Rc::new(StdRefCell::new(Vec::new()));
        manager.observe(recording_observer(&log, "kept"));

        let stranger: ContextObserver = Rc::new(|_| {});
        manager.remove_observer(&stranger);

        manager.switch(ContextId::Cutscene);

        // The registered observer is unaffected.
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn observer_registered_during_notification_misses_current_switch() {
        let manager = Rc::new(ContextManager::new());
        let log = Rc::new(StdRefCell::new(Vec::new()));

        let weak = Rc::downgrade(&manager);
        let log_inner = Rc::clone(&log);
        manager.observe(Rc::new(move |_| {
            if let Some(mgr) = weak.upgrade() {
                let log_late = Rc::clone(&log_inner);
                mgr.observe(Rc::new(move |ctx| log_late.borrow_mut().push(ctx)));
            }
        }));

        // First switch registers the late observer but must not invoke it.
        manager.switch(ContextId::Player);
        assert!(log.borrow().is_empty());

        // It fires on the next switch.
        manager.switch(ContextId::Ui);
        assert_eq!(*log.borrow(), [ContextId::Ui]);
    }
}
