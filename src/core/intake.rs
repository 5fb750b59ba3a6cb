//=========================================================================
// Event Intake
//=========================================================================
//
// Channel seam between the external input layer and the routing core.
//
// Architecture:
//   input layer → Sender<RawActionEvent> → drain_into() → InputRouter
//
// The input layer may live on another thread; all routing mutation still
// happens on the simulation thread, which drains the queue once per tick.
// Bounded draining prevents a producer burst from starving the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::action::{ActionId, ActionKind};
use super::router::InputRouter;

//=== RawActionEvent ======================================================

/// One raw per-action event as delivered by the external input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawActionEvent {
    /// The resolved logical action.
    pub action: ActionId,

    /// Whether the action was performed or canceled.
    pub kind: ActionKind,
}

//=== IntakeControl =======================================================

/// Tick loop control signal from the intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeControl {
    /// Events (if any) were drained; keep ticking.
    Continue,

    /// The input layer hung up; the host decides how to wind down.
    Disconnected,
}

//=== EventIntake =========================================================

/// Receiving end of the raw-event channel.
///
/// Owned by the simulation thread and drained once per tick, before
/// sampling and subsystem updates, so subscriptions made during the
/// previous tick's notifications see this tick's events.
pub struct EventIntake {
    receiver: Receiver<RawActionEvent>,
}

/// Creates a connected sender/intake pair.
///
/// The sender side is cloneable and may be handed to the input layer's
/// thread.
pub fn intake_channel() -> (Sender<RawActionEvent>, EventIntake) {
    let (sender, receiver) = unbounded();
    (sender, EventIntake { receiver })
}

impl EventIntake {
    /// Drains pending events into the router (bounded per tick).
    ///
    /// Each drained event goes through [`InputRouter::dispatch`], so the
    /// disabled-context gate applies as usual. Returns
    /// [`IntakeControl::Disconnected`] once every sender is dropped.
    pub fn drain_into(&self, router: &InputRouter) -> IntakeControl {
        const MAX_EVENTS_PER_TICK: usize = 128;

        let mut drained = 0;

        while drained < MAX_EVENTS_PER_TICK {
            match self.receiver.try_recv() {
                Ok(event) => {
                    router.dispatch(event.action, event.kind);
                    drained += 1;
                }
                Err(TryRecvError::Empty) => return IntakeControl::Continue,
                Err(TryRecvError::Disconnected) => return IntakeControl::Disconnected,
            }
        }

        warn!("Event queue backlog: drained {} events this tick", drained);
        IntakeControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::ContextId;
    use crate::core::registry::ActionRegistry;
    use std::cell::Cell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    fn sample_router() -> InputRouter {
        let registry = ActionRegistry::builder()
            .action(ContextId::Player, "Attack")
            .action(ContextId::Ui, "Submit")
            .build()
            .unwrap();

        InputRouter::new(registry)
    }

    fn performed(action: ActionId) -> RawActionEvent {
        RawActionEvent { action, kind: ActionKind::Performed }
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn drain_routes_queued_events_in_order() {
        let router = sample_router();
        let attack = router.registry().lookup(ContextId::Player, "Attack").unwrap();
        let hits = Rc::new(Cell::new(0));

        router.switch_to_player();
        let counter = Rc::clone(&hits);
        router.subscribe_performed(attack, Rc::new(move || counter.set(counter.get() + 1)));

        let (sender, intake) = intake_channel();
        sender.send(performed(attack)).unwrap();
        sender.send(performed(attack)).unwrap();

        assert_eq!(intake.drain_into(&router), IntakeControl::Continue);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn drain_applies_disabled_context_gate() {
        let router = sample_router();
        let submit = router.registry().lookup(ContextId::Ui, "Submit").unwrap();
        let hits = Rc::new(Cell::new(0));

        router.switch_to_player();
        let counter = Rc::clone(&hits);
        router.subscribe_performed(submit, Rc::new(move || counter.set(counter.get() + 1)));

        let (sender, intake) = intake_channel();
        sender.send(performed(submit)).unwrap();

        intake.drain_into(&router);

        // Submit belongs to the UI context, which is not active.
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn drain_on_empty_queue_continues() {
        let router = sample_router();
        let (_sender, intake) = intake_channel();

        assert_eq!(intake.drain_into(&router), IntakeControl::Continue);
    }

    #[test]
    fn drain_reports_disconnect() {
        let router = sample_router();
        let (sender, intake) = intake_channel();

        drop(sender);

        assert_eq!(intake.drain_into(&router), IntakeControl::Disconnected);
    }

    #[test]
    fn drain_is_bounded_per_tick() {
        let router = sample_router();
        let attack = router.registry().lookup(ContextId::Player, "Attack").unwrap();
        let hits = Rc::new(Cell::new(0u32));

        router.switch_to_player();
        let counter = Rc::clone(&hits);
        router.subscribe_performed(attack, Rc::new(move || counter.set(counter.get() + 1)));

        let (sender, intake) = intake_channel();
        for _ in 0..200 {
            sender.send(performed(attack)).unwrap();
        }

        intake.drain_into(&router);
        assert_eq!(hits.get(), 128);

        // The remainder arrives on the next tick.
        intake.drain_into(&router);
        assert_eq!(hits.get(), 200);
    }
}
