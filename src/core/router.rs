//=========================================================================
// Input Router
//=========================================================================
//
// The central input-routing facade.
//
// Composes the action catalog, the context-switching state machine, the
// per-action subscription registry, and the continuous-axis cache behind
// one handle. Collaborators receive an explicit reference (typically
// `Rc<InputRouter>`) rather than reaching for ambient global state, so
// tests can construct isolated instances.
//
// Inbound raw events enter through `dispatch`; events whose owning context
// is not the active one are dropped, which is how context enablement is
// realized — a disabled context's actions never reach their callbacks.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::action::{ActionId, ActionKind, ContextId};
use super::axis_cache::{AxisCache, AxisReader, AxisValue};
use super::context_manager::{ContextManager, ContextObserver};
use super::registry::ActionRegistry;
use super::subscriptions::{ActionCallback, SubscriptionRouter};

//=== InputRouter =========================================================

/// Centralized input-routing layer.
///
/// All methods take `&self`: internal state is interior-mutable so that
/// action callbacks and context observers can reenter the router
/// (resubscribe, switch contexts, query) while a dispatch or notification
/// is in flight.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use input_relay::prelude::*;
///
/// let registry = ActionRegistry::builder()
///     .action(ContextId::Player, "Attack")
///     .build()
///     .unwrap();
/// let router = InputRouter::new(registry);
///
/// let attack = router.registry().lookup(ContextId::Player, "Attack").unwrap();
/// router.switch_to_player();
/// router.subscribe_performed(attack, Rc::new(|| println!("attack!")));
/// router.dispatch_performed(attack);
/// ```
pub struct InputRouter {
    registry: ActionRegistry,
    contexts: ContextManager,
    subscriptions: SubscriptionRouter,
    axes: RefCell<AxisCache>,
}

impl InputRouter {
    //--- Construction -----------------------------------------------------

    /// Creates a router over a built action catalog.
    ///
    /// No context is active initially; the host switches one in during
    /// startup (the original defaults to the player context).
    pub fn new(registry: ActionRegistry) -> Self {
        Self {
            registry,
            contexts: ContextManager::new(),
            subscriptions: SubscriptionRouter::new(),
            axes: RefCell::new(AxisCache::new()),
        }
    }

    /// Read access to the action catalog.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    //=====================================================================
    // Context Control
    //=====================================================================

    /// Switches the active context. Idempotent; see [`ContextManager::switch`].
    pub fn switch_context(&self, target: ContextId) -> bool {
        self.contexts.switch(target)
    }

    /// Disables the active context without activating another.
    pub fn disable_all(&self) -> bool {
        self.contexts.disable_all()
    }

    //--- Named Shorthands ---------------------------------------------------

    /// Switches to the player context.
    pub fn switch_to_player(&self) -> bool {
        self.switch_context(ContextId::Player)
    }

    /// Switches to the UI context.
    pub fn switch_to_ui(&self) -> bool {
        self.switch_context(ContextId::Ui)
    }

    /// Switches to the cutscene context.
    pub fn switch_to_cutscene(&self) -> bool {
        self.switch_context(ContextId::Cutscene)
    }

    /// Switches to the dialogue context.
    pub fn switch_to_dialogue(&self) -> bool {
        self.switch_context(ContextId::Dialogue)
    }

    //=====================================================================
    // Context Queries
    //=====================================================================

    /// Returns the currently active context, if any.
    pub fn active_context(&self) -> Option<ContextId> {
        self.contexts.active()
    }

    /// Returns `true` if `context` is the active one.
    pub fn is_context_active(&self, context: ContextId) -> bool {
        self.contexts.is_active(context)
    }

    /// Returns `true` if the player context is active.
    pub fn is_player_active(&self) -> bool {
        self.is_context_active(ContextId::Player)
    }

    /// Returns `true` if the UI context is active.
    pub fn is_ui_active(&self) -> bool {
        self.is_context_active(ContextId::Ui)
    }

    /// Returns `true` if the cutscene context is active.
    pub fn is_cutscene_active(&self) -> bool {
        self.is_context_active(ContextId::Cutscene)
    }

    /// Returns `true` if the dialogue context is active.
    pub fn is_dialogue_active(&self) -> bool {
        self.is_context_active(ContextId::Dialogue)
    }

    //=====================================================================
    // Registration
    //=====================================================================

    /// Registers a context-change observer (fires after every effective switch).
    pub fn on_context_changed(&self, observer: ContextObserver) {
        self.contexts.observe(observer);
    }

    /// Removes one occurrence of a context-change observer, by identity.
    pub fn remove_context_observer(&self, observer: &ContextObserver) {
        self.contexts.remove_observer(observer);
    }

    /// Subscribes a callback to "performed" events of an action.
    pub fn subscribe_performed(&self, action: ActionId, callback: ActionCallback) {
        self.subscriptions.subscribe(ActionKind::Performed, action, callback);
    }

    /// Subscribes a callback to "canceled" events of an action.
    pub fn subscribe_canceled(&self, action: ActionId, callback: ActionCallback) {
        self.subscriptions.subscribe(ActionKind::Canceled, action, callback);
    }

    /// Removes one occurrence of a "performed" callback, by identity.
    /// A no-op when the callback was never subscribed.
    pub fn unsubscribe_performed(&self, action: ActionId, callback: &ActionCallback) {
        self.subscriptions.unsubscribe(ActionKind::Performed, action, callback);
    }

    /// Removes one occurrence of a "canceled" callback, by identity.
    /// A no-op when the callback was never subscribed.
    pub fn unsubscribe_canceled(&self, action: ActionId, callback: &ActionCallback) {
        self.subscriptions.unsubscribe(ActionKind::Canceled, action, callback);
    }

    //=====================================================================
    // Event Dispatch
    //=====================================================================

    /// Routes one raw action event to its subscribed callbacks.
    ///
    /// Events are delivered only while the action's owning context is the
    /// active one; anything else is dropped silently (the disabled-context
    /// gate). A handle that did not come from this router's registry is
    /// dropped with a warning.
    pub fn dispatch(&self, action: ActionId, kind: ActionKind) {
        let Some(owner) = self.registry.owner(action) else {
            warn!("Dropped {:?} event for unknown action handle {:?}", kind, action);
            return;
        };

        if !self.contexts.is_active(owner) {
            debug!(
                "Dropped {:?} event for {:?}: owning context {:?} not active",
                kind,
                self.registry.name(action).unwrap_or("?"),
                owner
            );
            return;
        }

        self.subscriptions.dispatch(action, kind);
    }

    /// Routes a "performed" event. See [`dispatch`](Self::dispatch).
    pub fn dispatch_performed(&self, action: ActionId) {
        self.dispatch(action, ActionKind::Performed);
    }

    /// Routes a "canceled" event. See [`dispatch`](Self::dispatch).
    pub fn dispatch_canceled(&self, action: ActionId) {
        self.dispatch(action, ActionKind::Canceled);
    }

    //=====================================================================
    // Continuous Axes
    //=====================================================================

    /// Samples the designated axis of the active context, once per tick.
    ///
    /// Called by the host's frame loop — never by an internal timer. A
    /// no-op when no context is active or the active context has no
    /// designated axis; cached values of other contexts stay frozen.
    pub fn sample(&self, reader: &dyn AxisReader) {
        let Some(active) = self.contexts.active() else {
            return;
        };
        let Some(axis) = self.registry.axis(active) else {
            return;
        };

        self.axes.borrow_mut().sample(active, axis, reader);
    }

    /// Returns the last axis value sampled while `context` was active.
    pub fn axis_value(&self, context: ContextId) -> AxisValue {
        self.axes.borrow().value(context)
    }

    /// Latest movement vector (player-context axis).
    pub fn movement_input(&self) -> AxisValue {
        self.axis_value(ContextId::Player)
    }

    /// Latest navigation vector (UI-context axis).
    pub fn navigation_input(&self) -> AxisValue {
        self.axis_value(ContextId::Ui)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
