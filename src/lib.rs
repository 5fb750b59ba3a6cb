//=========================================================================
// Input Relay — Library Root
//
// This crate defines the public API surface of the input-routing layer.
//
// Responsibilities:
// - Expose the routing facade (`InputRouter`) and the action catalog
// - Keep component internals reachable for engine-level extensibility
// - Provide a prelude for application code
//
// The layer owns the set of mutually-exclusive input contexts (player,
// UI, cutscene, dialogue), fans raw per-action events out to per-context
// subscription lists, and notifies collaborators whenever the active
// context changes. Raw device polling is not part of this crate: an
// external input layer resolves physical device state into the logical
// actions and axis values routed here.
//
// Typical usage:
// ```no_run
// use input_relay::prelude::*;
//
// let registry = ActionRegistry::builder()
//     .action(ContextId::Player, "Attack")
//     .axis(ContextId::Player, "Move")
//     .build()
//     .unwrap();
//
// let router = InputRouter::new(registry);
// router.switch_to_player();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains all routing systems and logic. It is exposed publicly
// for engine-level extensibility, but application code will mostly use
// the re-exported `InputRouter` facade and the prelude.
//
pub mod core;
pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the facade and catalog as the main entry points, so users
// can simply `use input_relay::InputRouter;` without knowing the internal
// module structure.
//
pub use crate::core::registry::ActionRegistry;
pub use crate::core::router::InputRouter;
