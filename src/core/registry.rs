//=========================================================================
// Action Registry
//=========================================================================
//
// Static catalog of named logical actions grouped by context.
//
// Built once from configuration (builder API or TOML) and read-only at
// runtime. Lives for the process lifetime; the router only hands out
// `ActionId` handles into it.
//
// Each context holds an ordered list of discrete actions and at most one
// designated continuous axis action (polled per tick, not event-driven).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::action::{ActionId, ContextId};

//=== RegistryError =======================================================

/// Errors raised while constructing an [`ActionRegistry`].
///
/// Construction is the only fallible surface of the routing layer; every
/// runtime operation on a built registry is total.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An action name was registered twice within the same context.
    #[error("duplicate action {name:?} in context {context:?}")]
    DuplicateAction {
        /// Context the duplicate was registered in.
        context: ContextId,
        /// The offending action name.
        name: String,
    },

    /// A context was given a second continuous axis action.
    #[error("context {context:?} already has a designated axis")]
    DuplicateAxis {
        /// Context with the conflicting axis.
        context: ContextId,
    },

    /// The TOML configuration could not be parsed.
    #[error("invalid registry configuration: {0}")]
    Config(#[from] toml::de::Error),
}

//=== Configuration Schema ================================================

// Deserialization targets for `ActionRegistry::from_toml`.

#[derive(Deserialize)]
struct RegistryConfig {
    #[serde(default)]
    contexts: HashMap<ContextId, ContextConfig>,
}

#[derive(Deserialize)]
struct ContextConfig {
    #[serde(default)]
    actions: Vec<String>,
    axis: Option<String>,
}

//=== ActionDef ===========================================================

// One catalog slot. The slot index is the `ActionId`.
struct ActionDef {
    name: String,
    context: ContextId,
}

//=== ActionRegistry ======================================================

/// The static action catalog.
///
/// Maps every `ActionId` back to its name and owning context, and every
/// context to its ordered action list plus optional designated axis.
///
/// # Example
///
/// ```
/// use input_relay::prelude::*;
///
/// let registry = ActionRegistry::builder()
///     .action(ContextId::Player, "Attack")
///     .action(ContextId::Player, "Pause")
///     .axis(ContextId::Player, "Move")
///     .action(ContextId::Ui, "Unpause")
///     .axis(ContextId::Ui, "Navigate")
///     .build()
///     .unwrap();
///
/// let attack = registry.lookup(ContextId::Player, "Attack").unwrap();
/// assert_eq!(registry.owner(attack), Some(ContextId::Player));
/// ```
pub struct ActionRegistry {
    actions: Vec<ActionDef>,
    by_context: HashMap<ContextId, Vec<ActionId>>,
    axes: HashMap<ContextId, ActionId>,
}

impl ActionRegistry {
    //--- Construction -----------------------------------------------------

    /// Starts an empty builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Builds a registry from TOML configuration.
    ///
    /// # Format
    ///
    /// ```toml
    /// [contexts.player]
    /// actions = ["Attack", "Jump", "Pause"]
    /// axis = "Move"
    ///
    /// [contexts.ui]
    /// actions = ["Submit", "Unpause", "Cancel"]
    /// axis = "Navigate"
    /// ```
    pub fn from_toml(source: &str) -> Result<Self, RegistryError> {
        let config: RegistryConfig = toml::from_str(source)?;
        let mut builder = Self::builder();

        // Fixed iteration order keeps handle assignment deterministic.
        for context in ContextId::ALL {
            let Some(entry) = config.contexts.get(&context) else {
                continue;
            };

            for name in &entry.actions {
                builder = builder.action(context, name);
            }
            if let Some(axis) = &entry.axis {
                builder = builder.axis(context, axis);
            }
        }

        builder.build()
    }

    //--- Lookups ------------------------------------------------------------

    /// Resolves an action by owning context and name.
    pub fn lookup(&self, context: ContextId, name: &str) -> Option<ActionId> {
        self.by_context
            .get(&context)?
            .iter()
            .copied()
            .find(|id| self.actions[id.index()].name == name)
    }

    /// Returns the context an action belongs to, or `None` for a handle
    /// that did not come from this registry.
    pub fn owner(&self, action: ActionId) -> Option<ContextId> {
        self.actions.get(action.index()).map(|def| def.context)
    }

    /// Returns the action's configured name.
    pub fn name(&self, action: ActionId) -> Option<&str> {
        self.actions.get(action.index()).map(|def| def.name.as_str())
    }

    /// Returns the actions of a context, in registration order.
    pub fn actions(&self, context: ContextId) -> &[ActionId] {
        self.by_context
            .get(&context)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the designated continuous axis action of a context, if any.
    pub fn axis(&self, context: ContextId) -> Option<ActionId> {
        self.axes.get(&context).copied()
    }

    /// Total number of registered actions across all contexts.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

//=== RegistryBuilder =====================================================

/// Incremental [`ActionRegistry`] construction.
///
/// Duplicate names within a context and second axes are rejected at
/// [`build`](Self::build) time, so a built registry is always consistent.
pub struct RegistryBuilder {
    entries: Vec<(ContextId, String, bool)>,
}

impl RegistryBuilder {
    fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Registers a discrete action in a context.
    pub fn action(mut self, context: ContextId, name: impl Into<String>) -> Self {
        self.entries.push((context, name.into(), false));
        self
    }

    /// Registers the designated continuous axis action of a context.
    pub fn axis(mut self, context: ContextId, name: impl Into<String>) -> Self {
        self.entries.push((context, name.into(), true));
        self
    }

    /// Validates the accumulated entries and builds the catalog.
    pub fn build(self) -> Result<ActionRegistry, RegistryError> {
        let mut registry = ActionRegistry {
            actions: Vec::with_capacity(self.entries.len()),
            by_context: HashMap::new(),
            axes: HashMap::new(),
        };

        for (context, name, is_axis) in self.entries {
            if registry.lookup(context, &name).is_some() {
                return Err(RegistryError::DuplicateAction { context, name });
            }

            let id = ActionId::from_index(registry.actions.len());
            registry.actions.push(ActionDef { name, context });
            registry.by_context.entry(context).or_default().push(id);

            if is_axis && registry.axes.insert(context, id).is_some() {
                return Err(RegistryError::DuplicateAxis { context });
            }
        }

        debug!(
            "Built action registry: {} actions across {} contexts",
            registry.actions.len(),
            registry.by_context.len()
        );

        Ok(registry)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
