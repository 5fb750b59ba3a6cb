//=========================================================================
// Continuous-Axis Cache
//=========================================================================
//
// Per-tick snapshot of continuous axis values (movement, navigation).
//
// Continuous actions are polled, not event-driven: the host loop samples
// once per simulation tick, reading only the designated axis of the
// currently active context. Values sampled while a context was active stay
// frozen at their last-seen value after that context is disabled — they
// are never reset to zero on a switch.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::action::{ActionId, ContextId};

//=== AxisValue ===========================================================

/// A two-component axis reading, `(x, y)`.
pub type AxisValue = (f32, f32);

//=== AxisReader ==========================================================

/// Seam to the external input layer for continuous axis reads.
///
/// Implementations resolve a continuous action against current device
/// state, synchronously. The routing layer never polls devices itself —
/// device abstraction lives entirely behind this trait.
pub trait AxisReader {
    /// Returns the current value of a continuous action.
    fn read_axis(&self, action: ActionId) -> AxisValue;
}

//=== AxisCache ===========================================================

/// Last-sampled axis value per context.
///
/// Contexts that were never sampled read as `(0.0, 0.0)`.
pub struct AxisCache {
    values: HashMap<ContextId, AxisValue>,
}

impl AxisCache {
    //--- Construction -----------------------------------------------------

    /// Creates an empty cache.
    pub fn new() -> Self {
        Self { values: HashMap::new() }
    }

    //--- Sampling -----------------------------------------------------------

    /// Samples `axis` through `reader` and stores the value under `context`.
    ///
    /// Called once per tick by the router, for the active context only.
    pub fn sample(&mut self, context: ContextId, axis: ActionId, reader: &dyn AxisReader) {
        self.values.insert(context, reader.read_axis(axis));
    }

    //--- Queries ------------------------------------------------------------

    /// Returns the last value sampled while `context` was active.
    pub fn value(&self, context: ContextId) -> AxisValue {
        self.values.get(&context).copied().unwrap_or((0.0, 0.0))
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for AxisCache {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
