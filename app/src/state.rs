//! Application state management
//!
//! One owned `UiState` holds everything that outlives a single event:
//! the selected sex (read by the calorie evaluator) and the live chart
//! slot (owned by the macro evaluator's call site). All mutation goes
//! through the synchronous event handlers, so no locking is needed.

use crate::chart::ChartSlot;
use fitcalc_shared::Sex;

/// The single owned UI state
pub struct UiState {
    /// Selected sex; defaults to male, mutated only by the sex selector
    pub sex: Sex,
    /// At most one live chart instance
    pub chart: ChartSlot,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            sex: Sex::default(),
            chart: ChartSlot::new(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
