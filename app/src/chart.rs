//! Chart renderer port
//!
//! The renderer is a pure sink: it receives a [`ChartSpec`] and returns
//! an opaque instance handle. [`ChartSlot`] holds at most one live
//! instance; replacement creates the new instance first, then releases
//! the old one, so repeated calculations never accumulate instances.
//! Release is RAII: dropping the handle disposes its resources.

use fitcalc_shared::ChartSpec;

/// Handle to one rendered chart; dropping it disposes the rendering
/// resources it holds.
pub trait ChartInstance {}

/// Rendering collaborator: draws a chart and hands back its handle
pub trait ChartRenderer {
    fn render(&mut self, spec: &ChartSpec) -> Box<dyn ChartInstance>;
}

/// Owner of the at-most-one live chart instance
#[derive(Default)]
pub struct ChartSlot {
    live: Option<Box<dyn ChartInstance>>,
}

impl ChartSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a replacement chart
    ///
    /// The new instance is created before the previous one is dropped,
    /// so a failed render (panic) leaves the old chart in place.
    pub fn replace(&mut self, renderer: &mut dyn ChartRenderer, spec: &ChartSpec) {
        let next = renderer.render(spec);
        self.live = Some(next);
    }

    /// Whether a chart is currently rendered
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Drop the live instance, if any
    pub fn clear(&mut self) {
        self.live = None;
    }
}
