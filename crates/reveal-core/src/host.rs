//! Seams between the engine and the page that embeds it.

use crate::engine::Frame;
use crate::error::EngineError;
use crate::geometry::ViewportGeometry;

/// The element the pointer moves over.
pub trait ViewportHost {
    /// Current size. Called once per event and never cached.
    fn geometry(&self) -> ViewportGeometry;
}

impl ViewportHost for ViewportGeometry {
    fn geometry(&self) -> ViewportGeometry {
        *self
    }
}

/// Applies frames to the image and mask layers.
pub trait PresentationSink {
    /// Returns [`EngineError::NotReady`] when a layer is not mounted yet.
    fn apply(&mut self, frame: &Frame) -> Result<(), EngineError>;
}
