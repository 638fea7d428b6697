use crate::config::EffectConfig;
use crate::engine::{Frame, Phase, RevealEngine};
use crate::error::EngineError;
use crate::geometry::PointerSample;
use crate::host::{PresentationSink, ViewportHost};

/// Whether a frame reached the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    /// Sink was not ready; the next event will try again.
    Dropped,
}

/// One engine bound to one sink, driven by the host's pointer events.
pub struct RevealSession<S: PresentationSink> {
    engine: RevealEngine,
    sink: S,
}

impl<S: PresentationSink> RevealSession<S> {
    pub fn new(config: EffectConfig, sink: S) -> Self {
        Self {
            engine: RevealEngine::new(config),
            sink,
        }
    }

    pub fn engine(&self) -> &RevealEngine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn pointer_moved<H: ViewportHost + ?Sized>(
        &mut self,
        sample: PointerSample,
        host: &H,
    ) -> Delivery {
        let frame = self.engine.on_pointer_move(sample.x, sample.y, host.geometry());
        self.deliver(frame)
    }

    pub fn pointer_left(&mut self) -> Delivery {
        let frame = self.engine.on_pointer_leave();
        self.deliver(frame)
    }

    /// Re-sends the current frame, e.g. right after the layers are mounted.
    pub fn refresh(&mut self) -> Delivery {
        let frame = *self.engine.current();
        self.deliver(frame)
    }

    fn deliver(&mut self, frame: Frame) -> Delivery {
        match self.sink.apply(&frame) {
            Ok(()) => Delivery::Applied,
            Err(EngineError::NotReady(layer)) => {
                log::debug!("[session] {layer} layer not ready; frame dropped");
                Delivery::Dropped
            }
            Err(e) => {
                log::warn!("[session] sink rejected frame: {e}");
                Delivery::Dropped
            }
        }
    }
}
