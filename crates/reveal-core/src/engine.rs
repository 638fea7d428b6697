use crate::config::EffectConfig;
use crate::error::EngineError;
use crate::geometry::{NormalizedPointer, PointerSample, ViewportGeometry};
use crate::mask::{MaskSpec, RadialMask};
use crate::transform::TransformState;

/// Output of one pointer event: what the mask layer and the image layer show.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub mask: MaskSpec,
    pub transform: TransformState,
}

impl Frame {
    /// Mask disabled (image hidden) and the neutral pose.
    pub fn reset(config: &EffectConfig) -> Self {
        Self {
            mask: MaskSpec::Disabled,
            transform: TransformState::neutral(config),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Pointer absent; neutral transform, mask disabled.
    #[default]
    Idle,
    /// Pointer inside the viewport; transform follows it.
    Tracking,
}

/// Pure per-event computation. Fails on degenerate geometry or a non-finite
/// pointer; [`RevealEngine`] turns those failures into the reset frame.
pub fn compute_frame(
    sample: PointerSample,
    viewport: ViewportGeometry,
    config: &EffectConfig,
) -> Result<Frame, EngineError> {
    let mut pointer = NormalizedPointer::from_sample(sample, viewport)?;
    if config.clamp_pointer {
        pointer = pointer.clamped();
    }
    Ok(Frame {
        mask: MaskSpec::Radial(RadialMask::around(
            sample,
            config.reveal_radius_px,
            config.mask_edge,
        )),
        transform: TransformState::compute(pointer, config),
    })
}

/// Maps pointer events to frames and tracks the Idle/Tracking phase.
///
/// Holds only the most recent frame. Nothing is accumulated between events,
/// so there is no smoothing here; easing belongs to the presentation side.
#[derive(Clone, Debug)]
pub struct RevealEngine {
    config: EffectConfig,
    phase: Phase,
    current: Frame,
}

impl RevealEngine {
    pub fn new(config: EffectConfig) -> Self {
        Self {
            current: Frame::reset(&config),
            phase: Phase::Idle,
            config,
        }
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last frame produced by either handler.
    pub fn current(&self) -> &Frame {
        &self.current
    }

    /// Never fails: degenerate geometry or coordinates fall back to the reset
    /// frame and the engine goes Idle.
    pub fn on_pointer_move(&mut self, raw_x: f64, raw_y: f64, viewport: ViewportGeometry) -> Frame {
        match compute_frame(PointerSample::new(raw_x, raw_y), viewport, &self.config) {
            Ok(frame) => {
                self.phase = Phase::Tracking;
                self.current = frame;
            }
            Err(e) => {
                log::debug!("[engine] {e}; resetting");
                self.reset();
            }
        }
        self.current
    }

    pub fn on_pointer_leave(&mut self) -> Frame {
        self.reset();
        self.current
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.current = Frame::reset(&self.config);
    }
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new(EffectConfig::default())
    }
}
