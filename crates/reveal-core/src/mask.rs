use crate::config::MaskEdge;
use crate::constants::SOFT_EDGE_INNER_FRACTION;
use crate::geometry::PointerSample;

/// Radial mask around the pointer. Distances are in pixels from the centre:
/// transparent (image visible) up to `transparent_until`, opaque (image
/// hidden) from `opaque_after` on, interpolated in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialMask {
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub transparent_until: f64,
    pub opaque_after: f64,
}

impl RadialMask {
    pub fn around(center: PointerSample, radius_px: f64, edge: MaskEdge) -> Self {
        let transparent_until = match edge {
            MaskEdge::Hard => radius_px,
            MaskEdge::Soft => radius_px * SOFT_EDGE_INNER_FRACTION,
            MaskEdge::Linear => 0.0,
        };
        Self {
            center_x: center.x,
            center_y: center.y,
            inner_radius: 0.0,
            transparent_until,
            opaque_after: radius_px,
        }
    }
}

/// What the mask layer should show.
///
/// `Disabled` removes the gradient entirely, which leaves the mask layer
/// fully opaque: the image is hidden, not revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MaskSpec {
    #[default]
    Disabled,
    Radial(RadialMask),
}

impl MaskSpec {
    #[inline]
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    pub fn radial(&self) -> Option<&RadialMask> {
        match self {
            Self::Radial(m) => Some(m),
            Self::Disabled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_edge_steps_at_radius() {
        let m = RadialMask::around(PointerSample::new(5.0, 5.0), 100.0, MaskEdge::Hard);
        assert_eq!((m.center_x, m.center_y), (5.0, 5.0));
        assert_eq!(m.inner_radius, 0.0);
        assert_eq!(m.transparent_until, 100.0);
        assert_eq!(m.opaque_after, 100.0);
    }

    #[test]
    fn soft_edge_ramps_over_outer_band() {
        let m = RadialMask::around(PointerSample::default(), 100.0, MaskEdge::Soft);
        assert!((m.transparent_until - 70.0).abs() < 1e-9);
        assert_eq!(m.opaque_after, 100.0);
    }

    #[test]
    fn linear_edge_starts_at_pointer() {
        let m = RadialMask::around(PointerSample::default(), 80.0, MaskEdge::Linear);
        assert_eq!(m.transparent_until, 0.0);
        assert_eq!(m.opaque_after, 80.0);
    }

    #[test]
    fn disabled_has_no_radial_part() {
        assert!(MaskSpec::Disabled.is_disabled());
        assert!(MaskSpec::Disabled.radial().is_none());
        assert_eq!(MaskSpec::default(), MaskSpec::Disabled);
    }
}
