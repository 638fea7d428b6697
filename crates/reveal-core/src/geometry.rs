//! Pointer and viewport types.
//!
//! Everything here lives for the duration of a single pointer event. The
//! viewport is re-queried from the host on every event so a resize between
//! two moves is always reflected in the next frame.

use crate::error::EngineError;
use glam::DVec2;

/// Pointer position in viewport-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportGeometry {
    pub width: f64,
    pub height: f64,
}

impl ViewportGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both sides finite and strictly positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// Pointer mapped to `[-1, 1]` on both axes, `(0, 0)` at the viewport centre.
///
/// Values can leave `[-1, 1]` when the host reports coordinates outside the
/// viewport (pointer capture); see [`NormalizedPointer::clamped`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedPointer(pub DVec2);

impl NormalizedPointer {
    pub const CENTER: Self = Self(DVec2::ZERO);

    pub fn new(nx: f64, ny: f64) -> Self {
        Self(DVec2::new(nx, ny))
    }

    /// `n = (p / size - 0.5) * 2` per axis.
    pub fn from_sample(
        sample: PointerSample,
        viewport: ViewportGeometry,
    ) -> Result<Self, EngineError> {
        if !viewport.is_valid() {
            return Err(EngineError::InvalidGeometry {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !sample.is_finite() {
            return Err(EngineError::InvalidPointer {
                x: sample.x,
                y: sample.y,
            });
        }
        let unit = sample.as_vec() / viewport.as_vec();
        Ok(Self((unit - DVec2::splat(0.5)) * 2.0))
    }

    #[inline]
    pub fn nx(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn ny(&self) -> f64 {
        self.0.y
    }

    pub fn clamped(self) -> Self {
        Self(self.0.clamp(DVec2::NEG_ONE, DVec2::ONE))
    }

    /// `|nx * ny|`: zero along both axes through the centre, one at the corners.
    #[inline]
    pub fn diagonal_weight(&self) -> f64 {
        (self.0.x * self.0.y).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_square() {
        let vp = ViewportGeometry::new(200.0, 100.0);
        let tl = NormalizedPointer::from_sample(PointerSample::new(0.0, 0.0), vp).unwrap();
        let br = NormalizedPointer::from_sample(PointerSample::new(200.0, 100.0), vp).unwrap();
        assert_eq!((tl.nx(), tl.ny()), (-1.0, -1.0));
        assert_eq!((br.nx(), br.ny()), (1.0, 1.0));
    }

    #[test]
    fn outside_coordinates_exceed_range_until_clamped() {
        let vp = ViewportGeometry::new(100.0, 100.0);
        let n = NormalizedPointer::from_sample(PointerSample::new(150.0, -50.0), vp).unwrap();
        assert_eq!((n.nx(), n.ny()), (2.0, -2.0));
        let c = n.clamped();
        assert_eq!((c.nx(), c.ny()), (1.0, -1.0));
    }

    #[test]
    fn degenerate_viewports_are_rejected() {
        let p = PointerSample::new(1.0, 1.0);
        for vp in [
            ViewportGeometry::new(0.0, 10.0),
            ViewportGeometry::new(10.0, 0.0),
            ViewportGeometry::new(-5.0, 10.0),
            ViewportGeometry::new(f64::INFINITY, 10.0),
            ViewportGeometry::new(10.0, f64::NAN),
        ] {
            assert!(matches!(
                NormalizedPointer::from_sample(p, vp),
                Err(EngineError::InvalidGeometry { .. })
            ));
        }
    }

    #[test]
    fn non_finite_pointer_is_rejected() {
        let vp = ViewportGeometry::new(10.0, 10.0);
        let res = NormalizedPointer::from_sample(PointerSample::new(f64::NAN, 1.0), vp);
        assert!(matches!(res, Err(EngineError::InvalidPointer { .. })));
    }
}
