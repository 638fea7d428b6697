//! Tilt, parallax, depth and shadow derived from a normalized pointer.

use crate::config::EffectConfig;
use crate::geometry::NormalizedPointer;
use glam::{DMat4, DVec3};

/// Shadow cast by the image layer, offset away from the tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropShadow {
    pub offset_x_px: f64,
    pub offset_y_px: f64,
    pub blur_px: f64,
    pub opacity: f64,
}

impl DropShadow {
    /// Blur and opacity grow with `|nx * ny|` and never drop below the
    /// configured minimums, so the shadow stays visible at the centre.
    pub fn at(pointer: NormalizedPointer, config: &EffectConfig) -> Self {
        let s = &config.shadow;
        let weight = pointer.diagonal_weight();
        Self {
            offset_x_px: -pointer.nx() * s.offset_scale_px,
            offset_y_px: -pointer.ny() * s.offset_scale_px,
            blur_px: s.min_blur_px + weight * s.blur_scale_px,
            opacity: (s.min_opacity + weight * s.opacity_scale).min(1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformState {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub translate_x_px: f64,
    pub translate_y_px: f64,
    pub translate_z_px: f64,
    /// Present in enhanced mode only.
    pub shadow: Option<DropShadow>,
}

impl TransformState {
    pub fn compute(pointer: NormalizedPointer, config: &EffectConfig) -> Self {
        let (nx, ny) = (pointer.nx(), pointer.ny());
        let mut state = Self {
            rotate_x_deg: -ny * config.max_rotation_deg,
            rotate_y_deg: nx * config.max_rotation_deg,
            translate_x_px: nx * config.translate_scale_px,
            translate_y_px: ny * config.translate_scale_px,
            translate_z_px: 0.0,
            shadow: None,
        };
        if config.is_enhanced() {
            state.translate_z_px =
                config.base_depth_px - pointer.diagonal_weight() * config.depth_scale_px;
            state.shadow = Some(DropShadow::at(pointer, config));
        }
        state
    }

    /// Pose for an absent pointer: the transform at the viewport centre.
    pub fn neutral(config: &EffectConfig) -> Self {
        Self::compute(NormalizedPointer::CENTER, config)
    }

    /// No tilt and no in-plane translation.
    pub fn is_neutral_pose(&self) -> bool {
        self.rotate_x_deg == 0.0
            && self.rotate_y_deg == 0.0
            && self.translate_x_px == 0.0
            && self.translate_y_px == 0.0
    }

    /// Same transform as `rotateX() rotateY() translate3d()` applied in that
    /// order, as a column-major matrix suitable for CSS `matrix3d()`.
    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_rotation_x(self.rotate_x_deg.to_radians())
            * DMat4::from_rotation_y(self.rotate_y_deg.to_radians())
            * DMat4::from_translation(DVec3::new(
                self.translate_x_px,
                self.translate_y_px,
                self.translate_z_px,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_mode_has_no_depth_or_shadow() {
        let t = TransformState::compute(
            NormalizedPointer::new(0.8, -0.3),
            &EffectConfig::classic(),
        );
        assert_eq!(t.translate_z_px, 0.0);
        assert!(t.shadow.is_none());
    }

    #[test]
    fn shadow_falls_opposite_the_pointer() {
        let cfg = EffectConfig::enhanced();
        let s = DropShadow::at(NormalizedPointer::new(0.5, -1.0), &cfg);
        assert!(s.offset_x_px < 0.0);
        assert!(s.offset_y_px > 0.0);
    }

    #[test]
    fn shadow_never_drops_below_minimums() {
        let cfg = EffectConfig::enhanced();
        let s = DropShadow::at(NormalizedPointer::CENTER, &cfg);
        assert_eq!(s.blur_px, cfg.shadow.min_blur_px);
        assert_eq!(s.opacity, cfg.shadow.min_opacity);
        let corner = DropShadow::at(NormalizedPointer::new(1.0, 1.0), &cfg);
        assert!(corner.blur_px > s.blur_px);
        assert!(corner.opacity > s.opacity);
        assert!(corner.opacity <= 1.0);
    }

    #[test]
    fn neutral_matrix_is_identity_in_basic_mode() {
        let m = TransformState::neutral(&EffectConfig::classic()).to_matrix();
        assert!(m.abs_diff_eq(DMat4::IDENTITY, 1e-12));
    }

    #[test]
    fn matrix_applies_translation_after_rotation() {
        let t = TransformState {
            translate_x_px: 10.0,
            translate_y_px: -4.0,
            ..TransformState::default()
        };
        let p = t.to_matrix().transform_point3(DVec3::ZERO);
        assert!(p.abs_diff_eq(DVec3::new(10.0, -4.0, 0.0), 1e-12));
    }
}
