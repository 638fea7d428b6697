use crate::constants::*;
use crate::error::ConfigError;

/// Which terms of the transform are active.
///
/// `Basic` drives tilt and parallax only. `Enhanced` layers the depth
/// (translateZ) and drop-shadow terms on the same normalized pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectMode {
    #[default]
    Basic,
    Enhanced,
}

impl EffectMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" | "classic" => Some(Self::Basic),
            "enhanced" | "depth" => Some(Self::Enhanced),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Enhanced => "enhanced",
        }
    }
}

/// Edge policy of the reveal circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaskEdge {
    /// Fully transparent up to the radius, fully opaque from the radius on.
    #[default]
    Hard,
    /// Opacity ramps between `SOFT_EDGE_INNER_FRACTION * r` and `r`.
    Soft,
    /// Opacity ramps over the whole radius, starting at the pointer.
    Linear,
}

impl MaskEdge {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hard" => Some(Self::Hard),
            "soft" => Some(Self::Soft),
            "linear" => Some(Self::Linear),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowConfig {
    pub offset_scale_px: f64,
    pub min_blur_px: f64,
    pub blur_scale_px: f64,
    pub min_opacity: f64,
    pub opacity_scale: f64,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            offset_scale_px: SHADOW_OFFSET_SCALE_PX,
            min_blur_px: SHADOW_MIN_BLUR_PX,
            blur_scale_px: SHADOW_BLUR_SCALE_PX,
            min_opacity: SHADOW_MIN_OPACITY,
            opacity_scale: SHADOW_OPACITY_SCALE,
        }
    }
}

/// Static tuning for one engine. Immutable once the engine is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectConfig {
    pub max_rotation_deg: f64,
    pub reveal_radius_px: f64,
    pub translate_scale_px: f64,
    pub depth_scale_px: f64,
    pub base_depth_px: f64,
    pub mode: EffectMode,
    pub mask_edge: MaskEdge,
    /// Clamp the normalized pointer to [-1, 1] when the host reports
    /// coordinates outside the viewport (pointer capture during drags).
    pub clamp_pointer: bool,
    pub shadow: ShadowConfig,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl EffectConfig {
    /// Tilt, parallax and a hard-edged reveal circle.
    pub fn classic() -> Self {
        Self {
            max_rotation_deg: DEFAULT_MAX_ROTATION_DEG,
            reveal_radius_px: DEFAULT_REVEAL_RADIUS_PX,
            translate_scale_px: DEFAULT_TRANSLATE_SCALE_PX,
            depth_scale_px: DEFAULT_DEPTH_SCALE_PX,
            base_depth_px: DEFAULT_BASE_DEPTH_PX,
            mode: EffectMode::Basic,
            mask_edge: MaskEdge::Hard,
            clamp_pointer: false,
            shadow: ShadowConfig::default(),
        }
    }

    /// Classic tuning plus depth and a dynamic drop shadow.
    pub fn enhanced() -> Self {
        Self {
            mode: EffectMode::Enhanced,
            ..Self::classic()
        }
    }

    /// Preset for a mode; used as the fallback when overrides are rejected.
    pub fn preset(mode: EffectMode) -> Self {
        match mode {
            EffectMode::Basic => Self::classic(),
            EffectMode::Enhanced => Self::enhanced(),
        }
    }

    #[inline]
    pub fn is_enhanced(&self) -> bool {
        self.mode == EffectMode::Enhanced
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("max_rotation_deg", self.max_rotation_deg),
            ("reveal_radius_px", self.reveal_radius_px),
            ("translate_scale_px", self.translate_scale_px),
            ("depth_scale_px", self.depth_scale_px),
            ("base_depth_px", self.base_depth_px),
            ("shadow.offset_scale_px", self.shadow.offset_scale_px),
            ("shadow.min_blur_px", self.shadow.min_blur_px),
            ("shadow.blur_scale_px", self.shadow.blur_scale_px),
            ("shadow.min_opacity", self.shadow.min_opacity),
            ("shadow.opacity_scale", self.shadow.opacity_scale),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        if self.reveal_radius_px <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "reveal_radius_px",
                value: self.reveal_radius_px,
            });
        }
        // Negative rotation or scale would silently invert the effect.
        for (field, value) in [
            ("max_rotation_deg", self.max_rotation_deg),
            ("translate_scale_px", self.translate_scale_px),
            ("depth_scale_px", self.depth_scale_px),
            ("shadow.min_blur_px", self.shadow.min_blur_px),
            ("shadow.blur_scale_px", self.shadow.blur_scale_px),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.max_rotation_deg > MAX_ROTATION_LIMIT_DEG {
            return Err(ConfigError::TooLarge {
                field: "max_rotation_deg",
                value: self.max_rotation_deg,
                max: MAX_ROTATION_LIMIT_DEG,
            });
        }
        for (field, value) in [
            ("reveal_radius_px", self.reveal_radius_px),
            ("translate_scale_px", self.translate_scale_px),
            ("depth_scale_px", self.depth_scale_px),
            ("base_depth_px", self.base_depth_px.abs()),
            ("shadow.offset_scale_px", self.shadow.offset_scale_px.abs()),
            ("shadow.min_blur_px", self.shadow.min_blur_px),
            ("shadow.blur_scale_px", self.shadow.blur_scale_px),
        ] {
            if value > MAX_LENGTH_LIMIT_PX {
                return Err(ConfigError::TooLarge {
                    field,
                    value,
                    max: MAX_LENGTH_LIMIT_PX,
                });
            }
        }
        for opacity in [self.shadow.min_opacity, self.shadow.opacity_scale] {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ConfigError::OpacityOutOfRange(opacity));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert!(EffectConfig::classic().validate().is_ok());
        assert!(EffectConfig::enhanced().validate().is_ok());
        assert_eq!(EffectConfig::default(), EffectConfig::classic());
    }

    #[test]
    fn rejects_zero_radius_and_non_finite_values() {
        let cfg = EffectConfig {
            reveal_radius_px: 0.0,
            ..EffectConfig::classic()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotPositive { field: "reveal_radius_px", .. })
        ));

        let cfg = EffectConfig {
            max_rotation_deg: f64::NAN,
            ..EffectConfig::classic()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotFinite { field: "max_rotation_deg", .. })
        ));
    }

    #[test]
    fn rejects_huge_rotation_and_lengths() {
        let cfg = EffectConfig {
            max_rotation_deg: 1e308,
            ..EffectConfig::classic()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TooLarge { field: "max_rotation_deg", .. })
        ));

        let cfg = EffectConfig {
            max_rotation_deg: MAX_ROTATION_LIMIT_DEG,
            ..EffectConfig::classic()
        };
        assert!(cfg.validate().is_ok());

        let cfg = EffectConfig {
            base_depth_px: -1e12,
            ..EffectConfig::enhanced()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TooLarge { field: "base_depth_px", .. })
        ));

        let cfg = EffectConfig {
            translate_scale_px: 1e300,
            ..EffectConfig::classic()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TooLarge { field: "translate_scale_px", .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_shadow_opacity() {
        let mut cfg = EffectConfig::enhanced();
        cfg.shadow.min_opacity = 1.5;
        assert_eq!(cfg.validate(), Err(ConfigError::OpacityOutOfRange(1.5)));
    }

    #[test]
    fn parses_mode_and_edge_names() {
        assert_eq!(EffectMode::parse(" Enhanced "), Some(EffectMode::Enhanced));
        assert_eq!(EffectMode::parse("classic"), Some(EffectMode::Basic));
        assert_eq!(EffectMode::parse("3d"), None);
        assert_eq!(MaskEdge::parse("SOFT"), Some(MaskEdge::Soft));
        assert_eq!(MaskEdge::parse("feathered"), None);
    }
}
