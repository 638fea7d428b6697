// Default tuning shared by the engine presets and the web front-end.

// Tilt and parallax
pub const DEFAULT_MAX_ROTATION_DEG: f64 = 10.0; // tilt at the viewport edge
pub const DEFAULT_TRANSLATE_SCALE_PX: f64 = 20.0; // parallax shift at the viewport edge

// Upper bounds accepted by EffectConfig::validate
pub const MAX_ROTATION_LIMIT_DEG: f64 = 90.0;
pub const MAX_LENGTH_LIMIT_PX: f64 = 10_000.0;

// Reveal mask
pub const DEFAULT_REVEAL_RADIUS_PX: f64 = 100.0;
pub const SOFT_EDGE_INNER_FRACTION: f64 = 0.7; // soft edge ramps from 0.7r to r

// Depth (enhanced mode)
pub const DEFAULT_BASE_DEPTH_PX: f64 = 50.0; // resting translateZ
pub const DEFAULT_DEPTH_SCALE_PX: f64 = 30.0; // recession at the diagonal extremes

// Drop shadow (enhanced mode)
pub const SHADOW_OFFSET_SCALE_PX: f64 = 20.0;
pub const SHADOW_MIN_BLUR_PX: f64 = 10.0;
pub const SHADOW_BLUR_SCALE_PX: f64 = 30.0;
pub const SHADOW_MIN_OPACITY: f64 = 0.2;
pub const SHADOW_OPACITY_SCALE: f64 = 0.4;
