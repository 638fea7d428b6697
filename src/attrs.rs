// Effect configuration from `data-*` attributes on the container.
// Takes an attribute getter instead of a DOM element so it runs on the host.
// Unparseable values are logged and ignored; a config that fails validation
// falls back to the preset for its mode.

use crate::constants::*;
use crate::style::TransformFormat;
use reveal_core::{EffectConfig, EffectMode, MaskEdge};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationOptions {
    pub transition_ms: f64,
    pub perspective_px: f64,
    pub transform_format: TransformFormat,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            perspective_px: DEFAULT_PERSPECTIVE_PX,
            transform_format: TransformFormat::Functions,
        }
    }
}

/// Parses a number with an optional `px`, `deg` or `ms` unit suffix.
pub fn parse_number(value: &str) -> Option<f64> {
    let v = value.trim();
    let v = ["px", "deg", "ms"]
        .iter()
        .find_map(|unit| v.strip_suffix(unit))
        .unwrap_or(v)
        .trim();
    v.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read<A, T>(attr: &A, name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T>
where
    A: Fn(&str) -> Option<String>,
{
    let raw = attr(name)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        log::warn!("[config] ignoring {}=\"{}\"", name, raw);
    }
    parsed
}

pub fn read_effect_config<A>(attr: &A) -> EffectConfig
where
    A: Fn(&str) -> Option<String>,
{
    let mode = read(attr, ATTR_MODE, EffectMode::parse).unwrap_or_default();
    let preset = EffectConfig::preset(mode);
    let mut cfg = preset;

    for (name, slot) in [
        (ATTR_MAX_ROTATION, &mut cfg.max_rotation_deg),
        (ATTR_REVEAL_RADIUS, &mut cfg.reveal_radius_px),
        (ATTR_TRANSLATE_SCALE, &mut cfg.translate_scale_px),
        (ATTR_DEPTH_SCALE, &mut cfg.depth_scale_px),
        (ATTR_BASE_DEPTH, &mut cfg.base_depth_px),
    ] {
        if let Some(v) = read(attr, name, parse_number) {
            *slot = v;
        }
    }
    if let Some(edge) = read(attr, ATTR_MASK_EDGE, MaskEdge::parse) {
        cfg.mask_edge = edge;
    }
    if let Some(clamp) = read(attr, ATTR_CLAMP_POINTER, parse_bool) {
        cfg.clamp_pointer = clamp;
    }

    match cfg.validate() {
        Ok(()) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using {} preset", e, mode.as_str());
            preset
        }
    }
}

pub fn read_presentation_options<A>(attr: &A) -> PresentationOptions
where
    A: Fn(&str) -> Option<String>,
{
    let mut opts = PresentationOptions::default();
    if let Some(ms) = read(attr, ATTR_TRANSITION_MS, parse_number) {
        opts.transition_ms = ms.max(0.0);
    }
    if let Some(px) = read(attr, ATTR_PERSPECTIVE, parse_number).filter(|px| *px > 0.0) {
        opts.perspective_px = px;
    }
    if let Some(format) = read(attr, ATTR_TRANSFORM_FORMAT, TransformFormat::parse) {
        opts.transform_format = format;
    }
    opts
}
