// CSS values for the mask and image layers.
// Pure string building, no DOM access, so it can be tested on the host.

use crate::constants::{CSS_DECIMALS, MASK_COLOR, SHADOW_RGB};
use reveal_core::{DropShadow, MaskSpec, RadialMask, TransformState};
use smallvec::SmallVec;

/// Property/value pairs applied to one layer in a single pass.
pub type StyleBatch = SmallVec<[(&'static str, String); 4]>;

/// How the image transform is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransformFormat {
    /// `rotateX() rotateY() translate()` functions.
    #[default]
    Functions,
    /// A single `matrix3d()`.
    Matrix,
}

impl TransformFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "functions" | "function" => Some(Self::Functions),
            "matrix" | "matrix3d" => Some(Self::Matrix),
            _ => None,
        }
    }
}

/// Rounds to `CSS_DECIMALS` and prints without trailing zeros; `-0` and
/// non-finite values print as `0`.
pub fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let scale = 10f64.powi(CSS_DECIMALS);
    let scaled = (v * scale).round() / scale;
    let r = if scaled.is_finite() { scaled } else { v };
    if r == 0.0 {
        "0".to_string()
    } else {
        format!("{}", r)
    }
}

pub fn radial_mask_css(m: &RadialMask) -> String {
    format!(
        "radial-gradient(circle {}px at {}px {}px, transparent {}px, transparent {}px, {} {}px)",
        num(m.opaque_after),
        num(m.center_x),
        num(m.center_y),
        num(m.inner_radius),
        num(m.transparent_until),
        MASK_COLOR,
        num(m.opaque_after),
    )
}

pub fn mask_css(mask: &MaskSpec) -> String {
    match mask {
        MaskSpec::Disabled => "none".to_string(),
        MaskSpec::Radial(m) => radial_mask_css(m),
    }
}

pub fn transform_css(t: &TransformState, format: TransformFormat) -> String {
    match format {
        TransformFormat::Functions => {
            let rotate = format!(
                "rotateX({}deg) rotateY({}deg)",
                num(t.rotate_x_deg),
                num(t.rotate_y_deg)
            );
            if t.translate_z_px == 0.0 {
                format!(
                    "{} translate({}px, {}px)",
                    rotate,
                    num(t.translate_x_px),
                    num(t.translate_y_px)
                )
            } else {
                format!(
                    "{} translate3d({}px, {}px, {}px)",
                    rotate,
                    num(t.translate_x_px),
                    num(t.translate_y_px),
                    num(t.translate_z_px)
                )
            }
        }
        TransformFormat::Matrix => {
            let cols: Vec<String> = t
                .to_matrix()
                .to_cols_array()
                .iter()
                .map(|v| num(*v))
                .collect();
            format!("matrix3d({})", cols.join(", "))
        }
    }
}

pub fn shadow_css(shadow: Option<&DropShadow>) -> String {
    match shadow {
        None => "none".to_string(),
        Some(s) => format!(
            "{}px {}px {}px rgba({}, {}, {}, {})",
            num(s.offset_x_px),
            num(s.offset_y_px),
            num(s.blur_px),
            SHADOW_RGB[0],
            SHADOW_RGB[1],
            SHADOW_RGB[2],
            num(s.opacity),
        ),
    }
}

/// `url("...")` with quotes and backslashes escaped and line breaks removed.
pub fn background_image_css(uri: &str) -> String {
    let mut escaped = String::with_capacity(uri.len() + 7);
    escaped.push_str("url(\"");
    for c in uri.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' | '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped.push_str("\")");
    escaped
}

pub fn transition_css(ms: f64, with_shadow: bool) -> String {
    if ms <= 0.0 {
        return "none".to_string();
    }
    if with_shadow {
        format!("transform {0}ms ease-out, box-shadow {0}ms ease-out", num(ms))
    } else {
        format!("transform {}ms ease-out", num(ms))
    }
}

pub fn mask_styles(mask: &MaskSpec) -> StyleBatch {
    let css = mask_css(mask);
    let mut batch = StyleBatch::new();
    batch.push(("-webkit-mask-image", css.clone()));
    batch.push(("mask-image", css));
    batch
}

/// Transform, plus `box-shadow` when the state carries a shadow.
pub fn image_styles(t: &TransformState, format: TransformFormat) -> StyleBatch {
    let mut batch = StyleBatch::new();
    batch.push(("transform", transform_css(t, format)));
    if let Some(shadow) = t.shadow.as_ref() {
        batch.push(("box-shadow", shadow_css(Some(shadow))));
    }
    batch
}
