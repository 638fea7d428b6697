use crate::attrs::PresentationOptions;
use crate::constants::{IMAGE_LAYER_ID, IMAGE_ROLE, MASK_LAYER_ID, MASK_ROLE};
use crate::dom;
use crate::style::{self, StyleBatch, TransformFormat};
use reveal_core::{EngineError, Frame, PresentationSink};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Layers {
    pub image: web::HtmlElement,
    pub mask: web::HtmlElement,
}

/// Writes frames into the image and mask layers of one container.
///
/// Layers are looked up on every frame; if either is missing the frame is
/// refused with `NotReady` and nothing is written.
pub struct DomSink {
    document: web::Document,
    container: web::Element,
    format: TransformFormat,
}

impl DomSink {
    pub fn new(document: web::Document, container: web::Element, format: TransformFormat) -> Self {
        Self {
            document,
            container,
            format,
        }
    }

    pub fn layers(&self) -> Result<Layers, EngineError> {
        let image = dom::find_layer(&self.document, &self.container, IMAGE_ROLE, IMAGE_LAYER_ID)
            .ok_or(EngineError::NotReady("image"))?;
        let mask = dom::find_layer(&self.document, &self.container, MASK_ROLE, MASK_LAYER_ID)
            .ok_or(EngineError::NotReady("mask"))?;
        Ok(Layers { image, mask })
    }

    /// One-time 3D context and easing for a freshly mounted container.
    pub fn prepare(&self, layers: &Layers, options: &PresentationOptions, with_shadow: bool) {
        if let Some(container) = self.container.dyn_ref::<web::HtmlElement>() {
            let mut batch = StyleBatch::new();
            batch.push(("perspective", format!("{}px", style::num(options.perspective_px))));
            dom::set_styles(container, batch);
        }
        let mut batch = StyleBatch::new();
        batch.push(("transform-style", "preserve-3d".to_string()));
        batch.push((
            "transition",
            style::transition_css(options.transition_ms, with_shadow),
        ));
        dom::set_styles(&layers.image, batch);
    }
}

impl PresentationSink for DomSink {
    fn apply(&mut self, frame: &Frame) -> Result<(), EngineError> {
        let layers = self.layers()?;
        dom::set_styles(&layers.mask, style::mask_styles(&frame.mask));
        dom::set_styles(&layers.image, style::image_styles(&frame.transform, self.format));
        Ok(())
    }
}
