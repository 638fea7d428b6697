use crate::constants::LAYER_ATTR;
use crate::layer;
use crate::style::StyleBatch;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Runs `handler` once the document has parsed, or right away if it already has.
pub fn when_dom_ready(document: &web::Document, handler: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        handler();
        return;
    }
    let callback = Closure::once_into_js(handler);
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        log::error!("[dom] DOMContentLoaded listener: {:?}", e);
    }
}

/// Layer inside `container` tagged with `data-reveal-layer=role`, else
/// `#fallback_id` when that element is a descendant of `container`.
pub fn find_layer(
    document: &web::Document,
    container: &web::Element,
    role: &str,
    fallback_id: &str,
) -> Option<web::HtmlElement> {
    let selector = format!("[{}=\"{}\"]", LAYER_ATTR, role);
    let tagged = container.query_selector(&selector).ok().flatten();
    let by_id = document.get_element_by_id(fallback_id);
    layer::pick_layer(tagged, by_id, |el| {
        let node: &web::Node = el;
        el != container && container.contains(Some(node))
    })
    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn set_styles(el: &web::HtmlElement, batch: StyleBatch) {
    let style = el.style();
    for (property, value) in batch {
        if let Err(e) = style.set_property(property, &value) {
            log::warn!("[dom] set {}: {:?}", property, e);
        }
    }
}
