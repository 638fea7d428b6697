#![cfg(target_arch = "wasm32")]
use crate::constants::{ATTR_IMAGE_SRC, CONTAINER_ID, IMAGE_LAYER_ID, IMAGE_ROLE, MOUNTED_ATTR};
use reveal_core::RevealSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod attrs;
mod constants;
mod dom;
mod events;
mod image;
mod layer;
mod sink;
mod style;
mod viewport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reveal-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::when_dom_ready(&document, auto_mount);
    Ok(())
}

/// Mounts the default container if the page has one. Pages with other ids
/// call `mount` themselves.
fn auto_mount() {
    let Some(document) = dom::window_document() else {
        return;
    };
    if document.get_element_by_id(CONTAINER_ID).is_none() {
        log::info!("no #{} on page; waiting for mount()", CONTAINER_ID);
        return;
    }
    if let Err(e) = mount_container(&document, CONTAINER_ID) {
        log::error!("mount error: {:#}", e);
    }
}

/// Attaches the reveal effect to `#container_id`. Fails if the container or
/// either layer is missing; call again once they exist.
#[wasm_bindgen]
pub fn mount(container_id: &str) -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    mount_container(&document, container_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Decodes `uri` and paints it on the image layer of `#container_id`.
#[wasm_bindgen]
pub fn set_image_source(container_id: &str, uri: &str) -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", container_id)))?;
    let layer = dom::find_layer(&document, &container, IMAGE_ROLE, IMAGE_LAYER_ID)
        .ok_or_else(|| JsValue::from_str("image layer not found"))?;
    image::spawn_load(layer, uri.to_string());
    Ok(())
}

fn mount_container(document: &web::Document, container_id: &str) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;
    if container.has_attribute(MOUNTED_ATTR) {
        log::warn!("[mount] #{} already mounted", container_id);
        return Ok(());
    }

    let attr = |name: &str| container.get_attribute(name);
    let config = attrs::read_effect_config(&attr);
    let options = attrs::read_presentation_options(&attr);

    let sink = sink::DomSink::new(
        document.clone(),
        container.clone(),
        options.transform_format,
    );
    let layers = sink
        .layers()
        .map_err(|e| anyhow::anyhow!("#{}: {}", container_id, e))?;
    sink.prepare(&layers, &options, config.is_enhanced());

    // Initial frame: mask disabled (image hidden) and the neutral pose.
    let mut session = RevealSession::new(config, sink);
    session.refresh();

    events::wire_pointer_handlers(events::PointerWiring {
        container: container.clone(),
        session: Rc::new(RefCell::new(session)),
    });
    container
        .set_attribute(MOUNTED_ATTR, "1")
        .map_err(dom::js_err)?;

    if let Some(src) = container.get_attribute(ATTR_IMAGE_SRC) {
        image::spawn_load(layers.image.clone(), src);
    }

    log::info!(
        "[mount] #{} mode={} radius={}px max_rotation={}deg edge={:?}",
        container_id,
        config.mode.as_str(),
        config.reveal_radius_px,
        config.max_rotation_deg,
        config.mask_edge
    );
    Ok(())
}
