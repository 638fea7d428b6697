use crate::dom::{self, js_err};
use crate::style::{self, StyleBatch};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Decodes `uri` off-screen, then paints it as the layer's background.
///
/// The layer is left untouched if the image cannot be decoded.
pub async fn load_into(layer: &web::HtmlElement, uri: &str) -> anyhow::Result<()> {
    let img = web::HtmlImageElement::new().map_err(js_err)?;
    img.set_src(uri);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("image decode failed: {:?}", e))?;

    let mut batch = StyleBatch::new();
    batch.push(("background-image", style::background_image_css(uri)));
    dom::set_styles(layer, batch);
    log::info!(
        "[image] painted {}x{} image",
        img.natural_width(),
        img.natural_height()
    );
    Ok(())
}

pub fn spawn_load(layer: web::HtmlElement, uri: String) {
    spawn_local(async move {
        if let Err(e) = load_into(&layer, &uri).await {
            log::error!("[image] {:#}", e);
        }
    });
}
