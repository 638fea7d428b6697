use reveal_core::{PointerSample, ViewportGeometry, ViewportHost};
use web_sys as web;

/// Viewport backed by a DOM element's bounding box, read on every query.
pub struct ElementViewport {
    el: web::Element,
}

impl ElementViewport {
    pub fn new(el: web::Element) -> Self {
        Self { el }
    }
}

impl ViewportHost for ElementViewport {
    fn geometry(&self) -> ViewportGeometry {
        let rect = self.el.get_bounding_client_rect();
        ViewportGeometry::new(rect.width(), rect.height())
    }
}

/// Pointer position relative to the element's top-left corner, in CSS pixels.
#[inline]
pub fn pointer_local(ev: &web::MouseEvent, el: &web::Element) -> PointerSample {
    let rect = el.get_bounding_client_rect();
    PointerSample::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}
