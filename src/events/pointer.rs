use crate::sink::DomSink;
use crate::viewport::{self, ElementViewport};
use reveal_core::RevealSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedSession = Rc<RefCell<RevealSession<DomSink>>>;

#[derive(Clone)]
pub struct PointerWiring {
    pub container: web::Element,
    pub session: SharedSession,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let host = ElementViewport::new(w.container.clone());

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let sample = viewport::pointer_local(&ev, &w.container);
        w.session.borrow_mut().pointer_moved(sample, &host);
    }) as Box<dyn FnMut(_)>);

    if let Err(e) = w
        .container
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
    {
        log::error!("[pointer] pointermove listener: {:?}", e);
    }

    closure.forget();
}

fn wire_pointerleave(w: &PointerWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.session.borrow_mut().pointer_left();
        log::debug!("[pointer] left container");
    }) as Box<dyn FnMut(_)>);

    if let Err(e) = w
        .container
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref())
    {
        log::error!("[pointer] pointerleave listener: {:?}", e);
    }

    closure.forget();
}
