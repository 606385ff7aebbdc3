mod pointer;

pub use pointer::wire_pointerdown;

use crate::dom;
use crate::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the backing store and viewport in step with the window size.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        app.borrow_mut().resize(dom::canvas_viewport(&canvas_resize));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
