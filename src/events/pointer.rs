use crate::input;
use crate::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Spawn a node at the press position for every primary-button press.
pub fn wire_pointerdown(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let canvas_for_closure = canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary_button(ev.button()) {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &canvas_for_closure);
        app.borrow_mut().trigger(pos);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
