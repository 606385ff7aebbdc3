use glam::Vec2;
use web_sys as web;

use crate::constants::PRIMARY_BUTTON;

#[inline]
pub fn is_primary_button(button: i16) -> bool {
    button == PRIMARY_BUTTON
}

/// Map a client-space point into canvas backing pixels.
///
/// `rect_origin`/`rect_size` are the canvas CSS box; `canvas_size` is its
/// backing store size. A collapsed box maps 1:1 from its origin.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Vec2 {
    let css = client - rect_origin;
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return css;
    }
    css / rect_size * canvas_size
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
