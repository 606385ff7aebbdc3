use anyhow::anyhow;
use arc_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CONFIG_ATTRIBUTES;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(canvas.width() as f32, canvas.height() as f32)
}

/// Config overrides present as `data-*` attributes on the canvas.
pub fn config_overrides(canvas: &web::HtmlCanvasElement) -> Vec<(&'static str, String)> {
    CONFIG_ATTRIBUTES
        .iter()
        .filter_map(|(attr, key)| canvas.get_attribute(attr).map(|v| (*key, v)))
        .collect()
}
