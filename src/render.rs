use anyhow::anyhow;
use arc_core::{ArcShape, RenderSurface};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{ARC_START_ANGLE, RING_INNER_FRACTION};

/// `RenderSurface` over a 2D canvas context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    // The hole is painted in whatever the frame was last cleared to.
    background: String,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            background: String::new(),
        })
    }

    #[allow(deprecated)]
    fn set_fill(&self, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
    }

    fn fill_circle_sector(&self, cx: f64, cy: f64, r: f64, start: f64, end: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(cx, cy);
        if let Err(e) = self.ctx.arc(cx, cy, r, start, end) {
            log::error!("arc error: {:?}", e);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self, color: &str) {
        self.background.clear();
        self.background.push_str(color);
        self.set_fill(color);
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn draw_effect_shape(&mut self, shape: &ArcShape, color: &str) {
        let cx = shape.center.x as f64;
        let cy = shape.center.y as f64;
        let r = shape.base_radius as f64;
        let sweep = (shape.sweep_fraction as f64).clamp(0.0, 1.0);
        if r <= 0.0 || sweep >= 1.0 {
            return;
        }
        self.set_fill(color);
        self.fill_circle_sector(cx, cy, r, ARC_START_ANGLE + TAU * sweep, ARC_START_ANGLE + TAU);

        let hole = r * RING_INNER_FRACTION * (shape.clear_fraction as f64).clamp(0.0, 1.0);
        if hole > 0.0 {
            self.set_fill(&self.background);
            self.fill_circle_sector(cx, cy, hole, 0.0, TAU);
        }
    }
}
