#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use arc_core::{EffectConfig, EffectController, TickOutcome, TriggerOutcome, Viewport};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod input;
mod render;
mod timer;

use constants::CANVAS_ID;
use render::CanvasSurface;
use timer::IntervalTimer;

/// Everything the browser callbacks share: the controller and the canvas it
/// draws into.
pub(crate) struct App {
    controller: EffectController<IntervalTimer>,
    surface: CanvasSurface,
}

impl App {
    fn tick(&mut self) {
        if self.controller.tick(&mut self.surface) == TickOutcome::CollectionEmptied {
            log::info!("[effect] all nodes finished; timer stopped");
        }
    }

    pub(crate) fn trigger(&mut self, pos: Vec2) {
        match self.controller.handle_trigger(pos.x, pos.y) {
            TriggerOutcome::TimerStarted(id) => {
                log::info!("[effect] {:?} at ({:.0},{:.0}); timer started", id, pos.x, pos.y)
            }
            TriggerOutcome::Added(id) => {
                log::debug!("[effect] {:?} at ({:.0},{:.0})", id, pos.x, pos.y)
            }
        }
    }

    pub(crate) fn resize(&mut self, viewport: Viewport) {
        self.controller.set_viewport(viewport);
        self.render();
    }

    fn render(&mut self) {
        self.controller.render(&mut self.surface);
    }
}

fn load_config(canvas: &web_sys::HtmlCanvasElement) -> EffectConfig {
    let overrides = dom::config_overrides(canvas);
    let defaults = EffectConfig::default();
    match defaults.with_overrides(overrides.iter().map(|(k, v)| (*k, v.as_str()))) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("ignoring canvas config: {}", e);
            defaults
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("arc-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    dom::sync_canvas_backing_size(&canvas);

    let config = load_config(&canvas);
    let surface = CanvasSurface::new(&canvas)?;
    let viewport = dom::canvas_viewport(&canvas);
    log::info!(
        "[effect] viewport={}x{} step={} interval={:?}",
        viewport.width,
        viewport.height,
        config.step,
        config.tick_interval
    );

    // The timer callback only holds a weak handle so the controller, which
    // owns the timer, is not kept alive by it.
    let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
        let weak = weak.clone();
        let timer = IntervalTimer::new(config.tick_interval, move || {
            if let Some(app) = weak.upgrade() {
                app.borrow_mut().tick();
            }
        });
        RefCell::new(App {
            controller: EffectController::new(config, viewport, timer),
            surface,
        })
    });

    events::wire_pointerdown(&canvas, &app);
    events::wire_resize(&canvas, &app);
    app.borrow_mut().render();
    Ok(())
}
