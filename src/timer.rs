use arc_core::TickTimer;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `TickTimer` backed by `setInterval`. Holds at most one interval handle.
pub struct IntervalTimer {
    interval_ms: i32,
    handle: Option<i32>,
    callback: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    pub fn new(interval: Duration, tick: impl FnMut() + 'static) -> Self {
        let interval_ms = interval.as_millis().clamp(1, i32::MAX as u128) as i32;
        Self {
            interval_ms,
            handle: None,
            callback: Closure::wrap(Box::new(tick) as Box<dyn FnMut()>),
        }
    }
}

impl TickTimer for IntervalTimer {
    fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let Some(window) = web::window() else {
            log::error!("[timer] no window; cannot start");
            return;
        };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            self.interval_ms,
        ) {
            Ok(handle) => {
                self.handle = Some(handle);
                log::debug!("[timer] start every {}ms", self.interval_ms);
            }
            Err(e) => log::error!("setInterval error: {:?}", e),
        }
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_interval_with_handle(handle);
            }
            log::debug!("[timer] stop");
        }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
