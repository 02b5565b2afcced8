//! Browser implementations of the core clock and scheduler.

use folio_core::{Clock, FrameHandle, FrameTask, Scheduler, Task, TimerHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `performance.now()`, falling back to `Date.now()` when unavailable.
pub struct WebClock {
    performance: Option<web::Performance>,
}

impl WebClock {
    pub fn new(window: &web::Window) -> Self {
        Self {
            performance: window.performance(),
        }
    }
}

impl Clock for WebClock {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        }
    }
}

/// `setTimeout` / `clearTimeout` / `requestAnimationFrame`.
///
/// Callbacks are handed to JS as one-shot closures that free themselves when
/// they run. A cancelled timer's closure is never called and stays alive, so
/// callers keep one timer per window rather than cancelling and rescheduling.
pub struct WebScheduler {
    window: web::Window,
}

impl WebScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Scheduler for WebScheduler {
    fn schedule_after(&self, delay_ms: f64, task: Task) -> TimerHandle {
        let callback = Closure::once_into_js(move || task());
        let timeout = delay_ms.max(0.0).round().min(i32::MAX as f64) as i32;
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                timeout,
            ) {
            Ok(id) => TimerHandle::from_raw(id as u64),
            Err(e) => {
                log::error!("[host] setTimeout failed: {:?}", e);
                TimerHandle::from_raw(0)
            }
        }
    }

    fn cancel(&self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle.raw() as i32);
    }

    fn schedule_next_frame(&self, task: FrameTask) -> FrameHandle {
        let callback = Closure::once_into_js(move |ts: f64| task(ts));
        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(id) => FrameHandle::from_raw(id as u64),
            Err(e) => {
                log::error!("[host] requestAnimationFrame failed: {:?}", e);
                FrameHandle::from_raw(0)
            }
        }
    }
}
