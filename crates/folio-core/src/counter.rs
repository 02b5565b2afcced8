//! Eased numeric animation sampled once per display frame.

use crate::easing::ease_out_quad;
use crate::error::{non_negative_ms, Error, Result};
use crate::scheduler::Scheduler;
use std::cell::Cell;
use std::rc::Rc;

/// What a single frame of a counter animation should show.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterSample {
    /// Intermediate value, already floored.
    Running(f64),
    /// The exact end value; the animation is over.
    Done(f64),
}

/// Start/end/duration of one counter run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterSpec {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
}

impl CounterSpec {
    pub fn new(start: f64, end: f64, duration_ms: f64) -> Result<Self> {
        if !non_negative_ms(duration_ms) {
            return Err(Error::InvalidDuration(duration_ms));
        }
        Ok(Self {
            start,
            end,
            duration_ms,
        })
    }

    pub fn sample(&self, elapsed_ms: f64) -> CounterSample {
        if self.duration_ms <= 0.0 {
            return CounterSample::Done(self.end);
        }
        let progress = elapsed_ms / self.duration_ms;
        if progress < 1.0 {
            let eased = ease_out_quad(progress.max(0.0));
            CounterSample::Running((self.start + (self.end - self.start) * eased).floor())
        } else {
            CounterSample::Done(self.end)
        }
    }
}

/// Handle to an in-flight animation. Dropping it does not stop the run.
#[derive(Clone, Debug, Default)]
pub struct AnimationHandle {
    cancelled: Rc<Cell<bool>>,
    finished: Rc<Cell<bool>>,
}

impl AnimationHandle {
    /// Stop at the next frame: no further samples, no completion callback.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// True once the run completed or observed its cancellation.
    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }
}

struct Run {
    spec: CounterSpec,
    started_at: Option<f64>,
    on_sample: Box<dyn FnMut(f64)>,
    on_complete: Box<dyn FnOnce()>,
    handle: AnimationHandle,
}

impl Run {
    fn step(mut self, scheduler: Rc<dyn Scheduler>, frame_ms: f64) {
        if self.handle.is_cancelled() {
            log::debug!("[counter] cancelled before reaching {}", self.spec.end);
            self.handle.finished.set(true);
            return;
        }
        let started_at = *self.started_at.get_or_insert(frame_ms);
        match self.spec.sample(frame_ms - started_at) {
            CounterSample::Running(value) => {
                (self.on_sample)(value);
                let next = scheduler.clone();
                scheduler.schedule_next_frame(Box::new(move |ts: f64| self.step(next, ts)));
            }
            CounterSample::Done(value) => self.finish(value),
        }
    }

    fn finish(mut self, value: f64) {
        (self.on_sample)(value);
        self.handle.finished.set(true);
        (self.on_complete)();
    }
}

/// Drives [`CounterSpec`] runs off the injected frame scheduler.
#[derive(Clone)]
pub struct FrameAnimator {
    scheduler: Rc<dyn Scheduler>,
}

impl FrameAnimator {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self { scheduler }
    }

    /// Animate from `start` to `end` over `duration_ms` with ease-out.
    ///
    /// `on_sample` gets a floored value every frame and finally the exact
    /// `end`, after which `on_complete` runs. A zero duration delivers the
    /// final sample synchronously without touching the scheduler.
    pub fn animate(
        &self,
        start: f64,
        end: f64,
        duration_ms: f64,
        on_sample: impl FnMut(f64) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> Result<AnimationHandle> {
        let spec = CounterSpec::new(start, end, duration_ms)?;
        let handle = AnimationHandle::default();
        let run = Run {
            spec,
            started_at: None,
            on_sample: Box::new(on_sample),
            on_complete: Box::new(on_complete),
            handle: handle.clone(),
        };
        if spec.duration_ms == 0.0 {
            run.finish(spec.end);
            return Ok(handle);
        }
        let scheduler = self.scheduler.clone();
        self.scheduler
            .schedule_next_frame(Box::new(move |ts: f64| run.step(scheduler, ts)));
        Ok(handle)
    }
}
