//! Exponential smoothing toward a moving target, one step per frame.

use crate::error::{Error, Result};
use crate::scheduler::Scheduler;
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

struct Inner {
    smoothing: f64,
    scheduler: Rc<dyn Scheduler>,
    target: Cell<DVec2>,
    current: Cell<DVec2>,
    running: Cell<bool>,
    // bumped on every start so a frame queued by an earlier loop dies quietly
    generation: Cell<u64>,
    sink: RefCell<Box<dyn FnMut(DVec2)>>,
}

/// Cursor-glow style follower: `current += (target - current) * smoothing`.
///
/// `set_target` is cheap and may be called from any input handler; the frame
/// loop started by `start` is the only writer of the current position.
#[derive(Clone)]
pub struct SmoothFollower {
    inner: Rc<Inner>,
}

impl SmoothFollower {
    pub fn new(
        smoothing: f64,
        scheduler: Rc<dyn Scheduler>,
        sink: impl FnMut(DVec2) + 'static,
    ) -> Result<Self> {
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(Error::InvalidSmoothing(smoothing));
        }
        Ok(Self {
            inner: Rc::new(Inner {
                smoothing,
                scheduler,
                target: Cell::new(DVec2::ZERO),
                current: Cell::new(DVec2::ZERO),
                running: Cell::new(false),
                generation: Cell::new(0),
                sink: RefCell::new(Box::new(sink)),
            }),
        })
    }

    pub fn set_target(&self, x: f64, y: f64) {
        self.inner.target.set(DVec2::new(x, y));
    }

    /// Place both the target and the current position, e.g. on first hover.
    pub fn jump_to(&self, x: f64, y: f64) {
        let p = DVec2::new(x, y);
        self.inner.target.set(p);
        self.inner.current.set(p);
    }

    pub fn target(&self) -> DVec2 {
        self.inner.target.get()
    }

    pub fn position(&self) -> DVec2 {
        self.inner.current.get()
    }

    pub fn smoothing(&self) -> f64 {
        self.inner.smoothing
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// One smoothing step; reports the new position to the sink.
    pub fn step(&self) -> DVec2 {
        Self::step_inner(&self.inner)
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        log::debug!("[follower] loop {generation} started");
        Self::request_frame(Rc::downgrade(&self.inner), generation);
    }

    /// End the frame loop. The frame already requested becomes a no-op.
    pub fn stop(&self) {
        if self.inner.running.replace(false) {
            log::debug!("[follower] loop {} stopped", self.inner.generation.get());
        }
    }

    fn step_inner(inner: &Inner) -> DVec2 {
        let current = inner.current.get();
        let next = current + (inner.target.get() - current) * inner.smoothing;
        inner.current.set(next);
        match inner.sink.try_borrow_mut() {
            Ok(mut sink) => (*sink)(next),
            Err(_) => log::warn!("[follower] re-entrant step, sink skipped"),
        }
        next
    }

    fn request_frame(weak: Weak<Inner>, generation: u64) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        inner.scheduler.schedule_next_frame(Box::new(move |_ts: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.running.get() || inner.generation.get() != generation {
                return;
            }
            Self::step_inner(&inner);
            drop(inner);
            Self::request_frame(weak, generation);
        }));
    }
}
