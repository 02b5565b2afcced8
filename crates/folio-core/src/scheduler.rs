//! Deferred-call and frame-tick primitives, plus a deterministic host.
//!
//! Every component takes an `Rc<dyn Scheduler>` instead of reaching for
//! ambient browser globals. The web front-end implements the trait over
//! `setTimeout`/`requestAnimationFrame`; tests and the native demo use
//! [`ManualScheduler`], which only runs work when explicitly driven.

use crate::clock::{Clock, ManualClock};
use crate::constants::DEFAULT_FRAME_INTERVAL_MS;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};

/// Work run once after a delay.
pub type Task = Box<dyn FnOnce()>;
/// Work run once on the next frame; receives the frame timestamp in ms.
pub type FrameTask = Box<dyn FnOnce(f64)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }
    pub const fn raw(self) -> u64 {
        self.0
    }
}

pub trait Scheduler {
    /// Run `task` once, no earlier than `delay_ms` from now.
    fn schedule_after(&self, delay_ms: f64, task: Task) -> TimerHandle;
    /// Drop a deferred call that has not fired yet. Unknown or already fired
    /// handles are ignored.
    fn cancel(&self, handle: TimerHandle);
    /// Run `task` once before the next display refresh.
    fn schedule_next_frame(&self, task: FrameTask) -> FrameHandle;
}

struct PendingTimer {
    due_ms: f64,
    task: Task,
}

/// Single-threaded scheduler driven by explicit `advance`/`run_frame` calls.
///
/// Timers fire in due-time order (ties in scheduling order) and move the
/// shared [`ManualClock`] to their due time before running. Frame callbacks
/// requested while a frame is running are deferred to the following frame.
pub struct ManualScheduler {
    clock: ManualClock,
    frame_interval_ms: f64,
    next_id: Cell<u64>,
    timers: RefCell<FnvHashMap<u64, PendingTimer>>,
    frames: RefCell<Vec<FrameTask>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::with_clock(ManualClock::new(0.0), DEFAULT_FRAME_INTERVAL_MS)
    }

    pub fn with_clock(clock: ManualClock, frame_interval_ms: f64) -> Self {
        Self {
            clock,
            frame_interval_ms,
            next_id: Cell::new(1),
            timers: RefCell::new(FnvHashMap::default()),
            frames: RefCell::new(Vec::new()),
        }
    }

    /// Handle to the clock this scheduler moves forward.
    pub fn clock(&self) -> ManualClock {
        self.clock.clone()
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending_timers() == 0 && self.pending_frames() == 0
    }

    /// Move time forward by `delta_ms`, firing every timer that comes due.
    pub fn advance(&self, delta_ms: f64) {
        self.advance_to(self.clock.now_ms() + delta_ms.max(0.0));
    }

    /// Move time forward to `target_ms`, firing every timer due at or before it.
    /// Timers scheduled by fired timers are honored if they also fall inside
    /// the window.
    pub fn advance_to(&self, target_ms: f64) {
        while let Some((id, due_ms)) = self.next_due(target_ms) {
            let Some(timer) = self.timers.borrow_mut().remove(&id) else {
                continue;
            };
            if due_ms > self.clock.now_ms() {
                self.clock.set(due_ms);
            }
            (timer.task)();
        }
        if target_ms > self.clock.now_ms() {
            self.clock.set(target_ms);
        }
    }

    /// Advance one frame interval, then run the frame callbacks that were
    /// queued before this call. Returns how many callbacks ran.
    pub fn run_frame(&self) -> usize {
        self.run_frame_at(self.clock.now_ms() + self.frame_interval_ms)
    }

    /// Like [`run_frame`](Self::run_frame) but for a host that keeps its own
    /// frame timestamps, e.g. a real-time loop.
    pub fn run_frame_at(&self, frame_ms: f64) -> usize {
        self.advance_to(frame_ms);
        let batch: SmallVec<[FrameTask; 8]> = self.frames.borrow_mut().drain(..).collect();
        let ts = self.clock.now_ms();
        let ran = batch.len();
        for task in batch {
            task(ts);
        }
        ran
    }

    /// Run up to `count` frames, stopping early once nothing is left to do.
    pub fn run_frames(&self, count: usize) -> usize {
        let mut ran = 0;
        for _ in 0..count {
            if self.is_idle() {
                break;
            }
            self.run_frame();
            ran += 1;
        }
        ran
    }

    fn next_due(&self, target_ms: f64) -> Option<(u64, f64)> {
        self.timers
            .borrow()
            .iter()
            .filter(|(_, t)| t.due_ms <= target_ms)
            .min_by(|(a_id, a), (b_id, b)| {
                a.due_ms
                    .total_cmp(&b.due_ms)
                    .then_with(|| a_id.cmp(b_id))
            })
            .map(|(id, t)| (*id, t.due_ms))
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&self, delay_ms: f64, task: Task) -> TimerHandle {
        // setTimeout semantics: bad delays run as soon as possible
        let delay_ms = if delay_ms.is_finite() { delay_ms.max(0.0) } else { 0.0 };
        let id = self.allocate_id();
        let due_ms = self.clock.now_ms() + delay_ms;
        self.timers
            .borrow_mut()
            .insert(id, PendingTimer { due_ms, task });
        TimerHandle::from_raw(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.timers.borrow_mut().remove(&handle.raw());
    }

    fn schedule_next_frame(&self, task: FrameTask) -> FrameHandle {
        let id = self.allocate_id();
        self.frames.borrow_mut().push(task);
        FrameHandle::from_raw(id)
    }
}
