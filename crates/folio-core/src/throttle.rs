//! Throttle: run an action at most once per interval, keeping the last call.

use crate::clock::Clock;
use crate::error::{non_negative_ms, Error, Result};
use crate::scheduler::{Scheduler, TimerHandle};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

struct Inner<A> {
    interval_ms: f64,
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn Scheduler>,
    action: RefCell<Box<dyn FnMut(A)>>,
    last_execution: Cell<Option<f64>>,
    pending: Cell<Option<TimerHandle>>,
    pending_args: RefCell<Option<A>>,
    running: Cell<bool>,
    reentrant: RefCell<VecDeque<A>>,
}

impl<A> Inner<A> {
    fn execute(&self, args: A) {
        self.last_execution.set(Some(self.clock.now_ms()));
        if self.running.replace(true) {
            // called from inside the action: run once the outer call returns
            log::debug!("[throttle] re-entrant call queued");
            self.reentrant.borrow_mut().push_back(args);
            return;
        }
        let mut next = Some(args);
        while let Some(args) = next {
            (*self.action.borrow_mut())(args);
            next = self.reentrant.borrow_mut().pop_front();
            if next.is_some() {
                self.last_execution.set(Some(self.clock.now_ms()));
            }
        }
        self.running.set(false);
    }

    fn fire_pending(&self) {
        self.pending.set(None);
        let args = self.pending_args.borrow_mut().take();
        if let Some(args) = args {
            self.execute(args);
        }
    }
}

/// Shared handle to a throttled action. Clones drive the same limiter.
///
/// A call outside the current window runs immediately. A call inside it
/// replaces whatever call was waiting and is run once the window closes, so
/// the latest arguments always win and nothing runs twice. The window's
/// deadline only moves when the action runs, so one timer covers a burst.
pub struct RateLimiter<A> {
    inner: Rc<Inner<A>>,
}

impl<A> Clone for RateLimiter<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: 'static> RateLimiter<A> {
    pub fn new(
        interval_ms: f64,
        clock: Rc<dyn Clock>,
        scheduler: Rc<dyn Scheduler>,
        action: impl FnMut(A) + 'static,
    ) -> Result<Self> {
        if !non_negative_ms(interval_ms) {
            return Err(Error::InvalidInterval(interval_ms));
        }
        Ok(Self {
            inner: Rc::new(Inner {
                interval_ms,
                clock,
                scheduler,
                action: RefCell::new(Box::new(action)),
                last_execution: Cell::new(None),
                pending: Cell::new(None),
                pending_args: RefCell::new(None),
                running: Cell::new(false),
                reentrant: RefCell::new(VecDeque::new()),
            }),
        })
    }

    pub fn interval_ms(&self) -> f64 {
        self.inner.interval_ms
    }

    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let now = inner.clock.now_ms();
        let elapsed = inner.last_execution.get().map(|last| now - last);
        let wait = match elapsed {
            Some(elapsed) if elapsed < inner.interval_ms => inner.interval_ms - elapsed,
            _ => {
                self.cancel_pending();
                inner.execute(args);
                return;
            }
        };

        *inner.pending_args.borrow_mut() = Some(args);
        if inner.pending.get().is_some() {
            return;
        }
        let weak: Weak<Inner<A>> = Rc::downgrade(inner);
        let handle = inner.scheduler.schedule_after(
            wait,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.fire_pending();
                }
            }),
        );
        inner.pending.set(Some(handle));
    }

    /// Whether a trailing call is waiting for the window to close.
    pub fn has_pending(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    /// Drop the waiting trailing call, if any.
    pub fn cancel_pending(&self) {
        if let Some(handle) = self.inner.pending.take() {
            self.inner.scheduler.cancel(handle);
        }
        self.inner.pending_args.borrow_mut().take();
    }
}
