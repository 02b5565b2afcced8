// Host-side tests for the deterministic scheduler and clocks.

use folio_core::{Clock, ManualClock, ManualScheduler, Scheduler};
use std::cell::RefCell;
use std::rc::Rc;

fn trace() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

fn push(trace: &Rc<RefCell<Vec<String>>>, label: &str) -> Box<dyn FnOnce()> {
    let trace = trace.clone();
    let label = label.to_string();
    Box::new(move || trace.borrow_mut().push(label))
}

#[test]
fn timers_fire_by_due_time_then_schedule_order() {
    let host = ManualScheduler::new();
    let t = trace();
    host.schedule_after(30.0, push(&t, "c"));
    host.schedule_after(10.0, push(&t, "a1"));
    host.schedule_after(10.0, push(&t, "a2"));
    host.schedule_after(20.0, push(&t, "b"));
    host.advance(100.0);
    assert_eq!(*t.borrow(), vec!["a1", "a2", "b", "c"]);
}

#[test]
fn clock_reads_due_time_inside_a_timer() {
    let host = Rc::new(ManualScheduler::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    for delay in [25.0, 75.0] {
        let seen = seen.clone();
        let clock = host.clock();
        host.schedule_after(delay, Box::new(move || seen.borrow_mut().push(clock.now_ms())));
    }
    host.advance(200.0);
    assert_eq!(*seen.borrow(), vec![25.0, 75.0]);
    assert_eq!(host.now_ms(), 200.0);
}

#[test]
fn cancelled_timer_never_fires() {
    let host = ManualScheduler::new();
    let t = trace();
    let keep = host.schedule_after(5.0, push(&t, "keep"));
    let drop_me = host.schedule_after(5.0, push(&t, "drop"));
    assert_ne!(keep, drop_me);
    host.cancel(drop_me);
    host.cancel(drop_me); // second cancel is a no-op
    host.advance(10.0);
    assert_eq!(*t.borrow(), vec!["keep"]);
    assert!(host.is_idle());
}

#[test]
fn bad_delays_run_as_soon_as_possible() {
    let host = ManualScheduler::new();
    let t = trace();
    host.schedule_after(-10.0, push(&t, "neg"));
    host.schedule_after(f64::NAN, push(&t, "nan"));
    host.advance(0.0);
    assert_eq!(*t.borrow(), vec!["neg", "nan"]);
}

#[test]
fn timers_scheduled_by_timers_fire_within_the_window() {
    let host = Rc::new(ManualScheduler::new());
    let t = trace();
    let inner_host = host.clone();
    let inner_trace = t.clone();
    host.schedule_after(
        10.0,
        Box::new(move || {
            inner_trace.borrow_mut().push("outer".into());
            inner_host.schedule_after(10.0, push(&inner_trace, "inner"));
        }),
    );
    host.advance(15.0);
    assert_eq!(*t.borrow(), vec!["outer"]);
    host.advance(5.0);
    assert_eq!(*t.borrow(), vec!["outer", "inner"]);
}

#[test]
fn frames_requested_during_a_frame_wait_for_the_next() {
    let host = Rc::new(ManualScheduler::new());
    let stamps = Rc::new(RefCell::new(Vec::new()));
    let again = host.clone();
    let s = stamps.clone();
    host.schedule_next_frame(Box::new(move |ts: f64| {
        s.borrow_mut().push(ts);
        let s2 = s.clone();
        again.schedule_next_frame(Box::new(move |ts: f64| s2.borrow_mut().push(ts)));
    }));
    assert_eq!(host.run_frame(), 1);
    assert_eq!(host.pending_frames(), 1);
    assert_eq!(host.run_frame(), 1);
    let interval = host.frame_interval_ms();
    assert_eq!(*stamps.borrow(), vec![interval, 2.0 * interval]);
}

#[test]
fn run_frame_at_uses_host_timestamps() {
    let host = ManualScheduler::new();
    let stamp = Rc::new(RefCell::new(None));
    let s = stamp.clone();
    host.schedule_next_frame(Box::new(move |ts: f64| *s.borrow_mut() = Some(ts)));
    host.run_frame_at(123.5);
    assert_eq!(*stamp.borrow(), Some(123.5));
}

#[test]
fn run_frames_stops_when_idle() {
    let host = ManualScheduler::new();
    host.schedule_next_frame(Box::new(|_: f64| {}));
    assert_eq!(host.run_frames(10), 1);
    assert_eq!(host.run_frames(10), 0);
}

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::new(5.0);
    let other = clock.clone();
    clock.advance(10.0);
    assert_eq!(other.now_ms(), 15.0);
    other.set(1.0);
    assert_eq!(clock.now_ms(), 1.0);

    let host = ManualScheduler::with_clock(clock.clone(), 10.0);
    host.run_frame();
    assert_eq!(clock.now_ms(), 11.0);
}

#[test]
fn time_never_runs_backwards() {
    let host = ManualScheduler::new();
    host.advance(50.0);
    host.advance_to(10.0);
    assert_eq!(host.now_ms(), 50.0);
    host.advance(-5.0);
    assert_eq!(host.now_ms(), 50.0);
}
