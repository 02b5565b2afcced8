// Host-side tests for the cursor-glow follower.

use folio_core::{Error, ManualScheduler, SmoothFollower, GLOW_SMOOTHING};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn follower() -> (Rc<ManualScheduler>, SmoothFollower, Rc<Cell<usize>>) {
    let host = Rc::new(ManualScheduler::new());
    let steps = Rc::new(Cell::new(0));
    let sink = steps.clone();
    let f = SmoothFollower::new(GLOW_SMOOTHING, host.clone(), move |_| {
        sink.set(sink.get() + 1);
    })
    .unwrap();
    (host, f, steps)
}

#[test]
fn gap_shrinks_geometrically() {
    let (_host, f, _) = follower();
    f.set_target(10.0, 10.0);
    for k in 1..=50 {
        let p = f.step();
        let expected = 10.0 * 0.85_f64.powi(k);
        assert!((10.0 - p.x - expected).abs() < 1e-9, "x gap at step {k}");
        assert!((10.0 - p.y - expected).abs() < 1e-9, "y gap at step {k}");
    }
}

#[test]
fn converges_below_a_thousandth() {
    let (_host, f, _) = follower();
    f.set_target(10.0, 10.0);
    for _ in 0..57 {
        f.step();
    }
    let gap = f.target() - f.position();
    assert!(gap.x.abs() < 0.001 && gap.y.abs() < 0.001, "gap {gap:?}");
}

#[test]
fn never_overshoots_a_fixed_target() {
    let (_host, f, _) = follower();
    f.set_target(-40.0, 25.0);
    let mut prev = f.position();
    for _ in 0..200 {
        let p = f.step();
        assert!(p.x <= prev.x && p.x >= -40.0);
        assert!(p.y >= prev.y && p.y <= 25.0);
        prev = p;
    }
}

#[test]
fn frame_loop_steps_once_per_frame_until_stopped() {
    let (host, f, steps) = follower();
    f.set_target(100.0, 0.0);
    f.start();
    assert!(f.is_running());
    assert_eq!(host.pending_frames(), 1);

    for _ in 0..5 {
        host.run_frame();
    }
    assert_eq!(steps.get(), 5);

    f.stop();
    assert!(!f.is_running());
    host.run_frames(10);
    assert_eq!(steps.get(), 5, "no step after stop");
    assert!(host.is_idle());
}

#[test]
fn restart_within_a_frame_runs_a_single_loop() {
    let (host, f, steps) = follower();
    f.start();
    f.stop();
    f.start();
    f.start();
    host.run_frame();
    assert_eq!(steps.get(), 1);
    host.run_frame();
    assert_eq!(steps.get(), 2);
    assert_eq!(host.pending_frames(), 1);
}

#[test]
fn retargeting_mid_flight_changes_direction() {
    let (host, f, _) = follower();
    f.set_target(100.0, 0.0);
    f.start();
    host.run_frames(3);
    let x = f.position().x;
    assert!(x > 0.0);
    f.set_target(0.0, 0.0);
    host.run_frame();
    assert!(f.position().x < x);
}

#[test]
fn jump_to_places_current_and_target() {
    let (_host, f, _) = follower();
    f.jump_to(3.0, 4.0);
    assert_eq!(f.position(), f.target());
    let p = f.step();
    assert_eq!((p.x, p.y), (3.0, 4.0));
}

#[test]
fn dropping_every_handle_ends_the_loop() {
    let (host, f, steps) = follower();
    f.start();
    drop(f);
    host.run_frames(5);
    assert_eq!(steps.get(), 0);
    assert!(host.is_idle());
}

#[test]
fn smoothing_outside_unit_interval_is_rejected() {
    let host = Rc::new(ManualScheduler::new());
    for bad in [0.0, -0.1, 1.5, f64::NAN] {
        let result = SmoothFollower::new(bad, host.clone(), |_| {});
        assert!(matches!(result, Err(Error::InvalidSmoothing(_))), "{bad}");
    }
    assert!(SmoothFollower::new(1.0, host, |_| {}).is_ok());
}

#[test]
fn step_from_inside_the_sink_moves_without_reporting_twice() {
    let host = Rc::new(ManualScheduler::new());
    let reported = Rc::new(Cell::new(0));
    let slot: Rc<RefCell<Option<SmoothFollower>>> = Rc::new(RefCell::new(None));
    let sink = reported.clone();
    let again = slot.clone();
    let f = SmoothFollower::new(0.5, host, move |_| {
        sink.set(sink.get() + 1);
        if let Some(f) = again.borrow().as_ref() {
            f.step();
        }
    })
    .unwrap();
    *slot.borrow_mut() = Some(f.clone());

    f.set_target(8.0, 0.0);
    f.step();
    // outer step to 4, nested step to 6; only the outer one reaches the sink
    assert_eq!(reported.get(), 1);
    assert!((f.position().x - 6.0).abs() < 1e-12);
    slot.borrow_mut().take();
}
