//! Terminal rendition of the portfolio effects.
//!
//! Drives the core components from a real-time loop: a `ManualScheduler`
//! is advanced to wall-clock time once per frame, and every sink logs what
//! the page would have displayed.

use folio_core::{
    active_section, format_stat, is_scrolled, parallax_offset, Clock, ContactForm,
    ContactMessage, EffectTimings, FormState, FrameAnimator, InstantClock, ManualScheduler,
    RateLimiter, Scheduler, SectionBounds, SmoothFollower, TypeWriter, HERO_TAGLINE,
};
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

const STAT_TARGETS: [f64; 3] = [5.0, 10.0, 100.0]; // years, projects, team members
const SCROLL_SPEED_PX_PER_MS: f64 = 0.8;
const FOLLOW_LOG_EVERY: u64 = 15; // frames
const MAX_RUN_MS: f64 = 10_000.0;

fn demo_sections() -> Vec<SectionBounds> {
    ["home", "about", "skills", "projects", "contact"]
        .iter()
        .enumerate()
        .map(|(i, id)| SectionBounds {
            id: (*id).to_string(),
            offset_top: i as f64 * 900.0,
            height: 900.0,
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let timings = EffectTimings::default();
    timings.validate()?;

    let wall = InstantClock::new();
    let host = Rc::new(ManualScheduler::new());
    let clock: Rc<dyn Clock> = host.clone();
    let scheduler: Rc<dyn Scheduler> = host.clone();

    // Typing tagline
    let typing = TypeWriter::new(scheduler.clone()).type_text(
        HERO_TAGLINE,
        timings.type_delay_ms,
        |prefix| log::info!("[typing] {prefix}"),
    )?;

    // Stat counters, staggered
    let counters_done = Rc::new(Cell::new(0usize));
    let animator = FrameAnimator::new(scheduler.clone());
    for (index, end) in STAT_TARGETS.into_iter().enumerate() {
        let animator = animator.clone();
        let done = counters_done.clone();
        let duration_ms = timings.counter_duration_ms;
        scheduler.schedule_after(
            index as f64 * timings.counter_stagger_ms,
            Box::new(move || {
                let last = Rc::new(Cell::new(f64::NAN));
                let run = animator.animate(
                    0.0,
                    end,
                    duration_ms,
                    move |value| {
                        if value != last.replace(value) {
                            log::info!("[counter] stat {index}: {}", format_stat(value));
                        }
                    },
                    move || done.set(done.get() + 1),
                );
                if let Err(e) = run {
                    log::error!("[counter] {e}");
                }
            }),
        );
    }

    // Cursor glow chasing a pointer that circles the viewport
    let frames = Rc::new(Cell::new(0u64));
    let frames_sink = frames.clone();
    let glow = SmoothFollower::new(timings.glow_smoothing, scheduler.clone(), move |pos| {
        let n = frames_sink.get() + 1;
        frames_sink.set(n);
        if n % FOLLOW_LOG_EVERY == 0 {
            log::info!("[glow] ({:.1}, {:.1})", pos.x, pos.y);
        }
    })?;
    glow.start();

    // Scroll handlers behind the throttle
    let sections = demo_sections();
    let scroll = RateLimiter::new(
        timings.scroll_throttle_ms,
        clock.clone(),
        scheduler.clone(),
        move |scroll_y: f64| {
            log::info!(
                "[scroll] y={scroll_y:.0} scrolled={} section={} parallax={:.0}px",
                is_scrolled(scroll_y),
                active_section(scroll_y, &sections).unwrap_or("-"),
                parallax_offset(scroll_y)
            );
        },
    )?;

    // Contact form round trip
    let form = ContactForm::new(timings.form_reset_ms, scheduler.clone());
    form.submit(
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Loved the projects section.".into(),
        },
        || log::info!("[contact] form reset"),
    )?;

    let frame = Duration::from_secs_f64(host.frame_interval_ms() / 1000.0);
    loop {
        thread::sleep(frame);
        let now = wall.now_ms();
        let angle = now / 600.0;
        glow.set_target(640.0 + 300.0 * angle.cos(), 360.0 + 200.0 * angle.sin());
        scroll.call(now * SCROLL_SPEED_PX_PER_MS);
        host.run_frame_at(now);

        let finished = typing.is_finished()
            && counters_done.get() == STAT_TARGETS.len()
            && form.state() == FormState::Editing;
        if finished || now > MAX_RUN_MS {
            break;
        }
    }

    glow.stop();
    scroll.cancel_pending();
    log::info!(
        "done after {:.0} ms, {} glow frames",
        host.now_ms(),
        frames.get()
    );
    Ok(())
}
