// Timing and layout constants for the portfolio effects.

// Frame pacing used by hosts that have no display refresh of their own
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 16.0;

// Scroll handlers
pub const SCROLL_THROTTLE_MS: f64 = 100.0; // nav state + active link
pub const PARALLAX_THROTTLE_MS: f64 = 16.0; // ~60fps
pub const PARALLAX_SPEED: f64 = 0.5;
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const NAV_SECTION_OFFSET_PX: f64 = 100.0; // section counts as active this far above its top
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 70.0; // fixed navbar height

// Typing effect
pub const TYPE_DELAY_MS: f64 = 100.0;
pub const TYPE_START_DELAY_MS: f64 = 1500.0;
pub const HERO_TAGLINE: &str = "Fullstack Engineer";

// Stat counters
pub const COUNTER_DURATION_MS: f64 = 1500.0;
pub const COUNTER_STAGGER_MS: f64 = 200.0;

// Skill bars
pub const SKILL_BAR_DELAY_MS: f64 = 200.0;

// Cursor glow
pub const GLOW_SMOOTHING: f64 = 0.15;

// Project card tilt
pub const TILT_DIVISOR: f64 = 30.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_LIFT_PX: f64 = -4.0;
pub const TILT_RESET_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

// Contact form
pub const FORM_RESET_MS: f64 = 5000.0;

// Initial nav highlight after load
pub const NAV_INITIAL_UPDATE_MS: f64 = 100.0;
