/// DOM hooks the page markup provides.
///
/// Element ids, selectors and class names live here so the wiring code reads
/// as behavior rather than string literals.
// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Hero
pub const HERO_GRID_SELECTOR: &str = ".hero-grid";
pub const TYPING_SELECTOR: &str = ".typing-text";
pub const HERO_STATS_SELECTOR: &str = ".hero-stats";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";

// Scroll reveal
pub const SCROLL_ANIMATE_CLASS: &str = "scroll-animate";
pub const SCROLL_ANIMATE_SELECTOR: &str = ".scroll-animate";
pub const REVEAL_SELECTORS: [&str; 4] = [
    ".highlight-item",
    ".skill-category",
    ".project-card",
    ".info-card",
];
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const VISIBLE_THRESHOLD: f64 = 0.5; // stats + skill bars

// Skills
pub const SKILL_PROGRESS_SELECTOR: &str = ".skill-progress";
pub const SKILL_PROGRESS_ATTR: &str = "data-progress";

// Projects
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";

// Lazy images
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_SRC_ATTR: &str = "data-src";

// Contact
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_SUCCESS_ID: &str = "formSuccess";
pub const CONTACT_FIELD_IDS: [&str; 4] = ["name", "email", "subject", "message"];

// Focus ring
pub const FOCUSABLE_SELECTOR: &str =
    "a, button, input, textarea, select, [tabindex]:not([tabindex=\"-1\"])";
pub const FOCUS_OUTLINE: &str = "2px solid var(--primary-color)";
pub const FOCUS_OUTLINE_OFFSET: &str = "2px";

// Shared class names
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const SHOW_CLASS: &str = "show";
pub const LOADED_CLASS: &str = "loaded";

// Cursor glow
pub const CURSOR_GLOW_CLASS: &str = "cursor-glow";
pub const CURSOR_GLOW_CSS: &str = r#"
    .cursor-glow {
        position: fixed;
        width: 300px;
        height: 300px;
        border-radius: 50%;
        background: radial-gradient(circle, rgba(0, 212, 255, 0.03) 0%, transparent 70%);
        pointer-events: none;
        z-index: 9999;
        transform: translate(-50%, -50%);
        transition: opacity 0.3s ease;
        opacity: 0;
    }

    @media (max-width: 768px) {
        .cursor-glow {
            display: none;
        }
    }
"#;
