//! Pure page geometry and text helpers used by the DOM wiring.

use crate::constants::*;

/// Where a page section sits in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD_PX
}

/// Section whose (offset) band contains `scroll_y`. Later sections win when
/// bands overlap; `None` means the caller keeps its current highlight.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.offset_top - NAV_SECTION_OFFSET_PX;
            scroll_y > top && scroll_y <= top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

#[inline]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_SPEED
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y))
}

/// Scroll target for an in-page anchor, leaving room for the fixed navbar.
#[inline]
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - ANCHOR_SCROLL_OFFSET_PX
}

/// Bare `#` links only suppress navigation; they have no target.
#[inline]
pub fn is_placeholder_anchor(href: &str) -> bool {
    href == "#"
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl Tilt {
    pub fn css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px)",
            TILT_PERSPECTIVE_PX, self.rotate_x_deg, self.rotate_y_deg, TILT_LIFT_PX
        )
    }
}

/// Tilt for a pointer at (`x`, `y`) inside a `width` x `height` card,
/// relative to the card's top-left corner.
pub fn tilt_for_pointer(x: f64, y: f64, width: f64, height: f64) -> Tilt {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    Tilt {
        rotate_x_deg: (y - center_y) / TILT_DIVISOR,
        rotate_y_deg: (center_x - x) / TILT_DIVISOR,
    }
}

#[inline]
pub fn section_for_key(key: &str) -> Option<&'static str> {
    match key {
        "h" | "H" => Some("home"),
        "a" | "A" => Some("about"),
        "s" | "S" => Some("skills"),
        "p" | "P" => Some("projects"),
        "c" | "C" => Some("contact"),
        _ => None,
    }
}

/// Elements where a key press is text input rather than a shortcut.
#[inline]
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

/// Leading integer of a stat label, `parseInt` style: "10+" -> 10.
pub fn parse_stat_value(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}

#[inline]
pub fn format_stat(value: f64) -> String {
    format!("{value}+")
}

/// CSS width for a skill bar's `data-progress` attribute.
pub fn skill_width(progress_attr: &str) -> Option<String> {
    let pct = progress_attr.trim().parse::<f64>().ok()?;
    pct.is_finite().then(|| format!("{pct}%"))
}
