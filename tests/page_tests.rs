// Host-side tests for the pure page helpers.

use folio_core::*;

fn sections() -> Vec<SectionBounds> {
    [("home", 0.0, 800.0), ("about", 800.0, 600.0), ("skills", 1400.0, 700.0)]
        .iter()
        .map(|(id, top, h)| SectionBounds {
            id: (*id).to_string(),
            offset_top: *top,
            height: *h,
        })
        .collect()
}

#[test]
fn navbar_switches_style_past_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
    assert!(is_scrolled(2000.0));
}

#[test]
fn active_section_uses_offset_bands() {
    let s = sections();
    // home band is (-100, 700]
    assert_eq!(active_section(0.0, &s), Some("home"));
    assert_eq!(active_section(700.0, &s), Some("home"));
    // about band is (700, 1300]
    assert_eq!(active_section(701.0, &s), Some("about"));
    assert_eq!(active_section(1300.0, &s), Some("about"));
    assert_eq!(active_section(1301.0, &s), Some("skills"));
    assert_eq!(active_section(5000.0, &s), None);
    assert_eq!(active_section(100.0, &[]), None);
}

#[test]
fn later_section_wins_on_overlap() {
    let mut s = sections();
    s.push(SectionBounds {
        id: "overlay".into(),
        offset_top: 0.0,
        height: 5000.0,
    });
    assert_eq!(active_section(300.0, &s), Some("overlay"));
}

#[test]
fn parallax_moves_at_half_speed() {
    assert_eq!(parallax_offset(0.0), 0.0);
    assert_eq!(parallax_offset(300.0), 150.0);
    assert_eq!(parallax_transform(50.0), "translateY(25px)");
}

#[test]
fn anchors_leave_room_for_navbar() {
    assert_eq!(anchor_scroll_top(1000.0), 930.0);
    assert!(is_placeholder_anchor("#"));
    assert!(!is_placeholder_anchor("#about"));
}

#[test]
fn tilt_is_flat_at_card_center() {
    let t = tilt_for_pointer(150.0, 100.0, 300.0, 200.0);
    assert_eq!(t, Tilt::default());
}

#[test]
fn tilt_leans_toward_pointer() {
    // top-left corner of a 300x200 card
    let t = tilt_for_pointer(0.0, 0.0, 300.0, 200.0);
    assert!((t.rotate_x_deg - (-100.0 / 30.0)).abs() < 1e-12);
    assert!((t.rotate_y_deg - 5.0).abs() < 1e-12);

    let css = tilt_for_pointer(150.0, 130.0, 300.0, 200.0).css();
    assert_eq!(
        css,
        "perspective(1000px) rotateX(1deg) rotateY(0deg) translateY(-4px)"
    );
}

#[test]
fn shortcut_keys_map_to_sections() {
    for (key, id) in [
        ("h", "home"),
        ("A", "about"),
        ("s", "skills"),
        ("P", "projects"),
        ("c", "contact"),
    ] {
        assert_eq!(section_for_key(key), Some(id), "key {key}");
        assert_eq!(
            section_for_key(&key.to_ascii_lowercase()),
            section_for_key(&key.to_ascii_uppercase())
        );
    }
    for key in ["", "x", "Enter", "hh", "1"] {
        assert_eq!(section_for_key(key), None, "key {key:?}");
    }
}

#[test]
fn text_entry_elements_swallow_shortcuts() {
    assert!(is_text_entry_tag("INPUT"));
    assert!(is_text_entry_tag("textarea"));
    assert!(is_text_entry_tag("Select"));
    assert!(!is_text_entry_tag("BUTTON"));
    assert!(!is_text_entry_tag("A"));
}

#[test]
fn stat_labels_parse_like_parse_int() {
    assert_eq!(parse_stat_value("10+"), Some(10));
    assert_eq!(parse_stat_value("  5 years"), Some(5));
    assert_eq!(parse_stat_value("100"), Some(100));
    assert_eq!(parse_stat_value("-3x"), Some(-3));
    assert_eq!(parse_stat_value("+7"), Some(7));
    assert_eq!(parse_stat_value("many"), None);
    assert_eq!(parse_stat_value(""), None);
    assert_eq!(format_stat(42.0), "42+");
}

#[test]
fn skill_width_needs_a_number() {
    assert_eq!(skill_width("85").as_deref(), Some("85%"));
    assert_eq!(skill_width(" 62.5 ").as_deref(), Some("62.5%"));
    assert_eq!(skill_width("lots"), None);
    assert_eq!(skill_width("inf"), None);
}
