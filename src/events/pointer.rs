use crate::constants::*;
use crate::dom;
use crate::Page;
use folio_core::{tilt_for_pointer, SmoothFollower, TILT_RESET_TRANSFORM};
use web_sys as web;

/// 3D tilt on project cards following the pointer; flat again on leave.
pub fn wire_card_tilt(page: &Page) {
    for card in dom::query_all_html(&page.document, PROJECT_CARD_SELECTOR) {
        let on_move = card.clone();
        dom::add_listener(&card, "mousemove", move |ev: web::MouseEvent| {
            let rect = on_move.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left();
            let y = ev.client_y() as f64 - rect.top();
            let tilt = tilt_for_pointer(x, y, rect.width(), rect.height());
            dom::set_style(&on_move, "transform", &tilt.css());
        });
        let on_leave = card.clone();
        dom::add_listener(&card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&on_leave, "transform", TILT_RESET_TRANSFORM);
        });
    }
}

/// Feed pointer positions to the glow follower and fade it with the pointer.
pub fn wire_cursor_glow(page: &Page, glow: (web::HtmlElement, SmoothFollower)) {
    let (element, follower) = glow;

    dom::add_listener(&page.document, "mousemove", move |ev: web::MouseEvent| {
        follower.set_target(ev.client_x() as f64, ev.client_y() as f64);
    });

    let shown = element.clone();
    dom::add_listener(&page.document, "mouseenter", move |_: web::MouseEvent| {
        dom::set_style(&shown, "opacity", "1");
    });
    dom::add_listener(&page.document, "mouseleave", move |_: web::MouseEvent| {
        dom::set_style(&element, "opacity", "0");
    });
}
