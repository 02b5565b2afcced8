pub mod keyboard;
pub mod pointer;
pub mod scroll;

use crate::constants::*;
use crate::dom;
use crate::Page;
use folio_core::{anchor_scroll_top, is_placeholder_anchor};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hamburger toggle for the mobile menu; following a link closes it again.
pub fn wire_nav_toggle(page: &Page) {
    let doc = &page.document;
    let (Some(toggle), Some(menu)) = (
        doc.get_element_by_id(NAV_TOGGLE_ID),
        doc.get_element_by_id(NAV_MENU_ID),
    ) else {
        log::warn!("[nav] missing #{NAV_TOGGLE_ID} or #{NAV_MENU_ID}");
        return;
    };

    {
        let toggle_cl = toggle.class_list();
        let menu_cl = menu.class_list();
        dom::add_click_listener(doc, NAV_TOGGLE_ID, move || {
            _ = toggle_cl.toggle(ACTIVE_CLASS);
            _ = menu_cl.toggle(ACTIVE_CLASS);
        });
    }

    for link in dom::query_all(doc, NAV_LINK_SELECTOR) {
        let toggle_cl = toggle.class_list();
        let menu_cl = menu.class_list();
        dom::add_listener(&link, "click", move |_: web::MouseEvent| {
            _ = toggle_cl.remove_1(ACTIVE_CLASS);
            _ = menu_cl.remove_1(ACTIVE_CLASS);
        });
    }
}

/// Smooth in-page scrolling that leaves room for the fixed navbar.
pub fn wire_anchor_links(page: &Page) {
    for anchor in dom::query_all(&page.document, ANCHOR_SELECTOR) {
        let doc = page.document.clone();
        let window = page.window.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::add_listener(&anchor, "click", move |ev: web::MouseEvent| {
            if is_placeholder_anchor(&href) {
                ev.prevent_default();
                return;
            }
            if let Some(target) = dom::query_html(&doc, &href) {
                ev.prevent_default();
                let opts = web::ScrollToOptions::new();
                opts.set_top(anchor_scroll_top(target.offset_top() as f64));
                opts.set_behavior(web::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&opts);
            }
        });
    }
}

/// Visible focus ring for keyboard users.
pub fn wire_focus_outline(page: &Page) {
    for el in dom::query_all_html(&page.document, FOCUSABLE_SELECTOR) {
        let on_focus = el.clone();
        dom::add_listener(&el, "focus", move |_: web::FocusEvent| {
            dom::set_style(&on_focus, "outline", FOCUS_OUTLINE);
            dom::set_style(&on_focus, "outline-offset", FOCUS_OUTLINE_OFFSET);
        });
        let on_blur = el.clone();
        dom::add_listener(&el, "blur", move |_: web::FocusEvent| {
            dom::set_style(&on_blur, "outline", "");
            dom::set_style(&on_blur, "outline-offset", "");
        });
    }
}

#[inline]
pub(crate) fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}
