use crate::dom;
use crate::Page;
use folio_core::{is_text_entry_tag, section_for_key};
use web_sys as web;

/// Single-letter jumps to the page sections (H, A, S, P, C).
pub fn handle_section_shortcut(ev: &web::KeyboardEvent, document: &web::Document) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    // typing into the contact form must not scroll the page
    if let Some(el) = super::event_element(ev) {
        if is_text_entry_tag(&el.tag_name()) {
            return;
        }
    }
    let Some(section) = section_for_key(&ev.key()) else {
        return;
    };
    match document.get_element_by_id(section) {
        Some(target) => {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
            log::info!("[keys] jump to #{section}");
        }
        None => log::warn!("[keys] no #{section} on this page"),
    }
}

pub fn wire_section_shortcuts(page: &Page) {
    let doc = page.document.clone();
    dom::add_listener(&page.document, "keydown", move |ev: web::KeyboardEvent| {
        handle_section_shortcut(&ev, &doc);
    });
}
