use crate::constants::*;
use crate::dom;
use crate::Page;
use folio_core::{active_section, is_scrolled, parallax_transform, RateLimiter, SectionBounds};
use std::rc::Rc;
use web_sys as web;

/// Marks the nav link of the section currently under the viewport top.
pub struct NavHighlighter {
    document: web::Document,
    sections: Vec<web::HtmlElement>,
    links: Vec<web::Element>,
}

impl NavHighlighter {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
            sections: dom::query_all_html(document, SECTION_SELECTOR),
            links: dom::query_all(document, NAV_LINK_SELECTOR),
        }
    }

    fn bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|s| SectionBounds {
                id: s.id(),
                offset_top: s.offset_top() as f64,
                height: s.offset_height() as f64,
            })
            .collect()
    }

    pub fn update(&self, scroll_y: f64) {
        let bounds = self.bounds();
        let Some(id) = active_section(scroll_y, &bounds) else {
            return;
        };
        for link in &self.links {
            _ = link.class_list().remove_1(ACTIVE_CLASS);
        }
        let selector = format!("{NAV_LINK_SELECTOR}[href=\"#{id}\"]");
        if let Ok(Some(link)) = self.document.query_selector(&selector) {
            _ = link.class_list().add_1(ACTIVE_CLASS);
        }
    }
}

/// Navbar shadow, active link and hero parallax, each behind its own throttle.
pub fn wire_scroll_handlers(page: &Page) -> anyhow::Result<Rc<NavHighlighter>> {
    let timings = &page.timings;

    let navbar = page.document.get_element_by_id(NAVBAR_ID);
    let nav_state = RateLimiter::new(
        timings.scroll_throttle_ms,
        page.clock.clone(),
        page.scheduler.clone(),
        move |scroll_y: f64| {
            let Some(navbar) = &navbar else {
                return;
            };
            let cl = navbar.class_list();
            if is_scrolled(scroll_y) {
                _ = cl.add_1(SCROLLED_CLASS);
            } else {
                _ = cl.remove_1(SCROLLED_CLASS);
            }
        },
    )?;

    let nav = Rc::new(NavHighlighter::new(&page.document));
    let nav_for_scroll = nav.clone();
    let active_link = RateLimiter::new(
        timings.scroll_throttle_ms,
        page.clock.clone(),
        page.scheduler.clone(),
        move |scroll_y: f64| nav_for_scroll.update(scroll_y),
    )?;

    let doc = page.document.clone();
    let parallax = RateLimiter::new(
        timings.parallax_throttle_ms,
        page.clock.clone(),
        page.scheduler.clone(),
        move |scroll_y: f64| {
            if let Some(grid) = dom::query_html(&doc, HERO_GRID_SELECTOR) {
                dom::set_style(&grid, "transform", &parallax_transform(scroll_y));
            }
        },
    )?;

    let window = page.window.clone();
    dom::add_listener(&page.window, "scroll", move |_: web::Event| {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        nav_state.call(scroll_y);
        active_link.call(scroll_y);
        parallax.call(scroll_y);
    });
    Ok(nav)
}
