//! Scroll-triggered and time-driven effects built on the core components.

use crate::constants::*;
use crate::dom;
use crate::events::scroll::NavHighlighter;
use crate::Page;
use folio_core::{
    format_stat, parse_stat_value, skill_width, FrameAnimator, SmoothFollower, TypeWriter,
    HERO_TAGLINE,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn observer_error(what: &str, e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{what} observer: {:?}", e)
}

/// Fade sections in as they enter the viewport.
pub fn wire_scroll_reveal(page: &Page) -> anyhow::Result<()> {
    let mut targets = dom::query_all(&page.document, SCROLL_ANIMATE_SELECTOR);
    for selector in REVEAL_SELECTORS {
        for el in dom::query_all(&page.document, selector) {
            _ = el.class_list().add_1(SCROLL_ANIMATE_CLASS);
            targets.push(el);
        }
    }
    dom::observe_intersections(
        &targets,
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        |el, _observer| {
            _ = el.class_list().add_1(ACTIVE_CLASS);
        },
    )
    .map_err(|e| observer_error("reveal", e))?;
    Ok(())
}

/// Fallback when observers are unavailable: show everything at once.
pub fn reveal_all(page: &Page) {
    for el in dom::query_all(&page.document, SCROLL_ANIMATE_SELECTOR) {
        _ = el.class_list().add_1(ACTIVE_CLASS);
    }
}

/// Grow each skill bar to its `data-progress` width the first time it is seen.
pub fn wire_skill_bars(page: &Page) -> anyhow::Result<()> {
    let bars = dom::query_all(&page.document, SKILL_PROGRESS_SELECTOR);
    let scheduler = page.scheduler.clone();
    let delay_ms = page.timings.skill_bar_delay_ms;
    dom::observe_intersections(&bars, VISIBLE_THRESHOLD, None, move |el, observer| {
        observer.unobserve(&el);
        let width = el
            .get_attribute(SKILL_PROGRESS_ATTR)
            .as_deref()
            .and_then(skill_width);
        let (Some(width), Ok(bar)) = (width, el.dyn_into::<web::HtmlElement>()) else {
            return;
        };
        scheduler.schedule_after(
            delay_ms,
            Box::new(move || dom::set_style(&bar, "width", &width)),
        );
    })
    .map_err(|e| observer_error("skill bar", e))?;
    Ok(())
}

/// Count the hero stats up from zero, staggered, once they become visible.
pub fn wire_stat_counters(page: &Page) -> anyhow::Result<()> {
    let Some(stats) = page.document.query_selector(HERO_STATS_SELECTOR).ok().flatten() else {
        return Ok(());
    };
    let animator = FrameAnimator::new(page.scheduler.clone());
    let scheduler = page.scheduler.clone();
    let timings = page.timings.clone();
    dom::observe_intersections(&[stats], VISIBLE_THRESHOLD, None, move |target, observer| {
        for (index, stat) in dom::query_all_in(&target, STAT_NUMBER_SELECTOR)
            .into_iter()
            .enumerate()
        {
            let Some(end) = stat.text_content().as_deref().and_then(parse_stat_value) else {
                log::warn!("[counter] stat {index} has no numeric label");
                continue;
            };
            let animator = animator.clone();
            let duration_ms = timings.counter_duration_ms;
            scheduler.schedule_after(
                index as f64 * timings.counter_stagger_ms,
                Box::new(move || {
                    let label = stat.clone();
                    let run = animator.animate(
                        0.0,
                        end as f64,
                        duration_ms,
                        move |value| label.set_text_content(Some(&format_stat(value))),
                        move || log::debug!("[counter] stat {index} reached {end}"),
                    );
                    if let Err(e) = run {
                        log::error!("[counter] {e}");
                    }
                }),
            );
        }
        observer.unobserve(&target);
    })
    .map_err(|e| observer_error("stats", e))?;
    Ok(())
}

/// Swap `data-src` into `src` for images as they approach the viewport.
pub fn wire_lazy_images(page: &Page) -> anyhow::Result<()> {
    let images = dom::query_all(&page.document, LAZY_IMAGE_SELECTOR);
    dom::observe_intersections(&images, 0.0, None, |img, observer| {
        if let Some(src) = img.get_attribute(LAZY_SRC_ATTR) {
            _ = img.set_attribute("src", &src);
            _ = img.remove_attribute(LAZY_SRC_ATTR);
            observer.unobserve(&img);
        }
    })
    .map_err(|e| observer_error("lazy image", e))?;
    Ok(())
}

/// Create the glow element and start its follow loop.
pub fn start_cursor_glow(page: &Page) -> anyhow::Result<(web::HtmlElement, SmoothFollower)> {
    let doc = &page.document;
    let glow: web::HtmlElement = doc
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create glow: {:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("glow is not an HtmlElement"))?;
    glow.set_class_name(CURSOR_GLOW_CLASS);
    let body = doc.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&glow)
        .map_err(|e| anyhow::anyhow!("append glow: {:?}", e))?;

    if let (Ok(style), Some(head)) = (doc.create_element("style"), doc.head()) {
        style.set_text_content(Some(CURSOR_GLOW_CSS));
        _ = head.append_child(&style);
    }

    let sink_el = glow.clone();
    let follower = SmoothFollower::new(
        page.timings.glow_smoothing,
        page.scheduler.clone(),
        move |pos| {
            dom::set_style(&sink_el, "left", &format!("{}px", pos.x));
            dom::set_style(&sink_el, "top", &format!("{}px", pos.y));
        },
    )?;
    follower.start();
    Ok((glow, follower))
}

/// `load`: mark the body, refresh the nav highlight, start the tagline typing.
pub fn wire_page_loaded(page: &Page, nav: Rc<NavHighlighter>) {
    let page = page.clone();
    let window = page.window.clone();
    let document = page.document.clone();
    dom::on_load(&window, &document, move || {
        if let Some(body) = page.document.body() {
            _ = body.class_list().add_1(LOADED_CLASS);
        }

        let window = page.window.clone();
        page.scheduler.schedule_after(
            page.timings.nav_initial_update_ms,
            Box::new(move || nav.update(window.scroll_y().unwrap_or(0.0))),
        );

        let Some(typing) = dom::query_html(&page.document, TYPING_SELECTOR) else {
            return;
        };
        let writer = TypeWriter::new(page.scheduler.clone());
        let delay_ms = page.timings.type_delay_ms;
        page.scheduler.schedule_after(
            page.timings.type_start_delay_ms,
            Box::new(move || {
                typing.set_text_content(Some(""));
                let label = typing.clone();
                let run = writer.type_text(HERO_TAGLINE, delay_ms, move |prefix| {
                    label.set_text_content(Some(prefix));
                });
                if let Err(e) = run {
                    log::error!("[typing] {e}");
                }
            }),
        );
    });
}

pub fn check_browser_support() {
    if let Ok(false) = web::css::supports_with_value("display", "grid") {
        log::warn!("CSS Grid is not supported in this browser. Layout may not display correctly.");
    }
}
