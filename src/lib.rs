#![cfg(target_arch = "wasm32")]
use folio_core::{Clock, EffectTimings, Scheduler};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod dom;
mod effects;
mod events;
mod host;

/// Browser handles and shared timing services every wiring function needs.
#[derive(Clone)]
pub(crate) struct Page {
    pub window: web::Window,
    pub document: web::Document,
    pub clock: Rc<dyn Clock>,
    pub scheduler: Rc<dyn Scheduler>,
    pub timings: EffectTimings,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::ready(&document)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded: {:?}", e))?;

    let timings = EffectTimings::default();
    timings.validate()?;

    let page = Page {
        clock: Rc::new(host::WebClock::new(&window)),
        scheduler: Rc::new(host::WebScheduler::new(window.clone())),
        window,
        document,
        timings,
    };

    // Navigation
    events::wire_nav_toggle(&page);
    let nav = events::scroll::wire_scroll_handlers(&page)?;
    events::wire_anchor_links(&page);
    events::keyboard::wire_section_shortcuts(&page);
    events::wire_focus_outline(&page);

    // Scroll-triggered effects
    if dom::supports_intersection_observer(&page.window) {
        effects::wire_scroll_reveal(&page)?;
        effects::wire_skill_bars(&page)?;
        effects::wire_stat_counters(&page)?;
        effects::wire_lazy_images(&page)?;
    } else {
        log::warn!("IntersectionObserver is not supported. Some animations may not work.");
        effects::reveal_all(&page);
    }

    // Pointer effects
    events::pointer::wire_card_tilt(&page);
    let glow = effects::start_cursor_glow(&page)?;
    events::pointer::wire_cursor_glow(&page, glow);

    contact::wire_contact_form(&page)?;
    effects::wire_page_loaded(&page, nav);

    effects::check_browser_support();
    log::info!("Welcome to the portfolio!");
    log::info!("Passionate about frontend development.");
    log::info!("Feel free to get in touch about work.");
    Ok(())
}
