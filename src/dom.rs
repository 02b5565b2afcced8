use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolves once the document has been parsed (`DOMContentLoaded`).
pub async fn ready(document: &web::Document) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let closure = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref());
    });
    JsFuture::from(promise).await.map(|_| ())
}

/// Run `handler` once the window `load` event has fired (now, if it already has).
pub fn on_load(window: &web::Window, document: &web::Document, handler: impl FnOnce() + 'static) {
    if document.ready_state() == "complete" {
        handler();
        return;
    }
    let closure = Closure::once_into_js(handler);
    _ = window.add_event_listener_with_callback("load", closure.unchecked_ref());
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn add_listener<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(_) => {
            log::warn!("[dom] bad selector {selector}");
            Vec::new()
        }
    }
}

pub fn query_all_in(parent: &web::Element, selector: &str) -> Vec<web::Element> {
    match parent.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(_) => {
            log::warn!("[dom] bad selector {selector}");
            Vec::new()
        }
    }
}

fn elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Current value of an `<input>` or `<textarea>`, empty if neither.
pub fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    match el.dyn_into::<web::HtmlInputElement>() {
        Ok(input) => input.value(),
        Err(el) => el
            .dyn_into::<web::HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default(),
    }
}

/// Observe `elements`, calling `on_visible` for each one that scrolls into view.
pub fn observe_intersections(
    elements: &[web::Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: impl FnMut(web::Element, &web::IntersectionObserver) + 'static,
) -> Result<web::IntersectionObserver, JsValue> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible(entry.target(), &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
    closure.forget();
    for el in elements {
        observer.observe(el);
    }
    Ok(observer)
}

pub fn supports_intersection_observer(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}
