use crate::constants::*;
use crate::dom;
use crate::Page;
use folio_core::{ContactForm, ContactMessage};
use wasm_bindgen::JsCast;
use web_sys as web;

fn read_message(document: &web::Document) -> ContactMessage {
    let [name, email, subject, message] =
        CONTACT_FIELD_IDS.map(|id| dom::field_value(document, id));
    ContactMessage {
        name,
        email,
        subject,
        message,
    }
}

/// Client-only submit: log the message, show the confirmation, then reset.
pub fn wire_contact_form(page: &Page) -> anyhow::Result<()> {
    let Some(form) = page.document.get_element_by_id(CONTACT_FORM_ID) else {
        log::warn!("[contact] no #{CONTACT_FORM_ID} on this page");
        return Ok(());
    };
    let form: web::HtmlFormElement = form
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{CONTACT_FORM_ID} is not a form"))?;
    let success = page.document.get_element_by_id(FORM_SUCCESS_ID);
    let flow = ContactForm::new(page.timings.form_reset_ms, page.scheduler.clone());
    let doc = page.document.clone();

    let target = form.clone();
    dom::add_listener(&target, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let form_reset = form.clone();
        let success_reset = success.clone();
        let submitted = flow.submit(read_message(&doc), move || {
            form_reset.reset();
            dom::set_style(&form_reset, "display", "block");
            if let Some(el) = &success_reset {
                _ = el.class_list().remove_1(SHOW_CLASS);
            }
        });
        if let Err(e) = submitted {
            log::warn!("[contact] {e}");
            return;
        }
        dom::set_style(&form, "display", "none");
        if let Some(el) = &success {
            _ = el.class_list().add_1(SHOW_CLASS);
        }
    });
    Ok(())
}
