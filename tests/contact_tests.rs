// Host-side tests for the contact form submit/reset cycle.

use folio_core::{ContactForm, ContactMessage, Error, FormState, ManualScheduler, FORM_RESET_MS};
use std::cell::Cell;
use std::rc::Rc;

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hi".into(),
        message: "Nice work".into(),
    }
}

#[test]
fn submit_shows_confirmation_then_resets() {
    let host = Rc::new(ManualScheduler::new());
    let form = ContactForm::new(FORM_RESET_MS, host.clone());
    let resets = Rc::new(Cell::new(0));
    let r = resets.clone();

    assert_eq!(form.state(), FormState::Editing);
    form.submit(message(), move || r.set(r.get() + 1)).unwrap();
    assert_eq!(form.state(), FormState::Submitted);

    host.advance(FORM_RESET_MS - 1.0);
    assert_eq!(form.state(), FormState::Submitted);
    assert_eq!(resets.get(), 0);

    host.advance(1.0);
    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(resets.get(), 1);
    assert!(host.is_idle());
}

#[test]
fn second_submit_while_confirming_is_refused() {
    let host = Rc::new(ManualScheduler::new());
    let form = ContactForm::new(FORM_RESET_MS, host.clone());
    form.submit(message(), || {}).unwrap();
    assert_eq!(
        form.submit(message(), || {}),
        Err(Error::FormAlreadySubmitted)
    );
    assert_eq!(host.pending_timers(), 1);

    host.advance(FORM_RESET_MS);
    assert!(form.submit(message(), || {}).is_ok());
}

#[test]
fn message_display_is_a_summary() {
    assert_eq!(
        message().to_string(),
        "Ada <ada@example.com> \"Hi\" (9 chars)"
    );
}
