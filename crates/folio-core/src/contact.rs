//! Client-only contact form: log the message, confirm, reset after a pause.

use crate::error::{Error, Result};
use crate::scheduler::Scheduler;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl fmt::Display for ContactMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> \"{}\" ({} chars)",
            self.name,
            self.email,
            self.subject,
            self.message.chars().count()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitted,
}

/// Submit/confirm/reset cycle of the contact form.
#[derive(Clone)]
pub struct ContactForm {
    state: Rc<Cell<FormState>>,
    reset_after_ms: f64,
    scheduler: Rc<dyn Scheduler>,
}

impl ContactForm {
    pub fn new(reset_after_ms: f64, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            state: Rc::new(Cell::new(FormState::Editing)),
            reset_after_ms,
            scheduler,
        }
    }

    pub fn state(&self) -> FormState {
        self.state.get()
    }

    /// Accept a message. `on_reset` runs once the confirmation has been shown
    /// for `reset_after_ms`, at which point the form accepts input again.
    pub fn submit(
        &self,
        message: ContactMessage,
        on_reset: impl FnOnce() + 'static,
    ) -> Result<()> {
        if self.state.get() == FormState::Submitted {
            return Err(Error::FormAlreadySubmitted);
        }
        log::info!("[contact] form submitted: {message}");
        self.state.set(FormState::Submitted);
        let state = self.state.clone();
        self.scheduler.schedule_after(
            self.reset_after_ms,
            Box::new(move || {
                state.set(FormState::Editing);
                on_reset();
            }),
        );
        Ok(())
    }
}
