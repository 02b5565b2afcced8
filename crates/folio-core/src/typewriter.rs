//! Reveal text one character per deferred call.

use crate::error::{non_negative_ms, Error, Result};
use crate::scheduler::Scheduler;
use std::cell::Cell;
use std::rc::Rc;

/// Handle to a typing run. Dropping it lets the run finish.
#[derive(Clone, Debug, Default)]
pub struct TypingHandle {
    cancelled: Rc<Cell<bool>>,
    finished: Rc<Cell<bool>>,
}

impl TypingHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }
}

struct Typing {
    text: String,
    // byte offsets of every char end, so each prefix is a valid &str
    ends: Vec<usize>,
    cursor: usize,
    delay_ms: f64,
    on_character: Box<dyn FnMut(&str)>,
    handle: TypingHandle,
}

impl Typing {
    fn tick(mut self, scheduler: Rc<dyn Scheduler>) {
        if self.handle.cancelled.get() {
            self.handle.finished.set(true);
            return;
        }
        let end = self.ends[self.cursor];
        (self.on_character)(&self.text[..end]);
        self.cursor += 1;
        if self.cursor == self.ends.len() {
            self.handle.finished.set(true);
            return;
        }
        let next = scheduler.clone();
        scheduler.schedule_after(self.delay_ms, Box::new(move || self.tick(next)));
    }
}

#[derive(Clone)]
pub struct TypeWriter {
    scheduler: Rc<dyn Scheduler>,
}

impl TypeWriter {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self { scheduler }
    }

    /// Reveal `text` one char at a time. The first char shows immediately,
    /// every later one `delay_ms` after its predecessor; `on_character`
    /// receives the whole prefix revealed so far.
    pub fn type_text(
        &self,
        text: &str,
        delay_ms: f64,
        on_character: impl FnMut(&str) + 'static,
    ) -> Result<TypingHandle> {
        if !non_negative_ms(delay_ms) {
            return Err(Error::InvalidDelay(delay_ms));
        }
        let handle = TypingHandle::default();
        if text.is_empty() {
            handle.finished.set(true);
            return Ok(handle);
        }
        let ends = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        let typing = Typing {
            text: text.to_owned(),
            ends,
            cursor: 0,
            delay_ms,
            on_character: Box::new(on_character),
            handle: handle.clone(),
        };
        typing.tick(self.scheduler.clone());
        Ok(handle)
    }
}
