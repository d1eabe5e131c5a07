//! Recording presentation sink.

use std::sync::{Arc, Mutex};

use cutscene_core::error::DomainError;
use cutscene_core::event::{PresentationEvent, PresentationSink};

/// A sink that records every delivered event. Clones share the same log,
/// so a test can hand one clone to a spawned run and inspect another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<PresentationEvent>>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the events delivered so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn events(&self) -> Vec<PresentationEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the `value` of every `TextUpdated` event, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn text_updates(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::TextUpdated { value } => Some(value.clone()),
                _ => None,
            })
            .collect()
    }
}

impl PresentationSink for RecordingSink {
    fn deliver(&mut self, event: PresentationEvent) -> Result<(), DomainError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}
