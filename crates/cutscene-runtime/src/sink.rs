//! Channel-backed presentation sink.

use cutscene_core::error::DomainError;
use cutscene_core::event::{PresentationEvent, PresentationSink};
use tokio::sync::mpsc;

/// Forwards events into an unbounded tokio channel.
///
/// The receiving half is the owner's event stream; dropping it ends the run
/// as [`PlaybackOutcome::Disconnected`](crate::PlaybackOutcome::Disconnected).
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<PresentationEvent>,
}

impl PresentationSink for ChannelSink {
    fn deliver(&mut self, event: PresentationEvent) -> Result<(), DomainError> {
        self.tx
            .send(event)
            .map_err(|_| DomainError::PresentationClosed)
    }
}

/// Creates a sink and the receiver observing it.
#[must_use]
pub fn channel() -> (ChannelSink, mpsc::UnboundedReceiver<PresentationEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelSink { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_after_receiver_dropped_reports_closed() {
        let (mut sink, rx) = channel();
        drop(rx);

        let result = sink.deliver(PresentationEvent::Complete);

        assert!(matches!(result, Err(DomainError::PresentationClosed)));
    }
}
