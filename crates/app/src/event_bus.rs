//! In-process event bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use plantmon_domain::error::PlantMonError;
use plantmon_domain::event::CardEvent;

use crate::ports::EventPublisher;

/// Fan-out of [`CardEvent`]s to every interested listener in the process.
///
/// Publishing succeeds even when nobody listens. A subscriber that falls
/// more than `capacity` events behind loses the oldest ones.
pub struct InProcessEventBus {
    sender: broadcast::Sender<CardEvent>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CardEvent> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(
        &self,
        event: CardEvent,
    ) -> impl Future<Output = Result<(), PlantMonError>> + Send {
        tracing::debug!(event = event.name(), "publishing card event");
        // send fails only when there are zero receivers.
        let _ = self.sender.send(event);
        async { Ok(()) }
    }
}
