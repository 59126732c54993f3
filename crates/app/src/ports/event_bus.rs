//! Event bus port — publish/subscribe for card events.

use std::future::Future;

use plantmon_domain::error::PlantMonError;
use plantmon_domain::event::CardEvent;

/// Publishes card events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: CardEvent)
    -> impl Future<Output = Result<(), PlantMonError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        event: CardEvent,
    ) -> impl Future<Output = Result<(), PlantMonError>> + Send {
        (**self).publish(event)
    }
}
