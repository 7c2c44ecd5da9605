use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every event to the tracing subscriber as a JSON payload.
#[derive(Debug)]
pub struct LogPublisher {
    topic: String,
}

impl LogPublisher {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()> {
        let payload = serde_json::to_string(event)?;
        info!(topic = %self.topic, event_id = %event.event_id, kind = ?event.kind, "{}", payload);
        Ok(())
    }
}
