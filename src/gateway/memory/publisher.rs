use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

/// Shared handle onto the events a [`MemoryPublisher`] has received.
pub type EventJournal = Rc<RefCell<Vec<DomainEvent>>>;

// MemoryPublisher keeps events in process so that callers can inspect what happened.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    journal: EventJournal,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn journal(&self) -> EventJournal {
        Rc::clone(&self.journal)
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()> {
        debug!(event_id = %event.event_id, name = %event.name, "journaled event");
        self.journal.borrow_mut().push(event.clone());
        Ok(())
    }
}
