//! Unbounded multi-producer, multi-consumer FIFO of play events.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::metrics::PENDING_EVENTS;

use super::PlayEvent;

/// Play events waiting for a consumer.
///
/// Producers and consumers serialize on the queue's own mutex only. Popping
/// never waits for a future event.
#[derive(Debug, Default)]
pub struct PendingQueue {
    events: Mutex<VecDeque<PlayEvent>>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<PlayEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, event: PlayEvent) {
        let mut events = self.lock();
        events.push_back(event);
        PENDING_EVENTS.set(events.len() as i64);
    }

    /// Remove the oldest event, or return `None` straight away if empty.
    pub fn pop(&self) -> Option<PlayEvent> {
        let mut events = self.lock();
        let event = events.pop_front();
        PENDING_EVENTS.set(events.len() as i64);
        event
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
