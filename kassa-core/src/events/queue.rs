//! Tick-ordered event queue with FIFO tie-breaking.
//!
//! `remove_min` always yields the pending event with the smallest
//! timestamp; among equal timestamps, the event added earliest comes out
//! first. A plain timestamp-keyed heap would let a later-added event with
//! the same tick jump ahead, so entries are keyed by
//! `(timestamp, insertion sequence)` instead.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::SimulationError;
use crate::events::Event;

struct Scheduled {
    timestamp: u64,
    sequence: u64,
    event: Event,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp && self.sequence == other.sequence
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse both keys so the earliest
        // timestamp, then the earliest insertion, surfaces first.
        match other.timestamp.cmp(&self.timestamp) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            ord => ord,
        }
    }
}

/// Priority queue over pending events.
#[derive(Default)]
pub struct EventQueue {
    heap: BinaryHeap<Scheduled>,
    next_sequence: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn add(&mut self, event: Event) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Scheduled {
            timestamp: event.timestamp(),
            sequence,
            event,
        });
    }

    /// Removes and returns the next event in processing order.
    ///
    /// An empty queue is an invariant breach in the caller, not a normal
    /// end-of-run condition; the driver checks `is_empty` first.
    pub fn remove_min(&mut self) -> Result<Event, SimulationError> {
        self.heap
            .pop()
            .map(|scheduled| scheduled.event)
            .ok_or(SimulationError::EmptyEventQueue)
    }
}
