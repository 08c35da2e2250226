//! Checkout lane kinds and their admission / service-time policy.

use std::collections::VecDeque;

use super::customer::Customer;

/// Item-count ceiling for express lanes.
pub const EXPRESS_ITEM_LIMIT: usize = 7;

/// The closed set of lane kinds. Admission and service-time rules are the
/// only behavior that varies by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaneKind {
    Regular,
    Express,
    SelfServe,
}

/// A single FIFO checkout lane.
///
/// The front of `queue` is the customer currently checking out (or next to
/// be). Once closed, a lane never reopens and never admits again; the front
/// customer finishes uninterrupted.
#[derive(Debug)]
pub struct CheckoutLane {
    kind: LaneKind,
    capacity: usize,
    open: bool,
    queue: VecDeque<Customer>,
}

impl CheckoutLane {
    pub fn new(kind: LaneKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            open: true,
            queue: VecDeque::new(),
        }
    }

    pub fn kind(&self) -> LaneKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn front(&self) -> Option<&Customer> {
        self.queue.front()
    }

    /// Whether this lane may admit `customer` right now.
    pub fn can_accept(&self, customer: &Customer) -> bool {
        if !self.open || self.queue.len() >= self.capacity {
            return false;
        }
        match self.kind {
            LaneKind::Express => customer.item_count() <= EXPRESS_ITEM_LIMIT,
            LaneKind::Regular | LaneKind::SelfServe => true,
        }
    }

    /// Appends `customer` after re-validating `can_accept` at the instant
    /// of assignment. Hands the customer back on refusal.
    pub fn accept(&mut self, customer: Customer) -> Result<(), Customer> {
        if self.can_accept(&customer) {
            self.queue.push_back(customer);
            Ok(())
        } else {
            Err(customer)
        }
    }

    /// Ticks needed to ring up `customer` at this lane.
    pub fn service_time(&self, customer: &Customer) -> u64 {
        match self.kind {
            LaneKind::Regular | LaneKind::Express => customer.total_item_time(),
            LaneKind::SelfServe => 2 * customer.total_item_time(),
        }
    }

    /// Removes and returns the front customer.
    pub fn pop_front(&mut self) -> Option<Customer> {
        self.queue.pop_front()
    }

    /// Permanently closes this lane.
    ///
    /// Returns every waiting customer behind the front one, in their
    /// original queue order. The front customer stays and finishes.
    pub fn close(&mut self) -> Vec<Customer> {
        self.open = false;
        self.queue.split_off(1.min(self.queue.len())).into()
    }
}
