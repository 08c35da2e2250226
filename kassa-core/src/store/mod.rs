//! The store/lane model: lane construction, admission, and checkout flow.
//!
//! The `Store` is the sole mutator of lane state. Events call into it and
//! never touch lanes directly, so every check-then-act pair here runs with
//! no intervening state change.

pub mod customer;
pub mod lane;

use tracing::debug;

use crate::error::SimulationError;
use customer::Customer;
use lane::{CheckoutLane, LaneKind};

/// Lane counts and the shared per-lane capacity, fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct StoreLayout {
    pub regular_count: usize,
    pub express_count: usize,
    pub self_serve_count: usize,
    pub line_capacity: usize,
}

/// Outcome of asking the store to admit a customer.
///
/// Rejection hands the customer back so the caller can reschedule them.
#[derive(Debug)]
pub enum Admission {
    Assigned(usize),
    Rejected(Customer),
}

/// A store holding a fixed, ordered collection of checkout lanes.
///
/// Lane order is fixed at construction: all regular lanes first, then all
/// express, then all self-serve. Indices into that order identify lanes for
/// the lifetime of the run.
#[derive(Debug)]
pub struct Store {
    lanes: Vec<CheckoutLane>,
}

impl Store {
    pub fn new(layout: StoreLayout) -> Self {
        let mut lanes =
            Vec::with_capacity(layout.regular_count + layout.express_count + layout.self_serve_count);
        for _ in 0..layout.regular_count {
            lanes.push(CheckoutLane::new(LaneKind::Regular, layout.line_capacity));
        }
        for _ in 0..layout.express_count {
            lanes.push(CheckoutLane::new(LaneKind::Express, layout.line_capacity));
        }
        for _ in 0..layout.self_serve_count {
            lanes.push(CheckoutLane::new(LaneKind::SelfServe, layout.line_capacity));
        }
        Self { lanes }
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn contains_lane(&self, lane: usize) -> bool {
        lane < self.lanes.len()
    }

    /// Admits `customer` to the shortest lane that can accept them.
    ///
    /// Lanes are scanned in construction order; ties in queue length go to
    /// the earlier-constructed lane. The chosen lane re-validates at the
    /// instant of append.
    pub fn enter_line(&mut self, customer: Customer) -> Admission {
        let mut shortest = usize::MAX;
        let mut chosen = None;
        for (index, lane) in self.lanes.iter().enumerate() {
            if lane.len() < shortest && lane.can_accept(&customer) {
                shortest = lane.len();
                chosen = Some(index);
            }
        }
        match chosen {
            Some(index) => match self.lanes[index].accept(customer) {
                Ok(()) => {
                    debug!(lane = index, "customer admitted");
                    Admission::Assigned(index)
                }
                Err(customer) => Admission::Rejected(customer),
            },
            None => Admission::Rejected(customer),
        }
    }

    /// True iff the lane holds exactly one customer, i.e. the just-arrived
    /// customer is alone and must start service.
    pub fn line_is_ready(&self, lane: usize) -> bool {
        self.lanes[lane].len() == 1
    }

    /// Billing time for the front customer of `lane`. Does not mutate the
    /// queue.
    pub fn start_checkout(&self, lane: usize) -> Result<u64, SimulationError> {
        let front = self.lanes[lane]
            .front()
            .ok_or(SimulationError::EmptyLane(lane))?;
        Ok(self.lanes[lane].service_time(front))
    }

    /// The customer at the head of `lane`, if any.
    pub fn first_in_line(&self, lane: usize) -> Option<&Customer> {
        self.lanes[lane].front()
    }

    /// Removes the front customer of `lane`; true iff customers remain.
    pub fn complete_checkout(&mut self, lane: usize) -> Result<bool, SimulationError> {
        self.lanes[lane]
            .pop_front()
            .ok_or(SimulationError::EmptyLane(lane))?;
        Ok(!self.lanes[lane].is_empty())
    }

    /// Permanently closes `lane`, returning the displaced waiting customers
    /// in their original order. The front customer stays.
    pub fn close_line(&mut self, lane: usize) -> Vec<Customer> {
        let displaced = self.lanes[lane].close();
        debug!(lane, displaced = displaced.len(), "lane closed");
        displaced
    }
}
