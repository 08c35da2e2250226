//! Event variants and their transition logic.
//!
//! Each event, applied to the store, deterministically produces an ordered
//! list of follow-up events. Spawned events always carry a timestamp at or
//! after the triggering one; simulated time never runs backward.
//!
//! Events carry no ordering traits of their own. Processing order is the
//! `EventQueue`'s contract: smallest timestamp first, FIFO among equals.

pub mod queue;

use std::fmt;

use tracing::trace;

use crate::error::SimulationError;
use crate::store::customer::Customer;
use crate::store::{Admission, Store};

/// A pending simulation event.
#[derive(Debug)]
pub enum Event {
    /// A customer arrives and looks for a lane to join.
    CustomerArrival { timestamp: u64, customer: Customer },
    /// The front customer of a lane begins checkout.
    CheckoutStarted { timestamp: u64, lane: usize },
    /// The named customer finishes checkout and leaves the lane.
    CheckoutCompleted {
        timestamp: u64,
        lane: usize,
        customer: String,
    },
    /// A lane closes permanently, displacing its waiting customers.
    CloseLine { timestamp: u64, lane: usize },
}

impl Event {
    pub fn timestamp(&self) -> u64 {
        match self {
            Event::CustomerArrival { timestamp, .. }
            | Event::CheckoutStarted { timestamp, .. }
            | Event::CheckoutCompleted { timestamp, .. }
            | Event::CloseLine { timestamp, .. } => *timestamp,
        }
    }

    /// Consumes this event, mutates the store, and returns the follow-up
    /// events in the order they must be enqueued.
    pub fn apply(self, store: &mut Store) -> Result<Vec<Event>, SimulationError> {
        match self {
            Event::CustomerArrival {
                timestamp,
                mut customer,
            } => {
                customer.mark_arrival(timestamp);
                match store.enter_line(customer) {
                    Admission::Rejected(customer) => {
                        trace!(customer = customer.name(), tick = timestamp, "no lane free, retrying next tick");
                        Ok(vec![Event::CustomerArrival {
                            timestamp: timestamp + 1,
                            customer,
                        }])
                    }
                    Admission::Assigned(lane) => {
                        if store.line_is_ready(lane) {
                            Ok(vec![Event::CheckoutStarted { timestamp, lane }])
                        } else {
                            Ok(Vec::new())
                        }
                    }
                }
            }
            Event::CheckoutStarted { timestamp, lane } => {
                let billing_time = store.start_checkout(lane)?;
                let customer = store
                    .first_in_line(lane)
                    .ok_or(SimulationError::EmptyLane(lane))?
                    .name()
                    .to_owned();
                Ok(vec![Event::CheckoutCompleted {
                    timestamp: timestamp + billing_time,
                    lane,
                    customer,
                }])
            }
            Event::CheckoutCompleted {
                timestamp, lane, ..
            } => {
                if store.complete_checkout(lane)? {
                    // The next customer starts on the same tick, no idle gap.
                    Ok(vec![Event::CheckoutStarted { timestamp, lane }])
                } else {
                    Ok(Vec::new())
                }
            }
            Event::CloseLine { timestamp, lane } => {
                let displaced = store.close_line(lane);
                // Staggered re-arrival: the i-th displaced customer comes
                // back at t + i, in original queue order.
                Ok(displaced
                    .into_iter()
                    .enumerate()
                    .map(|(i, customer)| Event::CustomerArrival {
                        timestamp: timestamp + i as u64,
                        customer,
                    })
                    .collect())
            }
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::CustomerArrival {
                timestamp,
                customer,
            } => write!(f, "{} arrives at {}", customer.name(), timestamp),
            Event::CheckoutStarted { timestamp, lane } => {
                write!(f, "Checkout started at {} on line {}", timestamp, lane)
            }
            Event::CheckoutCompleted {
                timestamp,
                lane,
                customer,
            } => write!(
                f,
                "{} completes checkout at {} line {}",
                customer, timestamp, lane
            ),
            Event::CloseLine { timestamp, lane } => {
                write!(f, "Line {} closed at {}", lane, timestamp)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::customer::Item;
    use crate::store::StoreLayout;

    fn store(regular: usize, capacity: usize) -> Store {
        Store::new(StoreLayout {
            regular_count: regular,
            express_count: 0,
            self_serve_count: 0,
            line_capacity: capacity,
        })
    }

    fn customer(name: &str, item_times: &[u64]) -> Customer {
        let items = item_times
            .iter()
            .enumerate()
            .map(|(i, &t)| Item::new(format!("i{i}"), t))
            .collect();
        Customer::new(name, items)
    }

    #[test]
    fn arrival_into_empty_lane_starts_checkout() {
        let mut store = store(1, 2);
        let event = Event::CustomerArrival {
            timestamp: 4,
            customer: customer("ann", &[3]),
        };
        let spawned = event.apply(&mut store).unwrap();
        assert!(matches!(
            &spawned[..],
            [Event::CheckoutStarted { timestamp: 4, lane: 0 }]
        ));
        assert_eq!(store.first_in_line(0).unwrap().arrival_time(), Some(4));
    }

    #[test]
    fn arrival_behind_another_customer_spawns_nothing() {
        let mut store = store(1, 2);
        Event::CustomerArrival {
            timestamp: 0,
            customer: customer("ann", &[3]),
        }
        .apply(&mut store)
        .unwrap();
        let spawned = Event::CustomerArrival {
            timestamp: 0,
            customer: customer("bob", &[2]),
        }
        .apply(&mut store)
        .unwrap();
        assert!(spawned.is_empty());
    }

    #[test]
    fn rejected_arrival_retries_next_tick() {
        let mut store = store(1, 1);
        Event::CustomerArrival {
            timestamp: 0,
            customer: customer("ann", &[3]),
        }
        .apply(&mut store)
        .unwrap();
        let spawned = Event::CustomerArrival {
            timestamp: 0,
            customer: customer("bob", &[2]),
        }
        .apply(&mut store)
        .unwrap();
        match &spawned[..] {
            [Event::CustomerArrival {
                timestamp,
                customer,
            }] => {
                assert_eq!(*timestamp, 1);
                assert_eq!(customer.name(), "bob");
                // The rejected attempt still stamps the arrival tick.
                assert_eq!(customer.arrival_time(), Some(0));
            }
            other => panic!("expected retry arrival, got {other:?}"),
        }
    }

    #[test]
    fn checkout_started_schedules_completion_after_billing() {
        let mut store = store(1, 2);
        Event::CustomerArrival {
            timestamp: 2,
            customer: customer("ann", &[3, 4]),
        }
        .apply(&mut store)
        .unwrap();
        let spawned = Event::CheckoutStarted {
            timestamp: 2,
            lane: 0,
        }
        .apply(&mut store)
        .unwrap();
        match &spawned[..] {
            [Event::CheckoutCompleted {
                timestamp,
                lane,
                customer,
            }] => {
                assert_eq!(*timestamp, 9);
                assert_eq!(*lane, 0);
                assert_eq!(customer, "ann");
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn completion_with_waiting_customer_starts_next_checkout() {
        let mut store = store(1, 2);
        for name in ["ann", "bob"] {
            Event::CustomerArrival {
                timestamp: 0,
                customer: customer(name, &[1]),
            }
            .apply(&mut store)
            .unwrap();
        }
        let spawned = Event::CheckoutCompleted {
            timestamp: 5,
            lane: 0,
            customer: "ann".into(),
        }
        .apply(&mut store)
        .unwrap();
        assert!(matches!(
            &spawned[..],
            [Event::CheckoutStarted { timestamp: 5, lane: 0 }]
        ));
    }

    #[test]
    fn completion_on_empty_lane_afterwards_spawns_nothing() {
        let mut store = store(1, 2);
        Event::CustomerArrival {
            timestamp: 0,
            customer: customer("ann", &[1]),
        }
        .apply(&mut store)
        .unwrap();
        let spawned = Event::CheckoutCompleted {
            timestamp: 1,
            lane: 0,
            customer: "ann".into(),
        }
        .apply(&mut store)
        .unwrap();
        assert!(spawned.is_empty());
    }

    #[test]
    fn checkout_started_on_empty_lane_fails_loudly() {
        let mut store = store(1, 2);
        let result = Event::CheckoutStarted {
            timestamp: 0,
            lane: 0,
        }
        .apply(&mut store);
        assert!(matches!(result, Err(SimulationError::EmptyLane(0))));
    }

    #[test]
    fn close_line_staggers_displaced_arrivals() {
        let mut store = store(1, 3);
        for name in ["a", "b", "c"] {
            Event::CustomerArrival {
                timestamp: 0,
                customer: customer(name, &[1]),
            }
            .apply(&mut store)
            .unwrap();
        }
        let spawned = Event::CloseLine {
            timestamp: 10,
            lane: 0,
        }
        .apply(&mut store)
        .unwrap();
        let picked: Vec<(u64, &str)> = spawned
            .iter()
            .map(|e| match e {
                Event::CustomerArrival {
                    timestamp,
                    customer,
                } => (*timestamp, customer.name()),
                other => panic!("expected arrival, got {other}"),
            })
            .collect();
        assert_eq!(picked, [(10, "b"), (11, "c")]);
    }

    #[test]
    fn close_line_with_lone_customer_spawns_nothing() {
        let mut store = store(1, 3);
        Event::CustomerArrival {
            timestamp: 0,
            customer: customer("a", &[1]),
        }
        .apply(&mut store)
        .unwrap();
        let spawned = Event::CloseLine {
            timestamp: 3,
            lane: 0,
        }
        .apply(&mut store)
        .unwrap();
        assert!(spawned.is_empty());
    }

    #[test]
    fn renders_like_the_event_log() {
        let arrival = Event::CustomerArrival {
            timestamp: 3,
            customer: customer("Ann", &[1]),
        };
        assert_eq!(arrival.to_string(), "Ann arrives at 3");
        let started = Event::CheckoutStarted {
            timestamp: 3,
            lane: 0,
        };
        assert_eq!(started.to_string(), "Checkout started at 3 on line 0");
    }
}
