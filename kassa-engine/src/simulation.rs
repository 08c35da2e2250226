//! The simulation driver: a tight sequential loop over the event queue.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use kassa_core::events::queue::EventQueue;
use kassa_core::events::Event;
use kassa_core::store::Store;
use kassa_core::SimulationError;
use kassa_telemetry::MetricsRecorder;

/// Aggregate statistics for one run.
///
/// `total_time` is the timestamp of the last event processed. `max_wait` is
/// the largest completion-minus-first-arrival span over customers who
/// finished checkout, or `-1` when nobody finished.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SimStats {
    pub num_customers: usize,
    pub total_time: u64,
    pub max_wait: i64,
}

/// One simulation run over a store and its pending events.
///
/// Execution is single-threaded and fully synchronous; given an identical
/// seed event list the transition sequence is reproducible byte for byte.
pub struct Simulation {
    store: Store,
    events: EventQueue,
    metrics: Option<MetricsRecorder>,
}

impl Simulation {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            events: EventQueue::new(),
            metrics: None,
        }
    }

    /// Attaches a metrics recorder updated as the run progresses.
    pub fn with_metrics(mut self, metrics: MetricsRecorder) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Drains the seed events and every event they spawn, to completion.
    ///
    /// Waits are measured from the seeded arrival tick: re-arrivals after a
    /// rejection or a lane closure never re-register a customer.
    pub fn run(&mut self, initial_events: Vec<Event>) -> Result<SimStats, SimulationError> {
        let mut stats = SimStats {
            num_customers: 0,
            total_time: 0,
            max_wait: -1,
        };
        let mut first_arrival: HashMap<String, u64> = HashMap::new();

        for event in initial_events {
            if let Event::CustomerArrival {
                timestamp,
                customer,
            } = &event
            {
                stats.num_customers += 1;
                first_arrival.insert(customer.name().to_owned(), *timestamp);
                if let Some(metrics) = &self.metrics {
                    metrics.inc_seeded_customers();
                }
            }
            self.events.add(event);
        }

        while !self.events.is_empty() {
            let event = self.events.remove_min()?;
            let timestamp = event.timestamp();
            debug!(tick = timestamp, "processing {}", event);

            if let Event::CheckoutCompleted { customer, .. } = &event {
                if let Some(&arrived) = first_arrival.get(customer) {
                    let wait = timestamp - arrived;
                    stats.max_wait = stats.max_wait.max(wait as i64);
                    if let Some(metrics) = &self.metrics {
                        metrics.observe_wait(wait);
                    }
                }
            }

            for follow_up in event.apply(&mut self.store)? {
                self.events.add(follow_up);
            }
            stats.total_time = timestamp;
            if let Some(metrics) = &self.metrics {
                metrics.inc_processed_events();
            }
        }

        info!(
            customers = stats.num_customers,
            total_time = stats.total_time,
            max_wait = stats.max_wait,
            "simulation finished"
        );
        Ok(stats)
    }
}
