//! Prometheus metrics for simulation runs.

use prometheus::{Counter, Histogram, HistogramOpts, Registry};

/// Registry plus the handful of series a run maintains.
#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub processed_events: Counter,
    pub seeded_customers: Counter,
    pub wait_ticks: Histogram,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let processed_events =
            Counter::new("kassa_events_total", "Total processed simulation events").unwrap();
        let seeded_customers =
            Counter::new("kassa_customers_total", "Customers seeded into the run").unwrap();

        let wait_ticks = Histogram::with_opts(
            HistogramOpts::new("kassa_wait_ticks", "Ticks from first arrival to checkout")
                .buckets(vec![1.0, 5.0, 10.0, 50.0, 100.0, 500.0]),
        )
        .unwrap();

        registry
            .register(Box::new(processed_events.clone()))
            .unwrap();
        registry
            .register(Box::new(seeded_customers.clone()))
            .unwrap();
        registry.register(Box::new(wait_ticks.clone())).unwrap();

        Self {
            registry,
            processed_events,
            seeded_customers,
            wait_ticks,
        }
    }

    /// Renders the text exposition format.
    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_default())
    }

    pub fn inc_processed_events(&self) {
        self.processed_events.inc();
    }

    pub fn inc_seeded_customers(&self) {
        self.seeded_customers.inc();
    }

    pub fn observe_wait(&self, ticks: u64) {
        self.wait_ticks.observe(ticks as f64);
    }
}
