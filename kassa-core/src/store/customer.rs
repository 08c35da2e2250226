//! Customer and item records.

/// A single item to be rung up at a checkout lane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
    time: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, time: u64) -> Self {
        Self {
            name: name.into(),
            time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seconds of service time this item contributes.
    pub fn time(&self) -> u64 {
        self.time
    }
}

/// A store customer carrying a fixed set of items.
///
/// `name` is the unique identifier within a run. `arrival_time` stays
/// `None` until the customer first joins a lane and is restamped on every
/// re-arrival after a rejection or a lane closure.
#[derive(Clone, Debug)]
pub struct Customer {
    name: String,
    arrival_time: Option<u64>,
    items: Vec<Item>,
}

impl Customer {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            arrival_time: None,
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival_time(&self) -> Option<u64> {
        self.arrival_time
    }

    pub fn mark_arrival(&mut self, tick: u64) {
        self.arrival_time = Some(tick);
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total service time across all items.
    pub fn total_item_time(&self) -> u64 {
        self.items.iter().map(Item::time).sum()
    }
}
