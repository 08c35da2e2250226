//! # kassa-core
//!
//! Foundation layer for the checkout-lane simulation engine.
//! Deterministic-first: identical inputs always replay to identical state.
//!
//! ### Key Submodules:
//! - `events`: event variants, their transition logic, and the tick-ordered
//!   event queue with FIFO tie-breaking
//! - `store`: the store/lane model (admission and service-time policy)
//!
//! Simulated time is an abstract `u64` tick counter with no relation to
//! wall-clock time. All processing is strictly sequential; the store and
//! its lanes are only ever mutated by the event currently being applied.

pub mod error;
pub mod events;
pub mod store;

pub mod prelude {
    pub use crate::error::SimulationError;
    pub use crate::events::queue::EventQueue;
    pub use crate::events::Event;
    pub use crate::store::customer::{Customer, Item};
    pub use crate::store::lane::{CheckoutLane, LaneKind, EXPRESS_ITEM_LIMIT};
    pub use crate::store::{Admission, Store, StoreLayout};
}

pub use error::SimulationError;
pub use store::StoreLayout;
