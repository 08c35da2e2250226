use thiserror::Error;

/// Invariant breaches in driver or event logic.
///
/// These are programming errors, not user input problems: a well-formed
/// event list can never produce them. They must abort the run rather than
/// be swallowed, so every caller propagates them with `?`.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("remove_min on an empty event queue")]
    EmptyEventQueue,

    #[error("checkout operation on empty lane {0}")]
    EmptyLane(usize),
}
