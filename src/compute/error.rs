use crate::store::CapacityError;
use thiserror::Error;

/// Largest accepted upper bound for both pair coordinates.
pub const MAX_UPPER_BOUND: u64 = 1 << 32;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Upper bound {bound} outside allowed range [1, {max}]", max = MAX_UPPER_BOUND)]
    BoundOutOfRange { bound: u64 },
    #[error("Candidate space does not fit in memory: {0}")]
    CapacityExceeded(#[from] CapacityError),
    #[error("Worker pool error: {0}")]
    WorkerPool(String),
    #[error("Engine state poisoned by an interrupted operation")]
    Poisoned,
}
