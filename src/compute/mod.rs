//! The elimination engine: uniqueness probes, frontiers and the worker pool.
pub mod engine;
pub mod error;
pub mod frontier;
pub mod pool;
pub mod preset;
pub mod probe;

pub use engine::Engine;
pub use error::{EngineError, MAX_UPPER_BOUND};
pub use pool::EngineConfig;
pub use probe::Partition;
