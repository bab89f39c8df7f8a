//! Elimination engine for the "impossible puzzle": P knows `a·b`, S knows
//! `a+b`, and each in turn declares whether that alone pins down the hidden
//! pair `a <= b <= n`.
//!
//! - `store`: the pair codec and the arena bit-set of eliminated pairs.
//! - `compute`: the uniqueness probe, frontiers, presets and the [`Engine`].
//! - `dialogue`: the turn-taking protocol that drives the engine.

pub mod compute;
pub mod dialogue;
pub mod store;

pub use compute::{Engine, EngineConfig, EngineError};
pub use dialogue::{Dialogue, Reply, Speaker, Speech};
pub use store::Pair;
