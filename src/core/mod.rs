//! Core engine building blocks that are game-agnostic.
//!
//! Currently this holds the deterministic RNG. Game rules never reach
//! into `rand` directly; they go through `GameRng` so rounds stay
//! replayable from a seed.

pub mod rng;

pub use rng::{GameRng, GameRngState};
