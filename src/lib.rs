//! # hangman-engine
//!
//! A UI-agnostic Hangman game-state engine.
//!
//! ## Design Principles
//!
//! 1. **No rendering, no I/O**: the engine enforces the rules of one round
//!    and reports renderable state. A presentation layer (GUI, TUI, tests)
//!    calls the operations and draws what the queries return.
//!
//! 2. **Configuration over convention**: the vocabulary is an injected,
//!    validated [`WordList`] value, not a constant baked into the rules.
//!    Tests pin the secret word by injecting a singleton list.
//!
//! 3. **Rejections are values**: invalid guesses come back as
//!    [`GuessRejection`] variants with no state mutation. The engine has no
//!    fatal error paths; the one configuration failure (a bad word list) is
//!    caught at `WordList` construction.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG
//! - `words`: word list configuration and validation
//! - `round`: per-round state and status derivation
//! - `engine`: the `GameEngine` operation surface
//!
//! ## Example
//!
//! ```
//! use hangman_engine::{GameEngine, GuessOutcome, RoundStatus, WordList};
//!
//! let words = WordList::new(vec!["banana"]).unwrap();
//! let mut engine = GameEngine::new(words, 42);
//!
//! // One correct guess reveals every occurrence at once.
//! let outcome = engine.submit_guess("a");
//! assert!(outcome.is_accepted());
//! assert_eq!(engine.display_word(), "_a_a_a");
//!
//! engine.submit_guess("b");
//! let outcome = engine.submit_guess("n");
//! assert_eq!(
//!     outcome,
//!     GuessOutcome::Accepted { correct: true, status: RoundStatus::Won }
//! );
//! ```

pub mod core;
pub mod engine;
pub mod round;
pub mod words;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState};
pub use crate::engine::{GameEngine, GuessOutcome, GuessRejection};
pub use crate::round::{RoundStatus, PLACEHOLDER, STARTING_ATTEMPTS};
pub use crate::words::{WordList, WordListError};
