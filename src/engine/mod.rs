//! The game engine: one round of Hangman behind a small synchronous
//! call surface.
//!
//! The engine owns the word list, the RNG, and the current round. It does
//! no I/O and renders nothing - a presentation layer calls the operations
//! and reads state back through the queries. Invalid guesses come back as
//! [`GuessRejection`] values, never as errors or panics, and a rejected
//! guess mutates nothing.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::round::{RoundState, RoundStatus, STARTING_ATTEMPTS};
use crate::words::WordList;

/// Why a guess was refused. No engine state changes on any of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessRejection {
    /// The round is already won or lost.
    GameOver,
    /// Empty input.
    EmptyInput,
    /// More than one character.
    TooLong,
    /// The character is not an ASCII letter.
    NotALetter,
    /// The letter was already submitted this round.
    Duplicate,
}

/// Result of `submit_guess`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The guess was applied.
    Accepted {
        /// The letter occurs in the secret word.
        correct: bool,
        /// Round status after applying the guess.
        status: RoundStatus,
    },
    /// The guess was refused; state is unchanged.
    Rejected(GuessRejection),
}

impl GuessOutcome {
    /// Shorthand for matching on acceptance.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, GuessOutcome::Accepted { .. })
    }
}

/// Hangman rules engine for a single session.
///
/// One instance serves one player session; rounds are sequential. All
/// operations are synchronous and run to completion - there is no shared
/// state and no interior mutability.
#[derive(Clone, Debug)]
pub struct GameEngine {
    words: WordList,
    rng: GameRng,
    round: RoundState,
}

impl GameEngine {
    /// Create an engine with a deterministic seed and start the first round.
    ///
    /// The same seed and word list always produce the same sequence of
    /// secret words across rounds.
    #[must_use]
    pub fn new(words: WordList, seed: u64) -> Self {
        Self::with_rng(words, GameRng::new(seed))
    }

    /// Create an engine seeded from the operating system.
    #[must_use]
    pub fn from_entropy(words: WordList) -> Self {
        Self::with_rng(words, GameRng::from_entropy())
    }

    fn with_rng(words: WordList, mut rng: GameRng) -> Self {
        let round = Self::select_round(&words, &mut rng);
        Self { words, rng, round }
    }

    fn select_round(words: &WordList, rng: &mut GameRng) -> RoundState {
        let secret = rng
            .choose(words.as_slice())
            .expect("WordList is validated non-empty")
            .clone();
        RoundState::new(secret)
    }

    /// Discard the current round and start a fresh one.
    ///
    /// Selects a new secret word uniformly at random, clears guessed and
    /// wrong letters, and resets remaining attempts to 6. Valid from any
    /// state, including mid-round.
    pub fn start_new_round(&mut self) {
        self.round = Self::select_round(&self.words, &mut self.rng);
    }

    /// Validate and apply one letter guess.
    ///
    /// Rejections are checked in a fixed order (game over, empty, too long,
    /// not a letter, duplicate); the first failing check wins and nothing
    /// mutates. Input is lowercase-normalized before comparison, so `"A"`
    /// and `"a"` are the same guess.
    pub fn submit_guess(&mut self, input: &str) -> GuessOutcome {
        if self.round.status().is_terminal() {
            return GuessOutcome::Rejected(GuessRejection::GameOver);
        }

        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (None, _) => return GuessOutcome::Rejected(GuessRejection::EmptyInput),
            (Some(_), Some(_)) => return GuessOutcome::Rejected(GuessRejection::TooLong),
            (Some(c), None) => c.to_ascii_lowercase(),
        };

        if !letter.is_ascii_lowercase() {
            return GuessOutcome::Rejected(GuessRejection::NotALetter);
        }

        if self.round.already_guessed(letter) {
            return GuessOutcome::Rejected(GuessRejection::Duplicate);
        }

        let correct = self.round.apply(letter);
        GuessOutcome::Accepted {
            correct,
            status: self.round.status(),
        }
    }

    // === Queries ===

    /// The revealed buffer: placeholders and revealed letters in word order.
    #[must_use]
    pub fn display_word(&self) -> String {
        self.round.revealed().iter().collect()
    }

    /// The revealed buffer with letters space-separated, blackboard style
    /// (`"c _ t"`).
    #[must_use]
    pub fn display_word_spaced(&self) -> String {
        Self::space_separated(self.round.revealed())
    }

    /// Wrongly guessed letters, in guess order.
    #[must_use]
    pub fn wrong_letters(&self) -> &[char] {
        self.round.wrong()
    }

    /// Wrongly guessed letters space-separated for display (`"z q m"`).
    #[must_use]
    pub fn wrong_letters_display(&self) -> String {
        Self::space_separated(self.round.wrong())
    }

    /// Wrong guesses left before the round is lost. Starts at 6, floor 0.
    #[must_use]
    pub fn remaining_attempts(&self) -> u8 {
        self.round.attempts_remaining()
    }

    /// Count of letters submitted this round, correct or wrong.
    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.round.guessed_count()
    }

    /// Every letter submitted this round, sorted alphabetically.
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        self.round.guessed_sorted()
    }

    /// Current round status, derived from state.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    /// Index of the hangman drawing stage, 0..=6 (= wrong guesses so far).
    #[must_use]
    pub fn hangman_stage(&self) -> u8 {
        (self.round.wrong().len() as u8).min(STARTING_ATTEMPTS)
    }

    /// The secret word. For end-of-round reveal messaging; the engine does
    /// not police mid-round access, that is the caller's responsibility.
    #[must_use]
    pub fn secret_word(&self) -> &str {
        self.round.secret()
    }

    /// The injected word list.
    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    fn space_separated(letters: &[char]) -> String {
        let mut out = String::with_capacity(letters.len() * 2);
        for (i, c) in letters.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*c);
        }
        out
    }
}
