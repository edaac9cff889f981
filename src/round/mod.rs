//! Per-round state: the secret word, the revealed buffer, guess history,
//! and the remaining-attempts counter.
//!
//! `RoundState` owns every entity that lives exactly one round. It is
//! created whole when a round starts and replaced whole on reset; nothing
//! in it survives into the next round. Validation of raw player input
//! lives in `engine` - by the time a letter reaches `apply` it is a
//! lowercase ASCII letter that has not been guessed this round.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unrevealed positions render as this symbol.
pub const PLACEHOLDER: char = '_';

/// Wrong guesses allowed per round.
pub const STARTING_ATTEMPTS: u8 = 6;

/// Where the round stands. Derived from state, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Guesses are still being accepted.
    InProgress,
    /// The revealed buffer matches the secret word. Terminal.
    Won,
    /// No attempts remain. Terminal.
    Lost,
}

impl RoundStatus {
    /// Won or Lost.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// State of one round.
///
/// Invariants:
/// - `revealed[i]` is `PLACEHOLDER` or exactly the secret's letter at `i`,
///   and only ever transitions placeholder -> letter
/// - `wrong` is a subset of `guessed`, in guess order
/// - `attempts_remaining == STARTING_ATTEMPTS - wrong.len()`, floor 0
#[derive(Clone, Debug)]
pub(crate) struct RoundState {
    secret: String,
    revealed: Vec<char>,
    guessed: FxHashSet<char>,
    wrong: SmallVec<[char; STARTING_ATTEMPTS as usize]>,
    attempts_remaining: u8,
}

impl RoundState {
    /// Start a round with the given secret word.
    pub(crate) fn new(secret: String) -> Self {
        let revealed = vec![PLACEHOLDER; secret.chars().count()];
        Self {
            secret,
            revealed,
            guessed: FxHashSet::default(),
            wrong: SmallVec::new(),
            attempts_remaining: STARTING_ATTEMPTS,
        }
    }

    /// Has this letter been submitted this round (correct or wrong)?
    pub(crate) fn already_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Apply a validated guess. Returns true if the letter is in the secret.
    ///
    /// A correct letter reveals every one of its positions in this single
    /// call. A wrong letter costs exactly one attempt.
    pub(crate) fn apply(&mut self, letter: char) -> bool {
        debug_assert!(!self.already_guessed(letter));
        debug_assert_eq!(self.status(), RoundStatus::InProgress);

        self.guessed.insert(letter);

        let correct = self.secret.contains(letter);
        if correct {
            for (i, c) in self.secret.chars().enumerate() {
                if c == letter {
                    self.revealed[i] = letter;
                }
            }
        } else {
            self.wrong.push(letter);
            self.attempts_remaining -= 1;
        }

        correct
    }

    /// Derive the round status.
    pub(crate) fn status(&self) -> RoundStatus {
        // Full-string comparison, not "no placeholders remain"; the two are
        // equivalent given the reveal invariant.
        if self.revealed.iter().collect::<String>() == self.secret {
            RoundStatus::Won
        } else if self.attempts_remaining == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }

    pub(crate) fn revealed(&self) -> &[char] {
        &self.revealed
    }

    pub(crate) fn wrong(&self) -> &[char] {
        &self.wrong
    }

    pub(crate) fn guessed_count(&self) -> usize {
        self.guessed.len()
    }

    /// All submitted letters, sorted alphabetically. The set itself has no
    /// meaningful order; only `wrong` preserves guess order.
    pub(crate) fn guessed_sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    pub(crate) fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }
}
