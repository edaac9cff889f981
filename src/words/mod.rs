//! Word list configuration.
//!
//! The engine never hardcodes its vocabulary - callers inject a validated
//! `WordList` at construction. A built-in 50-word list is provided for the
//! stock game; tests inject singleton lists to pin the secret word.
//!
//! Validation happens here, at construction, so the engine can assume every
//! list it holds is non-empty and every word is lowercase ASCII letters.
//! Starting a round therefore never fails.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The stock vocabulary: 50 lowercase words, 5-11 letters each.
const BUILTIN_WORDS: &[&str] = &[
    "apple", "banana", "chair", "table", "mouse",
    "pizza", "orange", "flower", "music", "cookie",
    "pyramid", "cactus", "dolphin", "galaxy", "thunder",
    "balloon", "journey", "shadow", "magnet", "blanket",
    "labyrinth", "zephyr", "phoenix", "eccentric", "oxygen",
    "mystique", "whimsical", "paradox", "cryptic", "tranquility",
    "elephant", "kangaroo", "crocodile", "penguin", "butterfly",
    "spaghetti", "cinnamon", "chocolate", "lasagna", "avocado",
    "mountain", "volcano", "desert", "iceberg", "archipelago",
    "algorithm", "database", "keyboard", "processor", "cybersecurity",
];

/// Word list validation errors.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum WordListError {
    /// The list contains no words; a round cannot select from nothing.
    #[error("word list is empty")]
    Empty,

    /// A word contains something other than lowercase ASCII letters.
    #[error("invalid word {word:?}: must be non-empty lowercase ASCII letters")]
    InvalidWord {
        /// The offending entry, verbatim.
        word: String,
    },
}

/// An immutable, validated list of candidate secret words.
///
/// Invariants (enforced by `new`):
/// - at least one word
/// - every word is non-empty and consists of lowercase ASCII letters only
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Create a validated word list.
    ///
    /// Returns `WordListError::Empty` for an empty list and
    /// `WordListError::InvalidWord` for any entry that is empty or contains
    /// characters outside `a..=z`.
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        for word in &words {
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(WordListError::InvalidWord { word: word.clone() });
            }
        }

        Ok(Self { words })
    }

    /// The built-in 50-word list.
    #[must_use]
    pub fn builtin() -> Self {
        // The table above is validated by unit test, so this cannot fail.
        Self {
            words: BUILTIN_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Number of words in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty. Always false for a constructed list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, in list order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Get a word by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }
}
