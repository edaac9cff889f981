//! Property tests for the engine's invariants.
//!
//! Rounds are driven with arbitrary input sequences (valid letters mixed
//! with junk) and the spec-level invariants are checked after every single
//! submission, not just at the end.

use proptest::prelude::*;

use hangman_engine::{GameEngine, GuessOutcome, RoundStatus, WordList, STARTING_ATTEMPTS};

/// Raw input the way a text box would produce it: mostly single letters,
/// with empty strings, multi-char strings, digits, and punctuation mixed in.
fn raw_input() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-z]",
        2 => "[A-Z]",
        1 => Just(String::new()),
        1 => "[a-z]{2,4}",
        1 => "[0-9!?.]",
    ]
}

fn secret_word() -> impl Strategy<Value = String> {
    "[a-z]{2,11}"
}

fn snapshot(engine: &GameEngine) -> (String, Vec<char>, u8, usize, RoundStatus) {
    (
        engine.display_word(),
        engine.wrong_letters().to_vec(),
        engine.remaining_attempts(),
        engine.guessed_count(),
        engine.status(),
    )
}

proptest! {
    /// Attempts only ever decrease, by exactly one, and only on a wrong
    /// accepted guess; guessed letters grow by exactly one per acceptance.
    #[test]
    fn attempts_and_guesses_move_in_lockstep(
        word in secret_word(),
        inputs in prop::collection::vec(raw_input(), 0..60),
    ) {
        let mut engine = GameEngine::new(WordList::new(vec![word]).unwrap(), 0);

        for input in &inputs {
            let attempts_before = engine.remaining_attempts();
            let guessed_before = engine.guessed_count();

            match engine.submit_guess(input) {
                GuessOutcome::Accepted { correct: true, .. } => {
                    prop_assert_eq!(engine.remaining_attempts(), attempts_before);
                    prop_assert_eq!(engine.guessed_count(), guessed_before + 1);
                }
                GuessOutcome::Accepted { correct: false, .. } => {
                    prop_assert_eq!(engine.remaining_attempts(), attempts_before - 1);
                    prop_assert_eq!(engine.guessed_count(), guessed_before + 1);
                }
                GuessOutcome::Rejected(_) => {
                    prop_assert_eq!(engine.remaining_attempts(), attempts_before);
                    prop_assert_eq!(engine.guessed_count(), guessed_before);
                }
            }

            prop_assert!(engine.remaining_attempts() <= STARTING_ATTEMPTS);
        }
    }

    /// Wrong letters stay consistent with the attempts counter, and the
    /// revealed buffer only ever gains letters.
    #[test]
    fn wrong_letters_and_reveal_invariants(
        word in secret_word(),
        inputs in prop::collection::vec(raw_input(), 0..60),
    ) {
        let word_len = word.len();
        let mut engine = GameEngine::new(WordList::new(vec![word.clone()]).unwrap(), 0);
        let mut prev_display = engine.display_word();

        for input in &inputs {
            engine.submit_guess(input);

            let wrong = engine.wrong_letters();
            prop_assert_eq!(
                wrong.len() as u8,
                STARTING_ATTEMPTS - engine.remaining_attempts()
            );
            for letter in wrong {
                prop_assert!(!word.contains(*letter));
            }

            let display = engine.display_word();
            prop_assert_eq!(display.chars().count(), word_len);
            for (prev, cur) in prev_display.chars().zip(display.chars()) {
                // placeholder -> letter only, never back
                if prev != '_' {
                    prop_assert_eq!(prev, cur);
                }
            }
            prev_display = display;
        }
    }

    /// A rejected submission leaves every observable piece of state intact.
    #[test]
    fn rejections_mutate_nothing(
        word in secret_word(),
        inputs in prop::collection::vec(raw_input(), 0..60),
    ) {
        let mut engine = GameEngine::new(WordList::new(vec![word]).unwrap(), 0);

        for input in &inputs {
            let before = snapshot(&engine);
            let outcome = engine.submit_guess(input);
            if !outcome.is_accepted() {
                prop_assert_eq!(snapshot(&engine), before);
            }
        }
    }

    /// Once terminal, the round stays terminal and frozen until reset.
    #[test]
    fn terminal_rounds_are_frozen(
        word in secret_word(),
        inputs in prop::collection::vec(raw_input(), 0..80),
    ) {
        let mut engine = GameEngine::new(WordList::new(vec![word]).unwrap(), 0);
        let mut terminal_at: Option<(String, Vec<char>, u8, usize, RoundStatus)> = None;

        for input in &inputs {
            let outcome = engine.submit_guess(input);

            if let Some(frozen) = &terminal_at {
                prop_assert_eq!(
                    outcome,
                    GuessOutcome::Rejected(hangman_engine::GuessRejection::GameOver)
                );
                prop_assert_eq!(&snapshot(&engine), frozen);
            } else if engine.status().is_terminal() {
                terminal_at = Some(snapshot(&engine));
            }
        }

        // Won iff fully revealed, Lost iff out of attempts.
        match engine.status() {
            RoundStatus::Won => {
                prop_assert_eq!(engine.display_word(), engine.secret_word());
            }
            RoundStatus::Lost => prop_assert_eq!(engine.remaining_attempts(), 0),
            RoundStatus::InProgress => {
                prop_assert!(engine.remaining_attempts() > 0);
                prop_assert!(engine.display_word().contains('_'));
            }
        }
    }

    /// Reset always produces a fresh round, whatever happened before.
    #[test]
    fn reset_restores_initial_shape(
        words in prop::collection::vec("[a-z]{2,11}", 1..8),
        inputs in prop::collection::vec(raw_input(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut engine = GameEngine::new(WordList::new(words.clone()).unwrap(), seed);

        for input in &inputs {
            engine.submit_guess(input);
        }
        engine.start_new_round();

        prop_assert_eq!(engine.status(), RoundStatus::InProgress);
        prop_assert_eq!(engine.remaining_attempts(), STARTING_ATTEMPTS);
        prop_assert_eq!(engine.guessed_count(), 0);
        prop_assert!(engine.wrong_letters().is_empty());
        prop_assert!(engine.display_word().chars().all(|c| c == '_'));
        prop_assert!(words.iter().any(|w| w == engine.secret_word()));
    }
}
