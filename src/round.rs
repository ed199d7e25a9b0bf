//! Round generation and guess evaluation.
//!
//! A [`Round`] is built once by [`generate`] and afterwards only its guesses
//! change. Correctness is never stored: [`Round::is_correct`] and
//! [`Round::all_correct`] recompute it from the current guesses on each call.

use crate::debug_log;
use crate::error::GameError;
use rand::Rng;
use rand::seq::{SliceRandom, index};

/// Number of words in every round.
pub const WORDS_PER_ROUND: usize = 6;

/// What a front end should show next to a guess field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// Nothing typed yet, so no indicator.
    Blank,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    original_words: Vec<String>,
    shuffled_words: Vec<String>,
    guesses: Vec<String>,
}

impl Round {
    /// A round with no words. Never counts as solved.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.original_words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original_words.is_empty()
    }

    #[must_use]
    pub fn original_words(&self) -> &[String] {
        &self.original_words
    }

    #[must_use]
    pub fn shuffled_words(&self) -> &[String] {
        &self.shuffled_words
    }

    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// The guess in slot `index`, or `None` outside the round.
    #[must_use]
    pub fn guess(&self, index: usize) -> Option<&str> {
        self.guesses.get(index).map(String::as_str)
    }

    /// Replace one guess verbatim. Normalization happens only when evaluating.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if `index` is not a slot of this
    /// round; the round is left unchanged.
    pub fn set_guess(&mut self, index: usize, text: impl Into<String>) -> Result<(), GameError> {
        let len = self.guesses.len();
        let slot = self
            .guesses
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange { index, len })?;
        *slot = text.into();
        debug_log!("set_guess() - slot {} is now '{}'", index, slot);
        Ok(())
    }

    /// Whether slot `index` holds the original word, ignoring case and
    /// surrounding whitespace. Blank guesses and unknown slots are never correct.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        let (Some(guess), Some(original)) =
            (self.guesses.get(index), self.original_words.get(index))
        else {
            return false;
        };
        let guess = normalize_guess(guess);
        !guess.is_empty() && guess == original.to_lowercase()
    }

    /// True only for a non-empty round whose every slot is correct.
    #[must_use]
    pub fn all_correct(&self) -> bool {
        !self.is_empty() && (0..self.len()).all(|i| self.is_correct(i))
    }

    #[must_use]
    pub fn slot_status(&self, index: usize) -> SlotStatus {
        match self.guess(index) {
            None | Some("") => SlotStatus::Blank,
            Some(_) if self.is_correct(index) => SlotStatus::Correct,
            Some(_) => SlotStatus::Incorrect,
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_correct(i)).count()
    }
}

/// Trim and lower-case a guess the way it is compared.
#[must_use]
pub fn normalize_guess(guess: &str) -> String {
    guess.trim().to_lowercase()
}

/// Uniformly permute the characters of `word`. Words of one character or
/// fewer come back unchanged.
pub fn shuffle_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.shuffle(rng);
    chars.into_iter().collect()
}

/// Pick `n` words without replacement and scramble each one.
///
/// # Errors
///
/// Returns [`GameError::InsufficientWords`] if `words` holds fewer than `n`
/// entries. No partial round is produced.
pub fn generate<R: Rng + ?Sized>(
    words: &[String],
    n: usize,
    rng: &mut R,
) -> Result<Round, GameError> {
    if words.len() < n {
        return Err(GameError::InsufficientWords {
            required: n,
            available: words.len(),
        });
    }

    let original_words: Vec<String> = index::sample(rng, words.len(), n)
        .into_iter()
        .map(|i| words[i].clone())
        .collect();
    let shuffled_words = original_words
        .iter()
        .map(|word| shuffle_word(word, rng))
        .collect();
    debug_log!("generate() - selected {:?}", original_words);

    Ok(Round {
        original_words,
        shuffled_words,
        guesses: vec![String::new(); n],
    })
}
