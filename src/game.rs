//! Round state and guess evaluation.
//!
//! A [`GameSession`] owns one round: the secret word, its hint and the letters
//! guessed so far. The round result is recomputed from those on demand.

use std::fmt;

use crate::error::{GuessError, WordError};
use crate::figure::{self, Segment, SEGMENT_COUNT};
use crate::word_source::RoundWord;

/// Longest hint shown before truncation.
pub const HINT_MAX_CHARS: usize = 100;
const ELLIPSIS: &str = "...";
const MASK: char = '_';

/// The guessing target: non-empty, lowercase `a`-`z` only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word(String);

/// Usable in constants, so fixed word tables can be checked at compile time.
pub const fn is_word_text(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}

impl Word {
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim().to_ascii_lowercase();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if !is_word_text(&text) {
            return Err(WordError::NotAlphabetic(text));
        }
        Ok(Self(text))
    }

    /// For text already known to pass [`is_word_text`].
    pub(crate) fn from_checked(text: &str) -> Self {
        debug_assert!(is_word_text(text));
        Self(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hint(String);

impl Hint {
    /// Keeps at most `max_chars` characters, marking a cut with `...`.
    pub fn new(text: &str, max_chars: usize) -> Self {
        match text.char_indices().nth(max_chars) {
            Some((cut, _)) => Self(format!("{}{ELLIPSIS}", &text[..cut])),
            None => Self(text.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundResult {
    InProgress,
    Won,
    Lost,
}

impl RoundResult {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundResult::InProgress)
    }
}

/// What an accepted guess did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    /// Wrong guess; `segment` is the body part it revealed.
    Wrong { segment: Segment },
}

#[derive(Clone, Debug)]
pub struct GameSession {
    word: Word,
    hint: Hint,
    correct: Vec<char>,
    wrong: Vec<char>, // order = drawing order
}

impl GameSession {
    pub fn new(word: Word, hint: Hint) -> Self {
        Self {
            word,
            hint,
            correct: Vec::new(),
            wrong: Vec::new(),
        }
    }

    pub fn from_round(round: RoundWord) -> Self {
        Self::new(round.word, round.hint)
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn hint(&self) -> &Hint {
        &self.hint
    }

    pub fn correct_letters(&self) -> &[char] {
        &self.correct
    }

    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.correct.contains(&letter) || self.wrong.contains(&letter)
    }

    pub fn remaining_tries(&self) -> usize {
        SEGMENT_COUNT.saturating_sub(self.wrong.len())
    }

    /// Won takes precedence over Lost should both ever hold.
    pub fn result(&self) -> RoundResult {
        if self.word.as_str().chars().all(|c| self.correct.contains(&c)) {
            RoundResult::Won
        } else if self.wrong.len() >= SEGMENT_COUNT {
            RoundResult::Lost
        } else {
            RoundResult::InProgress
        }
    }

    pub fn submit_guess(&mut self, letter: char) -> Result<GuessOutcome, GuessError> {
        if self.result().is_terminal() {
            return Err(GuessError::RoundOver);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GuessError::NotALetter(letter));
        }
        let letter = letter.to_ascii_lowercase();
        if self.is_guessed(letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        if self.word.contains(letter) {
            self.correct.push(letter);
            return Ok(GuessOutcome::Correct);
        }

        // The segment for this guess is reported (and drawn) even when it is
        // the one that ends the round.
        let segment =
            figure::segment_for_guess(self.wrong.len() + 1).ok_or(GuessError::RoundOver)?;
        self.wrong.push(letter);
        Ok(GuessOutcome::Wrong { segment })
    }

    /// Retry the same word: progress is wiped, word and hint stay.
    pub fn restart(&mut self) {
        self.correct.clear();
        self.wrong.clear();
    }

    /// One entry per word position, `None` where still hidden.
    pub fn masked_letters(&self) -> Vec<Option<char>> {
        self.word
            .as_str()
            .chars()
            .map(|c| self.correct.contains(&c).then_some(c))
            .collect()
    }

    /// Display form, e.g. `o _ e _ n`.
    pub fn masked_display(&self) -> String {
        self.masked_letters()
            .into_iter()
            .map(|slot| slot.unwrap_or(MASK).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn revealed_word(&self) -> String {
        self.word.as_str().to_ascii_uppercase()
    }
}

/// Maps a keyboard `key` value to a guess letter. Only single `a`-`z` keys
/// (either case) qualify; "Enter", "1", "é" and friends do not.
pub fn parse_key(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}
