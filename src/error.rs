use thiserror::Error;

/// Rejected word text (empty, or containing anything besides `a`-`z`).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("The word is empty")]
    Empty,
    #[error("The word '{0}' contains characters outside a-z")]
    NotAlphabetic(String),
}

/// Reasons a guess is turned away. A rejected guess never touches the session.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("The letter '{0}' was already guessed")]
    AlreadyGuessed(char),
    #[error("The round is over")]
    RoundOver,
}

/// Failures on the remote word/definition path. These never reach the player:
/// the word source swaps in a fallback word instead.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Remote lookup is disabled")]
    Disabled,
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("The response contained no word")]
    MissingWord,
    #[error("No definition found for '{0}'")]
    MissingDefinition(String),
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("hint_max_chars must be between 1 and {max}, got {0}", max = crate::game::HINT_MAX_CHARS)]
    HintLengthOutOfRange(usize),
}
