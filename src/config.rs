use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::game::HINT_MAX_CHARS;

pub const DEFAULT_WORD_URL: &str = "https://random-word-api.herokuapp.com/word?number=1";
pub const DEFAULT_DEFINITION_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Runtime settings. Every field is optional in the JSON form; missing ones
/// take the defaults below.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// When false the fallback table is used for every round.
    pub remote_words: bool,
    pub word_url: String,
    /// Base URL; the chosen word is appended as the last path segment.
    pub definition_url: String,
    /// Hint truncation point, 1 up to the 100-character ceiling.
    pub hint_max_chars: usize,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            remote_words: true,
            word_url: DEFAULT_WORD_URL.to_string(),
            definition_url: DEFAULT_DEFINITION_URL.to_string(),
            hint_max_chars: HINT_MAX_CHARS,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        if !(1..=HINT_MAX_CHARS).contains(&config.hint_max_chars) {
            return Err(ConfigError::HintLengthOutOfRange(config.hint_max_chars));
        }
        Ok(config)
    }

    /// Definition endpoint for `word`.
    pub fn definition_url_for(&self, word: &str) -> String {
        format!("{}/{}", self.definition_url.trim_end_matches('/'), word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(config.remote_words);
        assert_eq!(config.hint_max_chars, 100);
    }

    #[test]
    fn test_partial_override() {
        let config =
            GameConfig::from_json(r#"{ "remote_words": false, "log_level": "DEBUG" }"#).unwrap();
        assert!(!config.remote_words);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.word_url, DEFAULT_WORD_URL);
    }

    #[test]
    fn test_zero_hint_length_is_rejected() {
        let err = GameConfig::from_json(r#"{ "hint_max_chars": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::HintLengthOutOfRange(0)));
    }

    #[test]
    fn test_hint_length_above_ceiling_is_rejected() {
        let err = GameConfig::from_json(r#"{ "hint_max_chars": 500 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::HintLengthOutOfRange(500)));
        assert!(err.to_string().contains("between 1 and 100"));

        let shorter = GameConfig::from_json(r#"{ "hint_max_chars": 40 }"#).unwrap();
        assert_eq!(shorter.hint_max_chars, 40);
        assert!(GameConfig::from_json(r#"{ "hint_max_chars": 100 }"#).is_ok());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            GameConfig::from_json("{ remote_words"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_definition_url_for() {
        let mut config = GameConfig::default();
        assert_eq!(
            config.definition_url_for("ocean"),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ocean"
        );
        config.definition_url = "http://localhost/defs/".into();
        assert_eq!(config.definition_url_for("pizza"), "http://localhost/defs/pizza");
    }
}
