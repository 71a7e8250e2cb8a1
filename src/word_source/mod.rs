//! Word/hint supply for each round.
//!
//! The remote path asks one service for a random word and a dictionary service
//! for its first definition. Any failure along the way is absorbed: the round
//! gets a pair from the local [`FALLBACK_WORDS`] table instead, so
//! [`fetch_round`] always produces something playable.

mod fallback;
mod remote;

pub use fallback::{FALLBACK_WORDS, pick_fallback};
pub use remote::RemoteLookup;

use rand::Rng;
use serde::Deserialize;

use crate::config::GameConfig;
use crate::error::LookupError;
use crate::game::{Hint, Word};

/// The word and hint a round is played with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundWord {
    pub word: Word,
    pub hint: Hint,
}

/// Remote side of the word source.
#[allow(async_fn_in_trait)]
pub trait WordLookup {
    async fn random_word(&self) -> Result<Word, LookupError>;
    async fn definition(&self, word: &Word) -> Result<String, LookupError>;
}

/// Used when remote words are switched off.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineLookup;

impl WordLookup for OfflineLookup {
    async fn random_word(&self) -> Result<Word, LookupError> {
        Err(LookupError::Disabled)
    }

    async fn definition(&self, _word: &Word) -> Result<String, LookupError> {
        Err(LookupError::Disabled)
    }
}

// --- Response shapes ----------------------------------------------------------

#[derive(Deserialize)]
struct DictionaryEntry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Deserialize)]
struct Definition {
    definition: Option<String>,
}

/// Word endpoint body: a JSON array whose first string is the word.
pub fn parse_word_list(body: &str) -> Result<Word, LookupError> {
    let words: Vec<String> = serde_json::from_str(body)?;
    let first = words.into_iter().next().ok_or(LookupError::MissingWord)?;
    Ok(Word::new(&first)?)
}

/// Dictionary body: `[0].meanings[0].definitions[0].definition`. A missing or
/// empty link anywhere on that path counts as no definition.
pub fn parse_definition(word: &Word, body: &str) -> Result<String, LookupError> {
    let entries: Vec<DictionaryEntry> = serde_json::from_str(body)?;
    entries
        .into_iter()
        .next()
        .and_then(|entry| entry.meanings.into_iter().next())
        .and_then(|meaning| meaning.definitions.into_iter().next())
        .and_then(|definition| definition.definition)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| LookupError::MissingDefinition(word.to_string()))
}

async fn fetch_remote<L: WordLookup>(
    lookup: &L,
    config: &GameConfig,
) -> Result<RoundWord, LookupError> {
    let word = lookup.random_word().await?;
    let definition = lookup.definition(&word).await?;
    Ok(RoundWord {
        word,
        hint: Hint::new(&definition, config.hint_max_chars),
    })
}

/// Local table draw, hint limits applied the same way as for remote hints.
/// The table's words are validated when the crate is compiled.
pub fn fallback_round<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> RoundWord {
    let (word, hint) = pick_fallback(rng);
    RoundWord {
        word: Word::from_checked(word),
        hint: Hint::new(hint, config.hint_max_chars),
    }
}

/// One remote attempt, then a single fallback decision. Never fails.
pub async fn fetch_round<L, R>(lookup: &L, config: &GameConfig, rng: &mut R) -> RoundWord
where
    L: WordLookup,
    R: Rng + ?Sized,
{
    match fetch_remote(lookup, config).await {
        Ok(round) => {
            log::debug!("remote word selected ({} letters)", round.word.as_str().len());
            round
        }
        Err(err) => {
            log::info!("Using fallback word list: {err}");
            fallback_round(config, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DICTIONARY_BODY: &str = r#"[
        {
            "word": "ocean",
            "meanings": [
                { "partOfSpeech": "noun",
                  "definitions": [ { "definition": "A large body of water." } ] }
            ]
        }
    ]"#;

    #[test]
    fn test_parse_word_list_takes_first_word() {
        let word = parse_word_list(r#"["Harbor", "ignored"]"#).unwrap();
        assert_eq!(word.as_str(), "harbor");
    }

    #[test]
    fn test_parse_word_list_failures() {
        assert!(matches!(parse_word_list("[]"), Err(LookupError::MissingWord)));
        assert!(matches!(parse_word_list("{}"), Err(LookupError::Malformed(_))));
        assert!(matches!(
            parse_word_list(r#"["well-known"]"#),
            Err(LookupError::InvalidWord(_))
        ));
    }

    #[test]
    fn test_parse_definition_happy_path() {
        let word = Word::new("ocean").unwrap();
        assert_eq!(
            parse_definition(&word, DICTIONARY_BODY).unwrap(),
            "A large body of water."
        );
    }

    #[test]
    fn test_parse_definition_missing_links() {
        let word = Word::new("ocean").unwrap();
        for body in [
            "[]",
            r#"[{}]"#,
            r#"[{ "meanings": [] }]"#,
            r#"[{ "meanings": [{}] }]"#,
            r#"[{ "meanings": [{ "definitions": [] }] }]"#,
            r#"[{ "meanings": [{ "definitions": [{}] }] }]"#,
            r#"[{ "meanings": [{ "definitions": [{ "definition": "  " }] }] }]"#,
        ] {
            assert!(
                matches!(
                    parse_definition(&word, body),
                    Err(LookupError::MissingDefinition(_))
                ),
                "body {body} should have no definition"
            );
        }
    }

    #[test]
    fn test_fallback_round_matches_a_table_entry() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let config = GameConfig {
            hint_max_chars: 10,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let round = fallback_round(&config, &mut rng);
            let (word, hint) = FALLBACK_WORDS
                .iter()
                .find(|(word, _)| *word == round.word.as_str())
                .expect("fallback word comes from the table");
            assert_eq!(round.word, Word::new(word).unwrap());
            assert_eq!(round.hint, Hint::new(hint, 10));
        }
    }

    #[test]
    fn test_parse_definition_not_found_object() {
        // The dictionary answers unknown words with an object, not an array.
        let word = Word::new("zzxq").unwrap();
        let body = r#"{ "title": "No Definitions Found", "message": "Sorry pal" }"#;
        assert!(matches!(
            parse_definition(&word, body),
            Err(LookupError::Malformed(_))
        ));
    }
}
