use reqwest::Client;

use super::{WordLookup, parse_definition, parse_word_list};
use crate::config::GameConfig;
use crate::error::LookupError;
use crate::game::Word;

/// HTTP lookup against the random-word and dictionary services.
#[derive(Clone, Debug)]
pub struct RemoteLookup {
    client: Client,
    config: GameConfig,
}

impl RemoteLookup {
    pub fn new(config: GameConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_text(&self, url: &str) -> Result<String, LookupError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

impl WordLookup for RemoteLookup {
    async fn random_word(&self) -> Result<Word, LookupError> {
        let body = self.get_text(&self.config.word_url).await?;
        parse_word_list(&body)
    }

    async fn definition(&self, word: &Word) -> Result<String, LookupError> {
        let url = self.config.definition_url_for(word.as_str());
        let body = self.get_text(&url).await?;
        parse_definition(word, &body)
    }
}
