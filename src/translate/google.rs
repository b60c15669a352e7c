//! Google Translate v2 backend.

use crate::error::{Result, RevoiceError};
use crate::translate::Translator;
use serde::Deserialize;

const TRANSLATE_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Translation client backed by Google Translate v2.
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleTranslator {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let response = self
            .client
            .post(TRANSLATE_ENDPOINT)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", text),
                ("source", source),
                ("target", target),
                ("format", "text"),
            ])
            .send()
            .await
            .map_err(|e| RevoiceError::Translation {
                message: format!("request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(RevoiceError::Translation {
                message: format!("translate API returned {}", response.status()),
            });
        }

        let body: TranslateResponse =
            response
                .json()
                .await
                .map_err(|e| RevoiceError::Translation {
                    message: format!("invalid translate response: {e}"),
                })?;

        body.data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| RevoiceError::Translation {
                message: "empty translations list".to_string(),
            })
    }
}

// Wire types for the Translate v2 REST API.

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_response_parses_wire_shape() {
        let json = r#"{"data": {"translations": [{"translatedText": "bonjour le monde"}]}}"#;
        let response: TranslateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.data.translations[0].translated_text,
            "bonjour le monde"
        );
    }

    #[test]
    fn translate_response_tolerates_empty_list() {
        let json = r#"{"data": {}}"#;
        let response: TranslateResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.translations.is_empty());
    }
}
