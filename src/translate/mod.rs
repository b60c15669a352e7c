//! Segment translation with per-segment failure isolation.
//!
//! A failed translation never aborts the run: the segment degrades to its
//! untranslated source text and processing continues.

pub mod google;

use crate::error::{Result, RevoiceError};
use crate::transcript::types::{TranslatedUtterance, Utterance};

/// Trait for the translation collaborator.
///
/// This trait allows swapping implementations (real Google Translate vs mock).
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text between the given language pair.
    ///
    /// Errors are recoverable per-call; callers fall back to the source text.
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Translate each utterance independently, in order.
///
/// Output length and order always match the input. A failed or empty
/// translation for segment `i` yields an identity-translated segment `i`;
/// this function never errors.
pub async fn translate_utterances(
    translator: &dyn Translator,
    utterances: Vec<Utterance>,
    source: &str,
    target: &str,
) -> Vec<TranslatedUtterance> {
    let mut translated = Vec::with_capacity(utterances.len());

    for utterance in utterances {
        match translator.translate(&utterance.text, source, target).await {
            Ok(text) if !text.trim().is_empty() => {
                translated.push(TranslatedUtterance::new(utterance, text));
            }
            // Empty response or call failure: keep the source text
            _ => translated.push(TranslatedUtterance::untranslated(utterance)),
        }
    }

    translated
}

/// Mock translator for testing
#[derive(Debug, Clone, Default)]
pub struct MockTranslator {
    prefix: String,
    should_fail: bool,
    empty_response: bool,
}

impl MockTranslator {
    /// Create a mock that prefixes input text with "fr:"
    pub fn new() -> Self {
        Self {
            prefix: "fr:".to_string(),
            should_fail: false,
            empty_response: false,
        }
    }

    /// Configure the translation prefix applied to every input
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Configure the mock to fail on every call
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Configure the mock to return empty strings
    pub fn with_empty_response(mut self) -> Self {
        self.empty_response = true;
        self
    }
}

#[async_trait::async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String> {
        if self.should_fail {
            Err(RevoiceError::Translation {
                message: "mock translation failure".to_string(),
            })
        } else if self.empty_response {
            Ok(String::new())
        } else {
            Ok(format!("{}{}", self.prefix, text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utterance(speaker_id: u32, text: &str, start: f64, end: f64) -> Utterance {
        Utterance {
            speaker_id,
            text: text.to_string(),
            start_time: start,
            end_time: end,
        }
    }

    #[tokio::test]
    async fn output_matches_input_length_and_order() {
        let translator = MockTranslator::new();
        let input = vec![
            utterance(1, "one", 0.0, 1.0),
            utterance(2, "two", 1.5, 2.0),
            utterance(1, "three", 2.5, 3.0),
        ];
        let output = translate_utterances(&translator, input, "en", "fr").await;

        assert_eq!(output.len(), 3);
        assert_eq!(output[0].text_translated, "fr:one");
        assert_eq!(output[1].text_translated, "fr:two");
        assert_eq!(output[2].text_translated, "fr:three");
        assert_eq!(output[1].speaker_id, 2);
        assert!((output[2].start_time - 2.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn total_failure_degrades_every_segment_to_identity() {
        let translator = MockTranslator::new().with_failure();
        let input = vec![
            utterance(1, "hello world", 0.0, 1.0),
            utterance(2, "goodbye", 2.0, 3.0),
        ];
        let output = translate_utterances(&translator, input, "en", "fr").await;

        assert_eq!(output.len(), 2);
        for segment in &output {
            assert_eq!(segment.text_translated, segment.text);
            assert!(segment.fallback);
        }
    }

    #[tokio::test]
    async fn empty_response_counts_as_failure() {
        let translator = MockTranslator::new().with_empty_response();
        let input = vec![utterance(1, "still here", 0.0, 1.0)];
        let output = translate_utterances(&translator, input, "en", "fr").await;

        assert_eq!(output[0].text_translated, "still here");
        assert!(output[0].fallback);
    }

    #[tokio::test]
    async fn empty_input_yields_empty_output() {
        let translator = MockTranslator::new();
        let output = translate_utterances(&translator, Vec::new(), "en", "fr").await;
        assert!(output.is_empty());
    }
}
