use crate::error::{Result, RevoiceError};
use crate::transcript::types::WordUnit;

/// Trait for the transcription collaborator.
///
/// Takes raw audio and returns the diarized word stream. This trait allows
/// swapping implementations (real Google Speech vs mock).
#[async_trait::async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Transcribe audio bytes into time-ordered, speaker-tagged words.
    ///
    /// # Arguments
    /// * `audio` - Encoded audio bytes (16kHz mono WAV for the real backend)
    /// * `language_code` - Source locale, e.g. "en-US"
    ///
    /// # Returns
    /// The word stream, possibly empty, or a fatal call error.
    async fn transcribe(&self, audio: &[u8], language_code: &str) -> Result<Vec<WordUnit>>;
}

/// Mock transcript source for testing
#[derive(Debug, Clone, Default)]
pub struct MockTranscriptSource {
    words: Vec<WordUnit>,
    should_fail: bool,
}

impl MockTranscriptSource {
    /// Create a mock returning an empty word stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to return specific words
    pub fn with_words(mut self, words: Vec<WordUnit>) -> Self {
        self.words = words;
        self
    }

    /// Configure the mock to fail on transcribe
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

#[async_trait::async_trait]
impl TranscriptSource for MockTranscriptSource {
    async fn transcribe(&self, _audio: &[u8], _language_code: &str) -> Result<Vec<WordUnit>> {
        if self.should_fail {
            Err(RevoiceError::Transcription {
                message: "mock transcription failure".to_string(),
            })
        } else {
            Ok(self.words.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_returns_configured_words() {
        let words = vec![WordUnit::new("hello", 0.0, 0.5, 1)];
        let source = MockTranscriptSource::new().with_words(words.clone());

        let result = source.transcribe(&[0u8; 16], "en-US").await.unwrap();
        assert_eq!(result, words);
    }

    #[tokio::test]
    async fn mock_returns_error_when_configured() {
        let source = MockTranscriptSource::new().with_failure();
        let result = source.transcribe(&[], "en-US").await;
        assert!(matches!(
            result,
            Err(RevoiceError::Transcription { .. })
        ));
    }

    #[tokio::test]
    async fn trait_is_object_safe() {
        let source: Box<dyn TranscriptSource> = Box::new(MockTranscriptSource::new());
        let result = source.transcribe(&[], "en-US").await.unwrap();
        assert!(result.is_empty());
    }
}
