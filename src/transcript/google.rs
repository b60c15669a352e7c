//! Google Cloud Speech-to-Text backend.
//!
//! Submits a long-running recognition with speaker diarization and word time
//! offsets, then polls the operation until it completes. The whole
//! submit-and-poll sequence runs under a single hard deadline; exceeding it
//! is fatal and not retried.

use crate::defaults;
use crate::error::{Result, RevoiceError};
use crate::transcript::source::TranscriptSource;
use crate::transcript::types::WordUnit;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SPEECH_ENDPOINT: &str = "https://speech.googleapis.com/v1";

/// Transcription client backed by Google Speech-to-Text.
pub struct GoogleSpeechSource {
    client: reqwest::Client,
    api_key: String,
    timeout: Duration,
    poll_interval: Duration,
}

impl GoogleSpeechSource {
    /// Create a client with the given API key and hard deadline.
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            timeout,
            poll_interval: Duration::from_secs(defaults::POLL_INTERVAL_SECS),
        }
    }

    /// Override the operation poll interval (mainly for tests).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    async fn submit(&self, audio: &[u8], language_code: &str) -> Result<String> {
        let request = RecognizeRequest {
            config: RecognitionConfig {
                language_code: language_code.to_string(),
                enable_word_time_offsets: true,
                enable_automatic_punctuation: true,
                model: "latest_long".to_string(),
                diarization_config: DiarizationConfig {
                    enable_speaker_diarization: true,
                    min_speaker_count: defaults::SPEAKER_COUNT,
                    max_speaker_count: defaults::SPEAKER_COUNT,
                },
            },
            audio: RecognitionAudio {
                content: base64::engine::general_purpose::STANDARD.encode(audio),
            },
        };

        let url = format!(
            "{SPEECH_ENDPOINT}/speech:longrunningrecognize?key={}",
            self.api_key
        );
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RevoiceError::Transcription {
                message: format!("failed to submit recognition: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(RevoiceError::Transcription {
                message: format!("recognition submit returned {}", response.status()),
            });
        }

        let operation: OperationHandle =
            response
                .json()
                .await
                .map_err(|e| RevoiceError::Transcription {
                    message: format!("invalid submit response: {e}"),
                })?;
        Ok(operation.name)
    }

    async fn poll_until_done(&self, operation_name: &str) -> Result<LongRunningResponse> {
        loop {
            let url = format!("{SPEECH_ENDPOINT}/operations/{operation_name}?key={}", self.api_key);
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| RevoiceError::Transcription {
                    message: format!("failed to poll operation: {e}"),
                })?;

            if !response.status().is_success() {
                return Err(RevoiceError::Transcription {
                    message: format!("operation poll returned {}", response.status()),
                });
            }

            let operation: Operation =
                response
                    .json()
                    .await
                    .map_err(|e| RevoiceError::Transcription {
                        message: format!("invalid operation response: {e}"),
                    })?;

            if operation.done {
                if let Some(error) = operation.error {
                    return Err(RevoiceError::Transcription {
                        message: format!("recognition failed: {} ({})", error.message, error.code),
                    });
                }
                return operation.response.ok_or_else(|| RevoiceError::Transcription {
                    message: "operation completed without a response".to_string(),
                });
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[async_trait::async_trait]
impl TranscriptSource for GoogleSpeechSource {
    async fn transcribe(&self, audio: &[u8], language_code: &str) -> Result<Vec<WordUnit>> {
        let run = async {
            let operation_name = self.submit(audio, language_code).await?;
            self.poll_until_done(&operation_name).await
        };

        let response = tokio::time::timeout(self.timeout, run).await.map_err(|_| {
            RevoiceError::TranscriptionTimeout {
                seconds: self.timeout.as_secs(),
            }
        })??;

        Ok(collect_words(&response))
    }
}

/// Flatten the recognizer response into the word stream.
fn collect_words(response: &LongRunningResponse) -> Vec<WordUnit> {
    let mut words = Vec::new();
    for result in &response.results {
        let Some(alternative) = result.alternatives.first() else {
            continue;
        };
        for word in &alternative.words {
            let (Some(start), Some(end)) =
                (parse_offset(&word.start_time), parse_offset(&word.end_time))
            else {
                continue;
            };
            words.push(WordUnit {
                text: word.word.clone(),
                start_time: start,
                end_time: end,
                speaker_id: word.speaker_tag,
            });
        }
    }
    words
}

/// Parse a protobuf Duration JSON string like "3.100s" into seconds.
fn parse_offset(value: &str) -> Option<f64> {
    value.strip_suffix('s')?.parse().ok()
}

// Wire types for the Speech REST API (camelCase JSON).

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeRequest {
    config: RecognitionConfig,
    audio: RecognitionAudio,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig {
    language_code: String,
    enable_word_time_offsets: bool,
    enable_automatic_punctuation: bool,
    model: String,
    diarization_config: DiarizationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DiarizationConfig {
    enable_speaker_diarization: bool,
    min_speaker_count: u32,
    max_speaker_count: u32,
}

#[derive(Debug, Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Debug, Deserialize)]
struct OperationHandle {
    name: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Operation {
    done: bool,
    error: Option<OperationError>,
    response: Option<LongRunningResponse>,
}

#[derive(Debug, Deserialize)]
struct OperationError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct LongRunningResponse {
    results: Vec<SpeechResult>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SpeechResult {
    alternatives: Vec<SpeechAlternative>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SpeechAlternative {
    words: Vec<WordInfo>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct WordInfo {
    word: String,
    start_time: String,
    end_time: String,
    speaker_tag: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_offset_handles_fractional_seconds() {
        assert_eq!(parse_offset("1.500s"), Some(1.5));
        assert_eq!(parse_offset("0s"), Some(0.0));
        assert_eq!(parse_offset("12s"), Some(12.0));
    }

    #[test]
    fn parse_offset_rejects_malformed_values() {
        assert_eq!(parse_offset("1.5"), None);
        assert_eq!(parse_offset("abc s"), None);
        assert_eq!(parse_offset(""), None);
    }

    #[test]
    fn collect_words_flattens_diarized_response() {
        let json = r#"{
            "results": [{
                "alternatives": [{
                    "transcript": "hi there",
                    "words": [
                        {"word": "hi", "startTime": "0s", "endTime": "0.500s", "speakerTag": 1},
                        {"word": "there", "startTime": "0.500s", "endTime": "1.100s", "speakerTag": 1},
                        {"word": "yo", "startTime": "2s", "endTime": "2.300s", "speakerTag": 2}
                    ]
                }]
            }]
        }"#;
        let response: LongRunningResponse = serde_json::from_str(json).unwrap();
        let words = collect_words(&response);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text, "hi");
        assert_eq!(words[0].speaker_id, 1);
        assert!((words[2].start_time - 2.0).abs() < f64::EPSILON);
        assert_eq!(words[2].speaker_id, 2);
    }

    #[test]
    fn collect_words_skips_words_with_bad_offsets() {
        let json = r#"{
            "results": [{
                "alternatives": [{
                    "words": [
                        {"word": "ok", "startTime": "0s", "endTime": "0.400s", "speakerTag": 1},
                        {"word": "bad", "startTime": "oops", "endTime": "1s", "speakerTag": 1}
                    ]
                }]
            }]
        }"#;
        let response: LongRunningResponse = serde_json::from_str(json).unwrap();
        let words = collect_words(&response);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "ok");
    }

    #[test]
    fn operation_parses_pending_and_failed_states() {
        let pending: Operation = serde_json::from_str(r#"{"name": "operations/1"}"#).unwrap();
        assert!(!pending.done);

        let failed: Operation = serde_json::from_str(
            r#"{"done": true, "error": {"code": 8, "message": "quota exceeded"}}"#,
        )
        .unwrap();
        assert!(failed.done);
        assert_eq!(failed.error.unwrap().message, "quota exceeded");
    }

    #[test]
    fn recognize_request_serializes_camel_case() {
        let request = RecognizeRequest {
            config: RecognitionConfig {
                language_code: "en-US".to_string(),
                enable_word_time_offsets: true,
                enable_automatic_punctuation: true,
                model: "latest_long".to_string(),
                diarization_config: DiarizationConfig {
                    enable_speaker_diarization: true,
                    min_speaker_count: 2,
                    max_speaker_count: 2,
                },
            },
            audio: RecognitionAudio {
                content: "AAAA".to_string(),
            },
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"languageCode\":\"en-US\""));
        assert!(json.contains("\"enableWordTimeOffsets\":true"));
        assert!(json.contains("\"diarizationConfig\""));
        assert!(json.contains("\"maxSpeakerCount\":2"));
    }
}
