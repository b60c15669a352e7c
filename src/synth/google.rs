//! Google Cloud Text-to-Speech backend.
//!
//! Requests LINEAR16 (WAV) output so clips can be decoded locally without a
//! lossy codec round trip; the deliverable is compressed at export time.

use crate::error::{Result, RevoiceError};
use crate::synth::Synthesizer;
use base64::Engine;
use serde::{Deserialize, Serialize};

const TTS_ENDPOINT: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Synthesis client backed by Google Text-to-Speech.
pub struct GoogleSynthesizer {
    client: reqwest::Client,
    api_key: String,
    sample_rate: u32,
    speaking_rate: f64,
}

impl GoogleSynthesizer {
    pub fn new(api_key: String, sample_rate: u32, speaking_rate: f64) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            sample_rate,
            speaking_rate,
        }
    }
}

#[async_trait::async_trait]
impl Synthesizer for GoogleSynthesizer {
    async fn synthesize(&self, text: &str, language_code: &str, voice: &str) -> Result<Vec<u8>> {
        let request = SynthesizeRequest {
            input: SynthesisInput {
                text: text.to_string(),
            },
            voice: VoiceSelection {
                language_code: language_code.to_string(),
                name: voice.to_string(),
            },
            audio_config: AudioConfigBody {
                audio_encoding: "LINEAR16".to_string(),
                sample_rate_hertz: self.sample_rate,
                speaking_rate: self.speaking_rate,
            },
        };

        let url = format!("{TTS_ENDPOINT}?key={}", self.api_key);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RevoiceError::Synthesis {
                message: format!("request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(RevoiceError::Synthesis {
                message: format!("TTS API returned {}", response.status()),
            });
        }

        let body: SynthesizeResponse =
            response.json().await.map_err(|e| RevoiceError::Synthesis {
                message: format!("invalid TTS response: {e}"),
            })?;

        base64::engine::general_purpose::STANDARD
            .decode(&body.audio_content)
            .map_err(|e| RevoiceError::Synthesis {
                message: format!("invalid base64 audio content: {e}"),
            })
    }
}

// Wire types for the Text-to-Speech REST API.

#[derive(Debug, Serialize)]
struct SynthesizeRequest {
    input: SynthesisInput,
    voice: VoiceSelection,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfigBody,
}

#[derive(Debug, Serialize)]
struct SynthesisInput {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection {
    language_code: String,
    name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfigBody {
    audio_encoding: String,
    sample_rate_hertz: u32,
    speaking_rate: f64,
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent", default)]
    audio_content: String,
}
