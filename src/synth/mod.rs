//! Speech synthesis for translated utterances.
//!
//! One clip is synthesized per utterance using the speaker's assigned voice.
//! Failures are per-segment: the caller (timeline assembler) decides whether
//! to skip the segment; nothing here aborts the run.

pub mod google;
pub mod voices;

pub use voices::VoiceAssignment;

use crate::error::{Result, RevoiceError};
use crate::transcript::types::TranslatedUtterance;

/// Trait for the speech synthesis collaborator.
///
/// This trait allows swapping implementations (real Google TTS vs mock).
#[async_trait::async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesize text into encoded audio bytes (16-bit PCM WAV).
    ///
    /// # Arguments
    /// * `text` - Target-language text to speak
    /// * `language_code` - Target locale, e.g. "fr-FR"
    /// * `voice` - Voice identifier, e.g. "fr-FR-Wavenet-A"
    async fn synthesize(&self, text: &str, language_code: &str, voice: &str) -> Result<Vec<u8>>;
}

/// A synthesized clip tied to its source-timeline span.
///
/// Ephemeral: created per segment, decoded into the track, then discarded.
#[derive(Debug, Clone)]
pub struct SynthesizedClip {
    pub speaker_id: u32,
    /// Encoded audio bytes as returned by the synthesizer.
    pub audio: Vec<u8>,
    pub source_start_time: f64,
    pub source_end_time: f64,
}

/// Synthesize one utterance with its assigned voice.
///
/// Resolves the speaker against the voice assignment (default voice for
/// unmapped speakers) and returns the clip or a recoverable per-segment
/// error.
pub async fn synthesize_utterance(
    synthesizer: &dyn Synthesizer,
    voices: &VoiceAssignment,
    segment: &TranslatedUtterance,
    language_code: &str,
) -> Result<SynthesizedClip> {
    let voice = voices.voice_for(segment.speaker_id);
    let audio = synthesizer
        .synthesize(&segment.text_translated, language_code, voice)
        .await?;

    Ok(SynthesizedClip {
        speaker_id: segment.speaker_id,
        audio,
        source_start_time: segment.start_time,
        source_end_time: segment.end_time,
    })
}

/// Mock synthesizer for testing.
///
/// Emits real WAV bytes so the assembler's decode path is exercised.
#[derive(Debug, Clone)]
pub struct MockSynthesizer {
    sample_rate: u32,
    clip_duration_ms: u64,
    sample_value: i16,
    should_fail: bool,
    failing_texts: Vec<String>,
}

impl MockSynthesizer {
    /// Create a mock emitting 500ms clips of constant samples at 24kHz
    pub fn new() -> Self {
        Self {
            sample_rate: 24000,
            clip_duration_ms: 500,
            sample_value: 1000,
            should_fail: false,
            failing_texts: Vec::new(),
        }
    }

    /// Configure the emitted clip duration
    pub fn with_clip_duration_ms(mut self, duration_ms: u64) -> Self {
        self.clip_duration_ms = duration_ms;
        self
    }

    /// Configure the sample rate of emitted clips
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Configure the mock to fail on every call
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Configure the mock to fail only when synthesizing the given text
    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing_texts.push(text.to_string());
        self
    }

    /// Number of samples in each emitted clip.
    pub fn samples_per_clip(&self) -> usize {
        (self.sample_rate as u64 * self.clip_duration_ms / 1000) as usize
    }

    fn wav_bytes(&self) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = std::io::Cursor::new(Vec::new());
        // In-memory write with a hardcoded spec cannot fail
        #[allow(clippy::expect_used)]
        {
            let mut writer =
                hound::WavWriter::new(&mut cursor, spec).expect("in-memory WAV writer");
            for _ in 0..self.samples_per_clip() {
                writer.write_sample(self.sample_value).expect("WAV sample");
            }
            writer.finalize().expect("WAV finalize");
        }
        cursor.into_inner()
    }
}

impl Default for MockSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Synthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str, _language_code: &str, _voice: &str) -> Result<Vec<u8>> {
        if self.should_fail || self.failing_texts.iter().any(|t| t == text) {
            Err(RevoiceError::Synthesis {
                message: format!("mock synthesis failure for: {text}"),
            })
        } else {
            Ok(self.wav_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::types::{TranslatedUtterance, Utterance};

    fn segment(speaker_id: u32, text: &str, start: f64, end: f64) -> TranslatedUtterance {
        TranslatedUtterance::new(
            Utterance {
                speaker_id,
                text: text.to_string(),
                start_time: start,
                end_time: end,
            },
            format!("fr:{text}"),
        )
    }

    #[tokio::test]
    async fn clip_carries_source_span_and_speaker() {
        let synthesizer = MockSynthesizer::new();
        let voices = VoiceAssignment::new("voice-a", "voice-b");
        let seg = segment(2, "hello", 1.0, 2.5);

        let clip = synthesize_utterance(&synthesizer, &voices, &seg, "fr-FR")
            .await
            .unwrap();
        assert_eq!(clip.speaker_id, 2);
        assert!((clip.source_start_time - 1.0).abs() < f64::EPSILON);
        assert!((clip.source_end_time - 2.5).abs() < f64::EPSILON);
        assert!(!clip.audio.is_empty());
    }

    #[tokio::test]
    async fn mock_emits_parseable_wav() {
        let synthesizer = MockSynthesizer::new().with_clip_duration_ms(100);
        let bytes = synthesizer.synthesize("hi", "fr-FR", "v").await.unwrap();

        let reader = hound::WavReader::new(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().sample_rate, 24000);
        assert_eq!(reader.len() as usize, synthesizer.samples_per_clip());
    }

    #[tokio::test]
    async fn failure_surfaces_as_recoverable_synthesis_error() {
        let synthesizer = MockSynthesizer::new().with_failure();
        let voices = VoiceAssignment::new("a", "b");
        let seg = segment(1, "oops", 0.0, 1.0);

        let err = synthesize_utterance(&synthesizer, &voices, &seg, "fr-FR")
            .await
            .unwrap_err();
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn selective_failure_only_hits_matching_text() {
        let synthesizer = MockSynthesizer::new().failing_on("fr:two");
        assert!(synthesizer.synthesize("fr:one", "fr-FR", "v").await.is_ok());
        assert!(synthesizer.synthesize("fr:two", "fr-FR", "v").await.is_err());
        assert!(synthesizer.synthesize("fr:three", "fr-FR", "v").await.is_ok());
    }
}
