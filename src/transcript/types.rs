//! Data types for the re-dubbing pipeline.

/// A single recognized word with timing and speaker attribution.
///
/// Produced by the transcription collaborator. The word sequence is
/// time-ordered but not guaranteed gap-free.
#[derive(Debug, Clone, PartialEq)]
pub struct WordUnit {
    /// The recognized word.
    pub text: String,
    /// Word onset on the source timeline, in seconds.
    pub start_time: f64,
    /// Word end on the source timeline, in seconds.
    pub end_time: f64,
    /// Diarization speaker tag.
    pub speaker_id: u32,
}

impl WordUnit {
    /// Creates a new word unit.
    pub fn new(text: &str, start_time: f64, end_time: f64, speaker_id: u32) -> Self {
        Self {
            text: text.to_string(),
            start_time,
            end_time,
            speaker_id,
        }
    }
}

/// A maximal contiguous run of words from one speaker.
///
/// One utterance is the unit of translation and synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub speaker_id: u32,
    /// Source-language text, words joined with single spaces.
    pub text: String,
    /// Start of the first word, in seconds.
    pub start_time: f64,
    /// For all but the last utterance: the next utterance's start minus the
    /// boundary offset. For the last: the end of the final word.
    pub end_time: f64,
}

impl Utterance {
    /// Duration of the utterance on the source timeline, in seconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// An utterance paired with its target-language text.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedUtterance {
    pub speaker_id: u32,
    /// Original source-language text.
    pub text: String,
    /// Target-language text. Falls back to `text` when translation failed,
    /// so this is never empty while `text` is non-empty.
    pub text_translated: String,
    pub start_time: f64,
    pub end_time: f64,
    /// True when `text_translated` is the untranslated fallback.
    pub fallback: bool,
}

impl TranslatedUtterance {
    /// Pair an utterance with its translation.
    pub fn new(utterance: Utterance, text_translated: String) -> Self {
        Self {
            speaker_id: utterance.speaker_id,
            text: utterance.text,
            text_translated,
            start_time: utterance.start_time,
            end_time: utterance.end_time,
            fallback: false,
        }
    }

    /// Degrade to identity translation after a failed translation call.
    pub fn untranslated(utterance: Utterance) -> Self {
        Self {
            text_translated: utterance.text.clone(),
            speaker_id: utterance.speaker_id,
            text: utterance.text,
            start_time: utterance.start_time,
            end_time: utterance.end_time,
            fallback: true,
        }
    }
}
