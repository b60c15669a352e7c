//! Transcript handling: word-level input, speaker grouping, and the
//! transcription collaborator boundary.

pub mod google;
pub mod grouper;
pub mod source;
pub mod types;

pub use grouper::group_by_speaker;
pub use source::{MockTranscriptSource, TranscriptSource};
pub use types::{TranslatedUtterance, Utterance, WordUnit};
