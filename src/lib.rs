//! revoice - cross-language re-dubbing of video speech
//!
//! Rebuilds a video's speech track in another language, keeping each
//! speaker's voice identity and the original pacing.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod app;
pub mod audio;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod media;
pub mod output;
pub mod pipeline;
pub mod synth;
pub mod transcript;
pub mod translate;

// Core traits (collaborator boundaries, swappable in tests)
pub use synth::{MockSynthesizer, Synthesizer};
pub use transcript::source::{MockTranscriptSource, TranscriptSource};
pub use translate::{MockTranslator, Translator};

// Pipeline stages
pub use pipeline::{AssemblerOptions, AssemblyReport, assemble_track};
pub use transcript::grouper::group_by_speaker;
pub use translate::translate_utterances;

// Data model
pub use audio::track::Track;
pub use synth::{SynthesizedClip, VoiceAssignment};
pub use transcript::types::{TranslatedUtterance, Utterance, WordUnit};

// Error handling
pub use error::{Result, RevoiceError};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.3.1+abc1234"` when git hash is available, `"0.3.1"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
