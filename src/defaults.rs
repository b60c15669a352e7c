//! Default configuration constants for revoice.
//!
//! This module provides shared constants used across different configuration
//! types to ensure consistency and eliminate duplication.

/// Default source language code for translation.
pub const SOURCE_LANGUAGE: &str = "en";

/// Default source locale sent to the speech recognizer.
pub const SOURCE_LOCALE: &str = "en-US";

/// Default target language code for translation.
pub const TARGET_LANGUAGE: &str = "fr";

/// Default target locale sent to the speech synthesizer.
pub const TARGET_LOCALE: &str = "fr-FR";

/// Default voice for the primary speaker.
pub const PRIMARY_VOICE: &str = "fr-FR-Wavenet-A";

/// Default voice for the secondary speaker.
pub const SECONDARY_VOICE: &str = "fr-FR-Wavenet-E";

/// Number of speakers requested from diarization.
///
/// Only two voices are configured, so the recognizer is asked to
/// distinguish exactly two speakers.
pub const SPEAKER_COUNT: u32 = 2;

/// Offset subtracted when closing an utterance at a speaker change, in seconds.
///
/// Keeps adjacent utterances from sharing an exact boundary timestamp.
pub const BOUNDARY_OFFSET_SECS: f64 = 0.1;

/// Minimum source-timeline gap preserved as silence, in milliseconds.
///
/// Gaps shorter than this are dropped; longer ones are reproduced in the
/// output track to keep the original turn pacing.
pub const MIN_SILENCE_MS: u64 = 200;

/// Sample rate of synthesized clips and the assembled track, in Hz.
pub const SAMPLE_RATE: u32 = 24000;

/// Speaking rate requested from the synthesizer (1.0 = natural).
pub const SPEAKING_RATE: f64 = 1.0;

/// Hard deadline for the long-running transcription operation, in seconds.
pub const API_TIMEOUT_SECS: u64 = 300;

/// Interval between polls of the long-running transcription operation.
pub const POLL_INTERVAL_SECS: u64 = 5;

/// Environment variable holding the Google API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_offset_is_positive_and_small() {
        assert!(BOUNDARY_OFFSET_SECS > 0.0);
        assert!(BOUNDARY_OFFSET_SECS < 1.0);
    }

    #[test]
    fn min_silence_fits_within_a_second() {
        assert!(MIN_SILENCE_MS > 0);
        assert!(MIN_SILENCE_MS < 1000);
    }

    #[test]
    fn default_languages_differ() {
        assert_ne!(SOURCE_LANGUAGE, TARGET_LANGUAGE);
        assert!(SOURCE_LOCALE.starts_with(SOURCE_LANGUAGE));
        assert!(TARGET_LOCALE.starts_with(TARGET_LANGUAGE));
    }

    #[test]
    fn voices_match_target_locale() {
        assert!(PRIMARY_VOICE.starts_with(TARGET_LOCALE));
        assert!(SECONDARY_VOICE.starts_with(TARGET_LOCALE));
        assert_ne!(PRIMARY_VOICE, SECONDARY_VOICE);
    }
}
