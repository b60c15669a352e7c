//! Speaker-to-voice assignment.

use crate::config::VoicesConfig;

/// Fixed mapping from diarization speaker id to a synthesis voice.
///
/// Only two speakers are meaningfully supported: speaker 1 gets the primary
/// voice, speaker 2 the secondary. Any other speaker id resolves to the
/// default voice (the primary unless configured otherwise).
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceAssignment {
    primary: String,
    secondary: String,
    default: String,
}

impl VoiceAssignment {
    /// Create an assignment with the default voice set to the primary.
    pub fn new(primary: &str, secondary: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            default: primary.to_string(),
        }
    }

    /// Override the voice used for unmapped speaker ids.
    pub fn with_default(mut self, default: &str) -> Self {
        self.default = default.to_string();
        self
    }

    /// Resolve the voice for a speaker id.
    pub fn voice_for(&self, speaker_id: u32) -> &str {
        match speaker_id {
            1 => &self.primary,
            2 => &self.secondary,
            _ => &self.default,
        }
    }
}

impl From<&VoicesConfig> for VoiceAssignment {
    fn from(config: &VoicesConfig) -> Self {
        let assignment = VoiceAssignment::new(&config.primary, &config.secondary);
        match &config.fallback {
            Some(fallback) => assignment.with_default(fallback),
            None => assignment,
        }
    }
}
