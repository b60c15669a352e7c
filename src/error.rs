//! Error types for revoice.
//!
//! Three failure classes flow through the pipeline:
//! - upstream-fatal (download, transcription): abort the whole run
//! - per-segment-recoverable (translation, synthesis, clip decode): absorbed
//!   by the owning stage via identity fallback or segment skip
//! - export-fatal: the final write surfaces directly, no retry

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RevoiceError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("API key environment variable {var} is not set")]
    MissingApiKey { var: String },

    // Media acquisition errors (upstream-fatal)
    #[error("Audio download failed: {message}")]
    Download { message: String },

    // Transcription errors (upstream-fatal)
    #[error("Transcription failed: {message}")]
    Transcription { message: String },

    #[error("Transcription did not complete within {seconds}s")]
    TranscriptionTimeout { seconds: u64 },

    #[error("Transcription produced no words")]
    NoSpeech,

    // Per-segment-recoverable errors (absorbed by the owning stage)
    #[error("Translation failed: {message}")]
    Translation { message: String },

    #[error("Speech synthesis failed: {message}")]
    Synthesis { message: String },

    #[error("Failed to decode synthesized clip: {message}")]
    AudioDecode { message: String },

    // Export errors (fatal)
    #[error("Export failed: {message}")]
    Export { message: String },

    // Cancellation
    #[error("Interrupted")]
    Interrupted,

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

impl RevoiceError {
    /// Whether the caller may continue the run after this error.
    ///
    /// Recoverable errors are confined to a single segment; everything else
    /// aborts the pipeline.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RevoiceError::Translation { .. }
                | RevoiceError::Synthesis { .. }
                | RevoiceError::AudioDecode { .. }
        )
    }
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, RevoiceError>;
