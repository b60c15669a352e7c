//! The assembled output audio track.

use crate::error::{Result, RevoiceError};
use std::path::Path;

/// Mono 16-bit sample buffer with a source-timeline cursor.
///
/// The track is built incrementally by the timeline assembler: silence for
/// preserved gaps, then decoded clip samples. The cursor tracks the position
/// on the *source* timeline that the appended content corresponds to, so gap
/// computation survives skipped segments. Built by exactly one writer, then
/// moved into the exporter and never mutated again.
#[derive(Debug, Clone)]
pub struct Track {
    samples: Vec<i16>,
    sample_rate: u32,
    cursor_secs: f64,
}

impl Track {
    /// Create an empty track at the given sample rate.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            samples: Vec::new(),
            sample_rate,
            cursor_secs: 0.0,
        }
    }

    /// Append silence without moving the source cursor.
    pub fn append_silence(&mut self, secs: f64) {
        let count = (secs * self.sample_rate as f64).round() as usize;
        self.samples.extend(std::iter::repeat_n(0i16, count));
    }

    /// Append decoded clip samples and advance the cursor to the clip's
    /// source end time.
    pub fn append_clip(&mut self, samples: &[i16], source_end_secs: f64) {
        self.samples.extend_from_slice(samples);
        self.cursor_secs = source_end_secs;
    }

    /// Current position on the source timeline, in seconds.
    pub fn cursor(&self) -> f64 {
        self.cursor_secs
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Output duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Write the track as a 16-bit mono WAV file.
    pub fn write_wav(&self, path: &Path) -> Result<()> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).map_err(|e| RevoiceError::Export {
            message: format!("failed to create WAV at {}: {e}", path.display()),
        })?;
        for &sample in &self.samples {
            writer.write_sample(sample).map_err(|e| RevoiceError::Export {
                message: format!("failed to write WAV sample: {e}"),
            })?;
        }
        writer.finalize().map_err(|e| RevoiceError::Export {
            message: format!("failed to finalize WAV: {e}"),
        })?;
        Ok(())
    }
}
