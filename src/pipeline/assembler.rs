//! Assembles synthesized clips and preserved silence into one track.

use crate::audio::codec::decode_wav_clip;
use crate::audio::track::Track;
use crate::synth::{Synthesizer, VoiceAssignment, synthesize_utterance};
use crate::transcript::types::TranslatedUtterance;
use indicatif::{ProgressBar, ProgressStyle};

/// Assembly parameters.
#[derive(Debug, Clone)]
pub struct AssemblerOptions {
    /// Target locale passed to the synthesizer, e.g. "fr-FR".
    pub language_code: String,
    /// Track sample rate in Hz; clips are resampled to match.
    pub sample_rate: u32,
    /// Minimum source gap reproduced as silence, in milliseconds.
    pub min_silence_ms: u64,
    /// Render a per-segment progress bar on stderr.
    pub progress: bool,
}

/// Counts reported after assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Segments synthesized and appended to the track.
    pub synthesized: usize,
    /// Segments dropped after a synthesis or decode failure.
    pub skipped: usize,
}

/// Build the output track from translated utterances, in order.
///
/// Maintains a cursor on the source timeline starting at zero. For each
/// segment: a gap above the minimum-silence threshold becomes appended
/// silence, then the segment is synthesized and its decoded audio appended,
/// advancing the cursor to the segment's source end. A failed synthesis or
/// clip decode skips the segment — the cursor stays put so the next gap is
/// measured from the last appended segment — and never aborts the run.
/// Exactly one pass, no retries.
pub async fn assemble_track(
    synthesizer: &dyn Synthesizer,
    voices: &VoiceAssignment,
    segments: &[TranslatedUtterance],
    options: &AssemblerOptions,
) -> (Track, AssemblyReport) {
    let mut track = Track::new(options.sample_rate);
    let mut report = AssemblyReport::default();
    let min_silence_secs = options.min_silence_ms as f64 / 1000.0;

    let bar = if options.progress {
        let bar = ProgressBar::new(segments.len() as u64);
        // Hardcoded template string is always valid
        #[allow(clippy::expect_used)]
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] segment {pos}/{len}")
                .expect("hardcoded progress bar template")
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    for segment in segments {
        let gap = segment.start_time - track.cursor();
        if gap > min_silence_secs {
            track.append_silence(gap);
        }

        match synthesize_utterance(synthesizer, voices, segment, &options.language_code).await {
            Ok(clip) => match decode_wav_clip(&clip.audio, options.sample_rate) {
                Ok(samples) => {
                    track.append_clip(&samples, clip.source_end_time);
                    report.synthesized += 1;
                }
                Err(e) => {
                    eprintln!("revoice: dropping segment at {:.1}s: {e}", segment.start_time);
                    report.skipped += 1;
                }
            },
            Err(e) => {
                eprintln!("revoice: dropping segment at {:.1}s: {e}", segment.start_time);
                report.skipped += 1;
            }
        }

        if let Some(ref bar) = bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    (track, report)
}
