//! Final artifact export.
//!
//! Consumes the assembled track, writes it through a temporary WAV, and
//! produces a tagged MP3 via ffmpeg. A write failure here is fatal and
//! surfaces to the caller; there are no retry semantics.

use crate::audio::track::Track;
use crate::error::{Result, RevoiceError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Descriptive metadata for the exported artifact.
#[derive(Debug, Clone, Default)]
pub struct RunMetadata {
    pub title: String,
    pub uploader: String,
    /// Original video duration in seconds.
    pub duration_secs: u64,
}

/// Export parameters.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Explicit output path; when `None` a name is derived from the title.
    pub output: Option<PathBuf>,
    /// Target language code used in the tag annotations, e.g. "fr".
    pub target_language: String,
    /// Voice description included in the comment tag.
    pub voice_description: String,
}

/// Derive a filesystem-safe file name from a title.
///
/// Path separators are replaced so the title cannot escape the output
/// directory.
pub fn safe_file_name(title: &str) -> String {
    title.replace(['/', '\\'], "_")
}

/// Write the track as a tagged MP3 and return the path it was written to.
///
/// The track is consumed: after export it no longer exists as a mutable
/// buffer anywhere.
pub fn export_track(track: Track, metadata: &RunMetadata, options: &ExportOptions) -> Result<PathBuf> {
    let output = match &options.output {
        Some(path) => path.clone(),
        None => PathBuf::from(format!(
            "{}_{}.mp3",
            safe_file_name(&metadata.title),
            options.target_language
        )),
    };

    let temp_wav = tempfile::Builder::new()
        .prefix("revoice_track_")
        .suffix(".wav")
        .tempfile()
        .map_err(|e| RevoiceError::Export {
            message: format!("failed to create temporary WAV: {e}"),
        })?;
    track.write_wav(temp_wav.path())?;

    encode_with_tags(temp_wav.path(), &output, metadata, options)?;
    Ok(output)
}

/// Encode the WAV to MP3 with descriptive tags via ffmpeg.
fn encode_with_tags(
    wav_path: &Path,
    output: &Path,
    metadata: &RunMetadata,
    options: &ExportOptions,
) -> Result<()> {
    let lang = options.target_language.to_uppercase();
    let title = format!("{} (Translated {lang})", metadata.title);
    let comment = format!(
        "Automatically translated to {lang}. Original duration: {}s. Voices: {}.",
        metadata.duration_secs, options.voice_description
    );

    let result = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(wav_path)
        .args(["-metadata", &format!("title={title}")])
        .args(["-metadata", &format!("artist={}", metadata.uploader)])
        .args(["-metadata", "album=Automated video translation"])
        .args(["-metadata", &format!("comment={comment}")])
        .args(["-metadata", "genre=Speech"])
        .arg(output)
        .output()
        .map_err(|e| RevoiceError::Export {
            message: format!("failed to run ffmpeg: {e}"),
        })?;

    if !result.status.success() {
        return Err(RevoiceError::Export {
            message: format!(
                "ffmpeg exited with {}: {}",
                result.status,
                String::from_utf8_lossy(&result.stderr)
            ),
        });
    }
    Ok(())
}
