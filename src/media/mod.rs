//! Media acquisition: downloads a video's audio and prepares it for the
//! speech recognizer.
//!
//! All intermediates live in a temporary working directory that is removed
//! when the workspace is dropped, including after an interrupt.

use crate::error::{Result, RevoiceError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Metadata extracted from the downloaded video.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct VideoMetadata {
    #[serde(default = "unknown_title")]
    pub title: String,
    #[serde(default = "unknown_uploader")]
    pub uploader: String,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub ext: String,
}

fn unknown_title() -> String {
    "Unknown Title".to_string()
}

fn unknown_uploader() -> String {
    "Unknown Uploader".to_string()
}

/// Transient on-disk working directory for a single run.
///
/// Dropping the workspace deletes every intermediate artifact.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("revoice_")
            .tempdir()
            .map_err(|e| RevoiceError::Download {
                message: format!("failed to create working directory: {e}"),
            })?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Download a video's best audio stream with yt-dlp.
///
/// Returns the downloaded file path and the video's metadata, parsed from
/// yt-dlp's JSON output. `work_dir` is the workspace path.
pub fn download_audio(url: &str, work_dir: &Path) -> Result<(PathBuf, VideoMetadata)> {
    let template = work_dir.join("source_audio.%(ext)s");
    let output = Command::new("yt-dlp")
        .args(["-f", "bestaudio/best"])
        .arg("-o")
        .arg(&template)
        .args(["--no-simulate", "--print-json", "--quiet"])
        .arg(url)
        .output()
        .map_err(|e| RevoiceError::Download {
            message: format!("failed to run yt-dlp: {e}"),
        })?;

    if !output.status.success() {
        return Err(RevoiceError::Download {
            message: format!(
                "yt-dlp exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            ),
        });
    }

    let metadata: VideoMetadata =
        serde_json::from_slice(&output.stdout).map_err(|e| RevoiceError::Download {
            message: format!("failed to parse yt-dlp metadata: {e}"),
        })?;

    let ext = if metadata.ext.is_empty() {
        "mp3"
    } else {
        &metadata.ext
    };
    let audio_path = work_dir.join(format!("source_audio.{ext}"));
    if !audio_path.exists() {
        return Err(RevoiceError::Download {
            message: format!("downloaded audio not found at {}", audio_path.display()),
        });
    }

    Ok((audio_path, metadata))
}

/// Convert downloaded audio to 16kHz mono PCM WAV for the recognizer.
///
/// If ffmpeg fails or is missing, the original file is returned and the run
/// continues with it.
pub fn convert_to_mono_wav(input: &Path, work_dir: &Path) -> PathBuf {
    let output = work_dir.join("source_audio_mono.wav");
    let result = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(input)
        .args(["-ac", "1"])
        .args(["-ar", "16000"])
        .args(["-acodec", "pcm_s16le"])
        .arg(&output)
        .output();

    match result {
        Ok(out) if out.status.success() => output,
        Ok(out) => {
            eprintln!(
                "revoice: ffmpeg conversion failed, continuing with original audio: {}",
                String::from_utf8_lossy(&out.stderr)
            );
            input.to_path_buf()
        }
        Err(e) => {
            eprintln!("revoice: ffmpeg not available ({e}), continuing with original audio");
            input.to_path_buf()
        }
    }
}
