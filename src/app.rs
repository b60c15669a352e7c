//! Re-dubbing application entry point.
//!
//! Orchestrates the complete flow:
//! download → transcribe → group → translate → synthesize/assemble → export

use crate::config::{Config, locale_for};
use crate::error::{Result, RevoiceError};
use crate::export::{ExportOptions, RunMetadata, export_track};
use crate::media::{self, Workspace};
use crate::output;
use crate::pipeline::{AssemblerOptions, assemble_track};
use crate::synth::VoiceAssignment;
use crate::synth::google::GoogleSynthesizer;
use crate::transcript::google::GoogleSpeechSource;
use crate::transcript::grouper::group_by_speaker;
use crate::transcript::source::TranscriptSource;
use crate::translate::google::GoogleTranslator;
use crate::translate::translate_utterances;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

/// Options for a translate run, resolved from the CLI.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub output: Option<PathBuf>,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    pub timeout_secs: Option<u64>,
    pub quiet: bool,
}

/// Run the translate command: download audio → transcribe → re-synthesize →
/// export a tagged MP3.
///
/// Interruption (ctrl-c) abandons in-flight work; the transient working
/// directory is removed either way.
pub async fn run_translate_command(
    mut config: Config,
    url: String,
    options: RunOptions,
) -> Result<()> {
    apply_overrides(&mut config, &options);

    let workspace = Workspace::new()?;
    tokio::select! {
        result = run_pipeline(&config, url, &options, &workspace) => result,
        _ = tokio::signal::ctrl_c() => {
            output::warn("interrupted, cleaning up");
            Err(RevoiceError::Interrupted)
        }
    }
    // workspace drops here: transient artifacts are removed on every path
}

fn apply_overrides(config: &mut Config, options: &RunOptions) {
    if let Some(source) = &options.source_lang {
        config.languages.source_locale = locale_for(source);
        config.languages.source = source.clone();
    }
    if let Some(target) = &options.target_lang {
        config.languages.target_locale = locale_for(target);
        config.languages.target = target.clone();
        if !config.voices.primary.starts_with(&config.languages.target_locale) {
            output::warn(&format!(
                "configured voices ({}) do not match target locale {}",
                config.voices.primary, config.languages.target_locale
            ));
        }
    }
    if let Some(secs) = options.timeout_secs {
        config.timing.api_timeout_secs = secs;
    }
}

async fn run_pipeline(
    config: &Config,
    url: String,
    options: &RunOptions,
    workspace: &Workspace,
) -> Result<()> {
    let api_key = config.api_key()?;
    let quiet = options.quiet;

    // Download
    if !quiet {
        output::stage("downloading audio");
    }
    let work_dir = workspace.path().to_path_buf();
    let (audio_path, video) =
        tokio::task::spawn_blocking(move || media::download_audio(&url, &work_dir))
            .await
            .map_err(|e| RevoiceError::Other(format!("download task failed: {e}")))??;
    if !quiet {
        output::ok(&format!("downloaded: {}", video.title));
    }

    // Convert for the recognizer
    let work_dir = workspace.path().to_path_buf();
    let input = audio_path.clone();
    let wav_path = tokio::task::spawn_blocking(move || media::convert_to_mono_wav(&input, &work_dir))
        .await
        .map_err(|e| RevoiceError::Other(format!("conversion task failed: {e}")))?;
    let audio_bytes = tokio::fs::read(&wav_path).await?;

    // Transcribe with diarization (the run's single hard deadline)
    if !quiet {
        output::stage("transcribing");
    }
    let speech = GoogleSpeechSource::new(
        api_key.clone(),
        Duration::from_secs(config.timing.api_timeout_secs),
    );
    let words = speech
        .transcribe(&audio_bytes, &config.languages.source_locale)
        .await?;
    if words.is_empty() {
        return Err(RevoiceError::NoSpeech);
    }
    let speakers: HashSet<u32> = words.iter().map(|w| w.speaker_id).collect();
    if !quiet {
        output::ok(&format!(
            "transcribed {} words, {} speakers",
            words.len(),
            speakers.len()
        ));
    }

    // Group into utterances
    let utterances = group_by_speaker(&words, config.timing.boundary_offset_secs);

    // Translate, degrading failed segments to their source text
    if !quiet {
        output::stage(&format!(
            "translating {} segments {} → {}",
            utterances.len(),
            config.languages.source,
            config.languages.target
        ));
    }
    let translator = GoogleTranslator::new(api_key.clone());
    let segments = translate_utterances(
        &translator,
        utterances,
        &config.languages.source,
        &config.languages.target,
    )
    .await;
    let fallbacks = segments.iter().filter(|s| s.fallback).count();
    if fallbacks > 0 {
        output::warn(&format!("{fallbacks} segments kept their source text"));
    }

    // Synthesize and assemble the track
    if !quiet {
        output::stage("synthesizing speech");
    }
    let synthesizer = GoogleSynthesizer::new(
        api_key,
        config.audio.sample_rate,
        config.audio.speaking_rate,
    );
    let voices = VoiceAssignment::from(&config.voices);
    let assembler_options = AssemblerOptions {
        language_code: config.languages.target_locale.clone(),
        sample_rate: config.audio.sample_rate,
        min_silence_ms: config.timing.min_silence_ms,
        progress: !quiet,
    };
    let (track, report) = assemble_track(&synthesizer, &voices, &segments, &assembler_options).await;

    // Export
    if !quiet {
        output::stage("exporting");
    }
    let metadata = RunMetadata {
        title: video.title,
        uploader: video.uploader,
        duration_secs: video.duration.round() as u64,
    };
    let export_options = ExportOptions {
        output: options.output.clone(),
        target_language: config.languages.target.clone(),
        voice_description: format!("{}, {}", config.voices.primary, config.voices.secondary),
    };
    let final_path =
        tokio::task::spawn_blocking(move || export_track(track, &metadata, &export_options))
            .await
            .map_err(|e| RevoiceError::Other(format!("export task failed: {e}")))??;

    output::ok(&format!(
        "{} segments processed, {} skipped",
        report.synthesized, report.skipped
    ));
    output::ok(&format!("wrote {}", final_path.display()));
    Ok(())
}
