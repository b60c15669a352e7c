use crate::defaults;
use crate::error::{Result, RevoiceError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub languages: LanguageConfig,
    pub voices: VoicesConfig,
    pub audio: AudioConfig,
    pub timing: TimingConfig,
    pub api: ApiConfig,
}

/// Source/target language pair configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LanguageConfig {
    /// Source language code for translation (e.g., "en")
    pub source: String,
    /// Source locale for speech recognition (e.g., "en-US")
    pub source_locale: String,
    /// Target language code for translation (e.g., "fr")
    pub target: String,
    /// Target locale for speech synthesis (e.g., "fr-FR")
    pub target_locale: String,
}

/// Speaker voice configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VoicesConfig {
    /// Voice for speaker 1
    pub primary: String,
    /// Voice for speaker 2
    pub secondary: String,
    /// Voice for speakers outside the configured mapping.
    /// Defaults to the primary voice when unset.
    pub fallback: Option<String>,
}

/// Synthesis audio configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub speaking_rate: f64,
}

/// Timeline pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Seconds subtracted when closing an utterance at a speaker change
    pub boundary_offset_secs: f64,
    /// Minimum source gap preserved as output silence (ms)
    pub min_silence_ms: u64,
    /// Hard deadline for the long-running transcription call (seconds)
    pub api_timeout_secs: u64,
}

/// External API configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Environment variable the API key is read from
    pub key_env: String,
}

/// Best-effort locale for a bare language code, used when a CLI override
/// supplies only the code.
pub fn locale_for(language: &str) -> String {
    match language {
        "en" => "en-US".to_string(),
        "pt" => "pt-BR".to_string(),
        "ja" => "ja-JP".to_string(),
        "zh" => "zh-CN".to_string(),
        "ko" => "ko-KR".to_string(),
        // fr -> fr-FR, de -> de-DE, es -> es-ES, it -> it-IT, ...
        other => format!("{other}-{}", other.to_uppercase()),
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            source: defaults::SOURCE_LANGUAGE.to_string(),
            source_locale: defaults::SOURCE_LOCALE.to_string(),
            target: defaults::TARGET_LANGUAGE.to_string(),
            target_locale: defaults::TARGET_LOCALE.to_string(),
        }
    }
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            primary: defaults::PRIMARY_VOICE.to_string(),
            secondary: defaults::SECONDARY_VOICE.to_string(),
            fallback: None,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: defaults::SAMPLE_RATE,
            speaking_rate: defaults::SPEAKING_RATE,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            boundary_offset_secs: defaults::BOUNDARY_OFFSET_SECS,
            min_silence_ms: defaults::MIN_SILENCE_MS,
            api_timeout_secs: defaults::API_TIMEOUT_SECS,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key_env: defaults::API_KEY_ENV.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RevoiceError::ConfigFileNotFound {
                path: path.display().to_string(),
            },
            _ => RevoiceError::Io(e),
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Config = toml::from_str(&contents)?;
                config.validate()?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Default configuration file path: `~/.config/revoice/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("revoice")
            .join("config.toml")
    }

    /// Resolve the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api.key_env).map_err(|_| RevoiceError::MissingApiKey {
            var: self.api.key_env.clone(),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.audio.sample_rate == 0 {
            return Err(RevoiceError::ConfigInvalidValue {
                key: "audio.sample_rate".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.audio.speaking_rate <= 0.0 {
            return Err(RevoiceError::ConfigInvalidValue {
                key: "audio.speaking_rate".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.timing.boundary_offset_secs < 0.0 {
            return Err(RevoiceError::ConfigInvalidValue {
                key: "timing.boundary_offset_secs".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_matches_documented_constants() {
        let config = Config::default();
        assert_eq!(config.languages.source, "en");
        assert_eq!(config.languages.target, "fr");
        assert_eq!(config.voices.primary, "fr-FR-Wavenet-A");
        assert_eq!(config.voices.secondary, "fr-FR-Wavenet-E");
        assert_eq!(config.timing.min_silence_ms, 200);
        assert!((config.timing.boundary_offset_secs - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.timing.api_timeout_secs, 300);
        assert_eq!(config.api.key_env, "GOOGLE_API_KEY");
    }

    #[test]
    fn load_partial_toml_fills_missing_sections_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[languages]\ntarget = \"de\"\ntarget_locale = \"de-DE\"\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.languages.target, "de");
        assert_eq!(config.languages.source, "en");
        assert_eq!(config.timing.min_silence_ms, 200);
    }

    #[test]
    fn load_invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid = = toml").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn load_or_default_missing_file_returns_defaults() {
        let config = Config::load_or_default(Path::new("/nonexistent/revoice.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_sample_rate_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[audio]\nsample_rate = 0").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("audio.sample_rate"));
    }

    #[test]
    fn negative_boundary_offset_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[timing]\nboundary_offset_secs = -0.5").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn locale_for_knows_common_languages() {
        assert_eq!(locale_for("en"), "en-US");
        assert_eq!(locale_for("fr"), "fr-FR");
        assert_eq!(locale_for("de"), "de-DE");
        assert_eq!(locale_for("ja"), "ja-JP");
        assert_eq!(locale_for("pt"), "pt-BR");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
