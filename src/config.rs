//! Generator configuration: built-in defaults, an optional YAML file, then
//! `ALFABETO_*` environment overrides.

use crate::catalog::{default_sound_effects, SoundEffectSpec, LETTERS_DIR, SOUNDS_DIR};
use crate::pronunciation::{PronunciationOverride, ALPHABET};
use crate::tts::TtsEndpoint;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_BASE_URL: &str = "ALFABETO_TTS_BASE_URL";
pub const ENV_OUTPUT_DIR: &str = "ALFABETO_OUTPUT_DIR";
pub const ENV_DELAY_MS: &str = "ALFABETO_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub tts: TtsEndpoint,
    /// Root under which `audio/letters` and `audio/sounds` are created.
    pub output_dir: PathBuf,
    pub delay_ms: u64,
    pub skip_existing: bool,
    pub alphabet: String,
    /// Letter → spoken form. Letters without an entry are spoken as themselves.
    pub pronunciation: BTreeMap<String, String>,
    pub sound_effects: Vec<SoundEffectSpec>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let pronunciation = [("A", "á"), ("E", "é"), ("I", "í"), ("O", "ó"), ("U", "ú")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            tts: TtsEndpoint::default(),
            output_dir: PathBuf::from("."),
            delay_ms: 500,
            skip_existing: false,
            alphabet: ALPHABET.to_string(),
            pronunciation,
            sound_effects: default_sound_effects(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("Cannot read config file: {}", e),
                ErrorContext::new()
                    .with_details(path.display().to_string())
                    .with_source("config"),
            )
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_yaml_str(&content)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (the environment in production).
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.tts.base_url = url;
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(ENV_DELAY_MS) {
            self.delay_ms = parse_delay_ms(&raw, ENV_DELAY_MS)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tts.base_url.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "TTS base URL must not be empty",
                ErrorContext::new().with_field_path("tts.base_url"),
            ));
        }
        if self.tts.timeout_secs == Some(0) {
            return Err(Error::configuration_with_context(
                "TTS timeout must be greater than zero",
                ErrorContext::new().with_field_path("tts.timeout_secs"),
            ));
        }
        if !self.alphabet.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(Error::configuration_with_context(
                "alphabet must contain at least one letter",
                ErrorContext::new()
                    .with_field_path("alphabet")
                    .with_details(self.alphabet.clone()),
            ));
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn pronunciation_table(&self) -> PronunciationOverride {
        PronunciationOverride::from_map(&self.pronunciation)
    }

    pub fn letters_dir(&self) -> PathBuf {
        self.output_dir.join(LETTERS_DIR)
    }

    pub fn sounds_dir(&self) -> PathBuf {
        self.output_dir.join(SOUNDS_DIR)
    }
}

pub fn parse_delay_ms(raw: &str, field: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        Error::configuration_with_context(
            "delay must be a whole number of milliseconds",
            ErrorContext::new()
                .with_field_path(field)
                .with_details(raw.to_string()),
        )
    })
}
