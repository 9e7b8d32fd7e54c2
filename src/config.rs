use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 4096;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_EXPORT_DIR: &str = "lesson-packs";

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
const MODEL_VAR: &str = "LESSON_PACK_MODEL";
const TEMPERATURE_VAR: &str = "LESSON_PACK_TEMPERATURE";
const MAX_TOKENS_VAR: &str = "LESSON_PACK_MAX_TOKENS";
const TIMEOUT_VAR: &str = "LESSON_PACK_TIMEOUT_SECS";
const EXPORT_DIR_VAR: &str = "LESSON_PACK_EXPORT_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub export_dir: PathBuf,
    pub api_key_present: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            api_key_present: false,
        }
    }
}

impl AppConfig {
    /// Load `.env` if there is one, then read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let temperature = match read(TEMPERATURE_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: TEMPERATURE_VAR,
                    value: raw,
                })?,
            None => defaults.temperature,
        };

        let max_tokens = parse_positive(read(MAX_TOKENS_VAR), MAX_TOKENS_VAR)?
            .map(|v| v as u32)
            .unwrap_or(defaults.max_tokens);

        let timeout = parse_positive(read(TIMEOUT_VAR), TIMEOUT_VAR)?
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Ok(Self {
            model: read(MODEL_VAR).unwrap_or(defaults.model),
            temperature,
            max_tokens,
            timeout,
            export_dir: read(EXPORT_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            api_key_present: read(API_KEY_VAR).is_some(),
        })
    }
}

fn parse_positive(raw: Option<String>, key: &'static str) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let value = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: raw.clone(),
        })?;
    if value == 0 {
        return Err(ConfigError::NotPositive { key });
    }
    if key == MAX_TOKENS_VAR && value > u32::MAX as u64 {
        return Err(ConfigError::InvalidNumber { key, value: raw });
    }
    Ok(Some(value))
}
