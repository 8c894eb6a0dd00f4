use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable holding the Gemini credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub gemini: GeminiConfig,
    pub display: DisplayConfig,
    #[serde(default)]
    pub persona: PersonaConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonaConfig {
    /// Replaces the built-in persona instruction when set
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `config/{CONFIG_ENV}` and `APP__*` environment variables
    pub fn new() -> Result<Self, ConfigError> {
        let config_env = env::var("CONFIG_ENV").unwrap_or_else(|_| "default".to_string());
        Self::from_file(&format!("config/{}", config_env))
    }

    /// Load settings with `file` (extension optional) as the file source.
    /// A missing file is not an error; the built-in defaults apply.
    pub fn from_file(file: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("gemini.model", DEFAULT_MODEL)?
            .set_default("gemini.base_url", DEFAULT_BASE_URL)?
            .set_default("gemini.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("display.color", true)?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// The Gemini credential, if one is present in the environment.
    /// A blank value counts as absent.
    pub fn api_key() -> Option<String> {
        env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
