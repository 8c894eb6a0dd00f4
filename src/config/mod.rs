pub mod env;
pub mod settings;

pub use env::{load_env_file, ConfigLoadWarning, DEFAULT_ENV_FILE};
pub use settings::{DisplayConfig, GeminiConfig, PersonaConfig, Settings, API_KEY_VAR};
