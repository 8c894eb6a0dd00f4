//! grammar-checker - interactive grammar correction over the Gemini API
//!
//! Each line typed at the prompt is sent to a chat session primed with a
//! grammar-teacher persona; the reply's Original / Corrected / Explanation /
//! Rules sections are printed with their own colors.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod persona;
pub mod utils;

pub use crate::app::App;
pub use crate::config::Settings;
pub use crate::error::{AppError, ClientError, SendError};
pub use crate::persona::PERSONA_INSTRUCTION;

use crate::core::{ChatService, GeminiClient, GeminiSession};
use crate::utils::Theme;

/// Everything `main` needs before the input loop can start
pub struct Bootstrap {
    pub settings: Settings,
    pub persona: String,
    pub theme: Theme,
}

impl Bootstrap {
    /// Load `.env`, settings and the persona text. A missing `.env` file
    /// is logged and otherwise ignored.
    pub fn load() -> Result<Self, AppError> {
        if let Err(warning) = crate::config::load_env_file(crate::config::DEFAULT_ENV_FILE) {
            tracing::warn!("Warning: {}", warning);
        }

        let settings = Settings::new().map_err(|e| AppError::Settings(e.into()))?;
        let persona = crate::persona::load_persona(settings.persona.path.as_deref())
            .map_err(AppError::Settings)?;
        let theme = Theme::from_settings(settings.display.color);

        Ok(Self {
            settings,
            persona,
            theme,
        })
    }

    /// Construct the client, open a session and send the persona instruction
    pub async fn connect(
        &self,
        api_key: Option<String>,
    ) -> Result<App<GeminiSession>, AppError> {
        let client = GeminiClient::new(api_key, &self.settings.gemini)?;
        let session = client.start_session();
        App::start(session, &self.persona, self.theme.clone()).await
    }
}
