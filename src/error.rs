//! Error taxonomy
//!
//! `SendError` is the only recoverable kind once the session is running:
//! the input loop reports it and prompts again. Every `AppError` ends the
//! process with a non-zero status.

use std::io;
use std::process::ExitCode;
use thiserror::Error;

/// The remote client could not be constructed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("missing API key: set {0} in the environment or in .env")]
    MissingApiKey(&'static str),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// A single message could not be exchanged with the remote service.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response decode error: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("prompt was blocked: {0}")]
    Blocked(String),

    #[error("response contained no candidates")]
    NoCandidates,

    #[error("reply contained no text (finish reason: {0})")]
    EmptyReply(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load settings: {0:#}")]
    Settings(anyhow::Error),

    #[error("Failed to create client: {0}")]
    ClientInit(#[from] ClientError),

    #[error("Failed to send system prompt: {0}")]
    InitialSend(#[source] SendError),

    #[error("Error reading input: {0}")]
    InputStream(#[source] io::Error),

    #[error("Error writing output: {0}")]
    Output(#[source] io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_messages_are_labeled() {
        let err = AppError::ClientInit(ClientError::MissingApiKey("GEMINI_API_KEY"));
        assert_eq!(
            err.to_string(),
            "Failed to create client: missing API key: set GEMINI_API_KEY in the environment or in .env"
        );

        let err = AppError::InitialSend(SendError::NoCandidates);
        assert_eq!(
            err.to_string(),
            "Failed to send system prompt: response contained no candidates"
        );

        let err = AppError::InputStream(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(err.to_string(), "Error reading input: boom");
    }

    #[test]
    fn test_api_error_carries_status_and_body() {
        let err = SendError::Api {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: "quota".to_string(),
        };
        assert_eq!(err.to_string(), "API error 429 Too Many Requests: quota");
    }
}
