//! Chat session capability
//!
//! The input loop only ever talks to these traits, so it runs the same
//! against the Gemini client and against canned replies in tests.

use crate::error::SendError;
use async_trait::async_trait;

/// One model response, split into the content fragments it arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub fragments: Vec<String>,
}

impl Reply {
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            fragments: vec![text.into()],
        }
    }
}

/// Opens conversations against a remote model.
pub trait ChatService {
    type Session: ChatSession;

    /// Start an empty session bound to the service's model
    fn start_session(&self) -> Self::Session;
}

/// An ordered conversation with a remote model.
#[async_trait]
pub trait ChatSession: Send {
    /// Append `text` as a user turn and return the model's reply.
    ///
    /// On failure the session history is left as it was before the call.
    async fn send_message(&mut self, text: &str) -> Result<Reply, SendError>;
}
