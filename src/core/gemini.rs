use crate::config::{GeminiConfig, API_KEY_VAR};
use crate::core::session::{ChatService, ChatSession, Reply};
use crate::error::{ClientError, SendError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Authenticated handle to the Gemini `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, config: &GeminiConfig) -> Result<Self, ClientError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ClientError::MissingApiKey(API_KEY_VAR))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn generate(&self, contents: &[Content]) -> Result<GenerateContentResponse, SendError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest { contents })
            .send()
            .await
            .map_err(SendError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("[GeminiClient] API returned error status {}: {}", status, body);
            return Err(SendError::Api { status, body });
        }

        response.json().await.map_err(SendError::Decode)
    }
}

impl ChatService for GeminiClient {
    type Session = GeminiSession;

    fn start_session(&self) -> GeminiSession {
        tracing::info!("[GeminiClient] Starting chat session with {}", self.model);
        GeminiSession {
            client: self.clone(),
            history: Vec::new(),
        }
    }
}

/// Conversation state held client-side; the full history is sent each turn
pub struct GeminiSession {
    client: GeminiClient,
    history: Vec<Content>,
}

impl GeminiSession {
    pub fn history(&self) -> &[Content] {
        &self.history
    }
}

#[async_trait]
impl ChatSession for GeminiSession {
    async fn send_message(&mut self, text: &str) -> Result<Reply, SendError> {
        self.history.push(Content::user(text));
        tracing::debug!(
            "[GeminiSession] Sending turn {} ({} chars)",
            self.history.len(),
            text.len()
        );

        let response = match self.client.generate(&self.history).await {
            Ok(response) => response,
            Err(e) => {
                self.history.pop();
                return Err(e);
            }
        };

        let Some(first) = response.candidates.first() else {
            self.history.pop();
            return Err(match response.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => SendError::Blocked(reason),
                None => SendError::NoCandidates,
            });
        };

        // A model turn with no text would be rejected on every later request
        let has_text = first
            .content
            .as_ref()
            .is_some_and(|c| c.parts.iter().any(|p| p.text.is_some()));
        if !has_text {
            self.history.pop();
            let reason = first
                .finish_reason
                .clone()
                .unwrap_or_else(|| "UNSPECIFIED".to_string());
            return Err(SendError::EmptyReply(reason));
        }

        let mut model_turn = first.content.clone().unwrap_or(Content {
            role: None,
            parts: Vec::new(),
        });
        model_turn.role = Some(Role::Model);
        self.history.push(model_turn);

        let fragments = response
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect();

        Ok(Reply::new(fragments))
    }
}
