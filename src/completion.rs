//! Chat-completion wire types and clients.
//!
//! The HTTP client speaks the OpenAI-compatible `/chat/completions` protocol
//! that hosted providers such as Groq expose.

use crate::{
    config::Config,
    error::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice; later choices are ignored.
    pub fn first_text(&self) -> Result<String> {
        let choice = self
            .choices
            .first()
            .ok_or_else(|| Error::MalformedResponse("response has no choices".into()))?;
        choice
            .message
            .content
            .clone()
            .ok_or_else(|| Error::MalformedResponse("first choice has no content".into()))
    }
}

pub trait Completion {
    fn complete(&self, req: &ChatRequest) -> Result<ChatResponse>;
}

impl<C: Completion + ?Sized> Completion for &C {
    fn complete(&self, req: &ChatRequest) -> Result<ChatResponse> {
        (**self).complete(req)
    }
}

pub fn api_key_from_env(var: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        Ok(_) => Err(Error::Credential(format!("{var} is empty"))),
        Err(_) => Err(Error::Credential(format!("{var} is not set"))),
    }
}

pub struct HttpCompletion {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl HttpCompletion {
    pub fn new(cfg: &Config) -> Result<Self> {
        let api_key = api_key_from_env(&cfg.llm.api_key_env)?;
        Self::with_api_key(cfg, api_key)
    }

    pub fn with_api_key(cfg: &Config, api_key: String) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if cfg.llm.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(cfg.llm.timeout_seconds));
        }
        let client = builder
            .build()
            .map_err(|e| Error::Transport(format!("building HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: cfg.llm.endpoint(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Completion for HttpCompletion {
    fn complete(&self, req: &ChatRequest) -> Result<ChatResponse> {
        info!(
            "completion request model={} messages={} temperature={} max_tokens={}",
            req.model,
            req.messages.len(),
            req.temperature,
            req.max_tokens
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(req)
            .send()
            .map_err(|e| Error::Transport(format!("{}: {e}", self.endpoint)))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| Error::Transport(format!("reading response body: {e}")))?;
        debug!("completion response status={} bytes={}", status, body.len());

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Credential(format!(
                "{} rejected the API key ({status})",
                self.endpoint
            )));
        }
        if !status.is_success() {
            return Err(Error::Service {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::MalformedResponse(e.to_string()))
    }
}
