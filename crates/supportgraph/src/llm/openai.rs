//! OpenAI-compatible LLM client (Chat Completions API).
//!
//! `ChatOpenAI` speaks the standard `/chat/completions` endpoint and works
//! against any compatible server via `base_url`. `ChatGroq` is the same wire
//! protocol pointed at Groq's endpoint, the provider the support agent was
//! originally run against.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::llm::{LlmClient, LlmError, LlmResponse, Usage};
use crate::message::Message;

/// Groq's OpenAI-compatible API base.
const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// OpenAI-compatible configuration.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key, usually from the `OPENAI_API_KEY` environment variable.
    pub api_key: String,
    /// Base URL, default `https://api.openai.com/v1`; compatible endpoints
    /// (Groq, Azure, proxies) substitute their own.
    pub base_url: String,
    /// Model id, e.g. `gpt-4o-mini` or `llama-3.3-70b-versatile`.
    pub model: String,
    /// Default temperature applied to every request.
    pub default_temperature: Option<f32>,
}

impl OpenAiConfig {
    /// Reads config from the environment: `OPENAI_API_KEY` required,
    /// `OPENAI_BASE_URL` and `OPENAI_MODEL` optional.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| LlmError::Auth("OPENAI_API_KEY not set".to_string()))?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            default_temperature: Some(0.7),
        })
    }
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

fn to_wire(m: &Message) -> WireMessage {
    let (role, content) = match m {
        Message::System(s) => ("system", s),
        Message::User(s) => ("user", s),
        Message::Assistant(s) => ("assistant", s),
    };
    WireMessage {
        role,
        content: content.clone(),
    }
}

#[derive(Debug, Serialize)]
struct RequestBody {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessageOut,
}

#[derive(Debug, Deserialize)]
struct WireMessageOut {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
    usage: Option<WireUsage>,
}

/// OpenAI-compatible Chat Completions client.
///
/// **Interaction**: Implements `LlmClient`; used by `GenerateNode` and the
/// eval judge when running against a real provider.
#[derive(Debug)]
pub struct ChatOpenAI {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl ChatOpenAI {
    /// Builds a client from the given config.
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Builds a client from the environment (requires `OPENAI_API_KEY`).
    pub fn from_env() -> Result<Self, LlmError> {
        OpenAiConfig::from_env().map(Self::new)
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = RequestBody {
            model: self.config.model.clone(),
            messages: messages.iter().map(to_wire).collect(),
            temperature: self.config.default_temperature,
        };
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 | 403 => LlmError::Auth(text),
                429 => LlmError::RateLimit(text),
                400..=499 => LlmError::InvalidRequest(text),
                _ => LlmError::ApiError(text),
            });
        }
        let parsed: WireResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::Parsing(format!("{e}: {text}")))?;
        let content = parsed
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();
        let usage = parsed
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
            })
            .unwrap_or_default();
        Ok(LlmResponse { content, usage })
    }
}

/// Groq Chat Completions client (OpenAI-compatible wire format).
///
/// Reads `GROQ_API_KEY` from the environment; models such as
/// `llama-3.3-70b-versatile`.
#[derive(Debug)]
pub struct ChatGroq {
    inner: ChatOpenAI,
}

impl ChatGroq {
    /// Builds a Groq client for the given model (`GROQ_API_KEY` from env).
    pub fn new(model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| LlmError::Auth("GROQ_API_KEY not set".to_string()))?;
        Ok(Self {
            inner: ChatOpenAI::new(OpenAiConfig {
                api_key,
                base_url: GROQ_API_BASE.to_string(),
                model: model.into(),
                default_temperature: Some(0.0),
            }),
        })
    }
}

#[async_trait]
impl LlmClient for ChatGroq {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        self.inner.invoke(messages).await
    }
}
