use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::errors::{Error, Result};
use crate::llm::ChatMessage;
use reqwest::Client;
use serde::Serialize;
use std::fmt;
use tracing::{debug, error};
use url::Url;

/// Body of a chat-completions request
#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct ChatClient {
    http: Client,
    /// API key sent as a bearer token
    api_key: String,
    /// Chat-completions URL
    endpoint: Url,
    /// Model identifier (e.g. "gpt-3.5-turbo")
    model: String,
}

impl fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatClient")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("model", &self.model)
            .finish()
    }
}

impl ChatClient {
    /// Creates a client targeting the default endpoint and model.
    ///
    /// # Arguments
    /// * `api_key` - Bearer credential, must not be empty
    ///
    /// # Returns
    /// * `Result<Self>` - Client instance or `InvalidInput` for an empty key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::InvalidInput("API key must not be empty".into()));
        }
        Ok(ChatClient {
            http: Client::new(),
            api_key,
            endpoint: Url::parse(DEFAULT_ENDPOINT)?,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Points the client at another chat-completions URL.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the conversation and returns the assistant's reply.
    ///
    /// A non-success HTTP status is logged and yields `Ok(None)`. Transport
    /// failures and bodies without `choices[0].message.content` are errors.
    ///
    /// # Arguments
    /// * `messages` - Conversation in order, must not be empty
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Reply text, `None` on a rejected request
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<Option<String>> {
        if messages.is_empty() {
            return Err(Error::InvalidInput("message list must not be empty".into()));
        }

        let request_body = ChatRequest {
            model: &self.model,
            messages,
        };
        debug!("Sending {} messages to {}", messages.len(), self.endpoint);

        let res = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            error!("Chat completion request failed ({}): {}", status, text);
            return Ok(None);
        }

        let text = res.text().await?;
        let json_resp: serde_json::Value = serde_json::from_str(&text)?;
        debug!("Chat completion response: {}", json_resp);
        match json_resp["choices"][0]["message"]["content"].as_str() {
            Some(content) => Ok(Some(content.to_string())),
            None => Err(Error::MissingContent),
        }
    }
}

/// Sends `messages` to the default endpoint with the default model.
///
/// Builds a fresh [`ChatClient`] per call; hold a client instead when making
/// several requests.
pub async fn chat(messages: &[ChatMessage], api_key: &str) -> Result<Option<String>> {
    ChatClient::new(api_key)?.chat(messages).await
}
