mod parser;

use crate::constants::API_KEY_ENV;
use crate::errors::{Error, Result};
use crate::llm::{ChatClient, ChatMessage, Role};

pub use parser::load_conversation;

/// Settings needed to build a [`ChatClient`]
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Optional model override
    pub model: Option<String>,
    /// Optional endpoint override
    pub endpoint: Option<String>,
}

impl ClientSettings {
    /// Resolves settings, reading the API key from the environment when none
    /// is given explicitly.
    pub fn resolve(
        api_key: Option<String>,
        model: Option<String>,
        endpoint: Option<String>,
    ) -> Result<Self> {
        let api_key = pick_api_key(api_key, std::env::var(API_KEY_ENV).ok())?;
        Ok(ClientSettings {
            api_key,
            model,
            endpoint,
        })
    }

    pub fn build_client(&self) -> Result<ChatClient> {
        let mut client = ChatClient::new(self.api_key.as_str())?;
        if let Some(endpoint) = &self.endpoint {
            client = client.with_endpoint(endpoint)?;
        }
        if let Some(model) = &self.model {
            client = client.with_model(model.as_str());
        }
        Ok(client)
    }
}

/// Explicit key wins over the environment; blank values count as absent.
fn pick_api_key(explicit: Option<String>, from_env: Option<String>) -> Result<String> {
    explicit
        .filter(|k| !k.trim().is_empty())
        .or_else(|| from_env.filter(|k| !k.trim().is_empty()))
        .ok_or_else(|| {
            Error::Config(format!(
                "no API key given; pass --api-key or set {}",
                API_KEY_ENV
            ))
        })
}

/// Assembles the conversation to send: the optional file first, then the
/// system prompt in front and the extra messages, tagged with `role`, at the end.
pub fn build_conversation(
    conversation_path: Option<&str>,
    system_prompt: Option<&str>,
    extra_messages: &[String],
    role: Role,
) -> Result<Vec<ChatMessage>> {
    let mut messages = match conversation_path {
        Some(path) => load_conversation(path)?,
        None => Vec::new(),
    };
    if let Some(system) = system_prompt {
        messages.insert(0, ChatMessage::system(system));
    }
    messages.extend(
        extra_messages
            .iter()
            .map(|m| ChatMessage::new(role, m.as_str())),
    );

    if messages.is_empty() {
        return Err(Error::Config(
            "nothing to send; pass --conversation or --message".into(),
        ));
    }
    Ok(messages)
}
