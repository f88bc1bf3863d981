use crate::errors::Result;
use crate::llm::ChatMessage;
use std::fs;

use tracing::info;

/// Loads a conversation from a YAML file
///
/// JSON files are accepted as well since JSON is a subset of YAML.
///
/// # Arguments
///
/// * `file_path` - Path to a file holding a list of `{role, content}` entries
///
/// # Returns
///
/// * `Result<Vec<ChatMessage>>` - The messages in file order
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The content is not a list of chat messages
pub fn load_conversation(file_path: &str) -> Result<Vec<ChatMessage>> {
    let yaml_str = fs::read_to_string(file_path)?;
    let messages: Vec<ChatMessage> = serde_yaml::from_str(&yaml_str)?;
    info!("Loaded {} messages from {}", messages.len(), file_path);
    Ok(messages)
}
