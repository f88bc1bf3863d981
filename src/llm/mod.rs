mod llm_client;
mod message;

pub use llm_client::*;
pub use message::*;
