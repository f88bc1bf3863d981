/// Model identifier sent with every chat request unless overridden
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Environment variable holding the API key when none is passed explicitly
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// File name used by the rolling log appender
pub const LOG_FILE_NAME: &str = "aichat.log";
