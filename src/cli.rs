use aichat::Role;
use clap::Parser;

/// Send a conversation to an OpenAI-compatible chat endpoint and print the reply
#[derive(Parser, Debug)]
#[command(name = "aichat", version)]
pub struct Cli {
    /// YAML or JSON file containing the list of messages to send
    #[arg(short, long)]
    pub conversation: Option<String>,

    /// System message placed before the conversation
    #[arg(short, long)]
    pub system: Option<String>,

    /// Message appended to the conversation (may be repeated)
    #[arg(short, long = "message")]
    pub messages: Vec<String>,

    /// Role given to the --message entries: user, assistant or system
    #[arg(short, long, default_value_t = Role::User)]
    pub role: Role,

    /// API key, read from OPENAI_API_KEY when omitted
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model identifier, defaults to gpt-3.5-turbo
    #[arg(long)]
    pub model: Option<String>,

    /// Chat-completions URL, defaults to the OpenAI endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file under ./logs
    #[arg(long)]
    pub log_file: bool,
}
