use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShipitError>;

#[derive(Error, Debug)]
pub enum ShipitError {
    #[error("git executable not found in PATH")]
    GitNotFound,

    #[error("Not a git repository (or any of the parent directories)")]
    NotARepository,

    #[error("Failed to stage changes: {0}")]
    Stage(String),

    #[error("Failed to read staged diff: {0}")]
    Diff(String),

    #[error("API key not configured")]
    MissingCredential,

    #[error("LLM API error ({status}): {body}")]
    LlmApi { status: u16, body: String },

    #[error("LLM provider error: {0}")]
    Llm(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Commit failed: {0}")]
    Commit(String),

    #[error("Push failed: {0}")]
    Push(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(inquire::InquireError),

    #[error("Operation cancelled by user")]
    UserCancelled,

    /// 通用错误类型，用于不适合其他分类的错误
    #[error("{0}")]
    Other(String),
}

impl From<inquire::InquireError> for ShipitError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => ShipitError::UserCancelled,
            other => ShipitError::Prompt(other),
        }
    }
}

impl ShipitError {
    /// 获取错误的解决建议
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            ShipitError::GitNotFound => Some("Install git and make sure it is on your PATH"),
            ShipitError::NotARepository => {
                Some("Run shipit from inside a git repository, or run 'git init' first")
            }
            ShipitError::MissingCredential => Some(
                "Run 'shipit config set' to store your OpenRouter API key, or set OPENROUTER_API_KEY",
            ),
            ShipitError::LlmApi { status: 401, .. } | ShipitError::LlmApi { status: 403, .. } => {
                Some("Check if your API key is valid with 'shipit config get', then 'shipit config set'")
            }
            ShipitError::LlmApi { status: 404, .. } => {
                Some("The model may not exist. Pick another one with 'shipit config set --model <id>'")
            }
            ShipitError::LlmApi { status: 429, .. } => {
                Some("Rate limit exceeded. Wait a moment and try again; your changes are still staged")
            }
            ShipitError::LlmApi { status, .. } if *status >= 500 => {
                Some("API service is temporarily unavailable. Try again in a few moments")
            }
            ShipitError::Network(_) => {
                Some("Check your network connection or proxy settings; your changes are still staged")
            }
            ShipitError::Llm(msg) if msg.contains("Failed to parse") => {
                Some("Try the --verbose flag to see the full API response")
            }
            ShipitError::Push(_) => {
                Some("Your commit was created locally. Resolve the problem and run 'git push'")
            }
            _ => None,
        }
    }
}
