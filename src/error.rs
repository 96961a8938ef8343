use thiserror::Error;

/// Boundary errors. The core engine functions are total and never return these.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("invalid question {id}: {reason}")]
    InvalidQuestion { id: String, reason: String },
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(String),
    #[error("question already answered: {0}")]
    AlreadyAnswered(String),
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(String),
}
