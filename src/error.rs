use thiserror::Error;

#[derive(Error, Debug)]
pub enum KpiError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("metrics document must be a JSON object: {0}")]
    InvalidMetrics(String),

    #[error("invalid goal document: {0}")]
    InvalidGoal(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KpiError>;
