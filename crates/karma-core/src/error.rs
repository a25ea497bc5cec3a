use thiserror::Error;

#[derive(Debug, Error)]
pub enum KarmaError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("github api error: {0}")]
    Api(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("report error: {0}")]
    Report(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KarmaResult<T> = Result<T, KarmaError>;
