use thiserror::Error;

#[derive(Debug, Error)]
pub enum PushError {
    #[error("Todoist request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Todoist rejected task: HTTP {0}")]
    Rejected(reqwest::StatusCode),
}

pub type Result<T> = std::result::Result<T, PushError>;
