use thiserror::Error;

#[derive(Error, Debug)]
pub enum HnError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Item not found: {0}")]
    ItemNotFound(u64),
}

pub type Result<T> = std::result::Result<T, HnError>;
