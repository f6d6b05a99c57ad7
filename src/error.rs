use thiserror::Error;

#[derive(Error, Debug)]
pub enum OctoviewError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("github responded with {0}")]
    Http(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OctoviewError>;
