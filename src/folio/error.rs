use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    /// Malformed caller input, rejected before the store is touched.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A record referenced by an upsert does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl FolioError {
    /// True for errors caused by the request rather than the service.
    pub fn is_user_error(&self) -> bool {
        matches!(self, FolioError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
