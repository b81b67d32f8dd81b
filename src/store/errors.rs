use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("settings request failed: {0}")]
    Transport(String),
    #[error("malformed settings document: {0}")]
    Document(String),
    #[error("settings document changed since last read")]
    Conflict,
}

impl From<ureq::Error> for StoreError {
    fn from(e: ureq::Error) -> StoreError {
        StoreError::Transport(e.to_string())
    }
}
impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> StoreError {
        StoreError::Document(e.to_string())
    }
}
impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> StoreError {
        StoreError::Transport(e.to_string())
    }
}
