use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("weather request failed: {0}")]
    Transport(String),
    #[error("malformed forecast payload: {0}")]
    Document(String),
}

impl From<ureq::Error> for ForecastError {
    fn from(e: ureq::Error) -> ForecastError {
        ForecastError::Transport(e.to_string())
    }
}
impl From<serde_json::Error> for ForecastError {
    fn from(e: serde_json::Error) -> ForecastError {
        ForecastError::Document(e.to_string())
    }
}
