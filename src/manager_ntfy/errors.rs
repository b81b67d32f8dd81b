use thiserror::Error;

#[derive(Error, Debug)]
#[error("error in communication with ntfy relay: {0}")]
pub struct NtfyError(pub String);

impl From<ureq::Error> for NtfyError {
    fn from(e: ureq::Error) -> NtfyError {
        NtfyError(format!("http request error: {}", e))
    }
}
