use thiserror::Error;
use crate::manager_ntfy::errors::NtfyError;
use crate::manager_openmeteo::errors::ForecastError;
use crate::store::errors::StoreError;

#[derive(Error, Debug)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

#[derive(Error, Debug)]
#[error("TeeWatchInitError: {0}")]
pub struct InitError(pub String);

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError(e.to_string())
    }
}

#[derive(Error, Debug)]
#[error("TeeWatchWorkerError: {0}")]
pub struct WorkerError(pub String);

impl From<ForecastError> for WorkerError {
    fn from(e: ForecastError) -> Self {
        WorkerError(e.to_string())
    }
}
impl From<StoreError> for WorkerError {
    fn from(e: StoreError) -> Self {
        WorkerError(e.to_string())
    }
}
impl From<NtfyError> for WorkerError {
    fn from(e: NtfyError) -> Self {
        WorkerError(e.to_string())
    }
}
