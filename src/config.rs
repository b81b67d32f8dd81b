use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct GeoRef {
    pub lat: f64,
    pub long: f64,
}

#[derive(Deserialize)]
pub struct CourseParameters {
    pub name: String,
    pub booking_url: String,
    pub timezone: String,
}

#[derive(Deserialize)]
pub struct NotifyParameters {
    pub topic: String,
    pub primary_recipient: String,
}

#[derive(Deserialize)]
pub struct FileStoreParameters {
    pub path: String,
}

#[derive(Deserialize)]
pub struct RemoteStoreParameters {
    pub url: String,
    pub token: String,
}

#[derive(Deserialize)]
pub struct UrlStoreParameters {
    pub params: String,
}

#[derive(Deserialize)]
pub struct StoreParameters {
    pub backend: Option<String>,
    pub file: Option<FileStoreParameters>,
    pub remote: Option<RemoteStoreParameters>,
    pub url: Option<UrlStoreParameters>,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub geo_ref: GeoRef,
    pub course: CourseParameters,
    pub notify: NotifyParameters,
    pub store: Option<StoreParameters>,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}
