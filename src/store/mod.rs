pub mod errors;
pub mod memory;
pub mod file;
pub mod url;
pub mod remote;

use log::warn;
use crate::config::StoreParameters;
use crate::models::settings::ReservationSettings;
use crate::store::errors::StoreError;
use crate::store::file::FileStore;
use crate::store::memory::MemoryStore;
use crate::store::remote::RemoteStore;
use crate::store::url::UrlStore;

/// Common interface over the interchangeable settings backends.
///
/// Loading never fails because of a missing document or missing backend
/// configuration, both simply yield default settings. Saving replaces the
/// whole document in one write.
pub trait SettingsStore {
    fn load(&mut self) -> Result<ReservationSettings, StoreError>;
    fn save(&mut self, settings: &ReservationSettings) -> Result<(), StoreError>;
}

/// Selects a settings backend from configuration.
///
/// Absence of store configuration is a supported deployment mode and falls
/// back to the in-memory backend, as does a selected backend whose section
/// is missing. Business logic never branches on the backend kind, it only
/// sees the trait.
///
/// # Arguments
///
/// * 'params' - the optional store section of the configuration
pub fn from_config(params: Option<&StoreParameters>) -> Box<dyn SettingsStore> {
    let Some(params) = params else {
        return Box::new(MemoryStore::new());
    };

    match params.backend.as_deref() {
        Some("file") => {
            if let Some(file) = &params.file {
                Box::new(FileStore::new(&file.path))
            } else {
                warn!("file backend selected but [store.file] is missing, settings will not persist");
                Box::new(MemoryStore::new())
            }
        }
        Some("remote") => {
            if let Some(remote) = &params.remote {
                Box::new(RemoteStore::new(&remote.url, &remote.token))
            } else {
                warn!("remote backend selected but [store.remote] is missing, settings will not persist");
                Box::new(MemoryStore::new())
            }
        }
        Some("url") => {
            if let Some(url) = &params.url {
                Box::new(UrlStore::new(&url.params))
            } else {
                Box::new(UrlStore::new(""))
            }
        }
        Some("memory") | None => Box::new(MemoryStore::new()),
        Some(other) => {
            warn!("unknown settings backend '{}', settings will not persist", other);
            Box::new(MemoryStore::new())
        }
    }
}
