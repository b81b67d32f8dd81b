use std::fs;
use std::path::Path;
use crate::models::settings::ReservationSettings;
use crate::store::SettingsStore;
use crate::store::errors::StoreError;

/// Settings backend persisting to a JSON file at a fixed local path.
/// A missing file is not an error, it simply means default settings.
pub struct FileStore {
    path: String,
}

impl FileStore {
    /// Returns a new instance of the FileStore struct
    ///
    /// # Arguments
    ///
    /// * 'path' - path to the settings file
    pub fn new(path: &str) -> FileStore {
        FileStore { path: path.to_string() }
    }
}

impl SettingsStore for FileStore {
    fn load(&mut self) -> Result<ReservationSettings, StoreError> {
        if Path::new(&self.path).exists() {
            let json = fs::read_to_string(&self.path)?;
            let settings: ReservationSettings = serde_json::from_str(&json)?;

            Ok(settings)
        } else {
            Ok(ReservationSettings::default())
        }
    }

    fn save(&mut self, settings: &ReservationSettings) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn temp_path(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!("teewatch_{}_{}", name, std::process::id()));
        dir.to_str().unwrap().to_string()
    }

    #[test]
    fn missing_file_loads_default() {
        let mut store = FileStore::new(&temp_path("missing"));
        assert_eq!(store.load().unwrap(), ReservationSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("roundtrip");
        let mut store = FileStore::new(&path);

        let settings = ReservationSettings {
            confirmed_date: NaiveDate::from_ymd_opt(2026, 9, 12),
            additional_recipients: vec!["a@x.com".to_string(), "b@x.com".to_string()],
        };
        store.save(&settings).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.confirmed_date, settings.confirmed_date);
        assert_eq!(loaded.additional_recipients, settings.additional_recipients);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_a_document_error() {
        let path = temp_path("malformed");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(store.load().unwrap_err(), StoreError::Document(_)));

        let _ = fs::remove_file(&path);
    }
}
