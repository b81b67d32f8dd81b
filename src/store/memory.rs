use crate::models::settings::ReservationSettings;
use crate::store::SettingsStore;
use crate::store::errors::StoreError;

/// Settings backend without persistence, everything resets on restart.
/// This is the fallback when no other backend is configured.
pub struct MemoryStore {
    settings: Option<ReservationSettings>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore { settings: None }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&mut self) -> Result<ReservationSettings, StoreError> {
        Ok(self.settings.clone().unwrap_or_default())
    }

    fn save(&mut self, settings: &ReservationSettings) -> Result<(), StoreError> {
        self.settings = Some(settings.clone());
        Ok(())
    }
}
