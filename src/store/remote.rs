use std::time::Duration;
use ureq::Agent;
use ureq::Error;
use crate::models::settings::ReservationSettings;
use crate::store::SettingsStore;
use crate::store::errors::StoreError;

/// Settings backend persisting to a JSON document behind an authenticated
/// document API. Every read captures the document revision from the ETag
/// header and every write sends it back as If-Match, so a write over a
/// document that changed in between is rejected by the server instead of
/// silently overwriting it.
pub struct RemoteStore {
    agent: Agent,
    url: String,
    token: String,
    revision: Option<String>,
}

impl RemoteStore {
    /// Returns a new instance of the RemoteStore struct
    ///
    /// # Arguments
    ///
    /// * 'url' - full URL of the settings document
    /// * 'token' - bearer token for the document API
    pub fn new(url: &str, token: &str) -> RemoteStore {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .build();

        let agent = config.into();

        Self { agent, url: url.to_string(), token: token.to_string(), revision: None }
    }
}

impl SettingsStore for RemoteStore {
    fn load(&mut self) -> Result<ReservationSettings, StoreError> {
        let result = self.agent
            .get(self.url.as_str())
            .header("Authorization", format!("Bearer {}", self.token))
            .call();

        match result {
            Ok(mut res) => {
                self.revision = res.headers()
                    .get("etag")
                    .and_then(|v| v.to_str().ok())
                    .map(|v| v.to_string());

                let json = res.body_mut().read_to_string()?;
                let settings: ReservationSettings = serde_json::from_str(&json)?;

                Ok(settings)
            }
            // No document yet is a normal first run
            Err(Error::StatusCode(404)) => {
                self.revision = None;
                Ok(ReservationSettings::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, settings: &ReservationSettings) -> Result<(), StoreError> {
        let json = serde_json::to_string(settings)?;

        let mut req = self.agent
            .put(self.url.as_str())
            .content_type("application/json")
            .header("Authorization", format!("Bearer {}", self.token));

        if let Some(revision) = &self.revision {
            req = req.header("If-Match", revision.as_str());
        }

        match req.send(json) {
            Ok(res) => {
                self.revision = res.headers()
                    .get("etag")
                    .and_then(|v| v.to_str().ok())
                    .map(|v| v.to_string());

                Ok(())
            }
            Err(Error::StatusCode(409)) | Err(Error::StatusCode(412)) => Err(StoreError::Conflict),
            Err(e) => Err(e.into()),
        }
    }
}
