use chrono::NaiveDate;
use log::info;
use crate::models::settings::ReservationSettings;
use crate::store::SettingsStore;
use crate::store::errors::StoreError;

/// Settings backend keeping the document as query parameters in a
/// bookmarkable link, the way the original page encoded its state in the
/// address bar. The parameter string comes in through the configuration and
/// the updated link is logged on save so the user can bookmark it again.
pub struct UrlStore {
    params: String,
}

impl UrlStore {
    /// Returns a new instance of the UrlStore struct
    ///
    /// # Arguments
    ///
    /// * 'params' - the query parameter string holding the stored settings
    pub fn new(params: &str) -> UrlStore {
        UrlStore { params: params.to_string() }
    }
}

impl SettingsStore for UrlStore {
    fn load(&mut self) -> Result<ReservationSettings, StoreError> {
        decode_params(&self.params)
    }

    fn save(&mut self, settings: &ReservationSettings) -> Result<(), StoreError> {
        self.params = encode_params(settings);
        info!("updated settings link parameters: {}", self.params);

        Ok(())
    }
}

/// Decodes settings from a query parameter string.
/// Unknown keys are ignored and a malformed date is a document error.
///
/// # Arguments
///
/// * 'params' - query parameter string, e.g. "confirmed_date=2026-09-05&recipients=a@x.com"
fn decode_params(params: &str) -> Result<ReservationSettings, StoreError> {
    let mut settings = ReservationSettings::default();

    for pair in params.split('&') {
        let Some((key, value)) = pair.split_once('=') else { continue };

        match key {
            "confirmed_date" => {
                let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|e| StoreError::Document(format!("bad date '{}': {}", value, e)))?;
                settings.confirmed_date = Some(date);
            }
            "recipients" => {
                settings.additional_recipients = value
                    .split(',')
                    .map(|r| r.trim())
                    .filter(|r| !r.is_empty())
                    .map(|r| r.to_string())
                    .collect();
            }
            _ => (),
        }
    }

    Ok(settings)
}

/// Encodes settings as a query parameter string
///
/// # Arguments
///
/// * 'settings' - the settings to encode
fn encode_params(settings: &ReservationSettings) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(date) = settings.confirmed_date {
        parts.push(format!("confirmed_date={}", date.format("%Y-%m-%d")));
    }
    if !settings.additional_recipients.is_empty() {
        parts.push(format!("recipients={}", settings.additional_recipients.join(",")));
    }

    parts.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_load_default() {
        let mut store = UrlStore::new("");
        assert_eq!(store.load().unwrap(), ReservationSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = UrlStore::new("");
        let settings = ReservationSettings {
            confirmed_date: NaiveDate::from_ymd_opt(2026, 9, 5),
            additional_recipients: vec!["a@x.com".to_string(), "b@x.com".to_string()],
        };

        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut store = UrlStore::new("theme=dark&confirmed_date=2026-09-05");
        let settings = store.load().unwrap();

        assert_eq!(settings.confirmed_date, NaiveDate::from_ymd_opt(2026, 9, 5));
        assert!(settings.additional_recipients.is_empty());
    }

    #[test]
    fn malformed_date_is_a_document_error() {
        let mut store = UrlStore::new("confirmed_date=september");
        assert!(matches!(store.load().unwrap_err(), StoreError::Document(_)));
    }
}
