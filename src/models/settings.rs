use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted reservation settings
///
/// The additional recipients never include the primary recipient, which is
/// implicitly prepended when notifications are assembled.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ReservationSettings {
    pub confirmed_date: Option<NaiveDate>,
    #[serde(default)]
    pub additional_recipients: Vec<String>,
}

impl ReservationSettings {
    /// Replaces the additional recipients from a raw comma separated string.
    /// Entries are trimmed, empty entries dropped, exact duplicates collapsed
    /// and the primary recipient filtered out since it is always implicit.
    ///
    /// # Arguments
    ///
    /// * 'input' - comma separated recipient string as entered by the user
    /// * 'primary' - the fixed primary recipient
    pub fn set_recipients(&mut self, input: &str, primary: &str) {
        self.additional_recipients = parse_recipients(input, primary);
    }
}

/// Parses a comma separated recipient string into a clean list
///
/// # Arguments
///
/// * 'input' - comma separated recipient string
/// * 'primary' - the fixed primary recipient to exclude
pub fn parse_recipients(input: &str, primary: &str) -> Vec<String> {
    let mut recipients: Vec<String> = Vec::new();

    for entry in input.split(',') {
        let entry = entry.trim();
        if entry.is_empty() || entry == primary {
            continue;
        }
        if !recipients.iter().any(|r| r == entry) {
            recipients.push(entry.to_string());
        }
    }

    recipients
}
