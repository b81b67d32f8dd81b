use std::fmt;
use std::fmt::Formatter;
use chrono::NaiveDate;
use crate::classifier::{Status, Verdict};
use crate::models::settings::ReservationSettings;

/// Outcome of checking the stored reservation date against the
/// latest verdict table
#[derive(Debug, Clone, PartialEq)]
pub enum WatchResult {
    NoReservation,
    Good(Verdict),
    Bad(Verdict),
    Unknown(NaiveDate),
}

/// Implementation of the Display Trait for the alert banner
impl fmt::Display for WatchResult {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            WatchResult::NoReservation =>
                write!(f, "no reservation date recorded"),
            WatchResult::Good(v) =>
                write!(f, "reservation {} looks good: {}", v.date, v.reason),
            WatchResult::Bad(v) =>
                write!(f, "WARNING - weather deteriorated for reservation {}: {}", v.date, v.reason),
            WatchResult::Unknown(date) =>
                write!(f, "reservation {} is outside the current forecast window", date),
        }
    }
}

/// Looks up the verdict for the stored reservation date.
///
/// Matching is by exact date only. A date that has dropped out of the
/// forecast window resolves to Unknown, never to an error, since forecasts
/// are relative to today while the stored date is not.
///
/// # Arguments
///
/// * 'settings' - the loaded reservation settings
/// * 'verdicts' - verdict table from the latest fetch cycle
pub fn watch(settings: &ReservationSettings, verdicts: &[Verdict]) -> WatchResult {
    let Some(date) = settings.confirmed_date else {
        return WatchResult::NoReservation;
    };

    match verdicts.iter().find(|v| v.date == date) {
        Some(verdict) => match verdict.status {
            Status::Recommended => WatchResult::Good(verdict.clone()),
            Status::NotRecommended => WatchResult::Bad(verdict.clone()),
            Status::Unknown => WatchResult::Unknown(date),
        },
        None => WatchResult::Unknown(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(date: NaiveDate, status: Status) -> Verdict {
        Verdict {
            day_index: 0,
            date,
            status,
            reason: "conditions clear".to_string(),
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, day).unwrap()
    }

    #[test]
    fn no_confirmed_date_always_gives_no_reservation() {
        let settings = ReservationSettings::default();
        let verdicts = vec![verdict(date(1), Status::NotRecommended)];

        assert_eq!(watch(&settings, &verdicts), WatchResult::NoReservation);
        assert_eq!(watch(&settings, &[]), WatchResult::NoReservation);
    }

    #[test]
    fn matching_date_maps_status_to_good_or_bad() {
        let mut settings = ReservationSettings::default();
        settings.confirmed_date = Some(date(2));

        let good = vec![verdict(date(2), Status::Recommended)];
        assert!(matches!(watch(&settings, &good), WatchResult::Good(_)));

        let bad = vec![verdict(date(2), Status::NotRecommended)];
        assert!(matches!(watch(&settings, &bad), WatchResult::Bad(_)));
    }

    #[test]
    fn date_outside_window_is_unknown() {
        let mut settings = ReservationSettings::default();
        settings.confirmed_date = Some(date(30));

        let verdicts = vec![verdict(date(1), Status::Recommended)];
        assert_eq!(watch(&settings, &verdicts), WatchResult::Unknown(date(30)));
    }

    #[test]
    fn empty_verdicts_never_give_good_or_bad() {
        let mut settings = ReservationSettings::default();
        settings.confirmed_date = Some(date(2));

        assert_eq!(watch(&settings, &[]), WatchResult::Unknown(date(2)));
    }

    #[test]
    fn unknown_verdict_status_resolves_to_unknown() {
        let mut settings = ReservationSettings::default();
        settings.confirmed_date = Some(date(2));

        let verdicts = vec![verdict(date(2), Status::Unknown)];
        assert_eq!(watch(&settings, &verdicts), WatchResult::Unknown(date(2)));
    }
}
