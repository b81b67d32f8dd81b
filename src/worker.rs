use chrono::{Local, NaiveDate};
use log::{info, warn};
use crate::classifier::{classify, Verdict};
use crate::config::Config;
use crate::errors::WorkerError;
use crate::initialization::Mgr;
use crate::models::settings::ReservationSettings;
use crate::notifier;
use crate::store::SettingsStore;
use crate::store::errors::StoreError;
use crate::watcher::{watch, WatchResult};

/// User initiated actions, each one runs as a single synchronous pass
pub enum Action {
    Report,
    SetDate(NaiveDate),
    ClearDate,
    SetRecipients(String),
    Notify,
}

/// Runs one action to completion
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'mgr' - the manager structs
/// * 'action' - the action to run
pub fn run(config: &Config, mgr: &mut Mgr, action: Action) -> Result<(), WorkerError> {
    match action {
        Action::Report => report(config, mgr),
        Action::SetDate(date) => {
            let settings = save_settings(mgr.store.as_mut(), |s| s.confirmed_date = Some(date))?;
            print_msg(&format!("reservation date recorded: {}", date), "Settings");
            info!("settings saved: {:?}", settings);
            Ok(())
        }
        Action::ClearDate => {
            save_settings(mgr.store.as_mut(), |s| s.confirmed_date = None)?;
            print_msg("reservation date cleared", "Settings");
            Ok(())
        }
        Action::SetRecipients(input) => {
            let primary = config.notify.primary_recipient.clone();
            let settings = save_settings(mgr.store.as_mut(), |s| s.set_recipients(&input, &primary))?;
            print_msg(&format!("additional recipients recorded: {}",
                               settings.additional_recipients.join(", ")), "Settings");
            Ok(())
        }
        Action::Notify => send_notification(config, mgr),
    }
}

/// Fetches the forecast, prints the verdict table and the reservation banner.
///
/// A fetch failure is reported as such together with a retry hint, it is
/// never rendered as a table with zero recommended days.
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'mgr' - the manager structs
fn report(config: &Config, mgr: &mut Mgr) -> Result<(), WorkerError> {
    let settings = mgr.store.load()?;

    match mgr.weather.fetch() {
        Ok(forecast) => {
            let verdicts = classify(&forecast);
            print_verdicts(&verdicts, &config.course.name);
            println!("{}\n", watch(&settings, &verdicts));
        }
        Err(e) => {
            warn!("forecast fetch failed: {}", e);
            print_msg(&format!("forecast unavailable: {}\nrun the report again to retry", e), "Forecast");
            println!("{}\n", fallback_watch(&settings));
        }
    }

    println!("Booking: {}", config.course.booking_url);

    Ok(())
}

/// Sends the current reservation status to the full recipient list
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'mgr' - the manager structs
fn send_notification(config: &Config, mgr: &mut Mgr) -> Result<(), WorkerError> {
    let settings = mgr.store.load()?;

    let result = match mgr.weather.fetch() {
        Ok(forecast) => watch(&settings, &classify(&forecast)),
        Err(e) => {
            warn!("forecast fetch failed, notifying without verdict: {}", e);
            fallback_watch(&settings)
        }
    };

    let (subject, body) = notifier::compose(&config.course.name, &config.course.booking_url, &result);
    let recipients = notifier::recipients(&config.notify.primary_recipient, &settings.additional_recipients);
    let delivered = notifier::notify(&mgr.ntfy, &recipients, &subject, &body);

    if delivered == 0 {
        Err(WorkerError("notification could not be delivered to any recipient".to_string()))
    } else {
        print_msg(&format!("notification delivered to {} of {} recipients",
                           delivered, recipients.len()), "Notify");
        Ok(())
    }
}

/// Watch result to report when no verdict table is available.
/// Without verdicts a stored date can only be unknown, never good or bad.
///
/// # Arguments
///
/// * 'settings' - the loaded reservation settings
fn fallback_watch(settings: &ReservationSettings) -> WatchResult {
    match settings.confirmed_date {
        Some(date) => WatchResult::Unknown(date),
        None => WatchResult::NoReservation,
    }
}

/// Loads settings, applies a mutation and saves the full document back.
///
/// A save rejected because the document changed in between is retried once
/// against a fresh load, it is never assumed to have succeeded.
///
/// # Arguments
///
/// * 'store' - the settings store
/// * 'apply' - the mutation to apply to the loaded settings
fn save_settings<F>(store: &mut dyn SettingsStore, apply: F) -> Result<ReservationSettings, WorkerError>
where
    F: Fn(&mut ReservationSettings),
{
    let mut settings = store.load()?;
    apply(&mut settings);

    match store.save(&settings) {
        Ok(()) => Ok(settings),
        Err(StoreError::Conflict) => {
            info!("settings document changed since last read, reloading and retrying");

            let mut settings = store.load()?;
            apply(&mut settings);
            store.save(&settings)?;

            Ok(settings)
        }
        Err(e) => Err(e.into()),
    }
}

/// Prints the verdict table with a caption
///
/// # Arguments
///
/// * 'verdicts' - the verdict table to print
/// * 'course_name' - name of the golf course for the caption
fn print_verdicts(verdicts: &[Verdict], course_name: &str) {
    let report_time = format!("{}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    let caption = format!("{} {} next {} days ", report_time, course_name, verdicts.len());

    let mut msg = format!("{:=<80}\n", caption);
    for v in verdicts {
        msg += &format!("{}\n", v);
    }
    println!("{}", msg);
}

/// Prints a message with a caption
///
/// # Arguments
///
/// * 'message' - the message
/// * 'caption' - the caption to print
fn print_msg(message: &str, caption: &str) {
    let report_time = format!("{}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    let caption = format!("{} {} ", report_time, caption);

    println!("{:=<80}\n{}\n", caption, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store that reports a stale document a configurable number of times
    struct ConflictingStore {
        conflicts_left: usize,
        saved: Option<ReservationSettings>,
    }

    impl SettingsStore for ConflictingStore {
        fn load(&mut self) -> Result<ReservationSettings, StoreError> {
            Ok(self.saved.clone().unwrap_or_default())
        }

        fn save(&mut self, settings: &ReservationSettings) -> Result<(), StoreError> {
            if self.conflicts_left > 0 {
                self.conflicts_left -= 1;
                Err(StoreError::Conflict)
            } else {
                self.saved = Some(settings.clone());
                Ok(())
            }
        }
    }

    #[test]
    fn save_retries_once_after_a_conflict() {
        let mut store = ConflictingStore { conflicts_left: 1, saved: None };
        let date = NaiveDate::from_ymd_opt(2026, 9, 5).unwrap();

        let settings = save_settings(&mut store, |s| s.confirmed_date = Some(date)).unwrap();

        assert_eq!(settings.confirmed_date, Some(date));
        assert_eq!(store.saved.unwrap().confirmed_date, Some(date));
    }

    #[test]
    fn save_gives_up_after_a_second_conflict() {
        let mut store = ConflictingStore { conflicts_left: 2, saved: None };
        let date = NaiveDate::from_ymd_opt(2026, 9, 5).unwrap();

        let result = save_settings(&mut store, |s| s.confirmed_date = Some(date));

        assert!(result.is_err());
        assert!(store.saved.is_none());
    }

    #[test]
    fn fallback_watch_never_gives_good_or_bad() {
        let mut settings = ReservationSettings::default();
        assert_eq!(fallback_watch(&settings), WatchResult::NoReservation);

        settings.confirmed_date = NaiveDate::from_ymd_opt(2026, 9, 5);
        assert!(matches!(fallback_watch(&settings), WatchResult::Unknown(_)));
    }
}
