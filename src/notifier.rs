use log::warn;
use crate::manager_ntfy::Ntfy;
use crate::models::settings::ReservationSettings;
use crate::watcher::WatchResult;

/// Assembles the full recipient list for a notification.
///
/// The primary recipient always comes first and is always included, the
/// additional recipients follow with duplicates and any repeat of the
/// primary dropped.
///
/// # Arguments
///
/// * 'primary' - the fixed primary recipient
/// * 'additional' - additional recipients from the stored settings
pub fn recipients(primary: &str, additional: &[String]) -> Vec<String> {
    let mut list = vec![primary.to_string()];

    for recipient in additional {
        if !list.iter().any(|r| r == recipient) {
            list.push(recipient.clone());
        }
    }

    list
}

/// Composes subject and body for a reservation status message
///
/// # Arguments
///
/// * 'course_name' - name of the golf course
/// * 'booking_url' - link to the booking site, appended to the body
/// * 'result' - the current watch result to describe
pub fn compose(course_name: &str, booking_url: &str, result: &WatchResult) -> (String, String) {
    let subject = format!("{} reservation weather update", course_name);

    let status_line = match result {
        WatchResult::NoReservation => "No reservation date is set.".to_string(),
        _ => result.to_string(),
    };
    let body = format!("{}\n\nBooking: {}", status_line, booking_url);

    (subject, body)
}

/// Sends one message per recipient through the relay and returns the number
/// of deliveries that succeeded.
///
/// A failed delivery is logged and counted, it never stops delivery to the
/// remaining recipients.
///
/// # Arguments
///
/// * 'ntfy' - the relay to publish through
/// * 'recipients' - the assembled recipient list
/// * 'subject' - the message subject
/// * 'body' - the message body
pub fn notify(ntfy: &Ntfy, recipients: &[String], subject: &str, body: &str) -> usize {
    let mut delivered: usize = 0;

    for recipient in recipients {
        match ntfy.publish(recipient, subject, body) {
            Ok(()) => delivered += 1,
            Err(e) => warn!("delivery to {} failed: {}", recipient, e),
        }
    }

    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn primary_is_first_and_duplicates_collapse() {
        let additional = vec!["a@x.com".to_string(), "a@x.com".to_string(), "b@x.com".to_string()];
        let list = recipients("p@x.com", &additional);

        assert_eq!(list, vec!["p@x.com".to_string(), "a@x.com".to_string(), "b@x.com".to_string()]);
    }

    #[test]
    fn primary_in_additional_list_is_not_repeated() {
        let additional = vec!["p@x.com".to_string(), "a@x.com".to_string()];
        let list = recipients("p@x.com", &additional);

        assert_eq!(list, vec!["p@x.com".to_string(), "a@x.com".to_string()]);
    }

    #[test]
    fn primary_alone_when_no_additionals() {
        let list = recipients("p@x.com", &[]);
        assert_eq!(list, vec!["p@x.com".to_string()]);
    }

    #[test]
    fn composed_message_carries_date_and_link() {
        let settings = ReservationSettings {
            confirmed_date: NaiveDate::from_ymd_opt(2026, 9, 5),
            additional_recipients: vec![],
        };
        let result = WatchResult::Unknown(settings.confirmed_date.unwrap());

        let (subject, body) = compose("Yaita Country Club", "https://yaita-cc.com/", &result);

        assert!(subject.contains("Yaita Country Club"));
        assert!(body.contains("2026-09-05"));
        assert!(body.contains("https://yaita-cc.com/"));
    }

    #[test]
    fn composed_message_mentions_unset_reservation() {
        let (_, body) = compose("Yaita Country Club", "https://yaita-cc.com/", &WatchResult::NoReservation);
        assert!(body.contains("No reservation date is set"));
    }
}
