use std::fmt;
use std::fmt::Formatter;
use chrono::NaiveDate;
use crate::models::forecast::ForecastDay;

/// Precipitation at or above this total (mm) rules a day out
pub const PRECIPITATION_LIMIT: f64 = 1.0;

/// Max wind speed at or above this value (m/s) rules a day out
pub const WIND_LIMIT: f64 = 5.0;

/// Day indexes where a wet weather code alone rules a day out.
/// That far out the numeric forecasts are too uncertain to trust on their own.
pub const LATE_WINDOW: [usize; 3] = [10, 11, 12];

/// WMO codes counted as wet: drizzle, rain, freezing variants, showers
/// and thunderstorms. Anything else is treated as dry.
const RAIN_CODES: [u8; 16] = [51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 80, 81, 82, 95, 96, 99];

/// Recommendation status for a single forecast day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Recommended,
    NotRecommended,
    Unknown,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Status {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Status::Recommended    => write!(f, "recommended    "),
            Status::NotRecommended => write!(f, "not recommended"),
            Status::Unknown        => write!(f, "unknown        "),
        }
    }
}

/// The verdict for one forecast day together with a human readable reason
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub day_index: usize,
    pub date: NaiveDate,
    pub status: Status,
    pub reason: String,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:<12} {} {}",
               self.date.format("%m/%d (%a)").to_string(),
               self.status,
               self.reason)
    }
}

/// Returns true if the given WMO weather code belongs to the wet code family
///
/// # Arguments
///
/// * 'code' - the WMO weather code
pub fn is_rain_code(code: u8) -> bool {
    RAIN_CODES.contains(&code)
}

/// Classifies each forecast day as recommended or not.
///
/// Rules in precedence order:
/// * precipitation at or above the limit rules the day out
/// * max wind at or above the limit rules the day out
/// * a wet weather code within the late window rules the day out
/// * otherwise the day is recommended
///
/// An empty forecast yields an empty verdict list.
///
/// # Arguments
///
/// * 'forecast' - the daily forecast series to classify
pub fn classify(forecast: &[ForecastDay]) -> Vec<Verdict> {
    forecast.iter().map(classify_day).collect()
}

/// Classifies a single forecast day
///
/// # Arguments
///
/// * 'day' - the forecast day to classify
fn classify_day(day: &ForecastDay) -> Verdict {
    let (status, reason) = if day.precipitation_mm >= PRECIPITATION_LIMIT {
        (Status::NotRecommended, format!("rain expected: {:.1} mm", day.precipitation_mm))
    } else if day.wind_speed_ms >= WIND_LIMIT {
        (Status::NotRecommended, format!("strong wind: {:.1} m/s", day.wind_speed_ms))
    } else if LATE_WINDOW.contains(&day.day_index) && is_rain_code(day.weather_code) {
        (Status::NotRecommended, format!("rain risk in late forecast window (code {})", day.weather_code))
    } else {
        (Status::Recommended, "conditions clear".to_string())
    };

    Verdict {
        day_index: day.day_index,
        date: day.date,
        status,
        reason,
    }
}
