use chrono::NaiveDate;

/// One day out of the daily forecast series
///
/// Numeric values are rounded to one decimal on construction so that
/// classification and display always work on the same figures.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day_index: usize,
    pub precipitation_mm: f64,
    pub wind_speed_ms: f64,
    pub weather_code: u8,
}

impl ForecastDay {
    /// Returns a new ForecastDay with precipitation and wind rounded to one decimal
    ///
    /// # Arguments
    ///
    /// * 'date' - the calendar date the values are valid for
    /// * 'day_index' - 0-based offset from the first day in the series
    /// * 'precipitation_mm' - total precipitation over the day
    /// * 'wind_speed_ms' - max wind speed over the day
    /// * 'weather_code' - WMO weather code
    pub fn new(date: NaiveDate, day_index: usize, precipitation_mm: f64, wind_speed_ms: f64, weather_code: u8) -> ForecastDay {
        ForecastDay {
            date,
            day_index,
            precipitation_mm: round_one(precipitation_mm),
            wind_speed_ms: round_one(wind_speed_ms),
            weather_code,
        }
    }
}

/// Rounds a value to one decimal place
///
/// # Arguments
///
/// * 'value' - the value to round
fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_rounded_to_one_decimal() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let day = ForecastDay::new(date, 0, 1.26, 4.94, 3);

        assert_eq!(day.precipitation_mm, 1.3);
        assert_eq!(day.wind_speed_ms, 4.9);
    }
}
