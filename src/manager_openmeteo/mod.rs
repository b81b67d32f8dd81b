pub mod errors;

use std::time::Duration;
use ureq::Agent;
use crate::manager_openmeteo::errors::ForecastError;
use crate::models::forecast::ForecastDay;
use crate::models::open_meteo::FullForecast;

const REQUEST_DOMAIN: &str = "https://api.open-meteo.com";

/// Number of days requested from the forecast endpoint
pub const FORECAST_DAYS: usize = 14;

/// Struct for managing daily weather forecasts produced by Open-Meteo
pub struct OpenMeteo {
    agent: Agent,
    lat: f64,
    long: f64,
    timezone: String,
}

impl OpenMeteo {
    /// Returns an OpenMeteo struct ready for fetching daily forecasts
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude for the point to get forecasts for
    /// * 'long' - longitude for the point to get forecasts for
    /// * 'timezone' - the local timezone the daily series shall be reported in
    pub fn new(lat: f64, long: f64, timezone: &str) -> OpenMeteo {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .build();

        let agent = config.into();

        Self { agent, lat, long, timezone: timezone.to_string() }
    }

    /// Retrieves the daily forecast series from Open-Meteo.
    ///
    /// The returned series always holds exactly FORECAST_DAYS days, wind is
    /// requested in m/s and values missing at the provider default to zero.
    /// A transport error, a non-success status or a malformed or short
    /// payload all yield an error so the caller never sees partial data.
    pub fn fetch(&self) -> Result<Vec<ForecastDay>, ForecastError> {
        let base_url = "/v1/forecast";
        let url = format!("{}{}?latitude={:.4}&longitude={:.4}\
                           &daily=weathercode,precipitation_sum,windspeed_10m_max\
                           &windspeed_unit=ms&timezone={}&forecast_days={}",
                          REQUEST_DOMAIN, base_url, self.lat, self.long,
                          self.timezone.replace('/', "%2F"), FORECAST_DAYS);

        let json = self.agent
            .get(url)
            .call()?
            .body_mut()
            .read_to_string()?;

        let full_forecast: FullForecast = serde_json::from_str(&json)?;

        to_forecast_days(full_forecast)
    }
}

/// Transforms the raw daily series into ForecastDay values.
///
/// The series is validated before use, a short series or ragged value
/// arrays are reported as a document error rather than truncated.
///
/// # Arguments
///
/// * 'full_forecast' - the deserialized Open-Meteo response
fn to_forecast_days(full_forecast: FullForecast) -> Result<Vec<ForecastDay>, ForecastError> {
    let daily = full_forecast.daily;

    if daily.time.len() != FORECAST_DAYS {
        return Err(ForecastError::Document(
            format!("expected {} days, got {}", FORECAST_DAYS, daily.time.len())));
    }
    if daily.precipitation_sum.len() != daily.time.len()
        || daily.windspeed_10m_max.len() != daily.time.len()
        || daily.weathercode.len() != daily.time.len() {
        return Err(ForecastError::Document("daily value arrays differ in length".to_string()));
    }

    let forecast = daily.time
        .iter()
        .enumerate()
        .map(|(i, date)| ForecastDay::new(
            *date,
            i,
            daily.precipitation_sum[i].unwrap_or(0.0),
            daily.windspeed_10m_max[i].unwrap_or(0.0),
            daily.weathercode[i].unwrap_or(0),
        ))
        .collect();

    Ok(forecast)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload(days: usize) -> String {
        let dates = (1..=days)
            .map(|d| format!("\"2026-09-{:02}\"", d))
            .collect::<Vec<String>>()
            .join(",");
        let zeros = |v: &str| (0..days).map(|_| v.to_string()).collect::<Vec<String>>().join(",");

        format!("{{\"daily\":{{\"time\":[{}],\
                 \"precipitation_sum\":[{}],\
                 \"windspeed_10m_max\":[{}],\
                 \"weathercode\":[{}]}}}}",
                dates, zeros("0.0"), zeros("1.5"), zeros("2"))
    }

    #[test]
    fn full_series_is_accepted() {
        let full: FullForecast = serde_json::from_str(&sample_payload(14)).unwrap();
        let forecast = to_forecast_days(full).unwrap();

        assert_eq!(forecast.len(), 14);
        assert_eq!(forecast[0].day_index, 0);
        assert_eq!(forecast[13].day_index, 13);
        assert_eq!(forecast[5].wind_speed_ms, 1.5);
    }

    #[test]
    fn short_series_is_rejected() {
        let full: FullForecast = serde_json::from_str(&sample_payload(7)).unwrap();
        let err = to_forecast_days(full).unwrap_err();

        assert!(matches!(err, ForecastError::Document(_)));
    }

    #[test]
    fn ragged_arrays_are_rejected() {
        let mut full: FullForecast = serde_json::from_str(&sample_payload(14)).unwrap();
        full.daily.weathercode.pop();

        let err = to_forecast_days(full).unwrap_err();
        assert!(matches!(err, ForecastError::Document(_)));
    }

    #[test]
    fn null_values_default_to_zero() {
        let mut full: FullForecast = serde_json::from_str(&sample_payload(14)).unwrap();
        full.daily.precipitation_sum[3] = None;
        full.daily.windspeed_10m_max[3] = None;
        full.daily.weathercode[3] = None;

        let forecast = to_forecast_days(full).unwrap();
        assert_eq!(forecast[3].precipitation_mm, 0.0);
        assert_eq!(forecast[3].wind_speed_ms, 0.0);
        assert_eq!(forecast[3].weather_code, 0);
    }
}
