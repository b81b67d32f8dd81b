use chrono::NaiveDate;
use serde::Deserialize;

/// Daily series as returned by the Open-Meteo forecast endpoint.
/// Individual values may be null when the provider has no data for a day,
/// hence the Option wrapping.
#[derive(Deserialize)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub windspeed_10m_max: Vec<Option<f64>>,
    pub weathercode: Vec<Option<u8>>,
}

#[derive(Deserialize)]
pub struct FullForecast {
    pub daily: DailySeries,
}
