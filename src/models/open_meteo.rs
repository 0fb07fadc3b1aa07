use chrono::NaiveDate;
use serde::Deserialize;

/// Daily forecast document as handed over by the fetch layer
#[derive(Deserialize)]
pub struct DailyForecast {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    pub daily: DailyColumns,
}

/// Column oriented daily values, one entry per date in 'time'
#[derive(Deserialize)]
pub struct DailyColumns {
    pub time: Vec<NaiveDate>,
    pub apparent_temperature_min: Vec<Option<f64>>,
    pub apparent_temperature_max: Vec<Option<f64>>,
    pub cloud_cover_mean: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Option<Vec<Option<f64>>>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub wind_speed_10m_max: Vec<Option<f64>>,
    pub relative_humidity_2m_mean: Vec<Option<f64>>,
}
