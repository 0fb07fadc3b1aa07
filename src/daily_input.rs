use std::fs;
use log::{debug, warn};
use crate::errors::InputError;
use crate::models::open_meteo::{DailyColumns, DailyForecast};
use crate::observation::DailyObservation;

/// Loads daily observations from a forecast document on file
///
/// # Arguments
///
/// * 'daily_file' - path to the daily forecast json document
pub fn load_observations(daily_file: &str) -> Result<Vec<DailyObservation>, InputError> {
    let json = fs::read_to_string(daily_file)?;
    let observations = parse_observations(&json)?;
    debug!("loaded {} daily observations from {}", observations.len(), daily_file);

    Ok(observations)
}

/// Parses a daily forecast document into observations, one per date.
///
/// A missing precipitation probability, either the whole column or single values, counts as 0%.
/// Any other missing value becomes NaN and is left for the caller to detect.
///
/// # Arguments
///
/// * 'json' - the daily forecast json document
pub fn parse_observations(json: &str) -> Result<Vec<DailyObservation>, InputError> {
    let forecast: DailyForecast = serde_json::from_str(json)?;
    debug!("daily document for {}", origin(&forecast));

    to_observations(&forecast.daily)
}

/// Describes where a document claims to be for, coordinates and timezone
///
/// # Arguments
///
/// * 'forecast' - the parsed daily forecast document
pub fn origin(forecast: &DailyForecast) -> String {
    let coordinates = match (forecast.latitude, forecast.longitude) {
        (Some(lat), Some(long)) => format!("{:.4}, {:.4}", lat, long),
        _ => "unknown coordinates".to_string(),
    };
    let timezone = forecast.timezone.as_deref().unwrap_or("no timezone");

    format!("{} ({})", coordinates, timezone)
}

fn to_observations(columns: &DailyColumns) -> Result<Vec<DailyObservation>, InputError> {
    let expected = columns.time.len();
    check_len("apparent_temperature_min", &columns.apparent_temperature_min, expected)?;
    check_len("apparent_temperature_max", &columns.apparent_temperature_max, expected)?;
    check_len("cloud_cover_mean", &columns.cloud_cover_mean, expected)?;
    check_len("precipitation_sum", &columns.precipitation_sum, expected)?;
    check_len("wind_speed_10m_max", &columns.wind_speed_10m_max, expected)?;
    check_len("relative_humidity_2m_mean", &columns.relative_humidity_2m_mean, expected)?;
    if let Some(probability) = &columns.precipitation_probability_max {
        check_len("precipitation_probability_max", probability, expected)?;
    } else {
        warn!("daily document has no precipitation probability, assuming 0%");
    }

    let observations = columns.time
        .iter()
        .enumerate()
        .map(|(i, date)| DailyObservation {
            date: *date,
            apparent_temp_min: value(&columns.apparent_temperature_min, i),
            apparent_temp_max: value(&columns.apparent_temperature_max, i),
            cloud_cover_mean: value(&columns.cloud_cover_mean, i),
            precipitation_probability_max: columns.precipitation_probability_max
                .as_ref()
                .and_then(|p| p[i])
                .unwrap_or(0.0),
            precipitation_sum: value(&columns.precipitation_sum, i),
            wind_speed_max: value(&columns.wind_speed_10m_max, i),
            humidity_mean: value(&columns.relative_humidity_2m_mean, i),
        })
        .collect::<Vec<DailyObservation>>();

    Ok(observations)
}

fn check_len(column: &'static str, values: &[Option<f64>], expected: usize) -> Result<(), InputError> {
    if values.len() != expected {
        return Err(InputError::ColumnLength { column, expected, actual: values.len() });
    }
    Ok(())
}

fn value(values: &[Option<f64>], i: usize) -> f64 {
    values[i].unwrap_or(f64::NAN)
}
