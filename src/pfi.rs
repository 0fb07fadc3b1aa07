use crate::observation::DailyObservation;

/// Cloud cover in percent that leaves the feel index unadjusted
const NEUTRAL_CLOUD_COVER: f64 = 50.0;

/// Degrees of feel per percent of cloud cover below the neutral level
const CLOUD_FACTOR: f64 = 0.02;

/// Calculates the perceived feel index (PFI) for one day.
///
/// The index is the mean apparent temperature nudged up on clear days and down on overcast
/// days. Non-finite input is passed through as is, it is up to the caller to detect it.
///
/// # Arguments
///
/// * 'apparent_temp_min' - the day's minimum apparent temperature in Celsius
/// * 'apparent_temp_max' - the day's maximum apparent temperature in Celsius
/// * 'cloud_cover_mean' - mean cloud cover in percent (0-100)
pub fn feel_index(apparent_temp_min: f64, apparent_temp_max: f64, cloud_cover_mean: f64) -> f64 {
    let avg_apparent_temp = (apparent_temp_min + apparent_temp_max) / 2.0;
    let cloud_adjustment = CLOUD_FACTOR * (NEUTRAL_CLOUD_COVER - cloud_cover_mean);

    avg_apparent_temp + cloud_adjustment
}

/// Calculates the PFI for an observed day
///
/// # Arguments
///
/// * 'day' - the observation to calculate for
pub fn day_feel_index(day: &DailyObservation) -> f64 {
    feel_index(day.apparent_temp_min, day.apparent_temp_max, day.cloud_cover_mean)
}
