use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::errors::ComparisonError;

/// Number of days in a comparison window, yesterday through five days ahead
pub const WINDOW_LEN: usize = 7;

/// Window index of yesterday
pub const YESTERDAY: usize = 0;

/// Window index of today
pub const TODAY: usize = 1;

/// Raw weather values for one calendar day
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub apparent_temp_min: f64,
    pub apparent_temp_max: f64,
    pub cloud_cover_mean: f64,
    pub precipitation_probability_max: f64,
    pub precipitation_sum: f64,
    pub wind_speed_max: f64,
    pub humidity_mean: f64,
}

impl DailyObservation {
    /// Mean of the day's apparent min and max temperature
    pub fn avg_apparent_temp(&self) -> f64 {
        (self.apparent_temp_min + self.apparent_temp_max) / 2.0
    }
}

/// Exactly seven observations, oldest first. Only the count is checked, dates are taken as given
#[derive(Clone, Debug)]
pub struct WeekWindow {
    days: [DailyObservation; WINDOW_LEN],
}

impl WeekWindow {
    /// Returns a window over the given observations
    ///
    /// Any other number of days than seven is refused.
    ///
    /// # Arguments
    ///
    /// * 'days' - observations, index 0 being yesterday
    pub fn new(days: Vec<DailyObservation>) -> Result<WeekWindow, ComparisonError> {
        let len = days.len();
        let days: [DailyObservation; WINDOW_LEN] = days
            .try_into()
            .map_err(|_| ComparisonError::InsufficientData(len))?;

        Ok(WeekWindow { days })
    }

    pub fn days(&self) -> &[DailyObservation; WINDOW_LEN] {
        &self.days
    }

    pub fn yesterday(&self) -> &DailyObservation {
        &self.days[YESTERDAY]
    }

    pub fn today(&self) -> &DailyObservation {
        &self.days[TODAY]
    }
}

#[cfg(test)]
pub(crate) fn observation(date: NaiveDate, min: f64, max: f64, cloud: f64) -> DailyObservation {
    DailyObservation {
        date,
        apparent_temp_min: min,
        apparent_temp_max: max,
        cloud_cover_mean: cloud,
        precipitation_probability_max: 0.0,
        precipitation_sum: 0.0,
        wind_speed_max: 10.0,
        humidity_mean: 60.0,
    }
}
