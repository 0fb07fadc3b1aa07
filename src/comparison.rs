use chrono::{Days, NaiveDate};
use serde::Serialize;
use crate::errors::ComparisonError;
use crate::hazard::{detect_day, Hazard};
use crate::observation::{DailyObservation, WeekWindow, TODAY, YESTERDAY};
use crate::pfi::day_feel_index;
use crate::precipitation::{resolve, Precipitation, PrecipitationChance};
use crate::thresholds::Trend;

/// Number of slots in the forward series, tomorrow and onwards
pub const FORWARD_DAYS: usize = 6;

/// Values derived from one day's observation
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DerivedDay {
    pub date: NaiveDate,
    pub pfi: f64,
    pub precipitation: PrecipitationChance,
    pub hazard: Option<Hazard>,
}

impl DerivedDay {
    /// Derives PFI, precipitation chance and hazard from an observation
    ///
    /// # Arguments
    ///
    /// * 'day' - the observed day
    pub fn from_observation(day: &DailyObservation) -> DerivedDay {
        DerivedDay {
            date: day.date,
            pfi: day_feel_index(day),
            precipitation: PrecipitationChance::from_observation(day),
            hazard: detect_day(day),
        }
    }

    /// Resolves what to show for the day, a hazard always takes precedence over precipitation
    pub fn display(&self) -> DayDisplay {
        if let Some(hazard) = self.hazard {
            DayDisplay::Hazard(hazard)
        } else if let Some(precipitation) = resolve(self.precipitation) {
            DayDisplay::Precipitation(precipitation)
        } else {
            DayDisplay::Nothing
        }
    }
}

/// What is shown next to a day's feel index, never both a hazard and precipitation
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayDisplay {
    Hazard(Hazard),
    Precipitation(Precipitation),
    Nothing,
}

impl DayDisplay {
    pub fn hazard(&self) -> Option<Hazard> {
        match self {
            DayDisplay::Hazard(h) => Some(*h),
            _ => None,
        }
    }

    pub fn precipitation(&self) -> Option<Precipitation> {
        match self {
            DayDisplay::Precipitation(p) => Some(*p),
            _ => None,
        }
    }
}

/// One slot of the forward series
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SeriesEntry {
    pub date: NaiveDate,
    pub day_label: String,
    /// None marks a slot without data
    pub pfi: Option<f64>,
    pub display: DayDisplay,
}

impl SeriesEntry {
    fn from_derived(day: &DerivedDay) -> SeriesEntry {
        SeriesEntry {
            date: day.date,
            day_label: day_label(day.date),
            pfi: Some(day.pfi),
            display: day.display(),
        }
    }

    fn no_data(date: NaiveDate) -> SeriesEntry {
        SeriesEntry { date, day_label: day_label(date), pfi: None, display: DayDisplay::Nothing }
    }
}

/// Today's feel compared to yesterday plus the series for the days to come
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ComparisonResult {
    pub today_date: NaiveDate,
    pub today_pfi: f64,
    pub today_trend: Trend,
    pub today_display: DayDisplay,
    pub week_series: Vec<SeriesEntry>,
}

impl ComparisonResult {
    /// Returns true if any derived feel index is NaN or infinite, yesterday's included
    /// through the trend difference
    pub fn has_malformed_values(&self) -> bool {
        !self.today_pfi.is_finite()
            || !self.today_trend.diff.is_finite()
            || self.week_series.iter().any(|e| e.pfi.is_some_and(|p| !p.is_finite()))
    }
}

/// Short weekday name taken from the date itself
///
/// # Arguments
///
/// * 'date' - the date to label
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Derives every day of the window, index by index
///
/// # Arguments
///
/// * 'window' - the seven day window
pub fn derive_week(window: &WeekWindow) -> Vec<DerivedDay> {
    window.days().iter().map(DerivedDay::from_observation).collect()
}

/// Compares today against yesterday and builds the forward series for a window
///
/// # Arguments
///
/// * 'window' - the seven day window, index 0 being yesterday
pub fn compare(window: &WeekWindow) -> ComparisonResult {
    let derived = derive_week(window);
    assemble(&derived[YESTERDAY], &derived[TODAY], &derived[TODAY + 1..])
}

/// Validates the number of observations and compares them
///
/// # Arguments
///
/// * 'days' - observations, index 0 being yesterday
pub fn compare_days(days: Vec<DailyObservation>) -> Result<ComparisonResult, ComparisonError> {
    let window = WeekWindow::new(days)?;
    Ok(compare(&window))
}

/// Joins derived days into a comparison result.
///
/// Forward slot i is filled from forward\[i\] only, PFI and display both read from that same
/// day. Slots beyond the available days are filled with no-data entries dated onwards from today.
///
/// # Arguments
///
/// * 'yesterday' - derived values for yesterday
/// * 'today' - derived values for today
/// * 'forward' - derived values from tomorrow and onwards
pub(crate) fn assemble(yesterday: &DerivedDay, today: &DerivedDay, forward: &[DerivedDay]) -> ComparisonResult {
    let today_trend = Trend::from_diff(today.pfi - yesterday.pfi);

    let week_series = (0..FORWARD_DAYS)
        .map(|slot| match forward.get(slot) {
            Some(day) => SeriesEntry::from_derived(day),
            None => SeriesEntry::no_data(today.date + Days::new(slot as u64 + 1)),
        })
        .collect::<Vec<SeriesEntry>>();

    ComparisonResult {
        today_date: today.date,
        today_pfi: today.pfi,
        today_trend,
        today_display: today.display(),
        week_series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::observation;
    use crate::thresholds::TrendBucket;

    fn start() -> NaiveDate {
        // A Sunday
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn window_days() -> Vec<DailyObservation> {
        (0..7)
            .map(|i| observation(start() + Days::new(i), 10.0, 20.0, 50.0))
            .collect()
    }

    #[test]
    fn wrong_window_length_is_an_error() {
        let mut days = window_days();
        days.pop();
        assert_eq!(compare_days(days).unwrap_err(), ComparisonError::InsufficientData(6));

        let mut days = window_days();
        days.push(observation(start() + Days::new(7), 10.0, 20.0, 50.0));
        assert_eq!(compare_days(days).unwrap_err(), ComparisonError::InsufficientData(8));
    }

    #[test]
    fn series_has_six_slots_starting_tomorrow() {
        let result = compare_days(window_days()).unwrap();

        assert_eq!(result.today_date, start() + Days::new(1));
        assert_eq!(result.week_series.len(), FORWARD_DAYS);
        assert_eq!(result.week_series[0].date, start() + Days::new(2));

        let labels = result.week_series.iter().map(|e| e.day_label.as_str()).collect::<Vec<&str>>();
        assert_eq!(labels, vec!["Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        for entry in &result.week_series {
            assert_eq!(entry.day_label, day_label(entry.date));
        }
    }

    #[test]
    fn last_slot_of_a_live_window_has_no_data() {
        let result = compare_days(window_days()).unwrap();

        let last = &result.week_series[FORWARD_DAYS - 1];
        assert_eq!(last.pfi, None);
        assert_eq!(last.display, DayDisplay::Nothing);
        assert_eq!(last.date, start() + Days::new(7));
        assert!(result.week_series[..FORWARD_DAYS - 1].iter().all(|e| e.pfi == Some(15.0)));
    }

    #[test]
    fn trend_against_yesterday() {
        let mut days = window_days();
        days[0] = observation(start(), 0.0, 10.0, 50.0);
        days[1] = observation(start() + Days::new(1), 10.0, 20.0, 50.0);

        let result = compare_days(days).unwrap();
        assert_eq!(result.today_pfi, 15.0);
        assert_eq!(result.today_trend.diff, 10.0);
        assert_eq!(result.today_trend.percentage, 50.0);
        assert_eq!(result.today_trend.bucket, TrendBucket::SignificantlyHotter);
    }

    #[test]
    fn forward_slots_do_not_leak_across_days() {
        // Every day gets its own PFI, and a distinct display kind keyed to its index
        let mut days = Vec::new();
        for i in 0..7u64 {
            let base = 10.0 + i as f64;
            let mut day = observation(start() + Days::new(i), base, base, 50.0);
            match i {
                2 => day.precipitation_probability_max = 90.0,
                3 => day.wind_speed_max = 60.0,
                4 => day.precipitation_probability_max = 45.0,
                5 => {
                    day.apparent_temp_max = 39.0;
                    day.apparent_temp_min = 39.0;
                }
                6 => {
                    day.precipitation_sum = 40.0;
                    day.precipitation_probability_max = 80.0;
                }
                _ => {}
            }
            days.push(day);
        }

        let result = compare_days(days).unwrap();
        let series = &result.week_series;

        assert_eq!(series[0].pfi, Some(12.0));
        assert_eq!(series[0].display, DayDisplay::Precipitation(Precipitation::RainExpected));
        assert_eq!(series[1].pfi, Some(13.0));
        assert_eq!(series[1].display, DayDisplay::Hazard(Hazard::StrongWinds));
        assert_eq!(series[2].pfi, Some(14.0));
        assert_eq!(series[2].display, DayDisplay::Precipitation(Precipitation::RainLikely));
        assert_eq!(series[3].pfi, Some(39.0));
        assert_eq!(series[3].display, DayDisplay::Hazard(Hazard::ExtremeHeat));
        assert_eq!(series[4].pfi, Some(16.0));
        assert_eq!(series[4].display, DayDisplay::Hazard(Hazard::HeavyRain));
        assert_eq!(series[5].pfi, None);

        for (slot, entry) in series.iter().enumerate() {
            assert_eq!(entry.date, start() + Days::new(slot as u64 + 2));
        }
    }

    #[test]
    fn hazard_hides_precipitation() {
        let mut days = window_days();
        // Freezing with a high chance of snow and some precipitation qualifies as Snow/Ice
        days[1] = observation(start() + Days::new(1), -6.0, -1.0, 90.0);
        days[1].precipitation_probability_max = 85.0;
        days[1].precipitation_sum = 4.0;
        days[3] = days[1].clone();
        days[3].date = start() + Days::new(3);

        let result = compare_days(days).unwrap();
        assert_eq!(result.today_display, DayDisplay::Hazard(Hazard::SnowIce));
        assert_eq!(result.today_display.precipitation(), None);
        assert_eq!(result.week_series[1].display.hazard(), Some(Hazard::SnowIce));
        assert_eq!(result.week_series[1].display.precipitation(), None);
    }

    #[test]
    fn nan_is_reported_as_malformed() {
        let mut days = window_days();
        days[4].cloud_cover_mean = f64::NAN;

        let result = compare_days(days).unwrap();
        assert!(result.week_series[2].pfi.is_some_and(f64::is_nan));
        assert!(result.has_malformed_values());

        assert!(!compare_days(window_days()).unwrap().has_malformed_values());
    }

    #[test]
    fn nan_yesterday_is_reported_as_malformed() {
        let mut days = window_days();
        days[0].apparent_temp_min = f64::NAN;

        let result = compare_days(days).unwrap();
        assert!(result.today_pfi.is_finite());
        assert!(result.today_trend.diff.is_nan());
        assert!(result.has_malformed_values());
    }
}
