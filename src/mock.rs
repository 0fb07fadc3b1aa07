use chrono::{Days, NaiveDate};
use serde::Deserialize;
use crate::comparison::{assemble, ComparisonResult, DerivedDay};
use crate::hazard::Hazard;
use crate::precipitation::PrecipitationChance;

/// Preset derived values for one day
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct MockDay {
    pub pfi: f64,
    #[serde(default)]
    pub precipitation: PrecipitationChance,
    #[serde(default)]
    pub hazard: Option<Hazard>,
}

/// Preset values keyed by day, from yesterday to six days ahead
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct MockWeek {
    pub yesterday: MockDay,
    pub today: MockDay,
    pub tomorrow: MockDay,
    pub day3: MockDay,
    pub day4: MockDay,
    pub day5: MockDay,
    pub day6: MockDay,
    pub day7: MockDay,
}

impl MockWeek {
    /// Returns the preset days in calendar order together with their offset from today
    fn ordered(&self) -> [(i64, &MockDay); 8] {
        [
            (-1, &self.yesterday),
            (0, &self.today),
            (1, &self.tomorrow),
            (2, &self.day3),
            (3, &self.day4),
            (4, &self.day5),
            (5, &self.day6),
            (6, &self.day7),
        ]
    }
}

/// Builds a comparison result from preset values.
///
/// Days are dated by their offset from the given date and then go through the same
/// trend classification and slot assembly as observed data.
///
/// # Arguments
///
/// * 'week' - the preset values
/// * 'today' - the date the presets are relative to
pub fn compare_mock(week: &MockWeek, today: NaiveDate) -> ComparisonResult {
    let derived = week
        .ordered()
        .iter()
        .map(|(offset, day)| DerivedDay {
            date: offset_date(today, *offset),
            pfi: day.pfi,
            precipitation: day.precipitation,
            hazard: day.hazard,
        })
        .collect::<Vec<DerivedDay>>();

    assemble(&derived[0], &derived[1], &derived[2..])
}

fn offset_date(today: NaiveDate, offset: i64) -> NaiveDate {
    if offset < 0 {
        today - Days::new(offset.unsigned_abs())
    } else {
        today + Days::new(offset as u64)
    }
}
