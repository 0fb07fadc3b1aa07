use chrono::NaiveDate;
use crate::comparison::ComparisonResult;
use crate::hazard::Hazard;
use crate::mock::{compare_mock, MockDay, MockWeek};
use crate::precipitation::PrecipitationChance;

fn day(pfi: f64, rain: f64, snow: f64, hazard: Option<Hazard>) -> MockDay {
    MockDay { pfi, precipitation: PrecipitationChance { rain, snow }, hazard }
}

/// Static sample values shown whenever a cycle fails
pub fn sample_week() -> MockWeek {
    MockWeek {
        yesterday: day(14.2, 0.0, 0.0, None),
        today: day(16.8, 20.0, 0.0, None),
        tomorrow: day(17.5, 45.0, 0.0, None),
        day3: day(13.1, 75.0, 0.0, None),
        day4: day(11.4, 10.0, 0.0, None),
        day5: day(12.9, 0.0, 0.0, Some(Hazard::StrongWinds)),
        day6: day(15.0, 0.0, 0.0, None),
        day7: day(15.6, 35.0, 0.0, None),
    }
}

/// Returns the complete sample result, dated relative to the given day
///
/// # Arguments
///
/// * 'today' - the date to place the sample around
pub fn sample_result(today: NaiveDate) -> ComparisonResult {
    compare_mock(&sample_week(), today)
}
