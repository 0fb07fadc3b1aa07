use std::thread;
use std::time::Duration;
use chrono::{Local, NaiveDate};
use log::{error, info, warn};
use crate::comparison::{compare_days, ComparisonResult};
use crate::config::Config;
use crate::daily_input::load_observations;
use crate::errors::{InputError, LocationError};
use crate::fallback::sample_result;
use crate::initialization::Mgr;
use crate::location::Location;
use crate::mock::compare_mock;
use crate::render::render;

/// Where the values of a cycle came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Live,
    Mock,
    Fallback,
}

/// Result of one cycle, always complete
pub struct CycleOutcome {
    pub source: Source,
    pub result: ComparisonResult,
}

/// Runs cycles, once or every refresh period if configured
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'mgr' - collaborators from initialization
pub fn run(config: &Config, mgr: &Mgr) {
    loop {
        let local_now = Local::now();
        let outcome = run_cycle(config, local_now.date_naive());

        let caption = format!("{} {:?}", local_now.format("%Y-%m-%d %H:%M:%S"), outcome.source);
        println!("{}", render(&mgr.location, &outcome.result, &caption));

        match config.general.refresh_minutes {
            Some(minutes) if minutes > 0 => thread::sleep(refresh_period(minutes)),
            _ => break,
        }
    }
}

/// Runs one cycle and returns a complete result.
///
/// Mock mode, when enabled, replaces the live input entirely. A live cycle that fails or yields
/// malformed values is replaced as a whole by the sample result, never mixed with it.
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'today' - the invocation date
pub fn run_cycle(config: &Config, today: NaiveDate) -> CycleOutcome {
    if let Some(week) = config.active_mock() {
        info!("mock mode active, using preset values");
        return CycleOutcome { source: Source::Mock, result: compare_mock(week, today) };
    }

    match live_cycle(&config.files.daily_file) {
        Ok(result) if !result.has_malformed_values() => {
            info!("feel index today {:.1}, {}", result.today_pfi, result.today_trend.bucket);
            CycleOutcome { source: Source::Live, result }
        },
        Ok(_) => {
            warn!("derived values are malformed, showing sample data");
            CycleOutcome { source: Source::Fallback, result: sample_result(today) }
        },
        Err(e) => {
            error!("{}, showing sample data", e);
            CycleOutcome { source: Source::Fallback, result: sample_result(today) }
        },
    }
}

/// Converts the configured refresh period to a duration, saturating on overflow
///
/// # Arguments
///
/// * 'minutes' - minutes between cycles
fn refresh_period(minutes: u64) -> Duration {
    Duration::from_secs(minutes.saturating_mul(60))
}

fn live_cycle(daily_file: &str) -> Result<ComparisonResult, CycleError> {
    let days = load_observations(daily_file)?;
    Ok(compare_days(days)?)
}

/// Saves a newly selected location and makes it current
///
/// # Arguments
///
/// * 'mgr' - collaborators holding the location repository
/// * 'location' - the selected location
pub fn change_location(mgr: &mut Mgr, location: Location) -> Result<(), LocationError> {
    mgr.location_repo.save(&location)?;
    info!("location changed to {}", location.name);
    mgr.location = location;

    Ok(())
}

#[derive(thiserror::Error, Debug)]
enum CycleError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Comparison(#[from] crate::errors::ComparisonError),
}
