pub mod comparison;
pub mod config;
pub mod daily_input;
pub mod errors;
pub mod fallback;
pub mod hazard;
pub mod initialization;
pub mod location;
pub mod mock;
pub mod models;
pub mod observation;
pub mod pfi;
pub mod precipitation;
pub mod render;
pub mod search;
pub mod thresholds;
pub mod worker;

pub use comparison::{compare, compare_days, ComparisonResult, DayDisplay, DerivedDay, SeriesEntry};
pub use errors::ComparisonError;
pub use hazard::Hazard;
pub use observation::{DailyObservation, WeekWindow};
pub use precipitation::{Precipitation, PrecipitationChance};
pub use thresholds::{Trend, TrendBucket};
