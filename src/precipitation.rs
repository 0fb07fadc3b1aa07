use std::fmt;
use serde::{Deserialize, Serialize};
use crate::observation::DailyObservation;

/// Probability in percent at or below which a precipitation kind is not shown
const SHOW_THRESHOLD: f64 = 30.0;

/// Probability in percent above which precipitation is reported as expected rather than likely
const EXPECTED_THRESHOLD: f64 = 60.0;

/// Probability of rain and snow for one day, in percent
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PrecipitationChance {
    pub rain: f64,
    pub snow: f64,
}

impl PrecipitationChance {
    /// Splits the day's max precipitation probability into rain or snow.
    ///
    /// The whole probability goes to rain if the average apparent temperature is above
    /// freezing, otherwise the whole probability goes to snow.
    ///
    /// # Arguments
    ///
    /// * 'day' - the observation to split for
    pub fn from_observation(day: &DailyObservation) -> PrecipitationChance {
        let probability = day.precipitation_probability_max;
        if day.avg_apparent_temp() > 0.0 {
            PrecipitationChance { rain: probability, snow: 0.0 }
        } else {
            PrecipitationChance { rain: 0.0, snow: probability }
        }
    }
}

/// Displayable precipitation classification
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precipitation {
    RainExpected,
    RainLikely,
    SnowExpected,
    SnowLikely,
}

impl fmt::Display for Precipitation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Precipitation::RainExpected => write!(f, "Rain expected"),
            Precipitation::RainLikely   => write!(f, "Likely to rain"),
            Precipitation::SnowExpected => write!(f, "Snow expected"),
            Precipitation::SnowLikely   => write!(f, "Likely to snow"),
        }
    }
}

/// Resolves what precipitation, if any, to show for a day.
///
/// Nothing is shown while both rain and snow are at or below 30%. Otherwise the kind with the
/// higher probability wins, rain winning ties, and its probability decides between
/// "expected" (above 60%) and "likely".
///
/// # Arguments
///
/// * 'chance' - the day's rain and snow probabilities
pub fn resolve(chance: PrecipitationChance) -> Option<Precipitation> {
    if chance.rain <= SHOW_THRESHOLD && chance.snow <= SHOW_THRESHOLD {
        return None;
    }

    if chance.rain >= chance.snow {
        if chance.rain > EXPECTED_THRESHOLD {
            Some(Precipitation::RainExpected)
        } else {
            Some(Precipitation::RainLikely)
        }
    } else if chance.snow > EXPECTED_THRESHOLD {
        Some(Precipitation::SnowExpected)
    } else {
        Some(Precipitation::SnowLikely)
    }
}
