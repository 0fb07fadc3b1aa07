use std::fmt;
use serde::{Deserialize, Serialize};
use crate::observation::DailyObservation;

/// Adverse weather classifications, declared in detection priority order
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Hazard {
    FireRisk,
    ExtremeHeat,
    HeavyRain,
    SnowIce,
    ExtremeCold,
    StrongWinds,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Hazard::FireRisk    => write!(f, "Fire Risk"),
            Hazard::ExtremeHeat => write!(f, "Extreme Heat"),
            Hazard::HeavyRain   => write!(f, "Heavy Rain"),
            Hazard::SnowIce     => write!(f, "Snow/Ice"),
            Hazard::ExtremeCold => write!(f, "Extreme Cold"),
            Hazard::StrongWinds => write!(f, "Strong Winds"),
        }
    }
}

/// The subset of a day's values that hazard rules look at
#[derive(Clone, Copy, Debug)]
pub struct HazardInput {
    pub temp_max: f64,
    pub temp_min: f64,
    pub humidity: f64,
    pub wind: f64,
    pub precipitation_sum: f64,
    pub precipitation_probability: f64,
}

impl From<&DailyObservation> for HazardInput {
    fn from(day: &DailyObservation) -> Self {
        HazardInput {
            temp_max: day.apparent_temp_max,
            temp_min: day.apparent_temp_min,
            humidity: day.humidity_mean,
            wind: day.wind_speed_max,
            precipitation_sum: day.precipitation_sum,
            precipitation_probability: day.precipitation_probability_max,
        }
    }
}

/// Detects at most one hazard for a day.
///
/// Rules are checked in this order and the first match wins:
/// * Fire Risk - max >= 32 and humidity <= 30 and wind >= 25
/// * Extreme Heat - max >= 38
/// * Heavy Rain - precipitation >= 30 mm and probability >= 70%
/// * Snow/Ice - any precipitation and min <= 0
/// * Extreme Cold - min <= 0
/// * Strong Winds - wind >= 50 km/h
///
/// # Arguments
///
/// * 'input' - the day's temperature, humidity, wind and precipitation values
pub fn detect(input: &HazardInput) -> Option<Hazard> {
    if input.temp_max >= 32.0 && input.humidity <= 30.0 && input.wind >= 25.0 {
        Some(Hazard::FireRisk)
    } else if input.temp_max >= 38.0 {
        Some(Hazard::ExtremeHeat)
    } else if input.precipitation_sum >= 30.0 && input.precipitation_probability >= 70.0 {
        Some(Hazard::HeavyRain)
    } else if input.precipitation_sum > 0.0 && input.temp_min <= 0.0 {
        Some(Hazard::SnowIce)
    } else if input.temp_min <= 0.0 {
        Some(Hazard::ExtremeCold)
    } else if input.wind >= 50.0 {
        Some(Hazard::StrongWinds)
    } else {
        None
    }
}

/// Detects a hazard for an observed day
///
/// # Arguments
///
/// * 'day' - the observation to check
pub fn detect_day(day: &DailyObservation) -> Option<Hazard> {
    detect(&HazardInput::from(day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm() -> HazardInput {
        HazardInput {
            temp_max: 20.0,
            temp_min: 10.0,
            humidity: 60.0,
            wind: 10.0,
            precipitation_sum: 0.0,
            precipitation_probability: 0.0,
        }
    }

    #[test]
    fn calm_day_has_no_hazard() {
        assert_eq!(detect(&calm()), None);
    }

    #[test]
    fn fire_risk_outranks_extreme_heat() {
        let input = HazardInput { temp_max: 40.0, humidity: 20.0, wind: 30.0, ..calm() };
        assert_eq!(detect(&input), Some(Hazard::FireRisk));
    }

    #[test]
    fn extreme_heat_when_not_dry_or_windy() {
        let input = HazardInput { temp_max: 38.0, humidity: 50.0, ..calm() };
        assert_eq!(detect(&input), Some(Hazard::ExtremeHeat));
    }

    #[test]
    fn heavy_rain_needs_amount_and_probability() {
        let rain = HazardInput { precipitation_sum: 30.0, precipitation_probability: 70.0, ..calm() };
        assert_eq!(detect(&rain), Some(Hazard::HeavyRain));

        let unlikely = HazardInput { precipitation_probability: 69.0, ..rain };
        assert_eq!(detect(&unlikely), None);
    }

    #[test]
    fn snow_ice_outranks_extreme_cold() {
        let icy = HazardInput { temp_min: 0.0, precipitation_sum: 0.2, ..calm() };
        assert_eq!(detect(&icy), Some(Hazard::SnowIce));

        let dry = HazardInput { precipitation_sum: 0.0, ..icy };
        assert_eq!(detect(&dry), Some(Hazard::ExtremeCold));
    }

    #[test]
    fn heavy_rain_outranks_snow_ice() {
        let input = HazardInput {
            temp_min: -2.0,
            precipitation_sum: 35.0,
            precipitation_probability: 90.0,
            ..calm()
        };
        assert_eq!(detect(&input), Some(Hazard::HeavyRain));
    }

    #[test]
    fn strong_winds_last() {
        let windy = HazardInput { wind: 50.0, ..calm() };
        assert_eq!(detect(&windy), Some(Hazard::StrongWinds));

        let cold_and_windy = HazardInput { temp_min: -5.0, ..windy };
        assert_eq!(detect(&cold_and_windy), Some(Hazard::ExtremeCold));
    }

    #[test]
    fn nan_matches_no_rule() {
        let input = HazardInput { temp_max: f64::NAN, temp_min: f64::NAN, wind: f64::NAN, ..calm() };
        assert_eq!(detect(&input), None);
    }

    #[test]
    fn labels() {
        assert_eq!(Hazard::SnowIce.to_string(), "Snow/Ice");
        assert_eq!(Hazard::FireRisk.to_string(), "Fire Risk");
    }
}
