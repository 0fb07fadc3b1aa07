use std::fmt;
use serde::Serialize;

/// Percent points per degree Celsius of feel difference
const PERCENT_PER_DEGREE: f64 = 5.0;

/// Smallest absolute percentage that is displayed
const MIN_SHOWN_PERCENTAGE: f64 = 5.0;

/// Day over day comparison bucket
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendBucket {
    SignificantlyHotter,
    NoticeablyHotter,
    Hotter,
    Same,
    Colder,
    NoticeablyColder,
    SignificantlyColder,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for TrendBucket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrendBucket::SignificantlyHotter => write!(f, "Significantly hotter than yesterday"),
            TrendBucket::NoticeablyHotter    => write!(f, "Noticeably hotter than yesterday"),
            TrendBucket::Hotter              => write!(f, "Hotter than yesterday"),
            TrendBucket::Same                => write!(f, "Same as yesterday"),
            TrendBucket::Colder              => write!(f, "Colder than yesterday"),
            TrendBucket::NoticeablyColder    => write!(f, "Noticeably colder than yesterday"),
            TrendBucket::SignificantlyColder => write!(f, "Significantly colder than yesterday"),
        }
    }
}

/// Trend of today's feel compared to yesterday
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Trend {
    pub bucket: TrendBucket,
    pub diff: f64,
    pub percentage: f64,
}

impl Trend {
    /// Classifies a feel difference in degrees Celsius
    ///
    /// # Arguments
    ///
    /// * 'diff' - today's PFI minus yesterday's PFI
    pub fn from_diff(diff: f64) -> Trend {
        let percentage = percentage_equivalent(diff);
        Trend { bucket: classify_percentage(percentage), diff, percentage }
    }

    /// Returns the signed percentage if it is large enough to be displayed
    pub fn shown_percentage(&self) -> Option<f64> {
        if self.percentage.abs() >= MIN_SHOWN_PERCENTAGE {
            Some(self.percentage)
        } else {
            None
        }
    }
}

/// Converts a temperature difference into its whole percentage equivalent, halves
/// rounding away from zero
///
/// # Arguments
///
/// * 'diff' - difference in degrees Celsius
pub fn percentage_equivalent(diff: f64) -> f64 {
    (diff * PERCENT_PER_DEGREE).round()
}

/// Maps a percentage equivalent to its trend bucket, all bounds are strict
///
/// # Arguments
///
/// * 'percentage' - the percentage equivalent of a feel difference
pub fn classify_percentage(percentage: f64) -> TrendBucket {
    if percentage > 35.0 {
        TrendBucket::SignificantlyHotter
    } else if percentage > 15.0 {
        TrendBucket::NoticeablyHotter
    } else if percentage > 5.0 {
        TrendBucket::Hotter
    } else if percentage < -35.0 {
        TrendBucket::SignificantlyColder
    } else if percentage < -15.0 {
        TrendBucket::NoticeablyColder
    } else if percentage < -5.0 {
        TrendBucket::Colder
    } else {
        TrendBucket::Same
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_is_same_but_shown() {
        let trend = Trend::from_diff(1.0);
        assert_eq!(trend.percentage, 5.0);
        assert_eq!(trend.bucket, TrendBucket::Same);
        assert_eq!(trend.shown_percentage(), Some(5.0));
    }

    #[test]
    fn rounding_at_the_boundary() {
        assert_eq!(percentage_equivalent(1.01), 5.0);
        assert_eq!(Trend::from_diff(1.01).bucket, TrendBucket::Same);
        assert_eq!(percentage_equivalent(1.2), 6.0);
        assert_eq!(Trend::from_diff(1.2).bucket, TrendBucket::Hotter);
        assert_eq!(percentage_equivalent(-0.5), -3.0);
    }

    #[test]
    fn small_differences_are_hidden() {
        let trend = Trend::from_diff(0.5);
        assert_eq!(trend.bucket, TrendBucket::Same);
        assert_eq!(trend.shown_percentage(), None);
    }

    #[test]
    fn buckets() {
        assert_eq!(classify_percentage(36.0), TrendBucket::SignificantlyHotter);
        assert_eq!(classify_percentage(35.0), TrendBucket::NoticeablyHotter);
        assert_eq!(classify_percentage(16.0), TrendBucket::NoticeablyHotter);
        assert_eq!(classify_percentage(15.0), TrendBucket::Hotter);
        assert_eq!(classify_percentage(5.0), TrendBucket::Same);
        assert_eq!(classify_percentage(0.0), TrendBucket::Same);
        assert_eq!(classify_percentage(-5.0), TrendBucket::Same);
        assert_eq!(classify_percentage(-6.0), TrendBucket::Colder);
        assert_eq!(classify_percentage(-16.0), TrendBucket::NoticeablyColder);
        assert_eq!(classify_percentage(-36.0), TrendBucket::SignificantlyColder);
    }

    #[test]
    fn nan_difference_is_same() {
        let trend = Trend::from_diff(f64::NAN);
        assert_eq!(trend.bucket, TrendBucket::Same);
        assert!(trend.percentage.is_nan());
        assert_eq!(trend.shown_percentage(), None);
    }
}
