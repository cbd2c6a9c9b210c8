//! Curtailment schedule
//!
//! Turbines are throttled during fixed hours that depend on the season.

use std::ops::Range;

use chrono::{Datelike, NaiveDateTime, Timelike};

const SUMMER_HOURS: &[Range<u32>] = &[22..24, 0..2];
const WINTER_HOURS: &[Range<u32>] = &[15..22];
const MIDSEASON_HOURS: &[Range<u32>] = &[18..24, 0..2];

/// Season used by the curtailment schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// June to August
    Summer,
    /// December to February
    Winter,
    /// Spring and autumn
    Midseason,
}

impl Season {
    /// Season of a calendar month (1-12)
    #[must_use]
    pub const fn of_month(month: u32) -> Self {
        match month {
            6..=8 => Self::Summer,
            12 | 1 | 2 => Self::Winter,
            _ => Self::Midseason,
        }
    }

    /// Curtailed hour ranges, end exclusive
    #[must_use]
    pub const fn curtailed_hours(self) -> &'static [Range<u32>] {
        match self {
            Self::Summer => SUMMER_HOURS,
            Self::Winter => WINTER_HOURS,
            Self::Midseason => MIDSEASON_HOURS,
        }
    }

    /// Whether the hour falls in a curtailed range
    #[must_use]
    pub fn is_curtailed_hour(self, hour: u32) -> bool {
        self.curtailed_hours().iter().any(|r| r.contains(&hour))
    }
}

/// Whether turbines are curtailed at the timestamp
#[must_use]
pub fn is_curtailed(at: NaiveDateTime) -> bool {
    Season::of_month(at.month()).is_curtailed_hour(at.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(m: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, m, 15)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_seasons() {
        assert_eq!(Season::of_month(7), Season::Summer);
        assert_eq!(Season::of_month(12), Season::Winter);
        assert_eq!(Season::of_month(2), Season::Winter);
        assert_eq!(Season::of_month(4), Season::Midseason);
        assert_eq!(Season::of_month(11), Season::Midseason);
    }

    #[test]
    fn test_summer_schedule() {
        assert!(is_curtailed(at(7, 22, 0)));
        assert!(is_curtailed(at(7, 1, 50)));
        assert!(!is_curtailed(at(7, 2, 0)));
        assert!(!is_curtailed(at(7, 18, 0)));
    }

    #[test]
    fn test_winter_schedule() {
        assert!(is_curtailed(at(1, 15, 0)));
        assert!(is_curtailed(at(12, 21, 50)));
        assert!(!is_curtailed(at(1, 22, 0)));
        assert!(!is_curtailed(at(2, 0, 0)));
    }

    #[test]
    fn test_midseason_schedule() {
        assert!(is_curtailed(at(10, 18, 0)));
        assert!(is_curtailed(at(4, 0, 30)));
        assert!(!is_curtailed(at(4, 2, 0)));
        assert!(!is_curtailed(at(10, 17, 50)));
    }
}
