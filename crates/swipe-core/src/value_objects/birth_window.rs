//! Birth-date window derived from a preferred age range
//!
//! Discovery filters on birth year only: for a range `[min_age, max_age]`
//! evaluated in `current_year`, a candidate qualifies when their date of birth
//! lies between January 1 of `current_year - max_age` and December 31
//! 23:59:59.999999999 of `current_year - min_age`, both ends inclusive.
//!
//! This intentionally differs from [`Profile::age_on`](crate::Profile::age_on),
//! which is day-of-year aware. The two must not be unified.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Inclusive bounds on a candidate's date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BirthDateWindow {
    /// Oldest acceptable birth instant (from `max_age`)
    pub earliest: Option<DateTime<Utc>>,
    /// Youngest acceptable birth instant (from `min_age`)
    pub latest: Option<DateTime<Utc>>,
}

impl BirthDateWindow {
    /// Build the window for an age range evaluated in `current_year`.
    ///
    /// A missing bound leaves that side of the window open.
    pub fn from_age_range(min_age: Option<i32>, max_age: Option<i32>, current_year: i32) -> Self {
        Self {
            earliest: max_age.and_then(|max| start_of_year(current_year - max)),
            latest: min_age.and_then(|min| end_of_year(current_year - min)),
        }
    }

    /// True when neither side is bounded
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.earliest.is_none() && self.latest.is_none()
    }

    /// Check whether a date of birth falls inside the window
    pub fn contains(&self, date_of_birth: DateTime<Utc>) -> bool {
        self.earliest.is_none_or(|earliest| date_of_birth >= earliest)
            && self.latest.is_none_or(|latest| date_of_birth <= latest)
    }
}

fn start_of_year(year: i32) -> Option<DateTime<Utc>> {
    let naive = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&naive))
}

fn end_of_year(year: i32) -> Option<DateTime<Utc>> {
    let naive = NaiveDate::from_ymd_opt(year, 12, 31)?.and_hms_nano_opt(23, 59, 59, 999_999_999)?;
    Some(Utc.from_utc_datetime(&naive))
}
