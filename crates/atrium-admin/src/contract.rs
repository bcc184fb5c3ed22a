//! Contract end-date arithmetic.
//!
//! The order form derives a contract's end date from its signing date,
//! a duration in days, and whether the duration counts calendar days or
//! working days. Working-day mode walks forward one calendar day at a
//! time and only counts days that land on Monday through Friday, so a
//! duration of 5 starting on a Friday ends the following Friday.
//!
//! Public holidays are not modeled; the product counts weekdays only.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// How a contract duration is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimingType {
    /// Every calendar day counts.
    Calendar,
    /// Only Monday–Friday count.
    Working,
}

/// Computes the contract end date.
///
/// A duration of zero returns the signing date unchanged in either
/// mode. In working-day mode the walk starts the day after signing, so
/// the signing date itself never counts toward the duration.
///
/// # Example
///
/// ```
/// use atrium_admin::{contract_end_date, TimingType};
/// use chrono::NaiveDate;
///
/// // Friday + 5 working days lands on the next Friday.
/// let signed = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let end = contract_end_date(signed, TimingType::Working, 5);
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
///
/// // Calendar mode is plain addition.
/// let end = contract_end_date(signed, TimingType::Calendar, 5);
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
/// ```
#[must_use]
pub fn contract_end_date(signing: NaiveDate, timing: TimingType, duration_days: u32) -> NaiveDate {
    match timing {
        TimingType::Calendar => signing + Days::new(u64::from(duration_days)),
        TimingType::Working => {
            let mut end = signing;
            let mut remaining = duration_days;
            while remaining > 0 {
                end = end + Days::new(1);
                if is_weekday(end) {
                    remaining -= 1;
                }
            }
            end
        }
    }
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
