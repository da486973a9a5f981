use std::{str::FromStr, sync::LazyLock};

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::{entities::BucketKey, errors::DateRejection};

// Calendar date, then an optional time of day, then an optional UTC offset.
static NOTIFICATION_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<date>[0-9]{4}[-/][0-9]{2}[-/][0-9]{2})(?:[T ](?P<time>[0-9]{2}:[0-9]{2}(?::[0-9]{2}(?:\.[0-9]{1,9})?)?)(?:Z|[+-][0-9]{2}:?[0-9]{2})?)?$",
    )
    .expect("hardcoded regex should be valid")
});

/// Day-granular notification date.
///
/// Accepted values, after trimming surrounding whitespace, are `YYYY-MM-DD`
/// or `YYYY/MM/DD` (one separator used throughout), optionally followed by
/// `T` or a space and `HH:MM[:SS[.fraction]]`, optionally followed by `Z` or
/// a `±HH[:]MM` offset. The date is kept as written: time and offset are
/// validated and then dropped, never used to shift the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NotificationDate(pub NaiveDate);

impl FromStr for NotificationDate {
    type Err = DateRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = NOTIFICATION_DATE_PATTERN
            .captures(s.trim())
            .ok_or(DateRejection::UnrecognisedFormat)?;

        let raw_date = &caps["date"];
        let format = if raw_date.as_bytes()[4] == b'/' {
            "%Y/%m/%d"
        } else {
            "%Y-%m-%d"
        };
        let date =
            NaiveDate::parse_from_str(raw_date, format).map_err(DateRejection::InvalidCalendarDate)?;

        if let Some(raw_time) = caps.name("time") {
            let format = if raw_time.as_str().len() == 5 {
                "%H:%M"
            } else {
                "%H:%M:%S%.f"
            };
            NaiveTime::parse_from_str(raw_time.as_str(), format)
                .map_err(DateRejection::InvalidTime)?;
        }

        Ok(NotificationDate(date))
    }
}

impl From<NotificationDate> for BucketKey {
    fn from(date: NotificationDate) -> Self {
        date.0.into()
    }
}
