use std::fmt;

use chrono::{Datelike as _, NaiveDate};

/// A (year, month) grouping unit. Orders by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BucketKey {
    pub year: i32,
    /// 1-based, always within `1..=12`.
    pub month: u32,
}

impl From<NaiveDate> for BucketKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatedBucket {
    pub key: BucketKey,
    pub festival_count: u64,
}
