use crate::{entities::BucketKey, errors::QualityCheckError};

pub const DEFAULT_START_YEAR: i32 = 2020;
pub const DEFAULT_END_YEAR: i32 = 2024;

/// Inclusive range of years covered by a completed series, every month of
/// each year included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    start_year: i32,
    end_year: i32,
}

impl CalendarWindow {
    pub fn new(start_year: i32, end_year: i32) -> Result<Self, QualityCheckError> {
        if start_year > end_year {
            return Err(QualityCheckError::InvalidCalendarWindow {
                start_year,
                end_year,
            });
        }
        Ok(Self {
            start_year,
            end_year,
        })
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Number of buckets in the window.
    pub fn month_count(&self) -> usize {
        let years = i64::from(self.end_year) - i64::from(self.start_year) + 1;
        usize::try_from(years * 12).unwrap_or(usize::MAX)
    }

    pub fn contains(&self, key: &BucketKey) -> bool {
        (self.start_year..=self.end_year).contains(&key.year) && (1..=12).contains(&key.month)
    }

    /// Every bucket of the window, ascending by year then month.
    pub fn keys(&self) -> impl Iterator<Item = BucketKey> {
        (self.start_year..=self.end_year)
            .flat_map(|year| (1..=12).map(move |month| BucketKey { year, month }))
    }
}

impl Default for CalendarWindow {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
        }
    }
}
