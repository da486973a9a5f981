use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a festival export into a quality report.
#[derive(Debug, Error)]
pub enum QualityCheckError {
    // IO-related.
    #[error("File not found: '{}'. Please provide a valid file path.", .path.display())]
    NotFound { path: PathBuf },
    #[error("An error occurred while loading the data: {0}")]
    Load(#[source] LoadErrorCause),

    // Parsing-related.
    #[error("Invalid notification date '{value}' in row {row}: {reason}.")]
    DateParse {
        row: usize,
        value: String,
        #[source]
        reason: DateRejection,
    },

    // Series-related.
    #[error("Bucket {year} - {month} was aggregated more than once.")]
    DuplicateBucket { year: i32, month: u32 },
    #[error("Invalid calendar window: start year {start_year} is after end year {end_year}.")]
    InvalidCalendarWindow { start_year: i32, end_year: i32 },
}

impl QualityCheckError {
    /// Whether the error happened before a table could be produced.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Load(_))
    }
}

#[derive(Debug, Error)]
pub enum LoadErrorCause {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} has {found} fields, expected {expected}")]
    FieldCount {
        row: u64,
        found: usize,
        expected: usize,
    },
}

impl From<LoadErrorCause> for QualityCheckError {
    fn from(cause: LoadErrorCause) -> Self {
        Self::Load(cause)
    }
}

/// Why a notification date was refused by the strict date rule.
#[derive(Debug, Error)]
pub enum DateRejection {
    #[error("expected YYYY-MM-DD or YYYY/MM/DD, optionally followed by a time")]
    UnrecognisedFormat,
    #[error("not a calendar date ({0})")]
    InvalidCalendarDate(#[source] chrono::ParseError),
    #[error("not a time of day ({0})")]
    InvalidTime(#[source] chrono::ParseError),
}
