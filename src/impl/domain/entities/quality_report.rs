use crate::entities::{BucketKey, CompletedSeries, FestivalTable};

/// Result of one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityReport {
    pub table: FestivalTable,
    pub series: CompletedSeries,
    /// Buckets of `series` with a zero count, ascending.
    pub missing: Vec<BucketKey>,
}
