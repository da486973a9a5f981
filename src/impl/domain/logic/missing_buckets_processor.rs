use crate::entities::{BucketKey, CompletedSeries};

/// Buckets of a completed series with nothing recorded, in series order.
pub(crate) struct MissingBucketsProcessor<'a> {
    series: &'a CompletedSeries,
}

impl<'a> MissingBucketsProcessor<'a> {
    pub(crate) fn new(series: &'a CompletedSeries) -> Self {
        Self { series }
    }

    pub(crate) fn process(self) -> Vec<BucketKey> {
        self.series
            .buckets()
            .iter()
            .filter(|b| b.festival_count == 0)
            .map(|b| b.key)
            .collect()
    }
}
