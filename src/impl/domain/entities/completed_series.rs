use crate::entities::{AggregatedBucket, BucketKey};

/// Every bucket of a calendar window in ascending order, zero-filled where
/// the input had no records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedSeries {
    buckets: Vec<AggregatedBucket>,
    outside_window: u64,
}

impl CompletedSeries {
    pub(crate) fn new(buckets: Vec<AggregatedBucket>, outside_window: u64) -> Self {
        Self {
            buckets,
            outside_window,
        }
    }

    pub fn buckets(&self) -> &[AggregatedBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn count_for(&self, key: BucketKey) -> Option<u64> {
        self.buckets
            .binary_search_by_key(&key, |b| b.key)
            .ok()
            .map(|i| self.buckets[i].festival_count)
    }

    /// Sum of all counts inside the window.
    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.festival_count).sum()
    }

    /// Records whose notification date fell outside the window and are
    /// therefore not part of any bucket.
    pub fn outside_window(&self) -> u64 {
        self.outside_window
    }
}
