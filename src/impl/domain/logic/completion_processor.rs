use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    entities::{AggregatedBucket, BucketKey, CalendarWindow, CompletedSeries},
    errors::QualityCheckError,
};

/// Expands aggregated buckets to every month of the calendar window,
/// inserting zero counts where nothing was recorded.
pub(crate) struct CompletionProcessor<'a> {
    buckets: &'a [AggregatedBucket],
    window: &'a CalendarWindow,
}

impl<'a> CompletionProcessor<'a> {
    pub(crate) fn new(buckets: &'a [AggregatedBucket], window: &'a CalendarWindow) -> Self {
        Self { buckets, window }
    }

    pub(crate) fn process(self) -> Result<CompletedSeries, QualityCheckError> {
        let mut counts: HashMap<BucketKey, u64> = HashMap::with_capacity(self.buckets.len());
        for bucket in self.buckets {
            if counts.insert(bucket.key, bucket.festival_count).is_some() {
                return Err(QualityCheckError::DuplicateBucket {
                    year: bucket.key.year,
                    month: bucket.key.month,
                });
            }
        }

        let outside_window: u64 = counts
            .iter()
            .filter(|(key, _)| !self.window.contains(key))
            .map(|(_, count)| count)
            .sum();
        if outside_window > 0 {
            warn!(
                records = outside_window,
                start_year = self.window.start_year(),
                end_year = self.window.end_year(),
                "records fall outside the calendar window"
            );
        }

        let mut completed = Vec::with_capacity(self.window.month_count());
        completed.extend(self.window.keys().map(|key| AggregatedBucket {
            key,
            festival_count: counts.get(&key).copied().unwrap_or(0),
        }));
        debug!(buckets = completed.len(), "completed series");

        Ok(CompletedSeries::new(completed, outside_window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(year: i32, month: u32, festival_count: u64) -> AggregatedBucket {
        AggregatedBucket {
            key: BucketKey { year, month },
            festival_count,
        }
    }

    #[test]
    fn fills_every_month_of_the_default_window() -> Result<(), QualityCheckError> {
        let window = CalendarWindow::default();
        let buckets = [bucket(2023, 7, 1), bucket(2023, 3, 2)];
        let series = CompletionProcessor::new(&buckets, &window).process()?;

        assert_eq!(series.len(), 60);
        let keys: Vec<BucketKey> = series.buckets().iter().map(|b| b.key).collect();
        assert_eq!(keys, window.keys().collect::<Vec<_>>());
        assert_eq!(series.count_for(BucketKey { year: 2023, month: 3 }), Some(2));
        assert_eq!(series.count_for(BucketKey { year: 2023, month: 7 }), Some(1));
        assert_eq!(
            series.buckets().iter().filter(|b| b.festival_count == 0).count(),
            58
        );
        assert_eq!(series.total_count(), 3);
        assert_eq!(series.outside_window(), 0);
        Ok(())
    }

    #[test]
    fn no_buckets_gives_all_zero_series() -> Result<(), QualityCheckError> {
        let window = CalendarWindow::default();
        let series = CompletionProcessor::new(&[], &window).process()?;
        assert_eq!(series.len(), 60);
        assert!(series.buckets().iter().all(|b| b.festival_count == 0));
        Ok(())
    }

    #[test]
    fn counts_outside_the_window_are_tallied_separately() -> Result<(), QualityCheckError> {
        let window = CalendarWindow::default();
        let buckets = [bucket(2019, 12, 4), bucket(2020, 1, 1), bucket(2025, 1, 2)];
        let series = CompletionProcessor::new(&buckets, &window).process()?;
        assert_eq!(series.len(), 60);
        assert_eq!(series.total_count(), 1);
        assert_eq!(series.outside_window(), 6);
        assert_eq!(series.count_for(BucketKey { year: 2019, month: 12 }), None);
        Ok(())
    }

    #[test]
    fn follows_a_custom_window() -> Result<(), QualityCheckError> {
        let window = CalendarWindow::new(2018, 2019)?;
        let buckets = [bucket(2019, 12, 4)];
        let series = CompletionProcessor::new(&buckets, &window).process()?;
        assert_eq!(series.len(), 24);
        assert_eq!(series.buckets()[0].key, BucketKey { year: 2018, month: 1 });
        assert_eq!(series.buckets()[23], bucket(2019, 12, 4));
        Ok(())
    }

    #[test]
    fn duplicate_keys_are_refused() {
        let window = CalendarWindow::default();
        let buckets = [bucket(2021, 5, 1), bucket(2021, 5, 3)];
        let err = CompletionProcessor::new(&buckets, &window)
            .process()
            .unwrap_err();
        assert!(matches!(
            err,
            QualityCheckError::DuplicateBucket {
                year: 2021,
                month: 5
            }
        ));
    }
}
