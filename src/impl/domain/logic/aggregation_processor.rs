use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    entities::{AggregatedBucket, BucketKey, FestivalTable, NotificationDate},
    errors::QualityCheckError,
};

/// Counts records per (year, month) of their notification date.
pub(crate) struct AggregationProcessor<'a> {
    table: &'a FestivalTable,
}

impl<'a> AggregationProcessor<'a> {
    pub(crate) fn new(table: &'a FestivalTable) -> Self {
        Self { table }
    }

    /// One bucket per distinct key, ascending. The first unparseable date
    /// aborts the whole aggregation; rows are never skipped.
    pub(crate) fn process(self) -> Result<Vec<AggregatedBucket>, QualityCheckError> {
        let counts = self
            .table
            .iter()
            .enumerate()
            .map(|(i, record)| {
                record
                    .notification_date
                    .parse::<NotificationDate>()
                    .map(BucketKey::from)
                    .map_err(|reason| QualityCheckError::DateParse {
                        row: i + 1,
                        value: record.notification_date.clone(),
                        reason,
                    })
            })
            .try_fold(
                BTreeMap::<BucketKey, u64>::new(),
                |mut map, key| -> Result<_, QualityCheckError> {
                    *map.entry(key?).or_default() += 1;
                    Ok(map)
                },
            )?;

        debug!(
            records = self.table.len(),
            buckets = counts.len(),
            "aggregated festival records"
        );

        Ok(counts
            .into_iter()
            .map(|(key, festival_count)| AggregatedBucket {
                key,
                festival_count,
            })
            .collect())
    }
}
