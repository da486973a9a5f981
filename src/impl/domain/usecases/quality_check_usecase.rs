use tracing::info;

use crate::{
    data::repositories::festival_records_repository_impl::FestivalRecordsRepositoryImpl,
    domain::{
        logic::{
            aggregation_processor::AggregationProcessor,
            completion_processor::CompletionProcessor,
            missing_buckets_processor::MissingBucketsProcessor,
        },
        repositories::festival_records_repository::FestivalRecordsRepository,
    },
    entities::{CalendarWindow, FestivalTable, QualityReport},
    errors::QualityCheckError,
};

pub trait QualityCheckUsecase {
    fn from_string(&self, festivals_csv: &str) -> Result<QualityReport, QualityCheckError>;

    fn from_file<P>(&self, festivals_csv: P) -> Result<QualityReport, QualityCheckError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct QualityCheckUsecaseImpl<
    R1 = FestivalRecordsRepositoryImpl, // Default.
> where
    R1: FestivalRecordsRepository,
{
    records_repository: R1,
    window: CalendarWindow,
}

impl<R1> QualityCheckUsecase for QualityCheckUsecaseImpl<R1>
where
    R1: FestivalRecordsRepository,
{
    fn from_string(&self, festivals_csv: &str) -> Result<QualityReport, QualityCheckError> {
        let table = self.records_repository.from_string(festivals_csv)?;
        self.check(table)
    }

    fn from_file<P>(&self, festivals_csv: P) -> Result<QualityReport, QualityCheckError>
    where
        P: AsRef<std::path::Path>,
    {
        let table = self.records_repository.from_file(festivals_csv)?;
        self.check(table)
    }
}

impl<R1> QualityCheckUsecaseImpl<R1>
where
    R1: FestivalRecordsRepository,
{
    fn check(&self, table: FestivalTable) -> Result<QualityReport, QualityCheckError> {
        let buckets = AggregationProcessor::new(&table).process()?;
        let series = CompletionProcessor::new(&buckets, &self.window).process()?;
        let missing = MissingBucketsProcessor::new(&series).process();
        info!(
            buckets = series.len(),
            missing = missing.len(),
            "quality check complete"
        );
        Ok(QualityReport {
            table,
            series,
            missing,
        })
    }
}

impl QualityCheckUsecaseImpl {
    pub(crate) fn new(window: CalendarWindow) -> Self {
        QualityCheckUsecaseImpl {
            records_repository: FestivalRecordsRepositoryImpl::new(),
            window,
        }
    }
}
