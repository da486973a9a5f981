use tracing::info;

use crate::{
    data::datasources::festivals_csv_datasource::{
        FestivalsCsvDatasource, FestivalsCsvDatasourceImpl,
    },
    domain::repositories::festival_records_repository::FestivalRecordsRepository,
    entities::FestivalTable,
    errors::QualityCheckError,
};

pub(crate) struct FestivalRecordsRepositoryImpl<DS = FestivalsCsvDatasourceImpl>
where
    DS: FestivalsCsvDatasource,
{
    festivals_datasource: DS,
}

impl<DS> FestivalRecordsRepository for FestivalRecordsRepositoryImpl<DS>
where
    DS: FestivalsCsvDatasource,
{
    fn from_string(&self, festivals_csv: &str) -> Result<FestivalTable, QualityCheckError> {
        let table = self.festivals_datasource.from_string(festivals_csv)?;
        info!(rows = table.len(), "loaded festival records");
        Ok(table)
    }

    fn from_file<P>(&self, festivals_csv: P) -> Result<FestivalTable, QualityCheckError>
    where
        P: AsRef<std::path::Path>,
    {
        let table = self.festivals_datasource.from_file(festivals_csv)?;
        info!(rows = table.len(), "loaded festival records");
        Ok(table)
    }
}

impl FestivalRecordsRepositoryImpl {
    pub(crate) fn new() -> Self {
        FestivalRecordsRepositoryImpl {
            festivals_datasource: FestivalsCsvDatasourceImpl::new(),
        }
    }
}
