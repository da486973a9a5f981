use crate::{entities::FestivalTable, errors::QualityCheckError};

pub trait FestivalRecordsRepository {
    fn from_string(&self, festivals_csv: &str) -> Result<FestivalTable, QualityCheckError>;

    fn from_file<P>(&self, festivals_csv: P) -> Result<FestivalTable, QualityCheckError>
    where
        P: AsRef<std::path::Path>;
}
