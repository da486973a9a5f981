use std::{fs, io, path::Path};

use tracing::debug;

use crate::{
    data::models::festival_record_model::FestivalRecordModel,
    entities::{FestivalRecord, FestivalTable},
    errors::{LoadErrorCause, QualityCheckError},
};

/// Column names of the export, assigned by position since the file has no
/// header row.
pub(crate) const COLUMN_NAMES: [&str; 5] = [
    "festival_name",
    "project",
    "notification_date",
    "submission_status",
    "judging_status",
];

pub(crate) trait FestivalsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<FestivalTable, QualityCheckError>;

    fn from_file<P>(&self, path: P) -> Result<FestivalTable, QualityCheckError>
    where
        P: AsRef<Path>;
}

pub(crate) struct FestivalsCsvDatasourceImpl;

impl FestivalsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl FestivalsCsvDatasource for FestivalsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<FestivalTable, QualityCheckError> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| -> Result<FestivalRecord, QualityCheckError> {
                let r = r.map_err(LoadErrorCause::from)?;
                let row = r.position().map_or(i as u64 + 1, |p| p.line());
                if r.len() != COLUMN_NAMES.len() {
                    return Err(LoadErrorCause::FieldCount {
                        row,
                        found: r.len(),
                        expected: COLUMN_NAMES.len(),
                    }
                    .into());
                }
                let model: FestivalRecordModel =
                    r.deserialize(None).map_err(LoadErrorCause::from)?;
                Ok(FestivalRecord::from(model))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FestivalTable::from)
    }

    fn from_file<P>(&self, path: P) -> Result<FestivalTable, QualityCheckError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(QualityCheckError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => QualityCheckError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadErrorCause::from(e).into(),
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "read festival export");
        self.from_string(&contents)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;

    use super::*;

    const SAMPLE: &str = "\
Berlinale,Short A,2023-03-01,Submitted,Not Selected
Sundance,Short A,2023-03-15,Submitted,Selected
Cannes,Feature B,2023-07-04,Withdrawn,
";

    #[test]
    fn assigns_columns_by_position() -> Result<(), QualityCheckError> {
        let table = FestivalsCsvDatasourceImpl::new().from_string(SAMPLE)?;
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.records[0],
            FestivalRecord {
                festival_name: "Berlinale".into(),
                project: "Short A".into(),
                notification_date: "2023-03-01".into(),
                submission_status: "Submitted".into(),
                judging_status: "Not Selected".into(),
            }
        );
        assert_eq!(table.records[2].judging_status, "");
        Ok(())
    }

    #[test]
    fn first_row_is_data_not_header() -> Result<(), QualityCheckError> {
        let table = FestivalsCsvDatasourceImpl::new()
            .from_string("festival_name,project,notification_date,submission_status,judging_status\n")?;
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].notification_date, "notification_date");
        Ok(())
    }

    #[test]
    fn empty_input_gives_empty_table() -> Result<(), QualityCheckError> {
        let table = FestivalsCsvDatasourceImpl::new().from_string("")?;
        assert!(table.is_empty());
        Ok(())
    }

    #[test]
    fn wrong_field_count_is_a_load_error() {
        let err = FestivalsCsvDatasourceImpl::new()
            .from_string("Berlinale,Short A,2023-03-01,Submitted,Selected\nCannes,2023-07-04\n")
            .unwrap_err();
        assert!(matches!(
            err,
            QualityCheckError::Load(LoadErrorCause::FieldCount {
                row: 2,
                found: 2,
                expected: 5
            })
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = FestivalsCsvDatasourceImpl::new()
            .from_file("does/not/exist.csv")
            .unwrap_err();
        assert!(matches!(err, QualityCheckError::NotFound { .. }));
        assert!(err.is_load_failure());
    }

    #[test]
    fn directory_is_not_found() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let err = FestivalsCsvDatasourceImpl::new()
            .from_file(dir.path())
            .unwrap_err();
        assert!(matches!(err, QualityCheckError::NotFound { .. }));
        Ok(())
    }

    #[test]
    fn reads_file() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(SAMPLE.as_bytes())?;
        let table = FestivalsCsvDatasourceImpl::new().from_file(file.path())?;
        assert_eq!(table.len(), 3);
        assert_eq!(table.records[1].festival_name, "Sundance");
        Ok(())
    }

    #[test]
    fn invalid_encoding_is_a_load_error() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"Berlinale,Short \xff,2023-03-01,Submitted,Selected\n")?;
        let err = FestivalsCsvDatasourceImpl::new()
            .from_file(file.path())
            .unwrap_err();
        assert!(matches!(err, QualityCheckError::Load(LoadErrorCause::Io(_))));
        Ok(())
    }
}
