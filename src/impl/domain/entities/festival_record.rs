/// One row of the festival submissions export.
///
/// Fields are kept exactly as written in the file; only `notification_date`
/// is interpreted, and only once aggregation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalRecord {
    pub festival_name: String,
    pub project: String,
    pub notification_date: String,
    pub submission_status: String,
    pub judging_status: String,
}

impl FestivalRecord {
    /// Field values in column order.
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.festival_name,
            &self.project,
            &self.notification_date,
            &self.submission_status,
            &self.judging_status,
        ]
    }
}

/// Records in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FestivalTable {
    pub records: Vec<FestivalRecord>,
}

impl FestivalTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FestivalRecord> {
        self.records.iter()
    }
}

impl From<Vec<FestivalRecord>> for FestivalTable {
    fn from(records: Vec<FestivalRecord>) -> Self {
        Self { records }
    }
}
