use crate::entities::FestivalRecord;

/// Positional row of the export. Field order must match `COLUMN_NAMES`.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct FestivalRecordModel {
    festival_name: String,
    project: String,
    notification_date: String,
    submission_status: String,
    judging_status: String,
}

impl From<FestivalRecordModel> for FestivalRecord {
    fn from(model: FestivalRecordModel) -> Self {
        FestivalRecord {
            festival_name: model.festival_name,
            project: model.project,
            notification_date: model.notification_date,
            submission_status: model.submission_status,
            judging_status: model.judging_status,
        }
    }
}
