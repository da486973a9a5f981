use crate::entities::CalendarWindow;

pub const DEFAULT_PREVIEW_ROWS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Loaded rows shown before the series.
    pub preview_rows: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualityCheckConfig {
    pub window: CalendarWindow,
    pub report: ReportOptions,
}
