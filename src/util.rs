use std::io;

use crate::{
    domain::usecases::quality_check_usecase::{QualityCheckUsecase as _, QualityCheckUsecaseImpl},
    entities::{QualityCheckConfig, QualityReport},
    errors::QualityCheckError,
    presentation::report_printer::ReportPrinter,
};

/// Entry point of the library: loads a festival export, completes its
/// monthly series over the configured calendar window and renders the
/// months with no festival notification.
pub struct FestivalQualityUtil {
    quality_check_usecase: QualityCheckUsecaseImpl,
    printer: ReportPrinter,
}

impl FestivalQualityUtil {
    pub fn new() -> Self {
        Self::with_config(QualityCheckConfig::default())
    }

    pub fn with_config(config: QualityCheckConfig) -> Self {
        Self {
            quality_check_usecase: QualityCheckUsecaseImpl::new(config.window),
            printer: ReportPrinter::new(config.report),
        }
    }

    pub fn from_string(&self, festivals_csv: &str) -> Result<QualityReport, QualityCheckError> {
        self.quality_check_usecase.from_string(festivals_csv)
    }

    pub fn from_file<T>(&self, festivals_csv: T) -> Result<QualityReport, QualityCheckError>
    where
        T: AsRef<std::path::Path>,
    {
        self.quality_check_usecase.from_file(festivals_csv)
    }

    /// Loaded-rows preview, completed series and missing months, in that
    /// order.
    pub fn render(&self, report: &QualityReport) -> String {
        self.printer.print_report(report)
    }

    pub fn write_report<W: io::Write>(&self, report: &QualityReport, out: &mut W) -> io::Result<()> {
        out.write_all(self.render(report).as_bytes())?;
        out.flush()
    }
}

impl Default for FestivalQualityUtil {
    fn default() -> Self {
        Self::new()
    }
}
