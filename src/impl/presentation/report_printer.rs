use crate::{
    data::datasources::festivals_csv_datasource::COLUMN_NAMES,
    entities::{BucketKey, CompletedSeries, FestivalTable, QualityReport, ReportOptions},
    presentation::utils::{format_count, format_table},
};

const SERIES_COLUMN_NAMES: [&str; 3] = [
    "notification_date_year",
    "notification_date_month",
    "festival_count",
];

pub(crate) struct ReportPrinter {
    options: ReportOptions,
}

impl ReportPrinter {
    pub(crate) fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub(crate) fn print_report(&self, report: &QualityReport) -> String {
        let mut output = String::new();

        output.push_str("\n\nData loaded successfully :\n");
        output.push_str("---------------------------\n");
        self.print_preview(&mut output, &report.table);

        output.push_str("\n\nData aggregated by year and month :\n");
        output.push_str("----------------------------------------\n");
        self.print_series(&mut output, &report.series);

        output.push_str("\n\nQuality check :\n");
        output.push_str("--------------------\n");
        self.print_missing(&mut output, &report.missing);

        output
    }

    fn print_preview(&self, output: &mut String, table: &FestivalTable) {
        let rows: Vec<Vec<&str>> = table
            .iter()
            .take(self.options.preview_rows)
            .map(|record| record.fields().to_vec())
            .collect();
        output.push_str(&format_table(&COLUMN_NAMES, &rows));
    }

    fn print_series(&self, output: &mut String, series: &CompletedSeries) {
        let rows: Vec<Vec<String>> = series
            .buckets()
            .iter()
            .map(|b| {
                vec![
                    b.key.year.to_string(),
                    b.key.month.to_string(),
                    format_count(b.festival_count),
                ]
            })
            .collect();
        output.push_str(&format_table(&SERIES_COLUMN_NAMES, &rows));
    }

    pub(crate) fn print_missing(&self, output: &mut String, missing: &[BucketKey]) {
        output.push_str("year-month without festival :\n");
        output.push_str("-------------------------------\n");
        for key in missing {
            output.push_str(&format!("{}\n", key));
        }
    }
}
