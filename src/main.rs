use std::{
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use festival_quality_check::util::FestivalQualityUtil;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

/// Report the months without any festival notification in a CSV export.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the CSV file
    file_path: PathBuf,
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout only carries the report.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let util = FestivalQualityUtil::new();
    let mut stdout = io::stdout().lock();

    match util.from_file(&args.file_path) {
        Ok(report) => {
            util.write_report(&report, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(path = %args.file_path.display(), load_failure = e.is_load_failure(), "quality check aborted");
            writeln!(stdout, "{}", e)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
