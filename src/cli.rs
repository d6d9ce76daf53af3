/// Shared command line handling for the two binaries

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::error::IconError;
use crate::layout::Layout;
use crate::report::to_json;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Folder holding `icon/` and `uxicons/` (defaults to the executable's folder)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Print the run report as JSON after the summary
    #[arg(long)]
    pub json: bool,
}

/// Install the stderr diagnostics subscriber, filtered by `RUST_LOG`
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse flags, resolve the layout and run `stage`.
///
/// A fatal error prints a diagnostic and exits with status 1. Per-file
/// errors are part of the report and still exit with 0.
pub fn run<R, F>(stage: F, summarize: fn(&R)) -> ExitCode
where
    R: Serialize,
    F: FnOnce(&Layout) -> Result<R, IconError>,
{
    init_logging();
    let args = Args::parse();

    let result = Layout::resolve(args.root).and_then(|layout| {
        tracing::debug!("working root: {}", layout.root().display());
        stage(&layout)
    });

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            eprintln!("❌ Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    summarize(&report);

    if args.json {
        match to_json(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("❌ Failed to serialize report: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let args = Args::try_parse_from(["process-icons"]).unwrap();
        assert!(args.root.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_root_and_json_flags() {
        let args =
            Args::try_parse_from(["scaffold-packages", "--root", "/srv/icons", "--json"]).unwrap();
        assert_eq!(args.root, Some(PathBuf::from("/srv/icons")));
        assert!(args.json);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Args::try_parse_from(["process-icons", "somewhere"]).is_err());
    }
}
