use std::process::ExitCode;

use uxicons::icons::process_icons;
use uxicons::report::NormalizeReport;

fn main() -> ExitCode {
    uxicons::cli::run(process_icons, NormalizeReport::print_summary)
}
