use std::process::ExitCode;

use uxicons::icons::scaffold_packages;
use uxicons::report::ScaffoldReport;

fn main() -> ExitCode {
    uxicons::cli::run(scaffold_packages, ScaffoldReport::print_summary)
}
