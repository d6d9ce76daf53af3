/// Run reports for both stages
///
/// These structs collect what a stage did so the binaries can print the
/// human-readable summary or dump the whole thing as JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::IconError;

const SEPARATOR: &str = "------------------------------";

/// Result of a scaffolding run
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub target_dir: PathBuf,
    /// Package folders created by this run, in creation order
    pub created: Vec<String>,
    /// Package names whose folder already existed
    pub existing: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl ScaffoldReport {
    pub fn new(target_dir: &Path) -> Self {
        Self {
            target_dir: target_dir.to_path_buf(),
            created: Vec::new(),
            existing: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn print_summary(&self) {
        println!("{}", SEPARATOR);
        println!("🎉 Done! New folders created: {}.", self.created_count());
    }
}

/// One file the normalizer could not handle
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of a normalization run
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeReport {
    pub target_dir: PathBuf,
    pub renamed: usize,
    pub already_correct: usize,
    pub normalized: usize,
    /// Images whose size matched no rule (informational, not an error)
    pub unmatched: usize,
    pub errors: usize,
    pub failures: Vec<FileFailure>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl NormalizeReport {
    pub fn new(target_dir: &Path) -> Self {
        Self {
            target_dir: target_dir.to_path_buf(),
            renamed: 0,
            already_correct: 0,
            normalized: 0,
            unmatched: 0,
            errors: 0,
            failures: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Count a per-file error and print it
    pub fn record_failure(&mut self, path: &Path, err: &IconError) {
        eprintln!("❌ {}", err);
        self.errors += 1;
        self.failures.push(FileFailure {
            path: path.to_path_buf(),
            reason: err.to_string(),
        });
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn print_summary(&self) {
        println!("{}", SEPARATOR);
        println!("🎉 All done!");
        println!("✅ Renamed: {}", self.renamed);
        println!("⏭️  Already named correctly: {}", self.already_correct);
        println!("✨ Normalized to RGBA PNG: {}", self.normalized);

        if self.errors > 0 {
            println!("⚠️  Errors: {}", self.errors);
        } else {
            println!("✨ All matching icons processed.");
        }
    }
}

/// Serialize a report for `--json`
pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
