use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use super::{listing, png, rules};
use crate::error::{DirKind, IconError};
use crate::layout::Layout;
use crate::report::NormalizeReport;

/// What happened to a single matched variant before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
enum Placement {
    /// Already carried its canonical name
    AlreadyCorrect(PathBuf),
    /// Renamed to its canonical name
    Renamed(PathBuf),
}

impl Placement {
    fn path(&self) -> &Path {
        match self {
            Placement::AlreadyCorrect(path) | Placement::Renamed(path) => path,
        }
    }
}

/// Rename every recognised icon variant under `uxicons/` to its canonical
/// name and rewrite it as an RGBA PNG.
///
/// Package folders are visited in name order. Per-file failures are counted
/// in the report and never stop the walk; only a missing or unreadable
/// `uxicons/` is fatal.
pub fn process_icons(layout: &Layout) -> Result<NormalizeReport, IconError> {
    let target_dir = layout.require(DirKind::Target)?;

    println!("🚀 Renaming by resolution and repairing format (RGBA)...");
    println!("📂 Target directory: {}", target_dir.display());
    println!("------------------------------");

    let mut report = NormalizeReport::new(&target_dir);

    for entry in listing::sorted_children(&target_dir)? {
        if !entry.file_type().is_dir() {
            continue;
        }
        process_package(entry.path(), &mut report);
    }

    report.finish();
    Ok(report)
}

/// Handle all candidate files of one package folder
fn process_package(package_dir: &Path, report: &mut NormalizeReport) {
    let files = match listing::visible_files(package_dir) {
        Ok(files) => files,
        Err(err) => {
            tracing::debug!("skipping package: {}", err);
            return;
        }
    };

    for entry in files {
        if !rules::has_image_extension(entry.path()) {
            tracing::trace!("not an image: {}", entry.path().display());
            continue;
        }
        process_file(entry.path(), report);
    }
}

/// Probe, rename and normalize one file, recording the outcome in `report`
fn process_file(path: &Path, report: &mut NormalizeReport) {
    let (width, height) = match png::probe_dimensions(path) {
        Ok(size) => size,
        Err(err) => {
            report.record_failure(path, &err);
            return;
        }
    };

    let Some(name) = rules::canonical_name(width, height) else {
        tracing::debug!("no rule for {}x{}: {}", width, height, path.display());
        report.unmatched += 1;
        return;
    };

    let placement = match place(path, name) {
        Ok(placement) => placement,
        Err(err) => {
            report.record_failure(path, &err);
            return;
        }
    };

    match &placement {
        Placement::AlreadyCorrect(_) => report.already_correct += 1,
        Placement::Renamed(new_path) => {
            println!(
                "✏️ [{}x{}] Renamed: {} -> {}",
                width,
                height,
                display_in_package(path),
                new_path.file_name().unwrap_or_default().to_string_lossy()
            );
            report.renamed += 1;
        }
    }

    match png::normalize_to_rgba_png(placement.path()) {
        Ok(_) => report.normalized += 1,
        Err(err) => report.record_failure(placement.path(), &err),
    }
}

/// Move `current` to the canonical `<name>.png` next to it.
///
/// An existing file with the canonical name is never overwritten.
fn place(current: &Path, name: &str) -> Result<Placement, IconError> {
    let target_name = rules::target_file_name(name);

    if current.file_name() == Some(OsStr::new(&target_name)) {
        return Ok(Placement::AlreadyCorrect(current.to_path_buf()));
    }

    let target = current.with_file_name(&target_name);
    if target.exists() {
        return Err(IconError::Collision {
            path: current.to_path_buf(),
            target,
        });
    }

    fs::rename(current, &target).map_err(|e| IconError::io(current, e))?;
    Ok(Placement::Renamed(target))
}

/// `package/file` for console lines
fn display_in_package(path: &Path) -> String {
    let file = path.file_name().unwrap_or_default().to_string_lossy();
    match path.parent().and_then(Path::file_name) {
        Some(package) => format!("{}/{}", package.to_string_lossy(), file),
        None => file.into_owned(),
    }
}
