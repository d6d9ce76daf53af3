use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use super::listing;
use crate::error::{DirKind, IconError};
use crate::layout::Layout;
use crate::report::ScaffoldReport;

/// Package name of a source icon: the file name without its last extension
pub fn package_name(file_name: &OsStr) -> OsString {
    Path::new(file_name)
        .file_stem()
        .unwrap_or(file_name)
        .to_os_string()
}

/// Create one package folder under `uxicons/` for every icon in `icon/`.
///
/// Only visible regular files count as icons. Names that already exist under
/// the target are left alone, so running this twice creates nothing new.
/// If `icon/` is missing nothing is touched, not even `uxicons/`.
pub fn scaffold_packages(layout: &Layout) -> Result<ScaffoldReport, IconError> {
    let source_dir = layout.require(DirKind::Source)?;
    let target_dir = layout.target_dir();

    println!("🚀 Creating package folders...");

    if !target_dir.exists() {
        fs::create_dir_all(&target_dir).map_err(|e| IconError::io(&target_dir, e))?;
        tracing::debug!("created target root {}", target_dir.display());
    }

    let mut report = ScaffoldReport::new(&target_dir);

    for entry in listing::visible_files(&source_dir)? {
        let package = package_name(entry.file_name());
        let package_dir = target_dir.join(&package);

        if package_dir.exists() {
            tracing::trace!("package folder already exists: {}", package_dir.display());
            report.existing += 1;
            continue;
        }

        fs::create_dir_all(&package_dir).map_err(|e| IconError::io(&package_dir, e))?;
        let display = package.to_string_lossy().into_owned();
        println!("📁 {}", display);
        report.created.push(display);
    }

    report.finish();
    Ok(report)
}
