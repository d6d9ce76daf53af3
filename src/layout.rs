/// Working tree layout
///
/// Both stages operate on two fixed folders under a shared root:
/// - `icon/` holds the source icon files
/// - `uxicons/` holds one package folder per source icon

use std::path::{Path, PathBuf};

use crate::error::{DirKind, IconError};

/// Folder holding the source icon files
pub const SOURCE_DIR_NAME: &str = "icon";

/// Folder holding the package folders
pub const TARGET_DIR_NAME: &str = "uxicons";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root the layout at the directory that contains the running executable
    pub fn from_executable() -> Result<Self, IconError> {
        let exe = std::env::current_exe().map_err(|e| IconError::io("<current executable>", e))?;
        let exe = exe.canonicalize().map_err(|e| IconError::io(&exe, e))?;
        let dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self::new(dir))
    }

    /// Use `root` when given, the executable's directory otherwise
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, IconError> {
        match root {
            Some(root) => Ok(Self::new(root)),
            None => Self::from_executable(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR_NAME)
    }

    pub fn target_dir(&self) -> PathBuf {
        self.root.join(TARGET_DIR_NAME)
    }

    /// Fail with `MissingDirectory` unless the folder of `kind` exists
    pub(crate) fn require(&self, kind: DirKind) -> Result<PathBuf, IconError> {
        let path = match kind {
            DirKind::Source => self.source_dir(),
            DirKind::Target => self.target_dir(),
        };
        if path.is_dir() {
            Ok(path)
        } else {
            Err(IconError::MissingDirectory { kind, path })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_relative_to_root() {
        let layout = Layout::new("/srv/icons");
        assert_eq!(layout.source_dir(), PathBuf::from("/srv/icons/icon"));
        assert_eq!(layout.target_dir(), PathBuf::from("/srv/icons/uxicons"));
    }

    #[test]
    fn test_require_reports_missing_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = Layout::new(tmp.path());

        match layout.require(DirKind::Source) {
            Err(IconError::MissingDirectory { kind, path }) => {
                assert_eq!(kind, DirKind::Source);
                assert_eq!(path, tmp.path().join("icon"));
            }
            other => panic!("expected MissingDirectory, got {:?}", other),
        }

        std::fs::create_dir(tmp.path().join("icon")).unwrap();
        assert!(layout.require(DirKind::Source).is_ok());
    }

    #[test]
    fn test_resolve_prefers_explicit_root() {
        let layout = Layout::resolve(Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(layout.root(), Path::new("/data"));
    }
}
