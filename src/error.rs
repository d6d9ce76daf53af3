use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two working directories is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    /// `icon/`, the scaffolder input
    Source,
    /// `uxicons/`, the scaffolder output and normalizer input
    Target,
}

impl fmt::Display for DirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirKind::Source => f.write_str("icon"),
            DirKind::Target => f.write_str("uxicons"),
        }
    }
}

/// Errors raised while scaffolding or normalizing icons.
///
/// `MissingDirectory` is always fatal for a stage. The others are fatal only
/// when they hit the directory walk itself; per-file occurrences are counted
/// in the run report and the walk continues.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("cannot find the '{kind}' folder at {}", .path.display())]
    MissingDirectory { kind: DirKind, path: PathBuf },

    #[error("cannot read image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot encode PNG for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "target file already exists, not renaming {} -> {}",
        .path.display(),
        .target.display()
    )]
    Collision { path: PathBuf, target: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        IconError::Decode {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_message_names_folder() {
        let err = IconError::MissingDirectory {
            kind: DirKind::Target,
            path: PathBuf::from("/tmp/nowhere/uxicons"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'uxicons'"));
        assert!(msg.contains("/tmp/nowhere/uxicons"));
    }
}
