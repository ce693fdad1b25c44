//! Error types for the rewriter.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    /// Listing a directory.
    ReadDir,
    /// Reading a page.
    Read,
    /// Creating a target directory.
    CreateDir,
    /// Writing a target `index.html`.
    Write,
    /// Deleting the original page.
    Remove,
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Self::ReadDir => "read directory",
            Self::Read => "read",
            Self::CreateDir => "create directory",
            Self::Write => "write",
            Self::Remove => "remove",
        };
        f.write_str(op)
    }
}

/// Error returned by the rewriter.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(
        "Cannot rewrite {}: {} already exists",
        .page.display(),
        .existing.display()
    )]
    Collision { page: PathBuf, existing: PathBuf },

    #[error(
        "Cannot rewrite {}: {} is an excluded directory",
        .page.display(),
        .target_dir.display()
    )]
    ExcludedTarget { page: PathBuf, target_dir: PathBuf },

    #[error("Failed to {op} {}: {source}", .path.display())]
    Io {
        op: FsOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RewriteError {
    /// Create an I/O error with operation and path context.
    pub(crate) fn io(op: FsOp, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
