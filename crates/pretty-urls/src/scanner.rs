//! HTML document discovery by filesystem walking.
//!
//! The scanner only identifies files; no content is read at this stage.
//! Directories whose name starts with the exclude prefix (`_` by default)
//! are skipped before descending, so nothing inside them is ever listed.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FsOp, RewriteError};

/// Suffix a file name must end with to be treated as a page.
pub(crate) const HTML_SUFFIX: &str = ".html";

/// Name of the document a static server returns for a directory.
pub const INDEX_FILENAME: &str = "index.html";

/// An HTML file discovered under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    /// Full path (root joined with `relative_path`).
    pub path: PathBuf,
    /// Path relative to the scanned root (e.g., "blog/post.html").
    pub relative_path: PathBuf,
    /// True if the file is named exactly `index.html`.
    pub is_index: bool,
}

/// Walks a build output tree and collects HTML documents.
pub(crate) struct Scanner<'a> {
    root: &'a Path,
    exclude_prefix: &'a str,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(root: &'a Path, exclude_prefix: &'a str) -> Self {
        Self {
            root,
            exclude_prefix,
        }
    }

    /// Scan the tree and return every HTML document outside excluded directories.
    ///
    /// Entries are visited in file name order within each directory.
    pub(crate) fn scan(&self) -> Result<Vec<HtmlDocument>, RewriteError> {
        let mut docs = Vec::new();
        self.scan_directory(self.root, Path::new(""), &mut docs)?;
        Ok(docs)
    }

    fn scan_directory(
        &self,
        dir_path: &Path,
        rel_prefix: &Path,
        docs: &mut Vec<HtmlDocument>,
    ) -> Result<(), RewriteError> {
        let read_dir =
            fs::read_dir(dir_path).map_err(|e| RewriteError::io(FsOp::ReadDir, dir_path, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| RewriteError::io(FsOp::ReadDir, dir_path, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| RewriteError::io(FsOp::ReadDir, entry.path(), e))?;
            entries.push((entry.file_name(), entry.path(), file_type));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, path, file_type) in entries {
            let rel_path = rel_prefix.join(&name);

            if file_type.is_dir() {
                if self.is_excluded(&name) {
                    tracing::debug!(dir = %rel_path.display(), "Skipping excluded directory");
                    continue;
                }
                self.scan_directory(&path, &rel_path, docs)?;
            } else if file_type.is_file() && is_html(&name) {
                docs.push(HtmlDocument {
                    is_index: name == INDEX_FILENAME,
                    path,
                    relative_path: rel_path,
                });
            }
        }

        Ok(())
    }

    fn is_excluded(&self, name: &OsStr) -> bool {
        !self.exclude_prefix.is_empty()
            && name
                .as_encoded_bytes()
                .starts_with(self.exclude_prefix.as_bytes())
    }
}

/// Check the literal, case-sensitive `.html` suffix.
fn is_html(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(HTML_SUFFIX.as_bytes())
}
