//! Rewrite planning.
//!
//! Planning turns the scanned documents into a list of moves without touching
//! the filesystem beyond existence checks. Collisions are found here, so a
//! failing plan leaves the tree exactly as it was.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::RewriteError;
use crate::scanner::{HTML_SUFFIX, HtmlDocument, INDEX_FILENAME};

/// What to do when `page/index.html` already exists next to `page.html`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Fail the whole run before any file is moved.
    #[default]
    Fail,
    /// Replace the existing index document with the page's content.
    Overwrite,
}

/// A single planned move of `source` to `target`.
///
/// All paths are relative to the rewritten root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMove {
    /// Original page (e.g., "blog/post.html").
    pub source: PathBuf,
    /// Directory that will hold the page (e.g., "blog/post").
    pub target_dir: PathBuf,
    /// New location of the page (e.g., "blog/post/index.html").
    pub target: PathBuf,
    /// True if `target` already exists and will be replaced.
    pub overwrites: bool,
}

/// The full set of moves for one run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RewritePlan {
    /// Pages to move, in scan order.
    pub moves: Vec<PageMove>,
    /// Index documents left in place.
    pub kept: Vec<PathBuf>,
}

impl RewritePlan {
    /// Build a plan from scanned documents.
    ///
    /// A page whose target directory would carry the exclude prefix (e.g.
    /// `_draft.html` -> `_draft/`) is rejected, since excluded directories are
    /// never written.
    pub(crate) fn build(
        root: &Path,
        docs: Vec<HtmlDocument>,
        policy: CollisionPolicy,
        exclude_prefix: &str,
    ) -> Result<Self, RewriteError> {
        let mut plan = Self::default();
        let mut claimed: HashSet<PathBuf> = HashSet::new();
        let root_index = Path::new(INDEX_FILENAME);

        for doc in docs {
            if doc.is_index {
                plan.kept.push(doc.relative_path);
                continue;
            }

            let target_dir = target_dir_for(&doc.relative_path);
            if is_excluded_dir(&target_dir, exclude_prefix) {
                return Err(RewriteError::ExcludedTarget {
                    page: doc.relative_path,
                    target_dir,
                });
            }

            let target = target_dir.join(INDEX_FILENAME);
            let overwrites = claimed.contains(&target) || root.join(&target).exists();

            // The root index is never replaced, whatever the policy.
            if overwrites && (policy == CollisionPolicy::Fail || target == root_index) {
                return Err(RewriteError::Collision {
                    page: doc.relative_path,
                    existing: target,
                });
            }

            claimed.insert(target.clone());
            plan.moves.push(PageMove {
                source: doc.relative_path,
                target_dir,
                target,
                overwrites,
            });
        }

        Ok(plan)
    }

    /// True if running this plan would change nothing.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Strip the trailing `.html` from a page's relative path.
///
/// - `about.html` -> `about`
/// - `a/b/c.html` -> `a/b/c`
/// - `v1.2.html` -> `v1.2`
/// - `docs/.html` -> `docs`
pub(crate) fn target_dir_for(rel_path: &Path) -> PathBuf {
    let parent = rel_path.parent().unwrap_or_else(|| Path::new(""));
    match rel_path.file_name() {
        Some(name) if name == HTML_SUFFIX => parent.to_path_buf(),
        _ => rel_path.with_extension(""),
    }
}

/// True if the last segment of `dir` starts with `prefix`.
///
/// Earlier segments are never excluded: the scanner does not descend there.
fn is_excluded_dir(dir: &Path, prefix: &str) -> bool {
    !prefix.is_empty()
        && dir
            .file_name()
            .is_some_and(|name| name.as_encoded_bytes().starts_with(prefix.as_bytes()))
}
