//! Applies a rewrite plan to a build output tree.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{FsOp, RewriteError};
use crate::plan::{CollisionPolicy, PageMove, RewritePlan};
use crate::scanner::Scanner;

/// Default prefix marking build-include directories.
pub const DEFAULT_EXCLUDE_PREFIX: &str = "_";

/// Options controlling a rewrite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Behavior when a page's target index document already exists.
    pub collision: CollisionPolicy,
    /// Directories whose name starts with this prefix are skipped entirely.
    pub exclude_prefix: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            collision: CollisionPolicy::default(),
            exclude_prefix: DEFAULT_EXCLUDE_PREFIX.to_owned(),
        }
    }
}

/// Outcome of a rewrite run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Pages moved into `<page>/index.html`.
    pub moved: usize,
    /// Index documents left in place.
    pub kept: usize,
    /// Moves that replaced an existing index document.
    pub overwritten: usize,
}

/// Rewrites `page.html` files into `page/index.html`.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use pretty_urls::{PrettyUrlRewriter, RewriteOptions};
///
/// let rewriter = PrettyUrlRewriter::new(RewriteOptions::default());
/// let summary = rewriter.rewrite(Path::new("dist"))?;
/// println!("moved {} pages", summary.moved);
/// ```
#[derive(Debug, Default)]
pub struct PrettyUrlRewriter {
    options: RewriteOptions,
}

impl PrettyUrlRewriter {
    /// Create a rewriter with the given options.
    #[must_use]
    pub fn new(options: RewriteOptions) -> Self {
        Self { options }
    }

    /// Scan `root` and compute the moves a rewrite would make.
    ///
    /// Nothing under `root` is modified.
    pub fn plan(&self, root: &Path) -> Result<RewritePlan, RewriteError> {
        check_root(root)?;
        let docs = Scanner::new(root, &self.options.exclude_prefix).scan()?;
        RewritePlan::build(
            root,
            docs,
            self.options.collision,
            &self.options.exclude_prefix,
        )
    }

    /// Rewrite every non-index page under `root`.
    ///
    /// Fails before touching anything if `root` is not a directory or if the
    /// plan has a collision under [`CollisionPolicy::Fail`]. An I/O failure
    /// while moving aborts the run; pages already moved stay moved.
    pub fn rewrite(&self, root: &Path) -> Result<RewriteSummary, RewriteError> {
        let start = Instant::now();
        let plan = self.plan(root)?;
        let summary = apply(root, &plan)?;

        tracing::info!(
            root = %root.display(),
            moved = summary.moved,
            kept = summary.kept,
            overwritten = summary.overwritten,
            elapsed_ms = elapsed_ms(start),
            "Pretty URL rewrite completed"
        );

        Ok(summary)
    }
}

/// Rewrite `root` with default options.
pub fn rewrite(root: &Path) -> Result<RewriteSummary, RewriteError> {
    PrettyUrlRewriter::default().rewrite(root)
}

/// Elapsed time since `start` in milliseconds.
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn check_root(root: &Path) -> Result<(), RewriteError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(RewriteError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(RewriteError::NotFound(root.to_path_buf()))
        }
        Err(e) => Err(RewriteError::io(FsOp::ReadDir, root, e)),
    }
}

fn apply(root: &Path, plan: &RewritePlan) -> Result<RewriteSummary, RewriteError> {
    let mut summary = RewriteSummary {
        kept: plan.kept.len(),
        ..RewriteSummary::default()
    };

    for page in &plan.moves {
        move_page(root, page)?;
        summary.moved += 1;
        if page.overwrites {
            summary.overwritten += 1;
        }
    }

    Ok(summary)
}

fn move_page(root: &Path, page: &PageMove) -> Result<(), RewriteError> {
    let source = root.join(&page.source);
    let target_dir = root.join(&page.target_dir);
    let target = root.join(&page.target);

    let content = fs::read(&source).map_err(|e| RewriteError::io(FsOp::Read, &source, e))?;
    fs::create_dir_all(&target_dir)
        .map_err(|e| RewriteError::io(FsOp::CreateDir, &target_dir, e))?;
    fs::write(&target, content).map_err(|e| RewriteError::io(FsOp::Write, &target, e))?;
    fs::remove_file(&source).map_err(|e| RewriteError::io(FsOp::Remove, &source, e))?;

    if page.overwrites {
        tracing::warn!(
            source = %page.source.display(),
            target = %page.target.display(),
            "Overwrote existing index document"
        );
    } else {
        tracing::info!(
            source = %page.source.display(),
            target = %page.target.display(),
            "Moved page"
        );
    }

    Ok(())
}
