//! Pretty URL rewriting for static site builds.
//!
//! Static file servers map `/guide/` to `guide/index.html`. This crate
//! rewrites a rendered site so every page can be served that way:
//!
//! - `about.html` becomes `about/index.html`
//! - `docs/setup.html` becomes `docs/setup/index.html`
//! - `index.html` files, at any depth, stay where they are
//! - directories starting with `_` (build includes) are never entered
//!
//! Rewriting is idempotent: a second run over the same tree changes nothing.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//!
//! let summary = pretty_urls::rewrite(Path::new("dist"))?;
//! println!("{} pages moved", summary.moved);
//! ```

mod error;
mod plan;
mod rewriter;
mod scanner;

pub use error::{FsOp, RewriteError};
pub use plan::{CollisionPolicy, PageMove, RewritePlan};
pub use rewriter::{
    DEFAULT_EXCLUDE_PREFIX, PrettyUrlRewriter, RewriteOptions, RewriteSummary, rewrite,
};
pub use scanner::{HtmlDocument, INDEX_FILENAME};
