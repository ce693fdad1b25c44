//! Rewrite command implementation.

use std::path::PathBuf;

use clap::Args;
use pretty_urls::{CollisionPolicy, PrettyUrlRewriter, RewriteOptions};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the rewrite command.
#[derive(Args, Debug)]
pub(crate) struct RewriteArgs {
    /// Build output directory to rewrite.
    #[arg(default_value = "dist")]
    pub root: PathBuf,

    /// Print the planned moves without changing anything.
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Replace an existing `<page>/index.html` instead of failing.
    #[arg(long)]
    overwrite: bool,

    /// Enable verbose output (log every moved page and the run timing).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RewriteArgs {
    fn options(&self) -> RewriteOptions {
        RewriteOptions {
            collision: if self.overwrite {
                CollisionPolicy::Overwrite
            } else {
                CollisionPolicy::Fail
            },
            ..RewriteOptions::default()
        }
    }

    /// Execute the rewrite.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let rewriter = PrettyUrlRewriter::new(self.options());

        if self.dry_run {
            let plan = rewriter.plan(&self.root)?;
            for page in &plan.moves {
                output.planned_move(page);
            }
            output.dry_run_done(&plan);
            return Ok(());
        }

        let summary = rewriter.rewrite(&self.root)?;
        output.rewrite_done(&self.root, &summary);
        Ok(())
    }
}
