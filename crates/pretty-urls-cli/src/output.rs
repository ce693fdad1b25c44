//! Terminal reporting for rewrite runs.
//!
//! Planned moves go to stdout so a dry run can be piped; status lines and
//! errors go to stderr.

use std::path::Path;

use console::{Style, Term};
use pretty_urls::{PageMove, RewritePlan, RewriteSummary};

/// Prefix on every status line.
const TAG: &str = "[pretty-urls]";

/// Terminal output formatter.
pub(crate) struct Output {
    stdout: Term,
    stderr: Term,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Print one planned move; overwrites are flagged in yellow.
    pub(crate) fn planned_move(&self, page: &PageMove) {
        let _ = self.stdout.write_line(&move_line(page));
        if page.overwrites {
            let warning = format!("  would overwrite {}", page.target.display());
            let _ = self
                .stderr
                .write_line(&self.yellow.apply_to(warning).to_string());
        }
    }

    /// Print the closing line of a dry run.
    pub(crate) fn dry_run_done(&self, plan: &RewritePlan) {
        let _ = self.stderr.write_line(&dry_run_line(plan));
    }

    /// Print the completion message and counts (green).
    pub(crate) fn rewrite_done(&self, root: &Path, summary: &RewriteSummary) {
        let done = format!(
            "{TAG} rewritten HTML into directories under {}",
            root.display()
        );
        let _ = self
            .stderr
            .write_line(&self.green.apply_to(done).to_string());
        let _ = self.stderr.write_line(&summary_line(summary));
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self
            .stderr
            .write_line(&self.red.apply_to(msg).to_string());
    }
}

fn move_line(page: &PageMove) -> String {
    format!("{} -> {}", page.source.display(), page.target.display())
}

fn dry_run_line(plan: &RewritePlan) -> String {
    format!(
        "{TAG} dry run: {} pages would move, {} index documents kept",
        plan.moves.len(),
        plan.kept.len()
    )
}

fn summary_line(summary: &RewriteSummary) -> String {
    format!(
        "{} moved, {} kept, {} overwritten",
        summary.moved, summary.kept, summary.overwritten
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn about_move() -> PageMove {
        PageMove {
            source: PathBuf::from("about.html"),
            target_dir: PathBuf::from("about"),
            target: PathBuf::from("about/index.html"),
            overwrites: false,
        }
    }

    #[test]
    fn test_move_line() {
        assert_eq!(move_line(&about_move()), "about.html -> about/index.html");
    }

    #[test]
    fn test_dry_run_line() {
        let plan = RewritePlan {
            moves: vec![about_move()],
            kept: vec![PathBuf::from("index.html")],
        };

        assert_eq!(
            dry_run_line(&plan),
            "[pretty-urls] dry run: 1 pages would move, 1 index documents kept"
        );
    }

    #[test]
    fn test_summary_line() {
        let summary = RewriteSummary {
            moved: 3,
            kept: 2,
            overwritten: 1,
        };

        assert_eq!(summary_line(&summary), "3 moved, 2 kept, 1 overwritten");
    }
}
