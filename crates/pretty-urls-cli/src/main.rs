//! Pretty URL rewriter CLI.
//!
//! Rewrites a static site build so that `page.html` is served as `/page/`:
//!
//! ```text
//! pretty-urls [ROOT]   # ROOT defaults to "dist"
//! ```

mod error;
mod output;
mod rewrite;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use output::Output;
use rewrite::RewriteArgs;

/// Rewrite `page.html` into `page/index.html` for pretty URLs.
#[derive(Parser, Debug)]
#[command(name = "pretty-urls", version, about)]
struct Cli {
    #[command(flatten)]
    args: RewriteArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.args.verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.args.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Build the log filter.
///
/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN
/// (so overwrite warnings are shown).
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use tracing_subscriber::filter::LevelFilter;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pretty-urls").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_root_defaults_to_dist() {
        let cli = parse(&[]);

        assert_eq!(cli.args.root, PathBuf::from("dist"));
        assert!(!cli.args.verbose);
    }

    #[test]
    fn test_rejects_extra_positional() {
        let result = Cli::try_parse_from(["pretty-urls", "a", "b"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_execute_rewrites_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("index.html"), "home").unwrap();
        fs::write(temp_dir.path().join("about.html"), "about").unwrap();
        let root = temp_dir.path().to_str().unwrap();

        parse(&[root]).args.execute().unwrap();

        assert!(temp_dir.path().join("about").join("index.html").exists());
        assert!(!temp_dir.path().join("about.html").exists());
        assert!(temp_dir.path().join("index.html").exists());
    }

    #[test]
    fn test_dry_run_changes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("about.html"), "about").unwrap();
        let root = temp_dir.path().to_str().unwrap();

        parse(&["--dry-run", root]).args.execute().unwrap();

        assert!(temp_dir.path().join("about.html").exists());
        assert!(!temp_dir.path().join("about").exists());
    }

    #[test]
    fn test_collision_fails_unless_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("about")).unwrap();
        fs::write(temp_dir.path().join("about").join("index.html"), "old").unwrap();
        fs::write(temp_dir.path().join("about.html"), "new").unwrap();
        let root = temp_dir.path().to_str().unwrap();

        let err = parse(&[root]).args.execute().unwrap_err();
        assert!(err.to_string().contains("already exists"));

        parse(&["--overwrite", root]).args.execute().unwrap();
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("about").join("index.html")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("dist");

        let err = parse(&[missing.to_str().unwrap()])
            .args
            .execute()
            .unwrap_err();

        assert!(err.to_string().starts_with("Directory not found"));
    }

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_verbose_shows_moves() {
        assert_eq!(log_filter(true, None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            log_filter(true, Some("error")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn test_log_filter_uses_rust_log() {
        assert_eq!(
            log_filter(false, Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_log_filter_invalid_rust_log_falls_back_to_warn() {
        assert_eq!(
            log_filter(false, Some("pretty_urls=loud")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }
}
