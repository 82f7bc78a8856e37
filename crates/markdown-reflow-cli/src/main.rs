use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use imara_diff::intern::InternedInput;
use imara_diff::{Algorithm, UnifiedDiffBuilder, diff};
use markdown_reflow_config::Config;
use markdown_reflow_engine::{DEFAULT_MAX_WIDTH, process};
use walkdir::WalkDir;

/// Structure-aware line-length fixer for markdown files.
///
/// Reflows paragraphs and list items to the configured width while
/// leaving code blocks, tables, front-matter, comments and other
/// layout-sensitive markup untouched.
#[derive(Debug, Parser)]
#[command(name = "markdown-reflow", version)]
struct Cli {
    /// File or directory to process.
    path: PathBuf,

    /// Maximum line length; overrides the config file value.
    #[arg(long)]
    max_line_length: Option<usize>,

    /// Show what would change without modifying files.
    #[arg(long)]
    dry_run: bool,

    /// Print a git-style diff of the changes.
    #[arg(long)]
    diff: bool,

    /// Exit non-zero if any file would need fixing (CI mode).
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    if !cli.path.exists() {
        eprintln!("ERROR: path not found: {}", cli.path.display());
        return Ok(ExitCode::from(2));
    }

    let max_width = cli.max_line_length.unwrap_or_else(configured_width);
    log::debug!("using maximum width {max_width}");

    let files = discover_markdown_files(&cli.path)?;
    if files.is_empty() {
        println!("No markdown files found");
        return Ok(ExitCode::SUCCESS);
    }

    let mut modified = 0usize;
    for file in &files {
        if fix_file(file, max_width, cli.dry_run || cli.check, cli.diff)? {
            modified += 1;
        }
    }

    if modified == 0 {
        if cli.check {
            println!("All files compliant");
        } else {
            println!("No changes needed");
        }
        return Ok(ExitCode::SUCCESS);
    }

    if cli.check {
        eprintln!("{modified} file(s) need fixing");
        return Ok(ExitCode::from(1));
    }

    if cli.dry_run {
        println!("\nWould modify {modified} file(s)");
    } else {
        println!("\nModified {modified} file(s)");
    }
    Ok(ExitCode::SUCCESS)
}

/// Width from the config file, falling back to the built-in default.
fn configured_width() -> usize {
    match Config::load() {
        Ok(Some(config)) => config.max_line_length,
        Ok(None) => DEFAULT_MAX_WIDTH,
        Err(err) => {
            log::warn!("ignoring unreadable config: {err}");
            DEFAULT_MAX_WIDTH
        }
    }
}

/// Collects markdown files: the path itself when it is a file, or a
/// sorted recursive walk when it is a directory.
fn discover_markdown_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(if is_markdown(path) {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", path.display()))?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}

/// Processes one file. Returns true when the file was (or would be)
/// modified.
fn fix_file(path: &Path, max_width: usize, dry_run: bool, show_diff: bool) -> Result<bool> {
    let original = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let fixed = process(&original, max_width);
    if fixed == original {
        log::debug!("compliant: {}", path.display());
        return Ok(false);
    }

    if show_diff {
        print!("{}", render_diff(&original, &fixed, path));
    }

    if dry_run {
        println!("Would fix: {}", path.display());
    } else {
        std::fs::write(path, &fixed).with_context(|| format!("writing {}", path.display()))?;
        println!("Fixed: {}", path.display());
    }
    Ok(true)
}

/// Renders a git-style unified diff between original and fixed content.
fn render_diff(original: &str, fixed: &str, path: &Path) -> String {
    let input = InternedInput::new(original, fixed);
    let hunks = diff(Algorithm::Histogram, &input, UnifiedDiffBuilder::new(&input));
    format!(
        "--- a/{}\n+++ b/{}\n{}",
        path.display(),
        path.display(),
        hunks
    )
}
