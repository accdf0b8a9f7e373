//! CLI entry point for lds

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use lds::{OutputConfig, StreamingFormatter, StyleTable, TreeWalker, WalkerConfig, logging};
use log::{debug, error, warn};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lds")]
#[command(about = "List directories as a colorful tree")]
#[command(version)]
struct Args {
    /// Paths to list (defaults to the current directory)
    paths: Vec<PathBuf>,

    /// Show hidden files
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Show permissions, size and modification time
    #[arg(short = 'l', long = "long")]
    long: bool,

    /// Reverse the sort order
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Follow symlinks and list their targets in place
    #[arg(short = 'L', long = "dereference")]
    dereference: bool,

    /// Do not show or follow symlink targets
    #[arg(long = "no-symlink")]
    no_symlink: bool,

    /// Descend at most N levels below each root
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("lds: cannot install logger: {}", e);
    }

    let walker = TreeWalker::new(WalkerConfig {
        show_hidden: args.all,
        reverse: args.reverse,
        dereference_links: args.dereference,
        no_symlink: args.no_symlink,
        max_depth: args.max_depth,
    });

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        long_format: args.long,
    };
    let mut formatter = StreamingFormatter::stdout(output_config, StyleTable::new());

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths
    };
    let show_headings = roots.len() > 1;

    let mut failed_roots = 0usize;
    for (i, root) in roots.iter().enumerate() {
        if show_headings {
            if let Err(e) = formatter.write_heading(root, i == 0) {
                error!("error writing output: {}", e);
                process::exit(1);
            }
        }

        match walker.walk(root, &mut formatter) {
            Ok(summary) => debug!(
                "{}: {} directories, {} files, {} unreadable",
                root.display(),
                summary.dirs,
                summary.files,
                summary.skipped
            ),
            Err(e) if e.is_fatal() => {
                error!("{}", e);
                process::exit(1);
            }
            Err(e) => {
                warn!("Error listing {}: {}", root.display(), e);
                failed_roots += 1;
            }
        }
    }

    if let Err(e) = formatter.flush() {
        error!("error writing output: {}", e);
        process::exit(1);
    }

    if failed_roots > 0 {
        process::exit(1);
    }
}
