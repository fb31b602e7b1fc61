//! CLI entry point for aliasfix

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use aliasfix::{
    DEFAULT_ALIAS_PREFIX, ReportPrinter, RewriteConfig, Rewriter, RunReport, Scanner,
    print_report_json, rewrite_all,
};
use clap::{Parser, ValueEnum};

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
            // Respect NO_COLOR environment variable (https://no-color.org/)
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
#[command(name = "aliasfix")]
#[command(about = "Rewrite relative ../ imports into alias-rooted paths")]
#[command(version)]
struct Args {
    /// Source root the alias stands for
    #[arg(default_value = "src")]
    root: PathBuf,

    /// Prefix written in place of the source root
    #[arg(short = 'a', long = "alias", default_value = DEFAULT_ALIAS_PREFIX)]
    alias: String,

    /// File extensions to scan (repeatable or comma-separated; default: ts,tsx,js,jsx)
    #[arg(short = 'e', long = "ext", value_delimiter = ',')]
    extensions: Vec<String>,

    /// Honor .gitignore and .ignore files while scanning
    #[arg(long = "gitignore")]
    gitignore: bool,

    /// Skip entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Output the run report as JSON
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn to_config(&self, root: PathBuf) -> RewriteConfig {
        let mut config = RewriteConfig::new(root).with_alias_prefix(self.alias.clone());
        if !self.extensions.is_empty() {
            config = config.with_extensions(&self.extensions);
        }
        config.respect_gitignore = self.gitignore;
        config.ignore_patterns = self.ignore.clone();
        config
    }
}

fn main() {
    let args = Args::parse();

    let root = if args.root.is_absolute() {
        args.root.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.root)
    };

    if !root.is_dir() {
        eprintln!(
            "aliasfix: cannot access '{}': No such directory",
            args.root.display()
        );
        process::exit(1);
    }

    let config = args.to_config(root);
    if config.extensions.is_empty() {
        eprintln!("aliasfix: no usable extensions given");
        process::exit(1);
    }

    let candidates = Scanner::new(config.clone()).scan();
    let rewriter = Rewriter::new(&config);

    let result = if args.json {
        let report = rewrite_all(&rewriter, &candidates, |_| {});
        print_report_json(&report).map(|_| report)
    } else {
        run_with_console(&rewriter, &candidates, should_use_color(args.color))
    };

    match result {
        Ok(report) if report.has_failures() => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("aliasfix: error writing output: {}", e);
            process::exit(1);
        }
    }
}

/// Rewrite candidates while streaming status lines to stdout.
fn run_with_console(
    rewriter: &Rewriter,
    candidates: &[PathBuf],
    use_color: bool,
) -> io::Result<RunReport> {
    let mut printer = ReportPrinter::stdout(use_color);
    printer.print_found(candidates.len())?;

    let mut write_error = None;
    let report = rewrite_all(rewriter, candidates, |outcome| {
        if write_error.is_none() {
            if let Err(e) = printer.print_outcome(outcome) {
                write_error = Some(e);
            }
        }
    });
    if let Some(e) = write_error {
        return Err(e);
    }

    printer.print_summary(&report)?;
    Ok(report)
}
