//! CLI entry point for rendexpress

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use rendexpress::logging::init_logging;
use rendexpress::{
    Error, OutputConfig, Result, TextFormatter, print_html, print_json, render_tree, walk_tree,
};

/// Output format
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Both renderings as a single-line JSON object
    #[default]
    Json,
    /// HTML fragment only
    Html,
    /// Plain-text outline only
    Text,
}

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
#[command(name = "rendexpress")]
#[command(about = "Render a directory tree as an HTML fragment and a plain-text outline")]
#[command(version)]
struct Args {
    /// Directory to render
    #[arg(short, long)]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Control color for text output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("rendexpress: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if !args.path.exists() {
        return Err(Error::PathNotFound(args.path.clone()));
    }
    tracing::debug!(path = %args.path.display(), format = ?args.format, "rendering tree");

    match args.format {
        OutputFormat::Json => print_json(&render_tree(&args.path)),
        OutputFormat::Html => print_html(&render_tree(&args.path)),
        OutputFormat::Text => {
            let listing = walk_tree(&args.path);
            let formatter = TextFormatter::new(OutputConfig {
                use_color: should_use_color(args.color),
            });
            formatter.print(&listing)?;
            Ok(())
        }
    }
}
