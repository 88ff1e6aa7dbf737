//! Tutorcast CLI: command-line interface for annotation scripts and outlines.
//!
//! Usage:
//!   tutorcast parse <FILE>       Parse an annotation script to JSON
//!   tutorcast validate <FILE>    Report skipped lines and out-of-range values
//!   tutorcast outline <FILE>     Extract chapters from a tutorial outline
//!   tutorcast config             Show or initialize the configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tutorcast_common::config::AppConfig;
use tutorcast_script_parser::LineStyle;

mod commands;

#[derive(Parser)]
#[command(
    name = "tutorcast",
    about = "Frame-accurate annotation scripts for tutorial videos",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an annotation script and print the annotations as JSON
    Parse {
        /// Path to the script file
        path: PathBuf,

        /// Frames per second (defaults to the configured value)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        fps: Option<u32>,

        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        /// Accept indented and `- ` bulleted lines, as in outline lists
        #[arg(long)]
        bulleted: bool,
    },

    /// Report skipped lines and out-of-range values in a script
    Validate {
        /// Path to the script file
        path: PathBuf,

        /// Frames per second (defaults to the configured value)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        fps: Option<u32>,

        /// Fail when any range issue is found
        #[arg(long)]
        strict: bool,

        /// Accept indented and `- ` bulleted lines, as in outline lists
        #[arg(long)]
        bulleted: bool,
    },

    /// Extract chapters, assets, and annotations from an outline
    Outline {
        /// Path to the outline markdown file
        path: PathBuf,

        /// Frames per second (defaults to the configured value)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        fps: Option<u32>,

        /// Attach parsed annotation records to each chapter
        #[arg(long)]
        with_annotations: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration to the config path
        #[arg(long)]
        init: bool,
    },
}

fn line_style(bulleted: bool) -> LineStyle {
    if bulleted {
        LineStyle::Bulleted
    } else {
        LineStyle::Plain
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load();

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    tutorcast_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Parse {
            path,
            fps,
            output,
            pretty,
            bulleted,
        } => commands::parse::run(
            path,
            fps.unwrap_or(config.annotations.fps),
            output,
            pretty,
            line_style(bulleted),
        ),
        Commands::Validate {
            path,
            fps,
            strict,
            bulleted,
        } => commands::validate::run(
            path,
            fps.unwrap_or(config.annotations.fps),
            strict || config.annotations.strict,
            config.annotations.display_frames,
            line_style(bulleted),
        ),
        Commands::Outline {
            path,
            fps,
            with_annotations,
        } => commands::outline::run(
            path,
            fps.unwrap_or(config.annotations.fps),
            with_annotations,
        ),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
