//! Scrawl CLI — Command-line interface for gesture libraries and recognition.
//!
//! Usage:
//!   scrawl init [OPTIONS]             Write the built-in default library
//!   scrawl list [LIBRARY]...          Show library contents
//!   scrawl add <STROKE_FILE> -l NAME  Append a custom template
//!   scrawl recognize <STROKE_FILE>    Classify strokes against the library

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "scrawl",
    about = "Hand-drawn gesture recognition from the command line",
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
    /// Create the data directory and write the built-in default library
    Init {
        /// Data directory (defaults to the configured location)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Overwrite an existing default library
        #[arg(long)]
        force: bool,
    },

    /// Show header info and per-label template counts of libraries
    List {
        /// Library files (defaults to the configured default + custom)
        paths: Vec<PathBuf>,
    },

    /// Append a stroke file as a custom template
    Add {
        /// Stroke file (JSON array of points)
        stroke_file: PathBuf,

        /// Name for the new gesture
        #[arg(short, long)]
        label: String,

        /// Library file to append to (defaults to the custom library)
        #[arg(long)]
        library: Option<PathBuf>,
    },

    /// Classify strokes against the merged default + custom library
    Recognize {
        /// Stroke file (JSON: one stroke or an array of strokes)
        stroke_file: PathBuf,

        /// Default library file
        #[arg(long)]
        library: Option<PathBuf>,

        /// Custom library file (merged after the default)
        #[arg(long)]
        custom: Option<PathBuf>,

        /// Recognition resolution (points per stroke)
        #[arg(short, long)]
        resolution: Option<usize>,

        /// Treat input as raw capture samples and decimate before matching
        #[arg(long)]
        raw: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from the configured settings; --verbose overrides
    // the level.
    let mut logging = scrawl_common::config::AppConfig::load().logging;
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    scrawl_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Init { data_dir, force } => commands::init::run(data_dir, force),
        Commands::List { paths } => commands::list::run(paths),
        Commands::Add {
            stroke_file,
            label,
            library,
        } => commands::add::run(stroke_file, label, library),
        Commands::Recognize {
            stroke_file,
            library,
            custom,
            resolution,
            raw,
        } => commands::recognize::run(stroke_file, library, custom, resolution, raw),
    }
}
