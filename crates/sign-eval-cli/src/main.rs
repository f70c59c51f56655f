//! sign-eval CLI - Traffic-sign classification accuracy tool

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// Traffic-sign classification accuracy evaluation tool.
#[derive(Parser)]
#[command(name = "sign-eval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the images and ground-truth types found in a dataset
    Scan {
        /// Dataset root (type directories below it)
        #[arg(env = "SIGN_EVAL_DATASET")]
        path: PathBuf,
    },

    /// Compute per-type classification accuracy for a dataset
    Evaluate {
        /// Dataset root (type directories below it)
        #[arg(env = "SIGN_EVAL_DATASET")]
        path: PathBuf,

        /// CSV file with filename and predicted type columns
        #[arg(short, long)]
        predictions: Option<PathBuf>,

        /// Filename column name in the predictions CSV
        #[arg(long)]
        filename_col: Option<String>,

        /// Predicted type column name in the predictions CSV
        #[arg(long)]
        label_col: Option<String>,

        /// Only report this sign type (red_circle, blue_square, stop_sign)
        #[arg(long)]
        sign_type: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a built-in two-image example
    Demo,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Scan { path } => commands::scan::run(&path),
        Commands::Evaluate {
            path,
            predictions,
            filename_col,
            label_col,
            sign_type,
            json,
        } => commands::evaluate::run(&commands::evaluate::Options {
            path,
            predictions,
            filename_col,
            label_col,
            sign_type,
            json,
        }),
        Commands::Demo => {
            commands::demo::run();
            Ok(())
        }
    }
}
