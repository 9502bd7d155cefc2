// visaguard/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "visaguard")]
#[command(about = "Training-data preparation pipeline for visa-outcome prediction", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Runs the full pipeline (Ingestion -> Validation)
    Run {
        /// Workspace directory
        #[arg(long, default_value = ".")]
        workspace_dir: PathBuf,
    },

    /// 📦 Runs only the ingestion stage (export + train/test split)
    Ingest {
        /// Workspace directory
        #[arg(long, default_value = ".")]
        workspace_dir: PathBuf,
    },

    /// 🧪 Validates existing train/test files against a schema
    Validate {
        /// Train dataset (CSV with header row)
        #[arg(long)]
        train: PathBuf,

        /// Test dataset (CSV with header row)
        #[arg(long)]
        test: PathBuf,

        /// Schema document
        #[arg(long, default_value = "config/schema.yaml")]
        schema: PathBuf,

        /// Where to write the drift report
        #[arg(long, default_value = "drift_report.yaml")]
        report: PathBuf,
    },

    /// 🧹 Cleans pipeline artifacts (artifact/ folder)
    Clean {
        #[arg(long, default_value = ".")]
        workspace_dir: PathBuf,
    },
}
