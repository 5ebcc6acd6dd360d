pub mod demo;
pub mod init;
pub mod process;
pub mod regions;
pub mod report;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "morsel", about = "Pink Morsel sales ETL and price-change analysis.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up morsel: choose a data directory.
    Init {
        /// Path for morsel data (default: ~/Documents/morsel)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Run the ingestion pipeline over raw point-of-sale exports.
    Process {
        /// Directory containing raw *.csv exports (default: data dir)
        #[arg(long)]
        input: Option<String>,
        /// Consolidated output file (default: <data_dir>/processed/pink_morsels_sales.csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Generate reports from the consolidated dataset.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// List the regions present in the consolidated dataset.
    Regions {
        /// Consolidated dataset file (default: <data_dir>/processed/pink_morsels_sales.csv)
        #[arg(long)]
        data: Option<String>,
    },
    /// Load sample point-of-sale exports to explore morsel.
    Demo,
    /// Show current data directory and dataset statistics.
    Status,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Daily sales series.
    Daily {
        /// Region filter ("all" or a region name)
        #[arg(long)]
        region: Option<String>,
        /// Consolidated dataset file
        #[arg(long)]
        data: Option<String>,
    },
    /// Before/after verdict for the price increase.
    Verdict {
        /// Region filter ("all" or a region name)
        #[arg(long)]
        region: Option<String>,
        /// Consolidated dataset file
        #[arg(long)]
        data: Option<String>,
    },
}
