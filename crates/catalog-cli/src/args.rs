use crate::types::{LogLevel, OutputFormat, SortArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Browse a product catalog in a virtualized, responsive grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $CATALOG_CONFIG or the XDG config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Base URL of the product API (overrides config)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Read products from a JSON file instead of the API (overrides config)
    #[arg(long, global = true)]
    pub products_file: Option<PathBuf>,

    /// Show per-product ratings
    #[arg(long, global = true)]
    pub show_ratings: bool,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive product grid (default)
    Browse,

    /// Print the filtered, sorted product list once
    List {
        #[arg(long, default_value = "")]
        query: String,

        #[arg(long, default_value = "all")]
        category: String,

        #[arg(long, default_value = "asc")]
        sort: SortArg,

        /// Container width in terminal cells used for the grid layout
        #[arg(long)]
        width: Option<u16>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Print the available categories
    Categories {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },
}
