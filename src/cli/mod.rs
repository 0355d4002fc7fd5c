//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for halal-ingest using clap.

pub mod commands;

use clap::Parser;
use std::path::PathBuf;

/// halal-ingest - apply halal review results to the place database
#[derive(Parser, Debug)]
#[command(name = "halal-ingest")]
#[command(version, about, long_about = None)]
#[command(author = "HalalFood Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to halal-ingest.toml when present)
    #[arg(short, long, env = "HALAL_INGEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HALAL_INGEST_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub ingest: commands::ingest::IngestArgs,
}
