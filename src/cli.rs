//! # CLI
//!
//! This module defines the data structures used to parse command line
//! arguments when running the program.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// This struct represents the top-level CLI entry point for the tool.
#[derive(Parser)]
#[command(about = "Mirrors the remote dataset tree into local data directories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// This struct represents the different commands available.
#[derive(Subcommand)]
pub enum Commands {
    /// Downloads every file listed in the `datafiles` manifest.
    Download {
        /// Base URL of the remote file tree.
        #[arg(long)]
        base_url: Option<String>,

        /// Directory the mirrored tree is rooted at; defaults to the
        /// current directory.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Downloads the `setup_data` manifest used to prepare a workshop
    /// environment.
    Setup {
        /// Base URL of the remote file tree.
        #[arg(long)]
        base_url: Option<String>,

        /// Directory the mirrored tree is rooted at; defaults to the
        /// current directory.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
