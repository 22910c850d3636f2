//! # Dataset mirror

mod cli;
pub mod mirror;
mod paths;

use clap::Parser;

use crate::{
    cli::{Cli, Commands},
    mirror::{HttpFetcher, MirrorConfig, MirrorRunner},
};

/// Mirrors the remote dataset tree.
///
/// Reads the command-line arguments supplied. If none are given, download
/// all files listed in the `datafiles` manifest. If argument "setup" is
/// given, download the files listed in the `setup_data` manifest instead.
pub fn run() {
    let cli = Cli::parse();
    let config = match cli.command {
        None => MirrorConfig::download(None, None),
        Some(Commands::Download { base_url, output }) => MirrorConfig::download(base_url, output),
        Some(Commands::Setup { base_url, output }) => MirrorConfig::setup(base_url, output),
    };

    let runner = MirrorRunner::new(config, HttpFetcher::new());
    let report = runner.run().expect("Failed to mirror manifest entries");
    println!(
        "Downloaded {} files ({} manifest entries skipped).",
        report.downloaded, report.skipped
    );
}
