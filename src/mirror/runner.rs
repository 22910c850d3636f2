//! # Mirror Runner
//!
//! This module downloads every file listed in a remote manifest.
//!
//! First it fetches the manifest from the base URL.  Then it walks the
//! listed entries in order, creating each destination directory and
//! downloading the file into it.

use std::{fs, path::PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    mirror::{
        entry::{self, ManifestEntry},
        errors::MirrorError,
        fetcher::FileFetcher,
    },
    paths::{DATA_MANIFEST_NAME, DEFAULT_BASE_URL, SETUP_MANIFEST_NAME},
};

/// Configuration for a mirror run.
#[derive(Debug)]
pub struct MirrorConfig {
    /// Base URL of the remote file tree, always ending with `/`.
    pub base_url: String,

    /// Name of the manifest resource to fetch from the base URL.
    pub manifest_name: String,

    /// Manifest names excluded from downloading.
    pub reserved_names: Vec<String>,

    /// Local directory the mirrored tree is rooted at.
    pub output_root: PathBuf,
}

impl MirrorConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Arguments
    ///
    /// - `base_url` - Base URL of the remote file tree; a trailing `/` is
    ///                appended if missing.
    /// - `manifest_name` - Manifest resource name, fetched relative to the
    ///                     base URL.
    /// - `reserved_names` - Manifest names to exclude from downloading.
    /// - `output_root` - Directory the mirrored tree is rooted at.
    pub fn new(
        base_url: String,
        manifest_name: &str,
        reserved_names: Vec<String>,
        output_root: PathBuf,
    ) -> Self {
        let mut base_url = base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        MirrorConfig {
            base_url,
            manifest_name: manifest_name.to_string(),
            reserved_names,
            output_root,
        }
    }

    /// Creates the configuration for the `datafiles` manifest.
    ///
    /// `None` arguments fall back to the default base URL and the current
    /// directory.
    pub fn download(base_url: Option<String>, output_root: Option<PathBuf>) -> Self {
        Self::new(
            base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            DATA_MANIFEST_NAME,
            vec![DATA_MANIFEST_NAME.to_string()],
            output_root.unwrap_or_else(|| PathBuf::from(".")),
        )
    }

    /// Creates the configuration for the `setup_data` manifest.
    ///
    /// Both manifest names are reserved here, so a setup manifest that
    /// lists the data manifest does not mirror it as a file.
    pub fn setup(base_url: Option<String>, output_root: Option<PathBuf>) -> Self {
        Self::new(
            base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            SETUP_MANIFEST_NAME,
            vec![
                DATA_MANIFEST_NAME.to_string(),
                SETUP_MANIFEST_NAME.to_string(),
            ],
            output_root.unwrap_or_else(|| PathBuf::from(".")),
        )
    }
}

/// Counts of what a mirror run did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// Number of files downloaded.
    pub downloaded: usize,

    /// Number of reserved manifest entries skipped.
    pub skipped: usize,
}

/// Downloads every file listed in a remote manifest.
///
/// The fetcher is injected so the runner can be tested against a mock
/// instead of a live server.
pub struct MirrorRunner<F: FileFetcher> {
    config: MirrorConfig,
    fetcher: F,
}

impl<F: FileFetcher> MirrorRunner<F> {
    /// Creates a runner from a configuration and a fetcher.
    pub fn new(config: MirrorConfig, fetcher: F) -> MirrorRunner<F> {
        MirrorRunner { config, fetcher }
    }

    /// Fetches the manifest and mirrors every entry it lists.
    ///
    /// A progress bar tracks the number of manifest entries processed.
    /// Entries are processed strictly in manifest order, one blocking
    /// download at a time, and the first error aborts the run; entries
    /// before the failing one have already been downloaded.
    ///
    /// # Side Effects
    ///
    /// - Creates `<folder>/data/` directories under the output root.
    /// - Creates or overwrites one file per non-reserved manifest entry.
    ///
    /// # Returns
    ///
    /// Returns a [`MirrorReport`] on success, or a [`MirrorError`] if any
    /// step fails.
    pub fn run(&self) -> Result<MirrorReport, MirrorError> {
        let manifest_url = format!("{}{}", self.config.base_url, self.config.manifest_name);
        let manifest_body = self.fetcher.fetch_text(&manifest_url)?;
        let tokens: Vec<&str> = manifest_body.split_whitespace().collect();

        let progress_bar = ProgressBar::new(tokens.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.white/white} {pos}/{len} {msg}")
                .map_err(|error| MirrorError::ProgressBar(error.to_string()))?
                .progress_chars("##-"),
        );
        progress_bar.set_message("Mirroring manifest entries...");

        let mut report = MirrorReport::default();
        for token in tokens {
            match entry::parse_token(token, &self.config.reserved_names)? {
                Some(entry) => {
                    self.download_entry(&entry)?;
                    report.downloaded += 1;
                }
                None => report.skipped += 1,
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Mirrored all manifest entries!");
        Ok(report)
    }

    /// Downloads a single manifest entry.
    ///
    /// Ensures the entry's `<folder>/data` directory exists under the
    /// output root, then downloads `<base_url><remote_path>` into it.
    ///
    /// # Returns
    ///
    /// The number of bytes written on success, or a [`MirrorError`] on
    /// failure.
    fn download_entry(&self, entry: &ManifestEntry) -> Result<u64, MirrorError> {
        let local_dir = self.config.output_root.join(&entry.local_dir);
        fs::create_dir_all(&local_dir).map_err(|error| MirrorError::IoCreate {
            path: local_dir.clone(),
            error,
        })?;

        let url = format!("{}{}", self.config.base_url, entry.remote_path);
        let local_file = self.config.output_root.join(&entry.local_file);
        self.fetcher.fetch_to_file(&url, &local_file)
    }
}
