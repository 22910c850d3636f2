//! # Mirror
//!
//! This module implements manifest-driven mirroring of a remote file tree
//! into a local directory structure.

mod entry;
pub mod errors;
pub mod fetcher;
pub mod runner;

pub use entry::{ManifestEntry, parse_token};
pub use fetcher::{FileFetcher, HttpFetcher};
pub use runner::{MirrorConfig, MirrorReport, MirrorRunner};
