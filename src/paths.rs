//! # Paths and Defaults
//!
//! This module defines the remote and local path constants used when
//! mirroring the dataset tree.

/// Base URL of the remote file tree the manifests live under.
pub const DEFAULT_BASE_URL: &str =
    "http://astro.physics.uoc.gr/Conferences/Astrostatistics_School_Crete_2019/data/";

/// Name of the manifest listing every data file to mirror.
pub const DATA_MANIFEST_NAME: &str = "datafiles";

/// Name of the manifest listing the files needed for workshop setup.
pub const SETUP_MANIFEST_NAME: &str = "setup_data";

/// Name of the directory segment inserted before each downloaded filename.
pub const DATA_DIRECTORY_NAME: &str = "data";
