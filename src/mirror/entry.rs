//! # Manifest Entries
//!
//! This module decomposes raw manifest tokens into the remote path to
//! download and the local destination to write it to.

use std::path::{Path, PathBuf};

use crate::{mirror::errors::ManifestError, paths::DATA_DIRECTORY_NAME};

/// One file listed in the manifest, resolved to its download source and
/// local destination.
#[derive(Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    /// The path relative to the base URL, with the `./` prefix stripped.
    pub remote_path: String,

    /// The destination directory, `<folder>/data`.
    pub local_dir: PathBuf,

    /// The destination file, `<folder>/data/<filename>`.
    pub local_file: PathBuf,
}

/// Parses a single whitespace-delimited manifest token.
///
/// Every entry must start with `./`.  After the prefix is stripped, tokens
/// matching one of the reserved manifest names are the manifest's own
/// self-referential entries and are skipped rather than downloaded.  The
/// destination is derived by inserting a `data` directory segment between
/// the entry's folder and its filename, so `./foo/bar.txt` is mirrored to
/// `foo/data/bar.txt`.
///
/// # Arguments
///
/// - `token` - A single manifest token, e.g. `./galaxies/table1.csv`.
/// - `reserved_names` - Manifest names to exclude from downloading.
///
/// # Returns
///
/// `Ok(Some(entry))` for a downloadable file, `Ok(None)` for a reserved
/// name, or a [`ManifestError`] if the token lacks the `./` prefix.
pub fn parse_token(
    token: &str,
    reserved_names: &[String],
) -> Result<Option<ManifestEntry>, ManifestError> {
    let Some(stripped) = token.strip_prefix("./") else {
        return Err(ManifestError::MissingPrefix {
            token: token.to_string(),
        });
    };

    if reserved_names.iter().any(|name| name == stripped) {
        return Ok(None);
    }

    // Entries without a folder land directly in `data/`.
    let (folder, filename) = stripped.rsplit_once('/').unwrap_or(("", stripped));
    let local_dir = Path::new(folder).join(DATA_DIRECTORY_NAME);
    let local_file = local_dir.join(filename);

    Ok(Some(ManifestEntry {
        remote_path: stripped.to_string(),
        local_dir,
        local_file,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserved() -> Vec<String> {
        vec!["datafiles".to_string()]
    }

    /// Tests that the `data` segment is inserted before the filename.
    #[test]
    fn test_destination_inserts_data_segment() {
        let entry = parse_token("./foo/bar.txt", &reserved())
            .unwrap()
            .expect("Entry should not be skipped");

        assert_eq!(entry.remote_path, "foo/bar.txt");
        assert_eq!(entry.local_dir, PathBuf::from("foo/data"));
        assert_eq!(entry.local_file, PathBuf::from("foo/data/bar.txt"));
    }

    /// Tests that nested folders are preserved in the destination.
    #[test]
    fn test_nested_folder() {
        let entry = parse_token("./a/b/c.fits", &reserved())
            .unwrap()
            .expect("Entry should not be skipped");

        assert_eq!(entry.local_file, PathBuf::from("a/b/data/c.fits"));
    }

    /// Tests that a token without a folder lands directly in `data/`.
    #[test]
    fn test_folderless_entry() {
        let entry = parse_token("./table.csv", &reserved())
            .unwrap()
            .expect("Entry should not be skipped");

        assert_eq!(entry.remote_path, "table.csv");
        assert_eq!(entry.local_dir, PathBuf::from("data"));
        assert_eq!(entry.local_file, PathBuf::from("data/table.csv"));
    }

    /// Tests that reserved manifest names are skipped.
    #[test]
    fn test_reserved_name_is_skipped() {
        let result = parse_token("./datafiles", &reserved()).unwrap();
        assert!(result.is_none());
    }

    /// Tests that every name in the reserved set is skipped.
    #[test]
    fn test_multiple_reserved_names() {
        let reserved = vec!["datafiles".to_string(), "setup_data".to_string()];
        assert!(parse_token("./datafiles", &reserved).unwrap().is_none());
        assert!(parse_token("./setup_data", &reserved).unwrap().is_none());
    }

    /// Tests that a token without the `./` prefix is a format error.
    #[test]
    fn test_missing_prefix_is_an_error() {
        let result = parse_token("foo/bar.txt", &reserved());
        assert!(matches!(
            result,
            Err(ManifestError::MissingPrefix { token }) if token == "foo/bar.txt"
        ));
    }

    /// Tests that the prefix check runs before the reserved-name check, so
    /// a bare reserved name is still a format error.
    #[test]
    fn test_bare_reserved_name_is_an_error() {
        let result = parse_token("datafiles", &reserved());
        assert!(matches!(result, Err(ManifestError::MissingPrefix { .. })));
    }
}
