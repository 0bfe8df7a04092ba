//! Generic load-validate and write of JSON array collections.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::{StoreError, StoreResult};

/// Load a JSON array collection, creating an empty one if the file is missing.
///
/// Fails with [`StoreError::MalformedFile`] when the file is not JSON and with
/// [`StoreError::InvalidFile`] when `validate` rejects the parsed value.
pub fn load_collection<T, F>(path: &Path, validate: F) -> StoreResult<Vec<T>>
where
    T: DeserializeOwned,
    F: Fn(&Value) -> bool,
{
    if !path.exists() {
        info!("'{}' file does not exist. Creating...", path.display());
        write_collection::<Value>(path, &[])?;
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let data: Value =
        serde_json::from_str(&contents).map_err(|source| StoreError::MalformedFile {
            path: path.to_path_buf(),
            source,
        })?;

    if !validate(&data) {
        return Err(StoreError::InvalidFile {
            path: path.to_path_buf(),
        });
    }

    serde_json::from_value(data).map_err(|_| StoreError::InvalidFile {
        path: path.to_path_buf(),
    })
}

/// Overwrite `path` with `data` as pretty-printed JSON (2-space indent).
///
/// Not transactional: a crash mid-write can leave the file truncated.
pub fn write_collection<T: Serialize>(path: &Path, data: &[T]) -> StoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let contents = serde_json::to_string_pretty(data).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), entries = data.len(), "writing collection");

    fs::write(path, contents).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::formulary_validator;

    #[test]
    fn test_missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formulary.json");

        let loaded: Vec<String> = load_collection(&path, formulary_validator).unwrap();

        assert!(loaded.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_missing_parent_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("formulary.json");

        let loaded: Vec<String> = load_collection(&path, formulary_validator).unwrap();

        assert!(loaded.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formulary.json");
        fs::write(&path, "not json").unwrap();

        let result: StoreResult<Vec<String>> = load_collection(&path, formulary_validator);

        assert!(matches!(result, Err(StoreError::MalformedFile { .. })));
    }

    #[test]
    fn test_invalid_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formulary.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result: StoreResult<Vec<String>> = load_collection(&path, formulary_validator);

        match result {
            Err(StoreError::InvalidFile { path: bad }) => assert_eq!(bad, path),
            other => panic!("expected InvalidFile, got {:?}", other),
        }
    }

    #[test]
    fn test_write_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formulary.json");

        write_collection(&path, &["Aspirin".to_string(), "Codeine".to_string()]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[\n  \"Aspirin\",\n  \"Codeine\"\n]"
        );
    }
}
