use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use lcbft_core::interop::secure::MAX_PAYLOAD_BYTES;
use lcbft_core::LcbftError;

/// Read a JSON file and deserialise into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let value: T = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok(value)
}

/// Read the raw bytes of an import file after validating its metadata.
/// Extension and filename are checked before any content is read; the size
/// ceiling is enforced from filesystem metadata so an oversized file is
/// never loaded into memory.
pub fn read_import_bytes(path: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    validate_import_metadata(path)?;

    let canonical = resolve_path(path)?;
    let size = fs::metadata(&canonical)
        .map_err(|e| format!("Failed to stat '{}': {}", canonical.display(), e))?
        .len();
    if size > MAX_PAYLOAD_BYTES as u64 {
        return Err(LcbftError::PayloadTooLarge {
            size: size as usize,
            limit: MAX_PAYLOAD_BYTES,
        }
        .into());
    }

    let bytes = fs::read(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    Ok(bytes)
}

fn validate_import_metadata(path: &str) -> Result<(), LcbftError> {
    let name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path);

    if !name.to_lowercase().ends_with(".json") {
        return Err(LcbftError::InvalidFileMetadata(
            "only .json files are accepted".to_string(),
        ));
    }
    if name.contains("../") || name.contains("..\\") {
        return Err(LcbftError::InvalidFileMetadata(
            "filename contains path-traversal sequences".to_string(),
        ));
    }
    Ok(())
}

/// Resolve and validate the path.
fn resolve_path(path: &str) -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}
