//! Model file integrity

use std::fs::File;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::ArtifactError;

/// Compute SHA256 hash of file
pub fn compute_file_hash(path: &Path) -> Result<String, std::io::Error> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Hash the file and, when an expected digest is configured, require a match.
/// Returns the actual digest either way.
pub fn verify_file(path: &Path, expected: Option<&str>) -> Result<String, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound(path.to_path_buf()));
    }

    let actual = compute_file_hash(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match expected {
        Some(expected) if !expected.eq_ignore_ascii_case(&actual) => {
            Err(ArtifactError::ChecksumMismatch {
                expected: expected.to_string(),
                actual,
            })
        }
        Some(_) => {
            tracing::info!("Model checksum verified");
            Ok(actual)
        }
        None => {
            tracing::debug!("No model checksum configured, skipping verification");
            Ok(actual)
        }
    }
}
