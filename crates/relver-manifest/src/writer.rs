use std::path::Path;

use regex::NoExpand;

use crate::VERSION_TOKEN;
use crate::error::ManifestError;

/// Substitutes the first version token occurrence with the given version.
///
/// Everything outside the token is preserved byte for byte.
///
/// # Errors
///
/// Returns `ManifestError::Read`/`Write` on I/O failure, or
/// `ManifestError::TokenNotFound` if the manifest holds no
/// `version = "X.Y.Z"` token to replace.
pub fn write_version(path: &Path, version: &str) -> Result<(), ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !VERSION_TOKEN.is_match(&content) {
        return Err(ManifestError::TokenNotFound {
            path: path.to_path_buf(),
        });
    }

    let replacement = format!("version = \"{version}\"");
    let updated = VERSION_TOKEN.replace(&content, NoExpand(&replacement));

    std::fs::write(path, updated.as_ref()).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}
