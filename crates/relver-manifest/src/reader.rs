use std::path::Path;

use crate::VERSION_TOKEN;
use crate::error::ManifestError;

/// Reads the current value of the manifest's version token.
///
/// # Errors
///
/// Returns `ManifestError::Read` if the file cannot be read, or
/// `ManifestError::TokenNotFound` if no `version = "X.Y.Z"` token is
/// present.
pub fn read_version(path: &Path) -> Result<String, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let captures = VERSION_TOKEN
        .captures(&content)
        .ok_or_else(|| ManifestError::TokenNotFound {
            path: path.to_path_buf(),
        })?;

    Ok(captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn reads_the_version_token_value() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("Cargo.toml");
        fs::write(
            &path,
            "[package]\nname = \"demo\"\nversion = \"1.4.0\"\nedition = \"2024\"\n",
        )?;

        assert_eq!(read_version(&path)?, "1.4.0");
        Ok(())
    }

    #[test]
    fn tolerates_whitespace_around_the_equals_sign() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("pyproject.toml");
        fs::write(&path, "version   =   \"0.9.12\"\n")?;

        assert_eq!(read_version(&path)?, "0.9.12");
        Ok(())
    }

    #[test]
    fn missing_token_is_reported_with_the_path() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "[package]\nname = \"demo\"\n")?;

        let err = read_version(&path).expect_err("no token present");

        assert!(matches!(err, ManifestError::TokenNotFound { .. }));
        assert!(err.to_string().contains("Cargo.toml"));
        Ok(())
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = read_version(Path::new("/nonexistent/Cargo.toml")).expect_err("no file");

        assert!(matches!(err, ManifestError::Read { .. }));
    }

    #[test]
    fn prerelease_versions_are_not_token_matches() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "version = \"1.2.3-beta.1\"\n")?;

        // The token is strictly MAJOR.MINOR.PATCH; a prerelease suffix means
        // the quoted string does not match.
        let err = read_version(&path).expect_err("prerelease is not a plain token");
        assert!(matches!(err, ManifestError::TokenNotFound { .. }));
        Ok(())
    }
}
