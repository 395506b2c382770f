//! OpenAPI file loading with extension and size checks.
//!
//! YAML files are accepted here and read as text, but extraction is
//! JSON-only, so a YAML document fails later with a parse error.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default upload limit (10 MB).
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Default accepted filename suffixes.
pub const DEFAULT_ACCEPT: [&str; 3] = [".json", ".yaml", ".yml"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Only {accept} files can be loaded: {name}")]
    UnsupportedExtension { name: String, accept: String },

    #[error("File must be smaller than {limit_mb}MB: {name} is {size} bytes")]
    TooLarge { name: String, size: u64, limit_mb: u64 },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which files may be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Filename suffixes, matched case-insensitively.
    pub accept: Vec<String>,
    pub max_size_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            accept: DEFAULT_ACCEPT.iter().map(|s| s.to_string()).collect(),
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
        }
    }
}

/// A file that passed the policy and was read as text.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub name: String,
    pub size: u64,
    pub content: String,
}

impl UploadPolicy {
    pub fn with_max_size_mb(mut self, mb: u64) -> Self {
        self.max_size_bytes = mb.saturating_mul(1024 * 1024);
        self
    }

    /// Check a file by name and size before reading it.
    pub fn check(&self, name: &str, size: u64) -> Result<(), UploadError> {
        let lower = name.to_lowercase();
        if !self.accept.iter().any(|ext| lower.ends_with(&ext.to_lowercase())) {
            return Err(UploadError::UnsupportedExtension {
                name: name.to_string(),
                accept: self.accept.join(","),
            });
        }

        if size >= self.max_size_bytes {
            return Err(UploadError::TooLarge {
                name: name.to_string(),
                size,
                limit_mb: self.max_size_bytes / (1024 * 1024),
            });
        }

        Ok(())
    }

    /// Check and read a file as UTF-8 text.
    pub async fn load(&self, path: &Path) -> Result<LoadedFile, UploadError> {
        let read_err = |source: std::io::Error| UploadError::Read {
            path: path.to_path_buf(),
            source,
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let size = tokio::fs::metadata(path).await.map_err(read_err)?.len();

        self.check(&name, size)?;

        let content = tokio::fs::read_to_string(path).await.map_err(read_err)?;
        log::info!("Loaded {name} ({:.2} KB)", size as f64 / 1024.0);

        Ok(LoadedFile {
            name,
            size,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_extensions_case_insensitively() {
        let policy = UploadPolicy::default();
        assert!(policy.check("petstore.json", 10).is_ok());
        assert!(policy.check("PETSTORE.YAML", 10).is_ok());
        assert!(policy.check("api.yml", 10).is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        let err = UploadPolicy::default().check("spec.txt", 10).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedExtension { .. }));
        assert!(err.to_string().contains(".json,.yaml,.yml"));
    }

    #[test]
    fn size_limit_is_exclusive() {
        let policy = UploadPolicy::default().with_max_size_mb(1);
        assert!(policy.check("a.json", 1024 * 1024 - 1).is_ok());
        let err = policy.check("a.json", 1024 * 1024).unwrap_err();
        assert!(matches!(err, UploadError::TooLarge { limit_mb: 1, .. }));
    }

    #[test]
    fn huge_size_limit_saturates() {
        let policy = UploadPolicy::default().with_max_size_mb(u64::MAX);
        assert_eq!(policy.max_size_bytes, u64::MAX);
        assert!(policy.check("a.json", u64::MAX - 1).is_ok());
    }

    #[tokio::test]
    async fn load_reads_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("spec.json");
        std::fs::write(&path, r#"{"paths":{}}"#).expect("write");

        let file = UploadPolicy::default().load(&path).await.expect("load");
        assert_eq!(file.name, "spec.json");
        assert_eq!(file.content, r#"{"paths":{}}"#);
        assert_eq!(file.size, 12);
    }

    #[tokio::test]
    async fn load_checks_policy_before_reading() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "# hi").expect("write");

        let err = UploadPolicy::default().load(&path).await.unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedExtension { .. }));
    }

    #[tokio::test]
    async fn load_missing_file_is_a_read_error() {
        let err = UploadPolicy::default()
            .load(Path::new("/nonexistent/spec.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Read { .. }));
    }
}
