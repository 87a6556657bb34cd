use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Storage for paths given relative to the working directory.
    pub fn working_dir() -> Self {
        Self::new(".")
    }

    /// Storage rooted at the directory holding `file`, so paths written inside
    /// a config file resolve next to it.
    pub fn beside(file: impl AsRef<Path>) -> Self {
        match file.as_ref().parent() {
            Some(dir) if !dir.as_os_str().is_empty() => Self::new(dir),
            _ => Self::working_dir(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested/out"));

        storage.write_file("ada.html", b"<html></html>").await.unwrap();

        let written = std::fs::read(temp_dir.path().join("nested/out/ada.html")).unwrap();
        assert_eq!(written, b"<html></html>");
        assert_eq!(storage.read_file("ada.html").await.unwrap(), written);
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let err = storage.read_file("missing.html").await.unwrap_err();
        assert!(matches!(err, crate::utils::error::PortfolioError::IoError(_)));
    }

    #[test]
    fn test_beside_uses_parent_directory() {
        assert_eq!(
            LocalStorage::beside("site/portfolio.toml").base_path(),
            Path::new("site")
        );
        assert_eq!(LocalStorage::beside("portfolio.toml").base_path(), Path::new("."));
    }

    #[tokio::test]
    async fn test_beside_reads_sibling_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("card.html"), "{name}").unwrap();

        let storage = LocalStorage::beside(temp_dir.path().join("portfolio.toml"));
        assert_eq!(storage.read_file("card.html").await.unwrap(), b"{name}");
    }
}
