use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::{
    application::{error::ApplicationError, services::MediaStorage},
    domain::models::file::{FileData, StoredMedia},
    services::error::MediaError,
};

/// URL prefix under which the upload directory is served.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Stores uploads as flat files in a local directory, named after the
/// final component of the client's filename. Existing files with the same
/// name are overwritten.
pub struct LocalMediaStorage {
    upload_dir: PathBuf,
    public_base_url: String,
}

impl LocalMediaStorage {
    /// Creates the upload directory (and any missing parents) if needed.
    pub async fn new(upload_dir: PathBuf, public_base_url: &str) -> Result<Self, MediaError> {
        tokio::fs::create_dir_all(&upload_dir).await?;

        Ok(Self {
            upload_dir,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn public_url(&self, filename: &str) -> String {
        format!("{}{}/{}", self.public_base_url, UPLOADS_ROUTE, filename)
    }

    async fn write(&self, file_data: &FileData) -> Result<(PathBuf, String), MediaError> {
        let filename = stored_filename(&file_data.filename)?;

        let path = self.upload_dir.join(&filename);
        tokio::fs::write(&path, &file_data.content).await?;
        Ok((path, filename))
    }
}

/// Keeps only the final path component of a client filename, so uploads
/// always land directly in the upload directory.
fn stored_filename(filename: &str) -> Result<String, MediaError> {
    let normalized = filename.replace('\\', "/");
    let base = normalized
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    if base.is_empty() || base == "." || base == ".." || base.contains('\0') {
        return Err(MediaError::InvalidFilename(filename.to_string()));
    }
    Ok(base.to_string())
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn save(&self, file_data: FileData) -> Result<StoredMedia, ApplicationError> {
        let (path, filename) = self.write(&file_data).await?;

        debug!(
            "Saved media {} ({} bytes) to {}",
            file_data.filename,
            file_data.size(),
            path.display()
        );

        Ok(StoredMedia {
            url: self.public_url(&filename),
            size: file_data.size(),
            filename,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_upload_directories() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b").join("uploads");

        let storage = LocalMediaStorage::new(nested.clone(), "http://x")
            .await
            .unwrap();

        assert!(nested.is_dir());
        assert_eq!(storage.upload_dir(), nested.as_path());
    }

    #[tokio::test]
    async fn saves_file_and_builds_public_url() {
        let root = tempfile::tempdir().unwrap();
        let storage = LocalMediaStorage::new(root.path().to_path_buf(), "https://board.example.com/")
            .await
            .unwrap();

        let stored = storage
            .save(FileData::new(b"png bytes".to_vec(), "x.png".to_string()))
            .await
            .unwrap();

        assert_eq!(stored.url, "https://board.example.com/uploads/x.png");
        assert_eq!(stored.filename, "x.png");
        assert_eq!(stored.size, 9);
        assert_eq!(std::fs::read(root.path().join("x.png")).unwrap(), b"png bytes");
    }

    #[tokio::test]
    async fn same_filename_overwrites() {
        let root = tempfile::tempdir().unwrap();
        let storage = LocalMediaStorage::new(root.path().to_path_buf(), "http://x")
            .await
            .unwrap();

        for content in [b"first upload".to_vec(), b"second".to_vec()] {
            storage
                .save(FileData::new(content, "same.txt".to_string()))
                .await
                .unwrap();
        }

        assert_eq!(std::fs::read(root.path().join("same.txt")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn directory_components_are_stripped() {
        let root = tempfile::tempdir().unwrap();
        let uploads = root.path().join("uploads");
        let storage = LocalMediaStorage::new(uploads.clone(), "http://x")
            .await
            .unwrap();

        for name in ["../escape.txt", "nested/escape.txt", "C:\\docs\\escape.txt", "/abs/escape.txt"] {
            let stored = storage
                .save(FileData::new(name.as_bytes().to_vec(), name.to_string()))
                .await
                .unwrap();
            assert_eq!(stored.filename, "escape.txt", "{name:?}");
            assert_eq!(stored.url, "http://x/uploads/escape.txt");
        }

        assert!(!root.path().join("escape.txt").exists());
        assert_eq!(std::fs::read_dir(&uploads).unwrap().count(), 1);
        assert_eq!(
            std::fs::read(uploads.join("escape.txt")).unwrap(),
            b"/abs/escape.txt"
        );
    }

    #[tokio::test]
    async fn names_without_a_final_component_fail_to_save() {
        let root = tempfile::tempdir().unwrap();
        let uploads = root.path().join("uploads");
        let storage = LocalMediaStorage::new(uploads.clone(), "http://x")
            .await
            .unwrap();

        for name in ["..", ".", "", "/", "photos/..", "bad\0name"] {
            let err = storage
                .save(FileData::new(b"nope".to_vec(), name.to_string()))
                .await
                .unwrap_err();
            assert!(matches!(err, ApplicationError::StorageError(_)), "{name:?}");
        }

        assert_eq!(std::fs::read_dir(&uploads).unwrap().count(), 0);
    }

    #[test]
    fn ordinary_names_are_kept_verbatim() {
        for name in ["photo.jpg", "my notice (1).pdf", "  spaced  ", "..hidden", "a..b"] {
            assert_eq!(stored_filename(name).unwrap(), name);
        }
        assert_eq!(stored_filename("dir/trailing/").unwrap(), "trailing");
    }

    #[tokio::test]
    async fn write_failure_is_a_storage_error() {
        let root = tempfile::tempdir().unwrap();
        let uploads = root.path().join("uploads");
        let storage = LocalMediaStorage::new(uploads.clone(), "http://x")
            .await
            .unwrap();
        std::fs::remove_dir_all(&uploads).unwrap();

        let err = storage
            .save(FileData::new(b"data".to_vec(), "x.png".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::StorageError(_)));
    }
}
