use crate::common::error::{AppError, ServiceResult};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Public URL prefix under which stored files are served back.
pub const PUBLIC_PREFIX: &str = "uploads";

#[derive(Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_size: usize,
}

#[derive(Debug)]
pub struct StoredUpload {
    pub file_name: String,
    /// Relative path as returned to clients, e.g. `uploads/msg_....png`.
    pub public_path: String,
    pub original_name: String,
    pub size: usize,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, max_size: usize) -> Self {
        Self {
            dir: dir.into(),
            max_size,
        }
    }

    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Persists one image part to disk. Only `image/*` payloads are accepted
    /// and files above the configured cap are rejected before touching disk.
    pub async fn store_image(
        &self,
        prefix: &str,
        original_name: &str,
        content_type: Option<&str>,
        data: &[u8],
    ) -> ServiceResult<StoredUpload> {
        if !content_type.is_some_and(|ct| ct.starts_with("image/")) {
            return Err(AppError::UploadsNotAnImage);
        }
        if data.len() > self.max_size {
            return Err(AppError::UploadsTooLarge);
        }

        let file_name = unique_file_name(prefix, original_name);
        tokio::fs::write(self.dir.join(&file_name), data).await?;
        Ok(StoredUpload {
            public_path: format!("{PUBLIC_PREFIX}/{file_name}"),
            original_name: original_name.to_owned(),
            size: data.len(),
            file_name,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// `<prefix>_<unix-millis>-<random-9-digits><original extension>`, mirroring
/// the naming scheme the mobile client already expects.
pub fn unique_file_name(prefix: &str, original_name: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = rand::random_range(0..1_000_000_000u32);
    let ext = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();
    format!("{prefix}_{millis}-{suffix}{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_keep_prefix_and_extension() {
        let name = unique_file_name("msg", "photo.PNG");
        assert!(name.starts_with("msg_"));
        assert!(name.ends_with(".PNG"));

        let bare = unique_file_name("comment", "noext");
        assert!(bare.starts_with("comment_"));
        assert!(!bare.contains('.'));
    }

    #[tokio::test]
    async fn store_rejects_non_images_and_oversized_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path(), 8);

        let err = store
            .store_image("msg", "a.txt", Some("text/plain"), b"hello")
            .await
            .unwrap_err();
        assert_eq!(err, AppError::UploadsNotAnImage);

        let err = store
            .store_image("msg", "a.png", Some("image/png"), &[0u8; 16])
            .await
            .unwrap_err();
        assert_eq!(err, AppError::UploadsTooLarge);
    }

    #[tokio::test]
    async fn store_writes_file_and_returns_public_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path(), 1024);
        store.ensure_dir().await.unwrap();

        let stored = store
            .store_image("goods", "chair.jpg", Some("image/jpeg"), b"\xff\xd8")
            .await
            .unwrap();
        assert_eq!(stored.public_path, format!("uploads/{}", stored.file_name));
        assert_eq!(stored.original_name, "chair.jpg");
        assert_eq!(stored.size, 2);
        assert!(dir.path().join(&stored.file_name).exists());
    }
}
