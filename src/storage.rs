//! Receipt and product image storage.
//!
//! Uploads are an opaque blob store keyed by filename. Only an allow-listed
//! set of image extensions is accepted; everything else is rejected before
//! any order or ledger code sees it.

use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

/// File extensions accepted for product images and receipts.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Returns true when the filename carries an allow-listed extension.
#[must_use]
pub fn allowed_file(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Reduces an untrusted filename to a safe flat name.
///
/// Path separators and parent components are stripped and remaining
/// characters outside `[A-Za-z0-9._-]` are replaced with `_`, so the result
/// can never escape the upload directory.
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim_start_matches('.');
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Builds the stored name for an uploaded receipt, namespaced by product.
#[must_use]
pub fn receipt_file_name(product_id: i64, original: &str) -> String {
    format!("receipt_{product_id}_{}", sanitize_file_name(original))
}

/// An opaque blob store keyed by filename.
pub trait BlobStore {
    /// Persists `bytes` under `name` and returns the stored reference.
    /// Names failing the extension allow-list are rejected with
    /// [`Error::UnsupportedFileType`].
    fn save(&self, name: &str, bytes: &[u8]) -> impl Future<Output = Result<String>> + Send;
}

/// Blob store backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    /// Creates a store rooted at `root`. The directory is created on first
    /// save, not here.
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl BlobStore for UploadDir {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<String> {
        if !allowed_file(name) {
            return Err(Error::UnsupportedFileType {
                name: name.to_string(),
            });
        }

        let stored = sanitize_file_name(name);
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&stored), bytes).await?;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_allowed_file() {
        assert!(allowed_file("receipt.png"));
        assert!(allowed_file("photo.JPEG"));
        assert!(allowed_file("a.b.webp"));

        assert!(!allowed_file("receipt.pdf"));
        assert!(!allowed_file("script.sh"));
        assert!(!allowed_file("noextension"));
        assert!(!allowed_file(".png"));
    }

    #[test]
    fn test_sanitize_file_name_strips_paths() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("dir/receipt.png"), "receipt.png");
        assert_eq!(sanitize_file_name("a b?.png"), "a_b_.png");
        assert_eq!(sanitize_file_name("ok-name_1.jpg"), "ok-name_1.jpg");
    }

    #[test]
    fn test_receipt_file_name() {
        assert_eq!(
            receipt_file_name(7, "my receipt.png"),
            "receipt_7_my_receipt.png"
        );
    }

    #[tokio::test]
    async fn test_upload_dir_rejects_disallowed_extension() {
        let store = UploadDir::new(std::env::temp_dir().join("doveshop-test-uploads"));
        let result = store.save("malware.exe", b"x").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::UnsupportedFileType { name: _ }
        ));
    }

    #[tokio::test]
    async fn test_upload_dir_round_trip() -> Result<()> {
        let root = std::env::temp_dir().join("doveshop-test-uploads");
        let store = UploadDir::new(&root);

        let stored = store.save("receipt.png", b"fake image bytes").await?;
        assert_eq!(stored, "receipt.png");

        let bytes = tokio::fs::read(root.join(&stored)).await?;
        assert_eq!(bytes, b"fake image bytes");
        Ok(())
    }
}
