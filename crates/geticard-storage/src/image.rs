//! Card image persistence and retrieval.
//!
//! Images arrive inside JSON bodies as data URLs (`data:image/png;base64,...`)
//! or bare base64. They are decoded, written to the upload root as
//! `{card_id}.{ext}` (gallery: `{card_id}-{index}.{ext}`) and referenced from
//! the card record as `{public_prefix}/{file}`.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use tracing::{info, warn};

use geticard_core::config::StorageConfig;
use geticard_core::error::{AppError, FieldError};
use geticard_core::result::AppResult;
use geticard_core::traits::storage::{ByteStream, StorageProvider};

use crate::providers::local::{LocalStorageProvider, mime_from_path};

/// A stored image opened for streaming.
pub struct StoredImage {
    /// File contents.
    pub stream: ByteStream,
    /// MIME type guessed from the file extension.
    pub content_type: &'static str,
}

impl std::fmt::Debug for StoredImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredImage")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Saves card images to a storage provider and serves them back by name.
#[derive(Debug, Clone)]
pub struct ImageStore {
    provider: Arc<dyn StorageProvider>,
    public_prefix: String,
}

impl ImageStore {
    /// Wrap a storage provider. `public_prefix` is the URL path the upload
    /// root is served under.
    pub fn new(provider: Arc<dyn StorageProvider>, public_prefix: &str) -> Self {
        Self {
            provider,
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Build an image store over a local upload directory.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let provider = LocalStorageProvider::new(&config.upload_dir).await?;
        info!(upload_dir = %config.upload_dir, "Image storage ready");
        Ok(Self::new(Arc::new(provider), &config.public_prefix))
    }

    /// Whether the underlying provider is usable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// Whether `value` already points at a stored or external image.
    pub fn is_reference(&self, value: &str) -> bool {
        value.starts_with(&format!("{}/", self.public_prefix))
            || value.starts_with("http://")
            || value.starts_with("https://")
    }

    /// Persist a profile photo for `card_id` and return its reference.
    ///
    /// References are returned unchanged. An existing file with the same
    /// name is overwritten.
    pub async fn save(&self, image_data: &str, card_id: &str) -> AppResult<String> {
        self.store("foto_perfil", image_data, card_id).await
    }

    /// Persist gallery images for `card_id` in order and return their references.
    ///
    /// On failure, images already written for this gallery are removed.
    pub async fn save_gallery(&self, images: &[String], card_id: &str) -> AppResult<Vec<String>> {
        let mut references = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            let stem = format!("{card_id}-{index}");
            match self.store("galeria", image, &stem).await {
                Ok(reference) => references.push(reference),
                Err(e) => {
                    self.discard(card_id, &references).await;
                    return Err(e);
                }
            }
        }
        Ok(references)
    }

    /// Best-effort removal of the files `card_id` owns among `references`.
    ///
    /// Pass-through references (external URLs, other cards' files) are left
    /// alone. Failures are logged, not returned.
    pub async fn discard(&self, card_id: &str, references: &[String]) {
        let local = format!("{}/", self.public_prefix);
        for reference in references {
            let Some(filename) = reference.strip_prefix(&local) else {
                continue;
            };
            let owned = filename
                .strip_prefix(card_id)
                .is_some_and(|rest| rest.starts_with(['.', '-']));
            if !owned {
                continue;
            }
            if let Err(e) = self.provider.delete(filename).await {
                warn!(file = %filename, error = %e, "Failed to remove orphaned card image");
            }
        }
    }

    /// Open a stored image by file name for streaming.
    pub async fn open(&self, filename: &str) -> AppResult<StoredImage> {
        validate_filename(filename)?;
        let stream = self.provider.read(filename).await?;
        Ok(StoredImage {
            stream,
            content_type: mime_from_path(filename).unwrap_or("application/octet-stream"),
        })
    }

    async fn store(&self, field: &str, image_data: &str, stem: &str) -> AppResult<String> {
        if self.is_reference(image_data) {
            return Ok(image_data.to_string());
        }

        let (data, ext) = decode_image(field, image_data)?;
        let filename = format!("{stem}.{ext}");
        let size = data.len();
        self.provider.write(&filename, Bytes::from(data)).await?;

        info!(file = %filename, bytes = size, "Stored card image");
        Ok(format!("{}/{filename}", self.public_prefix))
    }
}

/// Accept only a single, plain file name.
pub fn validate_filename(filename: &str) -> AppResult<()> {
    let bad = filename.is_empty()
        || filename == "."
        || filename.contains("..")
        || filename.contains(['/', '\\', '\0']);
    if bad {
        return Err(AppError::validation(format!("Invalid file name: {filename:?}")));
    }
    Ok(())
}

fn decode_image(field: &str, image_data: &str) -> AppResult<(Vec<u8>, &'static str)> {
    let invalid = |message: &str| {
        AppError::invalid_fields(
            "Invalid image data",
            vec![FieldError::new(field, "image", message)],
        )
    };

    let (payload, ext) = match image_data.trim().strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| invalid("data URL has no payload"))?;
            let mut parts = header.split(';');
            let mime = parts.next().unwrap_or_default().to_ascii_lowercase();
            if !parts.any(|p| p.eq_ignore_ascii_case("base64")) {
                return Err(invalid("data URL must be base64-encoded"));
            }
            if !mime.starts_with("image/") {
                return Err(invalid("data URL must carry an image type"));
            }
            if mime == "image/svg+xml" {
                return Err(invalid("SVG images are not accepted"));
            }
            (payload, extension_for(&mime))
        }
        None => (image_data, "png"),
    };

    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let data = STANDARD
        .decode(compact.as_bytes())
        .map_err(|_| invalid("not valid base64"))?;
    if data.is_empty() {
        return Err(invalid("image is empty"));
    }
    Ok((data, ext))
}

fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        "image/avif" => "avif",
        _ => "png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use geticard_core::error::ErrorKind;

    async fn store(dir: &tempfile::TempDir) -> ImageStore {
        let config = StorageConfig {
            upload_dir: dir.path().to_str().unwrap().to_string(),
            public_prefix: "/uploads".to_string(),
        };
        ImageStore::from_config(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_save_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(&dir).await;

        let encoded = STANDARD.encode(b"\x89PNG fake");
        let reference = images
            .save(&format!("data:image/jpeg;base64,{encoded}"), "card-0a1b2c3d")
            .await
            .unwrap();

        assert_eq!(reference, "/uploads/card-0a1b2c3d.jpg");
        let written = std::fs::read(dir.path().join("card-0a1b2c3d.jpg")).unwrap();
        assert_eq!(written, b"\x89PNG fake");
    }

    #[tokio::test]
    async fn test_save_bare_base64_defaults_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(&dir).await;

        let reference = images
            .save(&STANDARD.encode(b"img"), "card-0a1b2c3d")
            .await
            .unwrap();
        assert_eq!(reference, "/uploads/card-0a1b2c3d.png");
    }

    #[tokio::test]
    async fn test_references_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(&dir).await;

        for value in ["/uploads/card-1.png", "https://cdn.example.com/a.png"] {
            assert_eq!(images.save(value, "card-1").await.unwrap(), value);
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_rejects_bad_image_data() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(&dir).await;

        let svg = format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(b"<svg xmlns='http://www.w3.org/2000/svg'><script>alert(1)</script></svg>")
        );
        for value in [
            "not base64!",
            "data:text/html;base64,PGI+",
            "data:image/png,raw",
            "",
            svg.as_str(),
        ] {
            let err = images.save(value, "card-1").await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "value {value:?}");
            assert_eq!(err.fields[0].field, "foto_perfil");
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_gallery_names_are_indexed() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(&dir).await;

        let gallery = vec![
            STANDARD.encode(b"a"),
            "/uploads/kept.png".to_string(),
            format!("data:image/webp;base64,{}", STANDARD.encode(b"c")),
        ];
        let references = images.save_gallery(&gallery, "card-9").await.unwrap();
        assert_eq!(
            references,
            vec!["/uploads/card-9-0.png", "/uploads/kept.png", "/uploads/card-9-2.webp"]
        );
    }

    #[tokio::test]
    async fn test_failed_gallery_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(&dir).await;

        let gallery = vec![STANDARD.encode(b"a"), STANDARD.encode(b"b"), "not base64!".to_string()];
        let err = images.save_gallery(&gallery, "card-9").await.unwrap_err();
        assert_eq!(err.fields[0].field, "galeria");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_discard_only_touches_owned_files() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(&dir).await;
        std::fs::write(dir.path().join("card-1.png"), b"other").unwrap();

        let own = images.save(&STANDARD.encode(b"mine"), "card-2").await.unwrap();
        let references = vec![
            own,
            "/uploads/card-1.png".to_string(),
            "https://cdn.example.com/card-2.png".to_string(),
            "/uploads/missing-card-2.png".to_string(),
        ];
        images.discard("card-2", &references).await;

        assert!(!dir.path().join("card-2.png").exists());
        assert!(dir.path().join("card-1.png").exists());
    }

    #[tokio::test]
    async fn test_open_streams_with_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(&dir).await;
        images.save(&STANDARD.encode(b"pixels"), "card-2").await.unwrap();

        let mut opened = images.open("card-2.png").await.unwrap();
        assert_eq!(opened.content_type, "image/png");
        let mut body = Vec::new();
        while let Some(chunk) = opened.stream.next().await {
            body.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(body, b"pixels");

        let err = images.open("missing.png").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_validate_filename() {
        assert!(validate_filename("card-1.png").is_ok());
        for name in ["", "..", "../etc/passwd", "a/b.png", "a\\b.png", "a\0.png"] {
            assert!(validate_filename(name).is_err(), "name {name:?}");
        }
    }
}
