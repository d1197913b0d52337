// SPDX-License-Identifier: MPL-2.0
//! Reading user-chosen images from disk.
//!
//! Only PNG and JPEG files are accepted, matching the upload picker's filter.
//! The payload is kept byte-for-byte: nothing here decodes, resizes or
//! re-encodes the image. The header is read once for pixel dimensions so the
//! form can show them next to the file name.

use crate::domain::editing::{ImageMediaType, SelectedImage};
use crate::error::{Error, Result};
use std::io::Cursor;
use std::path::Path;

/// Returns `true` if the path names a file the upload accepts.
#[must_use]
pub fn is_supported_upload(path: &Path) -> bool {
    ImageMediaType::from_path(path).is_some()
}

/// Reads `path` into a [`SelectedImage`].
///
/// # Errors
///
/// Returns [`Error::Io`] if the extension is not PNG/JPEG or the file cannot
/// be read.
pub async fn load_selected_image(path: &Path) -> Result<SelectedImage> {
    let media_type = ImageMediaType::from_path(path)
        .ok_or_else(|| Error::Io(format!("unsupported file type: {}", path.display())))?;

    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let dimensions = read_dimensions(&bytes);
    let image = SelectedImage::new(name, media_type, bytes);

    Ok(match dimensions {
        Some((width, height)) => image.with_dimensions(width, height),
        None => image,
    })
}

/// Reads pixel dimensions from the image header without decoding pixels.
fn read_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image_rs::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, RgbaImage};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        let image = RgbaImage::new(width, height);
        image
            .save_with_format(path, ImageFormat::Png)
            .expect("failed to write png");
    }

    #[test]
    fn supported_upload_accepts_png_and_jpeg_only() {
        assert!(is_supported_upload(&PathBuf::from("a.png")));
        assert!(is_supported_upload(&PathBuf::from("a.JPG")));
        assert!(is_supported_upload(&PathBuf::from("a.jpeg")));
        assert!(!is_supported_upload(&PathBuf::from("a.webp")));
        assert!(!is_supported_upload(&PathBuf::from("README")));
    }

    #[tokio::test]
    async fn load_keeps_bytes_and_reads_dimensions() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("sample.png");
        write_png(&path, 4, 3);
        let on_disk = std::fs::read(&path).expect("failed to read back");

        let image = load_selected_image(&path).await.expect("load should succeed");

        assert_eq!(image.name(), "sample.png");
        assert_eq!(image.media_type(), ImageMediaType::Png);
        assert_eq!(image.bytes(), on_disk.as_slice());
        assert_eq!(image.dimensions(), Some((4, 3)));
    }

    #[tokio::test]
    async fn load_tolerates_undecodable_payload() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not really a jpeg").expect("failed to write");

        let image = load_selected_image(&path).await.expect("load should succeed");

        assert_eq!(image.media_type(), ImageMediaType::Jpeg);
        assert_eq!(image.dimensions(), None);
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = load_selected_image(&dir.path().join("missing.png")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn load_rejects_unsupported_extension() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("clip.gif");
        std::fs::write(&path, b"GIF89a").expect("failed to write");

        let result = load_selected_image(&path).await;
        assert!(matches!(result, Err(Error::Io(message)) if message.contains("unsupported")));
    }
}
