// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! Value objects shared by the editor view, the submission flow and the
//! editing service adapter.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

// =============================================================================
// ImageMediaType
// =============================================================================

/// Media types the upload picker accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMediaType {
    Png,
    Jpeg,
}

impl ImageMediaType {
    /// File extensions accepted by the picker, lowercase.
    pub const EXTENSIONS: &'static [&'static str] = &["png", "jpg", "jpeg"];

    /// Declares the media type from a file extension (case-insensitive).
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Declares the media type from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Returns the MIME string sent with the upload.
    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for ImageMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

// =============================================================================
// SelectedImage
// =============================================================================

/// The file chosen by the user, held in memory until it is replaced.
///
/// The payload sits behind an `Arc`, so cloning the form state or building an
/// edit request shares it. The HTTP adapter copies it once into the upload body.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedImage {
    name: String,
    media_type: ImageMediaType,
    bytes: Arc<Vec<u8>>,
    dimensions: Option<(u32, u32)>,
}

impl SelectedImage {
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: ImageMediaType, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type,
            bytes: Arc::new(bytes),
            dimensions: None,
        }
    }

    /// Attaches pixel dimensions read from the payload header.
    #[must_use]
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    /// Display name (file name without directories).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn media_type(&self) -> ImageMediaType {
        self.media_type
    }

    /// Raw payload exactly as read from disk.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }
}

// Payloads can be megabytes; keep them out of debug output.
impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

// =============================================================================
// ResultReference
// =============================================================================

/// Reference to the edited image, stored exactly as the service returned it.
///
/// No URL validation happens here: the service may hand back an absolute URL
/// or a path relative to its own origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultReference(String);

impl ResultReference {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the reference carries its own scheme.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl fmt::Display for ResultReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
