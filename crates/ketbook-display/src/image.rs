//! Inline PNG images.

use std::fs;
use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use tracing::debug;

use crate::bundle::{DisplayBundle, IMAGE_PNG, MimeBundleRepr};
use crate::error::{DisplayError, DisplayResult};

/// The raw bytes of one image file, read eagerly and never modified.
///
/// The bytes are not checked for PNG structure; whatever the file holds is
/// what gets encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    contents: Box<[u8]>,
}

impl ImageAsset {
    /// Read the whole file at `path`.
    ///
    /// Fails with [`DisplayError::Io`] if the file is missing, unreadable, or
    /// the read does not complete. The read is attempted once.
    pub fn open(path: impl AsRef<Path>) -> DisplayResult<Self> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|e| DisplayError::io(path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "loaded image asset");
        Ok(Self::from_bytes(contents))
    }

    /// Wrap bytes that are already in memory.
    pub fn from_bytes(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: contents.into().into_boxed_slice(),
        }
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Standard-alphabet, padded base64 of the contents.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.contents)
    }

    /// Single-entry bundle `{"image/png": <base64>}`.
    pub fn to_display_bundle(&self) -> DisplayBundle {
        DisplayBundle::with_entry(IMAGE_PNG, self.to_base64())
    }
}

impl MimeBundleRepr for ImageAsset {
    fn mime_bundle_repr(&self) -> DisplayBundle {
        self.to_display_bundle()
    }
}

/// Build the display bundle for an image asset.
pub fn to_display_bundle(asset: &ImageAsset) -> DisplayBundle {
    asset.to_display_bundle()
}
