// SPDX-License-Identifier: MPL-2.0
//! Image files: which ones the gallery accepts and how they are decoded.

pub mod loader;

use std::path::Path;

pub use loader::{LoadedImage, PreloadCache};

/// Image file extensions the decoder handles.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Checks the extension of `path`, ignoring case.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
