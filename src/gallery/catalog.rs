// SPDX-License-Identifier: MPL-2.0
//! The ordered list of images the lightbox can browse.

use crate::gallery::entry::{EntryId, GalleryEntry};

/// A displayable image derived from a visible gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub source: String,
    pub title: String,
    pub description: String,
    /// Entry the record was derived from.
    pub origin: EntryId,
}

impl From<&GalleryEntry> for ImageRecord {
    fn from(entry: &GalleryEntry) -> Self {
        Self {
            source: entry.source.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            origin: entry.id,
        }
    }
}

/// Builds the catalog from every entry still in the layout, in document order.
#[must_use]
pub fn refresh(entries: &[GalleryEntry]) -> Vec<ImageRecord> {
    entries
        .iter()
        .filter(|entry| entry.is_displayed())
        .map(ImageRecord::from)
        .collect()
}

/// Position of `record` in `catalog`: by origin first, then by source.
#[must_use]
pub fn position(catalog: &[ImageRecord], record: &ImageRecord) -> Option<usize> {
    catalog
        .iter()
        .position(|candidate| candidate.origin == record.origin)
        .or_else(|| {
            catalog
                .iter()
                .position(|candidate| candidate.source == record.source)
        })
}
