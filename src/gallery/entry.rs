// SPDX-License-Identifier: MPL-2.0
//! Gallery entries: the thumbnails shown in the grid.

use crate::config::{HIDDEN_ENTRY_OFFSET, HIDDEN_ENTRY_SCALE};
use crate::gallery::transition::Tween;
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};
use unic_langid::LanguageIdentifier;

/// Stable identity of a gallery entry, independent of its image source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Caption text for one locale. Missing fields fall back to the entry defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caption {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Whether an entry takes part in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Shown,
    Hidden,
}

/// Animated presentation of a grid entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub display: Display,
    pub opacity: Tween,
    pub scale: Tween,
    /// Downward offset in logical pixels.
    pub offset_y: Tween,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            display: Display::Shown,
            opacity: Tween::settled(1.0),
            scale: Tween::settled(1.0),
            offset_y: Tween::settled(0.0),
        }
    }
}

impl Presentation {
    /// Animates towards the fully visible look.
    pub fn reveal(&mut self, now: Instant, delay: Duration, duration: Duration) {
        self.display = Display::Shown;
        self.opacity.animate_to(1.0, now, delay, duration);
        self.scale.animate_to(1.0, now, delay, duration);
        self.offset_y.animate_to(0.0, now, delay, duration);
    }

    /// Animates towards the filtered-out look. The entry stays in the layout.
    pub fn conceal(&mut self, now: Instant, delay: Duration, duration: Duration) {
        self.opacity.animate_to(0.0, now, delay, duration);
        self.scale
            .animate_to(HIDDEN_ENTRY_SCALE, now, delay, duration);
        self.offset_y
            .animate_to(HIDDEN_ENTRY_OFFSET, now, delay, duration);
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.opacity.is_animating(now)
            || self.scale.is_animating(now)
            || self.offset_y.is_animating(now)
    }
}

/// A single thumbnail of the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub id: EntryId,
    /// Full-size image shown in the lightbox.
    pub source: String,
    /// Image shown in the grid; the full-size source when absent.
    pub thumbnail: Option<String>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub captions: HashMap<LanguageIdentifier, Caption>,
    pub presentation: Presentation,
    /// Set when the filter decided this entry should be visible.
    pub selected: bool,
}

impl GalleryEntry {
    pub fn new(
        id: EntryId,
        source: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            source: source.into(),
            thumbnail: None,
            title: title.into(),
            description: description.into(),
            category: category.into(),
            captions: HashMap::new(),
            presentation: Presentation::default(),
            selected: true,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, locale: LanguageIdentifier, caption: Caption) -> Self {
        self.captions.insert(locale, caption);
        self
    }

    /// Source to draw in the grid.
    #[must_use]
    pub fn thumbnail_source(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.source)
    }

    /// Whether the entry currently takes part in the layout.
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.presentation.display == Display::Shown
    }

    /// Caption attached for `locale`, if any.
    #[must_use]
    pub fn caption(&self, locale: &LanguageIdentifier) -> Option<&Caption> {
        self.captions.get(locale)
    }
}

/// Finds an entry by id.
#[must_use]
pub fn find(entries: &[GalleryEntry], id: EntryId) -> Option<&GalleryEntry> {
    entries.iter().find(|entry| entry.id == id)
}
