// SPDX-License-Identifier: MPL-2.0
//! Start-up wiring: entrance cascade, preload list and locale relay.

use crate::gallery::entry::GalleryEntry;
use crate::gallery::lightbox::{Lightbox, RenderEnv};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Fades every entry in, each one `stagger` later than the previous.
pub fn entrance(entries: &mut [GalleryEntry], now: Instant, stagger: Duration, fade: Duration) {
    for (index, entry) in entries.iter_mut().enumerate() {
        let delay = stagger * u32::try_from(index).unwrap_or(u32::MAX);
        entry.presentation.opacity.set(0.0);
        entry.presentation.opacity.animate_to(1.0, now, delay, fade);
    }
}

/// Full-size sources to warm up, in grid order and without duplicates.
#[must_use]
pub fn preload_sources(entries: &[GalleryEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| seen.insert(entry.source.as_str()))
        .map(|entry| entry.source.clone())
        .collect()
}

/// Relays a locale change to the lightbox. Returns whether it was open.
pub fn forward_locale_change(lightbox: &mut Lightbox, env: &RenderEnv<'_>) -> bool {
    if !lightbox.is_open() {
        return false;
    }
    lightbox.refresh_locale(env);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::catalog::ImageRecord;
    use crate::gallery::entry::{Caption, EntryId};
    use crate::gallery::locale::FixedLocale;

    fn gallery() -> Vec<GalleryEntry> {
        vec![
            GalleryEntry::new(EntryId(0), "a.jpg", "A", "", "x"),
            GalleryEntry::new(EntryId(1), "b.jpg", "B", "", "x"),
            GalleryEntry::new(EntryId(2), "a.jpg", "A again", "", "y"),
        ]
    }

    #[test]
    fn entrance_cascades_by_index() {
        let mut entries = gallery();
        let now = Instant::now();
        let stagger = Duration::from_millis(100);
        let fade = Duration::from_millis(600);
        entrance(&mut entries, now, stagger, fade);

        assert_eq!(entries[0].presentation.opacity.value(now), 0.0);
        // Second entry has not started when the first is halfway.
        let halfway = now + Duration::from_millis(50);
        assert!(entries[0].presentation.opacity.value(halfway) > 0.0);
        assert_eq!(entries[1].presentation.opacity.value(halfway), 0.0);
        assert_eq!(entries[2].presentation.opacity.value(now + stagger * 2 + fade), 1.0);
    }

    #[test]
    fn preload_skips_duplicates() {
        assert_eq!(preload_sources(&gallery()), ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn locale_change_reaches_open_lightbox_only() {
        let fr: unic_langid::LanguageIdentifier = "fr".parse().unwrap();
        let entries = vec![GalleryEntry::new(EntryId(0), "a.jpg", "Dawn", "", "x").with_caption(
            fr.clone(),
            Caption {
                title: Some("Aube".into()),
                description: None,
            },
        )];
        let english = RenderEnv {
            entries: &entries,
            locale: None,
        };
        let french_locale = FixedLocale(fr);
        let french = RenderEnv {
            entries: &entries,
            locale: Some(&french_locale),
        };

        let mut lightbox = Lightbox::default();
        assert!(!forward_locale_change(&mut lightbox, &french));

        let _ = lightbox.open(&ImageRecord::from(&entries[0]), &english);
        assert_eq!(lightbox.overlay().title, "Dawn");
        assert!(forward_locale_change(&mut lightbox, &french));
        assert_eq!(lightbox.overlay().title, "Aube");
    }
}
