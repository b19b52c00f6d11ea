// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine and the overlay it renders into.
//!
//! ```text
//!            open(record)              close()            close completes
//!  Closed ───────────────▶ Open ───────────────▶ Closing ────────────────▶ Closed
//!                           │ ▲                     │
//!                           └─┘ next / previous     └── open(record) ──▶ Open
//!                               refresh_locale
//! ```
//!
//! The lightbox only mutates its [`Overlay`]; the view draws whatever the
//! overlay holds. Timed follow-ups are returned as [`Effects`] and fed back
//! through [`Lightbox::apply`].

use crate::config::{
    DEFAULT_ENTRANCE_DEFER_MS, DEFAULT_FADE_MS, DEFAULT_SCALE_IN_DELAY_MS, DEFAULT_SCALE_IN_MS,
    DEFAULT_SWIPE_THRESHOLD, IMAGE_LOADING_OPACITY, IMAGE_START_SCALE,
};
use crate::gallery::catalog::{self, ImageRecord};
use crate::gallery::entry::{self, GalleryEntry};
use crate::gallery::locale::{self, LocaleProvider};
use crate::gallery::transition::{Deferred, Effects, ImageRequest, Step, Tween};
use std::time::{Duration, Instant};

/// Timing parameters of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightboxTimings {
    /// Overlay fade in/out duration.
    pub fade: Duration,
    /// Delay between activating the overlay and starting the fade-in.
    pub entrance_defer: Duration,
    /// Delay between an image loading and its scale-in.
    pub scale_in_delay: Duration,
    /// Duration of the scale-in.
    pub scale_in: Duration,
    /// Horizontal swipe distance that triggers navigation.
    pub swipe_threshold: f32,
}

impl Default for LightboxTimings {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(DEFAULT_FADE_MS),
            entrance_defer: Duration::from_millis(DEFAULT_ENTRANCE_DEFER_MS),
            scale_in_delay: Duration::from_millis(DEFAULT_SCALE_IN_DELAY_MS),
            scale_in: Duration::from_millis(DEFAULT_SCALE_IN_MS),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Open,
    /// Fading out; still counts as open until the fade completes.
    Closing,
}

/// Everything the overlay view draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// The overlay is part of the window.
    pub active: bool,
    /// Scrolling of the grid underneath is blocked.
    pub scroll_locked: bool,
    pub opacity: Tween,
    /// Image currently drawn. Only replaced once the next one has loaded.
    pub image_source: Option<String>,
    pub image_alt: String,
    pub image_opacity: f32,
    pub image_scale: Tween,
    pub title: String,
    pub description: String,
    /// One-based position of the displayed record.
    pub current: usize,
    pub total: usize,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            active: false,
            scroll_locked: false,
            opacity: Tween::settled(0.0),
            image_source: None,
            image_alt: String::new(),
            image_opacity: 1.0,
            image_scale: Tween::settled(1.0),
            title: String::new(),
            description: String::new(),
            current: 0,
            total: 0,
        }
    }
}

/// What rendering needs from the outside world.
#[derive(Clone, Copy)]
pub struct RenderEnv<'a> {
    /// Gallery entries, used for catalog refresh and caption lookup.
    pub entries: &'a [GalleryEntry],
    /// Active locale; the default locale when `None`.
    pub locale: Option<&'a dyn LocaleProvider>,
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    phase: Phase,
    current_index: usize,
    images: Vec<ImageRecord>,
    overlay: Overlay,
    timings: LightboxTimings,
    /// Bumped on every open/close so stale fade continuations are ignored.
    generation: u64,
    /// Bumped on every render so stale image loads are ignored.
    render: u64,
    pending_load: Option<ImageRequest>,
}

impl Lightbox {
    #[must_use]
    pub fn new(timings: LightboxTimings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    /// True from `open` until the close fade has completed.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open | Phase::Closing)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    #[must_use]
    pub fn current(&self) -> Option<&ImageRecord> {
        self.images.get(self.current_index)
    }

    #[must_use]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    #[must_use]
    pub fn timings(&self) -> &LightboxTimings {
        &self.timings
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.overlay.opacity.is_animating(now) || self.overlay.image_scale.is_animating(now)
    }

    /// Opens the lightbox on `record`.
    ///
    /// The catalog is rebuilt first. An empty catalog leaves the lightbox
    /// closed; a record missing from it opens the first image.
    pub fn open(&mut self, record: &ImageRecord, env: &RenderEnv<'_>) -> Effects {
        self.images = catalog::refresh(env.entries);
        if self.images.is_empty() {
            tracing::debug!("lightbox not opened: catalog is empty");
            return Effects::none();
        }

        self.current_index = catalog::position(&self.images, record).unwrap_or_else(|| {
            tracing::debug!(source = %record.source, "record not in catalog, opening first image");
            0
        });

        let rendered = self.render(env);

        self.phase = Phase::Open;
        self.generation += 1;
        self.overlay.active = true;
        self.overlay.scroll_locked = true;
        tracing::debug!(index = self.current_index, "lightbox opened");

        rendered.merge(Effects::deferred(Deferred::after(
            self.timings.entrance_defer,
            Step::RevealOverlay {
                generation: self.generation,
            },
        )))
    }

    /// Starts the fade-out. The lightbox stays open until
    /// [`Step::FinishClose`] is applied.
    pub fn close(&mut self, now: Instant) -> Effects {
        if self.phase != Phase::Open {
            return Effects::none();
        }

        self.phase = Phase::Closing;
        self.generation += 1;
        self.overlay
            .opacity
            .animate_to(0.0, now, Duration::ZERO, self.timings.fade);

        Effects::deferred(Deferred::after(
            self.timings.fade,
            Step::FinishClose {
                generation: self.generation,
            },
        ))
    }

    /// Shows the next image, wrapping to the first.
    pub fn next(&mut self, env: &RenderEnv<'_>) -> Effects {
        if self.images.is_empty() {
            return Effects::none();
        }
        self.current_index = (self.current_index + 1) % self.images.len();
        self.render(env)
    }

    /// Shows the previous image, wrapping to the last.
    pub fn previous(&mut self, env: &RenderEnv<'_>) -> Effects {
        if self.images.is_empty() {
            return Effects::none();
        }
        self.current_index = if self.current_index == 0 {
            self.images.len() - 1
        } else {
            self.current_index - 1
        };
        self.render(env)
    }

    /// Re-renders the caption in the active locale. Does nothing while closed.
    pub fn refresh_locale(&mut self, env: &RenderEnv<'_>) {
        if !self.is_open() {
            return;
        }
        self.render_caption(env);
    }

    /// Replaces the catalog after the gallery changed underneath.
    ///
    /// The displayed record keeps its place when it survives the change;
    /// otherwise the index is clamped into the new catalog.
    pub fn sync_catalog(&mut self, images: Vec<ImageRecord>) {
        let displayed = self.images.get(self.current_index).map(|r| r.origin);
        self.images = images;
        self.current_index = displayed
            .and_then(|origin| self.images.iter().position(|r| r.origin == origin))
            .unwrap_or_else(|| self.current_index.min(self.images.len().saturating_sub(1)));

        if self.is_open() && !self.images.is_empty() {
            self.overlay.current = self.current_index + 1;
            self.overlay.total = self.images.len();
        }
        tracing::debug!(images = self.images.len(), "lightbox catalog resynchronized");
    }

    /// Runs a continuation previously returned by this lightbox.
    pub fn apply(&mut self, step: Step, now: Instant) -> Effects {
        match step {
            Step::RevealOverlay { generation } => {
                if self.phase == Phase::Open && generation == self.generation {
                    self.overlay
                        .opacity
                        .animate_to(1.0, now, Duration::ZERO, self.timings.fade);
                }
                Effects::none()
            }
            Step::FinishClose { generation } => {
                if self.phase == Phase::Closing && generation == self.generation {
                    self.phase = Phase::Closed;
                    self.overlay.active = false;
                    self.overlay.scroll_locked = false;
                    tracing::debug!("lightbox closed");
                }
                Effects::none()
            }
            Step::ScaleInImage { .. } => {
                self.overlay
                    .image_scale
                    .animate_to(1.0, now, Duration::ZERO, self.timings.scale_in);
                Effects::none()
            }
            Step::HideEntry { .. } | Step::ResyncCatalog { .. } => Effects::none(),
        }
    }

    /// Reports that the image requested by render `render` finished loading.
    pub fn image_loaded(&mut self, render: u64) -> Effects {
        let Some(request) = self.take_pending(render) else {
            return Effects::none();
        };

        self.overlay.image_alt = request.alt;
        self.overlay.image_source = Some(request.source);
        self.overlay.image_opacity = 1.0;
        self.overlay.image_scale.set(IMAGE_START_SCALE);

        Effects::deferred(Deferred::after(
            self.timings.scale_in_delay,
            Step::ScaleInImage { render },
        ))
    }

    /// Reports that the image requested by render `render` could not be loaded.
    /// The previous image stays on screen, dimmed.
    pub fn image_failed(&mut self, render: u64) {
        if let Some(request) = self.take_pending(render) {
            tracing::debug!(source = %request.source, "keeping previous image after failed load");
        }
    }

    fn take_pending(&mut self, render: u64) -> Option<ImageRequest> {
        if self.pending_load.as_ref().map(|p| p.render) == Some(render) {
            self.pending_load.take()
        } else {
            None
        }
    }

    fn render(&mut self, env: &RenderEnv<'_>) -> Effects {
        let Some(record) = self.images.get(self.current_index) else {
            return Effects::none();
        };
        let source = record.source.clone();
        let alt = record.title.clone();

        self.render += 1;
        self.overlay.image_opacity = IMAGE_LOADING_OPACITY;
        self.overlay.current = self.current_index + 1;
        self.overlay.total = self.images.len();
        self.render_caption(env);

        let request = ImageRequest {
            render: self.render,
            source,
            alt,
        };
        self.pending_load = Some(request.clone());
        Effects {
            deferred: Vec::new(),
            load: Some(request),
        }
    }

    fn render_caption(&mut self, env: &RenderEnv<'_>) {
        let Some(record) = self.images.get(self.current_index) else {
            return;
        };
        self.overlay.title = record.title.clone();
        self.overlay.description = record.description.clone();

        let active = locale::resolve(env.locale);
        let Some(caption) =
            entry::find(env.entries, record.origin).and_then(|origin| origin.caption(&active))
        else {
            tracing::debug!(locale = %active, origin = %record.origin, "no localized caption");
            return;
        };

        if let Some(title) = caption.title.as_deref().filter(|t| !t.is_empty()) {
            self.overlay.title = title.to_string();
        }
        if let Some(description) = caption.description.as_deref().filter(|d| !d.is_empty()) {
            self.overlay.description = description.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::entry::{Caption, Display, EntryId};
    use crate::gallery::locale::FixedLocale;
    use proptest::prelude::*;

    fn gallery(n: u32) -> Vec<GalleryEntry> {
        (0..n)
            .map(|i| {
                GalleryEntry::new(
                    EntryId(i),
                    format!("img{i}.jpg"),
                    format!("Title {i}"),
                    format!("Description {i}"),
                    "nature",
                )
            })
            .collect()
    }

    fn env(entries: &[GalleryEntry]) -> RenderEnv<'_> {
        RenderEnv {
            entries,
            locale: None,
        }
    }

    fn record(entries: &[GalleryEntry], index: usize) -> ImageRecord {
        ImageRecord::from(&entries[index])
    }

    fn opened(entries: &[GalleryEntry], index: usize) -> Lightbox {
        let mut lightbox = Lightbox::default();
        let _ = lightbox.open(&record(entries, index), &env(entries));
        lightbox
    }

    #[test]
    fn starts_closed() {
        let lightbox = Lightbox::default();
        assert_eq!(lightbox.phase(), Phase::Closed);
        assert!(!lightbox.is_open());
        assert!(!lightbox.overlay().active);
    }

    #[test]
    fn open_on_empty_catalog_is_inert() {
        let entries = Vec::new();
        let stray = ImageRecord {
            source: "x.jpg".into(),
            title: String::new(),
            description: String::new(),
            origin: EntryId(0),
        };
        let mut lightbox = Lightbox::default();
        let effects = lightbox.open(&stray, &env(&entries));

        assert!(effects.is_empty());
        assert!(!lightbox.is_open());
        assert!(!lightbox.overlay().active);
    }

    #[test]
    fn open_selects_record_position() {
        let entries = gallery(5);
        let lightbox = opened(&entries, 3);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_index(), 3);
        assert_eq!(lightbox.overlay().current, 4);
        assert_eq!(lightbox.overlay().total, 5);
        assert!(lightbox.overlay().scroll_locked);
    }

    #[test]
    fn open_with_unknown_record_defaults_to_first() {
        let entries = gallery(3);
        let stray = ImageRecord {
            source: "missing.jpg".into(),
            title: String::new(),
            description: String::new(),
            origin: EntryId(42),
        };
        let mut lightbox = Lightbox::default();
        let _ = lightbox.open(&stray, &env(&entries));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_index(), 0);
    }

    #[test]
    fn open_schedules_reveal_and_requests_image() {
        let entries = gallery(2);
        let mut lightbox = Lightbox::default();
        let effects = lightbox.open(&record(&entries, 1), &env(&entries));

        assert_eq!(
            effects.load.as_ref().map(|l| l.source.as_str()),
            Some("img1.jpg")
        );
        assert!(matches!(
            effects.deferred.as_slice(),
            [Deferred {
                step: Step::RevealOverlay { .. },
                ..
            }]
        ));
        assert_eq!(effects.deferred[0].delay, lightbox.timings().entrance_defer);
    }

    #[test]
    fn reveal_fades_overlay_in() {
        let entries = gallery(2);
        let mut lightbox = Lightbox::default();
        let effects = lightbox.open(&record(&entries, 0), &env(&entries));
        let now = Instant::now();

        let _ = lightbox.apply(effects.deferred[0].step, now);
        assert_eq!(lightbox.overlay().opacity.target(), 1.0);
        assert_eq!(lightbox.overlay().opacity.value(now + lightbox.timings().fade), 1.0);
    }

    #[test]
    fn open_catalog_excludes_hidden_entries() {
        let mut entries = gallery(4);
        entries[1].presentation.display = Display::Hidden;
        let lightbox = opened(&entries, 2);
        assert_eq!(lightbox.images().len(), 3);
        assert_eq!(lightbox.current_index(), 1);
    }

    #[test]
    fn close_flips_state_only_after_fade() {
        let entries = gallery(3);
        let mut lightbox = opened(&entries, 0);
        let now = Instant::now();

        let effects = lightbox.close(now);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.phase(), Phase::Closing);
        assert!(lightbox.overlay().active);
        assert_eq!(effects.deferred[0].delay, lightbox.timings().fade);

        let _ = lightbox.apply(effects.deferred[0].step, now + lightbox.timings().fade);
        assert!(!lightbox.is_open());
        assert!(!lightbox.overlay().active);
        assert!(!lightbox.overlay().scroll_locked);
    }

    #[test]
    fn close_while_closed_is_idempotent() {
        let mut lightbox = Lightbox::default();
        assert!(lightbox.close(Instant::now()).is_empty());
        assert_eq!(lightbox.phase(), Phase::Closed);
    }

    #[test]
    fn double_close_does_not_double_fire() {
        let entries = gallery(3);
        let mut lightbox = opened(&entries, 0);
        let now = Instant::now();

        let first = lightbox.close(now);
        let second = lightbox.close(now);
        assert_eq!(first.deferred.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn reopening_during_fade_out_wins() {
        let entries = gallery(3);
        let mut lightbox = opened(&entries, 0);
        let now = Instant::now();

        let closing = lightbox.close(now);
        let _ = lightbox.open(&record(&entries, 2), &env(&entries));
        let _ = lightbox.apply(closing.deferred[0].step, now + lightbox.timings().fade);

        assert_eq!(lightbox.phase(), Phase::Open);
        assert!(lightbox.overlay().active);
        assert_eq!(lightbox.current_index(), 2);
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let entries = gallery(3);
        let mut lightbox = opened(&entries, 1);
        let env = env(&entries);

        let _ = lightbox.next(&env);
        assert_eq!(lightbox.current_index(), 2);
        let _ = lightbox.next(&env);
        assert_eq!(lightbox.current_index(), 0);
        let _ = lightbox.previous(&env);
        assert_eq!(lightbox.current_index(), 2);
        assert_eq!(lightbox.overlay().title, "Title 2");
    }

    #[test]
    fn navigation_on_empty_catalog_is_noop() {
        let entries = Vec::new();
        let mut lightbox = Lightbox::default();
        assert!(lightbox.next(&env(&entries)).is_empty());
        assert!(lightbox.previous(&env(&entries)).is_empty());
        assert_eq!(lightbox.current_index(), 0);
    }

    #[test]
    fn rendering_dims_image_until_loaded() {
        let entries = gallery(2);
        let mut lightbox = Lightbox::default();
        let effects = lightbox.open(&record(&entries, 0), &env(&entries));
        assert_eq!(lightbox.overlay().image_opacity, IMAGE_LOADING_OPACITY);
        assert!(lightbox.overlay().image_source.is_none());

        let render = effects.load.expect("open requests an image").render;
        let loaded = lightbox.image_loaded(render);

        assert_eq!(lightbox.overlay().image_source.as_deref(), Some("img0.jpg"));
        assert_eq!(lightbox.overlay().image_alt, "Title 0");
        assert_eq!(lightbox.overlay().image_opacity, 1.0);
        assert_eq!(lightbox.overlay().image_scale.target(), IMAGE_START_SCALE);
        assert_eq!(
            loaded.deferred[0],
            Deferred::after(
                lightbox.timings().scale_in_delay,
                Step::ScaleInImage { render }
            )
        );

        let _ = lightbox.apply(loaded.deferred[0].step, Instant::now());
        assert_eq!(lightbox.overlay().image_scale.target(), 1.0);
    }

    #[test]
    fn stale_image_load_is_ignored() {
        let entries = gallery(3);
        let mut lightbox = Lightbox::default();
        let first = lightbox.open(&record(&entries, 0), &env(&entries));
        let _ = lightbox.next(&env(&entries));

        let stale = first.load.expect("open requests an image").render;
        assert!(lightbox.image_loaded(stale).is_empty());
        assert!(lightbox.overlay().image_source.is_none());
    }

    #[test]
    fn failed_load_keeps_previous_image() {
        let entries = gallery(2);
        let mut lightbox = Lightbox::default();
        let first = lightbox.open(&record(&entries, 0), &env(&entries));
        let _ = lightbox.image_loaded(first.load.unwrap().render);

        let next = lightbox.next(&env(&entries));
        lightbox.image_failed(next.load.unwrap().render);

        assert_eq!(lightbox.overlay().image_source.as_deref(), Some("img0.jpg"));
        assert_eq!(lightbox.overlay().image_opacity, IMAGE_LOADING_OPACITY);
    }

    #[test]
    fn alt_text_follows_the_rendered_entry_when_sources_repeat() {
        let entries = vec![
            GalleryEntry::new(EntryId(0), "same.jpg", "First", "", "nature"),
            GalleryEntry::new(EntryId(1), "same.jpg", "Second", "", "nature"),
        ];
        let mut lightbox = Lightbox::default();
        let effects = lightbox.open(&record(&entries, 1), &env(&entries));
        let render = effects.load.expect("open requests an image").render;

        lightbox.sync_catalog(Vec::new());
        let _ = lightbox.image_loaded(render);

        assert_eq!(lightbox.overlay().title, "Second");
        assert_eq!(lightbox.overlay().image_alt, "Second");
    }

    #[test]
    fn localized_caption_overrides_defaults() {
        let fr: unic_langid::LanguageIdentifier = "fr".parse().unwrap();
        let mut entries = gallery(1);
        entries[0] = entries[0].clone().with_caption(
            fr.clone(),
            Caption {
                title: Some("Titre 0".into()),
                description: None,
            },
        );
        let provider = FixedLocale(fr);
        let env = RenderEnv {
            entries: &entries,
            locale: Some(&provider),
        };

        let mut lightbox = Lightbox::default();
        let _ = lightbox.open(&record(&entries, 0), &env);
        assert_eq!(lightbox.overlay().title, "Titre 0");
        assert_eq!(lightbox.overlay().description, "Description 0");
    }

    #[test]
    fn locale_change_without_translation_keeps_default_caption() {
        let entries = gallery(2);
        let mut lightbox = opened(&entries, 1);
        let de = FixedLocale("de".parse().unwrap());

        lightbox.refresh_locale(&RenderEnv {
            entries: &entries,
            locale: Some(&de),
        });
        assert_eq!(lightbox.current_index(), 1);
        assert_eq!(lightbox.overlay().title, "Title 1");
        assert_eq!(lightbox.overlay().description, "Description 1");
    }

    #[test]
    fn refresh_locale_while_closed_does_nothing() {
        let fr: unic_langid::LanguageIdentifier = "fr".parse().unwrap();
        let entries = vec![gallery(1).remove(0).with_caption(
            fr.clone(),
            Caption {
                title: Some("Titre".into()),
                description: None,
            },
        )];
        let provider = FixedLocale(fr);
        let mut lightbox = Lightbox::default();

        lightbox.refresh_locale(&RenderEnv {
            entries: &entries,
            locale: Some(&provider),
        });
        assert!(lightbox.overlay().title.is_empty());
    }

    #[test]
    fn sync_catalog_clamps_index() {
        let entries = gallery(5);
        let mut lightbox = opened(&entries, 4);
        lightbox.sync_catalog(catalog::refresh(&entries[..2]));
        assert_eq!(lightbox.current_index(), 1);

        lightbox.sync_catalog(Vec::new());
        assert_eq!(lightbox.current_index(), 0);
        assert!(lightbox.current().is_none());
    }

    #[test]
    fn sync_catalog_keeps_the_displayed_record() {
        let entries = gallery(4);
        let mut lightbox = opened(&entries, 1);
        assert_eq!((lightbox.overlay().current, lightbox.overlay().total), (2, 4));

        let narrowed = vec![record(&entries, 1), record(&entries, 3)];
        lightbox.sync_catalog(narrowed);

        assert_eq!(lightbox.current_index(), 0);
        assert_eq!(lightbox.current().map(|r| r.origin), Some(EntryId(1)));
        assert_eq!((lightbox.overlay().current, lightbox.overlay().total), (1, 2));

        let _ = lightbox.next(&env(&entries));
        assert_eq!(lightbox.current().map(|r| r.origin), Some(EntryId(3)));
    }

    proptest! {
        #[test]
        fn next_n_times_is_identity(n in 1u32..40, start in 0usize..40) {
            let entries = gallery(n);
            let start = start % n as usize;
            let mut lightbox = opened(&entries, start);
            let env = env(&entries);
            for _ in 0..n {
                let _ = lightbox.next(&env);
            }
            prop_assert_eq!(lightbox.current_index(), start);
        }

        #[test]
        fn previous_undoes_next(n in 1u32..40, start in 0usize..40) {
            let entries = gallery(n);
            let start = start % n as usize;
            let mut lightbox = opened(&entries, start);
            let env = env(&entries);
            let _ = lightbox.next(&env);
            let _ = lightbox.previous(&env);
            prop_assert_eq!(lightbox.current_index(), start);
        }
    }
}
