// SPDX-License-Identifier: MPL-2.0
//! Category filter for the gallery grid.
//!
//! Applying a filter marks its control active, animates every entry in a
//! cascade and schedules the removal of filtered-out entries once their own
//! transition is over. The catalog is rebuilt when the whole cascade settles.

use crate::config::{DEFAULT_ITEM_TRANSITION_MS, DEFAULT_RESYNC_MS, DEFAULT_STAGGER_MS};
use crate::gallery::catalog::{self, ImageRecord};
use crate::gallery::entry::{Display, EntryId, GalleryEntry};
use crate::gallery::transition::{Deferred, Effects, Step};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use unic_langid::LanguageIdentifier;

/// Filter id matching every category.
pub const ALL_FILTER: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTimings {
    /// Extra delay per entry position.
    pub stagger: Duration,
    /// Duration of one entry's show/hide transition.
    pub item_transition: Duration,
    /// Minimum wait before the catalog is rebuilt.
    pub resync: Duration,
}

impl Default for FilterTimings {
    fn default() -> Self {
        Self {
            stagger: Duration::from_millis(DEFAULT_STAGGER_MS),
            item_transition: Duration::from_millis(DEFAULT_ITEM_TRANSITION_MS),
            resync: Duration::from_millis(DEFAULT_RESYNC_MS),
        }
    }
}

impl FilterTimings {
    /// Time after which a pass over `entries` entries has fully settled.
    #[must_use]
    pub fn settle_window(&self, entries: usize) -> Duration {
        let cascade = self.item_transition + self.stagger * u32::try_from(entries).unwrap_or(u32::MAX);
        cascade.max(self.resync)
    }
}

/// One selectable filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub id: String,
    pub label: String,
    pub labels: HashMap<LanguageIdentifier, String>,
    pub active: bool,
}

impl FilterControl {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            labels: HashMap::new(),
            active: false,
        }
    }

    #[must_use]
    pub fn with_label(mut self, locale: LanguageIdentifier, label: impl Into<String>) -> Self {
        self.labels.insert(locale, label.into());
        self
    }

    /// Label in `locale`, or the default label.
    #[must_use]
    pub fn label_for(&self, locale: &LanguageIdentifier) -> &str {
        self.labels.get(locale).map_or(self.label.as_str(), String::as_str)
    }
}

/// Whether an entry of `category` is visible under `filter_id`.
#[must_use]
pub fn should_show(filter_id: &str, category: &str) -> bool {
    filter_id == ALL_FILTER || category == filter_id
}

#[derive(Debug, Clone, Default)]
pub struct FilterController {
    controls: Vec<FilterControl>,
    timings: FilterTimings,
    /// Bumped on every apply so hides from an earlier pass are dropped.
    pass: u64,
}

impl FilterController {
    /// Creates the controller. Exactly one control ends up active: the first
    /// one already marked, else `all`, else the first control.
    #[must_use]
    pub fn new(mut controls: Vec<FilterControl>, timings: FilterTimings) -> Self {
        let active = controls
            .iter()
            .position(|c| c.active)
            .or_else(|| controls.iter().position(|c| c.id == ALL_FILTER))
            .unwrap_or(0);
        for (index, control) in controls.iter_mut().enumerate() {
            control.active = index == active;
        }
        Self {
            controls,
            timings,
            pass: 0,
        }
    }

    #[must_use]
    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    #[must_use]
    pub fn timings(&self) -> &FilterTimings {
        &self.timings
    }

    /// Id of the active control.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.active)
            .map(|c| c.id.as_str())
    }

    /// Applies `filter_id` to `entries`.
    ///
    /// An id no control declares still filters (hiding every entry whose
    /// category differs) but leaves the active control unchanged.
    pub fn apply(&mut self, filter_id: &str, entries: &mut [GalleryEntry], now: Instant) -> Effects {
        if self.controls.iter().any(|c| c.id == filter_id) {
            for control in &mut self.controls {
                control.active = control.id == filter_id;
            }
        } else {
            tracing::debug!(filter = filter_id, "no control declares this filter");
        }

        self.pass += 1;
        let pass = self.pass;
        let mut effects = Effects::none();

        for (index, entry) in entries.iter_mut().enumerate() {
            let delay = self.timings.stagger * u32::try_from(index).unwrap_or(u32::MAX);
            let show = should_show(filter_id, &entry.category);
            entry.selected = show;

            if show {
                entry
                    .presentation
                    .reveal(now, delay, self.timings.item_transition);
            } else {
                entry
                    .presentation
                    .conceal(now, delay, self.timings.item_transition);
                effects.deferred.push(Deferred::after(
                    self.timings.item_transition + delay,
                    Step::HideEntry {
                        pass,
                        entry: entry.id,
                    },
                ));
            }
        }

        let shown = entries.iter().filter(|e| e.selected).count();
        tracing::debug!(filter = filter_id, shown, total = entries.len(), "filter applied");

        effects.deferred.push(Deferred::after(
            self.timings.settle_window(entries.len()),
            Step::ResyncCatalog { pass },
        ));
        effects
    }

    /// Applies the active control to freshly loaded entries, without
    /// animation. Entries outside it leave the layout at once.
    pub fn select_initial(&self, entries: &mut [GalleryEntry]) {
        let Some(active) = self.active_id() else {
            return;
        };
        for entry in entries.iter_mut() {
            entry.selected = should_show(active, &entry.category);
            if !entry.selected {
                entry.presentation.display = Display::Hidden;
            }
        }
        tracing::debug!(filter = active, "initial filter selected");
    }

    /// Removes a concealed entry from the layout. Ignored when a later pass
    /// selected the entry again.
    pub fn complete_hide(&self, pass: u64, id: EntryId, entries: &mut [GalleryEntry]) {
        if pass != self.pass {
            return;
        }
        if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
            if !entry.selected {
                entry.presentation.display = Display::Hidden;
            }
        }
    }

    /// Rebuilt catalog once pass `pass` has settled; `None` if superseded.
    #[must_use]
    pub fn resync(&self, pass: u64, entries: &[GalleryEntry]) -> Option<Vec<ImageRecord>> {
        (pass == self.pass).then(|| catalog::refresh(entries))
    }
}
