// SPDX-License-Identifier: MPL-2.0
//! Gallery widget core: entries, catalog, lightbox, swipe input and filter.
//!
//! Nothing in here draws or sleeps. Components mutate presentation state and
//! return [`transition::Effects`] describing what should happen later; the
//! application decides how to wait.

pub mod bootstrap;
pub mod catalog;
pub mod entry;
pub mod filter;
pub mod gesture;
pub mod lightbox;
pub mod locale;
pub mod manifest;
pub mod transition;

pub use catalog::ImageRecord;
pub use entry::{EntryId, GalleryEntry};
pub use filter::{FilterControl, FilterController, FilterTimings, ALL_FILTER};
pub use gesture::{SwipeDirection, SwipeTracker};
pub use lightbox::{Lightbox, LightboxTimings, Overlay, Phase, RenderEnv};
pub use locale::LocaleProvider;
pub use manifest::Gallery;
pub use transition::{Deferred, Effects, ImageRequest, Step, Tween};
