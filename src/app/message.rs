// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::manifest::Gallery;
use crate::gallery::transition::Step;
use crate::media::LoadedImage;
use crate::ui::{filter_bar, gallery_grid, language_bar, lightbox_overlay};
use iced::Point;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    GalleryLoaded(Result<Gallery, Error>),
    Grid(gallery_grid::Message),
    FilterBar(filter_bar::Message),
    Lightbox(lightbox_overlay::Message),
    LanguageBar(language_bar::Message),
    /// A finger touched the lightbox surface.
    TouchStarted(Point),
    /// The finger was lifted.
    TouchEnded(Point),
    /// The platform interrupted the touch sequence.
    TouchLost,
    /// A deferred transition step is due.
    Step(Step),
    /// The image requested by a lightbox render finished decoding.
    ImageLoaded {
        render: u64,
        source: String,
        result: Result<LoadedImage, Error>,
    },
    /// A startup preload finished decoding.
    Preloaded {
        source: String,
        result: Result<LoadedImage, Error>,
    },
    /// Animation frame tick.
    Tick(Instant),
}

/// Runtime flags passed from `main`.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP 47 format (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Gallery directory; the working directory when absent.
    pub gallery_dir: Option<String>,
}
