// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid, the filter and
//! the lightbox.
//!
//! The `App` struct owns the gallery entries and the widget components, and
//! translates messages into side effects: timers for deferred transition
//! steps, image decoding, config persistence.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, ThemeChoice};
use crate::error::Error;
use crate::gallery::entry::GalleryEntry;
use crate::gallery::filter::FilterController;
use crate::gallery::gesture::SwipeTracker;
use crate::gallery::lightbox::Lightbox;
use crate::gallery::manifest;
use crate::i18n::fluent::I18n;
use crate::media::PreloadCache;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Where the gallery is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryStatus {
    Loading,
    Ready,
    Failed(Error),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Whether preference changes are written back to `settings.toml`.
    persist_config: bool,
    gallery_dir: PathBuf,
    status: GalleryStatus,
    gallery_title: Option<String>,
    entries: Vec<GalleryEntry>,
    filter: FilterController,
    lightbox: Lightbox,
    swipe: SwipeTracker,
    cache: PreloadCache,
    /// Decoded image currently shown by the lightbox.
    displayed: Option<image::Handle>,
    /// Clock the view samples animations with.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_dir", &self.gallery_dir)
            .field("status", &self.status)
            .field("entries", &self.entries.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences, then starts loading the gallery in the background.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let mut app = Self::with_config(flags, config);
        app.persist_config = true;

        let dir = app.gallery_dir.clone();
        let task = Task::perform(async move { manifest::load(&dir) }, Message::GalleryLoaded);
        (app, task)
    }

    /// Builds the state without touching the disk.
    pub fn with_config(flags: Flags, config: Config) -> Self {
        let i18n = I18n::new(flags.lang, &config);
        let gallery_dir = flags
            .gallery_dir
            .map_or_else(|| PathBuf::from("."), PathBuf::from);

        Self {
            i18n,
            persist_config: false,
            gallery_dir,
            status: GalleryStatus::Loading,
            gallery_title: None,
            entries: Vec::new(),
            filter: FilterController::new(Vec::new(), config.filter_timings()),
            lightbox: Lightbox::new(config.lightbox_timings()),
            swipe: SwipeTracker::new(config.lightbox_timings().swipe_threshold),
            cache: PreloadCache::new(
                config.preload_cache_images(),
                config.gallery.preload.unwrap_or(true),
            ),
            displayed: None,
            now: Instant::now(),
            config,
        }
    }

    pub fn status(&self) -> &GalleryStatus {
        &self.status
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn filter(&self) -> &FilterController {
        &self.filter
    }

    fn title(&self) -> String {
        match &self.gallery_title {
            Some(gallery) => self
                .i18n
                .tr_with_args("window-title-with-gallery", &[("gallery", gallery.as_str())]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        match self.config.general.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }

    fn is_animating(&self) -> bool {
        self.lightbox.is_animating(self.now)
            || self
                .entries
                .iter()
                .any(|entry| entry.presentation.is_animating(self.now))
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_lightbox_subscription(self.lightbox.is_open()),
            subscription::create_tick_subscription(self.is_animating()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match message {
            Message::Tick(now) => now,
            _ => Instant::now(),
        };

        match message {
            Message::GalleryLoaded(result) => self.handle_gallery_loaded(result),
            Message::Grid(grid_message) => self.handle_grid_message(grid_message),
            Message::FilterBar(filter_message) => self.handle_filter_message(filter_message),
            Message::Lightbox(lightbox_message) => self.handle_lightbox_message(lightbox_message),
            Message::LanguageBar(language_message) => {
                self.handle_language_message(language_message)
            }
            Message::TouchStarted(position) => {
                if self.lightbox.is_open() {
                    self.swipe.touch_start(position);
                }
                Task::none()
            }
            Message::TouchEnded(position) => self.handle_touch_end(position),
            Message::TouchLost => {
                self.swipe.cancel();
                Task::none()
            }
            Message::Step(step) => self.handle_step(step),
            Message::ImageLoaded {
                render,
                source,
                result,
            } => self.handle_image_loaded(render, source, result),
            Message::Preloaded { source, result } => {
                match result {
                    Ok(image) => {
                        self.cache.insert(source, image);
                    }
                    Err(error) => tracing::warn!(%source, %error, "preload failed"),
                }
                Task::none()
            }
            Message::Tick(_) => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            status: &self.status,
            gallery_title: self.gallery_title.as_deref(),
            entries: &self.entries,
            controls: self.filter.controls(),
            overlay: self.lightbox.overlay(),
            displayed: self.displayed.as_ref(),
            now: self.now,
        })
    }
}
