// SPDX-License-Identifier: MPL-2.0
//! Message handlers of the application.
//!
//! Components never sleep: they return [`Effects`], which
//! [`App::schedule`] turns into timer and decoding tasks whose completion
//! comes back as messages.

use super::{App, GalleryStatus, Message};
use crate::config::{self, DEFAULT_ENTRANCE_FADE_MS};
use crate::error::Error;
use crate::gallery::bootstrap;
use crate::gallery::catalog::{self, ImageRecord};
use crate::gallery::entry;
use crate::gallery::filter::FilterController;
use crate::gallery::gesture::SwipeDirection;
use crate::gallery::lightbox::RenderEnv;
use crate::gallery::manifest::Gallery;
use crate::gallery::transition::{Effects, ImageRequest, Step};
use crate::media::{loader, LoadedImage};
use crate::ui::{filter_bar, gallery_grid, language_bar, lightbox_overlay};
use iced::{Point, Task};
use std::time::Duration;

impl App {
    /// Turns component effects into tasks.
    pub(super) fn schedule(&mut self, effects: Effects) -> Task<Message> {
        let mut tasks: Vec<Task<Message>> = effects
            .deferred
            .into_iter()
            .map(|deferred| {
                Task::perform(
                    async move { tokio::time::sleep(deferred.delay).await },
                    move |()| Message::Step(deferred.step),
                )
            })
            .collect();

        if let Some(request) = effects.load {
            tasks.push(self.request_image(request));
        }

        Task::batch(tasks)
    }

    fn request_image(&mut self, request: ImageRequest) -> Task<Message> {
        let ImageRequest { render, source, .. } = request;

        if let Some(image) = self.cache.get(&source) {
            return Task::done(Message::ImageLoaded {
                render,
                source,
                result: Ok(image),
            });
        }

        Task::perform(loader::load(source.clone()), move |result| {
            Message::ImageLoaded {
                render,
                source: source.clone(),
                result,
            }
        })
    }

    pub(super) fn handle_gallery_loaded(&mut self, result: Result<Gallery, Error>) -> Task<Message> {
        let gallery = match result {
            Ok(gallery) => gallery,
            Err(error) => {
                tracing::warn!(dir = %self.gallery_dir.display(), %error, "failed to load gallery");
                self.status = GalleryStatus::Failed(error);
                return Task::none();
            }
        };

        tracing::info!(
            dir = %gallery.root.display(),
            entries = gallery.entries.len(),
            filters = gallery.filters.len(),
            "gallery loaded"
        );

        self.gallery_title = gallery.title;
        self.entries = gallery.entries;
        self.filter = FilterController::new(gallery.filters, self.config.filter_timings());
        self.filter.select_initial(&mut self.entries);
        bootstrap::entrance(
            &mut self.entries,
            self.now,
            self.config.entrance_stagger(),
            Duration::from_millis(DEFAULT_ENTRANCE_FADE_MS),
        );
        self.lightbox.sync_catalog(catalog::refresh(&self.entries));
        self.status = GalleryStatus::Ready;

        let preloads = self
            .cache
            .pending(&bootstrap::preload_sources(&self.entries))
            .into_iter()
            .map(|source| {
                Task::perform(loader::load(source.clone()), move |result| {
                    Message::Preloaded {
                        source: source.clone(),
                        result,
                    }
                })
            });

        Task::batch(preloads)
    }

    pub(super) fn handle_grid_message(&mut self, message: gallery_grid::Message) -> Task<Message> {
        match message {
            gallery_grid::Message::Open(id) => {
                let Some(record) = entry::find(&self.entries, id).map(ImageRecord::from) else {
                    tracing::debug!(entry = %id, "clicked entry no longer exists");
                    return Task::none();
                };
                let env = RenderEnv {
                    entries: &self.entries,
                    locale: Some(&self.i18n),
                };
                let effects = self.lightbox.open(&record, &env);
                self.schedule(effects)
            }
        }
    }

    pub(super) fn handle_filter_message(&mut self, message: filter_bar::Message) -> Task<Message> {
        match filter_bar::update(message) {
            filter_bar::Event::Apply(id) => {
                let effects = self.filter.apply(&id, &mut self.entries, self.now);
                self.schedule(effects)
            }
        }
    }

    pub(super) fn handle_lightbox_message(
        &mut self,
        message: lightbox_overlay::Message,
    ) -> Task<Message> {
        let env = RenderEnv {
            entries: &self.entries,
            locale: Some(&self.i18n),
        };
        let effects = match lightbox_overlay::update(message) {
            lightbox_overlay::Event::Close => self.lightbox.close(self.now),
            lightbox_overlay::Event::Previous => self.lightbox.previous(&env),
            lightbox_overlay::Event::Next => self.lightbox.next(&env),
        };
        self.schedule(effects)
    }

    pub(super) fn handle_touch_end(&mut self, position: Point) -> Task<Message> {
        let Some(direction) = self.swipe.touch_end(position) else {
            return Task::none();
        };
        if !self.lightbox.is_open() {
            return Task::none();
        }
        let message = match direction {
            SwipeDirection::Next => lightbox_overlay::Message::Next,
            SwipeDirection::Previous => lightbox_overlay::Message::Previous,
        };
        self.handle_lightbox_message(message)
    }

    pub(super) fn handle_language_message(
        &mut self,
        message: language_bar::Message,
    ) -> Task<Message> {
        match message {
            language_bar::Message::Select(locale) => {
                if !self.i18n.set_locale(locale.clone()) {
                    return Task::none();
                }

                let env = RenderEnv {
                    entries: &self.entries,
                    locale: Some(&self.i18n),
                };
                bootstrap::forward_locale_change(&mut self.lightbox, &env);

                self.config.general.language = Some(locale.to_string());
                if self.persist_config {
                    if let Err(error) = config::save(&self.config) {
                        tracing::warn!(%error, "failed to save language preference");
                    }
                }
                Task::none()
            }
        }
    }

    pub(super) fn handle_step(&mut self, step: Step) -> Task<Message> {
        match step {
            Step::HideEntry { pass, entry } => {
                self.filter.complete_hide(pass, entry, &mut self.entries);
                Task::none()
            }
            Step::ResyncCatalog { pass } => {
                if let Some(images) = self.filter.resync(pass, &self.entries) {
                    self.lightbox.sync_catalog(images);
                }
                Task::none()
            }
            Step::RevealOverlay { .. } | Step::FinishClose { .. } | Step::ScaleInImage { .. } => {
                let effects = self.lightbox.apply(step, self.now);
                if !self.lightbox.overlay().active {
                    self.displayed = None;
                }
                self.schedule(effects)
            }
        }
    }

    pub(super) fn handle_image_loaded(
        &mut self,
        render: u64,
        source: String,
        result: Result<LoadedImage, Error>,
    ) -> Task<Message> {
        match result {
            Ok(image) => {
                self.cache.insert(source, image.clone());
                let effects = self.lightbox.image_loaded(render);
                // Empty effects mean the render was superseded.
                if !effects.is_empty() {
                    self.displayed = Some(image.handle);
                }
                self.schedule(effects)
            }
            Err(error) => {
                tracing::warn!(%source, %error, "failed to decode lightbox image");
                self.lightbox.image_failed(render);
                Task::none()
            }
        }
    }
}
