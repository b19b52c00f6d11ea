// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery page (header, filter bar, grid) is always drawn; the lightbox
//! overlay is stacked on top of it while active.

use super::{GalleryStatus, Message};
use crate::config::GRID_COLUMNS;
use crate::gallery::entry::GalleryEntry;
use crate::gallery::filter::FilterControl;
use crate::gallery::lightbox::Overlay;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::{filter_bar, gallery_grid, language_bar, lightbox_overlay};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub status: &'a GalleryStatus,
    pub gallery_title: Option<&'a str>,
    pub entries: &'a [GalleryEntry],
    pub controls: &'a [FilterControl],
    pub overlay: &'a Overlay,
    pub displayed: Option<&'a Handle>,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header(&ctx))
        .push(body(&ctx));

    if !ctx.overlay.active {
        return page.into();
    }

    let image = ctx.displayed.filter(|_| ctx.overlay.image_source.is_some());
    let overlay = lightbox_overlay::view(lightbox_overlay::ViewContext {
        i18n: ctx.i18n,
        overlay: ctx.overlay,
        image,
        now: ctx.now,
    })
    .map(Message::Lightbox);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(overlay)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(
        ctx.gallery_title
            .map_or_else(|| ctx.i18n.tr("window-title"), str::to_string),
    )
    .size(typography::TITLE_MD);
    let languages =
        language_bar::view(language_bar::ViewContext { i18n: ctx.i18n }).map(Message::LanguageBar);

    let row = Row::new().spacing(spacing::MD).align_y(Vertical::Center);
    if ctx.i18n.is_rtl() {
        row.push(languages)
            .push(Space::new().width(Length::Fill))
            .push(title)
            .into()
    } else {
        row.push(title)
            .push(Space::new().width(Length::Fill))
            .push(languages)
            .into()
    }
}

fn body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.status {
        GalleryStatus::Loading => notice(ctx.i18n.tr("gallery-loading"), None),
        GalleryStatus::Failed(error) => {
            let error = error.to_string();
            notice(
                ctx.i18n
                    .tr_with_args("gallery-load-error", &[("error", error.as_str())]),
                Some(palette::ERROR_500),
            )
        }
        GalleryStatus::Ready if ctx.entries.is_empty() => {
            notice(ctx.i18n.tr("gallery-empty"), None)
        }
        GalleryStatus::Ready => Column::new()
            .spacing(spacing::SM)
            .push(
                filter_bar::view(filter_bar::ViewContext {
                    i18n: ctx.i18n,
                    controls: ctx.controls,
                })
                .map(Message::FilterBar),
            )
            .push(
                gallery_grid::view(gallery_grid::ViewContext {
                    entries: ctx.entries,
                    columns: GRID_COLUMNS,
                    now: ctx.now,
                })
                .map(Message::Grid),
            )
            .into(),
    }
}

fn notice<'a>(text: String, color: Option<iced::Color>) -> Element<'a, Message> {
    let text = Text::new(text).size(typography::BODY);
    let text = match color {
        Some(color) => text.color(color),
        None => text,
    };
    Container::new(text)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
