// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid.
//!
//! Entries are laid out in rows of fixed width. Entries removed from the
//! layout by the filter are skipped, so the remaining ones close the gaps.
//! Each tile draws its animated presentation sampled at `now`.

use crate::gallery::entry::{EntryId, GalleryEntry};
use crate::ui::design_tokens::{palette, radius, scale_inset, sizing, spacing, typography};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, Column, Container, Row, Scrollable, Space, Text};
use iced::{Background, Border, Color, ContentFit, Element, Length, Padding, Theme};
use std::time::Instant;

pub struct ViewContext<'a> {
    pub entries: &'a [GalleryEntry],
    pub columns: usize,
    pub now: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(EntryId),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.columns.max(1);
    let visible: Vec<&GalleryEntry> = ctx.entries.iter().filter(|e| e.is_displayed()).collect();

    let rows = visible.chunks(columns).fold(
        Column::new().spacing(spacing::MD).padding(spacing::MD),
        |column, chunk| {
            let row = chunk
                .iter()
                .fold(Row::new().spacing(spacing::MD), |row, &entry| {
                    row.push(tile(entry, ctx.now))
                });
            // Pad the last row so tiles keep the same width.
            let row = (chunk.len()..columns).fold(row, |row, _| {
                row.push(Space::new().width(Length::FillPortion(1)))
            });
            column.push(row)
        },
    );

    Scrollable::new(rows)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tile<'a>(entry: &'a GalleryEntry, now: Instant) -> Element<'a, Message> {
    let presentation = &entry.presentation;
    let alpha = presentation.opacity.value(now).clamp(0.0, 1.0);
    let inset = scale_inset(presentation.scale.value(now));
    let offset = presentation.offset_y.value(now).max(0.0);

    let picture = Image::new(Handle::from_path(entry.thumbnail_source()))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .content_fit(ContentFit::Cover)
        .opacity(alpha);

    let caption = Text::new(entry.title.as_str())
        .size(typography::CAPTION)
        .color(Color {
            a: alpha,
            ..palette::GRAY_200
        });

    let card = button(Column::new().spacing(spacing::XXS).push(picture).push(caption))
        .padding(0)
        .style(move |_theme: &Theme, _status| button::Style {
            background: None,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .on_press(Message::Open(entry.id));

    Container::new(card)
        .width(Length::FillPortion(1))
        .padding(Padding {
            top: inset + offset,
            right: inset,
            bottom: (inset - offset).max(0.0),
            left: inset,
        })
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            ..Default::default()
        })
        .into()
}
