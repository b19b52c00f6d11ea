// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox overlay.
//!
//! The overlay is a two-layer stack: a dimmed backdrop that closes the
//! lightbox when clicked, and the content (image, caption, controls) on top
//! of it. Clicks on the image or the caption never reach the backdrop.

use crate::gallery::lightbox::Overlay;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    opacity, palette, scale_inset, sizing, spacing, typography,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, mouse_area, opaque, Column, Container, Row, Stack, Text};
use iced::{Background, Color, ContentFit, Element, Length, Theme};
use std::time::Instant;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub overlay: &'a Overlay,
    /// Decoded image matching `overlay.image_source`.
    pub image: Option<&'a Handle>,
    pub now: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    Previous,
    Next,
    BackdropPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Close,
    Previous,
    Next,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Close | Message::BackdropPressed => Event::Close,
        Message::Previous => Event::Previous,
        Message::Next => Event::Next,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let alpha = ctx.overlay.opacity.value(ctx.now).clamp(0.0, 1.0);
    let text_color = Color {
        a: alpha,
        ..palette::WHITE
    };

    let backdrop = mouse_area(
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::BACKDROP * alpha,
                    ..palette::BLACK
                })),
                ..Default::default()
            }),
    )
    .on_press(Message::BackdropPressed);

    let close = Row::new()
        .width(Length::Fill)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(control(ctx.i18n.tr("lightbox-close"), text_color).on_press(Message::Close));

    let picture: Element<'a, Message> = match ctx.image {
        Some(handle) => {
            let inset = scale_inset(ctx.overlay.image_scale.value(ctx.now));
            Container::new(
                Image::new(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Contain)
                    .opacity(ctx.overlay.image_opacity * alpha),
            )
            .padding(inset)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        }
        None => Container::new(
            Text::new(ctx.i18n.tr("lightbox-loading"))
                .size(typography::BODY)
                .color(text_color),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    };

    let stage = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(
            control(ctx.i18n.tr("lightbox-previous"), text_color)
                .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
                .on_press(Message::Previous),
        )
        .push(opaque(picture))
        .push(
            control(ctx.i18n.tr("lightbox-next"), text_color)
                .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
                .on_press(Message::Next),
        );

    let current = ctx.overlay.current.to_string();
    let total = ctx.overlay.total.to_string();
    let info = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new(ctx.overlay.title.as_str())
                .size(typography::TITLE_SM)
                .color(text_color),
        )
        .push(
            Text::new(ctx.overlay.description.as_str())
                .size(typography::BODY)
                .color(text_color),
        )
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "lightbox-position",
                &[("current", current.as_str()), ("total", total.as_str())],
            ))
            .size(typography::CAPTION)
            .color(Color {
                a: alpha,
                ..palette::GRAY_200
            }),
        );

    let content = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(close)
            .push(stage)
            .push(opaque(info)),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .height(Length::Fill);

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(content);

    if ctx.overlay.scroll_locked {
        // Keeps wheel and pointer events away from the grid underneath.
        opaque(layers)
    } else {
        layers.into()
    }
}

fn control<'a>(label: String, color: Color) -> button::Button<'a, Message> {
    button(
        Text::new(label)
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    )
    .padding(spacing::XS)
    .style(move |theme: &Theme, status| {
        let base = button::text(theme, status);
        button::Style {
            text_color: color,
            ..base
        }
    })
}
