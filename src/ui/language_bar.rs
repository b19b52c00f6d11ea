// SPDX-License-Identifier: MPL-2.0
//! Language picker. Selecting a language is the locale-change notification
//! the rest of the gallery reacts to.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::Vertical;
use iced::widget::{button, Row, Text};
use iced::Element;
use unic_langid::LanguageIdentifier;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Select(LanguageIdentifier),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.i18n.current_locale();
    let label = Row::new().push(
        Text::new(format!("{}:", ctx.i18n.tr("language-label"))).size(typography::CAPTION),
    );

    ctx.i18n
        .available_locales
        .iter()
        .fold(
            label.spacing(spacing::XS).align_y(Vertical::Center),
            |row, locale| {
                let style = if locale == current {
                    button::primary
                } else {
                    button::text
                };
                row.push(
                    button(Text::new(ctx.i18n.language_name(locale)).size(typography::CAPTION))
                        .padding([spacing::XXS, spacing::XS])
                        .style(style)
                        .on_press(Message::Select(locale.clone())),
                )
            },
        )
        .into()
}
