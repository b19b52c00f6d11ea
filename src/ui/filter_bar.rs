// SPDX-License-Identifier: MPL-2.0
//! Row of category filter buttons above the grid.

use crate::gallery::filter::{FilterControl, ALL_FILTER};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the filter bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controls: &'a [FilterControl],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Select(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Apply(String),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Select(id) => Event::Apply(id),
    }
}

/// Label shown for `control` in the current language.
#[must_use]
pub fn label(i18n: &I18n, control: &FilterControl) -> String {
    let locale = i18n.current_locale();
    if control.labels.contains_key(locale) {
        control.label_for(locale).to_string()
    } else if control.id == ALL_FILTER {
        i18n.tr("filter-all")
    } else {
        control.label.clone()
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    ctx.controls
        .iter()
        .fold(
            Row::new().spacing(spacing::XS).width(Length::Fill),
            |row, control| {
                let style = if control.active {
                    button::primary
                } else {
                    button::secondary
                };
                row.push(
                    button(Text::new(label(ctx.i18n, control)).size(typography::BODY))
                        .padding([spacing::XXS, spacing::SM])
                        .style(style)
                        .on_press(Message::Select(control.id.clone())),
                )
            },
        )
        .wrap()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn select_becomes_apply() {
        assert_eq!(
            update(Message::Select("city".into())),
            Event::Apply("city".into())
        );
    }

    #[test]
    fn all_filter_uses_translation() {
        let i18n = I18n::new(Some("fr".into()), &Config::default());
        let control = FilterControl::new(ALL_FILTER, "All");
        assert_eq!(label(&i18n, &control), "Tout");
    }

    #[test]
    fn manifest_label_wins_over_translation() {
        let i18n = I18n::new(Some("fr".into()), &Config::default());
        let control = FilterControl::new(ALL_FILTER, "All").with_label("fr".parse().unwrap(), "Toutes");
        assert_eq!(label(&i18n, &control), "Toutes");
    }

    #[test]
    fn category_label_defaults_to_declared_label() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let control = FilterControl::new("city", "Cities");
        assert_eq!(label(&i18n, &control), "Cities");
    }
}
