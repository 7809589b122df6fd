// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::toaster::{Appearance, DismissReason, ToasterPosition, ToasterType};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{Background, Border, Element, Length, Padding, Shadow, Theme};

const LOREM: &str = "Lorem Ipsum is simply dummy text of the printing and typesetting \
industry. Lorem Ipsum has been the industry's standard dummy text ever since the 1500s, \
when an unknown printer took a galley of type and scrambled it to make a type specimen book.";

/// Context required to render the demo content.
pub struct ViewContext<'a> {
    pub position: ToasterPosition,
    pub showing: bool,
    pub last_dismissal: Option<DismissReason>,
    pub config_warning: Option<&'a str>,
}

fn reason_label(reason: DismissReason) -> &'static str {
    match reason {
        DismissReason::Timeout => "timed out",
        DismissReason::Tap => "tapped",
        DismissReason::Drag => "dragged away",
        DismissReason::BackgroundTap => "background tapped",
        DismissReason::Programmatic => "closed",
    }
}

/// Renders the screen underneath the toast.
pub fn content<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new("Toaster examples").size(typography::TITLE_SM);

    let type_buttons = ToasterType::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, kind| {
            row.push(
                button(Text::new(kind.to_string()))
                    .on_press(Message::Show(*kind))
                    .style(button::primary),
            )
        });

    let position_button = button(Text::new(format!("Position: {}", ctx.position)))
        .on_press(Message::TogglePosition)
        .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
        .style(button::secondary);

    let custom_button = button(Text::new("Custom toaster"))
        .on_press(Message::ShowCustom)
        .style(button::secondary);

    let status = match (ctx.showing, ctx.last_dismissal) {
        (true, _) => "Toast is showing".to_string(),
        (false, Some(reason)) => format!("Last toast {}", reason_label(reason)),
        (false, None) => "No toast yet".to_string(),
    };

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(type_buttons)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(position_button)
                .push(custom_button),
        )
        .push(Text::new(status).size(typography::CAPTION));

    if let Some(warning) = ctx.config_warning {
        column = column.push(
            Text::new(warning.to_string())
                .size(typography::CAPTION)
                .color(palette::RED),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .into()
}

/// Custom slide-over card: a close button above a block of text.
pub fn custom_card<'a>(appearance: Appearance) -> Element<'a, Message> {
    let close = button(icons::tinted(
        Icon::Xmark,
        sizing::ICON_SM,
        appearance.fade(palette::WHITE),
    ))
    .on_press(Message::CloseCustom)
    .padding(spacing::XS)
    .style(button::text);

    let header = Container::new(close)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(Padding {
            right: spacing::TOAST_MARGIN,
            ..Padding::ZERO
        });

    let body = Text::new(LOREM)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .color(appearance.fade(palette::WHITE));

    let background = appearance.fade(palette::GRAY_900);
    let card_shadow = Shadow {
        color: appearance.fade(shadow::TOAST.color),
        ..shadow::TOAST
    };

    let card = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(Container::new(body).padding([0.0, spacing::MD])),
    )
    .width(Length::Fill)
    .padding(Padding {
        bottom: spacing::MD,
        ..Padding::ZERO
    })
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::TOAST.into(),
            ..Border::default()
        },
        shadow: card_shadow,
        ..Default::default()
    });

    Container::new(card)
        .width(Length::Fill)
        .padding(Padding {
            top: spacing::MD * appearance.offset,
            ..Padding::ZERO
        })
        .into()
}
