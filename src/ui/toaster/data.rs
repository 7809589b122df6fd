// SPDX-License-Identifier: MPL-2.0
//! Appearance and timing of a single toast.
//!
//! `ToasterData` carries everything needed to render the standard toast card:
//! text, fonts, icon, colors, anchor edge and dismiss timing. Colors and icon
//! are usually derived from a [`ToasterType`], but every field can be
//! overridden through the builder methods.

use super::kind::ToasterType;
use super::position::ToasterPosition;
use super::transition::Appearance;
use crate::config::DEFAULT_TOAST_DURATION;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{container, Column, Container, Row, Text};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Shadow, Theme};
use std::time::Duration;

/// Font face and size for one line of toast text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
}

impl TextStyle {
    #[must_use]
    pub fn new(font: Font, size: f32) -> Self {
        Self { font, size }
    }

    /// Bold title text.
    #[must_use]
    pub fn title() -> Self {
        Self {
            font: Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            },
            size: typography::TITLE,
        }
    }

    /// Regular body text.
    #[must_use]
    pub fn body() -> Self {
        Self {
            font: Font::DEFAULT,
            size: typography::BODY,
        }
    }
}

/// Data used to build a toast card.
///
/// Two values compare equal when their title, message and position match;
/// styling and timing do not take part in equality.
#[derive(Debug, Clone)]
pub struct ToasterData {
    title: String,
    message: Option<String>,
    title_font: TextStyle,
    message_font: TextStyle,
    icon: Icon,
    icon_color: Color,
    title_color: Color,
    message_color: Color,
    background_color: Color,
    position: ToasterPosition,
    auto_dismiss: bool,
    duration: Duration,
}

impl ToasterData {
    /// Creates a toast with fully explicit colors and icon.
    pub fn custom(
        title_color: Color,
        message_color: Color,
        icon: Icon,
        icon_color: Color,
        background_color: Color,
    ) -> Self {
        Self {
            title: String::new(),
            message: None,
            title_font: TextStyle::title(),
            message_font: TextStyle::body(),
            icon,
            icon_color,
            title_color,
            message_color,
            background_color,
            position: ToasterPosition::default(),
            auto_dismiss: true,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Creates a toast styled by a premade type.
    pub fn new(kind: ToasterType) -> Self {
        Self::custom(
            kind.text_color(),
            kind.text_color(),
            kind.icon(),
            kind.text_color(),
            kind.background_color(),
        )
    }

    pub fn warning() -> Self {
        Self::new(ToasterType::Warning)
    }

    pub fn error() -> Self {
        Self::new(ToasterType::Error)
    }

    pub fn success() -> Self {
        Self::new(ToasterType::Success)
    }

    pub fn info() -> Self {
        Self::new(ToasterType::Info)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn title_font(mut self, style: TextStyle) -> Self {
        self.title_font = style;
        self
    }

    #[must_use]
    pub fn message_font(mut self, style: TextStyle) -> Self {
        self.message_font = style;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub fn icon_color(mut self, color: Color) -> Self {
        self.icon_color = color;
        self
    }

    #[must_use]
    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    #[must_use]
    pub fn message_color(mut self, color: Color) -> Self {
        self.message_color = color;
        self
    }

    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn position(mut self, position: ToasterPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, enabled: bool) -> Self {
        self.auto_dismiss = enabled;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn title_text(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn icon_kind(&self) -> Icon {
        self.icon
    }

    #[must_use]
    pub fn colors(&self) -> ToastColors {
        ToastColors {
            icon: self.icon_color,
            title: self.title_color,
            message: self.message_color,
            background: self.background_color,
        }
    }

    #[must_use]
    pub fn fonts(&self) -> (TextStyle, TextStyle) {
        (self.title_font, self.message_font)
    }

    #[must_use]
    pub fn anchor(&self) -> ToasterPosition {
        self.position
    }

    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        self.auto_dismiss
    }

    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        self.duration
    }

    /// Outer margins around the card. The anchor edge gets an extra
    /// `spacing::MD`, scaled by `Appearance::offset`.
    #[must_use]
    pub fn margins(&self, appearance: Appearance) -> Padding {
        let side = spacing::TOAST_MARGIN;
        let anchor = (spacing::TOAST_MARGIN + spacing::MD) * appearance.offset;
        match self.position {
            ToasterPosition::Top => Padding {
                top: spacing::MD * appearance.offset,
                right: side,
                bottom: side,
                left: side,
            },
            ToasterPosition::Bottom => Padding {
                top: 0.0,
                right: side,
                bottom: anchor,
                left: side,
            },
        }
    }

    /// Renders the toast card.
    pub fn view<'a, M: 'a>(&'a self, appearance: Appearance) -> Element<'a, M> {
        let icon = icons::tinted(
            self.icon,
            sizing::ICON_MD,
            appearance.fade(self.icon_color),
        );

        let mut lines = Column::new().spacing(spacing::XXS).push(
            Text::new(&self.title)
                .font(self.title_font.font)
                .size(self.title_font.size)
                .color(appearance.fade(self.title_color)),
        );

        if let Some(message) = &self.message {
            lines = lines.push(
                Text::new(message)
                    .font(self.message_font.font)
                    .size(self.message_font.size)
                    .color(appearance.fade(self.message_color)),
            );
        }

        // Layout: [icon] [title / message] [fill]
        let content = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Top)
            .push(Container::new(icon).padding(Padding {
                top: spacing::XXS,
                ..Padding::ZERO
            }))
            .push(lines.width(Length::Fill));

        let background = appearance.fade(self.background_color);
        let card_shadow = Shadow {
            color: appearance.fade(shadow::TOAST.color),
            ..shadow::TOAST
        };

        let card = Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(move |_theme: &Theme| card_style(background, card_shadow));

        Container::new(card)
            .width(Length::Fill)
            .padding(self.margins(appearance))
            .into()
    }
}

impl Default for ToasterData {
    fn default() -> Self {
        Self::new(ToasterType::default())
    }
}

impl PartialEq for ToasterData {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.message == other.message && self.position == other.position
    }
}

/// Resolved colors of a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastColors {
    pub icon: Color,
    pub title: Color,
    pub message: Color,
    pub background: Color,
}

fn card_style(background: Color, card_shadow: Shadow) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::TOAST.into(),
            ..Border::default()
        },
        shadow: card_shadow,
        ..Default::default()
    }
}
