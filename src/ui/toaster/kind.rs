// SPDX-License-Identifier: MPL-2.0
//! Semantic toast styles.

use crate::ui::design_tokens::palette;
use crate::ui::icons::Icon;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic style of a toast, providing premade colors and an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToasterType {
    /// Something may need attention (yellow, dark text).
    Warning,
    /// An operation failed (red).
    Error,
    /// An operation completed (blue).
    #[default]
    Success,
    /// Neutral information (blue).
    Info,
}

impl ToasterType {
    pub const ALL: [ToasterType; 4] = [
        ToasterType::Warning,
        ToasterType::Error,
        ToasterType::Success,
        ToasterType::Info,
    ];

    /// Color used for the title, message and icon.
    #[must_use]
    pub fn text_color(self) -> Color {
        match self {
            ToasterType::Warning => palette::BLACK,
            ToasterType::Error | ToasterType::Success | ToasterType::Info => palette::WHITE,
        }
    }

    /// Card background color.
    #[must_use]
    pub fn background_color(self) -> Color {
        match self {
            ToasterType::Warning => palette::YELLOW,
            ToasterType::Error => palette::RED,
            ToasterType::Success | ToasterType::Info => palette::BLUE,
        }
    }

    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            ToasterType::Warning => Icon::ExclamationTriangle,
            ToasterType::Error => Icon::ExclamationCircle,
            ToasterType::Success => Icon::CheckmarkCircle,
            ToasterType::Info => Icon::InfoCircle,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToasterType::Warning => "warning",
            ToasterType::Error => "error",
            ToasterType::Success => "success",
            ToasterType::Info => "info",
        }
    }
}

impl fmt::Display for ToasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToasterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warning" => Ok(ToasterType::Warning),
            "error" => Ok(ToasterType::Error),
            "success" => Ok(ToasterType::Success),
            "info" => Ok(ToasterType::Info),
            other => Err(format!("invalid toast type: {other}")),
        }
    }
}
