// SPDX-License-Identifier: MPL-2.0
//! Anchor edge of the toast.

use iced::alignment::Vertical;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Window edge a toast is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
}

/// The position from which the toast is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToasterPosition {
    #[default]
    Top,
    Bottom,
}

impl ToasterPosition {
    #[must_use]
    pub fn edge(self) -> Edge {
        match self {
            ToasterPosition::Top => Edge::Top,
            ToasterPosition::Bottom => Edge::Bottom,
        }
    }

    /// Alignment that pins the toast against its edge.
    #[must_use]
    pub fn vertical_alignment(self) -> Vertical {
        match self {
            ToasterPosition::Top => Vertical::Top,
            ToasterPosition::Bottom => Vertical::Bottom,
        }
    }

    /// The other edge.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ToasterPosition::Top => ToasterPosition::Bottom,
            ToasterPosition::Bottom => ToasterPosition::Top,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToasterPosition::Top => "top",
            ToasterPosition::Bottom => "bottom",
        }
    }
}

impl fmt::Display for ToasterPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToasterPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(ToasterPosition::Top),
            "bottom" => Ok(ToasterPosition::Bottom),
            other => Err(format!("invalid toast position: {other}")),
        }
    }
}
