// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons for toasts.
//!
//! Icons are symbolic single-color SVGs embedded at compile time via
//! `include_bytes!`. Handles are cached in a `OnceLock` so each SVG is parsed
//! once, and tinting happens at render time through the SVG style color filter.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons::{self, Icon};
//!
//! let warning = icons::tinted(Icon::ExclamationTriangle, 20.0, palette::BLACK);
//! ```

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Defines a function returning a cached handle for an embedded SVG.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(
    exclamation_triangle,
    "exclamation_triangle.svg",
    "Filled triangle with an exclamation mark."
);
define_icon!(
    exclamation_circle,
    "exclamation_circle.svg",
    "Filled circle with an exclamation mark."
);
define_icon!(
    checkmark_circle,
    "checkmark_circle.svg",
    "Filled circle with a checkmark."
);
define_icon!(info_circle, "info_circle.svg", "Filled circle with an \"i\".");
define_icon!(xmark, "xmark.svg", "Diagonal cross used for close buttons.");

/// Icons available to toasts.
///
/// Names describe the glyph, not the situation it is used in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ExclamationTriangle,
    ExclamationCircle,
    CheckmarkCircle,
    InfoCircle,
    Xmark,
}

impl Icon {
    /// Returns the cached SVG handle for this icon.
    #[must_use]
    pub fn handle(self) -> Handle {
        match self {
            Icon::ExclamationTriangle => exclamation_triangle(),
            Icon::ExclamationCircle => exclamation_circle(),
            Icon::CheckmarkCircle => checkmark_circle(),
            Icon::InfoCircle => info_circle(),
            Icon::Xmark => xmark(),
        }
    }
}

/// Renders `icon` as a square of `size` pixels filled with `color`.
pub fn tinted<'a>(icon: Icon, size: f32, color: Color) -> Svg<'a, Theme> {
    Svg::new(icon.handle())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_a_handle() {
        for icon in [
            Icon::ExclamationTriangle,
            Icon::ExclamationCircle,
            Icon::CheckmarkCircle,
            Icon::InfoCircle,
            Icon::Xmark,
        ] {
            let _ = icon.handle();
        }
    }
}
