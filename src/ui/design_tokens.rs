// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by the toast overlay and the demo application.

## Organization

- **Palette**: Base and semantic toast colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Corner radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toaster::ui::design_tokens::{palette, opacity, spacing};
use iced::Color;

// Scrim behind a custom toast
let scrim = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const TRANSPARENT: Color = Color::TRANSPARENT;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Toast backgrounds
    pub const YELLOW: Color = Color::from_rgb(1.0, 0.8, 0.0);
    pub const RED: Color = Color::from_rgb(1.0, 0.231, 0.188);
    pub const BLUE: Color = Color::from_rgb(0.0, 0.478, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Scrim used behind custom toasts.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Toast drop shadow.
    pub const SHADOW: f32 = 0.33;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const MD: f32 = 16.0;
    /// Outer margin between the toast and the window edges.
    pub const TOAST_MARGIN: f32 = 20.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    pub const BUTTON_MIN_WIDTH: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes for toast text and demo chrome.

    /// Toast title (matches a system "title" text style)
    pub const TITLE: f32 = 28.0;

    /// Section headers in the demo
    pub const TITLE_SM: f32 = 18.0;

    /// Toast message body
    pub const BODY: f32 = 17.0;

    /// Hints and secondary labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    /// Toast card corners.
    pub const TOAST: f32 = 10.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    /// Soft shadow under a toast card.
    pub const TOAST: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::TOAST_MARGIN > spacing::MD);
    assert!(spacing::LG > spacing::TOAST_MARGIN);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OVERLAY_SUBTLE > 0.0 && opacity::OVERLAY_SUBTLE < 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_SM);

    assert!(typography::TITLE > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(radius::TOAST > 0.0);
};
