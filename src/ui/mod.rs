// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toaster`] - Toast overlay component
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod toaster;
