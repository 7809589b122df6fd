// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` is a transient, auto-dismissing toast overlay for the Iced
//! GUI framework.
//!
//! Toasts come in four premade styles (warning, error, success, info), slide
//! in from the top or bottom edge, and hide themselves after a delay or when
//! tapped, dragged, or when the background behind them is tapped.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
