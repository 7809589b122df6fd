// SPDX-License-Identifier: MPL-2.0
//! Toast overlay component.
//!
//! A toast is a transient banner anchored to the top or bottom edge of its
//! host view. It disappears on its own after a delay, or earlier when the
//! user taps it, drags it, or taps the background behind it.
//!
//! # Components
//!
//! - [`kind`] - `ToasterType` premade styles (warning, error, success, info)
//! - [`position`] - `ToasterPosition` anchor edge
//! - [`data`] - `ToasterData` appearance and timing of the standard card
//! - [`overlay`] - `Toaster` visibility state, dismissal triggers and layering
//! - [`transition`] - fade and slide progress
//! - [`gesture`] - tap versus drag classification
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::toaster::{Toaster, ToasterData, ToasterMessage};
//!
//! let data = ToasterData::info().title("Hello").message("Here's some info.");
//! let mut toaster = Toaster::with_data(&data);
//!
//! // In update: show it and run the returned task for auto-dismissal
//! let task = toaster.show().map(Message::Toaster);
//!
//! // In view: wrap the screen content
//! toaster.view_data(content, &data, Message::Toaster)
//! ```

pub mod data;
pub mod gesture;
pub mod kind;
pub mod overlay;
pub mod position;
pub mod transition;

pub use data::{TextStyle, ToastColors, ToasterData};
pub use kind::ToasterType;
pub use overlay::{DismissReason, Effect, Message as ToasterMessage, Settings, Toaster};
pub use position::{Edge, ToasterPosition};
pub use transition::Appearance;
