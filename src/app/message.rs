// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::toaster::{ToasterMessage, ToasterPosition, ToasterType};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a standard toast of the given type.
    Show(ToasterType),
    /// Show the custom slide-over example.
    ShowCustom,
    /// Close button inside the custom example.
    CloseCustom,
    /// Swap the anchor edge for the next toast.
    TogglePosition,
    Toaster(ToasterMessage),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub kind: Option<ToasterType>,
    pub position: Option<ToasterPosition>,
    pub title: Option<String>,
    pub message: Option<String>,
    /// Auto-dismiss delay in seconds.
    pub duration_secs: Option<f32>,
    /// Disable auto-dismissal.
    pub persist: bool,
    /// Start with the custom slide-over example.
    pub custom: bool,
    /// Optional config directory override (from `--config-dir`).
    pub config_dir: Option<String>,
}
