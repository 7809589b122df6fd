// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toast configuration.
//!
//! # Categories
//!
//! - **Timing**: Auto-dismiss delay and its bounds
//! - **Gestures**: Which dismissal gestures are enabled out of the box
//! - **Overlay**: Scrim opacity behind the toast

use std::time::Duration;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default delay before a toast dismisses itself (in seconds).
pub const DEFAULT_TOAST_DURATION_SECS: f32 = 5.0;

/// Default delay before a toast dismisses itself.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

/// Minimum accepted auto-dismiss delay (in seconds).
pub const MIN_TOAST_DURATION_SECS: f32 = 1.0;

/// Maximum accepted auto-dismiss delay (in seconds).
pub const MAX_TOAST_DURATION_SECS: f32 = 60.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

pub const DEFAULT_TAP_TO_DISMISS: bool = true;
pub const DEFAULT_BACKGROUND_TAP_TO_DISMISS: bool = false;
pub const DEFAULT_DRAG_TO_DISMISS: bool = true;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default scrim opacity (fully transparent).
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.0;

pub const MIN_OVERLAY_OPACITY: f32 = 0.0;
pub const MAX_OVERLAY_OPACITY: f32 = 1.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DURATION_SECS > 0.0);
    assert!(MAX_TOAST_DURATION_SECS > MIN_TOAST_DURATION_SECS);
    assert!(DEFAULT_TOAST_DURATION_SECS >= MIN_TOAST_DURATION_SECS);
    assert!(DEFAULT_TOAST_DURATION_SECS <= MAX_TOAST_DURATION_SECS);

    assert!(DEFAULT_OVERLAY_OPACITY >= MIN_OVERLAY_OPACITY);
    assert!(DEFAULT_OVERLAY_OPACITY <= MAX_OVERLAY_OPACITY);
};
