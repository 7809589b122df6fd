// SPDX-License-Identifier: MPL-2.0
//! Show/hide transition of the toast overlay.
//!
//! The toast fades in while sliding from its anchor edge to its resting
//! margin, and reverses on dismissal. Progress is computed from timestamps
//! passed in by the caller so the math stays deterministic under test.

use iced::Color;
use std::time::{Duration, Instant};

/// Time for a toast to fully appear.
pub const ENTER_DURATION: Duration = Duration::from_millis(350);

/// Time for a toast to fully disappear.
pub const EXIT_DURATION: Duration = Duration::from_millis(250);

/// Current phase of the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Entering {
        since: Instant,
    },
    Shown,
    Exiting {
        since: Instant,
    },
}

/// Visual state handed to slide-over content while rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Alpha multiplier in `0.0..=1.0`.
    pub opacity: f32,
    /// Fraction of the resting edge margin currently applied, in `0.0..=1.0`.
    pub offset: f32,
}

impl Appearance {
    pub const HIDDEN: Appearance = Appearance {
        opacity: 0.0,
        offset: 0.0,
    };

    pub const SHOWN: Appearance = Appearance {
        opacity: 1.0,
        offset: 1.0,
    };

    /// Applies the current opacity to `color`.
    #[must_use]
    pub fn fade(&self, color: Color) -> Color {
        Color {
            a: color.a * self.opacity,
            ..color
        }
    }
}

/// Ease-in-out curve over `0.0..=1.0`.
fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn fraction(elapsed: Duration, total: Duration) -> f32 {
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Transition {
    phase: Phase,
}

impl Transition {
    #[cfg(test)]
    fn phase(&self) -> Phase {
        self.phase
    }

    /// Linear visibility in `0.0..=1.0` at `now`.
    #[must_use]
    pub fn visibility_at(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Hidden => 0.0,
            Phase::Shown => 1.0,
            Phase::Entering { since } => {
                fraction(now.saturating_duration_since(since), ENTER_DURATION)
            }
            Phase::Exiting { since } => {
                1.0 - fraction(now.saturating_duration_since(since), EXIT_DURATION)
            }
        }
    }

    /// Starts appearing. A reversal mid-exit resumes from the current visibility.
    pub fn enter(&mut self, now: Instant) {
        match self.phase {
            Phase::Shown | Phase::Entering { .. } => {}
            Phase::Hidden => self.phase = Phase::Entering { since: now },
            Phase::Exiting { .. } => {
                let visible = self.visibility_at(now);
                let since = now
                    .checked_sub(ENTER_DURATION.mul_f32(visible))
                    .unwrap_or(now);
                self.phase = Phase::Entering { since };
            }
        }
    }

    /// Starts disappearing. A reversal mid-enter resumes from the current visibility.
    pub fn exit(&mut self, now: Instant) {
        match self.phase {
            Phase::Hidden | Phase::Exiting { .. } => {}
            Phase::Shown => self.phase = Phase::Exiting { since: now },
            Phase::Entering { .. } => {
                let hidden = 1.0 - self.visibility_at(now);
                let since = now
                    .checked_sub(EXIT_DURATION.mul_f32(hidden))
                    .unwrap_or(now);
                self.phase = Phase::Exiting { since };
            }
        }
    }

    /// Settles the phase once its duration has elapsed.
    pub fn tick(&mut self, now: Instant) {
        self.phase = match self.phase {
            Phase::Entering { since } if now.saturating_duration_since(since) >= ENTER_DURATION => {
                Phase::Shown
            }
            Phase::Exiting { since } if now.saturating_duration_since(since) >= EXIT_DURATION => {
                Phase::Hidden
            }
            phase => phase,
        };
    }

    #[must_use]
    pub fn appearance_at(&self, now: Instant) -> Appearance {
        let eased = smoothstep(self.visibility_at(now));
        Appearance {
            opacity: eased,
            offset: eased,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering { .. } | Phase::Exiting { .. })
    }

    /// Whether anything should be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }
}
