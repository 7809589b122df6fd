// SPDX-License-Identifier: MPL-2.0
//! Pointer tracking over the toast card.
//!
//! A press followed by a release is classified as a tap or a drag depending
//! on how far the cursor travelled in between. Leaving the card while the
//! button is held counts as a drag.

use iced::Point;

/// Minimum cursor travel, in pixels, for a press/release pair to be a drag.
pub const DRAG_THRESHOLD: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Drag,
}

/// Classifies a completed press/release pair.
#[must_use]
pub fn classify(origin: Point, end: Point) -> Gesture {
    if origin.distance(end) > DRAG_THRESHOLD {
        Gesture::Drag
    } else {
        Gesture::Tap
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    /// Last cursor position reported over the card.
    cursor: Option<Point>,
    /// Cursor position when the button went down.
    pressed_at: Option<Point>,
}

impl PointerState {
    pub fn moved(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    pub fn pressed(&mut self) {
        self.pressed_at = Some(self.cursor.unwrap_or(Point::ORIGIN));
    }

    /// Completes a gesture, if a press was in progress.
    pub fn released(&mut self) -> Option<Gesture> {
        let origin = self.pressed_at.take()?;
        let end = self.cursor.unwrap_or(origin);
        Some(classify(origin, end))
    }

    /// The cursor left the card.
    pub fn exited(&mut self) -> Option<Gesture> {
        self.cursor = None;
        self.pressed_at.take().map(|_| Gesture::Drag)
    }

    /// Drops a press in progress. The cursor position is kept since iced
    /// only reports it again once the cursor moves.
    pub fn cancel_press(&mut self) {
        self.pressed_at = None;
    }

    #[cfg(test)]
    fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_movement_is_a_tap() {
        assert_eq!(
            classify(Point::new(10.0, 10.0), Point::new(14.0, 13.0)),
            Gesture::Tap
        );
    }

    #[test]
    fn movement_past_threshold_is_a_drag() {
        assert_eq!(
            classify(Point::new(10.0, 10.0), Point::new(10.0, 40.0)),
            Gesture::Drag
        );
    }

    #[test]
    fn release_without_press_yields_nothing() {
        let mut pointer = PointerState::default();
        pointer.moved(Point::new(5.0, 5.0));
        assert_eq!(pointer.released(), None);
    }

    #[test]
    fn press_move_release_is_a_drag() {
        let mut pointer = PointerState::default();
        pointer.moved(Point::new(50.0, 20.0));
        pointer.pressed();
        assert!(pointer.is_pressed());
        pointer.moved(Point::new(50.0, 2.0));
        pointer.moved(Point::new(50.0, -30.0));

        assert_eq!(pointer.released(), Some(Gesture::Drag));
        assert!(!pointer.is_pressed());
    }

    #[test]
    fn press_release_in_place_is_a_tap() {
        let mut pointer = PointerState::default();
        pointer.moved(Point::new(50.0, 20.0));
        pointer.pressed();
        assert_eq!(pointer.released(), Some(Gesture::Tap));
    }

    #[test]
    fn exiting_while_pressed_is_a_drag() {
        let mut pointer = PointerState::default();
        pointer.moved(Point::new(1.0, 1.0));
        pointer.pressed();
        assert_eq!(pointer.exited(), Some(Gesture::Drag));
        assert_eq!(pointer.released(), None);
    }

    #[test]
    fn cancelled_press_keeps_cursor_for_next_press() {
        let mut pointer = PointerState::default();
        pointer.moved(Point::new(200.0, 40.0));
        pointer.pressed();
        pointer.cancel_press();
        assert!(!pointer.is_pressed());
        assert_eq!(pointer.released(), None);

        pointer.pressed();
        pointer.moved(Point::new(202.0, 41.0));
        assert_eq!(pointer.released(), Some(Gesture::Tap));
    }

    #[test]
    fn exiting_without_press_is_ignored() {
        let mut pointer = PointerState::default();
        pointer.moved(Point::new(1.0, 1.0));
        assert_eq!(pointer.exited(), None);
    }
}
