// SPDX-License-Identifier: MPL-2.0
//! Toast overlay: visibility state, dismissal triggers and layering.
//!
//! A `Toaster` owns one `showing` flag. Four triggers can clear it: the
//! auto-dismiss timer, a tap on the toast, a drag on the toast, and a tap on
//! the background. Each trigger is gated by its setting and reported back to
//! the host as an [`Effect`].

use super::data::ToasterData;
use super::gesture::{Gesture, PointerState};
use super::position::ToasterPosition;
use super::transition::{Appearance, Transition};
use crate::config::DEFAULT_TOAST_DURATION;
use crate::ui::design_tokens::palette;
use iced::alignment::Vertical;
use iced::widget::{container, mouse_area, text, Container, Stack};
use iced::{time, Background, Color, Element, Length, Point, Subscription, Task, Theme};
use std::time::{Duration, Instant};

/// Interval between animation frames while a transition runs.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Behavior of a toast overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub position: ToasterPosition,
    pub auto_dismiss: bool,
    pub duration: Duration,
    pub enable_tap_to_dismiss: bool,
    pub enable_background_tap_to_dismiss: bool,
    pub enable_drag_detection: bool,
    /// Full-size color painted behind the toast.
    pub overlay_background_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            position: ToasterPosition::Top,
            auto_dismiss: true,
            duration: DEFAULT_TOAST_DURATION,
            enable_tap_to_dismiss: true,
            enable_background_tap_to_dismiss: false,
            enable_drag_detection: true,
            overlay_background_color: palette::TRANSPARENT,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn position(mut self, position: ToasterPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, enabled: bool) -> Self {
        self.auto_dismiss = enabled;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn tap_to_dismiss(mut self, enabled: bool) -> Self {
        self.enable_tap_to_dismiss = enabled;
        self
    }

    #[must_use]
    pub fn background_tap_to_dismiss(mut self, enabled: bool) -> Self {
        self.enable_background_tap_to_dismiss = enabled;
        self
    }

    #[must_use]
    pub fn drag_detection(mut self, enabled: bool) -> Self {
        self.enable_drag_detection = enabled;
        self
    }

    #[must_use]
    pub fn overlay_background(mut self, color: Color) -> Self {
        self.overlay_background_color = color;
        self
    }
}

/// Messages produced by the overlay layers and its timer.
#[derive(Debug, Clone)]
pub enum Message {
    /// The auto-dismiss timer for the given showing fired.
    Expired(u64),
    /// Left button went down over the toast.
    Pressed,
    /// Cursor moved over the toast.
    Moved(Point),
    /// Left button went up over the toast.
    Released,
    /// Cursor left the toast.
    Exited,
    /// Left button went down over the background layer.
    BackgroundPressed,
    /// Animation frame.
    Animate(Instant),
}

/// Why a toast went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Timeout,
    Tap,
    Drag,
    BackgroundTap,
    Programmatic,
}

/// Outcome of handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Dismissed(DismissReason),
}

/// Waits `duration`, then yields `generation` back.
pub(crate) async fn expire_after(duration: Duration, generation: u64) -> u64 {
    tokio::time::sleep(duration).await;
    generation
}

/// Resolved overlay layers for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layers {
    appearance: Appearance,
    scrim: Color,
    /// The background captures presses instead of passing them to the content.
    background_tappable: bool,
    alignment: Vertical,
}

/// Overlay that shows and hides a toast above some content.
#[derive(Debug, Clone)]
pub struct Toaster {
    settings: Settings,
    showing: bool,
    /// Incremented on every show and dismiss so stale timers are ignored.
    generation: u64,
    pointer: PointerState,
    transition: Transition,
    /// Timestamp of the last state change or animation frame.
    now: Instant,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Toaster {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            showing: false,
            generation: 0,
            pointer: PointerState::default(),
            transition: Transition::default(),
            now: Instant::now(),
        }
    }

    /// Creates a toaster whose position and timing follow `data`.
    #[must_use]
    pub fn with_data(data: &ToasterData) -> Self {
        Self::new(
            Settings::default()
                .position(data.anchor())
                .auto_dismiss(data.auto_dismisses())
                .duration(data.dismiss_after()),
        )
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the settings. Takes effect on the next show.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.showing
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.transition.appearance_at(self.now)
    }

    /// Whether any layer is drawn, including during the exit transition.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.transition.is_visible()
    }

    /// Shows the toast and, when enabled, schedules its auto-dismissal.
    ///
    /// Showing an already visible toast restarts the timer.
    pub fn show(&mut self) -> Task<Message> {
        self.show_at(Instant::now())
    }

    fn show_at(&mut self, now: Instant) -> Task<Message> {
        self.showing = true;
        self.generation = self.generation.wrapping_add(1);
        self.pointer.cancel_press();
        self.now = now;
        self.transition.enter(now);

        tracing::debug!(
            generation = self.generation,
            position = %self.settings.position,
            auto_dismiss = self.settings.auto_dismiss,
            "toast shown"
        );

        if self.settings.auto_dismiss {
            Task::perform(
                expire_after(self.settings.duration, self.generation),
                Message::Expired,
            )
        } else {
            Task::none()
        }
    }

    /// Hides the toast from code.
    pub fn dismiss(&mut self) -> Effect {
        self.dismiss_at(DismissReason::Programmatic, Instant::now())
    }

    fn dismiss_at(&mut self, reason: DismissReason, now: Instant) -> Effect {
        if !self.showing {
            return Effect::None;
        }

        self.showing = false;
        self.generation = self.generation.wrapping_add(1);
        self.pointer.cancel_press();
        self.now = now;
        self.transition.exit(now);

        tracing::info!(?reason, "toast dismissed");
        Effect::Dismissed(reason)
    }

    fn on_gesture(&mut self, gesture: Gesture, now: Instant) -> Effect {
        match gesture {
            Gesture::Tap if self.settings.enable_tap_to_dismiss => {
                self.dismiss_at(DismissReason::Tap, now)
            }
            Gesture::Drag if self.settings.enable_drag_detection => {
                self.dismiss_at(DismissReason::Drag, now)
            }
            Gesture::Tap | Gesture::Drag => Effect::None,
        }
    }

    /// Handles an overlay message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, message: Message) -> Effect {
        self.update_at(message, Instant::now())
    }

    fn update_at(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::Expired(generation) => {
                if generation == self.generation {
                    self.dismiss_at(DismissReason::Timeout, now)
                } else {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "ignoring stale dismiss timer"
                    );
                    Effect::None
                }
            }
            Message::Pressed => {
                if self.showing {
                    self.pointer.pressed();
                }
                Effect::None
            }
            Message::Moved(position) => {
                self.pointer.moved(position);
                Effect::None
            }
            Message::Released => match self.pointer.released() {
                Some(gesture) => self.on_gesture(gesture, now),
                None => Effect::None,
            },
            Message::Exited => match self.pointer.exited() {
                Some(gesture) => self.on_gesture(gesture, now),
                None => Effect::None,
            },
            Message::BackgroundPressed => {
                if self.settings.enable_background_tap_to_dismiss {
                    self.dismiss_at(DismissReason::BackgroundTap, now)
                } else {
                    Effect::None
                }
            }
            Message::Animate(frame) => {
                self.now = frame;
                self.transition.tick(frame);
                Effect::None
            }
        }
    }

    /// Whether an enter or exit transition is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    /// Animation frames while a transition is running.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            time::every(FRAME_INTERVAL).map(Message::Animate)
        } else {
            Subscription::none()
        }
    }

    /// What the overlay draws right now, or `None` while fully hidden.
    fn layers(&self) -> Option<Layers> {
        if !self.transition.is_visible() {
            return None;
        }

        let appearance = self.appearance();
        Some(Layers {
            appearance,
            scrim: appearance.fade(self.settings.overlay_background_color),
            background_tappable: self.settings.enable_background_tap_to_dismiss,
            alignment: self.settings.position.vertical_alignment(),
        })
    }

    /// Layers the background and `slide_over` content above `content`.
    ///
    /// `slide_over` receives the current [`Appearance`] so it can fade and
    /// slide along with the transition. `map` lifts overlay messages into
    /// the host's message type.
    pub fn view<'a, M, F>(
        &self,
        content: impl Into<Element<'a, M>>,
        slide_over: F,
        map: fn(Message) -> M,
    ) -> Element<'a, M>
    where
        M: Clone + 'a,
        F: FnOnce(Appearance) -> Element<'a, M>,
    {
        let content = content.into();

        let Some(layers) = self.layers() else {
            return content;
        };
        let appearance = layers.appearance;

        let scrim_color = layers.scrim;
        let scrim = Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| scrim_style(scrim_color));

        let background: Element<'a, M> = if layers.background_tappable {
            mouse_area(scrim)
                .on_press(map(Message::BackgroundPressed))
                .into()
        } else {
            scrim.into()
        };

        let toast = mouse_area(slide_over(appearance))
            .on_press(map(Message::Pressed))
            .on_release(map(Message::Released))
            .on_move(move |position| map(Message::Moved(position)))
            .on_exit(map(Message::Exited));

        let toast_layer = Container::new(toast)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(layers.alignment);

        Stack::new()
            .push(content)
            .push(background)
            .push(toast_layer)
            .into()
    }

    /// Convenience over [`Toaster::view`] rendering the standard toast card.
    pub fn view_data<'a, M>(
        &self,
        content: impl Into<Element<'a, M>>,
        data: &'a ToasterData,
        map: fn(Message) -> M,
    ) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        self.view(content, |appearance| data.view(appearance), map)
    }
}

fn scrim_style(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toaster::transition::{ENTER_DURATION, EXIT_DURATION};

    fn shown(settings: Settings) -> (Toaster, Instant) {
        let mut toaster = Toaster::new(settings);
        let now = Instant::now();
        let _ = toaster.show_at(now);
        (toaster, now)
    }

    #[test]
    fn new_toaster_is_hidden() {
        let toaster = Toaster::default();
        assert!(!toaster.is_showing());
        assert!(!toaster.is_visible());
        assert_eq!(toaster.appearance(), Appearance::HIDDEN);
    }

    #[test]
    fn default_settings_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.position, ToasterPosition::Top);
        assert!(settings.auto_dismiss);
        assert_eq!(settings.duration, Duration::from_secs(5));
        assert!(settings.enable_tap_to_dismiss);
        assert!(!settings.enable_background_tap_to_dismiss);
        assert!(settings.enable_drag_detection);
        assert_eq!(settings.overlay_background_color, Color::TRANSPARENT);
    }

    #[test]
    fn with_data_copies_position_and_timing() {
        let data = ToasterData::info()
            .position(ToasterPosition::Bottom)
            .auto_dismiss(false)
            .duration(Duration::from_secs(2));
        let toaster = Toaster::with_data(&data);

        assert_eq!(toaster.settings().position, ToasterPosition::Bottom);
        assert!(!toaster.settings().auto_dismiss);
        assert_eq!(toaster.settings().duration, Duration::from_secs(2));
        assert!(toaster.settings().enable_tap_to_dismiss);
    }

    #[test]
    fn show_sets_flag_and_starts_transition() {
        let (toaster, _) = shown(Settings::default());
        assert!(toaster.is_showing());
        assert!(toaster.is_visible());
        assert_eq!(toaster.generation(), 1);
    }

    #[test]
    fn current_timer_dismisses() {
        let (mut toaster, now) = shown(Settings::default());
        let generation = toaster.generation();

        let effect = toaster.update_at(Message::Expired(generation), now);
        assert_eq!(effect, Effect::Dismissed(DismissReason::Timeout));
        assert!(!toaster.is_showing());
    }

    #[test]
    fn stale_timer_is_ignored_after_reshow() {
        let (mut toaster, now) = shown(Settings::default());
        let first = toaster.generation();
        let _ = toaster.show_at(now);

        assert_eq!(toaster.update_at(Message::Expired(first), now), Effect::None);
        assert!(toaster.is_showing());
    }

    #[test]
    fn stale_timer_does_not_dismiss_next_showing() {
        let (mut toaster, now) = shown(Settings::default());
        let first = toaster.generation();
        toaster.dismiss_at(DismissReason::Tap, now);
        let _ = toaster.show_at(now);

        assert_eq!(toaster.update_at(Message::Expired(first), now), Effect::None);
        assert!(toaster.is_showing());
    }

    #[test]
    fn tap_dismisses_when_enabled() {
        let (mut toaster, now) = shown(Settings::default());
        toaster.update_at(Message::Moved(Point::new(40.0, 20.0)), now);
        toaster.update_at(Message::Pressed, now);

        let effect = toaster.update_at(Message::Released, now);
        assert_eq!(effect, Effect::Dismissed(DismissReason::Tap));
    }

    #[test]
    fn tap_is_ignored_when_disabled() {
        let (mut toaster, now) = shown(Settings::default().tap_to_dismiss(false));
        toaster.update_at(Message::Pressed, now);

        assert_eq!(toaster.update_at(Message::Released, now), Effect::None);
        assert!(toaster.is_showing());
    }

    #[test]
    fn drag_dismisses_when_enabled() {
        let (mut toaster, now) = shown(Settings::default().tap_to_dismiss(false));
        toaster.update_at(Message::Moved(Point::new(40.0, 60.0)), now);
        toaster.update_at(Message::Pressed, now);
        toaster.update_at(Message::Moved(Point::new(40.0, 10.0)), now);

        let effect = toaster.update_at(Message::Released, now);
        assert_eq!(effect, Effect::Dismissed(DismissReason::Drag));
    }

    #[test]
    fn drag_is_not_treated_as_tap_when_drag_disabled() {
        let (mut toaster, now) = shown(Settings::default().drag_detection(false));
        toaster.update_at(Message::Moved(Point::new(40.0, 60.0)), now);
        toaster.update_at(Message::Pressed, now);
        toaster.update_at(Message::Moved(Point::new(40.0, 10.0)), now);

        assert_eq!(toaster.update_at(Message::Released, now), Effect::None);
        assert!(toaster.is_showing());
    }

    #[test]
    fn dragging_off_the_toast_dismisses() {
        let (mut toaster, now) = shown(Settings::default());
        toaster.update_at(Message::Moved(Point::new(5.0, 5.0)), now);
        toaster.update_at(Message::Pressed, now);

        let effect = toaster.update_at(Message::Exited, now);
        assert_eq!(effect, Effect::Dismissed(DismissReason::Drag));
    }

    #[test]
    fn background_tap_requires_opt_in() {
        let (mut toaster, now) = shown(Settings::default());
        assert_eq!(
            toaster.update_at(Message::BackgroundPressed, now),
            Effect::None
        );

        let (mut toaster, now) = shown(Settings::default().background_tap_to_dismiss(true));
        assert_eq!(
            toaster.update_at(Message::BackgroundPressed, now),
            Effect::Dismissed(DismissReason::BackgroundTap)
        );
    }

    #[test]
    fn dismiss_is_idempotent() {
        let (mut toaster, now) = shown(Settings::default());
        assert_eq!(
            toaster.dismiss_at(DismissReason::Programmatic, now),
            Effect::Dismissed(DismissReason::Programmatic)
        );
        assert_eq!(
            toaster.dismiss_at(DismissReason::Programmatic, now),
            Effect::None
        );
    }

    #[test]
    fn tap_after_reshow_uses_resting_cursor() {
        let (mut toaster, now) = shown(Settings::default().drag_detection(false));
        toaster.update_at(Message::Moved(Point::new(200.0, 40.0)), now);
        let _ = toaster.show_at(now);

        toaster.update_at(Message::Pressed, now);
        toaster.update_at(Message::Moved(Point::new(202.0, 41.0)), now);
        let effect = toaster.update_at(Message::Released, now);

        assert_eq!(effect, Effect::Dismissed(DismissReason::Tap));
        assert!(!toaster.is_showing());
    }

    #[test]
    fn reshow_drops_press_in_progress() {
        let (mut toaster, now) = shown(Settings::default());
        toaster.update_at(Message::Moved(Point::new(10.0, 10.0)), now);
        toaster.update_at(Message::Pressed, now);
        let _ = toaster.show_at(now);

        assert_eq!(toaster.update_at(Message::Released, now), Effect::None);
        assert!(toaster.is_showing());
    }

    #[test]
    fn nothing_is_layered_while_hidden() {
        let toaster = Toaster::new(Settings::default().background_tap_to_dismiss(true));
        assert_eq!(toaster.layers(), None);

        let data = ToasterData::info();
        let _: Element<'_, Message> = toaster.view_data(text("content"), &data, |m| m);
    }

    #[test]
    fn layers_follow_settings_while_entering() {
        let scrim = Color {
            a: 0.4,
            ..palette::BLACK
        };
        let (toaster, _) = shown(
            Settings::default()
                .position(ToasterPosition::Bottom)
                .overlay_background(scrim),
        );

        let layers = toaster.layers().expect("entering toast is layered");
        assert!(!layers.background_tappable);
        assert_eq!(layers.alignment, Vertical::Bottom);
        assert_eq!(layers.appearance, Appearance::HIDDEN);
        assert_eq!(layers.scrim.a, 0.0);

        let data = ToasterData::info();
        let _: Element<'_, Message> = toaster.view_data(text("content"), &data, |m| m);
    }

    #[test]
    fn background_is_tappable_only_when_enabled() {
        let (toaster, _) = shown(Settings::default().background_tap_to_dismiss(true));
        let layers = toaster.layers().expect("shown toast is layered");
        assert!(layers.background_tappable);

        let (toaster, _) = shown(Settings::default());
        let layers = toaster.layers().expect("shown toast is layered");
        assert!(!layers.background_tappable);
    }

    #[test]
    fn exiting_toast_stays_layered_and_ignores_input() {
        let settings = Settings::default().background_tap_to_dismiss(true);
        let (mut toaster, now) = shown(settings);
        toaster.update_at(Message::Animate(now + ENTER_DURATION), now);

        let exit_at = now + ENTER_DURATION;
        toaster.dismiss_at(DismissReason::Programmatic, exit_at);
        assert!(toaster.layers().is_some());
        let _: Element<'_, Message> = toaster.view(
            text("content"),
            |appearance| {
                assert!(appearance.opacity > 0.0);
                text("custom").into()
            },
            |m| m,
        );

        assert_eq!(
            toaster.update_at(Message::BackgroundPressed, exit_at),
            Effect::None
        );
        toaster.update_at(Message::Pressed, exit_at);
        assert_eq!(toaster.update_at(Message::Released, exit_at), Effect::None);
        assert_eq!(toaster.update_at(Message::Exited, exit_at), Effect::None);
        assert!(!toaster.is_showing());
    }

    #[test]
    fn animates_only_during_transitions() {
        let mut toaster = Toaster::default();
        assert!(!toaster.is_animating());

        let now = Instant::now();
        let _ = toaster.show_at(now);
        assert!(toaster.is_animating());

        toaster.update_at(Message::Animate(now + ENTER_DURATION), now);
        assert!(!toaster.is_animating());

        let exit_at = now + ENTER_DURATION;
        toaster.dismiss_at(DismissReason::Tap, exit_at);
        assert!(toaster.is_animating());

        toaster.update_at(Message::Animate(exit_at + EXIT_DURATION), exit_at);
        assert!(!toaster.is_animating());
    }

    #[test]
    fn press_while_hidden_is_ignored() {
        let mut toaster = Toaster::default();
        let now = Instant::now();
        toaster.update_at(Message::Pressed, now);
        assert_eq!(toaster.update_at(Message::Released, now), Effect::None);
    }

    #[test]
    fn animation_frames_settle_transitions() {
        let (mut toaster, now) = shown(Settings::default());
        toaster.update_at(Message::Animate(now + ENTER_DURATION), now);
        assert_eq!(toaster.appearance(), Appearance::SHOWN);

        let exit_at = now + ENTER_DURATION;
        toaster.dismiss_at(DismissReason::Tap, exit_at);
        assert!(toaster.is_visible());

        toaster.update_at(Message::Animate(exit_at + EXIT_DURATION), exit_at);
        assert!(!toaster.is_visible());
    }

    #[test]
    fn scrim_style_paints_color() {
        let style = scrim_style(palette::BLACK);
        assert_eq!(style.background, Some(Background::Color(palette::BLACK)));
    }

    #[tokio::test(start_paused = true)]
    async fn timer_yields_generation_after_duration() {
        let start = tokio::time::Instant::now();
        let generation = expire_after(Duration::from_secs(5), 7).await;

        assert_eq!(generation, 7);
        assert!(start.elapsed() >= Duration::from_secs(5));
    }
}
