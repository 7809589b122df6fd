// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toast overlay.
//!
//! The `App` struct owns one [`Toaster`] and the data of the toast it
//! currently renders. Buttons show a toast of each premade type, flip the
//! anchor edge, or open a custom slide-over card with a scrim.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::design_tokens::{opacity, palette};
use crate::ui::toaster::{
    DismissReason, Effect, Settings, Toaster, ToasterData, ToasterPosition, ToasterType,
};
use iced::{window, Color, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;

const DEFAULT_TITLE: &str = "Hello";
const DEFAULT_MESSAGE: &str = "Here's some info.";

/// Root Iced application state.
pub struct App {
    config: Config,
    toaster: Toaster,
    data: ToasterData,
    /// Anchor edge for the next standard toast.
    position: ToasterPosition,
    /// Whether the custom slide-over example is the active content.
    custom: bool,
    title: String,
    message: Option<String>,
    last_dismissal: Option<DismissReason>,
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("showing", &self.toaster.is_showing())
            .field("position", &self.position)
            .field("custom", &self.custom)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Overlay behavior of the custom slide-over example.
fn custom_settings() -> Settings {
    Settings::default()
        .auto_dismiss(false)
        .background_tap_to_dismiss(true)
        .drag_detection(false)
        .overlay_background(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        })
}

impl App {
    /// Applies command-line flags over the loaded configuration and shows the
    /// first toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if flags.config_dir.is_some() {
            config::paths::init_cli_override(flags.config_dir.clone());
        }

        let (config, config_warning) = config::load();
        if let Some(warning) = &config_warning {
            tracing::warn!(%warning, "using default configuration");
        }

        Self::with_config(flags, config, config_warning)
    }

    /// Builds the app from an already loaded configuration.
    fn with_config(
        flags: Flags,
        mut config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        if let Some(kind) = flags.kind {
            config.toast.kind = Some(kind);
        }
        if let Some(position) = flags.position {
            config.toast.position = Some(position);
        }
        if let Some(secs) = flags.duration_secs {
            config.toast.duration_secs = Some(secs);
        }
        if flags.persist {
            config.toast.auto_dismiss = Some(false);
        }

        let mut app = App {
            toaster: Toaster::new(config.toaster_settings()),
            data: config.toaster_data(),
            position: config.toast.position.unwrap_or_default(),
            custom: false,
            title: flags.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            message: flags.message.or_else(|| Some(DEFAULT_MESSAGE.to_string())),
            last_dismissal: None,
            config_warning,
            config,
        };

        let task = if flags.custom {
            app.show_custom()
        } else {
            let kind = app.config.toast.kind.unwrap_or_default();
            app.show(kind)
        };

        (app, task)
    }

    fn title(&self) -> String {
        if self.toaster.is_showing() {
            "Iced Toaster \u{2022} showing".to_string()
        } else {
            "Iced Toaster".to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toaster.subscription().map(Message::Toaster)
    }

    fn show(&mut self, kind: ToasterType) -> Task<Message> {
        let mut data = ToasterData::new(kind)
            .title(self.title.clone())
            .position(self.position)
            .auto_dismiss(self.config.toast.auto_dismiss.unwrap_or(true))
            .duration(self.config.toast_duration());
        if let Some(message) = &self.message {
            data = data.message(message.clone());
        }

        let settings = self.config.toaster_settings().position(self.position);
        self.toaster.set_settings(settings);
        self.data = data;
        self.custom = false;

        self.toaster.show().map(Message::Toaster)
    }

    fn show_custom(&mut self) -> Task<Message> {
        self.toaster.set_settings(custom_settings());
        self.custom = true;
        self.toaster.show().map(Message::Toaster)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(kind) => self.show(kind),
            Message::ShowCustom => self.show_custom(),
            Message::CloseCustom => {
                let effect = self.toaster.dismiss();
                self.record(effect);
                Task::none()
            }
            Message::TogglePosition => {
                self.position = self.position.flipped();
                Task::none()
            }
            Message::Toaster(toaster_message) => {
                let effect = self.toaster.update(toaster_message);
                self.record(effect);
                Task::none()
            }
        }
    }

    fn record(&mut self, effect: Effect) {
        if let Effect::Dismissed(reason) = effect {
            self.last_dismissal = Some(reason);
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = view::content(view::ViewContext {
            position: self.position,
            showing: self.toaster.is_showing(),
            last_dismissal: self.last_dismissal,
            config_warning: self.config_warning.as_deref(),
        });

        if self.custom {
            self.toaster.view(content, view::custom_card, Message::Toaster)
        } else {
            self.toaster.view_data(content, &self.data, Message::Toaster)
        }
    }
}
