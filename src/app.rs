// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the carousel view.
//!
//! The `App` struct wires the engine (carousel, catalog, themes, settings)
//! into the Iced loop: keyboard events become discrete intents, a periodic
//! tick drives animations, and the canvas widget renders the view. Policy
//! decisions (what a key maps to, when settings persist, when the dialog
//! shows) stay in this file so user-facing behavior is easy to audit.

use crate::carousel::{animation::TransitionStyle, CarouselView, Intent, PopulateOutcome};
use crate::catalog::Catalog;
use crate::config::{self, Settings};
use crate::geometry::Vec2;
use crate::script::TracingEventSink;
use crate::theme::ThemeSet;
use crate::ui::canvas::CarouselCanvas;
use crate::ui::{help_bar, message_box};
use iced::widget::{Canvas, Column};
use iced::{event, keyboard, time, window, Element, Length, Subscription, Task, Theme};
use rand::Rng;
use std::time::Instant;

/// Logical screen size the theme layout is computed against; the canvas
/// scales it to the actual window.
const LOGICAL_SCREEN: Vec2 = Vec2::new(1280.0, 720.0);
/// Animation tick interval (~60 Hz).
const TICK_MS: u64 = 16;

const EMPTY_CATALOG_MESSAGE: &str =
    "The selected UI mode has nothing to show,\nreturning to UI mode: FULL";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional theme directory override.
    pub theme_dir: Option<String>,
    /// Optional catalog file override.
    pub catalog: Option<String>,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    KeyPressed(keyboard::Key),
    KeyReleased(keyboard::Key),
    /// Periodic animation tick.
    Tick(Instant),
    MsgBoxDismissed,
}

pub struct App {
    settings: Settings,
    themes: ThemeSet,
    catalog: Catalog,
    carousel: CarouselView,
    events: TracingEventSink,
    /// Body of the one-button dialog, when one is up.
    msgbox: Option<String>,
    last_tick: Option<Instant>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("entries", &self.carousel.len())
            .field("cursor", &self.carousel.cursor())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(640.0, 360.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the `Fn` trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(|_state: &App| String::from("Marquee"))
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state: settings, themes, catalog, and a
    /// populated carousel.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut settings = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load settings, using defaults");
            Settings::default()
        });
        if let Some(theme_dir) = flags.theme_dir {
            settings.theme_dir = Some(theme_dir.into());
        }
        if let Some(catalog) = flags.catalog {
            settings.catalog = Some(catalog.into());
        }

        let themes = settings
            .theme_dir
            .as_deref()
            .map(|dir| {
                ThemeSet::load_from_dir(dir).unwrap_or_else(|err| {
                    tracing::warn!(%err, "failed to load themes");
                    ThemeSet::default()
                })
            })
            .unwrap_or_default();

        let catalog = settings
            .catalog
            .as_deref()
            .map(|path| {
                Catalog::load_from_path(path).unwrap_or_else(|err| {
                    tracing::warn!(%err, "failed to load catalog");
                    Catalog::default()
                })
            })
            .unwrap_or_default();

        let mut carousel = CarouselView::new(LOGICAL_SCREEN);
        carousel.set_transition(
            TransitionStyle::from_name(settings.transition_style_name()),
            settings.move_carousel(),
        );

        let mut app = App {
            settings,
            themes,
            catalog,
            carousel,
            events: TracingEventSink,
            msgbox: None,
            last_tick: None,
        };
        app.repopulate();
        app.carousel.on_show();
        app.carousel.go_to(0, false);

        (app, Task::none())
    }

    /// Rebuilds the carousel entries and handles the empty-catalog recovery
    /// path (persist the mode reset, raise the dialog).
    fn repopulate(&mut self) {
        let outcome =
            self.carousel
                .populate(&self.catalog, &self.themes, &mut self.settings);
        if let PopulateOutcome::EmptyCatalog { mode_was_reset: true } = outcome {
            if let Err(err) = config::save(&self.settings) {
                tracing::warn!(%err, "failed to persist settings");
            }
            self.msgbox = Some(EMPTY_CATALOG_MESSAGE.to_string());
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::KeyPressed(key) => {
                if self.msgbox.is_none() {
                    if let Some(intent) = self.intent_for_press(&key) {
                        if let Some(activated) =
                            self.carousel.handle_intent(intent, &mut self.events)
                        {
                            tracing::info!(collection = %activated, "selection committed");
                        }
                    }
                }
            }
            Message::KeyReleased(key) => {
                if self.msgbox.is_none() && self.is_direction_key(&key) {
                    self.carousel
                        .handle_intent(Intent::DirectionReleased, &mut self.events);
                }
            }
            Message::Tick(now) => {
                let dt_ms = self
                    .last_tick
                    .map(|last| now.saturating_duration_since(last).as_millis() as u32)
                    .unwrap_or(TICK_MS as u32);
                self.last_tick = Some(now);
                self.carousel.update(dt_ms);
            }
            Message::MsgBoxDismissed => {
                self.msgbox = None;
            }
        }
        Task::none()
    }

    /// Maps a pressed key to a carousel intent, honoring the configured
    /// scroll axis.
    fn intent_for_press(&mut self, key: &keyboard::Key) -> Option<Intent> {
        use keyboard::key::Named;
        let vertical = self.carousel.is_vertical_axis();
        match key {
            keyboard::Key::Named(Named::ArrowUp) if vertical => Some(Intent::Previous),
            keyboard::Key::Named(Named::ArrowDown) if vertical => Some(Intent::Next),
            keyboard::Key::Named(Named::ArrowLeft) if !vertical => Some(Intent::Previous),
            keyboard::Key::Named(Named::ArrowRight) if !vertical => Some(Intent::Next),
            keyboard::Key::Named(Named::Enter) => Some(Intent::Activate),
            keyboard::Key::Character(c) if c.as_str() == "r" => {
                let len = self.carousel.len();
                (len > 0).then(|| Intent::JumpTo(rand::rng().random_range(0..len)))
            }
            _ => None,
        }
    }

    fn is_direction_key(&self, key: &keyboard::Key) -> bool {
        use keyboard::key::Named;
        matches!(
            key,
            keyboard::Key::Named(
                Named::ArrowUp | Named::ArrowDown | Named::ArrowLeft | Named::ArrowRight
            )
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                    Some(Message::KeyPressed(key))
                }
                event::Event::Keyboard(keyboard::Event::KeyReleased { key, .. }) => {
                    Some(Message::KeyReleased(key))
                }
                _ => None,
            }
        });
        let tick = time::every(std::time::Duration::from_millis(TICK_MS)).map(Message::Tick);
        Subscription::batch([keys, tick])
    }

    fn view(&self) -> Element<'_, Message> {
        if let Some(body) = &self.msgbox {
            return message_box::message_box(body, Message::MsgBoxDismissed);
        }

        let canvas = Canvas::new(CarouselCanvas {
            view: &self.carousel,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        Column::new()
            .push(canvas)
            .push(help_bar::help_bar(&self.carousel.help_prompts()))
            .into()
    }
}
