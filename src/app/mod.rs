// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the photo store, the selection engine, the
//! gallery controller, and the UI surfaces together, and translates
//! messages into side effects like catalog fetches and photo
//! downloads. The store is constructed here, lives exactly as long as
//! the application, and is passed by reference to whichever views need
//! it; nothing in the crate reaches for it globally.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::selection::SelectionEngine;
use crate::catalog::{CatalogFetcher, PhotoId, PhotoStore};
use crate::config::{self, Config, ThemeMode};
use crate::gallery::GalleryController;
use crate::i18n::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::photo_cache::PhotoCache;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 760.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    store: PhotoStore,
    engine: SelectionEngine,
    controller: GalleryController,
    fetcher: CatalogFetcher,
    photo_cache: PhotoCache,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Abort handle of the in-flight catalog fetch; aborting on drop
    /// ties the fetch's lifetime to the app's.
    fetch_handle: Option<iced::task::Handle>,
    /// Whether any fetch has completed yet (drives refresh feedback).
    has_loaded_once: bool,
    // Current Home surface picks, re-drawn on every applied catalog.
    home_hero: Option<PhotoId>,
    home_band: Option<PhotoId>,
    home_cards: Vec<PhotoId>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("photos", &self.store.photos().len())
            .field("is_loading", &self.store.is_loading())
            .finish()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait bound
    // while only consuming the flags once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the one startup
    /// catalog fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_error) = match config::load() {
            Ok(config) => (config, None),
            Err(error) => (Config::default(), Some(error)),
        };

        let i18n = I18n::new(flags.lang, &config);
        let base_url = flags
            .base_url
            .unwrap_or_else(|| config.base_url().to_string());
        let endpoint = config.endpoint().to_string();
        let fetcher =
            CatalogFetcher::new(base_url, endpoint).expect("HTTP client initialization failed");
        let theme_mode = config.general.theme_mode;

        let mut app = App {
            i18n,
            config,
            screen: Screen::default(),
            store: PhotoStore::new(),
            engine: SelectionEngine::new(),
            controller: GalleryController::new(),
            fetcher,
            photo_cache: PhotoCache::new(),
            notifications: notifications::Manager::new(),
            theme_mode,
            fetch_handle: None,
            has_loaded_once: false,
            home_hero: None,
            home_band: None,
            home_cards: Vec::new(),
        };

        if let Some(error) = config_error {
            eprintln!("Failed to load settings: {error}");
            app.notifications
                .push(Notification::warning("notification-config-error"));
        }

        let task = update::start_fetch(&mut app);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark | ThemeMode::System => Theme::Dark,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::keyboard_subscription(self.controller.is_viewing()),
            subscription::tick_subscription(self.notifications.has_notifications()),
        ])
    }
}
