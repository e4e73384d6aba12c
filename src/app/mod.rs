// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the two screens.
//!
//! The `App` struct owns the catalog and the single piece of navigation
//! state: which image, if any, is open in the full-screen viewer. `None`
//! composes the thumbnail grid; `Some` composes the viewer. This file keeps
//! the policy decisions (window size, locale resolution, screen switching)
//! close to the main update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{Catalog, CatalogEntry, ImageId};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::{gallery, viewer};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state: the screen controller.
pub struct App {
    i18n: I18n,
    catalog: Catalog,
    /// `None` shows the thumbnail grid, `Some` the full-screen viewer.
    viewer: Option<viewer::State>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("catalog_len", &self.catalog.len())
            .field("selected_image", &self.selected_image())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
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
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            catalog: Catalog::bundled(),
            viewer: None,
            theme_mode: ThemeMode::default(),
        }
    }
}

impl App {
    /// Initializes application state from the configuration file and the
    /// launcher flags. Always starts on the thumbnail grid.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default configuration");
            config::Config::default()
        });

        let app = App {
            i18n: I18n::new(flags.lang, &config),
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.selected_image() {
            Some(id) => format!("{} - {}", id.name(), app_name),
            None => app_name,
        }
    }

    /// Identifier of the image currently shown full-screen, if any.
    fn selected_image(&self) -> Option<ImageId> {
        self.viewer
            .as_ref()
            .and_then(|viewer| self.catalog.get(viewer.current_index()))
            .map(CatalogEntry::id)
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.viewer.is_some())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery::Message::ImagePressed(id)) => {
                match self.catalog.position(id) {
                    Some(index) => {
                        self.viewer = Some(viewer::State::new(index, self.catalog.len()));
                    }
                    // Stale identifier: stay on the grid instead of opening
                    // the viewer on a bogus index.
                    None => tracing::warn!(image = %id, "tapped image is not in the catalog"),
                }
                Task::none()
            }
            Message::Viewer(viewer_message) => {
                if let Some(viewer) = self.viewer.as_mut() {
                    if viewer.handle_message(viewer_message) == viewer::Effect::Closed {
                        self.viewer = None;
                    }
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            viewer: self.viewer.as_ref(),
        })
    }
}
