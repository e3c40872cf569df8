// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the viewer session.
//!
//! The `App` struct opens the folder given on the command line, hands the
//! resulting sequence to a [`ViewerSession`] and translates the session's
//! effects into window tasks (fullscreen, teardown). When the session closes
//! the app falls back to an empty screen instead of exiting.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::{ArchiveError, ArchiveExtractor, ArchiveRecord};
use crate::domain::media::MediaSequence;
use crate::i18n::fluent::I18n;
use crate::infrastructure::FolderExtractor;
use crate::ui::viewer::{component, Effect, ViewerSession};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    session: Option<ViewerSession>,
    window_id: Option<window::Id>,
    /// Why the startup folder could not be opened, if it failed.
    load_error: Option<ArchiveError>,
    /// Set once a session has been closed by the user.
    was_closed: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_session", &self.session.is_some())
            .field("load_error", &self.load_error)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
///
/// Close requests are handled by the app so the session is closed before
/// the application exits. Fullscreen is not restored first.
pub fn window_settings(start_fullscreen: bool) -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        fullscreen: start_fullscreen,
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    let start_fullscreen = config.viewer.start_fullscreen.unwrap_or(false);

    // iced 0.14 requires a `Fn` boot closure; the state is consumed once.
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, config_warning) = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(|| (Flags::default(), Config::default(), None));
        App::new(flags, &config, config_warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(start_fullscreen))
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application state and opens the startup folder, if any.
    fn new(flags: Flags, config: &Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        if let Some(key) = config_warning {
            eprintln!("[app] {}", i18n.tr(&key));
        }

        let mut app = App {
            i18n,
            screen: Screen::Empty,
            session: None,
            window_id: None,
            load_error: None,
            was_closed: false,
        };

        if let Some(folder) = flags.folder.as_deref() {
            match open_folder(&FolderExtractor::new(), Path::new(folder)) {
                Ok(sequence) => {
                    let mut session =
                        ViewerSession::open(sequence, flags.start_index.unwrap_or(0))
                            .with_zoom_step(config.viewer.effective_zoom_step());
                    if config.viewer.start_fullscreen.unwrap_or(false) {
                        // The window is created fullscreen; only the flag is recorded.
                        let _ = session.toggle_fullscreen();
                    }
                    app.session = Some(session);
                    app.screen = Screen::Viewer;
                }
                Err(error) => {
                    eprintln!("[app] Failed to open {folder}: {error}");
                    app.load_error = Some(error);
                }
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.session {
            Some(session) => format!("{} - {app_name}", session.current_media().name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let listening = self
            .session
            .as_ref()
            .is_some_and(ViewerSession::is_listening);
        subscription::create_event_subscription(self.screen, listening)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(message) => {
                if let component::Message::RawEvent { window, .. } = &message {
                    self.window_id = Some(*window);
                }
                let Some(session) = self.session.as_mut() else {
                    return Task::none();
                };
                let effect = session.handle_message(message);
                self.apply_effect(effect)
            }
            Message::WindowCloseRequested(window) => {
                self.window_id = Some(window);
                if let Some(session) = self.session.as_mut() {
                    // Leaving fullscreen is moot once the window closes.
                    let _ = session.close();
                }
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            session: self.session.as_ref(),
            load_error: self.load_error.as_ref(),
            was_closed: self.was_closed,
        })
    }

    fn apply_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None | Effect::Redraw => Task::none(),
            Effect::EnterFullscreen => self.set_window_mode(window::Mode::Fullscreen),
            Effect::ExitFullscreen => self.set_window_mode(window::Mode::Windowed),
            Effect::Closed { exit_fullscreen } => {
                self.session = None;
                self.screen = Screen::Empty;
                self.was_closed = true;
                if exit_fullscreen {
                    self.set_window_mode(window::Mode::Windowed)
                } else {
                    Task::none()
                }
            }
        }
    }

    /// Requests a window mode change. The platform's answer is not observed.
    fn set_window_mode(&self, mode: window::Mode) -> Task<Message> {
        match self.window_id {
            Some(window_id) => window::set_mode(window_id, mode),
            None => Task::none(),
        }
    }
}

/// Opens an unpacked archive folder through the extractor port.
fn open_folder(
    extractor: &dyn ArchiveExtractor,
    folder: &Path,
) -> Result<MediaSequence, ArchiveError> {
    let size_bytes = std::fs::metadata(folder).map(|m| m.len()).unwrap_or(0);
    let added_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0);
    let record = ArchiveRecord::new(
        folder.to_string_lossy().into_owned(),
        folder,
        size_bytes,
        added_ms,
    );
    extractor.extract(&record, record.cached_password())
}
