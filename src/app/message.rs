// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer::component;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// The window asked to close; the session is torn down first.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Unpacked archive folder to open on startup.
    pub folder: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Zero-based index of the first item to show; wrapped into range.
    pub start_index: Option<usize>,
}
