// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::application::port::ArchiveError;
use crate::i18n::fluent::I18n;
use crate::ui::viewer::ViewerSession;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub session: Option<&'a ViewerSession>,
    pub load_error: Option<&'a ArchiveError>,
    /// Whether a session was open earlier and has been closed.
    pub was_closed: bool,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.session) {
        (Screen::Viewer, Some(session)) => session.view(ctx.i18n).map(Message::Viewer),
        _ => view_empty(ctx.i18n, ctx.load_error, ctx.was_closed),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_empty<'a>(
    i18n: &'a I18n,
    load_error: Option<&'a ArchiveError>,
    was_closed: bool,
) -> Element<'a, Message> {
    let hint = match load_error {
        Some(error) => error_message(i18n, error),
        None if was_closed => i18n.tr("empty-state-closed"),
        None => i18n.tr("empty-state-hint"),
    };

    let content = Column::new()
        .spacing(12)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("empty-state-title")).size(24))
        .push(Text::new(hint).size(16));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Localized description of an extraction failure.
pub fn error_message(i18n: &I18n, error: &ArchiveError) -> String {
    match error {
        ArchiveError::CorruptOrUnsupported(detail) if !detail.is_empty() => {
            i18n.tr_with_args("error-archive-corrupt-detail", &[("detail", detail.as_str())])
        }
        other => i18n.tr(other.i18n_key()),
    }
}
