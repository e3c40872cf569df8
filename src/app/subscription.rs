// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (touch, mouse, keyboard, window)
//! to the viewer session based on the current application state.

use super::{Message, Screen};
use crate::ui::viewer::component;
use iced::{event, mouse, touch, window, Subscription};
use std::time::Instant;

/// Creates the event subscription for the current screen.
///
/// - Viewer with keyboard listener: pointer and keyboard input reach the session
/// - Viewer after the listener was removed: pointer input only
/// - Empty: window close requests only
///
/// Touch and mouse presses captured by a control button are not forwarded, so
/// tapping a button never starts a drag or counts towards a double tap. Touch
/// moves, lifts and losses are always forwarded.
pub fn create_event_subscription(screen: Screen, keyboard_listening: bool) -> Subscription<Message> {
    match (screen, keyboard_listening) {
        (Screen::Viewer, true) => event::listen_with(|event, status, window_id| {
            if let event::Event::Window(window::Event::CloseRequested) = &event {
                return Some(Message::WindowCloseRequested(window_id));
            }

            if let event::Event::Keyboard(..) = &event {
                return match status {
                    event::Status::Ignored => Some(viewer_event(window_id, event)),
                    event::Status::Captured => None,
                };
            }

            route_pointer(event, status, window_id)
        }),
        (Screen::Viewer, false) => event::listen_with(|event, status, window_id| {
            if let event::Event::Window(window::Event::CloseRequested) = &event {
                return Some(Message::WindowCloseRequested(window_id));
            }
            route_pointer(event, status, window_id)
        }),
        (Screen::Empty, _) => event::listen_with(|event, _status, window_id| {
            if let event::Event::Window(window::Event::CloseRequested) = &event {
                return Some(Message::WindowCloseRequested(window_id));
            }
            None
        }),
    }
}

fn route_pointer(
    event: event::Event,
    status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    match &event {
        event::Event::Touch(touch::Event::FingerPressed { .. }) => match status {
            event::Status::Ignored => Some(viewer_event(window_id, event)),
            event::Status::Captured => None,
        },
        // Contacts the session never saw pressed are ignored there.
        event::Event::Touch(
            touch::Event::FingerMoved { .. }
            | touch::Event::FingerLifted { .. }
            | touch::Event::FingerLost { .. },
        ) => Some(viewer_event(window_id, event)),
        event::Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorLeft) => {
            Some(viewer_event(window_id, event))
        }
        event::Event::Mouse(
            mouse::Event::ButtonPressed(mouse::Button::Left)
            | mouse::Event::ButtonReleased(mouse::Button::Left),
        ) => match status {
            event::Status::Ignored => Some(viewer_event(window_id, event)),
            event::Status::Captured => None,
        },
        _ => None,
    }
}

fn viewer_event(window_id: window::Id, event: event::Event) -> Message {
    Message::Viewer(component::Message::RawEvent {
        window: window_id,
        event,
        at: Instant::now(),
    })
}
