// SPDX-License-Identifier: MPL-2.0
//! Fullscreen sub-component.
//!
//! Tracks whether the viewer asked the platform for fullscreen. The flag is
//! set optimistically when the request is issued; the platform's answer is
//! never observed, so a denied request leaves the flag set.

/// Fullscreen sub-component state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    is_fullscreen: bool,
}

/// Messages for the fullscreen sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
    /// Leave fullscreen if the viewer owns it (session teardown).
    Release,
}

/// Platform requests produced by the fullscreen sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    RequestEnter,
    RequestExit,
}

impl State {
    /// Handle a fullscreen message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle if self.is_fullscreen => {
                self.is_fullscreen = false;
                Effect::RequestExit
            }
            Message::Toggle => {
                self.is_fullscreen = true;
                Effect::RequestEnter
            }
            Message::Release if self.is_fullscreen => {
                self.is_fullscreen = false;
                Effect::RequestExit
            }
            Message::Release => Effect::None,
        }
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }
}
