// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: the current position in the media sequence.
//!
//! Indices wrap in both directions. Every step reports the new index so the
//! orchestrator can reset the transform, even when the sequence has a single
//! item and the index does not move.

/// Navigation sub-component state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    current_index: usize,
    len: usize,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NavigateNext,
    NavigatePrevious,
}

/// Effects produced by navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The displayed item changed (or was re-selected); the transform must be reset.
    IndexChanged(usize),
}

impl State {
    /// Creates navigation state over `len` items, starting at `initial_index`.
    ///
    /// `len` must be at least 1; `initial_index` wraps into range.
    #[must_use]
    pub fn new(len: usize, initial_index: usize) -> Self {
        let len = len.max(1);
        Self {
            current_index: initial_index % len,
            len,
        }
    }

    /// Handle a navigation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        self.current_index = match msg {
            Message::NavigateNext => (self.current_index + 1) % self.len,
            Message::NavigatePrevious => (self.current_index + self.len - 1) % self.len,
        };
        Effect::IndexChanged(self.current_index)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// One-based position label, e.g. `"3 / 12"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.len)
    }
}
