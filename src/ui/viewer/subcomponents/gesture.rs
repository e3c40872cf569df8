// SPDX-License-Identifier: MPL-2.0
//! Gesture classification over the raw pointer stream.
//!
//! Every message carries the full set of contacts active at that moment, so
//! the classifier can tell a single-contact drag from a two-contact pinch
//! without tracking individual fingers. Decisions are made against
//! [`PointerTrackState`] as it stood after the previous message.
//!
//! | Situation                         | Outcome                                  |
//! |-----------------------------------|------------------------------------------|
//! | start, one contact                | pan anchor, double-tap check             |
//! | start, two contacts               | pinch baseline                           |
//! | move, two contacts, baseline set  | absolute scale from distance ratio       |
//! | move, one contact, panning        | pan when zoomed, anchor always advances  |
//! | release of last contact           | swipe when at rest zoom and never pinched|

use crate::app::config::{
    DOUBLE_TAP_SCALE, DOUBLE_TAP_WINDOW, MOUSE_SWIPE_MIN_DX, TOUCH_SWIPE_MAX_DY,
    TOUCH_SWIPE_MIN_DX,
};
use crate::ui::state::pointer::{distance, PointerKind, PointerTrackState};
use crate::ui::state::TransformModel;
use iced::Point;
use std::time::Instant;

/// Gesture sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    tracker: PointerTrackState,
}

/// Pointer input, already grouped by active contacts.
#[derive(Debug, Clone)]
pub enum Message {
    /// A contact went down. `contacts` lists every active contact, the new one included.
    Start {
        kind: PointerKind,
        contacts: Vec<Point>,
        at: Instant,
    },
    /// One or more contacts moved. `contacts` lists every active contact.
    Move { contacts: Vec<Point> },
    /// A contact was released at `released`; `remaining` contacts are still down.
    End { released: Point, remaining: usize },
    /// The pointer left the surface or the platform took the contact away.
    Cancel,
}

/// Outcome of a classified event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The transform was mutated and must be redrawn.
    TransformChanged,
    /// A swipe towards the left was recognized.
    NavigateNext,
    /// A swipe towards the right was recognized.
    NavigatePrevious,
}

impl State {
    /// Classify one event, mutating `transform` in place when the gesture calls for it.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, transform: &mut TransformModel) -> Effect {
        match msg {
            Message::Start { kind, contacts, at } => self.on_start(kind, &contacts, at, transform),
            Message::Move { contacts } => self.on_move(&contacts, transform),
            Message::End {
                released,
                remaining,
            } => self.on_end(released, remaining, transform),
            Message::Cancel => {
                self.tracker.end();
                Effect::None
            }
        }
    }

    /// Forget the in-flight interaction. Tap history is kept.
    pub fn discard(&mut self) {
        self.tracker.discard();
    }

    #[must_use]
    pub fn tracker(&self) -> &PointerTrackState {
        &self.tracker
    }

    /// Whether a two-contact pinch is currently driving the scale.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.tracker.initial_pinch_distance.is_some()
    }

    fn on_start(
        &mut self,
        kind: PointerKind,
        contacts: &[Point],
        at: Instant,
        transform: &mut TransformModel,
    ) -> Effect {
        match contacts {
            [] => Effect::None,
            [single] => {
                self.tracker.begin(kind, *single);
                if !self.tracker.register_tap(at, DOUBLE_TAP_WINDOW) {
                    return Effect::None;
                }
                if transform.has_unit_scale() {
                    transform.set_scale(DOUBLE_TAP_SCALE);
                } else {
                    transform.reset();
                }
                Effect::TransformChanged
            }
            [first, second, ..] => {
                self.tracker
                    .begin_pinch(distance(*first, *second), transform.scale());
                Effect::None
            }
        }
    }

    fn on_move(&mut self, contacts: &[Point], transform: &mut TransformModel) -> Effect {
        match contacts {
            [first, second, ..] => match self.tracker.initial_pinch_distance {
                Some(initial) if initial > 0.0 => {
                    let ratio = distance(*first, *second) / initial;
                    transform.set_scale(self.tracker.initial_scale * ratio);
                    Effect::TransformChanged
                }
                _ => Effect::None,
            },
            [current] if self.tracker.is_panning => {
                let last = self.tracker.last_point;
                self.tracker.last_point = *current;
                if transform.is_pannable() {
                    transform.pan(current.x - last.x, current.y - last.y);
                    Effect::TransformChanged
                } else {
                    Effect::None
                }
            }
            _ => Effect::None,
        }
    }

    fn on_end(&mut self, released: Point, remaining: usize, transform: &TransformModel) -> Effect {
        let effect = if remaining == 0
            && self.tracker.is_panning
            && !self.tracker.pinch_seen
            && transform.is_at_rest_zoom()
        {
            let start = self.tracker.start_point;
            classify_swipe(self.tracker.kind, released.x - start.x, released.y - start.y)
        } else {
            Effect::None
        };

        self.tracker.end();
        effect
    }
}

/// Maps a release displacement to a navigation effect.
fn classify_swipe(kind: PointerKind, dx: f32, dy: f32) -> Effect {
    let is_swipe = match kind {
        PointerKind::Touch => dx.abs() > TOUCH_SWIPE_MIN_DX && dy.abs() < TOUCH_SWIPE_MAX_DY,
        PointerKind::Mouse => dx.abs() > MOUSE_SWIPE_MIN_DX,
    };

    if !is_swipe {
        Effect::None
    } else if dx > 0.0 {
        Effect::NavigatePrevious
    } else {
        Effect::NavigateNext
    }
}
