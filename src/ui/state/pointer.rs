// SPDX-License-Identifier: MPL-2.0
//! Per-interaction pointer bookkeeping.
//!
//! This is scratch state that survives between input events but never
//! triggers a redraw on its own. Everything except the last tap timestamp is
//! reset when a new interaction begins.

use iced::Point;
use std::time::Instant;

/// Input device that produced a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Touch,
    Mouse,
}

/// Tracking state for the interaction in progress.
#[derive(Debug, Clone)]
pub struct PointerTrackState {
    /// Distance between the two contacts when the pinch started.
    /// `None` when no pinch is active.
    pub initial_pinch_distance: Option<f32>,

    /// Scale at the moment the pinch started.
    pub initial_scale: f32,

    /// Whether a single contact is driving the interaction.
    pub is_panning: bool,

    /// Device that started the current interaction.
    pub kind: PointerKind,

    /// Where the single-contact interaction started (swipe origin).
    pub start_point: Point,

    /// Last observed single-contact position (pan origin).
    pub last_point: Point,

    /// Set once a pinch baseline is recorded; cleared only when a new
    /// interaction starts from zero contacts.
    pub pinch_seen: bool,

    /// Last tap, kept across interactions for double-tap detection.
    pub last_tap: Option<Instant>,
}

impl Default for PointerTrackState {
    fn default() -> Self {
        Self {
            initial_pinch_distance: None,
            initial_scale: 1.0,
            is_panning: false,
            kind: PointerKind::default(),
            start_point: Point::ORIGIN,
            last_point: Point::ORIGIN,
            pinch_seen: false,
            last_tap: None,
        }
    }
}

impl PointerTrackState {
    /// Starts a single-contact interaction at `position`.
    ///
    /// Clears pinch bookkeeping but keeps `last_tap`.
    pub fn begin(&mut self, kind: PointerKind, position: Point) {
        let last_tap = self.last_tap;
        *self = Self {
            is_panning: true,
            kind,
            start_point: position,
            last_point: position,
            last_tap,
            ..Self::default()
        };
    }

    /// Records the pinch baseline.
    pub fn begin_pinch(&mut self, distance: f32, scale: f32) {
        self.initial_pinch_distance = Some(distance);
        self.initial_scale = scale;
        self.pinch_seen = true;
    }

    /// Clears the in-flight flags at the end of an interaction step.
    pub fn end(&mut self) {
        self.initial_pinch_distance = None;
        self.is_panning = false;
    }

    /// Drops everything except the tap history.
    pub fn discard(&mut self) {
        let last_tap = self.last_tap;
        *self = Self {
            last_tap,
            ..Self::default()
        };
    }

    /// Records a tap and reports whether it pairs with the previous one.
    pub fn register_tap(&mut self, now: Instant, window: std::time::Duration) -> bool {
        let is_double = self
            .last_tap
            .is_some_and(|previous| now.saturating_duration_since(previous) < window);
        self.last_tap = Some(now);
        is_double
    }
}

/// Euclidean distance between two contacts.
#[must_use]
pub fn distance(a: Point, b: Point) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}
