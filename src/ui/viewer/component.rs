// SPDX-License-Identifier: MPL-2.0
//! Viewer session: composition of the gesture, navigation and fullscreen
//! sub-components around one [`TransformModel`].
//!
//! The session turns raw Iced events into sub-component messages, routes the
//! explicit controls, and produces the [`RenderDescriptor`] the view reads.
//! Once closed, it ignores every further message.

use crate::app::config::{DEFAULT_ZOOM_STEP, ROTATION_STEP_DEGREES};
use crate::domain::media::{MediaItem, MediaSequence};
use crate::i18n::fluent::I18n;
use crate::ui::state::{PointerKind, TransformModel};
use crate::ui::viewer::controls;
use crate::ui::viewer::subcomponents::{fullscreen, gesture, navigation};
use iced::{event, keyboard, mouse, touch, window, Element, Point};
use std::time::Instant;

/// Messages handled by the viewer session.
#[derive(Debug, Clone)]
pub enum Message {
    /// Window-level input, stamped with its arrival time.
    RawEvent {
        window: window::Id,
        event: event::Event,
        at: Instant,
    },
    Controls(controls::Message),
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Visible state changed.
    Redraw,
    EnterFullscreen,
    ExitFullscreen,
    /// The session ended. Emitted exactly once; `exit_fullscreen` is set when
    /// the session still owned fullscreen and the window must leave it.
    Closed { exit_fullscreen: bool },
}

/// Hint line shown under the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Zoomed,
    Resting,
}

impl Hint {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Hint::Zoomed => "viewer-hint-zoomed",
            Hint::Resting => "viewer-hint-resting",
        }
    }
}

/// Everything the view needs to draw the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescriptor<'a> {
    pub media: &'a MediaItem,
    /// Transform with offsets zeroed whenever they must not be visible.
    pub transform: TransformModel,
    /// One-based position, e.g. `"3 / 12"`.
    pub index_label: String,
    pub show_navigation_arrows: bool,
    pub show_reset: bool,
    pub hint: Hint,
    pub is_fullscreen: bool,
}

/// Full-screen viewer over one [`MediaSequence`].
#[derive(Debug, Clone)]
pub struct ViewerSession {
    sequence: MediaSequence,
    transform: TransformModel,
    gesture: gesture::State,
    navigation: navigation::State,
    fullscreen: fullscreen::State,
    /// Active touch contacts in press order.
    fingers: Vec<(touch::Finger, Point)>,
    cursor_position: Option<Point>,
    mouse_pressed: bool,
    zoom_step: f32,
    /// Keyboard listener registration; the app subscribes to keys only while set.
    keyboard_listener: bool,
    closed: bool,
}

impl ViewerSession {
    /// Opens a session on `sequence`, starting at `initial_index` (wrapped into range).
    #[must_use]
    pub fn open(sequence: MediaSequence, initial_index: usize) -> Self {
        let navigation = navigation::State::new(sequence.len(), initial_index);
        Self {
            sequence,
            transform: TransformModel::IDENTITY,
            gesture: gesture::State::default(),
            navigation,
            fullscreen: fullscreen::State::default(),
            fingers: Vec::new(),
            cursor_position: None,
            mouse_pressed: false,
            zoom_step: DEFAULT_ZOOM_STEP,
            keyboard_listener: true,
            closed: false,
        }
    }

    /// Sets the scale increment of the zoom buttons.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f32) -> Self {
        self.zoom_step = step;
        self
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        if self.closed {
            return Effect::None;
        }
        match message {
            Message::RawEvent { event, at, .. } => self.handle_raw_event(event, at),
            Message::Controls(control) => self.handle_control(control),
        }
    }

    pub fn next(&mut self) -> Effect {
        self.navigate(navigation::Message::NavigateNext)
    }

    pub fn previous(&mut self) -> Effect {
        self.navigate(navigation::Message::NavigatePrevious)
    }

    pub fn toggle_fullscreen(&mut self) -> Effect {
        if self.closed {
            return Effect::None;
        }
        match self.fullscreen.handle(fullscreen::Message::Toggle) {
            fullscreen::Effect::RequestEnter => Effect::EnterFullscreen,
            fullscreen::Effect::RequestExit => Effect::ExitFullscreen,
            fullscreen::Effect::None => Effect::None,
        }
    }

    /// Ends the session. Only the first call has an effect.
    pub fn close(&mut self) -> Effect {
        if self.closed {
            return Effect::None;
        }
        self.closed = true;
        self.keyboard_listener = false;
        self.gesture.discard();
        self.fingers.clear();
        self.mouse_pressed = false;

        let exit_fullscreen = matches!(
            self.fullscreen.handle(fullscreen::Message::Release),
            fullscreen::Effect::RequestExit
        );
        Effect::Closed { exit_fullscreen }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the keyboard listener registration is installed.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.keyboard_listener
    }

    #[must_use]
    pub fn transform(&self) -> &TransformModel {
        &self.transform
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigation.current_index()
    }

    #[must_use]
    pub fn current_media(&self) -> &MediaItem {
        self.sequence.get_wrapped(self.navigation.current_index())
    }

    #[must_use]
    pub fn sequence(&self) -> &MediaSequence {
        &self.sequence
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    #[must_use]
    pub fn gesture(&self) -> &gesture::State {
        &self.gesture
    }

    /// Builds the descriptor for the current state.
    #[must_use]
    pub fn render(&self) -> RenderDescriptor<'_> {
        RenderDescriptor {
            media: self.current_media(),
            transform: self.transform.visible(),
            index_label: self.navigation.position_label(),
            show_navigation_arrows: self.transform.is_at_rest_zoom(),
            show_reset: self.transform.is_modified(),
            hint: if self.transform.is_pannable() {
                Hint::Zoomed
            } else {
                Hint::Resting
            },
            is_fullscreen: self.fullscreen.is_fullscreen(),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        super::view(i18n, self.render())
    }

    fn navigate(&mut self, msg: navigation::Message) -> Effect {
        if self.closed {
            return Effect::None;
        }
        let navigation::Effect::IndexChanged(_) = self.navigation.handle(msg);
        self.transform.reset();
        Effect::Redraw
    }

    fn handle_control(&mut self, control: controls::Message) -> Effect {
        match control {
            controls::Message::ZoomIn => {
                self.transform.zoom(self.zoom_step);
                Effect::Redraw
            }
            controls::Message::ZoomOut => {
                self.transform.zoom(-self.zoom_step);
                Effect::Redraw
            }
            controls::Message::RotateLeft => {
                self.transform.rotate(-ROTATION_STEP_DEGREES);
                Effect::Redraw
            }
            controls::Message::RotateRight => {
                self.transform.rotate(ROTATION_STEP_DEGREES);
                Effect::Redraw
            }
            controls::Message::ResetTransform => {
                self.transform.reset();
                Effect::Redraw
            }
            controls::Message::ToggleFullscreen => self.toggle_fullscreen(),
            controls::Message::Close => self.close(),
            controls::Message::NavigatePrevious => self.previous(),
            controls::Message::NavigateNext => self.next(),
        }
    }

    fn handle_raw_event(&mut self, event: event::Event, at: Instant) -> Effect {
        match event {
            event::Event::Touch(touch_event) => self.handle_touch(touch_event, at),
            event::Event::Mouse(mouse_event) => self.handle_mouse(mouse_event, at),
            event::Event::Keyboard(keyboard_event) => self.handle_keyboard(keyboard_event),
            _ => Effect::None,
        }
    }

    fn handle_keyboard(&mut self, event: keyboard::Event) -> Effect {
        if !self.keyboard_listener {
            return Effect::None;
        }
        match event {
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            } => self.close(),
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            } => self.next(),
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            } => self.previous(),
            _ => Effect::None,
        }
    }

    fn handle_touch(&mut self, event: touch::Event, at: Instant) -> Effect {
        let msg = match event {
            touch::Event::FingerPressed { id, position } => {
                self.fingers.retain(|(finger, _)| *finger != id);
                self.fingers.push((id, position));
                gesture::Message::Start {
                    kind: PointerKind::Touch,
                    contacts: self.contacts(),
                    at,
                }
            }
            touch::Event::FingerMoved { id, position } => {
                let Some(entry) = self.fingers.iter_mut().find(|(finger, _)| *finger == id) else {
                    return Effect::None;
                };
                entry.1 = position;
                gesture::Message::Move {
                    contacts: self.contacts(),
                }
            }
            touch::Event::FingerLifted { id, position } => {
                if !self.remove_finger(id) {
                    return Effect::None;
                }
                gesture::Message::End {
                    released: position,
                    remaining: self.fingers.len(),
                }
            }
            touch::Event::FingerLost { id, .. } => {
                if !self.remove_finger(id) {
                    return Effect::None;
                }
                gesture::Message::Cancel
            }
        };
        self.dispatch_gesture(msg)
    }

    fn handle_mouse(&mut self, event: mouse::Event, at: Instant) -> Effect {
        let msg = match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(position);
                if !self.mouse_pressed {
                    return Effect::None;
                }
                gesture::Message::Move {
                    contacts: vec![position],
                }
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let Some(position) = self.cursor_position else {
                    return Effect::None;
                };
                self.mouse_pressed = true;
                gesture::Message::Start {
                    kind: PointerKind::Mouse,
                    contacts: vec![position],
                    at,
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) if self.mouse_pressed => {
                self.mouse_pressed = false;
                let Some(position) = self.cursor_position else {
                    return self.dispatch_gesture(gesture::Message::Cancel);
                };
                gesture::Message::End {
                    released: position,
                    remaining: 0,
                }
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                if !self.mouse_pressed {
                    return Effect::None;
                }
                self.mouse_pressed = false;
                gesture::Message::Cancel
            }
            _ => return Effect::None,
        };
        self.dispatch_gesture(msg)
    }

    fn dispatch_gesture(&mut self, msg: gesture::Message) -> Effect {
        match self.gesture.handle(msg, &mut self.transform) {
            gesture::Effect::None => Effect::None,
            gesture::Effect::TransformChanged => Effect::Redraw,
            gesture::Effect::NavigateNext => self.next(),
            gesture::Effect::NavigatePrevious => self.previous(),
        }
    }

    fn contacts(&self) -> Vec<Point> {
        self.fingers.iter().map(|(_, position)| *position).collect()
    }

    fn remove_finger(&mut self, id: touch::Finger) -> bool {
        let before = self.fingers.len();
        self.fingers.retain(|(finger, _)| *finger != id);
        self.fingers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, sample_sequence};
    use std::time::Duration;

    fn sequence(len: usize) -> MediaSequence {
        sample_sequence(len)
    }

    fn raw(event: event::Event, at: Instant) -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event,
            at,
        }
    }

    fn finger(session: &mut ViewerSession, event: touch::Event, at: Instant) -> Effect {
        session.handle_message(raw(event::Event::Touch(event), at))
    }

    fn press(id: u64, x: f32, y: f32) -> touch::Event {
        touch::Event::FingerPressed {
            id: touch::Finger(id),
            position: Point::new(x, y),
        }
    }

    fn moved(id: u64, x: f32, y: f32) -> touch::Event {
        touch::Event::FingerMoved {
            id: touch::Finger(id),
            position: Point::new(x, y),
        }
    }

    fn lift(id: u64, x: f32, y: f32) -> touch::Event {
        touch::Event::FingerLifted {
            id: touch::Finger(id),
            position: Point::new(x, y),
        }
    }

    fn key(named: keyboard::key::Named) -> event::Event {
        let code = match named {
            keyboard::key::Named::Escape => keyboard::key::Code::Escape,
            keyboard::key::Named::ArrowLeft => keyboard::key::Code::ArrowLeft,
            _ => keyboard::key::Code::ArrowRight,
        };
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn open_wraps_initial_index_and_starts_at_identity() {
        let session = ViewerSession::open(sequence(3), 4);
        assert_eq!(session.current_index(), 1);
        assert_eq!(*session.transform(), TransformModel::IDENTITY);
        assert!(session.is_listening());
        assert!(!session.is_closed());
    }

    #[test]
    fn navigation_resets_zoomed_and_rotated_transform() {
        let mut session = ViewerSession::open(sequence(3), 0).with_zoom_step(0.5);
        for _ in 0..4 {
            session.handle_message(Message::Controls(controls::Message::ZoomIn));
        }
        session.handle_message(Message::Controls(controls::Message::RotateRight));
        session.handle_message(Message::Controls(controls::Message::RotateRight));
        assert_abs_diff_eq!(session.transform().scale(), 3.0);
        assert_abs_diff_eq!(session.transform().rotation_degrees(), 180.0);

        assert_eq!(session.next(), Effect::Redraw);
        assert_eq!(session.current_index(), 1);
        assert_eq!(*session.transform(), TransformModel::IDENTITY);

        session.handle_message(Message::Controls(controls::Message::ZoomIn));
        assert_eq!(session.previous(), Effect::Redraw);
        assert_eq!(session.current_index(), 0);
        assert_eq!(*session.transform(), TransformModel::IDENTITY);
    }

    #[test]
    fn single_item_navigation_still_resets_transform() {
        let mut session = ViewerSession::open(sample_sequence(1), 0);
        session.handle_message(Message::Controls(controls::Message::ZoomIn));
        session.handle_message(Message::Controls(controls::Message::RotateLeft));

        assert_eq!(session.next(), Effect::Redraw);
        assert_eq!(session.current_index(), 0);
        assert_eq!(*session.transform(), TransformModel::IDENTITY);

        session.handle_message(Message::Controls(controls::Message::ZoomIn));
        session.handle_message(Message::Controls(controls::Message::RotateRight));
        assert_eq!(session.previous(), Effect::Redraw);
        assert_eq!(session.current_index(), 0);
        assert_eq!(*session.transform(), TransformModel::IDENTITY);
    }

    #[test]
    fn controls_use_configured_steps() {
        let mut session = ViewerSession::open(sequence(1), 0);
        session.handle_message(Message::Controls(controls::Message::ZoomIn));
        assert_abs_diff_eq!(session.transform().scale(), 1.25);
        session.handle_message(Message::Controls(controls::Message::ZoomOut));
        session.handle_message(Message::Controls(controls::Message::ZoomOut));
        assert_abs_diff_eq!(session.transform().scale(), 0.75);

        session.handle_message(Message::Controls(controls::Message::RotateLeft));
        assert_abs_diff_eq!(session.transform().rotation_degrees(), -90.0);

        session.handle_message(Message::Controls(controls::Message::ResetTransform));
        assert_eq!(*session.transform(), TransformModel::IDENTITY);
    }

    #[test]
    fn keyboard_arrows_navigate_and_escape_closes() {
        let now = Instant::now();
        let mut session = ViewerSession::open(sequence(3), 0);

        session.handle_message(raw(key(keyboard::key::Named::ArrowRight), now));
        assert_eq!(session.current_index(), 1);
        session.handle_message(raw(key(keyboard::key::Named::ArrowLeft), now));
        session.handle_message(raw(key(keyboard::key::Named::ArrowLeft), now));
        assert_eq!(session.current_index(), 2);

        let effect = session.handle_message(raw(key(keyboard::key::Named::Escape), now));
        assert_eq!(
            effect,
            Effect::Closed {
                exit_fullscreen: false
            }
        );
        assert!(!session.is_listening());
    }

    #[test]
    fn close_is_idempotent_and_stops_input() {
        let now = Instant::now();
        let mut session = ViewerSession::open(sequence(3), 0);

        assert!(matches!(session.close(), Effect::Closed { .. }));
        assert_eq!(session.close(), Effect::None);
        assert_eq!(
            session.handle_message(Message::Controls(controls::Message::Close)),
            Effect::None
        );
        assert_eq!(
            session.handle_message(raw(key(keyboard::key::Named::ArrowRight), now)),
            Effect::None
        );
        assert_eq!(session.next(), Effect::None);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn close_releases_owned_fullscreen() {
        let mut session = ViewerSession::open(sequence(1), 0);
        assert_eq!(
            session.handle_message(Message::Controls(controls::Message::ToggleFullscreen)),
            Effect::EnterFullscreen
        );
        assert!(session.render().is_fullscreen);

        assert_eq!(
            session.handle_message(Message::Controls(controls::Message::Close)),
            Effect::Closed {
                exit_fullscreen: true
            }
        );
        assert!(!session.is_fullscreen());
    }

    #[test]
    fn toggling_fullscreen_twice_exits() {
        let mut session = ViewerSession::open(sequence(1), 0);
        assert_eq!(session.toggle_fullscreen(), Effect::EnterFullscreen);
        assert_eq!(session.toggle_fullscreen(), Effect::ExitFullscreen);
        assert_eq!(
            session.close(),
            Effect::Closed {
                exit_fullscreen: false
            }
        );
    }

    #[test]
    fn touch_swipe_left_goes_to_next_item() {
        let now = Instant::now();
        let mut session = ViewerSession::open(sequence(3), 0);

        finger(&mut session, press(1, 100.0, 100.0), now);
        finger(&mut session, moved(1, 60.0, 105.0), now);
        let effect = finger(&mut session, lift(1, 30.0, 110.0), now);

        assert_eq!(effect, Effect::Redraw);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn pinch_through_fingers_scales_and_suppresses_swipe() {
        let now = Instant::now();
        let mut session = ViewerSession::open(sequence(3), 0);

        finger(&mut session, press(1, 100.0, 100.0), now);
        finger(&mut session, press(2, 200.0, 100.0), now);
        let effect = finger(&mut session, moved(2, 300.0, 100.0), now);
        assert_eq!(effect, Effect::Redraw);
        assert_abs_diff_eq!(session.transform().scale(), 2.0);

        // Pinch back to rest, then drift one finger far to the left.
        finger(&mut session, moved(2, 150.0, 100.0), now);
        finger(&mut session, lift(2, 150.0, 100.0), now);
        finger(&mut session, moved(1, 0.0, 100.0), now);
        finger(&mut session, lift(1, 0.0, 100.0), now);

        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn unknown_finger_events_are_ignored() {
        let now = Instant::now();
        let mut session = ViewerSession::open(sequence(2), 0);
        assert_eq!(finger(&mut session, moved(9, 1.0, 1.0), now), Effect::None);
        assert_eq!(finger(&mut session, lift(9, 1.0, 1.0), now), Effect::None);
    }

    #[test]
    fn double_tap_zooms_then_resets() {
        let t0 = Instant::now();
        let mut session = ViewerSession::open(sequence(1), 0);

        finger(&mut session, press(1, 50.0, 50.0), t0);
        finger(&mut session, lift(1, 50.0, 50.0), t0);
        let effect = finger(
            &mut session,
            press(1, 50.0, 50.0),
            t0 + Duration::from_millis(150),
        );
        assert_eq!(effect, Effect::Redraw);
        assert_abs_diff_eq!(session.transform().scale(), 2.5);
        finger(&mut session, lift(1, 50.0, 50.0), t0 + Duration::from_millis(160));

        finger(&mut session, press(1, 50.0, 50.0), t0 + Duration::from_millis(250));
        assert_eq!(*session.transform(), TransformModel::IDENTITY);
    }

    #[test]
    fn mouse_drag_pans_only_when_zoomed() {
        let now = Instant::now();
        let mut session = ViewerSession::open(sequence(2), 0);
        session.handle_message(Message::Controls(controls::Message::ZoomIn));
        session.handle_message(Message::Controls(controls::Message::ZoomIn));

        let mouse_event = |e| raw(event::Event::Mouse(e), now);
        session.handle_message(mouse_event(mouse::Event::CursorMoved {
            position: Point::new(10.0, 10.0),
        }));
        session.handle_message(mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left)));
        let effect = session.handle_message(mouse_event(mouse::Event::CursorMoved {
            position: Point::new(210.0, 30.0),
        }));
        session.handle_message(mouse_event(mouse::Event::ButtonReleased(mouse::Button::Left)));

        assert_eq!(effect, Effect::Redraw);
        assert_eq!(session.transform().offset(), (200.0, 20.0));
        // Zoomed past rest: no swipe.
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn mouse_swipe_right_goes_to_previous_item() {
        let now = Instant::now();
        let mut session = ViewerSession::open(sequence(3), 0);
        let mouse_event = |e| raw(event::Event::Mouse(e), now);

        session.handle_message(mouse_event(mouse::Event::CursorMoved {
            position: Point::new(100.0, 100.0),
        }));
        session.handle_message(mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left)));
        session.handle_message(mouse_event(mouse::Event::CursorMoved {
            position: Point::new(240.0, 300.0),
        }));
        session.handle_message(mouse_event(mouse::Event::ButtonReleased(mouse::Button::Left)));

        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn cursor_leaving_cancels_drag() {
        let now = Instant::now();
        let mut session = ViewerSession::open(sequence(3), 0);
        let mouse_event = |e| raw(event::Event::Mouse(e), now);

        session.handle_message(mouse_event(mouse::Event::CursorMoved {
            position: Point::new(300.0, 100.0),
        }));
        session.handle_message(mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left)));
        session.handle_message(mouse_event(mouse::Event::CursorLeft));
        session.handle_message(mouse_event(mouse::Event::CursorMoved {
            position: Point::new(0.0, 100.0),
        }));
        session.handle_message(mouse_event(mouse::Event::ButtonReleased(mouse::Button::Left)));

        assert_eq!(session.current_index(), 0);
        assert!(!session.gesture().tracker().is_panning);
    }

    #[test]
    fn render_descriptor_reflects_transform() {
        let mut session = ViewerSession::open(sequence(12), 2);
        let resting = session.render();
        assert_eq!(resting.index_label, "3 / 12");
        assert_eq!(resting.media.name(), "2.png");
        assert!(resting.show_navigation_arrows);
        assert!(!resting.show_reset);
        assert_eq!(resting.hint, Hint::Resting);

        session.handle_message(Message::Controls(controls::Message::ZoomIn));
        let zoomed = session.render();
        assert!(!zoomed.show_navigation_arrows);
        assert!(zoomed.show_reset);
        assert_eq!(zoomed.hint, Hint::Zoomed);
        assert_eq!(Hint::Zoomed.i18n_key(), "viewer-hint-zoomed");
    }

    #[test]
    fn render_hides_offsets_at_rest_zoom() {
        let now = Instant::now();
        let mut session = ViewerSession::open(sequence(1), 0);
        session.handle_message(Message::Controls(controls::Message::ZoomIn));

        finger(&mut session, press(1, 0.0, 0.0), now);
        finger(&mut session, moved(1, 30.0, 40.0), now);
        finger(&mut session, lift(1, 30.0, 40.0), now);
        assert_eq!(session.render().transform.offset(), (30.0, 40.0));

        for _ in 0..4 {
            session.handle_message(Message::Controls(controls::Message::ZoomOut));
        }
        let descriptor = session.render();
        assert_eq!(descriptor.transform.offset(), (0.0, 0.0));
        assert_eq!(session.transform().offset(), (30.0, 40.0));
        assert!(descriptor.show_reset);
    }
}
