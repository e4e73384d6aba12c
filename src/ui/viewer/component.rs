// SPDX-License-Identifier: MPL-2.0
//! Viewer state and message handling.
//!
//! The state machine is: displaying index `i`, plus a live horizontal drag
//! offset while the primary button is held. A completed drag moves the index
//! by at most one step; the index is clamped so it never leaves the catalog.

use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::state::swipe::{SwipeDirection, SwipeState};
use iced::{event, keyboard, mouse, window, Element, Point};

/// Per-instance viewer state. Created when the viewer opens, discarded when
/// it is dismissed; nothing survives a close.
#[derive(Debug, Clone)]
pub struct State {
    current_index: usize,
    total: usize,
    swipe: SwipeState,
    cursor_position: Option<Point>,
}

/// Messages handled by the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Unhandled runtime event forwarded by the application subscription.
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    /// Step to the next image (overlay arrow).
    NavigateNext,
    /// Step to the previous image (overlay arrow).
    NavigatePrevious,
    /// The close button was pressed.
    CloseRequested,
}

/// Outcomes the application must act upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// The viewer asked to be dismissed; the caller tears it down.
    Closed,
}

impl State {
    /// Opens the viewer on `initial_index`.
    ///
    /// The caller guarantees `initial_index` is a valid position in a
    /// non-empty catalog of `total` images.
    #[must_use]
    pub fn new(initial_index: usize, total: usize) -> Self {
        debug_assert!(initial_index < total, "initial index out of range");
        Self {
            current_index: initial_index,
            total,
            swipe: SwipeState::default(),
            cursor_position: None,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Displacement of the in-progress drag, zero when idle.
    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        self.swipe.offset()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.swipe.is_dragging
    }

    #[must_use]
    pub fn at_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn at_last(&self) -> bool {
        self.current_index + 1 >= self.total
    }

    /// Handles a viewer message and reports the resulting effect.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::NavigateNext => {
                self.go_next();
                Effect::None
            }
            Message::NavigatePrevious => {
                self.go_previous();
                Effect::None
            }
            Message::CloseRequested => Effect::Closed,
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Effect {
        match event {
            event::Event::Mouse(mouse_event) => {
                match mouse_event {
                    mouse::Event::ButtonPressed(mouse::Button::Left) => {
                        // The press starts the gesture at the last known
                        // cursor position; without one there is no anchor.
                        if let Some(position) = self.cursor_position {
                            self.swipe.begin(position.x);
                        }
                    }
                    mouse::Event::CursorMoved { position } => {
                        self.cursor_position = Some(position);
                        self.swipe.update(position.x);
                    }
                    mouse::Event::ButtonReleased(mouse::Button::Left) => {
                        self.finish_drag();
                    }
                    mouse::Event::CursorLeft => {
                        self.cursor_position = None;
                        self.swipe.cancel();
                    }
                    _ => {}
                }
                Effect::None
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => {
                self.go_next();
                Effect::None
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => {
                self.go_previous();
                Effect::None
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Effect::Closed,
            _ => Effect::None,
        }
    }

    /// Applies the completed gesture. A swipe past either end of the catalog
    /// is absorbed silently; the offset is gone either way.
    fn finish_drag(&mut self) {
        match self.swipe.release() {
            Some(SwipeDirection::Previous) => self.go_previous(),
            Some(SwipeDirection::Next) => self.go_next(),
            None => {}
        }
    }

    fn go_next(&mut self) {
        if self.current_index + 1 < self.total {
            self.current_index += 1;
        }
    }

    fn go_previous(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Renders the viewer for the current index.
    pub fn view<'a>(&'a self, catalog: &'a Catalog, i18n: &'a I18n) -> Element<'a, Message> {
        super::pane::view(super::pane::ViewContext {
            catalog,
            state: self,
            i18n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::swipe::SWIPE_NAVIGATION_THRESHOLD;

    fn raw(event: event::Event) -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event,
        }
    }

    fn cursor_moved(state: &mut State, x: f32) {
        let _ = state.handle_message(raw(event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, 240.0),
        })));
    }

    fn press(state: &mut State) {
        let _ = state.handle_message(raw(event::Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left,
        ))));
    }

    fn release(state: &mut State) {
        let _ = state.handle_message(raw(event::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        ))));
    }

    /// Full drag gesture: move to `from`, press, move to `to`, release.
    fn drag(state: &mut State, from: f32, to: f32) {
        cursor_moved(state, from);
        press(state);
        cursor_moved(state, to);
        release(state);
    }

    fn key_pressed(named: keyboard::key::Named, code: keyboard::key::Code) -> Message {
        raw(event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }))
    }

    #[test]
    fn opens_on_the_given_index() {
        let state = State::new(2, 5);
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.total(), 5);
        assert!(!state.at_first());
        assert!(!state.at_last());
    }

    #[test]
    fn drag_right_past_threshold_goes_to_previous() {
        let mut state = State::new(2, 5);
        drag(&mut state, 100.0, 350.0);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.drag_offset(), 0.0);
    }

    #[test]
    fn drag_left_past_threshold_goes_to_next() {
        let mut state = State::new(2, 5);
        drag(&mut state, 400.0, 150.0);
        assert_eq!(state.current_index(), 3);
        assert_eq!(state.drag_offset(), 0.0);
    }

    #[test]
    fn drag_right_at_first_image_is_absorbed() {
        let mut state = State::new(0, 5);
        drag(&mut state, 0.0, 400.0);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.drag_offset(), 0.0);
    }

    #[test]
    fn drag_left_at_last_image_is_absorbed() {
        let mut state = State::new(4, 5);
        drag(&mut state, 400.0, 0.0);
        assert_eq!(state.current_index(), 4);
        assert_eq!(state.drag_offset(), 0.0);
    }

    #[test]
    fn single_image_catalog_never_navigates() {
        let mut state = State::new(0, 1);
        drag(&mut state, 400.0, 0.0);
        assert_eq!(state.current_index(), 0);
        drag(&mut state, 0.0, 400.0);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn drag_at_exact_threshold_does_not_navigate() {
        let mut state = State::new(2, 5);
        drag(&mut state, 0.0, SWIPE_NAVIGATION_THRESHOLD);
        assert_eq!(state.current_index(), 2);
        drag(&mut state, SWIPE_NAVIGATION_THRESHOLD, 0.0);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn offset_accumulates_across_moves_and_resets_on_release() {
        let mut state = State::new(2, 5);
        cursor_moved(&mut state, 100.0);
        press(&mut state);
        cursor_moved(&mut state, 200.0);
        cursor_moved(&mut state, 180.0);
        cursor_moved(&mut state, 330.0);
        assert!(state.is_dragging());
        assert_eq!(state.drag_offset(), 230.0);

        release(&mut state);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.drag_offset(), 0.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn moves_without_press_do_not_start_a_drag() {
        let mut state = State::new(2, 5);
        cursor_moved(&mut state, 100.0);
        cursor_moved(&mut state, 500.0);
        assert!(!state.is_dragging());
        release(&mut state);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn press_without_known_cursor_position_is_ignored() {
        let mut state = State::new(2, 5);
        press(&mut state);
        assert!(!state.is_dragging());
    }

    #[test]
    fn cursor_leaving_window_cancels_the_drag() {
        let mut state = State::new(2, 5);
        cursor_moved(&mut state, 0.0);
        press(&mut state);
        cursor_moved(&mut state, 400.0);
        let _ = state.handle_message(raw(event::Event::Mouse(mouse::Event::CursorLeft)));
        assert!(!state.is_dragging());

        release(&mut state);
        assert_eq!(state.current_index(), 2, "cancelled drag must not navigate");
    }

    #[test]
    fn arrow_keys_navigate_with_clamping() {
        let mut state = State::new(0, 2);
        let _ = state.handle_message(key_pressed(
            keyboard::key::Named::ArrowRight,
            keyboard::key::Code::ArrowRight,
        ));
        assert_eq!(state.current_index(), 1);

        // Already at the last image.
        let _ = state.handle_message(key_pressed(
            keyboard::key::Named::ArrowRight,
            keyboard::key::Code::ArrowRight,
        ));
        assert_eq!(state.current_index(), 1);

        let _ = state.handle_message(key_pressed(
            keyboard::key::Named::ArrowLeft,
            keyboard::key::Code::ArrowLeft,
        ));
        assert_eq!(state.current_index(), 0);

        let _ = state.handle_message(key_pressed(
            keyboard::key::Named::ArrowLeft,
            keyboard::key::Code::ArrowLeft,
        ));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn escape_requests_close() {
        let mut state = State::new(1, 5);
        let effect = state.handle_message(key_pressed(
            keyboard::key::Named::Escape,
            keyboard::key::Code::Escape,
        ));
        assert_eq!(effect, Effect::Closed);
        // Internal state is untouched; teardown is the caller's job.
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn close_button_requests_close() {
        let mut state = State::new(1, 5);
        assert_eq!(state.handle_message(Message::CloseRequested), Effect::Closed);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn arrow_messages_clamp_at_boundaries() {
        let mut state = State::new(0, 3);
        assert_eq!(state.handle_message(Message::NavigatePrevious), Effect::None);
        assert_eq!(state.current_index(), 0);

        let _ = state.handle_message(Message::NavigateNext);
        let _ = state.handle_message(Message::NavigateNext);
        let _ = state.handle_message(Message::NavigateNext);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn boundary_flags_track_the_index() {
        let mut state = State::new(0, 3);
        assert!(state.at_first());
        assert!(!state.at_last());

        let _ = state.handle_message(Message::NavigateNext);
        assert!(!state.at_first());
        assert!(!state.at_last());

        let _ = state.handle_message(Message::NavigateNext);
        assert!(state.at_last());
    }
}
