// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! While the viewer is open, unconsumed runtime events are forwarded to it
//! so it can track drag gestures and keyboard navigation. The thumbnail grid
//! needs no raw events; its taps arrive through widget messages.

use super::Message;
use crate::ui::viewer;
use iced::{event, Subscription};

/// Creates the event subscription for the current screen.
pub fn create_event_subscription(viewer_open: bool) -> Subscription<Message> {
    if viewer_open {
        event::listen_with(|event, status, window_id| match status {
            // Events captured by widgets (e.g. the close button) stay theirs.
            event::Status::Ignored => Some(Message::Viewer(viewer::Message::RawEvent {
                window: window_id,
                event,
            })),
            event::Status::Captured => None,
        })
    } else {
        Subscription::none()
    }
}
