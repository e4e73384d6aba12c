// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe tracking for the full-screen viewer.
//!
//! Accumulates pointer displacement while the primary button is held and
//! decides on release whether the gesture crossed the navigation threshold.

/// Displacement (logical pixels) a drag must exceed to navigate.
///
/// The comparison is strict: a release at exactly the threshold does nothing.
pub const SWIPE_NAVIGATION_THRESHOLD: f32 = 200.0;

/// Direction resolved from a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Rightward drag: go to the previous image.
    Previous,
    /// Leftward drag: go to the next image.
    Next,
}

/// Tracks one in-progress horizontal drag gesture.
///
/// The accumulated offset has no visible effect while the drag is running;
/// it only matters at release time.
#[derive(Debug, Clone, Default)]
pub struct SwipeState {
    /// Whether a drag operation is currently active.
    pub is_dragging: bool,

    /// Cursor x of the last processed sample.
    last_x: Option<f32>,

    /// Horizontal displacement accumulated since the drag started.
    offset_x: f32,
}

impl SwipeState {
    /// Starts a drag at the given cursor x.
    pub fn begin(&mut self, x: f32) {
        self.is_dragging = true;
        self.last_x = Some(x);
        self.offset_x = 0.0;
    }

    /// Feeds a pointer sample, accumulating its horizontal delta.
    /// Samples arriving while no drag is active are ignored.
    pub fn update(&mut self, x: f32) {
        if !self.is_dragging {
            return;
        }
        if let Some(last) = self.last_x {
            self.offset_x += x - last;
        }
        self.last_x = Some(x);
    }

    /// The displacement accumulated so far.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset_x
    }

    /// Ends the drag and resolves it to a navigation direction if the
    /// accumulated offset strictly exceeds [`SWIPE_NAVIGATION_THRESHOLD`].
    /// The offset resets to zero in every case.
    pub fn release(&mut self) -> Option<SwipeDirection> {
        let offset = self.offset_x;
        self.reset();

        if offset > SWIPE_NAVIGATION_THRESHOLD {
            Some(SwipeDirection::Previous)
        } else if offset < -SWIPE_NAVIGATION_THRESHOLD {
            Some(SwipeDirection::Next)
        } else {
            None
        }
    }

    /// Abandons the drag without navigating (cursor left the window).
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.is_dragging = false;
        self.last_x = None;
        self.offset_x = 0.0;
    }
}
