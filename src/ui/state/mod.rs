// SPDX-License-Identifier: MPL-2.0
//! Reusable interaction state machines shared by the UI components.

pub mod swipe;

pub use swipe::{SwipeDirection, SwipeState, SWIPE_NAVIGATION_THRESHOLD};
