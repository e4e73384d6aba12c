// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer screen.
//!
//! Shows one catalog image at a time and navigates between neighbors with
//! swipe-style drags, overlay arrows, or the keyboard. The close affordance
//! reports back to the application through [`Effect::Closed`].

pub mod component;
mod pane;

pub use component::{Effect, Message, State};
