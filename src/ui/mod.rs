// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Thumbnail grid of the bundled image catalog
//! - [`viewer`] - Full-screen viewer with swipe navigation and close button
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable interaction state (swipe tracking)
//! - [`styles`] - Centralized styling (buttons, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
