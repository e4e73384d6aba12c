// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a minimal photo gallery built with the Iced GUI framework.
//!
//! It shows a fixed set of images bundled into the binary as a thumbnail
//! grid, and opens a full-screen viewer with swipe-style drag navigation
//! when a thumbnail is tapped. It also demonstrates internationalization
//! with Fluent and modular UI design.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
