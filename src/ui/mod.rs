// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen takes a `ViewContext`, emits its own `Message`, and reports what the
//! application should do through an `Event`.
//!
//! # Screens
//!
//! - [`gallery`] - Masonry grid of the event's photos with infinite scroll
//! - [`favorites`] - The images the user kept, in the order they were added
//! - [`settings`] - Theme, language and data management
//! - [`viewer`] - Full-screen image with navigation, save and share
//!
//! # Shared Infrastructure
//!
//! - [`grid`] - Two-column masonry grid shared by gallery and favorites
//! - [`masonry`] - Column assignment and scroll geometry
//! - [`navbar`] - Tab bar with refresh and theme toggle
//! - [`components`] - Error message, offline banner, skeleton tiles
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod favorites;
pub mod gallery;
pub mod grid;
pub mod masonry;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod viewer;
