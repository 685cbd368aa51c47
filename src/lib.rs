// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo gallery for a single event, built with the Iced GUI framework.
//!
//! Photos come page by page from a remote gallery API and are shown in a
//! masonry grid. Favorites and the theme mode are kept in a small key-value
//! store so they survive restarts; the interface is localized with Fluent.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod network;
pub mod storage;
pub mod ui;
