// SPDX-License-Identifier: MPL-2.0
//! Image bytes on the client side: the in-memory handle cache and saving to disk.

pub mod cache;
pub mod save;

pub use cache::{viewer_prefetch_urls, CachedImage, ImageCache};
