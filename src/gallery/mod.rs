// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: image records, the remote source, pagination and favorites.

pub mod client;
pub mod favorites;
pub mod fetcher;
pub mod normalize;
pub mod record;
pub mod source;

pub use client::HttpGallerySource;
pub use favorites::FavoritesStore;
pub use fetcher::{FetchKind, FetchState, PageRequest, PaginationFetcher};
pub use record::ImageRecord;
pub use source::{GalleryPage, GallerySource, InMemorySource};
