// SPDX-License-Identifier: MPL-2.0
//! Bounded in-memory cache of image handles, keyed by URL.
//!
//! The cache also remembers which URLs are being downloaded and which failed,
//! so the same image is never requested twice concurrently and a broken URL
//! is not retried on every frame.

use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// State of one URL in the cache.
#[derive(Debug, Clone)]
pub enum CachedImage {
    Ready(Handle),
    Loading,
    Failed,
    Missing,
}

#[derive(Debug)]
pub struct ImageCache {
    entries: LruCache<String, Handle>,
    pending: HashSet<String>,
    failed: HashSet<String>,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` handles (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            pending: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks `url` up without touching the recency order.
    pub fn lookup(&self, url: &str) -> CachedImage {
        if let Some(handle) = self.entries.peek(url) {
            CachedImage::Ready(handle.clone())
        } else if self.pending.contains(url) {
            CachedImage::Loading
        } else if self.failed.contains(url) {
            CachedImage::Failed
        } else {
            CachedImage::Missing
        }
    }

    /// Marks `url` as recently used.
    pub fn touch(&mut self, url: &str) {
        let _ = self.entries.get(url);
    }

    /// Claims the download of `url`.
    ///
    /// Returns `true` when the caller should start it: the URL is neither
    /// cached, in flight, nor known to fail.
    pub fn request(&mut self, url: &str) -> bool {
        if self.entries.contains(url) || self.pending.contains(url) || self.failed.contains(url) {
            return false;
        }
        self.pending.insert(url.to_string());
        true
    }

    /// Stores the downloaded bytes of `url`, evicting the least recently used
    /// entry when full.
    pub fn insert(&mut self, url: &str, bytes: Vec<u8>) -> Handle {
        self.pending.remove(url);
        self.failed.remove(url);
        let handle = Handle::from_bytes(bytes);
        self.entries.put(url.to_string(), handle.clone());
        handle
    }

    /// Records a failed download. [`ImageCache::retry`] or [`ImageCache::clear`] forgets it.
    pub fn fail(&mut self, url: &str) {
        self.pending.remove(url);
        self.failed.insert(url.to_string());
    }

    pub fn retry(&mut self, url: &str) {
        self.failed.remove(url);
    }

    /// Forgets every failure mark, keeping the cached handles.
    pub fn retry_failed(&mut self) {
        self.failed.clear();
    }

    /// Drops every handle and failure mark. Downloads in flight stay claimed.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.failed.clear();
    }
}

/// URLs to load when the viewer shows `index`: the current full image first,
/// then the neighbours within `radius`, nearest first.
pub fn viewer_prefetch_urls(urls: &[&str], index: usize, radius: usize) -> Vec<String> {
    if index >= urls.len() {
        return Vec::new();
    }

    let mut wanted = vec![urls[index].to_string()];
    for distance in 1..=radius {
        if let Some(next) = urls.get(index + distance) {
            wanted.push((*next).to_string());
        }
        if let Some(previous) = index.checked_sub(distance).and_then(|i| urls.get(i)) {
            wanted.push((*previous).to_string());
        }
    }
    wanted
}
