// SPDX-License-Identifier: MPL-2.0
//! The seam between the pagination fetcher and wherever pages come from.

use super::record::ImageRecord;
use crate::error::GalleryError;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

/// One page as returned by a source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryPage {
    pub records: Vec<ImageRecord>,
    /// Number of entries the remote returned, including undisplayable ones.
    pub source_len: usize,
}

impl GalleryPage {
    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        let source_len = records.len();
        Self {
            records,
            source_len,
        }
    }
}

/// Anything that can serve a page of gallery records.
pub trait GallerySource {
    fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<GalleryPage, GalleryError>> + Send;
}

/// Source answering from a queue of canned responses, in call order.
///
/// When the queue is exhausted every call yields an empty page.
#[derive(Debug, Default)]
pub struct InMemorySource {
    responses: Mutex<VecDeque<Result<GalleryPage, GalleryError>>>,
    calls: Mutex<Vec<(u32, u32)>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful page.
    pub fn push_page(&self, records: Vec<ImageRecord>) -> &Self {
        self.push(Ok(GalleryPage::from_records(records)))
    }

    /// Queues a failure.
    pub fn push_error(&self, error: GalleryError) -> &Self {
        self.push(Err(error))
    }

    fn push(&self, response: Result<GalleryPage, GalleryError>) -> &Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
        self
    }

    /// `(page, page_size)` of every call so far.
    pub fn calls(&self) -> Vec<(u32, u32)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl GallerySource for InMemorySource {
    fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<GalleryPage, GalleryError>> + Send {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((page, page_size));
        }
        let response = self
            .responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .unwrap_or_else(|| Ok(GalleryPage::default()));
        std::future::ready(response)
    }
}

/// Builds `count` records whose ids are `"{prefix}{n}"`.
pub fn sample_records(prefix: &str, count: usize) -> Vec<ImageRecord> {
    (0..count)
        .map(|n| {
            ImageRecord::new(
                format!("{prefix}{n}"),
                format!("https://img.test/{prefix}{n}.jpg"),
            )
        })
        .collect()
}
