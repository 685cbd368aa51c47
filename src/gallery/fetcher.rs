// SPDX-License-Identifier: MPL-2.0
//! Incremental page fetching for the gallery grid.
//!
//! [`PaginationFetcher`] is a synchronous state machine. A fetch is started
//! with [`PaginationFetcher::begin`], which hands out a [`PageRequest`]
//! carrying a token, and completed with [`PaginationFetcher::finish`]. Only
//! one request is in flight at a time: `begin` refuses to start while the
//! state is not [`FetchState::Idle`], and `finish` drops any completion whose
//! token is not the one in flight.
//!
//! The UI runs the I/O between the two calls in an `iced::Task`; other
//! callers use the async helpers ([`PaginationFetcher::initial_load`],
//! [`PaginationFetcher::refresh`], [`PaginationFetcher::load_more`]).

use super::record::ImageRecord;
use super::source::{GalleryPage, GallerySource};
use crate::config::PAGE_SIZE;
use crate::error::GalleryError;

/// What the fetcher is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    InitialLoading,
    Refreshing,
    LoadingMore,
}

/// The three ways a fetch can be triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// First page, first paint.
    Initial,
    /// First page again, user-requested.
    Refresh,
    /// Next page, appended.
    More,
}

impl FetchKind {
    fn state(self) -> FetchState {
        match self {
            FetchKind::Initial => FetchState::InitialLoading,
            FetchKind::Refresh => FetchState::Refreshing,
            FetchKind::More => FetchState::LoadingMore,
        }
    }
}

/// A fetch handed out by [`PaginationFetcher::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub token: u64,
    pub kind: FetchKind,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug)]
pub struct PaginationFetcher {
    records: Vec<ImageRecord>,
    current_page: u32,
    state: FetchState,
    in_flight: Option<u64>,
    next_token: u64,
    error: Option<GalleryError>,
    has_next_page: bool,
    page_size: u32,
}

impl Default for PaginationFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationFetcher {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// Fetcher requesting `page_size` records per page (at least 1).
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            records: Vec::new(),
            current_page: 0,
            state: FetchState::Idle,
            in_flight: None,
            next_token: 1,
            error: None,
            has_next_page: true,
            page_size: page_size.max(1),
        }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::InitialLoading
    }

    pub fn is_refreshing(&self) -> bool {
        self.state == FetchState::Refreshing
    }

    pub fn is_loading_more(&self) -> bool {
        self.state == FetchState::LoadingMore
    }

    /// True while any request is in flight.
    pub fn is_busy(&self) -> bool {
        self.state != FetchState::Idle
    }

    pub fn error(&self) -> Option<&GalleryError> {
        self.error.as_ref()
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Starts a fetch of the given kind.
    ///
    /// Returns `None` without changing anything when a request is already in
    /// flight, or for [`FetchKind::More`] when there is no next page.
    pub fn begin(&mut self, kind: FetchKind) -> Option<PageRequest> {
        if self.is_busy() {
            log::debug!("Ignoring {kind:?} fetch: {:?} in progress", self.state);
            return None;
        }

        let page = match kind {
            FetchKind::Initial | FetchKind::Refresh => 0,
            FetchKind::More => {
                if !self.has_next_page {
                    return None;
                }
                self.current_page + 1
            }
        };

        let token = self.next_token;
        self.next_token = self.next_token.wrapping_add(1);
        self.in_flight = Some(token);
        self.state = kind.state();
        log::debug!("Fetching page {page} ({kind:?}, token {token})");

        Some(PageRequest {
            token,
            kind,
            page,
            page_size: self.page_size,
        })
    }

    /// Applies the outcome of `request`.
    ///
    /// Returns `false` when the request is stale (not the one in flight); the
    /// fetcher is then left untouched.
    pub fn finish(
        &mut self,
        request: &PageRequest,
        result: Result<GalleryPage, GalleryError>,
    ) -> bool {
        if self.in_flight != Some(request.token) {
            log::debug!("Dropping stale completion for page {}", request.page);
            return false;
        }
        self.in_flight = None;
        self.state = FetchState::Idle;

        match result {
            Ok(page) => {
                self.has_next_page = page.source_len == request.page_size as usize;
                if request.page == 0 {
                    self.records = page.records;
                } else {
                    self.records.extend(page.records);
                }
                self.current_page = request.page;
                self.error = None;
                log::debug!(
                    "Page {} applied: {} records total, has next: {}",
                    request.page,
                    self.records.len(),
                    self.has_next_page
                );
            }
            Err(error) => {
                log::warn!("Fetching page {} failed: {error}", request.page);
                self.error = Some(error);
            }
        }
        true
    }

    /// Drops all records and forgets any request in flight.
    pub fn reset(&mut self) {
        let next_token = self.next_token;
        *self = Self::with_page_size(self.page_size);
        self.next_token = next_token;
    }

    /// Begins `kind`, awaits `source` and applies the result.
    ///
    /// Returns whether a fetch was actually performed.
    pub async fn load<S: GallerySource>(&mut self, kind: FetchKind, source: &S) -> bool {
        let Some(request) = self.begin(kind) else {
            return false;
        };
        let result = source.fetch_page(request.page, request.page_size).await;
        self.finish(&request, result)
    }

    pub async fn initial_load<S: GallerySource>(&mut self, source: &S) -> bool {
        self.load(FetchKind::Initial, source).await
    }

    pub async fn refresh<S: GallerySource>(&mut self, source: &S) -> bool {
        self.load(FetchKind::Refresh, source).await
    }

    pub async fn load_more<S: GallerySource>(&mut self, source: &S) -> bool {
        self.load(FetchKind::More, source).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::source::{sample_records, InMemorySource};

    fn ids(fetcher: &PaginationFetcher) -> Vec<&str> {
        fetcher.records().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn starts_idle_with_next_page() {
        let fetcher = PaginationFetcher::new();
        assert_eq!(fetcher.state(), FetchState::Idle);
        assert!(fetcher.has_next_page());
        assert!(fetcher.records().is_empty());
        assert_eq!(fetcher.page_size(), PAGE_SIZE);
    }

    #[tokio::test]
    async fn full_page_then_short_page_ends_pagination() {
        let source = InMemorySource::new();
        source
            .push_page(sample_records("a", 40))
            .push_page(sample_records("b", 15));
        let mut fetcher = PaginationFetcher::new();

        assert!(fetcher.initial_load(&source).await);
        assert!(fetcher.has_next_page());
        assert_eq!(fetcher.records().len(), 40);

        assert!(fetcher.load_more(&source).await);
        assert!(!fetcher.has_next_page());
        assert_eq!(fetcher.records().len(), 55);
        assert_eq!(fetcher.current_page(), 1);
        assert_eq!(source.calls(), vec![(0, 40), (1, 40)]);

        assert!(!fetcher.load_more(&source).await);
        assert_eq!(source.calls().len(), 2);
    }

    #[tokio::test]
    async fn thirty_seven_records_ends_pagination() {
        let source = InMemorySource::new();
        source.push_page(sample_records("a", 37));
        let mut fetcher = PaginationFetcher::new();

        fetcher.initial_load(&source).await;
        assert!(!fetcher.has_next_page());
    }

    #[tokio::test]
    async fn pages_append_in_request_order() {
        let source = InMemorySource::new();
        source
            .push_page(sample_records("a", 2))
            .push_page(sample_records("b", 2))
            .push_page(sample_records("c", 1));
        let mut fetcher = PaginationFetcher::with_page_size(2);

        fetcher.initial_load(&source).await;
        fetcher.load_more(&source).await;
        fetcher.load_more(&source).await;

        assert_eq!(ids(&fetcher), vec!["a0", "a1", "b0", "b1", "c0"]);
        assert_eq!(fetcher.current_page(), 2);
    }

    #[tokio::test]
    async fn refresh_replaces_collection() {
        let source = InMemorySource::new();
        source
            .push_page(sample_records("a", 2))
            .push_page(sample_records("b", 2))
            .push_page(sample_records("c", 2))
            .push_page(sample_records("fresh", 1));
        let mut fetcher = PaginationFetcher::with_page_size(2);

        fetcher.initial_load(&source).await;
        fetcher.load_more(&source).await;
        fetcher.load_more(&source).await;
        assert_eq!(fetcher.records().len(), 6);

        assert!(fetcher.refresh(&source).await);
        assert_eq!(ids(&fetcher), vec!["fresh0"]);
        assert_eq!(fetcher.current_page(), 0);
        assert_eq!(source.calls().last(), Some(&(0, 2)));
    }

    #[tokio::test]
    async fn failure_keeps_records_and_success_clears_error() {
        let source = InMemorySource::new();
        source
            .push_page(sample_records("a", 2))
            .push_error(GalleryError::Timeout)
            .push_page(sample_records("b", 2));
        let mut fetcher = PaginationFetcher::with_page_size(2);

        fetcher.initial_load(&source).await;
        fetcher.load_more(&source).await;
        assert_eq!(fetcher.error(), Some(&GalleryError::Timeout));
        assert_eq!(fetcher.records().len(), 2);
        assert_eq!(fetcher.current_page(), 0);
        assert_eq!(fetcher.state(), FetchState::Idle);

        fetcher.load_more(&source).await;
        assert!(fetcher.error().is_none());
        assert_eq!(ids(&fetcher), vec!["a0", "a1", "b0", "b1"]);
    }

    #[tokio::test]
    async fn initial_failure_leaves_empty_collection() {
        let source = InMemorySource::new();
        source.push_error(GalleryError::HttpStatus(503));
        let mut fetcher = PaginationFetcher::new();

        fetcher.initial_load(&source).await;
        assert!(fetcher.records().is_empty());
        assert_eq!(fetcher.error(), Some(&GalleryError::HttpStatus(503)));
    }

    #[test]
    fn begin_sets_matching_state() {
        let mut fetcher = PaginationFetcher::new();
        let request = fetcher.begin(FetchKind::Initial).unwrap();
        assert!(fetcher.is_loading());
        assert_eq!(request.page, 0);
        fetcher.finish(&request, Ok(GalleryPage::from_records(sample_records("a", 40))));

        let request = fetcher.begin(FetchKind::Refresh).unwrap();
        assert!(fetcher.is_refreshing());
        fetcher.finish(&request, Ok(GalleryPage::from_records(sample_records("a", 40))));

        let request = fetcher.begin(FetchKind::More).unwrap();
        assert!(fetcher.is_loading_more());
        assert_eq!(request.page, 1);
    }

    #[test]
    fn refresh_rejected_while_loading_more() {
        let mut fetcher = PaginationFetcher::with_page_size(1);
        let first = fetcher.begin(FetchKind::Initial).unwrap();
        fetcher.finish(&first, Ok(GalleryPage::from_records(sample_records("a", 1))));

        let more = fetcher.begin(FetchKind::More).unwrap();
        assert!(fetcher.begin(FetchKind::Refresh).is_none());
        assert!(fetcher.begin(FetchKind::More).is_none());
        assert!(fetcher.is_loading_more());

        assert!(fetcher.finish(&more, Ok(GalleryPage::from_records(sample_records("b", 1)))));
        assert_eq!(ids(&fetcher), vec!["a0", "b0"]);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut fetcher = PaginationFetcher::new();
        let stale = fetcher.begin(FetchKind::Initial).unwrap();
        fetcher.reset();

        let current = fetcher.begin(FetchKind::Initial).unwrap();
        assert_ne!(stale.token, current.token);

        assert!(!fetcher.finish(&stale, Ok(GalleryPage::from_records(sample_records("old", 3)))));
        assert!(fetcher.is_loading());
        assert!(fetcher.records().is_empty());

        assert!(fetcher.finish(&current, Ok(GalleryPage::from_records(sample_records("new", 2)))));
        assert_eq!(ids(&fetcher), vec!["new0", "new1"]);
    }

    #[test]
    fn double_finish_is_ignored() {
        let mut fetcher = PaginationFetcher::new();
        let request = fetcher.begin(FetchKind::Initial).unwrap();
        assert!(fetcher.finish(&request, Ok(GalleryPage::from_records(sample_records("a", 1)))));
        assert!(!fetcher.finish(&request, Err(GalleryError::Timeout)));
        assert!(fetcher.error().is_none());
    }

    #[test]
    fn has_next_uses_source_length() {
        let mut fetcher = PaginationFetcher::with_page_size(3);
        let request = fetcher.begin(FetchKind::Initial).unwrap();
        let page = GalleryPage {
            records: sample_records("a", 2),
            source_len: 3,
        };
        fetcher.finish(&request, Ok(page));
        assert!(fetcher.has_next_page());
        assert_eq!(fetcher.records().len(), 2);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut fetcher = PaginationFetcher::with_page_size(1);
        let request = fetcher.begin(FetchKind::Initial).unwrap();
        fetcher.finish(&request, Ok(GalleryPage::from_records(Vec::new())));
        assert!(!fetcher.has_next_page());

        fetcher.reset();
        assert!(fetcher.has_next_page());
        assert!(fetcher.records().is_empty());
        assert_eq!(fetcher.page_size(), 1);
    }
}
