// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Api**: Remote gallery request parameters
//! - **Grid**: Masonry grid layout
//! - **Cache**: In-memory image cache
//! - **Network**: Reachability probing

// ==========================================================================
// Api Defaults
// ==========================================================================

/// Number of records requested per page. Also the "has next page" threshold.
pub const PAGE_SIZE: u32 = 40;

/// Default total budget for a single HTTP request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Sort key sent as `order_by` to the gallery API (2 = capture time).
pub const API_ORDER_BY: u32 = 2;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of masonry columns.
pub const DEFAULT_GRID_COLUMNS: u16 = 3;

/// Minimum number of masonry columns.
pub const MIN_GRID_COLUMNS: u16 = 1;

/// Maximum number of masonry columns.
pub const MAX_GRID_COLUMNS: u16 = 8;

/// Distance from the bottom (in logical pixels) at which the next page is requested.
pub const LOAD_MORE_THRESHOLD_PX: f32 = 100.0;

/// Scroll offset (in logical pixels) after which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD_PX: f32 = 400.0;

/// Records loaded on each side of the estimated visible range of the grid.
pub const PREVIEW_MARGIN: usize = 24;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default number of decoded image handles kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 256;

/// Minimum image cache capacity.
pub const MIN_IMAGE_CACHE_ENTRIES: usize = 16;

/// Maximum image cache capacity.
pub const MAX_IMAGE_CACHE_ENTRIES: usize = 2048;

/// Number of neighbours prefetched on each side of the viewer's current image.
pub const VIEWER_PREFETCH_RADIUS: usize = 1;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default interval between two reachability probes (in seconds).
pub const DEFAULT_PROBE_INTERVAL_SECS: u64 = 15;

/// Minimum probe interval (in seconds).
pub const MIN_PROBE_INTERVAL_SECS: u64 = 5;

/// Maximum probe interval (in seconds).
pub const MAX_PROBE_INTERVAL_SECS: u64 = 300;

/// Budget for a single reachability probe (in seconds).
pub const PROBE_TIMEOUT_SECS: u64 = 3;

/// Interval between two platform color scheme checks in system theme mode (in seconds).
pub const SYSTEM_THEME_POLL_SECS: u64 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_default_is_within_bounds() {
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn grid_columns_default_is_within_bounds() {
        assert!((MIN_GRID_COLUMNS..=MAX_GRID_COLUMNS).contains(&DEFAULT_GRID_COLUMNS));
    }

    #[test]
    fn cache_default_is_within_bounds() {
        assert!((MIN_IMAGE_CACHE_ENTRIES..=MAX_IMAGE_CACHE_ENTRIES)
            .contains(&DEFAULT_IMAGE_CACHE_ENTRIES));
    }

    #[test]
    fn probe_interval_default_is_within_bounds() {
        assert!((MIN_PROBE_INTERVAL_SECS..=MAX_PROBE_INTERVAL_SECS)
            .contains(&DEFAULT_PROBE_INTERVAL_SECS));
    }
}
