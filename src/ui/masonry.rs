// SPDX-License-Identifier: MPL-2.0
//! Masonry placement and scroll thresholds for the image grid.

use crate::config::{
    BACK_TO_TOP_THRESHOLD_PX, DEFAULT_GRID_COLUMNS, LOAD_MORE_THRESHOLD_PX, MAX_GRID_COLUMNS,
    MIN_GRID_COLUMNS, PAGE_SIZE,
};
use crate::gallery::ImageRecord;
use std::ops::Range;

/// Splits `records` into `columns` lists of indices.
///
/// Each record goes to the column whose accumulated height (sum of aspect
/// ratios) is smallest; ties go to the leftmost column. Order inside a
/// column follows the input order.
pub fn distribute(records: &[ImageRecord], columns: u16) -> Vec<Vec<usize>> {
    let count = usize::from(clamp_columns(columns));
    let mut layout = vec![Vec::with_capacity(records.len() / count + 1); count];
    let mut heights = vec![0.0_f32; count];

    for (index, record) in records.iter().enumerate() {
        let target = shortest(&heights);
        layout[target].push(index);
        heights[target] += record.aspect_ratio();
    }

    layout
}

fn shortest(heights: &[f32]) -> usize {
    let mut best = 0;
    for (index, height) in heights.iter().enumerate().skip(1) {
        if *height < heights[best] {
            best = index;
        }
    }
    best
}

/// Columns clamped to the supported range; `0` means the default.
pub fn clamp_columns(columns: u16) -> u16 {
    if columns == 0 {
        DEFAULT_GRID_COLUMNS
    } else {
        columns.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }
}

/// Scroll position of the grid, as reported by the scrollable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    /// Within [`LOAD_MORE_THRESHOLD_PX`] of the end of the content.
    pub fn is_near_bottom(&self) -> bool {
        self.offset_y + self.viewport_height >= self.content_height - LOAD_MORE_THRESHOLD_PX
    }

    /// Past [`BACK_TO_TOP_THRESHOLD_PX`].
    pub fn shows_back_to_top(&self) -> bool {
        self.offset_y > BACK_TO_TOP_THRESHOLD_PX
    }

    /// Estimated indices on screen out of `len` records, widened by `margin`
    /// on both sides.
    ///
    /// The estimate assumes records are spread evenly over the content
    /// height. Before the first scroll report the first page is assumed.
    pub fn visible_range(&self, len: usize, margin: usize) -> Range<usize> {
        if self.content_height <= 0.0 || self.content_height <= self.viewport_height {
            return 0..len.min(PAGE_SIZE as usize + margin);
        }

        let top = (self.offset_y / self.content_height).clamp(0.0, 1.0);
        let bottom = ((self.offset_y + self.viewport_height) / self.content_height).clamp(0.0, 1.0);
        let first = (len as f32 * top).floor() as usize;
        let last = (len as f32 * bottom).ceil() as usize;

        first.saturating_sub(margin)..(last + margin).min(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(id: &str, width: u32, height: u32) -> ImageRecord {
        ImageRecord {
            width: Some(width),
            height: Some(height),
            ..ImageRecord::new(id, "u")
        }
    }

    #[test]
    fn equal_items_go_round_robin() {
        let records: Vec<_> = (0..7).map(|i| ImageRecord::new(i.to_string(), "u")).collect();
        let layout = distribute(&records, 3);
        assert_eq!(layout, vec![vec![0, 3, 6], vec![1, 4], vec![2, 5]]);
    }

    #[test]
    fn tall_items_push_next_items_elsewhere() {
        let records = vec![
            sized("tall", 100, 300),
            sized("a", 100, 100),
            sized("b", 100, 100),
            sized("c", 100, 100),
        ];
        let layout = distribute(&records, 2);
        assert_eq!(layout, vec![vec![0], vec![1, 2, 3]]);
    }

    #[test]
    fn every_index_is_placed_once() {
        let records: Vec<_> = (0..40)
            .map(|i| sized(&i.to_string(), 100 + (i % 5) * 40, 100 + (i % 7) * 30))
            .collect();
        let layout = distribute(&records, 4);

        let mut placed: Vec<usize> = layout.iter().flatten().copied().collect();
        placed.sort_unstable();
        assert_eq!(placed, (0..40).collect::<Vec<_>>());
    }

    #[test]
    fn columns_are_clamped() {
        assert_eq!(distribute(&[], 0).len(), usize::from(DEFAULT_GRID_COLUMNS));
        assert_eq!(distribute(&[], 50).len(), usize::from(MAX_GRID_COLUMNS));
        assert_eq!(clamp_columns(1), 1);
    }

    #[test]
    fn near_bottom_threshold() {
        let metrics = ScrollMetrics {
            offset_y: 1400.0,
            viewport_height: 500.0,
            content_height: 2000.0,
        };
        assert!(metrics.is_near_bottom());

        let metrics = ScrollMetrics {
            offset_y: 1399.0,
            ..metrics
        };
        assert!(!metrics.is_near_bottom());
    }

    #[test]
    fn short_content_counts_as_near_bottom() {
        let metrics = ScrollMetrics {
            offset_y: 0.0,
            viewport_height: 800.0,
            content_height: 300.0,
        };
        assert!(metrics.is_near_bottom());
    }

    #[test]
    fn visible_range_follows_scroll_position() {
        let metrics = ScrollMetrics {
            offset_y: 5000.0,
            viewport_height: 2500.0,
            content_height: 10000.0,
        };
        assert_eq!(metrics.visible_range(100, 10), 40..85);
        assert_eq!(metrics.visible_range(100, 0), 50..75);
    }

    #[test]
    fn visible_range_is_clamped_to_len() {
        let metrics = ScrollMetrics {
            offset_y: 7680.0,
            viewport_height: 1024.0,
            content_height: 8192.0,
        };
        assert_eq!(metrics.visible_range(20, 5), 13..20);
        assert_eq!(metrics.visible_range(0, 5), 0..0);
    }

    #[test]
    fn visible_range_before_first_scroll_covers_first_page() {
        let metrics = ScrollMetrics::default();
        assert_eq!(metrics.visible_range(10, 4), 0..10);
        assert_eq!(
            metrics.visible_range(500, 4),
            0..(PAGE_SIZE as usize + 4)
        );
    }

    #[test]
    fn back_to_top_after_threshold() {
        let mut metrics = ScrollMetrics::default();
        metrics.offset_y = 400.0;
        assert!(!metrics.shows_back_to_top());
        metrics.offset_y = 401.0;
        assert!(metrics.shows_back_to_top());
    }
}
