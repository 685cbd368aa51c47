// SPDX-License-Identifier: MPL-2.0
//! The image record shown by the grid, the viewer and the favorites screen.

use serde::{Deserialize, Serialize};

/// One image of the remote gallery, as kept by the application.
///
/// Records are built once by the normalizer and never mutated afterwards.
/// The `id` embeds the fetch timestamp, so the same remote image gets a new
/// id after every refresh; favorites are matched against that point-in-time id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl ImageRecord {
    /// Minimal record, mostly useful in tests.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            thumbnail_url: None,
            title: None,
            caption: None,
            width: None,
            height: None,
        }
    }

    /// URL used in the grid: the thumbnail when present, the full image otherwise.
    pub fn preview_url(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.url)
    }

    /// Height divided by width, `1.0` when a dimension is missing or zero.
    pub fn aspect_ratio(&self) -> f32 {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => h as f32 / w as f32,
            _ => 1.0,
        }
    }
}

/// Builds a record id: `"{source_id}_{ordinal}_{timestamp_ms}"`, or
/// `"generated_{ordinal}_{timestamp_ms}"` when the source has no id.
pub fn synthesize_id(source_id: Option<&str>, ordinal: usize, timestamp_ms: i64) -> String {
    match source_id {
        Some(id) if !id.is_empty() => format!("{id}_{ordinal}_{timestamp_ms}"),
        _ => format!("generated_{ordinal}_{timestamp_ms}"),
    }
}
