// SPDX-License-Identifier: MPL-2.0
//! Mapping of the remote JSON payload onto [`ImageRecord`]s.
//!
//! The endpoint answers `{ "data": { "image_list": [ ... ] } }`. Each entry
//! may name the same concept under several fields; the first present one wins:
//!
//! | record field    | payload fields, by priority                  |
//! |-----------------|----------------------------------------------|
//! | `url`           | `high_url`, `med_url`, `img_url`, `url`      |
//! | `thumbnail_url` | `med_url`, `thumbnail_url`, `low_url`        |
//! | `title`         | `name`, `title`                              |
//! | `caption`       | `note`, `caption`                            |
//!
//! Entries without any image URL cannot be displayed and are dropped; they
//! still count towards the page length used for the "next page" heuristic.

use super::record::{synthesize_id, ImageRecord};
use super::source::GalleryPage;
use crate::error::GalleryError;
use serde_json::Value;

const URL_FIELDS: [&str; 4] = ["high_url", "med_url", "img_url", "url"];
const THUMBNAIL_FIELDS: [&str; 3] = ["med_url", "thumbnail_url", "low_url"];
const TITLE_FIELDS: [&str; 2] = ["name", "title"];
const CAPTION_FIELDS: [&str; 2] = ["note", "caption"];

/// Normalizes a decoded response body.
///
/// A missing `data` or `data.image_list` is an empty page. An `image_list`
/// that is present but not an array is a malformed response.
pub fn normalize_page(body: &Value, timestamp_ms: i64) -> Result<GalleryPage, GalleryError> {
    let list = match body.get("data").and_then(|data| data.get("image_list")) {
        None | Some(Value::Null) => return Ok(GalleryPage::default()),
        Some(Value::Array(list)) => list,
        Some(other) => {
            return Err(GalleryError::MalformedResponse(format!(
                "data.image_list is {}, expected an array",
                json_type_name(other)
            )))
        }
    };

    let records = list
        .iter()
        .enumerate()
        .filter_map(|(ordinal, entry)| normalize_entry(entry, ordinal, timestamp_ms))
        .collect::<Vec<_>>();

    if records.len() < list.len() {
        log::debug!(
            "Dropped {} image entries without a usable URL",
            list.len() - records.len()
        );
    }

    Ok(GalleryPage {
        records,
        source_len: list.len(),
    })
}

/// Normalizes one `image_list` entry. Returns `None` when no URL is present.
pub fn normalize_entry(entry: &Value, ordinal: usize, timestamp_ms: i64) -> Option<ImageRecord> {
    let url = first_string(entry, &URL_FIELDS)?;
    let source_id = source_id(entry);

    Some(ImageRecord {
        id: synthesize_id(source_id.as_deref(), ordinal, timestamp_ms),
        url,
        thumbnail_url: first_string(entry, &THUMBNAIL_FIELDS),
        title: first_string(entry, &TITLE_FIELDS),
        caption: first_string(entry, &CAPTION_FIELDS),
        width: dimension(entry.get("width")),
        height: dimension(entry.get("height")),
    })
}

fn first_string(entry: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .find_map(|field| entry.get(*field).and_then(Value::as_str))
        .map(str::to_owned)
}

/// Source ids come as strings or numbers. Empty strings and zero count as absent.
fn source_id(entry: &Value) -> Option<String> {
    match entry.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Accepts integer or float numbers and numeric strings.
fn dimension(value: Option<&Value>) -> Option<u32> {
    let raw = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if raw.is_finite() && raw >= 0.0 && raw <= u32::MAX as f64 {
        Some(raw.round() as u32)
    } else {
        None
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
