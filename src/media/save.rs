// SPDX-License-Identifier: MPL-2.0
//! Saving a gallery image to disk.
//!
//! The image is downloaded, its format sniffed from the bytes to pick a file
//! extension, and the user chooses the destination in a native dialog.

use crate::error::{Error, Result};
use crate::gallery::client::download_bytes;
use crate::gallery::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::network::NetworkMonitor;
use image_rs::ImageFormat;
use std::path::{Path, PathBuf};

/// File extension for the encoded image, `"jpg"` when the format is unknown.
pub fn extension_for(bytes: &[u8]) -> &'static str {
    match image_rs::guess_format(bytes) {
        Ok(ImageFormat::Png) => "png",
        Ok(ImageFormat::Gif) => "gif",
        Ok(ImageFormat::WebP) => "webp",
        Ok(ImageFormat::Bmp) => "bmp",
        Ok(ImageFormat::Tiff) => "tiff",
        Ok(ImageFormat::Ico) => "ico",
        _ => "jpg",
    }
}

/// Default file name offered in the save dialog.
///
/// Built from the title when there is one, otherwise from the timestamp.
pub fn suggested_file_name(record: &ImageRecord, bytes: &[u8], timestamp_ms: i64) -> String {
    let stem = record
        .title
        .as_deref()
        .map(sanitize_stem)
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| format!("image_{timestamp_ms}"));
    format!("{stem}.{}", extension_for(bytes))
}

fn sanitize_stem(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    cleaned.trim().chars().take(80).collect()
}

/// Localized labels of the "Save As" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLabels {
    pub title: String,
    pub filter: String,
}

impl DialogLabels {
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            title: i18n.tr("save-dialog-title"),
            filter: i18n.tr("save-dialog-filter"),
        }
    }
}

/// Opens the native "Save As" dialog. `None` when the user cancels.
pub async fn pick_destination(
    labels: DialogLabels,
    file_name: String,
    directory: Option<PathBuf>,
) -> Option<PathBuf> {
    let extension = Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("jpg")
        .to_string();

    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title(&labels.title)
        .set_file_name(&file_name)
        .add_filter(&labels.filter, &[extension.as_str()]);

    if let Some(dir) = directory {
        if dir.exists() {
            dialog = dialog.set_directory(&dir);
        }
    }

    dialog.save_file().await.map(|h| h.path().to_path_buf())
}

/// Writes `bytes` to `path`, creating missing parent directories.
pub async fn write_image(path: PathBuf, bytes: Vec<u8>) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, &bytes).await.map_err(Error::from)?;
    log::info!("Saved image to {}", path.display());
    Ok(path)
}

/// Downloads `record`, asks where to put it and writes it there.
///
/// Returns `Ok(None)` when the user cancels the dialog.
pub async fn save_record(
    client: reqwest::Client,
    network: NetworkMonitor,
    record: ImageRecord,
    directory: Option<PathBuf>,
    labels: DialogLabels,
) -> Result<Option<PathBuf>> {
    let bytes = download_bytes(&client, &network, &record.url).await?;
    let file_name = suggested_file_name(&record, &bytes, chrono::Utc::now().timestamp_millis());

    let Some(path) = pick_destination(labels, file_name, directory).await else {
        log::debug!("Save of {} cancelled", record.id);
        return Ok(None);
    };

    write_image(path, bytes).await.map(Some)
}
