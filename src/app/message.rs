// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::subscription::Shortcut;
use crate::error::{Error, GalleryError};
use crate::gallery::{GalleryPage, PageRequest};
use crate::network::NetworkStatus;
use crate::ui::favorites;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::theming::SystemScheme;
use crate::ui::viewer;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    Favorites(favorites::Message),
    Settings(settings::Message),
    Viewer(viewer::Message),
    Notification(notifications::NotificationMessage),
    /// A page request handed out by the fetcher completed.
    PageFetched {
        request: PageRequest,
        result: Result<GalleryPage, GalleryError>,
    },
    /// Bytes of a thumbnail or full-size image arrived.
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, GalleryError>,
    },
    /// `Ok(None)` when the save dialog was cancelled.
    SaveCompleted(Result<Option<PathBuf>, Error>),
    ProbeNetwork,
    NetworkProbed(NetworkStatus),
    CheckSystemTheme,
    SystemSchemeDetected(SystemScheme),
    Shortcut(Shortcut),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (storage and state files).
    /// Takes precedence over `ICED_GALLERY_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
