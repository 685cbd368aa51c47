// SPDX-License-Identifier: MPL-2.0
//! Handler methods for App message processing.
//!
//! This module contains the `handle_*` methods for App that process
//! async operation results (page fetches, image downloads, saves, probes).

use super::{persistence, update, App, Message};
use crate::error::{Error, GalleryError};
use crate::gallery::{FetchKind, GalleryPage, PageRequest};
use crate::network::NetworkStatus;
use crate::ui::notifications::Notification;
use crate::ui::theming::SystemScheme;
use iced::Task;
use std::path::PathBuf;

impl App {
    /// Applies a page fetch. Stale completions are dropped by the fetcher.
    ///
    /// A transient failure probes the network right away, so a lost
    /// connection shows the offline state without waiting for the timer.
    pub(super) fn handle_page_fetched(
        &mut self,
        request: PageRequest,
        result: Result<GalleryPage, GalleryError>,
    ) -> Task<Message> {
        let failure = result.as_ref().err().map(GalleryError::is_transient);
        if !self.fetcher.finish(&request, result) {
            return Task::none();
        }

        if let Some(transient) = failure {
            self.retry_kind = Some(request.kind);
            if transient && !self.network.is_offline() {
                return update::probe_network(&self.config.api);
            }
            return Task::none();
        }
        self.retry_kind = None;

        update::request_previews(
            &mut self.cache,
            &self.source,
            &self.network,
            self.fetcher.records(),
            self.gallery_scroll,
        )
    }

    pub(super) fn handle_image_fetched(
        &mut self,
        url: String,
        result: Result<Vec<u8>, GalleryError>,
    ) -> Task<Message> {
        match result {
            Ok(bytes) => {
                self.cache.insert(&url, bytes);
            }
            Err(err) => {
                log::debug!("Image download failed for {url}: {err}");
                self.cache.fail(&url);
            }
        }
        Task::none()
    }

    pub(super) fn handle_save_completed(
        &mut self,
        result: Result<Option<PathBuf>, Error>,
    ) -> Task<Message> {
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.set_saving(false);
        }

        match result {
            Ok(Some(path)) => {
                self.notifications
                    .push(Notification::success("notification-save-success"));
                if let Some(key) = persistence::remember_save_directory(&mut self.app_state, &path)
                {
                    self.notifications.push(Notification::warning(key));
                }
            }
            Ok(None) => {}
            Err(err) => {
                log::warn!("Saving image failed: {err}");
                self.notifications
                    .push(Notification::error("notification-save-error"));
            }
        }
        Task::none()
    }

    /// Records a probe result. Coming back online with nothing displayed
    /// reloads the gallery.
    pub(super) fn handle_network_probed(&mut self, status: NetworkStatus) -> Task<Message> {
        let previous = self.network.set_status(status);
        if status == NetworkStatus::Offline && previous != NetworkStatus::Offline {
            self.notifications
                .push(Notification::warning("notification-offline"));
            return Task::none();
        }
        if previous != NetworkStatus::Offline || status != NetworkStatus::Online {
            return Task::none();
        }

        self.notifications.dismiss_key("notification-offline");
        self.notifications
            .push(Notification::info("notification-back-online"));
        self.cache.retry_failed();

        if self.fetcher.records().is_empty() {
            update::start_fetch(&mut self.fetcher, &self.source, FetchKind::Initial)
        } else {
            update::request_previews(
                &mut self.cache,
                &self.source,
                &self.network,
                self.fetcher.records(),
                self.gallery_scroll,
            )
        }
    }

    pub(super) fn handle_system_scheme_detected(&mut self, scheme: SystemScheme) -> Task<Message> {
        if self.theme.set_system_scheme(scheme) {
            log::debug!("Platform color scheme changed to {scheme:?}");
            self.palette = self.theme.palette();
        }
        Task::none()
    }
}
