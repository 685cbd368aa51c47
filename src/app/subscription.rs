// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are translated here into [`Shortcut`]s; what a shortcut
//! does depends on the screen and is decided in the update logic.

use super::Message;
use crate::config::SYSTEM_THEME_POLL_SECS;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Keyboard actions understood by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `F5` or `Ctrl+R`.
    Refresh,
    Previous,
    Next,
    ToggleFavorite,
    /// `Ctrl+S` (`Cmd+S` on macOS).
    Save,
    Close,
}

/// Maps a key press to a shortcut.
pub fn shortcut_for(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    match key.as_ref() {
        Key::Named(Named::F5) => Some(Shortcut::Refresh),
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
        Key::Named(Named::ArrowRight) => Some(Shortcut::Next),
        Key::Named(Named::Escape) => Some(Shortcut::Close),
        Key::Character(c) if modifiers.command() => match c {
            "s" | "S" => Some(Shortcut::Save),
            "r" | "R" => Some(Shortcut::Refresh),
            _ => None,
        },
        Key::Character("f" | "F") if modifiers.is_empty() || modifiers == Modifiers::SHIFT => {
            Some(Shortcut::ToggleFavorite)
        }
        _ => None,
    }
}

/// Keyboard shortcuts, for key presses no widget consumed.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut_for(&key, modifiers).map(Message::Shortcut)
            }
            _ => None,
        }
    })
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Reachability probe every `interval`.
pub fn create_probe_subscription(interval: Duration) -> Subscription<Message> {
    time::every(interval).map(|_| Message::ProbeNetwork)
}

/// Polls the platform color scheme while the theme follows the system.
pub fn create_system_theme_subscription(follows_system: bool) -> Subscription<Message> {
    if follows_system {
        time::every(Duration::from_secs(SYSTEM_THEME_POLL_SECS)).map(|_| Message::CheckSystemTheme)
    } else {
        Subscription::none()
    }
}
