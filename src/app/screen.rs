// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Tab;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    Favorites,
    Settings,
    /// Full-screen viewer, opened over the gallery or the favorites.
    Viewer,
}

impl From<Tab> for Screen {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Gallery => Screen::Gallery,
            Tab::Favorites => Screen::Favorites,
            Tab::Settings => Screen::Settings,
        }
    }
}
