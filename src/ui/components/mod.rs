// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! - [`error_message`]: inline error with retry
//! - [`offline_banner`]: red strip shown while offline
//! - [`skeleton`]: placeholder grid during the first load

pub mod error_message;
pub mod offline_banner;
pub mod skeleton;
