// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Feedback for actions such as saving an image or failing to store a
//! favorite, shown without blocking the screen.
//!
//! - [`notification`]: a single message with its severity and age
//! - [`manager`]: queue with at most three visible toasts
//! - [`toast`]: the widget
//!
//! Success and info toasts close after 3s, warnings after 5s, errors stay
//! until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
