// SPDX-License-Identifier: MPL-2.0
//! Transient banner notifications.
//!
//! Non-blocking feedback for the contact form and startup warnings. Each
//! banner is independent: it slides in after a short grace, auto-dismisses
//! after five seconds unless closed first, and slides out over 300 ms before
//! removal. Close and timeout share one guarded removal path.
//!
//! # Components
//!
//! - [`notification`] - `Notification` phase machine and `Kind`
//! - [`manager`] - `Manager` owning the active banners
//! - [`toast`] - widget rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{
    Kind, Notification, NotificationId, Phase, AUTO_DISMISS, ENTRANCE_GRACE, SLIDE_OUT,
};
pub use toast::Toast;
