// SPDX-License-Identifier: MPL-2.0
//! User-facing notifications: short-lived banners for warnings,
//! errors, and confirmations that do not belong in the main layout.

mod banner;
mod manager;
mod notification;

pub use banner::view;
pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
