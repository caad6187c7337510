// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Download results and startup warnings are reported as short-lived toasts
//! in the bottom-right corner. At most three are visible at once; further
//! toasts wait in a queue until a slot frees up.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-download-success"));
//!
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
