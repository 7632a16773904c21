// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! - [`notification`]: a single message with its severity
//! - [`manager`]: queueing and auto-dismiss
//! - [`toast`]: rendering
//!
//! Success and info toasts close after about 3 s, warnings after 5 s, and
//! errors stay until dismissed. Up to three are shown in the bottom-right
//! corner; the others wait their turn.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
