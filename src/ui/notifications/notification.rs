// SPDX-License-Identifier: MPL-2.0
//! Notification data: what is shown, how loud, and for how long.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Allocates the next process-wide id.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Accent used for the icon and the toast border.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// How long a toast of this severity stays on screen.
    #[must_use]
    pub fn display_duration(self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_secs(4),
            Severity::Warning | Severity::Error => Duration::from_secs(6),
        }
    }
}

/// A notification to be displayed to the user.
///
/// Texts are stored as i18n keys and resolved at render time, so a toast
/// follows the active locale.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    /// Secondary line, e.g. the kind of failure behind an error toast.
    detail_key: Option<String>,
    created_at: Instant,
}

impl Notification {
    /// Creates a toast whose text is the i18n entry `message_key`.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            detail_key: None,
            created_at: Instant::now(),
        }
    }

    /// Green toast, e.g. a finished download.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Neutral toast.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Amber toast for recoverable problems such as a bad `settings.toml`.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Red toast for failed actions.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument used when the message is resolved.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Sets the i18n key of the secondary line.
    #[must_use]
    pub fn with_detail(mut self, detail_key: impl Into<String>) -> Self {
        self.detail_key = Some(detail_key.into());
        self
    }

    /// Attaches the localized category of `error` as the detail line.
    #[must_use]
    pub fn with_error(self, error: &Error) -> Self {
        self.with_detail(error.i18n_key())
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Fluent arguments, in insertion order.
    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn detail_key(&self) -> Option<&str> {
        self.detail_key.as_deref()
    }

    /// When the toast was created; expiry counts from here.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Whether the toast has been on screen for its full duration at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.severity.display_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn failures_stay_longer_than_confirmations() {
        assert!(Severity::Error.display_duration() > Severity::Success.display_duration());
        assert_eq!(
            Severity::Success.display_duration(),
            Severity::Info.display_duration()
        );
    }

    #[test]
    fn expiry_follows_severity_duration() {
        let notification = Notification::success("notification-download-success");
        let created = notification.created_at();
        assert!(!notification.is_expired_at(created));
        assert!(!notification.is_expired_at(created + Duration::from_millis(3_999)));
        assert!(notification.is_expired_at(created + Duration::from_secs(4)));
    }

    #[test]
    fn with_error_sets_detail_from_error_kind() {
        let notification = Notification::error("notification-download-error")
            .with_error(&Error::Network("connection refused".into()));
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.detail_key(), Some("error-network"));
    }

    #[test]
    fn builder_collects_arguments() {
        let notification = Notification::info("tooltip-go-to").with_arg("n", "2");
        assert_eq!(
            notification.message_args(),
            &[("n".to_string(), "2".to_string())]
        );
    }
}
