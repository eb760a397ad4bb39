use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// Transient on-page notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NoticeKind,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }
}

impl From<&PortalError> for Notification {
    fn from(err: &PortalError) -> Self {
        Notification::warning(err.to_string())
    }
}

/// Notification queue. Entries disappear once older than `ttl`.
#[derive(Debug)]
pub struct NotificationCenter {
    ttl: Duration,
    queue: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, queue: Vec::new() }
    }

    /// Takes effect for entries already queued too
    pub fn set_ttl(&mut self, ttl: Duration) {
        self.ttl = ttl;
    }

    pub fn push(&mut self, notification: Notification) {
        log::debug!("notice [{:?}] {}", notification.kind, notification.message);
        self.prune(Utc::now());
        self.queue.push(notification);
    }

    /// Drop expired entries and return what is still visible at `now`.
    pub fn visible(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        self.prune(now);
        self.queue.clone()
    }

    fn prune(&mut self, now: DateTime<Utc>) {
        let ttl = chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::seconds(3));
        self.queue.retain(|n| now - n.created_at < ttl);
    }
}
