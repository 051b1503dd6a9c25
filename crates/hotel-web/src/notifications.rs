//! Transient, dismissible page notifications.
//!
//! Each notification expires a fixed time after it was shown. Expiry is
//! driven by `NotificationCenter::expire` (called on every page tick) and
//! can be pre-empted by `dismiss`; both are idempotent.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Id of the element the notification is rendered into
    pub fn element_id(&self) -> String {
        format!("notification-{}", self.0)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Danger,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NotificationCenter {
    timeout: Duration,
    next_id: u64,
    active: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout: Duration::milliseconds(i64::try_from(timeout_ms).unwrap_or(i64::MAX)),
            next_id: 1,
            active: Vec::new(),
        }
    }

    /// Show a new notification on top of any already visible.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> &Notification {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.active.push(Notification {
            id,
            kind,
            message: message.into(),
            expires_at: now
                .checked_add_signed(self.timeout)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
        &self.active[self.active.len() - 1]
    }

    /// Remove `id`; returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        self.active.len() != before
    }

    /// Remove and return every notification whose deadline has passed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> Vec<NotificationId> {
        let (expired, active): (Vec<_>, Vec<_>) = std::mem::take(&mut self.active)
            .into_iter()
            .partition(|n| n.expires_at <= now);
        self.active = active;
        expired.into_iter().map(|n| n.id).collect()
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(3000)
    }
}
