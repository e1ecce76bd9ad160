//! Toast Module
//!
//! Short-lived notifications shown in a corner of the page.

use serde::Serialize;

use crate::cache::current_timestamp_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
        }
    }
}

// == Toast ==
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// Creation timestamp (Unix milliseconds)
    pub created_at_ms: u64,
    /// Dismissal timestamp (Unix milliseconds)
    pub expires_at_ms: u64,
}

impl Toast {
    /// A toast is expired once the current time reaches `expires_at_ms`.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at_ms
    }

    /// Remaining display time in milliseconds, `0` once expired.
    pub fn remaining_ms(&self) -> u64 {
        self.expires_at_ms.saturating_sub(current_timestamp_ms())
    }
}

// == Toast Queue ==
/// Active toasts, oldest first, each visible for a fixed duration.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    duration_ms: u64,
}

impl ToastQueue {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            duration_ms,
        }
    }

    // == Push ==
    /// Queues a toast that expires `duration_ms` from now.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> Toast {
        let now = current_timestamp_ms();
        let toast = Toast {
            id: self.next_id,
            message: message.into(),
            kind,
            created_at_ms: now,
            expires_at_ms: now.saturating_add(self.duration_ms),
        };
        self.next_id += 1;
        self.toasts.push(toast.clone());
        toast
    }

    /// Unexpired toasts, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.toasts
            .iter()
            .filter(|t| !t.is_expired())
            .cloned()
            .collect()
    }

    /// Closes a toast early. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    // == Cleanup Expired ==
    /// Removes expired toasts and returns how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        before - self.toasts.len()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
