//! Transient success/failure notifications shown in the footer.

use std::time::{Duration, Instant};

const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    expires_at: Instant,
}

/// Small queue of toasts; only the newest is rendered.
#[derive(Debug, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        self.entries.push(Toast {
            kind,
            message,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    /// Drop expired toasts. Called on tick.
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.entries.retain(|t| t.expires_at > now);
    }

    pub fn current(&self) -> Option<&Toast> {
        self.entries.last()
    }
}
