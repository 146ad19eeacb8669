// ABOUTME: Fire-and-forget notification channel for login, logout and submission feedback
// LogNotifier writes to the tracing log; ToastQueue backs the TUI corner toasts

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "ℹ",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: &str);
}

/// Sends every notification to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success | NotificationKind::Info => info!(kind = kind.label(), "{}", message),
            NotificationKind::Warning => warn!(kind = kind.label(), "{}", message),
            NotificationKind::Error => error!(kind = kind.label(), "{}", message),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: NotificationKind,
    pub message: String,
    pub created: Instant,
}

/// Bounded queue of toasts that expire after `ttl`
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
    max: usize,
}

impl ToastQueue {
    pub fn new(ttl: Duration, max: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
            max: max.max(1),
        }
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    fn push_at(&mut self, kind: NotificationKind, message: impl Into<String>, created: Instant) {
        self.toasts.push_back(Toast {
            kind,
            message: message.into(),
            created,
        });
        while self.toasts.len() > self.max {
            self.toasts.pop_front();
        }
    }

    /// Drop toasts older than the ttl
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts.retain(|toast| now.saturating_duration_since(toast.created) < ttl);
    }

    /// Newest last
    pub fn visible(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(4), 3)
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        // Toasts vanish; keep a trace in the log too
        LogNotifier.notify(kind, message);
        self.push(kind, message);
    }
}
