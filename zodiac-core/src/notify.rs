//! Toast notifications and the global loading indicator.

use crate::config::DEFAULT_TOAST_TTL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Info => "ℹ️",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }

    /// CSS modifier used by the toast component.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Info => "alert-info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

impl NoticeId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    /// Milliseconds before the notice expires on its own.
    pub ttl_ms: u32,
}

/// Live notices plus a nesting counter for in-flight operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCenter {
    notices: Vec<Notice>,
    next_id: u64,
    ttl_ms: u32,
    loading: usize,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL_MS)
    }
}

impl NotificationCenter {
    #[must_use]
    pub const fn new(ttl_ms: u32) -> Self {
        Self {
            notices: Vec::new(),
            next_id: 0,
            ttl_ms,
            loading: 0,
        }
    }

    /// Push a notice. Identical messages are not collapsed.
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) -> NoticeId {
        self.notify_titled(kind, kind.title(), message)
    }

    pub fn notify_titled(
        &mut self,
        kind: NoticeKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId(self.next_id);
        let notice = Notice {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            ttl_ms: self.ttl_ms,
        };
        match kind {
            NoticeKind::Error => log::warn!("{}", notice.message),
            NoticeKind::Success | NoticeKind::Info => log::info!("{}", notice.message),
        }
        self.notices.push(notice);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> NoticeId {
        self.notify(NoticeKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> NoticeId {
        self.notify(NoticeKind::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> NoticeId {
        self.notify(NoticeKind::Info, message)
    }

    /// Remove a notice closed by the operator. Returns whether it was live.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        self.remove(id)
    }

    /// Remove a notice whose TTL elapsed. A notice already dismissed by
    /// hand is left alone and reported as not live.
    pub fn expire(&mut self, id: NoticeId) -> bool {
        let removed = self.remove(id);
        if removed {
            log::debug!("notice {} expired", id.get());
        }
        removed
    }

    fn remove(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    #[must_use]
    pub const fn ttl_ms(&self) -> u32 {
        self.ttl_ms
    }

    pub const fn begin_loading(&mut self) {
        self.loading += 1;
    }

    pub const fn end_loading(&mut self) {
        self.loading = self.loading.saturating_sub(1);
    }

    /// The indicator stays up until every nested operation has ended.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading > 0
    }

    #[must_use]
    pub const fn loading_depth(&self) -> usize {
        self.loading
    }
}
