//! Flash message model shared by the DOM renderer and the fetch pipeline.

use crate::core::debounce::Scheduler;

/// Visual category of a flash message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashCategory {
    /// Neutral information.
    #[default]
    Info,
    /// Completed action.
    Success,
    /// Something needs attention.
    Warning,
    /// Destructive or failed action (Bootstrap naming).
    Danger,
    /// Failed request or operation.
    Error,
}

impl FlashCategory {
    /// Parse a category label; unknown labels fall back to [`FlashCategory::Info`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Category label as used in class names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Error => "error",
        }
    }
}

/// A single transient notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    /// Text shown to the user, rendered as plain text.
    pub text: String,
    /// Visual category.
    pub category: FlashCategory,
    /// Milliseconds before the notice removes itself.
    pub timeout_ms: u32,
}

impl FlashMessage {
    /// Default lifetime of a notice.
    pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

    /// Informational notice with the default lifetime.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: FlashCategory::Info,
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
        }
    }

    /// Error notice with the default lifetime.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text).with_category(FlashCategory::Error)
    }

    /// Override the category.
    #[must_use]
    pub const fn with_category(mut self, category: FlashCategory) -> Self {
        self.category = category;
        self
    }

    /// Override the lifetime.
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Classes applied to the notice element.
    #[must_use]
    pub fn class_names(&self) -> String {
        format!(
            "alert alert-{} alert-dismissible alert-floating fade show",
            self.category.label()
        )
    }
}

/// Surface that can display and later drop a notice.
pub trait NoticeHost {
    /// Handle to a displayed notice.
    type Notice: 'static;

    /// Display `message`; `None` when the surface could not take it.
    fn insert(&self, message: &FlashMessage) -> Option<Self::Notice>;

    /// Take a notice down. Removing one that is already gone is a no-op.
    fn remove(notice: &Self::Notice);
}

/// Display `message` on `host` and schedule its removal after `timeout_ms`.
pub fn post_notice<H, S>(host: &H, scheduler: &S, message: &FlashMessage)
where
    H: NoticeHost,
    S: Scheduler,
{
    let Some(notice) = host.insert(message) else {
        return;
    };
    let handle = scheduler.schedule(message.timeout_ms, Box::new(move || H::remove(&notice)));
    scheduler.detach(handle);
}
