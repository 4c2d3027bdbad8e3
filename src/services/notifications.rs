use std::time::Duration;

/// How long a toast stays on screen unless dismissed.
pub const DEFAULT_DISPLAY: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// One-shot message for the user. Nothing is kept once it has been shown.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
    pub duration: Duration,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            text: text.into(),
            duration: DEFAULT_DISPLAY,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
            duration: DEFAULT_DISPLAY,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}
