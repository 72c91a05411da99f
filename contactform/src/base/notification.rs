use std::fmt;

pub const MSG_INCOMPLETE: &str = "Please fill in all fields.";
pub const MSG_SENT: &str = "Your message has been sent successfully!";
pub const MSG_REJECTED: &str = "Sorry, failed to send your message.";
pub const MSG_TRANSPORT: &str = "Something went wrong. Try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// User-visible message emitted once per submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    message: &'static str,
}

impl Notification {
    pub fn success(message: &'static str) -> Self {
        Notification {
            kind: NotificationKind::Success,
            message,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Notification {
            kind: NotificationKind::Error,
            message,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
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

/// Writes notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind() {
            NotificationKind::Success => log::info!("{}", notification),
            NotificationKind::Error => log::warn!("{}", notification),
        }
    }
}
