//! User-facing notifications.
//!
//! The session and the workflows announce outcomes through a [`Notifier`].
//! The desktop app renders them as toasts; the CLI prints them.

use tokio::sync::broadcast;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A transient message for the user. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// Fan-out channel for notifications.
///
/// Cloning yields another handle onto the same channel. Sending with no
/// subscribers is not an error; the message is simply dropped.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    const CAPACITY: usize = 64;

    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(Self::CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn notify(&self, notification: Notification) {
        tracing::info!(
            title = %notification.title,
            destructive = notification.is_destructive(),
            "{}",
            notification.description
        );
        let _ = self.tx.send(notification);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_notifications() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.notify(Notification::info("Hello", "world"));

        let got = rx.recv().await.unwrap();
        assert_eq!(got.title, "Hello");
        assert_eq!(got.severity, Severity::Default);
    }

    #[test]
    fn notify_without_subscribers_is_fine() {
        let notifier = Notifier::new();
        notifier.notify(Notification::destructive("Oops", "nobody listening"));
    }
}
