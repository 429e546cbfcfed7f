//! Toast Notifications
//!
//! Renders notifications raised by the session and page workflows as
//! stacked toasts in the corner of the window. Each one dismisses itself
//! after [`TOAST_LIFETIME`] or on click.

use std::time::Duration;

use dioxus::prelude::*;
use testnet_core::Notification;
use testnet_ui::{Icon, IconKind};
use tokio::sync::broadcast::error::RecvError;

use crate::context::PortalSession;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Most toasts shown at once; older ones are dropped first.
const MAX_VISIBLE: usize = 3;

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
}

/// Push `toast`, keeping only the newest [`MAX_VISIBLE`].
fn push_bounded(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > MAX_VISIBLE {
        let excess = toasts.len() - MAX_VISIBLE;
        toasts.drain(..excess);
    }
}

#[component]
pub fn Toaster(session: PortalSession) -> Element {
    let mut toasts: Signal<Vec<Toast>> = use_signal(Vec::new);

    use_effect(move || {
        let mut rx = session.notifier().subscribe();
        spawn(async move {
            let mut next_id = 0u64;
            loop {
                match rx.recv().await {
                    Ok(notification) => {
                        next_id += 1;
                        let id = next_id;
                        push_bounded(&mut toasts.write(), Toast { id, notification });

                        spawn(async move {
                            tokio::time::sleep(TOAST_LIFETIME).await;
                            toasts.write().retain(|t| t.id != id);
                        });
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "Toast listener fell behind");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    });

    rsx! {
        div { class: "toast-viewport",
            for toast in toasts() {
                div {
                    key: "{toast.id}",
                    class: if toast.notification.is_destructive() { "toast toast-destructive" } else { "toast" },
                    div { class: "toast-body",
                        div { class: "toast-title", "{toast.notification.title}" }
                        div { class: "toast-description", "{toast.notification.description}" }
                    }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        onclick: move |_| toasts.write().retain(|t| t.id != toast.id),
                        Icon { kind: IconKind::X, size: 14 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            notification: Notification::info("t", "d"),
        }
    }

    #[test]
    fn oldest_toasts_drop_off() {
        let mut toasts = Vec::new();
        for id in 1..=5 {
            push_bounded(&mut toasts, toast(id));
        }
        let ids: Vec<_> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, [3, 4, 5]);
    }
}
