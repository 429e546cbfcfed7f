//! Wallet Widget Component
//!
//! Connect button while disconnected; address pill with a dropdown once
//! connected. The dropdown shows the balance on the active network and
//! offers network switch, copy address and disconnect.

use dioxus::prelude::*;
use testnet_core::{format_thousands, Notification};
use testnet_ui::{Button, ButtonSize, ButtonVariant, Icon, IconKind};

use crate::context::{portal_config, spawn_session_task, use_session_state, PortalSession};

/// Put `text` on the system clipboard.
fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}

#[component]
pub fn WalletWidget(session: PortalSession) -> Element {
    let state = use_session_state(&session);
    let mut show_dropdown = use_signal(|| false);
    let symbol = portal_config(&session).token_symbol;

    let on_connect = {
        let session = session.clone();
        move |_: ()| {
            let session = session.clone();
            spawn_session_task(async move {
                if let Err(e) = session.connect().await {
                    tracing::debug!(error = %e, "Connect did not complete");
                }
            });
        }
    };

    let on_switch = {
        let session = session.clone();
        move |_: ()| {
            let session = session.clone();
            let target = state.peek().network.toggled();
            show_dropdown.set(false);
            spawn_session_task(async move {
                session.switch_network(target).await;
            });
        }
    };

    let on_copy = {
        let session = session.clone();
        move |_: ()| {
            let Some(address) = state.peek().address.clone() else {
                return;
            };
            match copy_to_clipboard(address.as_str()) {
                Ok(()) => session.notifier().notify(Notification::info(
                    "Address Copied",
                    "Wallet address copied to clipboard",
                )),
                Err(e) => {
                    tracing::warn!(error = %e, "Could not copy address to clipboard");
                    session.notifier().notify(Notification::destructive(
                        "Copy Failed",
                        "Could not access the clipboard.",
                    ));
                }
            }
            show_dropdown.set(false);
        }
    };

    let on_disconnect = {
        let session = session.clone();
        move |_: ()| {
            show_dropdown.set(false);
            session.disconnect();
        }
    };

    let current = state();

    let Some(address) = current.address.clone().filter(|_| current.is_connected()) else {
        let connecting = current.is_connecting();
        return rsx! {
            Button {
                class: "wallet-connect-btn".to_string(),
                onclick: on_connect,
                disabled: connecting,
                Icon { kind: IconKind::Wallet, size: 16 }
                if connecting { "Connecting..." } else { "Connect Wallet" }
            }
        };
    };

    let short = address.short();
    let network = current.network;
    let other = network.toggled();

    rsx! {
        div { class: "wallet-widget",
            Button {
                class: "wallet-pill".to_string(),
                variant: ButtonVariant::Outline,
                onclick: move |_| show_dropdown.set(!show_dropdown()),
                span { class: "wallet-dot" }
                span { class: "wallet-address", "{short}" }
                Icon { kind: IconKind::ChevronDown, size: 14 }
            }

            if show_dropdown() {
                div {
                    class: "wallet-dropdown-backdrop",
                    onclick: move |_| show_dropdown.set(false),
                }
                div { class: "wallet-dropdown",
                    div { class: "wallet-dropdown-header",
                        span { class: "wallet-dropdown-label", "Connected Wallet" }
                        span { class: "wallet-dropdown-address", "{short}" }
                    }

                    div { class: "wallet-dropdown-balance",
                        div { class: "balance-row",
                            span { class: "balance-label", "Balance" }
                            span { class: "network-badge", "{network.label()}" }
                        }
                        div { class: "balance-value",
                            {match current.balance {
                                Some(balance) => format!("{} {}", format_thousands(balance), symbol),
                                None => "Loading...".to_string(),
                            }}
                        }
                    }

                    div { class: "wallet-dropdown-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            onclick: on_switch,
                            Icon { kind: IconKind::RefreshCw, size: 14 }
                            "Switch to {other.label()}"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            onclick: on_copy,
                            Icon { kind: IconKind::Copy, size: 14 }
                            "Copy Address"
                        }
                        Button {
                            class: "wallet-disconnect".to_string(),
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            onclick: on_disconnect,
                            Icon { kind: IconKind::LogOut, size: 14 }
                            "Disconnect"
                        }
                    }
                }
            }
        }
    }
}
