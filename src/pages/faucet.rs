//! Faucet page - request test tokens for the connected wallet.
//!
//! The faucet workflow and its history live as long as the page does;
//! leaving the page cancels a running request.

use chrono::{DateTime, Local, Utc};
use dioxus::prelude::*;
use testnet_core::{format_thousands, Faucet as FaucetWorkflow, FaucetRecord, RequestStatus};
use testnet_ui::{
    AnimatedGradient, BackgroundOpacity, BlurIntensity, Button, Elevation, GlassContainer,
    GradientVariant, Icon, IconKind, ProgressBar,
};

use crate::components::{ConnectPrompt, NavLocation, Navbar};
use crate::context::{portal_config, use_portal_session, use_session_state};

fn format_local(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[component]
pub fn Faucet() -> Element {
    let session = use_portal_session();
    let state = use_session_state(&session);
    let config = portal_config(&session);

    let faucet = use_hook(|| {
        FaucetWorkflow::new(
            session.backend().clone(),
            session.notifier().clone(),
            config.faucet_amount,
            config.token_symbol.clone(),
        )
    });
    let mut progress = use_signal(|| 0u8);
    let mut requesting = use_signal(|| false);
    let mut history: Signal<Vec<FaucetRecord>> = use_signal(Vec::new);
    let mut last_requested: Signal<Option<DateTime<Utc>>> = use_signal(|| None);

    let progress_source = faucet.clone();
    use_effect(move || {
        let mut rx = progress_source.subscribe_progress();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let value = *rx.borrow_and_update();
                progress.set(value);
            }
        });
    });

    let on_request = {
        let faucet = faucet.clone();
        move |_: ()| {
            if faucet.is_running() {
                return;
            }
            let faucet = faucet.clone();
            let snapshot = state.peek().clone();
            requesting.set(true);
            spawn(async move {
                if let Err(e) = faucet.request_tokens(&snapshot).await {
                    tracing::debug!(error = %e, "Faucet request did not complete");
                }
                history.set(faucet.history());
                last_requested.set(faucet.last_requested());
                requesting.set(false);
            });
        }
    };

    let current = state();
    let network = current.network;

    if !current.is_connected() {
        return rsx! {
            div { class: "page",
                Navbar { session: session.clone(), current: NavLocation::Faucet }
                ConnectPrompt {
                    session: session.clone(),
                    message: format!(
                        "Please connect your wallet to access the faucet and receive {} tokens.",
                        config.token_symbol
                    ),
                }
            }
        };
    }

    let symbol = config.token_symbol.clone();
    let amount = faucet.amount();
    let address = current.address.map(|a| a.to_string()).unwrap_or_default();
    let balance = current
        .balance
        .map(format_thousands)
        .unwrap_or_else(|| "Loading...".to_string());

    rsx! {
        div { class: "page",
            Navbar { session: session.clone(), current: NavLocation::Faucet }

            div { class: "page-container narrow",
                div { class: "page-heading",
                    h1 { class: "page-title", "Sui Network Faucet" }
                    p { class: "page-subtitle",
                        "Request {symbol} tokens for testing and development on the {network.label()}. "
                        "These tokens have no real-world value and are only for testing purposes."
                    }
                }

                div { class: "two-column",
                    GlassContainer { class: "panel order-2".to_string(),
                        h2 { class: "panel-title", "Request History" }
                        if history().is_empty() {
                            div { class: "empty-state", "No request history yet" }
                        } else {
                            div { class: "history-list",
                                for record in history() {
                                    HistoryRow { key: "{record.id}", record: record.clone(), symbol: symbol.clone() }
                                }
                            }
                        }
                    }

                    GlassContainer { class: "panel panel-gradient order-1".to_string(),
                        AnimatedGradient { class: "panel-backdrop".to_string(), variant: GradientVariant::Cyan }

                        div { class: "panel-heading-center",
                            Icon { kind: IconKind::Droplet, size: 48, class: "accent".to_string() }
                            h2 { class: "panel-title", "Request Tokens" }
                            p { class: "muted",
                                "Current Network: "
                                span { class: "strong", "{network.label()}" }
                            }
                        }

                        div { class: "field-stack",
                            InfoRow { label: "Wallet Address".to_string(), value: address }
                            InfoRow { label: "Current Balance".to_string(), value: format!("{} {}", balance, symbol) }
                            InfoRow { label: "Request Amount".to_string(), value: format!("{} {}", amount, symbol) }

                            if let Some(time) = last_requested() {
                                div { class: "muted center", "Last requested: {format_local(time)}" }
                            }

                            if requesting() {
                                div { class: "progress-block",
                                    ProgressBar { value: progress() }
                                    div { class: "muted center", "Processing request... {progress()}%" }
                                }
                            } else {
                                Button {
                                    class: "btn-block".to_string(),
                                    onclick: on_request,
                                    disabled: requesting(),
                                    "Request {amount} {symbol} Tokens"
                                    Icon { kind: IconKind::ArrowRight, size: 16 }
                                }
                            }

                            p { class: "footnote center", "Note: You can request tokens once every 24 hours." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InfoRow(label: String, value: String) -> Element {
    rsx! {
        GlassContainer {
            class: "info-row".to_string(),
            blur: BlurIntensity::None,
            elevation: Elevation::Sm,
            span { class: "info-label", "{label}" }
            span { class: "info-value truncate", "{value}" }
        }
    }
}

#[component]
fn HistoryRow(record: FaucetRecord, symbol: String) -> Element {
    rsx! {
        GlassContainer {
            class: "history-row".to_string(),
            blur: BlurIntensity::None,
            background: BackgroundOpacity::Low,
            elevation: Elevation::None,
            div {
                div { class: "strong", "{record.amount} {symbol}" }
                div { class: "activity-time",
                    Icon { kind: IconKind::Clock, size: 12 }
                    "{format_local(record.requested_at)}"
                }
            }
            {match record.status {
                RequestStatus::Completed => rsx! {
                    span { class: "status-completed",
                        Icon { kind: IconKind::CheckCircle, size: 16 }
                        "Completed"
                    }
                },
                RequestStatus::Failed => rsx! {
                    span { class: "status-failed",
                        Icon { kind: IconKind::AlertCircle, size: 16 }
                        "Failed"
                    }
                },
            }}
        }
    }
}
