//! Dashboard page - wallet details, recent activity and network stats.

use std::sync::Arc;

use dioxus::prelude::*;
use testnet_core::{format_thousands, Activity, NetworkStats, TokenCounter, WalletBackend};
use testnet_ui::{
    BackgroundOpacity, BlurIntensity, BorderStyle, Button, ButtonSize, ButtonVariant, CardLayout,
    CardVariant, Elevation, FeatureCard, GlassContainer, Icon, IconKind, ProgressBar,
};

use crate::app::Route;
use crate::components::{ConnectPrompt, NavLocation, Navbar};
use crate::context::{portal_config, use_portal_session, use_session_state};

#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();
    let session = use_portal_session();
    let state = use_session_state(&session);
    let symbol = portal_config(&session).token_symbol;

    let mut activity: Signal<Option<Vec<Activity>>> = use_signal(|| None);
    let mut stats: Signal<Option<NetworkStats>> = use_signal(|| None);
    let mut refreshing = use_signal(|| false);
    let loads = use_hook(|| Arc::new(TokenCounter::new()));

    // Only reload the feed when the wallet or network changes, not on
    // every balance update.
    let identity = use_memo(move || state().connected_identity());

    let backend = session.backend().clone();
    use_effect(move || {
        let Some((address, network)) = identity() else {
            activity.set(None);
            stats.set(None);
            return;
        };

        let token = loads.issue();
        let loads = loads.clone();
        let backend = backend.clone();
        activity.set(None);
        spawn(async move {
            let (feed, network_stats) = tokio::join!(
                backend.recent_activity(&address, network),
                backend.network_stats(network),
            );
            if !loads.is_latest(token) {
                tracing::debug!(%network, "Discarding stale dashboard data");
                return;
            }
            match feed {
                Ok(feed) => activity.set(Some(feed)),
                Err(e) => {
                    tracing::warn!(error = %e, "Could not load recent activity");
                    activity.set(Some(Vec::new()));
                }
            }
            match network_stats {
                Ok(network_stats) => stats.set(Some(network_stats)),
                Err(e) => tracing::warn!(error = %e, "Could not load network stats"),
            }
        });
    });

    let on_refresh = {
        let session = session.clone();
        move |_: ()| {
            if refreshing() {
                return;
            }
            refreshing.set(true);
            let session = session.clone();
            spawn(async move {
                if let Err(e) = session.refresh_balance().await {
                    tracing::warn!(error = %e, "Balance refresh failed");
                }
                refreshing.set(false);
            });
        }
    };

    let current = state();
    let network = current.network;

    if !current.is_connected() {
        return rsx! {
            div { class: "page",
                Navbar { session: session.clone(), current: NavLocation::Dashboard }
                ConnectPrompt {
                    session: session.clone(),
                    message: format!(
                        "Please connect your wallet to access the dashboard and interact with the Sui {}.",
                        network.label()
                    ),
                }
            }
        };
    }

    let address = current.address.map(|a| a.to_string()).unwrap_or_default();
    let balance = current
        .balance
        .map(format_thousands)
        .unwrap_or_else(|| "Loading...".to_string());

    rsx! {
        div { class: "page",
            Navbar { session: session.clone(), current: NavLocation::Dashboard }

            div { class: "page-container dashboard-grid",
                // Left column: wallet details and shortcuts
                div { class: "dashboard-side",
                    GlassContainer { class: "panel".to_string(),
                        div { class: "panel-header",
                            h2 { class: "panel-title", "Wallet Details" }
                            Button {
                                class: if refreshing() { "spin".to_string() } else { String::new() },
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Icon,
                                disabled: refreshing(),
                                onclick: on_refresh,
                                Icon { kind: IconKind::RefreshCw, size: 16 }
                            }
                        }

                        div { class: "detail-list",
                            div { class: "detail",
                                div { class: "detail-label", "Address" }
                                div { class: "detail-value mono truncate", "{address}" }
                            }
                            div { class: "detail",
                                div { class: "detail-label", "Network" }
                                span { class: "network-badge", "{network.label()}" }
                            }
                            div { class: "detail",
                                div { class: "detail-label", "Balance" }
                                div { class: "balance-large",
                                    "{balance}"
                                    span { class: "balance-symbol", "{symbol}" }
                                }
                            }
                        }

                        Button {
                            class: "btn-block".to_string(),
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                navigator.push(Route::Faucet {});
                            },
                            Icon { kind: IconKind::Coins, size: 16 }
                            "Get Tokens from Faucet"
                        }
                    }

                    div { class: "shortcut-grid",
                        FeatureCard {
                            title: "Mint NFTs".to_string(),
                            description: "Create and manage non-fungible tokens".to_string(),
                            icon: IconKind::Gem,
                            variant: CardVariant::Primary,
                            layout: CardLayout::IconLeft,
                            onclick: move |_| {
                                navigator.push(Route::NftMint {});
                            },
                        }
                        FeatureCard {
                            title: "Deploy Contracts".to_string(),
                            description: "Deploy and interact with smart contracts".to_string(),
                            icon: IconKind::Code,
                            variant: CardVariant::Primary,
                            layout: CardLayout::IconLeft,
                            onclick: move |_| {
                                navigator.push(Route::Contracts {});
                            },
                        }
                    }
                }

                // Main column: activity feed and network stats
                div { class: "dashboard-main",
                    GlassContainer { class: "panel".to_string(),
                        h2 { class: "panel-title", "Recent Activity" }

                        {match activity() {
                            None => rsx! {
                                div { class: "skeleton-list",
                                    for i in 0..3 {
                                        div { key: "{i}", class: "skeleton-row",
                                            div { class: "skeleton-line wide" }
                                            div { class: "skeleton-line narrow" }
                                        }
                                    }
                                }
                            },
                            Some(feed) if feed.is_empty() => rsx! {
                                div { class: "empty-state", "No recent activity found" }
                            },
                            Some(feed) => rsx! {
                                div { class: "activity-list",
                                    for tx in feed {
                                        ActivityRow { key: "{tx.id}", tx: tx.clone(), symbol: symbol.clone() }
                                    }
                                }
                            },
                        }}

                        div { class: "panel-footer",
                            Button {
                                variant: ButtonVariant::Link,
                                "View All Transactions"
                                Icon { kind: IconKind::ExternalLink, size: 12 }
                            }
                        }
                    }

                    GlassContainer { class: "panel".to_string(),
                        h2 { class: "panel-title", "Network Stats" }

                        if let Some(stats) = stats() {
                            div { class: "stat-list",
                                div { class: "stat",
                                    div { class: "stat-row",
                                        span { class: "stat-label", "Gas Usage" }
                                        span { class: "stat-value", "{stats.gas_usage_percent}%" }
                                    }
                                    ProgressBar { value: stats.gas_usage_percent }
                                }
                                div { class: "stat",
                                    div { class: "stat-row",
                                        span { class: "stat-label", "{network.label()} Block Height" }
                                        span { class: "stat-value", "{format_thousands(stats.block_height)}" }
                                    }
                                }
                                div { class: "stat",
                                    div { class: "stat-row",
                                        span { class: "stat-label", "{network.label()} Network Status" }
                                        if stats.operational {
                                            span { class: "status-ok",
                                                span { class: "status-dot" }
                                                "Operational"
                                            }
                                        } else {
                                            span { class: "status-degraded", "Degraded" }
                                        }
                                    }
                                }
                            }
                        } else {
                            div { class: "skeleton-line wide" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ActivityRow(tx: Activity, symbol: String) -> Element {
    let amount_class = if tx.is_debit() { "amount debit" } else { "amount credit" };
    let when = tx
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M")
        .to_string();

    rsx! {
        GlassContainer {
            class: "activity-row".to_string(),
            blur: BlurIntensity::None,
            background: BackgroundOpacity::None,
            border: BorderStyle::Light,
            elevation: Elevation::None,
            div { class: "activity-info",
                div { class: "activity-kind", "{tx.kind.label()}" }
                div { class: "activity-time",
                    Icon { kind: IconKind::Clock, size: 12 }
                    "{when}"
                }
            }
            div { class: "activity-amount",
                div { class: "{amount_class}", "{tx.amount} {symbol}" }
                span { class: "status-pill", "{tx.status}" }
            }
        }
    }
}
