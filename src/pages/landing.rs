//! Landing page - Entry point to the Testnet Portal.
//!
//! Hero, platform feature cards, a call to action and the footer.

use dioxus::prelude::*;
use testnet_core::catalog::FEATURES;
use testnet_ui::{
    BackgroundOpacity, Button, ButtonSize, ButtonVariant, CardVariant, Elevation, FeatureCard,
    GlassContainer, Hero, HeroSize, Icon, IconKind,
};

use crate::app::Route;
use crate::components::{NavLocation, Navbar};
use crate::context::{spawn_session_task, use_portal_session, use_session_state};

/// Icon and target page for each landing feature, in `FEATURES` order.
const FEATURE_LINKS: [(IconKind, NavLocation); 4] = [
    (IconKind::Wallet, NavLocation::Dashboard),
    (IconKind::Coins, NavLocation::Faucet),
    (IconKind::Gem, NavLocation::NftMint),
    (IconKind::Code, NavLocation::Contracts),
];

const STACK_ITEMS: [(&str, &str); 4] = [
    ("dot-green", "Wallet Integration"),
    ("dot-blue", "Move Smart Contracts"),
    ("dot-purple", "NFT Standard Support"),
    ("dot-yellow", "Transaction Explorer"),
];

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let session = use_portal_session();
    let state = use_session_state(&session);

    let connected = state().is_connected();
    let connecting = state().is_connecting();

    // Connected users jump to the dashboard; everyone else connects in place.
    let primary_action = {
        let session = session.clone();
        move |_: ()| {
            if state.peek().is_connected() {
                navigator.push(Route::Dashboard {});
                return;
            }
            let session = session.clone();
            spawn_session_task(async move {
                if let Err(e) = session.connect().await {
                    tracing::debug!(error = %e, "Connect from landing did not complete");
                }
            });
        }
    };

    rsx! {
        div { class: "page landing",
            div { class: "landing-glow landing-glow-blue" }
            div { class: "landing-glow landing-glow-purple" }
            div { class: "landing-glow landing-glow-cyan" }

            Navbar { session: session.clone(), current: NavLocation::Home }

            main { class: "page-container landing-main",
                Hero {
                    title: "Sui Network".to_string(),
                    highlight: "Testnet Platform".to_string(),
                    subtitle: "Develop and test on Sui Network's testnet with an intuitive platform for wallet connection, faucet access, NFT minting, and smart contract deployment.".to_string(),
                    size: HeroSize::Lg,
                    has_background: false,

                    div { class: "hero-buttons",
                        Button {
                            size: ButtonSize::Lg,
                            disabled: connecting,
                            onclick: primary_action,
                            if connected {
                                "Go to Dashboard"
                            } else if connecting {
                                "Connecting..."
                            } else {
                                "Connect Wallet"
                            }
                            Icon { kind: IconKind::ArrowRight, size: 16 }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Lg,
                            onclick: move |_| {
                                navigator.push(Route::Resources {});
                            },
                            "Learn More"
                        }
                    }
                }

                section { class: "landing-section",
                    div { class: "section-heading",
                        h2 { class: "section-title", "Platform Features" }
                        p { class: "section-subtitle",
                            "Everything you need to develop and test your applications on Sui Network's testnet and devnet environments."
                        }
                    }

                    div { class: "feature-grid",
                        for (index, (feature, (icon, target))) in FEATURES.iter().zip(FEATURE_LINKS).enumerate() {
                            FeatureCard {
                                key: "{feature.title}",
                                title: feature.title.to_string(),
                                description: feature.description.to_string(),
                                icon: icon,
                                variant: CardVariant::Primary,
                                class: if index % 2 == 0 { "lift fade-in-1".to_string() } else { "lift fade-in-2".to_string() },
                                onclick: move |_| {
                                    navigator.push(target.route());
                                },
                            }
                        }
                    }
                }

                section { class: "landing-section",
                    GlassContainer { class: "cta-panel".to_string(),
                        div { class: "cta-layout",
                            div { class: "cta-copy",
                                h2 { class: "cta-title", "Ready to Build on Sui Network?" }
                                p { class: "cta-text",
                                    "Get started with our comprehensive tools and resources designed to make developing on Sui Network simple and efficient."
                                }
                                Button {
                                    onclick: move |_| {
                                        navigator.push(Route::Resources {});
                                    },
                                    "Explore Resources"
                                    Icon { kind: IconKind::ArrowRight, size: 16 }
                                }
                            }

                            div { class: "cta-aside",
                                GlassContainer {
                                    class: "stack-card float".to_string(),
                                    background: BackgroundOpacity::High,
                                    elevation: Elevation::Lg,
                                    div { class: "stack-icon",
                                        Icon { kind: IconKind::Layers, size: 40 }
                                    }
                                    h3 { class: "stack-title", "Sui Devnet Stack" }
                                    ul { class: "stack-list",
                                        for (dot, label) in STACK_ITEMS {
                                            li { key: "{label}",
                                                span { class: "stack-dot {dot}" }
                                                "{label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "page-container landing-footer",
                div { class: "footer-inner",
                    div { class: "footer-brand",
                        div { class: "brand-mark brand-mark-sm", "S" }
                        span { class: "brand-name", "Sui Testnet" }
                    }
                    div { class: "footer-note",
                        "Designed for Sui Network developers and users. Not affiliated with Sui Foundation."
                    }
                }
            }
        }
    }
}
