//! Contracts page - an example Move module and the list of sample contracts.
//!
//! Deployment is not wired up; the buttons are placeholders for the flow.

use dioxus::prelude::*;
use testnet_core::catalog::{ExampleContract, COUNTER_MODULE, EXAMPLE_CONTRACTS};
use testnet_ui::{
    Button, ButtonSize, ButtonVariant, GlassContainer, GradientVariant, Hero, Icon, IconKind,
};

use crate::components::{NavLocation, Navbar};
use crate::context::use_portal_session;

#[component]
pub fn Contracts() -> Element {
    let session = use_portal_session();

    rsx! {
        div { class: "page",
            Navbar { session: session.clone(), current: NavLocation::Contracts }

            div { class: "page-container wide",
                Hero {
                    title: "Smart Contract Deployment".to_string(),
                    subtitle: "Deploy and interact with Move-based smart contracts on Sui Devnet and Testnet".to_string(),
                    gradient: GradientVariant::Purple,
                    class: "page-hero".to_string(),
                }

                div { class: "two-column",
                    GlassContainer { class: "panel".to_string(),
                        h2 { class: "panel-title with-icon",
                            Icon { kind: IconKind::Code, size: 20, class: "accent-purple".to_string() }
                            "Deploy Contract"
                        }
                        p { class: "muted",
                            "Upload and deploy your Move smart contract to Sui Devnet or Testnet. "
                            "Test your code in a safe environment before going to mainnet."
                        }
                        pre { class: "code-block",
                            code { "{COUNTER_MODULE}" }
                        }
                        div { class: "row-between",
                            Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm,
                                Icon { kind: IconKind::Share, size: 16 }
                                "Import from GitHub"
                            }
                            Button { size: ButtonSize::Sm,
                                "Deploy Contract"
                                Icon { kind: IconKind::ArrowRight, size: 16 }
                            }
                        }
                    }

                    GlassContainer { class: "panel".to_string(),
                        h2 { class: "panel-title with-icon",
                            Icon { kind: IconKind::Github, size: 20, class: "accent-purple".to_string() }
                            "Example Contracts"
                        }
                        p { class: "muted",
                            "Browse and deploy sample contracts to learn Sui Move programming "
                            "or use as a starting point for your own projects."
                        }
                        div { class: "list-stack",
                            for contract in EXAMPLE_CONTRACTS {
                                ContractRow { key: "{contract.name}", contract: contract }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContractRow(contract: ExampleContract) -> Element {
    rsx! {
        div { class: "list-item hoverable",
            div { class: "row-between",
                h3 { class: "item-title", "{contract.name}" }
                span { class: "complexity-badge", "{contract.complexity.label()}" }
            }
            p { class: "muted small", "{contract.description}" }
        }
    }
}
