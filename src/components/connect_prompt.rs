//! Connect Prompt Component
//!
//! Stands in for a wallet-gated page while no wallet is connected.

use dioxus::prelude::*;
use testnet_ui::{Button, GlassContainer, Icon, IconKind};

use crate::context::{spawn_session_task, use_session_state, PortalSession};

#[derive(Props, Clone, PartialEq)]
pub struct ConnectPromptProps {
    pub session: PortalSession,
    /// Page-specific reason to connect
    pub message: String,
}

#[component]
pub fn ConnectPrompt(props: ConnectPromptProps) -> Element {
    let state = use_session_state(&props.session);
    let connecting = state().is_connecting();

    let session = props.session.clone();
    let on_connect = move |_: ()| {
        let session = session.clone();
        spawn_session_task(async move {
            if let Err(e) = session.connect().await {
                tracing::debug!(error = %e, "Connect did not complete");
            }
        });
    };

    rsx! {
        div { class: "page-container connect-prompt",
            GlassContainer { class: "connect-prompt-card".to_string(),
                div { class: "connect-prompt-icon",
                    Icon { kind: IconKind::Wallet, size: 48 }
                }
                h1 { class: "connect-prompt-title", "Connect Your Wallet" }
                p { class: "connect-prompt-message", "{props.message}" }
                Button {
                    class: "btn-block".to_string(),
                    onclick: on_connect,
                    disabled: connecting,
                    if connecting { "Connecting..." } else { "Connect Wallet" }
                    Icon { kind: IconKind::ArrowRight, size: 16 }
                }
            }
        }
    }
}
