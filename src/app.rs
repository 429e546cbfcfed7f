use dioxus::prelude::*;

use crate::components::Toaster;
use crate::context::{build_session, launch_settings};
use crate::pages::{Contracts, Dashboard, Faucet, Landing, NftMint, Resources};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the feature overview
/// - `/dashboard` - Wallet details, recent activity and network stats
/// - `/faucet` - Request test tokens
/// - `/nft-mint` - Mint NFTs from a local image
/// - `/contracts` - Example Move contracts
/// - `/resources` - Developer documentation and links
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/faucet")]
    Faucet {},
    #[route("/nft-mint")]
    NftMint {},
    #[route("/contracts")]
    Contracts {},
    #[route("/resources")]
    Resources {},
}

/// Root application component.
///
/// Builds the window's wallet session, provides it to the route components
/// and renders global styles, routing and toasts.
#[component]
pub fn App() -> Element {
    let session = use_hook(|| build_session(&launch_settings()));
    use_context_provider(|| session.clone());

    // A restored session comes back without a balance.
    let restored = session.clone();
    use_effect(move || {
        let session = restored.clone();
        spawn(async move {
            if let Err(e) = session.resume().await {
                tracing::warn!(error = %e, "Could not refresh balance of restored session");
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        Toaster { session: session.clone() }
    }
}
