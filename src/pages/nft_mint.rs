//! NFT mint page - mint an NFT from a local image and show the collection.

use chrono::Local;
use dioxus::prelude::*;
use testnet_core::{MintDraft, MintedNft, NftMinter};
use testnet_ui::{
    AnimatedGradient, BackgroundOpacity, Button, Elevation, GlassContainer, GradientVariant, Icon,
    IconKind, ProgressBar,
};

use crate::components::{ConnectPrompt, ImagePicker, NavLocation, Navbar};
use crate::context::{use_portal_session, use_session_state};

#[component]
pub fn NftMint() -> Element {
    let session = use_portal_session();
    let state = use_session_state(&session);

    let minter = use_hook(|| NftMinter::new(session.backend().clone(), session.notifier().clone()));
    let mut draft: Signal<MintDraft> = use_signal(MintDraft::default);
    let mut progress = use_signal(|| 0u8);
    let mut minting = use_signal(|| false);
    let mut collection: Signal<Vec<MintedNft>> = use_signal(Vec::new);

    let progress_source = minter.clone();
    use_effect(move || {
        let mut rx = progress_source.subscribe_progress();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let value = *rx.borrow_and_update();
                progress.set(value);
            }
        });
    });

    let on_mint = {
        let minter = minter.clone();
        move |_: ()| {
            if minter.is_running() || !draft.peek().is_ready() {
                return;
            }
            let minter = minter.clone();
            let snapshot = state.peek().clone();
            let submitted = draft.peek().clone();
            minting.set(true);
            spawn(async move {
                match minter.mint(&snapshot, &submitted).await {
                    Ok(nft) => {
                        tracing::info!(id = %nft.id, "NFT added to collection");
                        draft.set(MintDraft::default());
                    }
                    Err(e) => tracing::warn!(error = %e, "NFT mint did not complete"),
                }
                collection.set(minter.collection());
                minting.set(false);
            });
        }
    };

    let current = state();
    let network = current.network;

    if !current.is_connected() {
        return rsx! {
            div { class: "page",
                Navbar { session: session.clone(), current: NavLocation::NftMint }
                ConnectPrompt {
                    session: session.clone(),
                    message: format!("Please connect your wallet to mint NFTs on the Sui {}.", network.label()),
                }
            }
        };
    }

    let ready = draft().is_ready();
    let busy = minting();

    rsx! {
        div { class: "page",
            Navbar { session: session.clone(), current: NavLocation::NftMint }

            div { class: "page-container wide",
                div { class: "page-heading",
                    h1 { class: "page-title", "Mint NFTs on Sui {network.label()}" }
                    p { class: "page-subtitle",
                        "Create and manage unique digital assets on the Sui Network. "
                        "These NFTs are minted on the {network.label()} for testing purposes."
                    }
                }

                div { class: "two-column",
                    GlassContainer { class: "panel panel-gradient".to_string(),
                        AnimatedGradient { class: "panel-backdrop".to_string(), variant: GradientVariant::Purple }

                        div { class: "panel-heading-center",
                            Icon { kind: IconKind::Gem, size: 48, class: "accent".to_string() }
                            h2 { class: "panel-title", "Create New NFT" }
                            p { class: "muted", "Fill out the details below to mint your NFT" }
                        }

                        div { class: "field-stack",
                            div { class: "field",
                                label { r#for: "nft-name", "NFT Name" }
                                input {
                                    id: "nft-name",
                                    class: "glass-input",
                                    placeholder: "Enter a name for your NFT",
                                    value: "{draft().name}",
                                    disabled: busy,
                                    oninput: move |e| draft.write().name = e.value(),
                                }
                            }

                            div { class: "field",
                                label { r#for: "nft-description", "Description" }
                                textarea {
                                    id: "nft-description",
                                    class: "glass-input tall",
                                    placeholder: "Describe your NFT (optional)",
                                    value: "{draft().description}",
                                    disabled: busy,
                                    oninput: move |e| draft.write().description = e.value(),
                                }
                            }

                            div { class: "field",
                                label { "Upload Image" }
                                div { class: if draft().image.is_some() { "image-frame has-image" } else { "image-frame" },
                                    ImagePicker {
                                        image: draft().image,
                                        disabled: busy,
                                        on_change: move |image| draft.write().image = image,
                                    }
                                }
                            }

                            if busy {
                                div { class: "progress-block",
                                    ProgressBar { value: progress() }
                                    div { class: "muted center", "Minting NFT... {progress()}%" }
                                }
                            } else {
                                Button {
                                    class: "btn-block".to_string(),
                                    onclick: on_mint,
                                    disabled: !ready,
                                    "Mint NFT"
                                    Icon { kind: IconKind::ArrowRight, size: 16 }
                                }
                            }

                            p { class: "footnote center", "Gas fees for minting will be deducted from your balance." }
                        }
                    }

                    GlassContainer { class: "panel".to_string(),
                        h2 { class: "panel-title", "Your NFT Collection" }
                        if collection().is_empty() {
                            div { class: "empty-state tall",
                                Icon { kind: IconKind::Gem, size: 48, class: "faint".to_string() }
                                div { "You haven't minted any NFTs yet" }
                                div { class: "muted", "Mint your first NFT to see it here" }
                            }
                        } else {
                            div { class: "nft-grid",
                                for nft in collection() {
                                    NftTile { key: "{nft.id}", nft: nft.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NftTile(nft: MintedNft) -> Element {
    let minted = nft.minted_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string();

    rsx! {
        GlassContainer {
            class: "nft-tile".to_string(),
            elevation: Elevation::Sm,
            background: BackgroundOpacity::Low,
            div { class: "nft-image",
                img { src: "{nft.image.data_url()}", alt: "{nft.name}" }
            }
            div { class: "nft-meta",
                div { class: "strong truncate", "{nft.name}" }
                if !nft.description.is_empty() {
                    div { class: "muted small truncate", "{nft.description}" }
                }
                div { class: "muted small",
                    Icon { kind: IconKind::Check, size: 12, class: "ok".to_string() }
                    "Minted on {minted}"
                }
                div { class: "muted small truncate mono", "ID: {nft.id}" }
            }
        }
    }
}
