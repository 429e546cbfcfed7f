//! Navigation Bar Component
//!
//! Fixed header with the brand mark, route links and the wallet widget.
//! Narrow windows collapse the links into a toggleable menu.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use testnet_ui::{
    BackgroundOpacity, BlurIntensity, BorderStyle, Button, ButtonSize, ButtonVariant, Elevation,
    GlassContainer, Icon, IconKind, Rounded,
};

use crate::app::Route;
use crate::components::WalletWidget;
use crate::context::PortalSession;

/// Scroll offset (px) past which the bar tightens up.
const SCROLL_THRESHOLD: f64 = 10.0;

/// Owner ids for the window scroll handler, one per mounted navbar.
static NEXT_SCROLL_LISTENER: AtomicU64 = AtomicU64::new(1);

/// Install navbar `owner`'s scroll handler, replacing any earlier one.
fn attach_scroll_script(owner: u64) -> String {
    format!(
        r#"
        if (window.__portalScroll) {{
            window.removeEventListener("scroll", window.__portalScroll);
        }}
        const report = () => dioxus.send(window.scrollY);
        report.owner = {owner};
        window.__portalScroll = report;
        window.addEventListener("scroll", report, {{ passive: true }});
        report();
        await new Promise(() => {{}});
        "#
    )
}

/// Remove the scroll handler if navbar `owner` still holds it.
fn detach_scroll_script(owner: u64) -> String {
    format!(
        r#"
        if (window.__portalScroll && window.__portalScroll.owner === {owner}) {{
            window.removeEventListener("scroll", window.__portalScroll);
            window.__portalScroll = undefined;
        }}
        "#
    )
}

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Dashboard,
    Faucet,
    NftMint,
    Contracts,
    Resources,
}

impl NavLocation {
    pub const ALL: [NavLocation; 6] = [
        NavLocation::Home,
        NavLocation::Dashboard,
        NavLocation::Faucet,
        NavLocation::NftMint,
        NavLocation::Contracts,
        NavLocation::Resources,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Dashboard => "Dashboard",
            NavLocation::Faucet => "Faucet",
            NavLocation::NftMint => "Mint NFT",
            NavLocation::Contracts => "Contracts",
            NavLocation::Resources => "Resources",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Landing {},
            NavLocation::Dashboard => Route::Dashboard {},
            NavLocation::Faucet => Route::Faucet {},
            NavLocation::NftMint => Route::NftMint {},
            NavLocation::Contracts => Route::Contracts {},
            NavLocation::Resources => Route::Resources {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    /// The window's wallet session
    pub session: PortalSession,
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation bar component
///
/// - Left: "S" brand mark and title
/// - Center: route links, current one highlighted
/// - Right: wallet widget and, on narrow windows, the menu toggle
#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    let mut scrolled = use_signal(|| false);
    let mut mobile_menu_open = use_signal(|| false);

    // Follow the page scroll offset from the webview. Every page mounts its
    // own navbar, so the window holds one named handler that the outgoing bar
    // removes only if it still owns it.
    let listener = use_hook(|| NEXT_SCROLL_LISTENER.fetch_add(1, Ordering::Relaxed));

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(&attach_scroll_script(listener));
            while let Ok(offset) = eval.recv::<f64>().await {
                let is_scrolled = offset > SCROLL_THRESHOLD;
                if *scrolled.peek() != is_scrolled {
                    scrolled.set(is_scrolled);
                }
            }
        });
    });

    use_drop(move || {
        let _ = document::eval(&detach_scroll_script(listener));
    });

    let current = props.current;

    rsx! {
        header { class: if scrolled() { "navbar scrolled" } else { "navbar" },
            GlassContainer {
                class: "navbar-shell".to_string(),
                blur: BlurIntensity::None,
                border: BorderStyle::None,
                background: if scrolled() { BackgroundOpacity::High } else { BackgroundOpacity::Low },
                elevation: if scrolled() { Elevation::Md } else { Elevation::Sm },
                rounded: Rounded::Lg,

                div { class: "navbar-inner",
                    div { class: "navbar-left",
                        Link { to: Route::Landing {}, class: "navbar-brand",
                            div { class: "brand-mark", "S" }
                            span { class: "brand-name", "Sui Testnet" }
                        }

                        nav { class: "navbar-links",
                            for location in NavLocation::ALL {
                                Link {
                                    key: "{location.display_name()}",
                                    to: location.route(),
                                    class: if location == current { "nav-link active" } else { "nav-link" },
                                    "{location.display_name()}"
                                }
                            }
                        }
                    }

                    div { class: "navbar-right",
                        WalletWidget { session: props.session.clone() }

                        Button {
                            class: "navbar-menu-toggle".to_string(),
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            onclick: move |_| mobile_menu_open.set(!mobile_menu_open()),
                            if mobile_menu_open() {
                                Icon { kind: IconKind::X, size: 22 }
                            } else {
                                Icon { kind: IconKind::Menu, size: 22 }
                            }
                        }
                    }
                }

                if mobile_menu_open() {
                    nav { class: "navbar-mobile-links",
                        for location in NavLocation::ALL {
                            Link {
                                key: "{location.display_name()}",
                                to: location.route(),
                                class: if location == current { "nav-link active" } else { "nav-link" },
                                onclick: move |_| mobile_menu_open.set(false),
                                "{location.display_name()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_labels_in_display_order() {
        let labels: Vec<_> = NavLocation::ALL.iter().map(|l| l.display_name()).collect();
        assert_eq!(
            labels,
            ["Home", "Dashboard", "Faucet", "Mint NFT", "Contracts", "Resources"]
        );
    }

    #[test]
    fn scroll_handler_replaces_earlier_one() {
        let script = attach_scroll_script(7);
        let removed = script.find("removeEventListener").unwrap();
        let added = script.find("addEventListener(\"scroll\", report").unwrap();
        assert!(removed < added);
        assert!(script.contains("report.owner = 7;"));
    }

    #[test]
    fn scroll_handler_removed_only_by_its_owner() {
        let script = detach_scroll_script(7);
        assert!(script.contains("window.__portalScroll.owner === 7"));
        assert!(script.contains("removeEventListener(\"scroll\", window.__portalScroll)"));
    }

    #[test]
    fn nav_routes_match_paths() {
        let paths: Vec<_> = NavLocation::ALL.iter().map(|l| l.route().to_string()).collect();
        assert_eq!(
            paths,
            ["/", "/dashboard", "/faucet", "/nft-mint", "/contracts", "/resources"]
        );
    }
}
