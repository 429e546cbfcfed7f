//! Resources page - documentation links, announcements and a quick start.
//!
//! External links open in the system browser.

use dioxus::prelude::*;
use testnet_core::catalog::{
    ResourceLink, Update, INSTALL_CLI_URL, LATEST_UPDATES, QUICK_START, RESOURCE_CARDS,
    TOP_RESOURCES,
};
use testnet_ui::{CardVariant, FeatureCard, GlassContainer, GradientVariant, Hero, Icon, IconKind};

use crate::components::{NavLocation, Navbar};
use crate::context::use_portal_session;

/// Icons for the resource cards, in card order.
const CARD_ICONS: [IconKind; 4] = [
    IconKind::BookOpen,
    IconKind::FileText,
    IconKind::Video,
    IconKind::Users,
];

#[component]
pub fn Resources() -> Element {
    let session = use_portal_session();

    rsx! {
        div { class: "page",
            Navbar { session: session.clone(), current: NavLocation::Resources }

            div { class: "page-container wide",
                Hero {
                    title: "Developer Resources".to_string(),
                    subtitle: "Access documentation, tutorials, and community resources to help you build on Sui Network".to_string(),
                    gradient: GradientVariant::Cyan,
                    class: "page-hero".to_string(),
                }

                div { class: "card-grid four",
                    for (card, icon) in RESOURCE_CARDS.iter().zip(CARD_ICONS) {
                        FeatureCard {
                            key: "{card.title}",
                            title: card.title.to_string(),
                            description: card.description.to_string(),
                            icon: icon,
                            variant: CardVariant::Secondary,
                            href: card.url.to_string(),
                        }
                    }
                }

                div { class: "two-column",
                    GlassContainer { class: "panel".to_string(),
                        h2 { class: "panel-title", "Latest Updates" }
                        div { class: "list-stack",
                            for update in LATEST_UPDATES {
                                UpdateRow { key: "{update.title}", update: update }
                            }
                        }
                    }

                    div { class: "column-stack",
                        GlassContainer { class: "panel".to_string(),
                            h2 { class: "panel-title", "Quick Start" }
                            ol { class: "quick-start",
                                for step in QUICK_START {
                                    li { key: "{step.text}",
                                        "{step.text}"
                                        if let Some(command) = step.command {
                                            " "
                                            code { "{command}" }
                                        }
                                    }
                                }
                            }
                            a {
                                class: "btn btn-primary btn-md link-button",
                                href: INSTALL_CLI_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Install Sui CLI"
                                Icon { kind: IconKind::ExternalLink, size: 16 }
                            }
                        }

                        GlassContainer { class: "panel".to_string(),
                            h2 { class: "panel-title", "Top Resources" }
                            div { class: "list-stack tight",
                                for resource in TOP_RESOURCES {
                                    ResourceRow { key: "{resource.title}", resource: resource }
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
fn UpdateRow(update: Update) -> Element {
    rsx! {
        div { class: "list-item",
            div { class: "row-between",
                h3 { class: "item-title", "{update.title}" }
                span { class: "muted small", "{update.date}" }
            }
            p { class: "muted small", "{update.description}" }
            if let Some(url) = update.url {
                a { class: "read-more", href: url, target: "_blank", rel: "noopener noreferrer",
                    "Read more"
                    Icon { kind: IconKind::ExternalLink, size: 12 }
                }
            }
        }
    }
}

#[component]
fn ResourceRow(resource: ResourceLink) -> Element {
    rsx! {
        a {
            class: "list-item hoverable resource-link",
            href: resource.url,
            target: "_blank",
            rel: "noopener noreferrer",
            h3 { class: "item-title",
                "{resource.title}"
                Icon { kind: IconKind::ExternalLink, size: 12, class: "faint".to_string() }
            }
            p { class: "muted small", "{resource.description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_card_has_an_icon() {
        assert_eq!(CARD_ICONS.len(), RESOURCE_CARDS.len());
    }
}
