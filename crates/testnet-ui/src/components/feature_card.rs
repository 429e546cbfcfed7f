//! Feature card
//!
//! Icon, title and short description on a glass panel. Becomes clickable
//! when given an `onclick` handler or an external `href`.

use dioxus::prelude::*;

use super::{class_list, BackgroundOpacity, Elevation, GlassContainer, Icon, IconKind};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardLayout {
    /// Centered icon above the text
    #[default]
    Default,
    /// Like `Default` with tighter spacing
    Compact,
    /// Icon beside the text
    IconLeft,
}

impl CardLayout {
    pub fn class(&self) -> &'static str {
        match self {
            CardLayout::Default => "card-layout-default",
            CardLayout::Compact => "card-layout-compact",
            CardLayout::IconLeft => "card-layout-icon-left",
        }
    }
}

/// Accent colour on hover and behind the icon
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Primary,
    Secondary,
}

impl CardVariant {
    pub fn class(&self) -> &'static str {
        match self {
            CardVariant::Default => "card-default",
            CardVariant::Primary => "card-primary",
            CardVariant::Secondary => "card-secondary",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FeatureCardProps {
    pub title: String,
    pub description: String,
    pub icon: IconKind,
    #[props(default)]
    pub layout: CardLayout,
    #[props(default)]
    pub variant: CardVariant,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// External link, opened in the system browser
    #[props(default)]
    pub href: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn FeatureCard(props: FeatureCardProps) -> Element {
    let onclick = props.onclick;
    let clickable = onclick.is_some() || props.href.is_some();
    let full_class = class_list(&[
        "feature-card",
        props.layout.class(),
        props.variant.class(),
        if clickable { "clickable" } else { "" },
        props.class.as_deref().unwrap_or(""),
    ]);

    let card = rsx! {
        GlassContainer {
            class: full_class,
            elevation: Elevation::Sm,
            background: BackgroundOpacity::Low,
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            div { class: "feature-icon",
                Icon { kind: props.icon, size: 20 }
            }
            div { class: "feature-content",
                h3 { class: "feature-title", "{props.title}" }
                p { class: "feature-description", "{props.description}" }
            }
        }
    };

    match &props.href {
        Some(href) => rsx! {
            a { class: "feature-link", href: "{href}", target: "_blank", rel: "noopener noreferrer", {card} }
        },
        None => card,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_layout_classes() {
        assert_eq!(CardLayout::Default.class(), "card-layout-default");
        assert_eq!(CardLayout::Compact.class(), "card-layout-compact");
        assert_eq!(CardLayout::IconLeft.class(), "card-layout-icon-left");
    }

    #[test]
    fn card_variant_classes() {
        assert_eq!(CardVariant::Default.class(), "card-default");
        assert_eq!(CardVariant::Primary.class(), "card-primary");
        assert_eq!(CardVariant::Secondary.class(), "card-secondary");
    }
}
