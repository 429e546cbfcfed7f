//! Hero banner
//!
//! Large page heading with optional subtitle, call-to-action children and a
//! gradient backdrop.

use dioxus::prelude::*;

use super::{class_list, AnimatedGradient, GradientIntensity, GradientVariant};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeroAlign {
    #[default]
    Center,
    Left,
}

impl HeroAlign {
    pub fn class(&self) -> &'static str {
        match self {
            HeroAlign::Center => "hero-center",
            HeroAlign::Left => "hero-left",
        }
    }
}

/// Scales title, subtitle and vertical padding together
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeroSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl HeroSize {
    pub fn class(&self) -> &'static str {
        match self {
            HeroSize::Sm => "hero-sm",
            HeroSize::Md => "hero-md",
            HeroSize::Lg => "hero-lg",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    pub title: String,
    /// Trailing part of the title rendered in the accent colour
    #[props(default)]
    pub highlight: Option<String>,
    #[props(default)]
    pub subtitle: Option<String>,
    #[props(default)]
    pub gradient: GradientVariant,
    #[props(default)]
    pub gradient_intensity: GradientIntensity,
    #[props(default)]
    pub align: HeroAlign,
    #[props(default)]
    pub size: HeroSize,
    #[props(default = true)]
    pub has_background: bool,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub children: Element,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let outer_class = class_list(&["hero", props.class.as_deref().unwrap_or("")]);
    let inner_class = class_list(&["hero-inner", props.align.class(), props.size.class()]);

    rsx! {
        div { class: "{outer_class}",
            if props.has_background {
                AnimatedGradient {
                    variant: props.gradient,
                    intensity: props.gradient_intensity,
                    class: "hero-backdrop".to_string(),
                }
            }
            div { class: "{inner_class}",
                div { class: "hero-text",
                    h1 { class: "hero-title",
                        "{props.title}"
                        if let Some(highlight) = &props.highlight {
                            " "
                            span { class: "text-accent", "{highlight}" }
                        }
                    }
                    if let Some(subtitle) = &props.subtitle {
                        p { class: "hero-subtitle", "{subtitle}" }
                    }
                }
                div { class: "hero-actions", {props.children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_classes() {
        assert_eq!(HeroAlign::Center.class(), "hero-center");
        assert_eq!(HeroAlign::Left.class(), "hero-left");
        assert_eq!(HeroSize::Sm.class(), "hero-sm");
        assert_eq!(HeroSize::Lg.class(), "hero-lg");
    }

    #[test]
    fn hero_defaults() {
        assert_eq!(HeroAlign::default(), HeroAlign::Center);
        assert_eq!(HeroSize::default(), HeroSize::Md);
    }
}
