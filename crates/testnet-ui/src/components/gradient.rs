//! Animated gradient backdrop
//!
//! A slowly shifting colour wash placed behind hero sections and
//! highlighted panels. Purely decorative: it ignores pointer events.

use dioxus::prelude::*;

use super::class_list;

/// Gradient colour family
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GradientVariant {
    #[default]
    Blue,
    Purple,
    Cyan,
}

impl GradientVariant {
    pub fn class(&self) -> &'static str {
        match self {
            GradientVariant::Blue => "gradient-blue",
            GradientVariant::Purple => "gradient-purple",
            GradientVariant::Cyan => "gradient-cyan",
        }
    }
}

/// How strongly the gradient shows through
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GradientIntensity {
    Subtle,
    #[default]
    Medium,
    Strong,
}

impl GradientIntensity {
    pub fn class(&self) -> &'static str {
        match self {
            GradientIntensity::Subtle => "intensity-subtle",
            GradientIntensity::Medium => "intensity-medium",
            GradientIntensity::Strong => "intensity-strong",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AnimatedGradientProps {
    #[props(default)]
    pub variant: GradientVariant,
    #[props(default)]
    pub intensity: GradientIntensity,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn AnimatedGradient(props: AnimatedGradientProps) -> Element {
    let full_class = class_list(&[
        "animated-gradient",
        props.variant.class(),
        props.intensity.class(),
        props.class.as_deref().unwrap_or(""),
    ]);

    rsx! {
        div { class: "{full_class}", "aria-hidden": "true" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_classes() {
        assert_eq!(GradientVariant::Blue.class(), "gradient-blue");
        assert_eq!(GradientVariant::Purple.class(), "gradient-purple");
        assert_eq!(GradientVariant::Cyan.class(), "gradient-cyan");
        assert_eq!(GradientIntensity::Subtle.class(), "intensity-subtle");
        assert_eq!(GradientIntensity::Strong.class(), "intensity-strong");
    }

    #[test]
    fn gradient_defaults() {
        assert_eq!(GradientVariant::default(), GradientVariant::Blue);
        assert_eq!(GradientIntensity::default(), GradientIntensity::Medium);
    }
}
