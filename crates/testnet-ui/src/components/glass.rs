//! Glass Container Component
//!
//! Translucent panel used for nearly every card in the portal. Five
//! independent knobs (blur, background, border, elevation, rounding) each
//! map to one utility class in the stylesheet.

use dioxus::prelude::*;

use super::class_list;

/// Backdrop blur strength
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BlurIntensity {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl BlurIntensity {
    pub fn class(&self) -> &'static str {
        match self {
            BlurIntensity::None => "",
            BlurIntensity::Sm => "blur-sm",
            BlurIntensity::Md => "blur-md",
            BlurIntensity::Lg => "blur-lg",
        }
    }
}

/// Opacity of the white fill
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BackgroundOpacity {
    None,
    Low,
    #[default]
    Medium,
    High,
}

impl BackgroundOpacity {
    pub fn class(&self) -> &'static str {
        match self {
            BackgroundOpacity::None => "bg-transparent",
            BackgroundOpacity::Low => "bg-glass-low",
            BackgroundOpacity::Medium => "bg-glass-medium",
            BackgroundOpacity::High => "bg-glass-high",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BorderStyle {
    None,
    #[default]
    Light,
    Medium,
    Strong,
}

impl BorderStyle {
    pub fn class(&self) -> &'static str {
        match self {
            BorderStyle::None => "",
            BorderStyle::Light => "border-light",
            BorderStyle::Medium => "border-medium",
            BorderStyle::Strong => "border-strong",
        }
    }
}

/// Drop shadow depth
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Elevation {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl Elevation {
    pub fn class(&self) -> &'static str {
        match self {
            Elevation::None => "",
            Elevation::Sm => "shadow-glass-sm",
            Elevation::Md => "shadow-glass",
            Elevation::Lg => "shadow-glass-lg",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Rounded {
    None,
    Sm,
    Md,
    #[default]
    Lg,
    Full,
}

impl Rounded {
    pub fn class(&self) -> &'static str {
        match self {
            Rounded::None => "rounded-none",
            Rounded::Sm => "rounded-sm",
            Rounded::Md => "rounded-md",
            Rounded::Lg => "rounded-lg",
            Rounded::Full => "rounded-full",
        }
    }
}

/// The full look of a glass panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GlassStyle {
    pub blur: BlurIntensity,
    pub background: BackgroundOpacity,
    pub border: BorderStyle,
    pub elevation: Elevation,
    pub rounded: Rounded,
}

impl GlassStyle {
    /// Flat inset row: no blur, no shadow, light border.
    pub const INSET: GlassStyle = GlassStyle {
        blur: BlurIntensity::None,
        background: BackgroundOpacity::Low,
        border: BorderStyle::Light,
        elevation: Elevation::None,
        rounded: Rounded::Lg,
    };

    /// Class string for this style plus any extra classes.
    pub fn class(&self, extra: &str) -> String {
        class_list(&[
            "glass",
            self.blur.class(),
            self.background.class(),
            self.border.class(),
            self.elevation.class(),
            self.rounded.class(),
            extra,
        ])
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GlassContainerProps {
    #[props(default)]
    pub blur: BlurIntensity,
    #[props(default)]
    pub background: BackgroundOpacity,
    #[props(default)]
    pub border: BorderStyle,
    #[props(default)]
    pub elevation: Elevation,
    #[props(default)]
    pub rounded: Rounded,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    pub children: Element,
}

/// Translucent panel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GlassContainer { class: "p-6".to_string(),
///         h2 { "Wallet Details" }
///     }
///     GlassContainer { blur: BlurIntensity::None, elevation: Elevation::None,
///         "inset row"
///     }
/// }
/// ```
#[component]
pub fn GlassContainer(props: GlassContainerProps) -> Element {
    let style = GlassStyle {
        blur: props.blur,
        background: props.background,
        border: props.border,
        elevation: props.elevation,
        rounded: props.rounded,
    };
    let full_class = style.class(props.class.as_deref().unwrap_or(""));

    rsx! {
        div {
            class: "{full_class}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_classes() {
        assert_eq!(
            GlassStyle::default().class(""),
            "glass blur-md bg-glass-medium border-light shadow-glass rounded-lg"
        );
    }

    #[test]
    fn none_variants_drop_out() {
        let style = GlassStyle {
            blur: BlurIntensity::None,
            background: BackgroundOpacity::None,
            border: BorderStyle::None,
            elevation: Elevation::None,
            rounded: Rounded::Full,
        };
        assert_eq!(style.class("p-4"), "glass bg-transparent rounded-full p-4");
    }

    #[test]
    fn inset_preset() {
        assert_eq!(
            GlassStyle::INSET.class(""),
            "glass bg-glass-low border-light rounded-lg"
        );
    }
}
