//! Progress bar for simulated workflows.

use dioxus::prelude::*;

use super::class_list;

/// Inline width style for a percentage, clamped to 0..=100.
pub fn progress_width(value: u8) -> String {
    format!("width: {}%;", value.min(100))
}

#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Percent complete
    pub value: u8,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let full_class = class_list(&["progress", props.class.as_deref().unwrap_or("")]);
    let style = progress_width(props.value);
    let value = props.value.min(100);

    rsx! {
        div {
            class: "{full_class}",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{value}",
            div { class: "progress-fill", style: "{style}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_clamped() {
        assert_eq!(progress_width(0), "width: 0%;");
        assert_eq!(progress_width(64), "width: 64%;");
        assert_eq!(progress_width(250), "width: 100%;");
    }
}
