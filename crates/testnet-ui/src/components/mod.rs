//! Reusable presentational components.

mod button;
mod feature_card;
mod glass;
mod gradient;
mod hero;
mod icons;
mod progress_bar;

pub use button::*;
pub use feature_card::*;
pub use glass::*;
pub use gradient::*;
pub use hero::*;
pub use icons::*;
pub use progress_bar::*;

/// Join class names, skipping empty ones.
pub fn class_list(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_skips_empty_parts() {
        assert_eq!(class_list(&["glass", "", "  ", "blur-md"]), "glass blur-md");
        assert_eq!(class_list(&[]), "");
    }
}
