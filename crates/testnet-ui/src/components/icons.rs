//! Lucide icon set
//!
//! Only the icons the portal actually draws. Each one is a list of SVG
//! primitives on Lucide's 24x24 grid, stroked with `currentColor` so it
//! inherits the text colour.

use dioxus::prelude::*;

/// One SVG primitive of an icon
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    Path(&'static str),
    Circle {
        cx: &'static str,
        cy: &'static str,
        r: &'static str,
    },
    Rect {
        x: &'static str,
        y: &'static str,
        width: &'static str,
        height: &'static str,
        rx: &'static str,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    AlertCircle,
    ArrowRight,
    BookOpen,
    Check,
    CheckCircle,
    ChevronDown,
    Clock,
    Code,
    Coins,
    Copy,
    Droplet,
    ExternalLink,
    FileText,
    Gem,
    Github,
    Image,
    Layers,
    LogOut,
    Menu,
    RefreshCw,
    Share,
    Upload,
    Users,
    Video,
    Wallet,
    X,
}

impl IconKind {
    pub fn shapes(&self) -> &'static [Shape] {
        use Shape::*;
        match self {
            IconKind::AlertCircle => &[
                Circle { cx: "12", cy: "12", r: "10" },
                Path("M12 8v4"),
                Path("M12 16h.01"),
            ],
            IconKind::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            IconKind::BookOpen => &[
                Path("M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"),
                Path("M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"),
            ],
            IconKind::Check => &[Path("M20 6 9 17l-5-5")],
            IconKind::CheckCircle => &[
                Circle { cx: "12", cy: "12", r: "10" },
                Path("m9 12 2 2 4-4"),
            ],
            IconKind::ChevronDown => &[Path("m6 9 6 6 6-6")],
            IconKind::Clock => &[
                Circle { cx: "12", cy: "12", r: "10" },
                Path("M12 6v6l4 2"),
            ],
            IconKind::Code => &[Path("m16 18 6-6-6-6"), Path("m8 6-6 6 6 6")],
            IconKind::Coins => &[
                Circle { cx: "8", cy: "8", r: "6" },
                Path("M18.09 10.37A6 6 0 1 1 10.34 18"),
                Path("M7 6h1v4"),
                Path("m16.71 13.88.7.71-2.82 2.82"),
            ],
            IconKind::Copy => &[
                Rect { x: "8", y: "8", width: "14", height: "14", rx: "2" },
                Path("M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"),
            ],
            IconKind::Droplet => &[Path(
                "M12 22a7 7 0 0 0 7-7c0-2-1-3.9-3-5.5s-3.5-4-4-6.5c-.5 2.5-2 4.9-4 6.5C6 11.1 5 13 5 15a7 7 0 0 0 7 7z",
            )],
            IconKind::ExternalLink => &[
                Path("M15 3h6v6"),
                Path("M10 14 21 3"),
                Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
            ],
            IconKind::FileText => &[
                Path("M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"),
                Path("M14 2v4a2 2 0 0 0 2 2h4"),
                Path("M10 9H8"),
                Path("M16 13H8"),
                Path("M16 17H8"),
            ],
            IconKind::Gem => &[
                Path("M6 3h12l4 6-10 13L2 9Z"),
                Path("M11 3 8 9l4 13 4-13-3-6"),
                Path("M2 9h20"),
            ],
            IconKind::Github => &[
                Path("M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"),
                Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            IconKind::Image => &[
                Rect { x: "3", y: "3", width: "18", height: "18", rx: "2" },
                Circle { cx: "9", cy: "9", r: "2" },
                Path("m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21"),
            ],
            IconKind::Layers => &[
                Path("m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"),
                Path("m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65"),
                Path("m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65"),
            ],
            IconKind::LogOut => &[
                Path("M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"),
                Path("m16 17 5-5-5-5"),
                Path("M21 12H9"),
            ],
            IconKind::Menu => &[Path("M4 12h16"), Path("M4 6h16"), Path("M4 18h16")],
            IconKind::RefreshCw => &[
                Path("M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"),
                Path("M21 3v5h-5"),
                Path("M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"),
                Path("M8 16H3v5"),
            ],
            IconKind::Share => &[
                Circle { cx: "18", cy: "5", r: "3" },
                Circle { cx: "6", cy: "12", r: "3" },
                Circle { cx: "18", cy: "19", r: "3" },
                Path("m8.59 13.51 6.83 3.98"),
                Path("m15.41 6.51-6.82 3.98"),
            ],
            IconKind::Upload => &[
                Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
                Path("m17 8-5-5-5 5"),
                Path("M12 3v12"),
            ],
            IconKind::Users => &[
                Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
                Circle { cx: "9", cy: "7", r: "4" },
                Path("M22 21v-2a4 4 0 0 0-3-3.87"),
                Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            IconKind::Video => &[
                Path("m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5"),
                Rect { x: "2", y: "6", width: "14", height: "12", rx: "2" },
            ],
            IconKind::Wallet => &[
                Path("M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1"),
                Path("M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4"),
            ],
            IconKind::X => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub kind: IconKind,
    /// Edge length in pixels
    #[props(default = 16)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

/// Render a Lucide icon
#[component]
pub fn Icon(props: IconProps) -> Element {
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        svg {
            class: "icon {class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for shape in props.kind.shapes().iter() {
                {render_shape(*shape)}
            }
        }
    }
}

fn render_shape(shape: Shape) -> Element {
    match shape {
        Shape::Path(d) => rsx! {
            path { d: d }
        },
        Shape::Circle { cx, cy, r } => rsx! {
            circle { cx: cx, cy: cy, r: r }
        },
        Shape::Rect { x, y, width, height, rx } => rsx! {
            rect { x: x, y: y, width: width, height: height, rx: rx }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_shapes() {
        let all = [
            IconKind::AlertCircle,
            IconKind::ArrowRight,
            IconKind::BookOpen,
            IconKind::Check,
            IconKind::CheckCircle,
            IconKind::ChevronDown,
            IconKind::Clock,
            IconKind::Code,
            IconKind::Coins,
            IconKind::Copy,
            IconKind::Droplet,
            IconKind::ExternalLink,
            IconKind::FileText,
            IconKind::Gem,
            IconKind::Github,
            IconKind::Image,
            IconKind::Layers,
            IconKind::LogOut,
            IconKind::Menu,
            IconKind::RefreshCw,
            IconKind::Share,
            IconKind::Upload,
            IconKind::Users,
            IconKind::Video,
            IconKind::Wallet,
            IconKind::X,
        ];
        for kind in all {
            assert!(!kind.shapes().is_empty(), "{kind:?}");
        }
    }

    #[test]
    fn paths_are_relative_or_absolute_commands() {
        for shape in IconKind::Github.shapes() {
            if let Shape::Path(d) = shape {
                assert!(d.starts_with('M') || d.starts_with('m'));
            }
        }
    }
}
