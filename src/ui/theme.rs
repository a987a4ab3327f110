use ratatui::style::Color;

use crate::config::Theme;

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub heading: Color,
    pub border: Color,
    pub accent: Color,
    pub badge: Color,
    pub highlight: Color,
    pub status_ok: Color,
    pub status_error: Color,
    pub user_bubble: Color,
    pub model_bubble: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf8, 0xfa, 0xfc),
    text: Color::Rgb(0x33, 0x41, 0x55),
    muted: Color::Rgb(0x64, 0x74, 0x8b),
    heading: Color::Rgb(0x0f, 0x17, 0x2a),
    border: Color::Rgb(0xcb, 0xd5, 0xe1),
    accent: Color::Rgb(0x4f, 0x46, 0xe5),
    badge: Color::Rgb(0xb4, 0x53, 0x09),
    highlight: Color::Rgb(0xef, 0x44, 0x44),
    status_ok: Color::Rgb(0x16, 0xa3, 0x4a),
    status_error: Color::Rgb(0xdc, 0x26, 0x26),
    user_bubble: Color::Rgb(0x25, 0x63, 0xeb),
    model_bubble: Color::Rgb(0x47, 0x55, 0x69),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x0b, 0x11, 0x20),
    text: Color::Rgb(0xcb, 0xd5, 0xe1),
    muted: Color::Rgb(0x94, 0xa3, 0xb8),
    heading: Color::Rgb(0xf1, 0xf5, 0xf9),
    border: Color::Rgb(0x33, 0x41, 0x55),
    accent: Color::Rgb(0x81, 0x8c, 0xf8),
    badge: Color::Rgb(0xfc, 0xd3, 0x4d),
    highlight: Color::Rgb(0xf8, 0x71, 0x71),
    status_ok: Color::Rgb(0x22, 0xc5, 0x5e),
    status_error: Color::Rgb(0xef, 0x44, 0x44),
    user_bubble: Color::Rgb(0x60, 0xa5, 0xfa),
    model_bubble: Color::Rgb(0xe2, 0xe8, 0xf0),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

/// Accent color for a phrase style tag. Unknown tags use the palette accent.
pub fn style_color(tag: Option<&str>, theme: Theme) -> Color {
    let dark = theme.is_dark();
    match tag {
        Some("blue") if dark => Color::Rgb(0x60, 0xa5, 0xfa),
        Some("blue") => Color::Rgb(0x25, 0x63, 0xeb),
        Some("violet") if dark => Color::Rgb(0xa7, 0x8b, 0xfa),
        Some("violet") => Color::Rgb(0x7c, 0x3a, 0xed),
        Some("pink") if dark => Color::Rgb(0xf4, 0x72, 0xb6),
        Some("pink") => Color::Rgb(0xdb, 0x27, 0x77),
        Some("cyan") if dark => Color::Rgb(0x22, 0xd3, 0xee),
        Some("cyan") => Color::Rgb(0x08, 0x91, 0xb2),
        _ => palette(theme).accent,
    }
}
