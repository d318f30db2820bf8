//! Named color presets for generated portfolios.

use serde::Serialize;

/// Five `#RRGGBB` colors applied to the generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

pub const DEFAULT_THEME: &str = "professional-blue";

/// Registry of presets, in display order.
pub const THEMES: &[(&str, ColorTheme)] = &[
    (
        "professional-blue",
        ColorTheme {
            primary: "#2C3E50",
            secondary: "#3498DB",
            accent: "#1ABC9C",
            background: "#ECF0F1",
            text: "#2C3E50",
        },
    ),
    (
        "elegant-purple",
        ColorTheme {
            primary: "#6C5CE7",
            secondary: "#A29BFE",
            accent: "#FD79A8",
            background: "#F8F9FA",
            text: "#2D3436",
        },
    ),
    (
        "modern-green",
        ColorTheme {
            primary: "#00B894",
            secondary: "#00CEC9",
            accent: "#FDCB6E",
            background: "#DFE6E9",
            text: "#2D3436",
        },
    ),
    (
        "classic-gray",
        ColorTheme {
            primary: "#2D3436",
            secondary: "#636E72",
            accent: "#D63031",
            background: "#F8F9FA",
            text: "#2D3436",
        },
    ),
];

/// Exact lookup; returns the registry's own name alongside the colors.
pub fn get_theme(name: &str) -> Option<(&'static str, &'static ColorTheme)> {
    THEMES
        .iter()
        .find(|(theme_name, _)| *theme_name == name)
        .map(|(theme_name, theme)| (*theme_name, theme))
}

/// Looks up `name`, falling back to [`DEFAULT_THEME`] for unknown names.
/// Returns the name actually used alongside the colors.
pub fn resolve_theme(name: &str) -> (&'static str, &'static ColorTheme) {
    if let Some((theme_name, theme)) = get_theme(name) {
        return (theme_name, theme);
    }
    get_theme(DEFAULT_THEME).unwrap_or((THEMES[0].0, &THEMES[0].1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_all_theme_colors_are_hex() {
        for (name, theme) in THEMES {
            for color in [
                theme.primary,
                theme.secondary,
                theme.accent,
                theme.background,
                theme.text,
            ] {
                assert!(is_hex_color(color), "theme {name} has bad color {color}");
            }
        }
    }

    #[test]
    fn test_professional_blue_exists() {
        let (name, theme) = get_theme("professional-blue").unwrap();
        assert_eq!(name, "professional-blue");
        assert_eq!(theme.primary, "#2C3E50");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        assert!(get_theme("neon-pink").is_none());
        let (name, theme) = resolve_theme("neon-pink");
        assert_eq!(name, DEFAULT_THEME);
        assert_eq!(theme, get_theme(DEFAULT_THEME).unwrap().1);
    }

    #[test]
    fn test_known_theme_resolves_to_itself() {
        let (name, theme) = resolve_theme("classic-gray");
        assert_eq!(name, "classic-gray");
        assert_eq!(theme.accent, "#D63031");
    }
}
