//! Static theme and style preset tables.
//!
//! Lookup is permissive: an unknown or empty key resolves to the default
//! preset instead of failing.

use crate::color::Rgb;

/// Drawing strategy for dark QR modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStyle {
    Square,
    Rounded,
    Circle,
    VerticalBars,
    HorizontalBars,
    GappedSquare,
}

/// Theme coloring: a solid fill or a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColors {
    Solid { fill: Rgb, back: Rgb },
    Gradient { center: Rgb, edge: Rgb, back: Rgb },
}

impl ThemeColors {
    /// Background color, common to both variants.
    pub fn back(&self) -> Rgb {
        match *self {
            Self::Solid { back, .. } | Self::Gradient { back, .. } => back,
        }
    }
}

/// A keyed color theme preset.
#[derive(Debug, Clone, Copy)]
pub struct ThemePreset {
    pub key: &'static str,
    pub name: &'static str,
    pub colors: ThemeColors,
}

/// A keyed module style preset.
#[derive(Debug, Clone, Copy)]
pub struct StylePreset {
    pub key: &'static str,
    pub name: &'static str,
    pub style: ModuleStyle,
}

/// An owned, resolved theme as carried by a render request.
///
/// Owned rather than borrowed from the preset table because the
/// interactive surface can build a custom theme from user hex colors.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// A user-defined solid theme from custom colors.
    pub fn custom(fill: Rgb, back: Rgb) -> Self {
        Self {
            name: "🎛  Custom".to_string(),
            colors: ThemeColors::Solid { fill, back },
        }
    }
}

impl From<&ThemePreset> for Theme {
    fn from(preset: &ThemePreset) -> Self {
        Self {
            name: preset.name.to_string(),
            colors: preset.colors,
        }
    }
}

pub const THEMES: [ThemePreset; 8] = [
    ThemePreset {
        key: "1",
        name: "🟣 Neon Purple",
        colors: ThemeColors::Solid {
            fill: Rgb::new(127, 0, 255),
            back: Rgb::new(0, 0, 0),
        },
    },
    ThemePreset {
        key: "2",
        name: "🔵 Ocean Blue",
        colors: ThemeColors::Solid {
            fill: Rgb::new(0, 119, 182),
            back: Rgb::new(255, 255, 255),
        },
    },
    ThemePreset {
        key: "3",
        name: "🟠 Sunset",
        colors: ThemeColors::Solid {
            fill: Rgb::new(255, 87, 51),
            back: Rgb::new(25, 25, 25),
        },
    },
    ThemePreset {
        key: "4",
        name: "🟢 Matrix",
        colors: ThemeColors::Solid {
            fill: Rgb::new(0, 255, 65),
            back: Rgb::new(0, 0, 0),
        },
    },
    ThemePreset {
        key: "5",
        name: "⚪ Classic",
        colors: ThemeColors::Solid {
            fill: Rgb::new(0, 0, 0),
            back: Rgb::new(255, 255, 255),
        },
    },
    ThemePreset {
        key: "6",
        name: "💖 Pink Dream",
        colors: ThemeColors::Solid {
            fill: Rgb::new(255, 20, 147),
            back: Rgb::new(255, 240, 245),
        },
    },
    ThemePreset {
        key: "7",
        name: "🌊 Gradient Ocean",
        colors: ThemeColors::Gradient {
            center: Rgb::new(0, 191, 255),
            edge: Rgb::new(0, 0, 139),
            back: Rgb::new(255, 255, 255),
        },
    },
    ThemePreset {
        key: "8",
        name: "🔥 Gradient Fire",
        colors: ThemeColors::Gradient {
            center: Rgb::new(255, 215, 0),
            edge: Rgb::new(255, 0, 0),
            back: Rgb::new(0, 0, 0),
        },
    },
];

pub const STYLES: [StylePreset; 6] = [
    StylePreset {
        key: "1",
        name: "■ Square (Classic)",
        style: ModuleStyle::Square,
    },
    StylePreset {
        key: "2",
        name: "● Rounded",
        style: ModuleStyle::Rounded,
    },
    StylePreset {
        key: "3",
        name: "○ Circle",
        style: ModuleStyle::Circle,
    },
    StylePreset {
        key: "4",
        name: "║ Vertical Bars",
        style: ModuleStyle::VerticalBars,
    },
    StylePreset {
        key: "5",
        name: "═ Horizontal Bars",
        style: ModuleStyle::HorizontalBars,
    },
    StylePreset {
        key: "6",
        name: "▢ Gapped Square",
        style: ModuleStyle::GappedSquare,
    },
];

// Fallbacks: theme "5" (Classic) and style "1" (Square).
const DEFAULT_THEME: usize = 4;
const DEFAULT_STYLE: usize = 0;

/// Strip a menu-style choice down to its leading token: `"1 - Square"` → `"1"`.
pub fn normalize_key(raw: &str) -> &str {
    raw.split_whitespace().next().unwrap_or("")
}

/// Resolve a theme key; unknown or empty keys fall back to Classic.
pub fn resolve_theme(raw: &str) -> &'static ThemePreset {
    let key = normalize_key(raw);
    THEMES
        .iter()
        .find(|t| t.key == key)
        .unwrap_or(&THEMES[DEFAULT_THEME])
}

/// Resolve a style key; unknown or empty keys fall back to Square.
pub fn resolve_style(raw: &str) -> &'static StylePreset {
    let key = normalize_key(raw);
    STYLES
        .iter()
        .find(|s| s.key == key)
        .unwrap_or(&STYLES[DEFAULT_STYLE])
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", "🟣 Neon Purple")]
    #[case("2", "🔵 Ocean Blue")]
    #[case("3", "🟠 Sunset")]
    #[case("4", "🟢 Matrix")]
    #[case("5", "⚪ Classic")]
    #[case("6", "💖 Pink Dream")]
    #[case("7", "🌊 Gradient Ocean")]
    #[case("8", "🔥 Gradient Fire")]
    fn resolves_each_theme_key(#[case] key: &str, #[case] name: &str) {
        let preset = resolve_theme(key);
        assert_eq!(preset.key, key);
        assert_eq!(preset.name, name);
    }

    #[rstest]
    #[case("1", "■ Square (Classic)", ModuleStyle::Square)]
    #[case("2", "● Rounded", ModuleStyle::Rounded)]
    #[case("3", "○ Circle", ModuleStyle::Circle)]
    #[case("4", "║ Vertical Bars", ModuleStyle::VerticalBars)]
    #[case("5", "═ Horizontal Bars", ModuleStyle::HorizontalBars)]
    #[case("6", "▢ Gapped Square", ModuleStyle::GappedSquare)]
    fn resolves_each_style_key(#[case] key: &str, #[case] name: &str, #[case] style: ModuleStyle) {
        let preset = resolve_style(key);
        assert_eq!(preset.key, key);
        assert_eq!(preset.name, name);
        assert_eq!(preset.style, style);
    }

    #[test]
    fn theme_colors_match_the_documented_palette() {
        assert_eq!(
            resolve_theme("2").colors,
            ThemeColors::Solid {
                fill: Rgb::new(0, 119, 182),
                back: Rgb::WHITE,
            }
        );
        assert_eq!(
            resolve_theme("7").colors,
            ThemeColors::Gradient {
                center: Rgb::new(0, 191, 255),
                edge: Rgb::new(0, 0, 139),
                back: Rgb::WHITE,
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("9")]
    #[case("banana")]
    fn unknown_theme_keys_fall_back_to_classic(#[case] key: &str) {
        assert_eq!(resolve_theme(key).key, "5");
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("7")]
    #[case("fancy")]
    fn unknown_style_keys_fall_back_to_square(#[case] key: &str) {
        assert_eq!(resolve_style(key).key, "1");
    }

    #[test]
    fn normalizes_menu_style_choices() {
        assert_eq!(normalize_key("1 - Square"), "1");
        assert_eq!(normalize_key("  3  "), "3");
        assert_eq!(normalize_key(""), "");
        assert_eq!(resolve_theme("2 - Ocean Blue").key, "2");
    }
}
