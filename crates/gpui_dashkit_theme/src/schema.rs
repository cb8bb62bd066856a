use std::{
    ops::{Deref, DerefMut},
    path::Path,
    sync::LazyLock,
};

use gpui::{AbsoluteLength, App, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{
    de_abs_length, de_def_length, de_pixels, de_string_or_non_empty_list, de_variants,
};
use crate::ThemeError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub variants: ThemeVariants,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_json(include_str!($path))
                    .unwrap_or_else(|err| panic!("bundled theme {} is invalid: {err}", $path))
            });
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    generate_builtin_themes!(["../themes/default.json", DEFAULT]);

    /// Parses a theme from a JSON document.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Theme, ThemeError> {
        let theme: Theme = serde_json::from_str(json.as_ref())?;
        tracing::debug!(theme = %theme.name, "parsed theme");
        Ok(theme)
    }

    /// Reads and parses a theme from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let theme = Self::from_json(json)?;
        tracing::info!(theme = %theme.name, path = %path.display(), "loaded theme");

        Ok(theme)
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
    pub padding: ThemePadding,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextWeights {
    pub heading_lg: f32,
    pub heading_md: f32,
    pub body: f32,
    pub caption: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_variants")]
    pub variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    /// The variant selected by the [`ActiveVariantId`] global.
    pub fn active(&self, cx: &App) -> &ThemeVariant {
        let index = cx
            .try_global::<ActiveVariantId>()
            .map(|id| id.0)
            .unwrap_or_default();

        self.variants.get(index).unwrap_or(&self.variants[0])
    }

    /// Index of the first variant of the given kind.
    pub fn position(&self, kind: ThemeVariantKind) -> Option<usize> {
        self.variants.iter().position(|variant| variant.kind == kind)
    }
}

pub struct ActiveVariantId(pub usize);

impl Global for ActiveVariantId {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub colors: ThemeColors,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub quaternary: Rgba,
    pub quinary: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub primary: Rgba,
    pub constructive: Rgba,
    pub destructive: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    /// Text drawn on top of accent-colored surfaces.
    pub on_accent: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::px;
    use pretty_assertions::assert_eq;

    const MINIMAL_THEME: &str = r##"{
        "name": "Minimal",
        "layout": {
            "text": {
                "base_size": "16px",
                "default_font": {
                    "family": "Inter",
                    "line_height": "150%",
                    "sizes": { "heading_lg": "1.5rem", "heading_md": "1.125rem", "body": 14, "caption": "12px" },
                    "weights": { "heading_lg": 700, "heading_md": 600, "body": 400, "caption": 400 }
                }
            },
            "corner_radii": { "xl": 16, "lg": 12, "md": "8px", "sm": 4 },
            "size": { "xl": 44, "lg": 40, "md": 36, "sm": 32 },
            "padding": { "xl": 24, "lg": 16, "md": 12, "sm": 8 }
        },
        "variants": [
            {
                "kind": "light",
                "colors": {
                    "background": {
                        "primary": "#ffffff", "secondary": "#f4f4f5", "tertiary": "#e4e4e7",
                        "quaternary": "#d4d4d8", "quinary": "#a1a1aa"
                    },
                    "accent": { "primary": "#2563eb", "constructive": "#16a34a", "destructive": "#dc2626" },
                    "text": { "primary": "#09090b", "secondary": "#71717a", "on_accent": "#ffffff" }
                }
            }
        ]
    }"##;

    #[test]
    fn test_bundled_default_theme_parses() {
        let default = Theme::DEFAULT;
        let theme: &Theme = default.as_ref();

        assert!(!theme.name.is_empty(), "Default theme should have a name");
        assert!(
            theme.variants.position(ThemeVariantKind::Dark).is_some(),
            "Default theme should ship a dark variant"
        );
        assert!(
            theme.variants.position(ThemeVariantKind::Light).is_some(),
            "Default theme should ship a light variant"
        );
    }

    #[test]
    fn test_from_json_accepts_mixed_length_formats() {
        let theme = Theme::from_json(MINIMAL_THEME).unwrap();

        assert_eq!(theme.name.as_ref(), "Minimal");
        assert!(theme.layout.text.base_size == px(16.));
        assert!(theme.layout.corner_radii.md == px(8.));
        assert!(theme.layout.size.sm == px(32.));
        assert!(theme.layout.text.default_font.line_height == DefiniteLength::Fraction(1.5));
        assert_eq!(theme.layout.text.default_font.family.len(), 1);
    }

    #[test]
    fn test_position_finds_variant_kind() {
        let theme = Theme::from_json(MINIMAL_THEME).unwrap();

        assert_eq!(theme.variants.position(ThemeVariantKind::Light), Some(0));
        assert_eq!(theme.variants.position(ThemeVariantKind::Dark), None);
    }

    #[test]
    fn test_from_json_rejects_empty_variants() {
        let mut json: serde_json::Value = serde_json::from_str(MINIMAL_THEME).unwrap();
        json["variants"] = serde_json::json!([]);

        let err = Theme::from_json(json.to_string()).unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)), "unexpected error: {err}");
        assert!(err.to_string().contains("at least one theme variant"));
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let err = Theme::from_path("/definitely/not/a/theme.json").unwrap_err();

        match err {
            ThemeError::Io { path, .. } => {
                assert_eq!(path, std::path::PathBuf::from("/definitely/not/a/theme.json"))
            }
            other => panic!("expected an io error, got {other}"),
        }
    }
}
