#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::App;

use crate::theme::ThemeExt;

/// Text size variants that resolve to theme-defined values.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
#[func(pub fn weight(&self, cx: &App) -> gpui::FontWeight)]
pub enum ThemeTextSizeKind {
    /// Card and section titles.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_lg)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.heading_lg))]
    HeadingLg,
    /// Sub-headings.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_md)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.heading_md))]
    HeadingMd,
    /// Standard body text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.body)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.body))]
    Body,
    /// Small caption or label text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.caption)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.caption))]
    Caption,
}

/// Control height variants that resolve to theme-defined pixel values.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutSizeKind {
    #[assoc(resolve = cx.get_theme().layout.size.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.size.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.size.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.size.sm)]
    Sm,
}

/// Padding variants that resolve to theme-defined spacing values.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutPaddingKind {
    #[assoc(resolve = cx.get_theme().layout.padding.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.padding.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.padding.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.padding.sm)]
    Sm,
}

/// Corner radius variants that resolve to theme-defined values.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutCornerRadiiKind {
    #[assoc(resolve = cx.get_theme().layout.corner_radii.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.sm)]
    Sm,
}

/// Background color variants from the active theme variant.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeBackgroundKind {
    /// Base background for main surfaces.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.primary)]
    Primary,
    /// Slightly elevated or grouped content.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.secondary)]
    Secondary,
    /// Further elevated elements.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.tertiary)]
    Tertiary,
    /// High emphasis backgrounds.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quaternary)]
    Quaternary,
    /// Highest emphasis backgrounds.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quinary)]
    Quinary,
}

/// Background layers for stacking surfaces with visual hierarchy.
///
/// `next()` gives the background one step up, used for borders and hover
/// states of elements sitting on this layer.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn next(&self) -> ThemeBackgroundKind)]
pub enum ThemeLayerKind {
    #[default]
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.primary)]
    #[assoc(next = ThemeBackgroundKind::Secondary)]
    Primary,
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.secondary)]
    #[assoc(next = ThemeBackgroundKind::Tertiary)]
    Secondary,
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.tertiary)]
    #[assoc(next = ThemeBackgroundKind::Quaternary)]
    Tertiary,
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quaternary)]
    #[assoc(next = ThemeBackgroundKind::Quinary)]
    Quaternary,
}

impl From<ThemeLayerKind> for ThemeBackgroundKind {
    fn from(layer: ThemeLayerKind) -> Self {
        match layer {
            ThemeLayerKind::Primary => ThemeBackgroundKind::Primary,
            ThemeLayerKind::Secondary => ThemeBackgroundKind::Secondary,
            ThemeLayerKind::Tertiary => ThemeBackgroundKind::Tertiary,
            ThemeLayerKind::Quaternary => ThemeBackgroundKind::Quaternary,
        }
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{ActiveVariantId, Theme, ThemeExt, ThemeVariantKind};
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_set_theme_selects_first_variant(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            assert_eq!(cx.global::<ActiveVariantId>().0, 0);
            assert!(matches!(
                cx.get_theme().variants.active(cx).kind,
                ThemeVariantKind::Dark
            ));
        });
    }

    #[gpui::test]
    fn test_set_theme_variant_switches_colors(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let dark = ThemeBackgroundKind::Primary.resolve(cx);

            cx.set_theme_variant(ThemeVariantKind::Light).unwrap();
            let light = ThemeBackgroundKind::Primary.resolve(cx);

            assert!(dark != light, "Light and dark backgrounds should differ");
        });
    }

    #[gpui::test]
    fn test_set_theme_variant_reports_missing_kind(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let mut theme = Theme::DEFAULT.as_ref().clone();
            theme
                .variants
                .variants
                .retain(|variant| variant.kind == ThemeVariantKind::Dark);
            cx.set_theme(theme);

            assert!(cx.set_theme_variant(ThemeVariantKind::Light).is_err());
            assert!(cx.set_theme_variant(ThemeVariantKind::Dark).is_ok());
        });
    }

    #[gpui::test]
    fn test_layer_kind_next(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            assert_eq!(ThemeLayerKind::Primary.next(), ThemeBackgroundKind::Secondary);
            assert_eq!(ThemeLayerKind::Secondary.next(), ThemeBackgroundKind::Tertiary);
            assert_eq!(ThemeLayerKind::Tertiary.next(), ThemeBackgroundKind::Quaternary);
            assert_eq!(ThemeLayerKind::Quaternary.next(), ThemeBackgroundKind::Quinary);
        });
    }

    #[gpui::test]
    fn test_layer_kind_matches_background_kind(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            for layer in [
                ThemeLayerKind::Primary,
                ThemeLayerKind::Secondary,
                ThemeLayerKind::Tertiary,
                ThemeLayerKind::Quaternary,
            ] {
                let background: ThemeBackgroundKind = layer.into();
                assert!(layer.resolve(cx) == background.resolve(cx));
            }
        });
    }

    #[gpui::test]
    fn test_size_ordering(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let sm = ThemeLayoutSizeKind::Sm.resolve(cx);
            let md = ThemeLayoutSizeKind::Md.resolve(cx);
            let lg = ThemeLayoutSizeKind::Lg.resolve(cx);
            let xl = ThemeLayoutSizeKind::Xl.resolve(cx);

            assert!(sm <= md, "Sm should be <= Md");
            assert!(md <= lg, "Md should be <= Lg");
            assert!(lg <= xl, "Lg should be <= Xl");
        });
    }

    #[gpui::test]
    fn test_padding_and_radii_ordering(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            assert!(ThemeLayoutPaddingKind::Sm.resolve(cx) <= ThemeLayoutPaddingKind::Xl.resolve(cx));
            assert!(
                ThemeLayoutCornerRadiiKind::Sm.resolve(cx)
                    <= ThemeLayoutCornerRadiiKind::Xl.resolve(cx)
            );
        });
    }

    #[gpui::test]
    fn test_text_size_kinds_resolve(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            for kind in [
                ThemeTextSizeKind::HeadingLg,
                ThemeTextSizeKind::HeadingMd,
                ThemeTextSizeKind::Body,
                ThemeTextSizeKind::Caption,
            ] {
                let _ = kind.resolve(cx);
                assert!(kind.weight(cx).0 > 0.);
            }
        });
    }
}
