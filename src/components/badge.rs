use gpui::{
    AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce, StyleRefinement, Styled,
    Window, px,
};
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    theme::{
        ThemeBackgroundKind, ThemeExt, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind,
        ThemeTextSizeKind,
    },
    utils::{compose_styles, styled_div},
};

/// Visual style of a [`Badge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 4] = [
        Self::Default,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }

    pub fn style(&self, cx: &App) -> StyleRefinement {
        let colors = &cx.get_theme().variants.active(cx).colors;

        match self {
            Self::Default => StyleRefinement::default()
                .bg(colors.accent.primary)
                .border_color(colors.accent.primary)
                .text_color(colors.text.on_accent),
            Self::Secondary => StyleRefinement::default()
                .bg(ThemeBackgroundKind::Tertiary.resolve(cx))
                .border_color(ThemeBackgroundKind::Tertiary.resolve(cx))
                .text_color(colors.text.primary),
            Self::Destructive => StyleRefinement::default()
                .bg(colors.accent.destructive)
                .border_color(colors.accent.destructive)
                .text_color(colors.text.on_accent),
            Self::Outline => StyleRefinement::default()
                .border_color(ThemeBackgroundKind::Quaternary.resolve(cx))
                .text_color(colors.text.primary),
        }
    }
}

impl From<&str> for BadgeVariant {
    fn from(key: &str) -> Self {
        match key {
            "default" => Self::Default,
            "secondary" => Self::Secondary,
            "destructive" => Self::Destructive,
            "outline" => Self::Outline,
            unknown => {
                tracing::debug!(key = unknown, "unknown badge variant, using default");
                Self::Default
            }
        }
    }
}

impl From<String> for BadgeVariant {
    fn from(key: String) -> Self {
        Self::from(key.as_str())
    }
}

/// A small status label.
#[derive(IntoElement)]
pub struct Badge {
    variant: BadgeVariant,
    children: SmallVec<[AnyElement; 1]>,
    style: StyleRefinement,
}

impl Default for Badge {
    fn default() -> Self {
        Self::new()
    }
}

impl Badge {
    pub fn new() -> Self {
        Self {
            variant: BadgeVariant::default(),
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn variant(mut self, variant: impl Into<BadgeVariant>) -> Self {
        self.variant = variant.into();
        self
    }

    fn base_style(cx: &App) -> StyleRefinement {
        StyleRefinement::default()
            .flex()
            .flex_none()
            .items_center()
            .rounded(ThemeLayoutCornerRadiiKind::Sm.resolve(cx))
            .border_1()
            .px(ThemeLayoutPaddingKind::Sm.resolve(cx))
            .py(px(2.))
            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
            .font_weight(FontWeight::SEMIBOLD)
            .whitespace_nowrap()
    }

    pub fn composed_style(&self, cx: &App) -> StyleRefinement {
        compose_styles([
            &Self::base_style(cx),
            &self.variant.style(cx),
            &self.style,
        ])
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        styled_div(&self.composed_style(cx)).children(self.children)
    }
}

crate::impl_styled_parent!(Badge);
