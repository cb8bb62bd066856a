use gpui::{
    AnyElement, App, ClickEvent, CursorStyle, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, Rgba, StatefulInteractiveElement, StyleRefinement,
    Styled, Window, prelude::FluentBuilder,
};
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt},
    primitives::FocusRing,
    theme::{
        ThemeBackgroundKind, ThemeExt, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind,
        ThemeLayoutSizeKind, ThemeTextSizeKind,
    },
    utils::{ElementIdExt, RgbaExt, compose_styles, styled_div},
};

type OnClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;
type OnHoverHandler = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ButtonVariant {
    /// Filled with the accent color.
    #[default]
    Default,
    /// Transparent with a border.
    Outline,
    /// Transparent until hovered.
    Ghost,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [Self::Default, Self::Outline, Self::Ghost];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }

    /// The style bundle for this variant.
    pub fn style(&self, cx: &App) -> StyleRefinement {
        let colors = &cx.get_theme().variants.active(cx).colors;

        match self {
            Self::Default => StyleRefinement::default()
                .bg(colors.accent.primary)
                .text_color(colors.text.on_accent)
                .border_color(colors.accent.primary),
            Self::Outline => StyleRefinement::default()
                .bg(colors.background.primary)
                .text_color(colors.text.primary)
                .border_color(ThemeBackgroundKind::Tertiary.resolve(cx)),
            Self::Ghost => StyleRefinement::default()
                .text_color(colors.text.primary)
                .border_color(colors.background.primary.alpha(0.)),
        }
    }

    /// Background applied while the pointer is over the button.
    pub fn hover_background(&self, cx: &App) -> Rgba {
        let colors = &cx.get_theme().variants.active(cx).colors;

        match self {
            Self::Default => colors.accent.primary.mix(colors.background.primary, 0.15),
            Self::Outline | Self::Ghost => ThemeBackgroundKind::Secondary.resolve(cx),
        }
    }
}

impl From<&str> for ButtonVariant {
    fn from(key: &str) -> Self {
        match key {
            "default" => Self::Default,
            "outline" => Self::Outline,
            "ghost" => Self::Ghost,
            unknown => {
                tracing::debug!(key = unknown, "unknown button variant, using default");
                Self::Default
            }
        }
    }
}

impl From<String> for ButtonVariant {
    fn from(key: String) -> Self {
        Self::from(key.as_str())
    }
}

/// Size of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [Self::Default, Self::Sm, Self::Lg];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }

    /// The style bundle for this size.
    pub fn style(&self, cx: &App) -> StyleRefinement {
        let (height, padding, text_size) = match self {
            Self::Default => (
                ThemeLayoutSizeKind::Md,
                ThemeLayoutPaddingKind::Lg,
                ThemeTextSizeKind::Body,
            ),
            Self::Sm => (
                ThemeLayoutSizeKind::Sm,
                ThemeLayoutPaddingKind::Md,
                ThemeTextSizeKind::Caption,
            ),
            Self::Lg => (
                ThemeLayoutSizeKind::Lg,
                ThemeLayoutPaddingKind::Xl,
                ThemeTextSizeKind::Body,
            ),
        };

        StyleRefinement::default()
            .h(height.resolve(cx))
            .px(padding.resolve(cx))
            .text_size(text_size.resolve(cx))
    }
}

impl From<&str> for ButtonSize {
    fn from(key: &str) -> Self {
        match key {
            "default" => Self::Default,
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            unknown => {
                tracing::debug!(key = unknown, "unknown button size, using default");
                Self::Default
            }
        }
    }
}

impl From<String> for ButtonSize {
    fn from(key: String) -> Self {
        Self::from(key.as_str())
    }
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_hover: Option<OnHoverHandler>,
    on_click: Option<OnClickHandler>,
    click_behavior: ClickBehavior,
    children: SmallVec<[AnyElement; 2]>,
    style: StyleRefinement,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            on_hover: None,
            on_click: None,
            click_behavior: ClickBehavior::default(),
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn variant(mut self, variant: impl Into<ButtonVariant>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Sets the size bundle. Named so it doesn't shadow [`Styled::size`].
    pub fn with_size(mut self, size: impl Into<ButtonSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_hover(mut self, on_hover: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    fn base_style(cx: &App) -> StyleRefinement {
        let theme = cx.get_theme();

        StyleRefinement::default()
            .relative()
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .gap(ThemeLayoutPaddingKind::Sm.resolve(cx))
            .rounded(ThemeLayoutCornerRadiiKind::Md.resolve(cx))
            .border_1()
            .font_family(theme.layout.text.default_font.family[0].clone())
            .font_weight(FontWeight::MEDIUM)
            .whitespace_nowrap()
    }

    /// Base, variant and size bundles followed by the caller's styles.
    pub fn composed_style(&self, cx: &App) -> StyleRefinement {
        compose_styles([
            &Self::base_style(cx),
            &self.variant.style(cx),
            &self.size.style(cx),
            &self.style,
        ])
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = self.composed_style(cx);
        let hover_background = self.variant.hover_background(cx);
        let corner_radius = ThemeLayoutCornerRadiiKind::Md.resolve(cx);

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();
        let is_focus = focus_handle.is_focused(window);

        let is_disabled = self.disabled;

        if is_focus && is_disabled {
            window.blur();
        }

        let click_behavior = self.click_behavior;

        styled_div(&style)
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle.clone())
                    .rounded(corner_radius),
            )
            .children(self.children)
            .when(is_disabled, |this| this.opacity(0.5))
            .when(!is_disabled, |this| {
                this.hover(move |this| this.bg(hover_background))
                    .when_some(self.on_hover, |this, on_hover| {
                        this.on_hover(move |hovered, window, cx| (on_hover)(hovered, window, cx))
                    })
                    .on_click(move |event, window, cx| {
                        click_behavior.apply(window, cx);

                        if let Some(on_click) = self.on_click.as_ref() {
                            (on_click)(event, window, cx);
                        }
                    })
                    .track_focus(&focus_handle)
            })
    }
}

impl ClickBehaviorExt for Button {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}

crate::impl_styled_parent!(Button);

#[cfg(test)]
mod key_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variant_keys_round_trip() {
        for variant in ButtonVariant::ALL {
            assert_eq!(ButtonVariant::from(variant.key()), variant);
        }

        for size in ButtonSize::ALL {
            assert_eq!(ButtonSize::from(size.key()), size);
        }
    }

    #[test]
    fn test_unknown_keys_fall_back_to_default() {
        assert_eq!(ButtonVariant::from("destructive"), ButtonVariant::Default);
        assert_eq!(ButtonVariant::from(""), ButtonVariant::Default);
        assert_eq!(ButtonSize::from("xl"), ButtonSize::Default);
        assert_eq!(ButtonSize::from("SM"), ButtonSize::Default);
    }

    #[test]
    fn test_deserialize_from_key() {
        let variant: ButtonVariant = serde_json::from_str("\"ghost\"").unwrap();
        assert_eq!(variant, ButtonVariant::Ghost);

        let size: ButtonSize = serde_json::from_str("\"huge\"").unwrap();
        assert_eq!(size, ButtonSize::Default);
    }
}
