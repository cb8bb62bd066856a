use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, StyleRefinement, Styled, Window,
};
use smallvec::SmallVec;

use crate::{
    theme::{
        ThemeExt, ThemeLayerKind, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind,
        ThemeTextSizeKind,
    },
    utils::{compose_styles, styled_div},
};

/// A bordered surface grouping related content.
#[derive(IntoElement)]
pub struct Card {
    layer: ThemeLayerKind,
    children: SmallVec<[AnyElement; 3]>,
    style: StyleRefinement,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            layer: ThemeLayerKind::Secondary,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    /// The surface the card is drawn with. Borders use the next layer up.
    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn composed_style(&self, cx: &App) -> StyleRefinement {
        let base = StyleRefinement::default()
            .flex()
            .flex_col()
            .gap(ThemeLayoutPaddingKind::Xl.resolve(cx))
            .py(ThemeLayoutPaddingKind::Xl.resolve(cx))
            .rounded(ThemeLayoutCornerRadiiKind::Lg.resolve(cx))
            .border_1()
            .border_color(self.layer.next().resolve(cx))
            .bg(self.layer.resolve(cx))
            .text_color(cx.get_theme().variants.active(cx).colors.text.primary);

        compose_styles([&base, &self.style])
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        styled_div(&self.composed_style(cx)).children(self.children)
    }
}

macro_rules! card_part {
    ( $( $(#[$meta:meta])* $name:ident => $style:expr ),+ $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(IntoElement)]
            pub struct $name {
                children: SmallVec<[AnyElement; 2]>,
                style: StyleRefinement,
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl $name {
                pub fn new() -> Self {
                    Self {
                        children: SmallVec::new(),
                        style: StyleRefinement::default(),
                    }
                }

                pub fn composed_style(&self, cx: &App) -> StyleRefinement {
                    let base_style: fn(&App) -> StyleRefinement = $style;
                    compose_styles([&base_style(cx), &self.style])
                }
            }

            impl RenderOnce for $name {
                fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
                    styled_div(&self.composed_style(cx)).children(self.children)
                }
            }

            crate::impl_styled_parent!($name);
        )+
    };
}

card_part! {
    /// Title and description block at the top of a card.
    CardHeader => |cx| {
        StyleRefinement::default()
            .flex()
            .flex_col()
            .gap(ThemeLayoutPaddingKind::Sm.resolve(cx) / 2.)
            .px(ThemeLayoutPaddingKind::Xl.resolve(cx))
    },
    CardTitle => |cx| {
        StyleRefinement::default()
            .text_size(ThemeTextSizeKind::HeadingMd.resolve(cx))
            .font_weight(ThemeTextSizeKind::HeadingMd.weight(cx))
            .line_height(gpui::relative(1.))
    },
    CardDescription => |cx| {
        StyleRefinement::default()
            .text_size(ThemeTextSizeKind::Body.resolve(cx))
            .text_color(cx.get_theme().variants.active(cx).colors.text.secondary)
    },
    CardContent => |cx| {
        StyleRefinement::default().px(ThemeLayoutPaddingKind::Xl.resolve(cx))
    },
    /// Action row at the bottom of a card.
    CardFooter => |cx| {
        StyleRefinement::default()
            .flex()
            .items_center()
            .gap(ThemeLayoutPaddingKind::Sm.resolve(cx))
            .px(ThemeLayoutPaddingKind::Xl.resolve(cx))
    },
}

crate::impl_styled_parent!(Card);

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemeBackgroundKind};
    use gpui::{AppContext, Length, TestAppContext, VisualTestContext, div, px};

    #[gpui::test]
    fn test_card_uses_layer_surface(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let style = Card::new().layer(ThemeLayerKind::Tertiary).composed_style(cx);
            let expected = gpui::Hsla::from(ThemeBackgroundKind::Quaternary.resolve(cx));

            assert!(style.border_color == Some(expected));
        });
    }

    #[gpui::test]
    fn test_parts_accept_passthrough(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let header = CardHeader::new().h(px(40.)).composed_style(cx);
            let footer = CardFooter::new().w(px(200.)).composed_style(cx);

            assert!(header.size.height == Some(Length::from(px(40.))));
            assert!(footer.size.width == Some(Length::from(px(200.))));
            assert!(
                footer.padding.left.is_some(),
                "Passthrough should merge with the base bundle"
            );
        });
    }

    #[gpui::test]
    fn test_card_tree_renders(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| CardView))
                .unwrap()
        });

        let mut cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }

    struct CardView;

    impl gpui::Render for CardView {
        fn render(
            &mut self,
            _window: &mut Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div().size_full().child(
                Card::new()
                    .w(px(320.))
                    .child(
                        CardHeader::new()
                            .child(CardTitle::new().child("Revenue"))
                            .child(CardDescription::new().child("Last 30 days")),
                    )
                    .child(CardContent::new().child("$12,400"))
                    .child(CardFooter::new().child("Updated just now")),
            )
        }
    }
}
