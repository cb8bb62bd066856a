use gpui::{
    AnyElement, App, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StyleRefinement, Styled, Window, prelude::FluentBuilder,
};
use smallvec::SmallVec;

use crate::{
    theme::{
        ThemeBackgroundKind, ThemeExt, ThemeLayoutPaddingKind, ThemeLayoutSizeKind,
        ThemeTextSizeKind,
    },
    utils::{compose_styles, styled_div},
};

macro_rules! table_part {
    ( $( $(#[$meta:meta])* $name:ident => $style:expr ),+ $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(IntoElement)]
            pub struct $name {
                children: SmallVec<[AnyElement; 4]>,
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

table_part! {
    /// Outer table container. Rows stack vertically and stretch to its width.
    Table => |cx| {
        StyleRefinement::default()
            .relative()
            .flex()
            .flex_col()
            .w_full()
            .overflow_hidden()
            .text_size(ThemeTextSizeKind::Body.resolve(cx))
            .text_color(cx.get_theme().variants.active(cx).colors.text.primary)
    },
    TableHeader => |cx| {
        StyleRefinement::default()
            .flex()
            .flex_col()
            .border_b_1()
            .border_color(ThemeBackgroundKind::Tertiary.resolve(cx))
    },
    TableBody => |_cx| StyleRefinement::default().flex().flex_col(),
    TableFooter => |cx| {
        StyleRefinement::default()
            .flex()
            .flex_col()
            .border_t_1()
            .border_color(ThemeBackgroundKind::Tertiary.resolve(cx))
            .bg(ThemeBackgroundKind::Secondary.resolve(cx))
            .font_weight(FontWeight::MEDIUM)
    },
    /// Column heading cell.
    TableHead => |cx| {
        StyleRefinement::default()
            .flex()
            .flex_1()
            .items_center()
            .h(ThemeLayoutSizeKind::Lg.resolve(cx))
            .px(ThemeLayoutPaddingKind::Sm.resolve(cx))
            .font_weight(FontWeight::MEDIUM)
            .text_color(cx.get_theme().variants.active(cx).colors.text.secondary)
            .whitespace_nowrap()
    },
    TableCell => |cx| {
        StyleRefinement::default()
            .flex()
            .flex_1()
            .items_center()
            .p(ThemeLayoutPaddingKind::Sm.resolve(cx))
    },
    /// Caption drawn below the table body.
    TableCaption => |cx| {
        StyleRefinement::default()
            .mt(ThemeLayoutPaddingKind::Lg.resolve(cx))
            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
            .text_color(cx.get_theme().variants.active(cx).colors.text.secondary)
    },
}

/// A row of [`TableHead`] or [`TableCell`] elements. Highlights on hover.
#[derive(IntoElement)]
pub struct TableRow {
    selected: bool,
    children: SmallVec<[AnyElement; 4]>,
    style: StyleRefinement,
}

impl Default for TableRow {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRow {
    pub fn new() -> Self {
        Self {
            selected: false,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn composed_style(&self, cx: &App) -> StyleRefinement {
        let mut base = StyleRefinement::default()
            .flex()
            .flex_row()
            .w_full()
            .border_b_1()
            .border_color(ThemeBackgroundKind::Tertiary.resolve(cx));

        if self.selected {
            base = base.bg(ThemeBackgroundKind::Tertiary.resolve(cx));
        }

        compose_styles([&base, &self.style])
    }
}

impl RenderOnce for TableRow {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let hover_background = ThemeBackgroundKind::Secondary.resolve(cx);

        styled_div(&self.composed_style(cx))
            .when(!self.selected, |this| {
                this.hover(move |this| this.bg(hover_background))
            })
            .children(self.children)
    }
}

crate::impl_styled_parent!(TableRow);
