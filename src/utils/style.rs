use gpui::{Div, Refineable, StyleRefinement, div, prelude::FluentBuilder};

/// Layers style bundles on top of each other. Later layers win.
pub fn compose_styles<'a>(layers: impl IntoIterator<Item = &'a StyleRefinement>) -> StyleRefinement {
    let mut composed = StyleRefinement::default();

    for layer in layers {
        composed.refine(layer);
    }

    composed
}

/// A `div` carrying the given style.
pub fn styled_div(style: &StyleRefinement) -> Div {
    div().map(|mut this| {
        gpui::Styled::style(&mut this).refine(style);
        this
    })
}

/// Implements `Styled` and `ParentElement` for a component with
/// `style: StyleRefinement` and `children: SmallVec<[AnyElement; N]>` fields.
#[macro_export]
macro_rules! impl_styled_parent {
    ( $( $ty:ty ),+ $(,)? ) => {
        $(
            impl gpui::Styled for $ty {
                fn style(&mut self) -> &mut gpui::StyleRefinement {
                    &mut self.style
                }
            }

            impl gpui::ParentElement for $ty {
                fn extend(&mut self, elements: impl IntoIterator<Item = gpui::AnyElement>) {
                    self.children.extend(elements);
                }
            }
        )+
    };
}
