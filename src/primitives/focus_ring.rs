use gpui::{ElementId, FocusHandle, IntoElement, Pixels, RenderOnce, div, prelude::*, px};

use crate::{
    theme::ThemeExt,
    utils::{RgbaExt, focus_transition},
};

const RING_WIDTH: f32 = 2.;
const RING_OFFSET: f32 = 2.;

/// A ring drawn around its parent while `focus_handle` is focused.
///
/// The parent must be positioned (the ring is absolutely placed around it).
#[derive(IntoElement)]
pub struct FocusRing {
    id: ElementId,
    focus_handle: FocusHandle,
    corner_radius: Pixels,
}

impl FocusRing {
    pub fn new(id: impl Into<ElementId>, focus_handle: FocusHandle) -> Self {
        Self {
            id: id.into(),
            focus_handle,
            corner_radius: px(8.),
        }
    }

    /// Corner radius of the element the ring surrounds.
    pub fn rounded(mut self, corner_radius: Pixels) -> Self {
        self.corner_radius = corner_radius;
        self
    }
}

impl RenderOnce for FocusRing {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let ring_color = cx.get_theme().variants.active(cx).colors.accent.primary;
        let is_focused = self.focus_handle.is_focused(window);

        let ring_transition = focus_transition(&self.id, window, cx, is_focused);
        let ring_progress = *ring_transition.evaluate(window, cx);
        let inset = px(-(RING_WIDTH + RING_OFFSET));

        div()
            .absolute()
            .top(inset)
            .bottom(inset)
            .left(inset)
            .right(inset)
            .border_2()
            .rounded(self.corner_radius + px(RING_WIDTH + RING_OFFSET))
            .border_color(ring_color.alpha(ring_progress * 0.5))
    }
}
