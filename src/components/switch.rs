use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, StyleRefinement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    primitives::{CheckedState, FocusRing},
    theme::{ThemeExt, ThemeLayerKind},
    utils::{
        ElementIdExt, RgbaExt, checked_transition, compose_styles, remap, styled_div,
        with_debug_selector,
    },
};

type OnCheckedChangeHandler = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

const TRACK_WIDTH: f32 = 44.;
const TRACK_HEIGHT: f32 = 24.;
const THUMB_SIZE: f32 = 20.;
const THUMB_INSET: f32 = 2.;

/// A two-state toggle whose checked flag is owned by the caller.
#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    layer: ThemeLayerKind,
    checked: bool,
    disabled: bool,
    on_checked_change: Option<OnCheckedChangeHandler>,
    style: StyleRefinement,
}

impl Switch {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            layer: ThemeLayerKind::Tertiary,
            checked: false,
            disabled: false,
            on_checked_change: None,
            style: StyleRefinement::default(),
        }
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the requested checked state each time the switch is clicked.
    pub fn on_checked_change(
        mut self,
        on_checked_change: impl Fn(&bool, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_checked_change = Some(Box::new(on_checked_change));
        self
    }

    pub fn data_state(&self) -> CheckedState {
        self.checked.into()
    }

    fn handle_checked_change(
        checked: bool,
        on_checked_change: Option<&OnCheckedChangeHandler>,
        window: &mut Window,
        cx: &mut App,
    ) {
        let Some(on_checked_change) = on_checked_change else {
            return;
        };

        let requested = !checked;
        tracing::debug!(checked = requested, "switch checked change requested");
        (on_checked_change)(&requested, window, cx);
    }
}

impl RenderOnce for Switch {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let accent_color = cx.get_theme().variants.active(cx).colors.accent.primary;
        let thumb_color = cx.get_theme().variants.active(cx).colors.text.primary;
        let track_color = self.layer.resolve(cx);
        let border_color = self.layer.next().resolve(cx);

        let base = StyleRefinement::default()
            .relative()
            .flex_none()
            .w(px(TRACK_WIDTH))
            .h(px(TRACK_HEIGHT));
        let style = compose_styles([&base, &self.style]);

        let checked_transition = checked_transition(&self.id, window, cx, self.checked);
        let checked_delta = *checked_transition.evaluate(window, cx);
        let thumb_offset = remap(
            checked_delta,
            0.,
            1.,
            THUMB_INSET,
            TRACK_WIDTH - THUMB_SIZE - THUMB_INSET,
        );

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();

        let is_disabled = self.disabled;
        let is_checked = self.checked;

        if is_disabled && focus_handle.is_focused(window) {
            window.blur();
        }

        styled_div(&style)
            .id(self.id.clone())
            .map(|this| with_debug_selector(this, "switch"))
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .when(is_disabled, |this| this.opacity(0.5))
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle.clone())
                    .rounded(px(TRACK_HEIGHT / 2.)),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(px(TRACK_HEIGHT / 2.))
                    .bg(track_color)
                    .border(px(1.))
                    .border_inside()
                    .border_color(border_color),
            )
            .child(
                div()
                    .absolute()
                    .size_full()
                    .rounded(px(TRACK_HEIGHT / 2.))
                    .bg(accent_color.alpha(checked_delta)),
            )
            .child(
                div()
                    .absolute()
                    .top(px(THUMB_INSET))
                    .size(px(THUMB_SIZE))
                    .rounded_full()
                    .bg(thumb_color)
                    .shadow_sm()
                    .left(px(thumb_offset)),
            )
            .when(!is_disabled, |this| {
                let on_checked_change = self.on_checked_change;

                this.on_mouse_down(gpui::MouseButton::Left, |_event, window, _cx| {
                    // Keeps the focus ring for keyboard focus only.
                    window.prevent_default();
                })
                .on_click(move |_event, window, cx| {
                    window.prevent_default();
                    cx.stop_propagation();

                    Self::handle_checked_change(
                        is_checked,
                        on_checked_change.as_ref(),
                        window,
                        cx,
                    );
                })
                .track_focus(&focus_handle)
            })
    }
}

impl Styled for Switch {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}


#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{Context, Entity, Modifiers, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_switch_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let switch = Switch::new("test-switch");
            assert!(!switch.checked, "Switch should start unchecked");
            assert!(!switch.disabled, "Switch should start enabled");
            assert!(switch.on_checked_change.is_none());
        });
    }

    #[gpui::test]
    fn test_switch_builders(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let switch = Switch::new("test-switch")
                .checked(true)
                .disabled(true)
                .layer(ThemeLayerKind::Secondary)
                .on_checked_change(|_checked, _window, _cx| {});

            assert!(switch.checked);
            assert!(switch.disabled);
            assert_eq!(switch.layer, ThemeLayerKind::Secondary);
            assert!(switch.on_checked_change.is_some());
        });
    }

    #[gpui::test]
    fn test_click_requests_negation_exactly_once(cx: &mut TestAppContext) {
        let (view, cx) = open_view(cx, SwitchView::default());

        click_switch(cx);
        view.update(cx, |view, _cx| {
            assert_eq!(view.requests, vec![true]);
            assert!(view.checked);
        });

        click_switch(cx);
        view.update(cx, |view, _cx| {
            assert_eq!(view.requests, vec![true, false]);
            assert!(!view.checked);
        });
    }

    #[gpui::test]
    fn test_click_does_not_reach_parent(cx: &mut TestAppContext) {
        let (view, cx) = open_view(cx, SwitchView::default());

        click_switch(cx);
        click_switch(cx);

        view.update(cx, |view, _cx| {
            assert_eq!(view.requests.len(), 2);
            assert_eq!(view.parent_clicks, 0);
        });
    }

    #[gpui::test]
    fn test_disabled_switch_ignores_clicks(cx: &mut TestAppContext) {
        let (view, cx) = open_view(
            cx,
            SwitchView {
                checked: true,
                disabled: true,
                ..Default::default()
            },
        );

        click_switch(cx);
        click_switch(cx);

        view.update(cx, |view, _cx| {
            assert!(view.requests.is_empty());
            assert!(view.checked);
        });
    }

    #[gpui::test]
    fn test_render_never_invokes_handler(cx: &mut TestAppContext) {
        let (view, cx) = open_view(cx, SwitchView::default());

        for _ in 0..3 {
            view.update(cx, |_view, cx| cx.notify());
            cx.run_until_parked();
        }

        view.update(cx, |view, _cx| {
            assert!(view.requests.is_empty(), "Rendering alone must not toggle");
            assert!(!view.checked);
        });
    }

    fn open_view(
        cx: &mut TestAppContext,
        view: SwitchView,
    ) -> (Entity<SwitchView>, &mut VisualTestContext) {
        cx.update(|cx| cx.set_theme(Theme::DEFAULT));
        let (entity, cx) = cx.add_window_view(|_window, _cx| view);
        cx.run_until_parked();
        (entity, cx)
    }

    fn click_switch(cx: &mut VisualTestContext) {
        let bounds = cx.debug_bounds("switch").expect("switch should be painted");
        cx.simulate_click(bounds.center(), Modifiers::none());
        cx.run_until_parked();
    }

    #[derive(Default)]
    struct SwitchView {
        checked: bool,
        disabled: bool,
        requests: Vec<bool>,
        parent_clicks: usize,
    }

    impl gpui::Render for SwitchView {
        fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
            let view = cx.entity().downgrade();
            let parent = view.clone();

            div()
                .id("parent")
                .size_full()
                .on_click(move |_event, _window, cx| {
                    parent
                        .update(cx, |view, _cx| view.parent_clicks += 1)
                        .ok();
                })
                .child(
                    Switch::new("notifications")
                        .checked(self.checked)
                        .disabled(self.disabled)
                        .on_checked_change(move |checked, _window, cx| {
                            let checked = *checked;
                            view.update(cx, |view, cx| {
                                view.checked = checked;
                                view.requests.push(checked);
                                cx.notify();
                            })
                            .ok();
                        }),
                )
        }
    }
}
