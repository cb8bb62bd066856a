//! A hover/focus tooltip made of three parts.
//!
//! [`Tooltip`] owns the visibility state and hands a [`TooltipContext`] to its
//! [`TooltipTrigger`] and [`TooltipContent`]. Either part rendered on its own
//! panics with a [`TooltipError`].

use std::time::Duration;

use gpui::{
    AnyElement, App, ElementId, FocusHandle, InteractiveElement, IntoElement, ParentElement, Pixels,
    RenderOnce, StatefulInteractiveElement, StyleRefinement, Styled, Window, div,
    prelude::FluentBuilder, px, relative,
};
use smallvec::SmallVec;

use crate::{
    extensions::deferrable::{Deferrable, DeferredConfig},
    theme::{ThemeExt, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind, ThemeTextSizeKind},
    utils::{ElementIdExt, compose_styles, styled_div, with_debug_selector},
};

mod state;
pub use state::*;

const DEFAULT_DELAY: Duration = Duration::from_millis(700);
const NUB_SIZE: f32 = 6.;

/// Which side of the trigger the content appears on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipSide {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(IntoElement)]
pub struct Tooltip {
    id: ElementId,
    trigger: Option<TooltipTrigger>,
    content: Option<TooltipContent>,
    delay_duration: Duration,
    side: TooltipSide,
    side_offset: Pixels,
    style: StyleRefinement,
}

impl Tooltip {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            trigger: None,
            content: None,
            delay_duration: DEFAULT_DELAY,
            side: TooltipSide::default(),
            side_offset: px(4.),
            style: StyleRefinement::default(),
        }
    }

    pub fn trigger(mut self, trigger: TooltipTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn content(mut self, content: TooltipContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Stored for API compatibility. The content still shows and hides immediately.
    pub fn delay_duration(mut self, delay_duration: Duration) -> Self {
        self.delay_duration = delay_duration;
        self
    }

    pub fn get_delay_duration(&self) -> Duration {
        self.delay_duration
    }

    pub fn side(mut self, side: TooltipSide) -> Self {
        self.side = side;
        self
    }

    /// Gap between the trigger and the content.
    pub fn side_offset(mut self, side_offset: impl Into<Pixels>) -> Self {
        self.side_offset = side_offset.into();
        self
    }
}

impl RenderOnce for Tooltip {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let context = TooltipContext::from_window(&self.id, window, cx);

        let base = StyleRefinement::default().relative().flex().flex_none();

        styled_div(&compose_styles([&base, &self.style]))
            .when_some(self.trigger, |this, trigger| {
                this.child(trigger.with_context(context.clone()))
            })
            .when_some(self.content, |this, content| {
                this.child(
                    content
                        .with_context(context.clone())
                        .placement(self.side, self.side_offset),
                )
            })
    }
}

impl Styled for Tooltip {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

/// The region that shows the tooltip while hovered or focused.
#[derive(IntoElement)]
pub struct TooltipTrigger {
    id: ElementId,
    context: Option<TooltipContext>,
    focus_handle: Option<FocusHandle>,
    children: SmallVec<[AnyElement; 1]>,
    style: StyleRefinement,
}

impl TooltipTrigger {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            context: None,
            focus_handle: None,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    /// Tracks focus with a caller-owned handle instead of a keyed one.
    pub fn focus_handle(mut self, focus_handle: FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle);
        self
    }

    pub(crate) fn with_context(mut self, context: TooltipContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn context(&self) -> Result<&TooltipContext, TooltipError> {
        self.context
            .as_ref()
            .ok_or(TooltipError::TriggerOutsideTooltip)
    }
}

impl RenderOnce for TooltipTrigger {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let context = match self.context() {
            Ok(context) => context.clone(),
            Err(err) => panic!("{err}"),
        };

        let focus_handle = self
            .focus_handle
            .as_ref()
            .unwrap_or_else(|| {
                window
                    .use_keyed_state(
                        self.id.with_suffix("state:focus_handle"),
                        cx,
                        |_window, cx| cx.focus_handle().tab_stop(true),
                    )
                    .read(cx)
            })
            .clone();

        // Focus changes are picked up on the render that follows them. The
        // dispatch notifies the visibility entity mid-render, so the content
        // catches up one frame later.
        let was_focused_state =
            window.use_keyed_state(self.id.with_suffix("state:focused"), cx, |_window, _cx| {
                false
            });
        let is_focused = focus_handle.is_focused(window);

        if *was_focused_state.read(cx) != is_focused {
            was_focused_state.update(cx, |this, _cx| *this = is_focused);

            context.dispatch(
                if is_focused {
                    TooltipTriggerEvent::Focus
                } else {
                    TooltipTriggerEvent::Blur
                },
                cx,
            );
        }

        styled_div(&self.style)
            .id(self.id.clone())
            .map(|this| with_debug_selector(this, "tooltip-trigger"))
            .track_focus(&focus_handle)
            .on_hover(move |hovered, _window, cx| {
                context.dispatch(
                    if *hovered {
                        TooltipTriggerEvent::PointerEnter
                    } else {
                        TooltipTriggerEvent::PointerLeave
                    },
                    cx,
                );
            })
            .children(self.children)
    }
}

crate::impl_styled_parent!(TooltipTrigger);

/// The floating bubble. Renders nothing while the tooltip is hidden.
#[derive(IntoElement)]
pub struct TooltipContent {
    context: Option<TooltipContext>,
    side: TooltipSide,
    side_offset: Pixels,
    deferred_config: DeferredConfig,
    children: SmallVec<[AnyElement; 1]>,
    style: StyleRefinement,
}

impl Default for TooltipContent {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipContent {
    pub fn new() -> Self {
        Self {
            context: None,
            side: TooltipSide::default(),
            side_offset: px(4.),
            deferred_config: DeferredConfig::default(),
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub(crate) fn with_context(mut self, context: TooltipContext) -> Self {
        self.context = Some(context);
        self
    }

    fn placement(mut self, side: TooltipSide, side_offset: Pixels) -> Self {
        self.side = side;
        self.side_offset = side_offset;
        self
    }

    pub fn context(&self) -> Result<&TooltipContext, TooltipError> {
        self.context
            .as_ref()
            .ok_or(TooltipError::ContentOutsideTooltip)
    }

    fn bubble_style(&self, cx: &App) -> StyleRefinement {
        let colors = &cx.get_theme().variants.active(cx).colors;

        let base = StyleRefinement::default()
            .flex()
            .flex_none()
            .px(ThemeLayoutPaddingKind::Md.resolve(cx))
            .py(ThemeLayoutPaddingKind::Sm.resolve(cx) / 2.)
            .rounded(ThemeLayoutCornerRadiiKind::Sm.resolve(cx))
            .bg(colors.accent.primary)
            .text_color(colors.text.on_accent)
            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
            .whitespace_nowrap();

        compose_styles([&base, &self.style])
    }

    /// Absolute container that puts the bubble on `side` of the trigger.
    fn anchor(&self) -> gpui::Div {
        let offset = self.side_offset;
        let anchor = div().absolute().flex().items_center();

        match self.side {
            TooltipSide::Top => anchor
                .bottom(relative(1.))
                .left_0()
                .right_0()
                .flex_col_reverse()
                .pb(offset),
            TooltipSide::Bottom => anchor
                .top(relative(1.))
                .left_0()
                .right_0()
                .flex_col()
                .pt(offset),
            TooltipSide::Left => anchor
                .right(relative(1.))
                .top_0()
                .bottom_0()
                .flex_row_reverse()
                .pr(offset),
            TooltipSide::Right => anchor
                .left(relative(1.))
                .top_0()
                .bottom_0()
                .flex_row()
                .pl(offset),
        }
    }
}

impl RenderOnce for TooltipContent {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let context = match self.context() {
            Ok(context) => context,
            Err(err) => panic!("{err}"),
        };

        if !context.is_open(cx) {
            return gpui::Empty.into_any_element();
        }

        let bubble_style = self.bubble_style(cx);
        let nub_color = cx.get_theme().variants.active(cx).colors.accent.primary;
        let anchor = self.anchor();

        let content = anchor
            .child(
                // The nub sits between the trigger and the bubble.
                div()
                    .flex_none()
                    .size(px(NUB_SIZE))
                    .rounded(px(1.))
                    .bg(nub_color),
            )
            .child(styled_div(&bubble_style).children(self.children))
            .map(|this| with_debug_selector(this, "tooltip-content"));

        self.apply_deferred(content)
    }
}

impl Deferrable for TooltipContent {
    const DEFAULT_PRIORITY: usize = 1;

    fn deferred_config(&self) -> &DeferredConfig {
        &self.deferred_config
    }

    fn deferred_config_mut(&mut self) -> &mut DeferredConfig {
        &mut self.deferred_config
    }
}

crate::impl_styled_parent!(TooltipContent);

#[cfg(test)]
mod usage_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_orphan_parts_report_usage_errors() {
        assert_eq!(
            TooltipTrigger::new("trigger").context().err(),
            Some(TooltipError::TriggerOutsideTooltip)
        );
        assert_eq!(
            TooltipContent::new().context().err(),
            Some(TooltipError::ContentOutsideTooltip)
        );
    }

    #[test]
    fn test_delay_is_stored() {
        let tooltip = Tooltip::new("tooltip");
        assert_eq!(tooltip.get_delay_duration(), DEFAULT_DELAY);

        let tooltip = tooltip.delay_duration(Duration::ZERO);
        assert_eq!(tooltip.get_delay_duration(), Duration::ZERO);
    }
}
