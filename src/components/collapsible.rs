use std::rc::Rc;

use gpui::{
    AnyElement, App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, Rgba, StatefulInteractiveElement, StyleRefinement, Styled, Window,
    prelude::FluentBuilder,
};
use smallvec::SmallVec;

use crate::{
    primitives::{DisclosureState, FocusRing},
    theme::{
        ThemeBackgroundKind, ThemeExt, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind,
        ThemeTextSizeKind,
    },
    utils::{ElementIdExt, compose_styles, styled_div, with_debug_selector},
};

type OnOpenChangeHandler = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

/// A disclosure region whose open flag is owned by the caller.
///
/// The root never toggles itself. Parts passed through [`Collapsible::trigger`]
/// and [`Collapsible::content`] receive the root's `open` flag, and the trigger
/// falls back to the root's `on_open_change` when it has no handler of its own.
/// Parts added as plain children must be wired by the caller.
#[derive(IntoElement)]
pub struct Collapsible {
    open: bool,
    on_open_change: Option<Rc<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
    trigger: Option<CollapsibleTrigger>,
    content: Option<CollapsibleContent>,
    children: SmallVec<[AnyElement; 2]>,
    style: StyleRefinement,
}

impl Default for Collapsible {
    fn default() -> Self {
        Self::new()
    }
}

impl Collapsible {
    pub fn new() -> Self {
        Self {
            open: false,
            on_open_change: None,
            trigger: None,
            content: None,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Called with the requested open state when the root's trigger is activated.
    pub fn on_open_change(
        mut self,
        on_open_change: impl Fn(&bool, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_open_change = Some(Rc::new(on_open_change));
        self
    }

    /// Rendered first, before any children.
    pub fn trigger(mut self, trigger: CollapsibleTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Rendered last, after any children.
    pub fn content(mut self, content: CollapsibleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn data_state(&self) -> DisclosureState {
        self.open.into()
    }

    fn wire_trigger(&self, trigger: CollapsibleTrigger) -> CollapsibleTrigger {
        let mut trigger = trigger.open(self.open);

        if trigger.on_open_change.is_none()
            && let Some(on_open_change) = self.on_open_change.clone()
        {
            trigger = trigger.on_open_change(move |open, window, cx| {
                (on_open_change)(open, window, cx)
            });
        }

        trigger
    }
}

impl RenderOnce for Collapsible {
    fn render(mut self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let base = StyleRefinement::default()
            .flex()
            .flex_col()
            .gap(ThemeLayoutPaddingKind::Sm.resolve(cx));

        let trigger = self
            .trigger
            .take()
            .map(|trigger| self.wire_trigger(trigger));
        let content = self
            .content
            .take()
            .map(|content| content.open(self.open));

        styled_div(&compose_styles([&base, &self.style]))
            .children(trigger)
            .children(self.children)
            .children(content)
    }
}

crate::impl_styled_parent!(Collapsible);

/// Toggles a caller-owned open flag.
#[derive(IntoElement)]
pub struct CollapsibleTrigger {
    id: ElementId,
    open: bool,
    disabled: bool,
    show_indicator: bool,
    on_open_change: Option<OnOpenChangeHandler>,
    children: SmallVec<[AnyElement; 2]>,
    style: StyleRefinement,
}

impl CollapsibleTrigger {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            open: false,
            disabled: false,
            show_indicator: true,
            on_open_change: None,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether the chevron is drawn after the children. On by default.
    pub fn indicator(mut self, show_indicator: bool) -> Self {
        self.show_indicator = show_indicator;
        self
    }

    /// Called with the requested open state each time the trigger is activated.
    pub fn on_open_change(
        mut self,
        on_open_change: impl Fn(&bool, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_open_change = Some(Box::new(on_open_change));
        self
    }

    pub fn data_state(&self) -> DisclosureState {
        self.open.into()
    }

    /// Asks the owner to flip `open`. Does nothing without a handler.
    fn handle_open_change(
        open: bool,
        on_open_change: Option<&OnOpenChangeHandler>,
        window: &mut Window,
        cx: &mut App,
    ) {
        let Some(on_open_change) = on_open_change else {
            return;
        };

        let requested = !open;
        tracing::debug!(open = requested, "collapsible open change requested");
        (on_open_change)(&requested, window, cx);
    }
}

impl RenderOnce for CollapsibleTrigger {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let corner_radius = ThemeLayoutCornerRadiiKind::Md.resolve(cx);
        let hover_background = ThemeBackgroundKind::Secondary.resolve(cx);
        let secondary_text_color = cx.get_theme().variants.active(cx).colors.text.secondary;

        let base = StyleRefinement::default()
            .relative()
            .flex()
            .items_center()
            .justify_between()
            .gap(ThemeLayoutPaddingKind::Sm.resolve(cx))
            .px(ThemeLayoutPaddingKind::Md.resolve(cx))
            .py(ThemeLayoutPaddingKind::Sm.resolve(cx))
            .rounded(corner_radius)
            .text_size(ThemeTextSizeKind::Body.resolve(cx))
            .font_weight(ThemeTextSizeKind::HeadingMd.weight(cx));
        let style = compose_styles([&base, &self.style]);

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();

        let is_disabled = self.disabled;
        let is_open = self.open;

        if is_disabled && focus_handle.is_focused(window) {
            window.blur();
        }

        styled_div(&style)
            .id(self.id.clone())
            .map(|this| with_debug_selector(this, "collapsible-trigger"))
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
            .when(self.show_indicator, |this| {
                this.child(Self::indicator_element(is_open, secondary_text_color))
            })
            .when(is_disabled, |this| this.opacity(0.5))
            .when(!is_disabled, |this| {
                let on_open_change = self.on_open_change;

                this.hover(move |this| this.bg(hover_background))
                    .on_click(move |_event, window, cx| {
                        window.prevent_default();
                        cx.stop_propagation();

                        Self::handle_open_change(is_open, on_open_change.as_ref(), window, cx);
                    })
                    .track_focus(&focus_handle)
            })
    }
}

impl CollapsibleTrigger {
    #[cfg(feature = "assets")]
    fn indicator_element(is_open: bool, color: Rgba) -> AnyElement {
        use std::f32::consts::PI;

        use gpui::{Radians, Transformation, px, svg};

        svg()
            .path(crate::DashkitIconKind::ChevronDown.path())
            .flex_none()
            .size(px(16.))
            .text_color(color)
            .when(is_open, |this| {
                this.with_transformation(Transformation::rotate(Radians(PI)))
            })
            .into_any_element()
    }

    // Without bundled icons the indicator falls back to a text glyph.
    #[cfg(not(feature = "assets"))]
    fn indicator_element(is_open: bool, color: Rgba) -> AnyElement {
        gpui::div()
            .flex_none()
            .text_color(color)
            .child(if is_open { "-" } else { "+" })
            .into_any_element()
    }
}

crate::impl_styled_parent!(CollapsibleTrigger);

/// Children shown only while the caller-owned flag is open.
#[derive(IntoElement)]
pub struct CollapsibleContent {
    open: bool,
    children: SmallVec<[AnyElement; 2]>,
    style: StyleRefinement,
}

impl Default for CollapsibleContent {
    fn default() -> Self {
        Self::new()
    }
}

impl CollapsibleContent {
    pub fn new() -> Self {
        Self {
            open: false,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn data_state(&self) -> DisclosureState {
        self.open.into()
    }
}

impl RenderOnce for CollapsibleContent {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        if !self.open {
            return gpui::Empty.into_any_element();
        }

        let base = StyleRefinement::default()
            .flex()
            .flex_col()
            .gap(ThemeLayoutPaddingKind::Sm.resolve(cx));

        with_debug_selector(
            styled_div(&compose_styles([&base, &self.style])),
            "collapsible-content",
        )
        .children(self.children)
        .into_any_element()
    }
}

crate::impl_styled_parent!(CollapsibleContent);
