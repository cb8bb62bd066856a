use gpui::{App, AppContext, ElementId, Entity, Window};
use thiserror::Error;

use crate::ElementIdExt;

/// Whether a tooltip's content is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipVisibility {
    #[default]
    Hidden,
    Shown,
}

/// Input observed on a tooltip trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipTriggerEvent {
    PointerEnter,
    PointerLeave,
    Focus,
    Blur,
}

impl TooltipVisibility {
    /// The state after `event`. Every event is accepted in every state.
    pub fn next(self, event: TooltipTriggerEvent) -> Self {
        match event {
            TooltipTriggerEvent::PointerEnter | TooltipTriggerEvent::Focus => Self::Shown,
            TooltipTriggerEvent::PointerLeave | TooltipTriggerEvent::Blur => Self::Hidden,
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown)
    }
}

impl From<bool> for TooltipVisibility {
    fn from(open: bool) -> Self {
        if open { Self::Shown } else { Self::Hidden }
    }
}

/// Raised when a tooltip part is rendered without an enclosing [`Tooltip`](super::Tooltip).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TooltipError {
    #[error("`TooltipTrigger` must be used within `Tooltip`")]
    TriggerOutsideTooltip,
    #[error("`TooltipContent` must be used within `Tooltip`")]
    ContentOutsideTooltip,
}

/// Visibility handle shared by one tooltip's trigger and content.
///
/// The root creates it from window-keyed state, so it lives exactly as long
/// as the tooltip keeps being rendered and starts hidden on remount.
#[derive(Clone)]
pub struct TooltipContext {
    visibility: Entity<TooltipVisibility>,
}

impl TooltipContext {
    pub fn new(visibility: Entity<TooltipVisibility>) -> Self {
        Self { visibility }
    }

    /// The context keyed to the tooltip with the given id. Must be called while rendering.
    pub fn from_window(id: &ElementId, window: &mut Window, cx: &mut App) -> Self {
        Self::new(window.use_keyed_state(
            id.with_suffix("state:visibility"),
            cx,
            |_window, _cx| TooltipVisibility::Hidden,
        ))
    }

    /// A detached context, for driving a tooltip from outside a render pass.
    pub fn detached(cx: &mut App) -> Self {
        Self::new(cx.new(|_cx| TooltipVisibility::Hidden))
    }

    pub fn visibility(&self, cx: &App) -> TooltipVisibility {
        *self.visibility.read(cx)
    }

    pub fn is_open(&self, cx: &App) -> bool {
        self.visibility(cx).is_shown()
    }

    pub fn set_open(&self, open: bool, cx: &mut App) {
        self.replace(open.into(), cx);
    }

    /// Applies a trigger event. Returns whether the visibility changed.
    pub fn dispatch(&self, event: TooltipTriggerEvent, cx: &mut App) -> bool {
        let next = self.visibility(cx).next(event);
        let changed = self.replace(next, cx);

        tracing::trace!(?event, visibility = ?next, changed, "tooltip trigger event");
        changed
    }

    fn replace(&self, visibility: TooltipVisibility, cx: &mut App) -> bool {
        let changed = self.visibility.update(cx, |this, _cx| {
            let changed = *this != visibility;
            *this = visibility;
            changed
        });

        if changed {
            cx.notify(self.visibility.entity_id());
        }

        changed
    }
}

#[cfg(test)]
mod transition_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use TooltipTriggerEvent::*;
    use TooltipVisibility::*;

    #[test]
    fn test_transition_table() {
        for state in [Hidden, Shown] {
            assert_eq!(state.next(PointerEnter), Shown);
            assert_eq!(state.next(Focus), Shown);
            assert_eq!(state.next(PointerLeave), Hidden);
            assert_eq!(state.next(Blur), Hidden);
        }
    }

    #[test]
    fn test_starts_hidden() {
        assert_eq!(TooltipVisibility::default(), Hidden);
    }

    #[test]
    fn test_error_messages_name_the_part() {
        assert!(
            TooltipError::TriggerOutsideTooltip
                .to_string()
                .contains("TooltipTrigger")
        );
        assert!(
            TooltipError::ContentOutsideTooltip
                .to_string()
                .contains("TooltipContent")
        );
    }
}
