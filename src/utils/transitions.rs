use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::{Transition, WindowUseTransition};

use crate::ElementIdExt;

/// A 0..1 transition tracking a boolean flag, keyed off `base_id` and `suffix`.
///
/// The goal is updated on every render and the transition entity is notified
/// when it changes so animation frames get scheduled. Read the current value
/// with `*transition.evaluate(window, cx)`.
pub fn flag_transition(
    base_id: &ElementId,
    suffix: &'static str,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    flag: bool,
) -> Transition<f32> {
    let goal = flag as u8 as f32;

    let transition = window
        .use_keyed_transition(base_id.with_suffix(suffix), cx, duration, |_window, _cx| {
            goal
        })
        .with_easing(ease_out_quint());

    if transition.read_goal(cx) != &goal {
        transition.update(cx, |this, cx| {
            *this = goal;
            cx.notify();
        });
    }

    transition
}

pub fn checked_transition(
    base_id: &ElementId,
    window: &mut Window,
    cx: &mut App,
    is_checked: bool,
) -> Transition<f32> {
    flag_transition(
        base_id,
        "state:transition:checked",
        window,
        cx,
        Duration::from_millis(200),
        is_checked,
    )
}

pub fn focus_transition(
    base_id: &ElementId,
    window: &mut Window,
    cx: &mut App,
    is_focused: bool,
) -> Transition<f32> {
    flag_transition(
        base_id,
        "state:transition:focus",
        window,
        cx,
        Duration::from_millis(365),
        is_focused,
    )
}

/// Maps `value` from one range onto another.
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    (value - from_min) / (from_max - from_min) * (to_max - to_min) + to_min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_function() {
        assert_eq!(remap(0.0, 0.0, 1.0, 0.0, 100.0), 0.0);
        assert_eq!(remap(0.5, 0.0, 1.0, 0.0, 100.0), 50.0);
        assert_eq!(remap(1.0, 0.0, 1.0, 0.0, 100.0), 100.0);

        assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
        assert_eq!(remap(0.0, -1.0, 1.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_remap_thumb_travel() {
        // Switch thumb: 2px inset at rest, 22px when fully checked.
        assert_eq!(remap(0.0, 0.0, 1.0, 2.0, 22.0), 2.0);
        assert_eq!(remap(1.0, 0.0, 1.0, 2.0, 22.0), 22.0);
    }
}
