use gpui::{App, Window};

/// How a component's click handler treats the underlying click event.
///
/// By default the event is consumed: `cx.stop_propagation()` and
/// `window.prevent_default()` are both called before the component's callback runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickBehavior {
    /// Let the click bubble up to parent elements.
    pub allow_propagation: bool,
    /// Keep the platform default (e.g. focusing the clicked element).
    pub allow_default: bool,
}

impl ClickBehavior {
    pub fn apply(&self, window: &mut Window, cx: &mut App) {
        if !self.allow_default {
            window.prevent_default();
        }
        if !self.allow_propagation {
            cx.stop_propagation();
        }
    }
}

/// Opt-outs for components that consume their click events.
pub trait ClickBehaviorExt: Sized {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior;

    /// Lets clicks on this component reach parent click handlers too.
    fn allow_click_propagation(mut self) -> Self {
        self.click_behavior_mut().allow_propagation = true;
        self
    }

    /// Keeps the default click behavior, such as moving focus to the component.
    fn allow_default_click_behaviour(mut self) -> Self {
        self.click_behavior_mut().allow_default = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Clickable(ClickBehavior);

    impl ClickBehaviorExt for Clickable {
        fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
            &mut self.0
        }
    }

    #[test]
    fn test_defaults_consume_the_click() {
        let behavior = ClickBehavior::default();
        assert!(!behavior.allow_propagation);
        assert!(!behavior.allow_default);
    }

    #[test]
    fn test_opt_outs_are_independent() {
        let clickable = Clickable(ClickBehavior::default()).allow_click_propagation();
        assert_eq!(
            clickable.0,
            ClickBehavior {
                allow_propagation: true,
                allow_default: false
            }
        );

        let clickable = clickable.allow_default_click_behaviour();
        assert!(clickable.0.allow_propagation && clickable.0.allow_default);
    }
}
