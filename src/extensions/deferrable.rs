use gpui::{AnyElement, IntoElement, deferred};

/// Configuration for deferred painting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeferredConfig {
    pub enabled: bool,
    /// Higher priority elements are painted later.
    pub priority: Option<usize>,
}

impl Default for DeferredConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: None,
        }
    }
}

impl DeferredConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            priority: None,
        }
    }

    pub fn priority(priority: usize) -> Self {
        Self {
            enabled: true,
            priority: Some(priority),
        }
    }
}

/// Components whose output floats above their siblings (tooltips, popovers).
///
/// Deferred elements keep their layout position but are painted after
/// the rest of the window.
pub trait Deferrable: Sized {
    const DEFAULT_PRIORITY: usize = 0;

    fn deferred_config(&self) -> &DeferredConfig;

    fn deferred_config_mut(&mut self) -> &mut DeferredConfig;

    fn deferred(mut self, enabled: bool) -> Self {
        self.deferred_config_mut().enabled = enabled;
        self
    }

    fn deferred_priority(mut self, priority: usize) -> Self {
        *self.deferred_config_mut() = DeferredConfig::priority(priority);
        self
    }

    fn apply_deferred(&self, element: impl IntoElement) -> AnyElement {
        let config = self.deferred_config();

        if config.enabled {
            let priority = config.priority.unwrap_or(Self::DEFAULT_PRIORITY);
            deferred(element).priority(priority).into_any_element()
        } else {
            element.into_any_element()
        }
    }
}
