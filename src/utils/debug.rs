use gpui::InteractiveElement;

/// Tags an element so window tests can find its painted bounds with
/// `VisualTestContext::debug_bounds`. A no-op without `test-support`.
pub fn with_debug_selector<E: InteractiveElement>(element: E, selector: &'static str) -> E {
    #[cfg(feature = "test-support")]
    let element = element.debug_selector(|| selector.to_string());

    #[cfg(not(feature = "test-support"))]
    let _ = selector;

    element
}
