use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

/// Smoothly scroll the section with the given element id into view.
pub fn scroll_to_section(id: &str) {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("No section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Current vertical scroll offset of the window, 0 when unavailable.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// The header switches from transparent to solid past the threshold.
pub fn header_is_solid(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SOLID_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_past_threshold() {
        assert!(!header_is_solid(0.0));
        assert!(!header_is_solid(20.0));
        assert!(header_is_solid(20.5));
        assert!(header_is_solid(900.0));
    }
}
