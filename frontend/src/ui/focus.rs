//! Keyboard focus plumbing for overlays.
//!
//! [`FocusHost`] abstracts "the document" so the dialog logic can run against
//! a fake in tests. [`FocusTrap`] is the ordered list of tab stops declared
//! when a dialog opens.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Interactive roles: links, buttons, form controls and explicit tab stops.
pub const FOCUSABLE_SELECTOR: &str =
    r#"a[href], button, input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

pub trait FocusHost {
    type Target: Clone + PartialEq;

    /// The element that currently holds keyboard focus.
    fn active(&self) -> Option<Self::Target>;

    /// Whether the element is still part of the document.
    fn is_attached(&self, target: &Self::Target) -> bool;

    fn focus(&self, target: &Self::Target);
}

/// The live browser document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomFocus;

impl FocusHost for DomFocus {
    type Target = HtmlElement;

    fn active(&self) -> Option<HtmlElement> {
        web_sys::window()?
            .document()?
            .active_element()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn is_attached(&self, target: &HtmlElement) -> bool {
        target.is_connected()
    }

    fn focus(&self, target: &HtmlElement) {
        let _ = target.focus();
    }
}

/// Interactive descendants of `container`, in document order.
pub fn focusable_descendants(container: &HtmlElement) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct FocusTrap<T> {
    stops: Vec<T>,
}

impl<T> Default for FocusTrap<T> {
    fn default() -> Self {
        Self { stops: Vec::new() }
    }
}

impl<T: PartialEq> FocusTrap<T> {
    pub fn new(stops: Vec<T>) -> Self {
        Self { stops }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Where Tab (or Shift+Tab when `backward`) should land from `current`.
    ///
    /// Wraps at both ends. A `current` that is not one of the stops enters
    /// the cycle at the first stop going forward and the last going back.
    /// Returns `None` only when there are no stops at all.
    pub fn next(&self, current: Option<&T>, backward: bool) -> Option<&T> {
        let len = self.stops.len();
        if len == 0 {
            return None;
        }
        let position = current.and_then(|c| self.stops.iter().position(|s| s == c));
        let index = match (position, backward) {
            (Some(i), false) => (i + 1) % len,
            (Some(i), true) => (i + len - 1) % len,
            (None, false) => 0,
            (None, true) => len - 1,
        };
        self.stops.get(index)
    }
}
