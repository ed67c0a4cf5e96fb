use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    KeepObserving,
    Stop,
}

/// One-shot visibility flag: flips to visible on the first intersection and
/// stays there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, intersecting: bool) -> Observation {
        if intersecting {
            self.visible = true;
        }
        if self.visible {
            Observation::Stop
        } else {
            Observation::KeepObserving
        }
    }
}

/// Becomes `true` the first time the referenced element scrolls into view.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let latch = use_state(RevealLatch::default);

    {
        let latch = latch.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer_handle = None;
                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
                        let latch = latch.clone();
                        let mut local = *latch;
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                if local.observe(entry.is_intersecting()) == Observation::Stop {
                                    observer.unobserve(&entry.target());
                                    latch.set(local);
                                }
                            }
                        }
                    });

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&config::REVEAL_THRESHOLD.into());
                    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            observer_handle = Some((observer, callback));
                        }
                        Err(_) => {
                            // No observer support: show the section straight away.
                            log::warn!("IntersectionObserver unavailable, revealing immediately");
                            latch.set(RevealLatch { visible: true });
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = observer_handle {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    latch.is_visible()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_keeps_watching() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_visible());
        assert_eq!(latch.observe(false), Observation::KeepObserving);
        assert!(!latch.is_visible());
    }

    #[test]
    fn first_intersection_latches() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.observe(true), Observation::Stop);
        assert!(latch.is_visible());
    }

    #[test]
    fn never_reverts_to_hidden() {
        let mut latch = RevealLatch::default();
        latch.observe(true);
        for intersecting in [false, true, false, false] {
            assert_eq!(latch.observe(intersecting), Observation::Stop);
            assert!(latch.is_visible());
        }
    }
}
