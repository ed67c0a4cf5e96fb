//! Background scroll suppression shared by every overlay on the page.
//!
//! A single [`ScrollLock`] is created at the application root and handed to
//! overlays through a Yew context. Overlays never touch the body style
//! directly: they hold a [`ScrollLockGuard`] for as long as they are open, and
//! the surface is unlocked when the last guard is dropped.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::info;

/// Whatever actually stops the page from scrolling.
pub trait ScrollSurface {
    fn set_scroll_locked(&self, locked: bool);
}

/// Toggles `overflow: hidden` on `document.body`.
pub struct BodyOverflow;

impl ScrollSurface for BodyOverflow {
    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

struct LockState {
    holders: Cell<usize>,
    surface: Box<dyn ScrollSurface>,
}

impl LockState {
    fn release(&self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        if holders == 0 {
            info!("Scroll lock released");
            self.surface.set_scroll_locked(false);
        }
    }
}

#[derive(Clone)]
pub struct ScrollLock {
    state: Rc<LockState>,
}

impl ScrollLock {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            state: Rc::new(LockState {
                holders: Cell::new(0),
                surface: Box::new(surface),
            }),
        }
    }

    /// Lock scrolling until the returned guard is dropped.
    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.state.holders.get() + 1;
        self.state.holders.set(holders);
        if holders == 1 {
            info!("Scroll lock engaged");
            self.state.surface.set_scroll_locked(true);
        }
        ScrollLockGuard {
            state: Rc::clone(&self.state),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state.holders.get() > 0
    }

    pub fn holders(&self) -> usize {
        self.state.holders.get()
    }
}

impl PartialEq for ScrollLock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.state.holders.get())
            .finish()
    }
}

#[must_use = "scrolling is unlocked as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    state: Rc<LockState>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.state.release();
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollLockGuard")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every call the lock makes on its surface.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) calls: Rc<RefCell<Vec<bool>>>,
    }

    impl ScrollSurface for RecordingSurface {
        fn set_scroll_locked(&self, locked: bool) {
            self.calls.borrow_mut().push(locked);
        }
    }

    #[test]
    fn starts_unlocked() {
        let surface = RecordingSurface::default();
        let lock = ScrollLock::new(surface.clone());
        assert!(!lock.is_locked());
        assert_eq!(lock.holders(), 0);
        assert!(surface.calls.borrow().is_empty());
    }

    #[test]
    fn guard_drop_unlocks() {
        let surface = RecordingSurface::default();
        let lock = ScrollLock::new(surface.clone());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        drop(guard);

        assert!(!lock.is_locked());
        assert_eq!(*surface.calls.borrow(), vec![true, false]);
    }

    #[test]
    fn surface_only_sees_outer_transitions() {
        let surface = RecordingSurface::default();
        let lock = ScrollLock::new(surface.clone());

        let first = lock.acquire();
        let second = lock.clone().acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert!(lock.is_locked());
        drop(second);
        assert!(!lock.is_locked());

        assert_eq!(*surface.calls.borrow(), vec![true, false]);
    }

    #[test]
    fn clones_share_state_and_compare_equal() {
        let lock = ScrollLock::new(RecordingSurface::default());
        let other = ScrollLock::new(RecordingSurface::default());
        let clone = lock.clone();

        assert_eq!(lock, clone);
        assert_ne!(lock, other);

        let _guard = clone.acquire();
        assert!(lock.is_locked());
        assert!(!other.is_locked());
    }

    #[test]
    fn guard_released_during_unwind() {
        let surface = RecordingSurface::default();
        let lock = ScrollLock::new(surface.clone());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = lock.acquire();
            panic!("overlay blew up");
        }));

        assert!(result.is_err());
        assert!(!lock.is_locked());
        assert_eq!(*surface.calls.borrow(), vec![true, false]);
    }
}
