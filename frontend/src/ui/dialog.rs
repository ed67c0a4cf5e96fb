//! Controlled modal dialog.
//!
//! The open/closed flag belongs to the parent; this type only performs the
//! side effects of the transitions: remembering and restoring focus, holding
//! the scroll lock and trapping Tab.

use log::info;

use super::focus::{FocusHost, FocusTrap};
use super::scroll_lock::{ScrollLock, ScrollLockGuard};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKey {
    Escape,
    Tab { backward: bool },
    Other,
}

impl DialogKey {
    /// Maps a `KeyboardEvent::key()` value and the shift modifier.
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Escape" | "Esc" => DialogKey::Escape,
            "Tab" => DialogKey::Tab { backward: shift },
            _ => DialogKey::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the browser handle the key.
    Ignored,
    /// The dialog should close and the parent be told.
    Close,
    /// Focus was moved by the trap; suppress the default action.
    Moved,
}

struct OpenState<T> {
    // Dropped with the state, releasing the lock on every exit path.
    _scroll: ScrollLockGuard,
    memento: Option<T>,
    trap: FocusTrap<T>,
}

pub struct Dialog<H: FocusHost> {
    host: H,
    scroll_lock: ScrollLock,
    open: Option<OpenState<H::Target>>,
}

impl<H: FocusHost> Dialog<H> {
    pub fn new(host: H, scroll_lock: ScrollLock) -> Self {
        Self {
            host,
            scroll_lock,
            open: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Enter the open state with `stops` as the dialog's tab stops.
    ///
    /// Does nothing if the dialog is already open.
    pub fn open(&mut self, container: &H::Target, stops: Vec<H::Target>) {
        if self.open.is_some() {
            return;
        }
        let memento = self.host.active();
        let scroll = self.scroll_lock.acquire();
        let trap = FocusTrap::new(stops);
        info!("Dialog opened with {} tab stops", trap.len());
        self.open = Some(OpenState {
            _scroll: scroll,
            memento,
            trap,
        });
        self.host.focus(container);
    }

    /// Leave the open state. Returns `false` if the dialog was already closed.
    pub fn close(&mut self) -> bool {
        let Some(state) = self.open.take() else {
            return false;
        };
        let OpenState { _scroll: scroll, memento, .. } = state;
        drop(scroll);
        if let Some(previous) = memento {
            if self.host.is_attached(&previous) {
                self.host.focus(&previous);
            }
        }
        info!("Dialog closed");
        true
    }

    /// Release everything without moving focus. Used when the dialog's
    /// component is torn down while still open.
    pub fn teardown(&mut self) {
        if self.open.take().is_some() {
            info!("Dialog torn down while open");
        }
    }

    pub fn handle_key(&mut self, key: DialogKey) -> KeyOutcome {
        let Some(state) = self.open.as_ref() else {
            return KeyOutcome::Ignored;
        };
        match key {
            DialogKey::Escape => KeyOutcome::Close,
            DialogKey::Tab { backward } => {
                let current = self.host.active();
                match state.trap.next(current.as_ref(), backward) {
                    Some(target) => {
                        self.host.focus(target);
                        KeyOutcome::Moved
                    }
                    None => KeyOutcome::Ignored,
                }
            }
            DialogKey::Other => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::focus::tests::FakeDocument;
    use crate::ui::scroll_lock::tests::RecordingSurface;

    const STOPS: [&str; 4] = ["close", "name", "phone", "submit"];

    fn dialog(doc: &FakeDocument) -> (Dialog<FakeDocument>, ScrollLock) {
        let lock = ScrollLock::new(RecordingSurface::default());
        (Dialog::new(doc.clone(), lock.clone()), lock)
    }

    #[test]
    fn open_snapshots_focus_locks_and_focuses_container() {
        let doc = FakeDocument::with_focus("book-button");
        let (mut dialog, lock) = dialog(&doc);

        dialog.open(&"dialog", STOPS.to_vec());

        assert!(dialog.is_open());
        assert!(lock.is_locked());
        assert_eq!(doc.focused(), Some("dialog"));
    }

    #[test]
    fn close_restores_previous_focus_and_unlocks() {
        let doc = FakeDocument::with_focus("book-button");
        let (mut dialog, lock) = dialog(&doc);

        dialog.open(&"dialog", STOPS.to_vec());
        doc.set_focus("phone");
        assert!(dialog.close());

        assert!(!dialog.is_open());
        assert!(!lock.is_locked());
        assert_eq!(doc.focused(), Some("book-button"));
    }

    #[test]
    fn close_skips_restore_when_memento_left_the_document() {
        let doc = FakeDocument::with_focus("book-button");
        let (mut dialog, lock) = dialog(&doc);

        dialog.open(&"dialog", STOPS.to_vec());
        doc.remove("book-button");
        doc.set_focus("name");
        assert!(dialog.close());

        assert!(!lock.is_locked());
        assert_eq!(doc.focused(), Some("name"));
    }

    #[test]
    fn close_is_idempotent() {
        let doc = FakeDocument::with_focus("book-button");
        let (mut dialog, lock) = dialog(&doc);

        assert!(!dialog.close());
        dialog.open(&"dialog", STOPS.to_vec());
        assert!(dialog.close());
        let calls = doc.focus_calls.borrow().len();

        assert!(!dialog.close());
        assert!(!dialog.close());
        assert_eq!(doc.focus_calls.borrow().len(), calls);
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn open_twice_keeps_first_memento() {
        let doc = FakeDocument::with_focus("hero-cta");
        let (mut dialog, lock) = dialog(&doc);

        dialog.open(&"dialog", STOPS.to_vec());
        dialog.open(&"dialog", STOPS.to_vec());
        assert_eq!(lock.holders(), 1);

        dialog.close();
        assert_eq!(doc.focused(), Some("hero-cta"));
    }

    #[test]
    fn lock_held_iff_open_across_sequences() {
        let doc = FakeDocument::with_focus("header-cta");
        let (mut dialog, lock) = dialog(&doc);

        let script = [true, true, false, true, false, false, true, false];
        for open in script {
            if open {
                dialog.open(&"dialog", STOPS.to_vec());
            } else {
                dialog.close();
            }
            assert_eq!(lock.is_locked(), dialog.is_open());
        }
        assert!(!lock.is_locked());
    }

    #[test]
    fn teardown_and_drop_release_lock() {
        let doc = FakeDocument::with_focus("header-cta");
        let (mut dialog, lock) = dialog(&doc);

        dialog.open(&"dialog", STOPS.to_vec());
        dialog.teardown();
        assert!(!lock.is_locked());
        assert_eq!(doc.focused(), Some("dialog"));

        dialog.open(&"dialog", STOPS.to_vec());
        assert!(lock.is_locked());
        drop(dialog);
        assert!(!lock.is_locked());
    }

    #[test]
    fn escape_requests_close_only_while_open() {
        let doc = FakeDocument::with_focus("header-cta");
        let (mut dialog, _lock) = dialog(&doc);

        assert_eq!(dialog.handle_key(DialogKey::Escape), KeyOutcome::Ignored);
        dialog.open(&"dialog", STOPS.to_vec());
        assert_eq!(dialog.handle_key(DialogKey::Escape), KeyOutcome::Close);
        assert_eq!(dialog.handle_key(DialogKey::Other), KeyOutcome::Ignored);
    }

    #[test]
    fn tab_cycles_inside_the_dialog() {
        let doc = FakeDocument::with_focus("header-cta");
        let (mut dialog, _lock) = dialog(&doc);
        dialog.open(&"dialog", STOPS.to_vec());

        // container itself is not a stop, Tab enters at the first one
        assert_eq!(dialog.handle_key(DialogKey::Tab { backward: false }), KeyOutcome::Moved);
        assert_eq!(doc.focused(), Some("close"));

        doc.set_focus("submit");
        dialog.handle_key(DialogKey::Tab { backward: false });
        assert_eq!(doc.focused(), Some("close"));

        dialog.handle_key(DialogKey::Tab { backward: true });
        assert_eq!(doc.focused(), Some("submit"));
    }

    #[test]
    fn tab_without_stops_is_left_alone() {
        let doc = FakeDocument::with_focus("header-cta");
        let (mut dialog, _lock) = dialog(&doc);
        dialog.open(&"dialog", Vec::new());

        assert_eq!(dialog.handle_key(DialogKey::Tab { backward: false }), KeyOutcome::Ignored);
        assert_eq!(dialog.handle_key(DialogKey::Tab { backward: true }), KeyOutcome::Ignored);
        assert_eq!(doc.focused(), Some("dialog"));
    }

    #[test]
    fn key_names_map_to_dialog_keys() {
        assert_eq!(DialogKey::from_key("Escape", false), DialogKey::Escape);
        assert_eq!(DialogKey::from_key("Tab", true), DialogKey::Tab { backward: true });
        assert_eq!(DialogKey::from_key("Tab", false), DialogKey::Tab { backward: false });
        assert_eq!(DialogKey::from_key("Enter", false), DialogKey::Other);
    }
}
