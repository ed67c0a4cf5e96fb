//! Accessible modal dialog.
//!
//! Controlled: the parent owns `is_open` and is told through `on_close` when
//! the user dismisses the dialog (Escape, backdrop click, close button).
//! Focus handling and the scroll lock are delegated to [`Dialog`].

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::ui::dialog::{Dialog, DialogKey, KeyOutcome};
use crate::ui::focus::{focusable_descendants, DomFocus};
use crate::ui::scroll_lock::{BodyOverflow, ScrollLock};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

type SharedDialog = Rc<RefCell<Dialog<DomFocus>>>;

fn dismiss(dialog: &SharedDialog, on_close: &Callback<()>) {
    if dialog.borrow_mut().close() {
        on_close.emit(());
    }
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let scroll_lock = use_context::<ScrollLock>();
    let container_ref = use_node_ref();
    let dialog: SharedDialog = use_mut_ref(move || {
        let lock = scroll_lock.unwrap_or_else(|| ScrollLock::new(BodyOverflow));
        Dialog::new(DomFocus, lock)
    });

    // Follow the parent's flag.
    {
        let dialog = dialog.clone();
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                if *is_open {
                    if let Some(container) = container_ref.cast::<HtmlElement>() {
                        let stops = focusable_descendants(&container);
                        dialog.borrow_mut().open(&container, stops);
                    }
                } else {
                    dialog.borrow_mut().close();
                }
                || ()
            },
            props.is_open,
        );
    }

    // Unmounting while open must still release the lock.
    {
        let dialog = dialog.clone();
        use_effect_with_deps(
            move |_| move || dialog.borrow_mut().teardown(),
            (),
        );
    }

    {
        let dialog = dialog.clone();
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let key = DialogKey::from_key(&e.key(), e.shift_key());
            let outcome = dialog.borrow_mut().handle_key(key);
            match outcome {
                KeyOutcome::Close => {
                    e.prevent_default();
                    dismiss(&dialog, &on_close);
                }
                KeyOutcome::Moved => e.prevent_default(),
                KeyOutcome::Ignored => {}
            }
        });
    }

    let on_dismiss_click = {
        let dialog = dialog.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| dismiss(&dialog, &on_close))
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-root" role="dialog" aria-modal="true" aria-labelledby="modal-title">
            <style>
                {r#"
                .modal-root {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: flex-end;
                    justify-content: center;
                }
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                }
                .modal-panel {
                    position: relative;
                    width: 100%;
                    max-width: 32rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #fff;
                    border-radius: 1rem 1rem 0 0;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    animation: modal-slide-up 0.3s ease-out;
                    outline: none;
                }
                .modal-header {
                    position: sticky;
                    top: 0;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 1.5rem;
                    background: #fff;
                    border-bottom: 1px solid #e5e7eb;
                }
                .modal-header h2 {
                    margin: 0;
                    font-size: 1.5rem;
                    color: #475161;
                }
                .modal-close {
                    padding: 0.5rem;
                    border: none;
                    background: none;
                    color: #858D93;
                    cursor: pointer;
                    border-radius: 0.5rem;
                }
                .modal-close:hover { color: #475161; }
                .modal-body { padding: 1.5rem; }
                @keyframes modal-slide-up {
                    from { transform: translateY(100%); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @keyframes modal-fade-in {
                    from { opacity: 0; transform: scale(0.95); }
                    to { opacity: 1; transform: scale(1); }
                }
                @media (min-width: 640px) {
                    .modal-root { align-items: center; }
                    .modal-panel {
                        border-radius: 1rem;
                        animation: modal-fade-in 0.3s ease-out;
                    }
                }
                "#}
            </style>
            <div class="modal-backdrop" aria-hidden="true" onclick={on_dismiss_click.clone()}></div>
            <div ref={container_ref} class="modal-panel" tabindex="-1">
                <div class="modal-header">
                    <h2 id="modal-title">{ props.title.clone() }</h2>
                    <button class="modal-close" aria-label="Close modal" onclick={on_dismiss_click}>
                        <svg width="24" height="24" fill="none" stroke="currentColor" stroke-width="2"
                            stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
                            <path d="M6 18L18 6M6 6l12 12" />
                        </svg>
                    </button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
