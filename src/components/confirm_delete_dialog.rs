use crate::dialog::{
    DialogIntent, DialogTarget, confirmation_message, intent_for_click, intent_for_key,
};
use crate::keyboard::{KeyboardHub, ListenerSlot};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;
use dioxus_free_icons::icons::md_social_icons::MdGroup;
use std::cell::RefCell;
use std::rc::Rc;

const TITLE_ID: &str = "confirm-delete-title";

#[component]
pub fn ConfirmDeleteDialog(
    is_open: bool,
    user_name: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    use_escape_listener(on_cancel);

    if !is_open {
        return rsx! {};
    }

    let forward = move |target: DialogTarget| match intent_for_click(target) {
        Some(DialogIntent::Confirm) => on_confirm.call(()),
        Some(DialogIntent::Cancel) => on_cancel.call(()),
        None => {}
    };
    let message = confirmation_message(&user_name);

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| forward(DialogTarget::Backdrop),
            div {
                class: "confirm-delete-dialog",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": TITLE_ID,
                onclick: move |evt| {
                    evt.stop_propagation();
                    forward(DialogTarget::Panel);
                },
                div { class: "dialog-header",
                    div { class: "dialog-icon",
                        Icon {
                            width: 24,
                            height: 24,
                            icon: MdGroup
                        }
                    }
                    h3 { id: TITLE_ID, "Delete User" }
                    button {
                        class: "icon-button",
                        "aria-label": "Close",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            forward(DialogTarget::CloseButton);
                        },
                        Icon {
                            width: 20,
                            height: 20,
                            icon: MdClose
                        }
                    }
                }
                p { class: "dialog-message", "{message}" }
                div { class: "dialog-buttons",
                    button {
                        class: "secondary",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            forward(DialogTarget::CancelButton);
                        },
                        "Cancel"
                    }
                    button {
                        class: "primary danger",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            forward(DialogTarget::DeleteButton);
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

/// Keeps one Escape listener on the shared [`KeyboardHub`] for as long as the
/// component is mounted, rebinding whenever `on_cancel` changes identity.
fn use_escape_listener(on_cancel: EventHandler<()>) {
    let hub = use_context::<KeyboardHub>();
    let slot = use_hook(|| Rc::new(RefCell::new(ListenerSlot::<EventHandler<()>>::default())));

    let rebound = slot.borrow_mut().bind(&hub, on_cancel, move |key| {
        if intent_for_key(key) == Some(DialogIntent::Cancel) {
            on_cancel.call(());
        }
    });
    if rebound {
        tracing::debug!("escape listener bound");
    }

    use_drop(move || {
        slot.borrow_mut().release();
        tracing::debug!("escape listener released");
    });
}
