use crate::accounts::UserId;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn UserList(state: Signal<AppState>, on_delete: EventHandler<UserId>) -> Element {
    let users = state.read().users().to_vec();

    rsx! {
        div { class: "section",
            div { class: "section-title", "Accounts" }
            if users.is_empty() {
                div { class: "empty-list", "(No users)" }
            }
            ul { class: "user-list",
                for user in users {
                    li { key: "{user.id}", class: "user-row",
                        div { class: "user-details",
                            span { class: "user-name", "{user.name}" }
                            span { class: "user-email", "{user.email}" }
                        }
                        button {
                            class: "secondary danger delete-btn",
                            onclick: move |_| on_delete.call(user.id),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
