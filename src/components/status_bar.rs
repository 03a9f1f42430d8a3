use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn StatusBar(state: Signal<AppState>) -> Element {
    let message = state.read().message.clone();

    rsx! {
        div { class: "status-bar",
            if let Some(msg) = message {
                div {
                    class: if msg.is_error { "message error" } else { "message success" },
                    "{msg.text}"
                }
            }
        }
    }
}
