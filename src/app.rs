use crate::accounts::{AccountsConfig, UserId, load_config, save_config};
use crate::components::*;
use crate::keyboard::use_key_bridge;
use crate::state::{AppState, Message};
use dioxus::prelude::*;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let mut state = use_signal(AppState::new);
    use_key_bridge();

    use_effect(move || {
        initialize_app(state);
    });

    let on_delete = move |id: UserId| {
        let requested = state.write().request_delete(id);
        if let Err(e) = requested {
            tracing::warn!("cannot start deletion: {}", e);
            state.write().set_message(Message::error(e.to_string()));
        }
    };

    let on_cancel = move |_| {
        if !state.read().is_delete_pending() {
            tracing::trace!("cancel ignored, no deletion pending");
            return;
        }
        let cancelled = state.write().cancel_delete();
        if let Some(id) = cancelled {
            tracing::info!(user = %id, "deletion cancelled");
        }
    };

    let on_confirm = move |_| {
        confirm_deletion(state);
    };

    let (is_open, user_name, user_count) = {
        let state = state.read();
        (
            state.is_delete_pending(),
            state.pending_user_name(),
            state.users().len(),
        )
    };

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            Header { user_count }
            div { class: "content",
                UserList {
                    state: state,
                    on_delete: on_delete
                }
            }
            StatusBar { state: state }
            ConfirmDeleteDialog {
                is_open,
                user_name,
                on_confirm: on_confirm,
                on_cancel: on_cancel
            }
        }
    }
}

fn initialize_app(mut state: Signal<AppState>) {
    match load_config() {
        Ok(config) => {
            tracing::info!(users = config.users.len(), "roster loaded");
            state.write().config = config;
        }
        Err(e) => {
            tracing::warn!("failed to load config, using seeded roster: {}", e);
            let mut write_state = state.write();
            write_state.config = AccountsConfig::seeded();
            write_state.set_message(Message::error(format!("Failed to load config: {}", e)));
        }
    }
}

fn confirm_deletion(mut state: Signal<AppState>) {
    let removed = state.write().confirm_delete();

    match removed {
        Ok(user) => {
            tracing::info!(user = %user.id, "user deleted");
            let config = {
                let mut write_state = state.write();
                write_state.set_message(Message::success(format!(
                    "Deleted user \"{}\"",
                    user.name
                )));
                write_state.config.clone()
            };

            if let Err(e) = save_config(&config) {
                tracing::error!("failed to save config: {}", e);
                state.write().set_message(Message::error(format!(
                    "User deleted but failed to save config: {}",
                    e
                )));
            }
        }
        Err(e) => {
            tracing::warn!("delete confirmation ignored: {}", e);
            state.write().set_message(Message::error(e.to_string()));
        }
    }
}
