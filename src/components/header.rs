use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_social_icons::MdGroup;

#[component]
pub fn Header(user_count: usize) -> Element {
    rsx! {
        div { class: "header",
            Icon {
                width: 28,
                height: 28,
                icon: MdGroup
            }
            h1 { "User Accounts" }
            span { class: "header-count", "{user_count}" }
        }
    }
}
