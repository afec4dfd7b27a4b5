use dioxus::prelude::*;

use crate::session::Session;

#[component]
pub fn ThemeToggle() -> Element {
    let session = use_context::<Session>();
    let shows_sun = session.view.read().theme.shows_sun();

    rsx! {
        button {
            id: "themeToggle",
            class: "theme-toggle",
            r#type: "button",
            title: "Toggle theme",
            onclick: move |_| session.toggle_theme(),
            i { class: if shows_sun { "fas fa-sun" } else { "fas fa-sun d-none" } }
            i { class: if shows_sun { "fas fa-moon d-none" } else { "fas fa-moon" } }
        }
    }
}
