use dioxus::prelude::*;

use crate::{common::dom, session::Session};

#[component]
pub fn BackToTop() -> Element {
    let session = use_context::<Session>();
    let display = session.view.read().back_to_top_display();

    rsx! {
        button {
            id: "backToTop",
            class: "back-to-top",
            r#type: "button",
            title: "Back to top",
            style: "display: {display};",
            onclick: move |_| dom::smooth_scroll_to(0.0),
            i { class: "fas fa-arrow-up" }
        }
    }
}
