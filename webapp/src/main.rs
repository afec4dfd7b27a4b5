#![allow(non_snake_case)]
use dioxus::prelude::*;
use tracing::Level;

mod common;

mod components;
use components::{back_to_top::BackToTop, header::Header};

mod home;
use home::Home;

mod session;
use session::use_session;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the page root
#[component]
pub fn App() -> Element {
    use_session();

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        div { class: "page",
            Header {}
            Home {}
            BackToTop {}
        }
    }
}
