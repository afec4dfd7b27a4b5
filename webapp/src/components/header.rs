use dioxus::prelude::*;

use viewstate::{config::NavLink, menu::MenuEvent};

use crate::{components::theme_toggle::ThemeToggle, common::dom, session::Session};

#[derive(Clone, PartialEq, Props)]
struct MenuLinkProps {
    index: usize,
    link: NavLink,
}

// a navigation entry
//
// on narrow viewports any click closes the menu.  in-page anchors additionally scroll
// to their section and take the active mark immediately
#[component]
fn MenuLink(props: MenuLinkProps) -> Element {
    let session = use_context::<Session>();
    let index = props.index;
    let link = props.link;

    let class = session.view.read().link_class(index);
    let anchor = link.anchor().map(str::to_owned);

    rsx! {
        li { class: "menu-item",
            a {
                class,
                href: "{link.href}",
                onclick: move |evt: MouseEvent| {
                    session
                        .menu(MenuEvent::LinkClick {
                            viewport_width: dom::viewport_width(),
                        });

                    if let Some(id) = &anchor {
                        evt.prevent_default();
                        if session.scroll_to_section(id) {
                            session.update(|view| view.select_link(index));
                        }
                    }
                },
                "{link.label}"
            }
        }
    }
}

#[component]
pub fn Header() -> Element {
    let session = use_context::<Session>();
    let nav = session.config.read().nav.clone();

    let (header_class, menu) = {
        let view = session.view.read();
        (view.header.classes(), view.menu)
    };

    rsx! {
        header { id: "header", class: header_class,
            nav { class: "navbar container",
                a {
                    class: "brand",
                    href: "#home",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        session.scroll_to_section("home");
                    },
                    "Northwind Studio"
                }

                div {
                    id: "menu",
                    class: menu.panel_class(),
                    style: menu.panel_style(),
                    ul { class: "menu-inner",
                        for (index, link) in nav.into_iter().enumerate() {
                            MenuLink { key: "{index}", index, link }
                        }
                    }
                    div { class: "menu-block",
                        ThemeToggle {}
                        a {
                            class: "btn btn-primary",
                            href: "#contact",
                            onclick: move |_| {
                                session
                                    .menu(MenuEvent::CallToActionClick {
                                        viewport_width: dom::viewport_width(),
                                    });
                            },
                            "Get in touch"
                        }
                    }
                }

                div {
                    id: "burger",
                    class: menu.burger_class(),
                    onclick: move |_| session.menu(MenuEvent::BurgerClick),
                    span { class: "burger-line" }
                    span { class: "burger-line" }
                    span { class: "burger-line" }
                }
            }
        }

        div {
            class: menu.overlay_class(),
            onclick: move |_| session.menu(MenuEvent::OverlayClick),
        }
    }
}
