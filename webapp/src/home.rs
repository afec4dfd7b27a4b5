use dioxus::prelude::*;

use crate::{components::contact::ContactSection, session::Session};

mod lazy;
use lazy::use_lazy_images;

mod reveal;
use reveal::use_card_reveal;

struct Service {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

static SERVICES: [Service; 4] = [
    Service {
        icon: "fas fa-compass",
        title: "Brand Strategy",
        text: "Positioning, naming and messaging that give your business a voice people remember.",
    },
    Service {
        icon: "fas fa-pen-nib",
        title: "Web Design",
        text: "Clean, fast and accessible interfaces designed around the way your customers browse.",
    },
    Service {
        icon: "fas fa-code",
        title: "Development",
        text: "Robust sites and web applications, built to grow with your team.",
    },
    Service {
        icon: "fas fa-bullhorn",
        title: "Digital Marketing",
        text: "Campaigns, content and analytics that turn visitors into long-term clients.",
    },
];

struct Person {
    name: &'static str,
    role: &'static str,
    photo: &'static str,
}

static TEAM: [Person; 3] = [
    Person {
        name: "Ana Moreau",
        role: "Creative Director",
        photo: "/assets/team/ana.jpg",
    },
    Person {
        name: "Sam Okafor",
        role: "Lead Engineer",
        photo: "/assets/team/sam.jpg",
    },
    Person {
        name: "Lena Fischer",
        role: "Strategist",
        photo: "/assets/team/lena.jpg",
    },
];

struct Project {
    title: &'static str,
    summary: &'static str,
    image: &'static str,
}

static PROJECTS: [Project; 3] = [
    Project {
        title: "Harbor Coffee",
        summary: "A full rebrand and online ordering for a chain of twelve cafés.",
        image: "/assets/projects/harbor.jpg",
    },
    Project {
        title: "Fieldnote",
        summary: "Marketing site and onboarding flow for a note-taking startup.",
        image: "/assets/projects/fieldnote.jpg",
    },
    Project {
        title: "Atlas Outdoor",
        summary: "Seasonal campaign and storefront redesign for an outdoor retailer.",
        image: "/assets/projects/atlas.jpg",
    },
];

#[component]
pub fn Home() -> Element {
    let session = use_context::<Session>();

    use_lazy_images();
    use_card_reveal();

    rsx! {
        main { class: "home-container",
            // Hero section
            section { id: "home", class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { class: "hero-title", "Design that moves your business forward" }
                        p { class: "hero-subtitle",
                            "Northwind Studio is a small team of designers and engineers building brands and websites people love to use."
                        }
                        a {
                            class: "btn btn-primary btn-lg",
                            href: "#services",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                session.scroll_to_section("services");
                            },
                            "See what we do"
                        }
                    }
                }
            }

            // Services section
            section { id: "services", class: "services",
                div { class: "container",
                    h2 { class: "section-title", "Services" }
                    p { class: "section-lead",
                        "Everything you need to launch, grow and refine your presence online."
                    }
                    div { class: "card-grid",
                        for service in SERVICES.iter() {
                            div { key: "{service.title}", class: "service-card",
                                div { class: "service-icon",
                                    i { class: service.icon }
                                }
                                h3 { class: "card-title", "{service.title}" }
                                p { class: "card-text", "{service.text}" }
                            }
                        }
                    }
                }
            }

            // Team section
            section { id: "team", class: "team",
                div { class: "container",
                    h2 { class: "section-title", "Our team" }
                    p { class: "section-lead", "Small on purpose, so you always work with the people doing the work." }
                    div { class: "card-grid",
                        for person in TEAM.iter() {
                            div { key: "{person.name}", class: "team-card",
                                img {
                                    class: "team-photo",
                                    alt: person.name,
                                    "loading": "lazy",
                                    "data-src": person.photo,
                                }
                                h3 { class: "card-title", "{person.name}" }
                                p { class: "team-role", "{person.role}" }
                            }
                        }
                    }
                }
            }

            // Projects section
            section { id: "projects", class: "projects",
                div { class: "container",
                    h2 { class: "section-title", "Recent projects" }
                    p { class: "section-lead", "A few of the teams we have helped recently." }
                    div { class: "card-grid",
                        for project in PROJECTS.iter() {
                            div { key: "{project.title}", class: "project-card",
                                img {
                                    class: "project-image",
                                    alt: project.title,
                                    "loading": "lazy",
                                    "data-src": project.image,
                                }
                                h3 { class: "card-title", "{project.title}" }
                                p { class: "card-text", "{project.summary}" }
                            }
                        }
                    }
                }
            }

            ContactSection {}
        }

        footer { class: "footer",
            div { class: "container", "© Northwind Studio. All rights reserved." }
        }
    }
}
