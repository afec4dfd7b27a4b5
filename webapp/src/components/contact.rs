use dioxus::prelude::*;
use tracing::{info, warn};

use viewstate::contact::{ContactField, ContactForm};

use crate::common::dom;

const SERVICES: [(&str, &str); 4] = [
    ("strategy", "Brand Strategy"),
    ("design", "Web Design"),
    ("development", "Development"),
    ("marketing", "Digital Marketing"),
];

#[derive(Clone, PartialEq, Props)]
struct InputFieldProps {
    form: Signal<ContactForm>,
    field: ContactField,
    label: String,
    kind: String,
}

#[component]
fn InputField(props: InputFieldProps) -> Element {
    let mut form = props.form;
    let field = props.field;
    let value = form.read().get(field).to_owned();
    let label = if field.is_required() {
        format!("{} *", props.label)
    } else {
        props.label
    };

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: field.id(), "{label}" }
            input {
                id: field.id(),
                name: field.id(),
                class: "form-control",
                r#type: "{props.kind}",
                value,
                oninput: move |evt: FormEvent| form.write().set(field, evt.value()),
            }
        }
    }
}

// contact form
//
// nothing is sent anywhere.  a complete form is acknowledged and cleared, an incomplete
// one is rejected and left as it was
#[component]
pub fn ContactSection() -> Element {
    let mut contact = use_signal(ContactForm::default);

    let service = contact.read().service.clone();
    let message = contact.read().message.clone();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let mut current = contact.peek().clone();
        match current.submit() {
            Ok(confirmation) => {
                info!("contact form accepted");
                dom::alert(confirmation);
                contact.set(current);
            }
            Err(err) => {
                warn!({ err = ?err }, "contact form rejected");
                dom::alert(&err.to_string());
            }
        }
    };

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "container",
                h2 { class: "section-title", "Let's talk" }
                p { class: "section-lead",
                    "Tell us a little about your project and we will get back to you within a day."
                }

                form {
                    id: "contactForm",
                    class: "contact-form",
                    novalidate: true,
                    onsubmit: submit,

                    div { class: "form-grid",
                        InputField {
                            form: contact,
                            field: ContactField::FirstName,
                            label: "First name",
                            kind: "text",
                        }
                        InputField {
                            form: contact,
                            field: ContactField::LastName,
                            label: "Last name",
                            kind: "text",
                        }
                        InputField {
                            form: contact,
                            field: ContactField::Email,
                            label: "Email",
                            kind: "email",
                        }
                        InputField {
                            form: contact,
                            field: ContactField::Phone,
                            label: "Phone",
                            kind: "tel",
                        }

                        div { class: "form-group wide",
                            label { class: "form-label", r#for: "service", "Service" }
                            select {
                                id: "service",
                                name: "service",
                                class: "form-control",
                                value: service,
                                onchange: move |evt: FormEvent| {
                                    contact.write().set(ContactField::Service, evt.value())
                                },
                                option { value: "", "Select a service" }
                                for (value, name) in SERVICES {
                                    option { key: "{value}", value, "{name}" }
                                }
                            }
                        }

                        div { class: "form-group wide",
                            label { class: "form-label", r#for: "message", "Message *" }
                            textarea {
                                id: "message",
                                name: "message",
                                class: "form-control",
                                rows: "5",
                                value: message,
                                oninput: move |evt: FormEvent| {
                                    contact.write().set(ContactField::Message, evt.value())
                                },
                            }
                        }
                    }

                    div { class: "contact-actions",
                        button { class: "btn btn-primary btn-lg", r#type: "submit", "Send message" }
                    }
                }
            }
        }
    }
}
