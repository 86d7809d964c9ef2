use dioxus::prelude::*;

use crate::components::root::use_locale;
use crate::core::disclosure::Accordion;
use crate::sections::anchor::Section;

const QUESTION_COUNT: usize = 5;

pub const CONTACT_EMAIL: &str = "info@websaz.app";

#[component]
pub fn Faq() -> Element {
    let locale = use_locale();
    let mut accordion = use_signal(Accordion::new);
    let t = locale.read();

    rsx! {
        section { id: Section::Faq.id(), class: "faq", dir: "{t.direction().as_str()}",
            header { class: "section-header",
                h2 { class: "section-title", {t.t("faq.title")} }
                p { class: "section-subtitle", {t.t("faq.subtitle")} }
            }
            div { class: "faq__list",
                for index in 0..QUESTION_COUNT {
                    div {
                        key: "{index}",
                        class: if accordion.read().is_open(index) { "faq__item faq__item--open" } else { "faq__item" },
                        button {
                            r#type: "button",
                            class: "faq__question",
                            aria_expanded: "{accordion.read().is_open(index)}",
                            onclick: move |_| accordion.with_mut(|state| state.toggle(index)),
                            span { {t.t(&format!("faq.{}.question", index + 1))} }
                            span { class: "faq__chevron", aria_hidden: "true", "⌄" }
                        }
                        if accordion.read().is_open(index) {
                            p { class: "faq__answer", {t.t(&format!("faq.{}.answer", index + 1))} }
                        }
                    }
                }
            }
            div { class: "faq__contact",
                p { {t.t("faq.more-questions")} }
                a { class: "button button--ghost", href: "mailto:{CONTACT_EMAIL}", {t.t("faq.contact-us")} }
            }
        }
    }
}
