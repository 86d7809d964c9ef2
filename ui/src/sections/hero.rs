use dioxus::prelude::*;

use crate::components::root::use_locale;
use crate::core::platform;
use crate::sections::anchor::Section;

#[component]
pub fn Hero() -> Element {
    let locale = use_locale();
    let t = locale.read();

    rsx! {
        section { id: Section::Home.id(), class: "hero", dir: "{t.direction().as_str()}",
            div { class: "hero__backdrop", aria_hidden: "true",
                span { class: "hero__orb hero__orb--one" }
                span { class: "hero__orb hero__orb--two" }
            }
            div { class: "hero__content",
                h1 { class: "hero__title", {t.t("hero.title")} }
                p { class: "hero__subtitle", {t.t("hero.subtitle")} }
                div { class: "hero__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| platform::scroll_to_section(Section::Pricing.id()),
                        {t.t("hero.cta.primary")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| platform::scroll_to_section(Section::HowItWorks.id()),
                        {t.t("hero.cta.secondary")}
                    }
                }
            }
            button {
                r#type: "button",
                class: "hero__scroll-hint",
                aria_label: t.t("hero.scroll-hint"),
                onclick: move |_| platform::scroll_to_section(Section::Features.id()),
                "↓"
            }
        }
    }
}
