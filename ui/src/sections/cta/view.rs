use dioxus::prelude::*;

use super::newsletter::Newsletter;
use crate::components::root::{use_config, use_locale};
use crate::core::platform;
use crate::core::timing;
use crate::sections::anchor::Section;

/// Closing call to action with the newsletter sign-up.
#[component]
pub fn CallToAction() -> Element {
    let locale = use_locale();
    let reset_ms = use_config().newsletter_reset_ms;
    let mut newsletter = use_signal(Newsletter::default);
    let t = locale.read();

    // Tasks spawned here are scoped to this component and die with it.
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(ticket) = newsletter.with_mut(|state| state.submit(reset_ms)) else {
            tracing::debug!("ignoring blank newsletter email");
            return;
        };
        tracing::info!(submission = ticket.submission, "newsletter sign-up");
        spawn(async move {
            timing::sleep_ms(ticket.delay_ms).await;
            if !newsletter.with_mut(|state| state.reset(ticket)) {
                tracing::debug!(submission = ticket.submission, "newsletter reset superseded");
            }
        });
    };

    rsx! {
        section { class: "cta", dir: "{t.direction().as_str()}",
            div { class: "cta__panel",
                span { class: "section-badge", {t.t("cta.badge")} }
                h2 { class: "cta__title", {t.t("cta.title")} }
                p { class: "cta__subtitle", {t.t("cta.subtitle")} }
                div { class: "cta__buttons",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| platform::scroll_to_section(Section::Pricing.id()),
                        {t.t("cta.buttons.primary")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| platform::scroll_to_section(Section::HowItWorks.id()),
                        {t.t("cta.buttons.secondary")}
                    }
                }
            }
            div { class: "newsletter",
                h3 { class: "newsletter__title", {t.t("cta.newsletter.title")} }
                p { class: "newsletter__subtitle", {t.t("cta.newsletter.subtitle")} }
                if newsletter.read().submitted() {
                    div { class: "newsletter__success", role: "status",
                        strong { {t.t("cta.newsletter.success")} }
                        p { {t.t("cta.newsletter.success-message")} }
                    }
                } else {
                    form { class: "newsletter__form", onsubmit,
                        input {
                            r#type: "email",
                            class: "newsletter__input",
                            required: true,
                            placeholder: t.t("cta.newsletter.placeholder"),
                            value: "{newsletter.read().email()}",
                            oninput: move |evt| newsletter.with_mut(|state| state.set_email(evt.value())),
                        }
                        button { r#type: "submit", class: "button button--primary", {t.t("cta.newsletter.button")} }
                    }
                }
                p { class: "newsletter__privacy", {t.t("cta.newsletter.privacy")} }
            }
        }
    }
}
