use dioxus::prelude::*;
use fluent::FluentArgs;

use super::faq::CONTACT_EMAIL;
use crate::components::root::use_locale;
use crate::core::{platform, timing};
use crate::sections::anchor::Section;

/// Quick links: translation slug and the section they scroll to.
const QUICK_LINKS: [(&str, Section); 5] = [
    ("home", Section::Home),
    ("features", Section::Features),
    ("pricing", Section::Pricing),
    ("about", Section::HowItWorks),
    ("contact", Section::Faq),
];

const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    ("Twitter", "https://twitter.com/websaz", "𝕏"),
    ("Instagram", "https://instagram.com/websaz", "◎"),
    ("LinkedIn", "https://linkedin.com/company/websaz", "in"),
    ("GitHub", "https://github.com/websaz", "⌥"),
];

const CONTACT_PHONE: &str = "+98 21 0000 0000";

#[component]
pub fn SiteFooter() -> Element {
    let locale = use_locale();
    let t = locale.read();

    let mut args = FluentArgs::new();
    args.set("year", timing::current_year());
    let copyright = t.t_with("footer.copyright", &args);

    rsx! {
        footer { id: "footer", class: "site-footer", dir: "{t.direction().as_str()}",
            div { class: "site-footer__grid",
                div { class: "site-footer__brand",
                    span { class: "site-footer__brand-name", {t.t("footer.brand-name")} }
                    p { class: "site-footer__description", {t.t("footer.description")} }
                }
                nav { class: "site-footer__links",
                    h3 { {t.t("footer.links-title")} }
                    ul {
                        for (slug, section) in QUICK_LINKS {
                            li { key: "{slug}",
                                a {
                                    href: "#{section.id()}",
                                    onclick: move |evt| {
                                        evt.prevent_default();
                                        platform::scroll_to_section(section.id());
                                    },
                                    {t.t(&format!("footer.links.{slug}"))}
                                }
                            }
                        }
                    }
                }
                div { class: "site-footer__contact",
                    h3 { {t.t("footer.contact-title")} }
                    p {
                        span { {t.t("footer.email")} }
                        " "
                        a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                    }
                    p {
                        span { {t.t("footer.phone")} }
                        " "
                        a { href: "tel:{CONTACT_PHONE}", dir: "ltr", "{CONTACT_PHONE}" }
                    }
                }
                div { class: "site-footer__social",
                    h3 { {t.t("footer.social-title")} }
                    div { class: "site-footer__social-icons",
                        for (label, href, glyph) in SOCIAL_LINKS {
                            a {
                                key: "{label}",
                                class: "site-footer__social-link",
                                href: "{href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "{label}",
                                "{glyph}"
                            }
                        }
                    }
                }
            }
            div { class: "site-footer__bottom",
                p { class: "site-footer__copyright", "© {copyright}" }
                div { class: "site-footer__legal",
                    a { href: "#", {t.t("footer.privacy-policy")} }
                    a { href: "#", {t.t("footer.terms-of-service")} }
                }
            }
            button {
                r#type: "button",
                class: "back-to-top",
                aria_label: t.t("footer.back-to-top"),
                onclick: move |_| platform::scroll_to_top(),
                "↑"
            }
        }
    }
}
