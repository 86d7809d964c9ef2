use dioxus::prelude::*;

use crate::components::root::use_locale;
use crate::core::platform;
use crate::sections::anchor::Section;

const STEPS: [&str; 3] = ["step1", "step2", "step3"];

#[component]
pub fn HowItWorks() -> Element {
    let locale = use_locale();
    let mut active_step = use_signal(|| Some(0usize));
    let mut video_playing = use_signal(|| false);
    let t = locale.read();

    rsx! {
        section { id: Section::HowItWorks.id(), class: "how-it-works", dir: "{t.direction().as_str()}",
            header { class: "section-header",
                h2 { class: "section-title", {t.t("how-it-works.title")} }
                p { class: "section-subtitle", {t.t("how-it-works.subtitle")} }
            }
            ol { class: "steps",
                for (index, step) in STEPS.into_iter().enumerate() {
                    li {
                        key: "{step}",
                        class: if active_step() == Some(index) { "step step--active" } else { "step" },
                        onmouseenter: move |_| active_step.set(Some(index)),
                        onmouseleave: move |_| active_step.set(None),
                        span { class: "step__number", "{index + 1}" }
                        h3 { class: "step__title", {t.t(&format!("how-it-works.{step}.title"))} }
                        p { class: "step__body", {t.t(&format!("how-it-works.{step}.description"))} }
                    }
                }
            }
            div { class: if video_playing() { "sample-video sample-video--playing" } else { "sample-video" },
                button {
                    r#type: "button",
                    class: "sample-video__toggle",
                    aria_pressed: "{video_playing()}",
                    onclick: move |_| video_playing.set(!video_playing()),
                    if video_playing() { "❚❚" } else { "▶" }
                }
                div { class: "sample-video__caption",
                    if video_playing() {
                        p { {t.t("how-it-works.video.playing")} }
                    } else {
                        h3 { {t.t("how-it-works.video.title")} }
                        p { {t.t("how-it-works.video.description")} }
                    }
                }
            }
            div { class: "how-it-works__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| platform::scroll_to_section(Section::Pricing.id()),
                    {t.t("how-it-works.start-now")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| video_playing.set(true),
                    {t.t("how-it-works.view-sample")}
                }
            }
        }
    }
}
