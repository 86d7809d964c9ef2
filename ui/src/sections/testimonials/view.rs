use dioxus::prelude::*;
use fluent::FluentArgs;

use super::carousel::{Carousel, CarouselEvent, SlideMotion};
use super::driver::drive;
use crate::components::root::{use_config, use_locale};
use crate::core::timing;
use crate::sections::anchor::Section;

const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Testimonial {
    /// 1-based, matches the `testimonials.<n>.*` keys.
    number: usize,
    image: &'static str,
    rating: u8,
}

const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial { number: 1, image: "https://randomuser.me/api/portraits/women/1.jpg", rating: 5 },
    Testimonial { number: 2, image: "https://randomuser.me/api/portraits/men/2.jpg", rating: 5 },
    Testimonial { number: 3, image: "https://randomuser.me/api/portraits/women/3.jpg", rating: 4 },
    Testimonial { number: 4, image: "https://randomuser.me/api/portraits/men/4.jpg", rating: 5 },
    Testimonial { number: 5, image: "https://randomuser.me/api/portraits/women/5.jpg", rating: 5 },
];

/// Auto-advancing testimonial slider.
///
/// A single coroutine owns the timer (see [`drive`]). Unmounting drops the
/// coroutine and the timer with it.
#[component]
pub fn Testimonials() -> Element {
    let locale = use_locale();
    let interval_ms = use_config().autoplay_interval_ms;
    let carousel = use_signal(|| Carousel::new(TESTIMONIALS.len(), interval_ms));

    let driver = use_coroutine(move |rx: UnboundedReceiver<CarouselEvent>| {
        drive(carousel, rx, timing::sleep_ms)
    });

    let t = locale.read();
    let state = carousel.read();
    let active = state.active();
    let item = TESTIMONIALS[active];
    let motion = SlideMotion::for_step(state.direction(), t.direction());
    let slide_style = format!(
        "--slide-enter-from: {}px; --slide-exit-to: {}px;",
        motion.enter_from_px, motion.exit_to_px
    );
    let stars = (0..MAX_RATING).map(|i| i < item.rating);

    rsx! {
        section { id: Section::Testimonials.id(), class: "testimonials", dir: "{t.direction().as_str()}",
            header { class: "section-header",
                h2 { class: "section-title", {t.t("testimonials.title")} }
                p { class: "section-subtitle", {t.t("testimonials.subtitle")} }
            }
            div { class: "carousel",
                button {
                    r#type: "button",
                    class: "carousel__arrow carousel__arrow--previous",
                    aria_label: t.t("testimonials.aria.previous"),
                    onclick: move |_| driver.send(CarouselEvent::Previous),
                    if t.is_rtl() { "›" } else { "‹" }
                }
                div { class: "carousel__viewport",
                    article { key: "{active}", class: "carousel__slide", style: "{slide_style}",
                        img {
                            class: "carousel__avatar",
                            src: item.image,
                            alt: t.t(&format!("testimonials.{}.name", item.number)),
                            loading: "lazy",
                        }
                        div { class: "carousel__stars", aria_label: "{item.rating}/{MAX_RATING}",
                            for (i, filled) in stars.enumerate() {
                                span {
                                    key: "{i}",
                                    class: if filled { "star star--filled" } else { "star" },
                                    "★"
                                }
                            }
                        }
                        blockquote { class: "carousel__quote",
                            {t.t(&format!("testimonials.{}.content", item.number))}
                        }
                        p { class: "carousel__name", {t.t(&format!("testimonials.{}.name", item.number))} }
                        p { class: "carousel__role", {t.t(&format!("testimonials.{}.role", item.number))} }
                    }
                }
                button {
                    r#type: "button",
                    class: "carousel__arrow carousel__arrow--next",
                    aria_label: t.t("testimonials.aria.next"),
                    onclick: move |_| driver.send(CarouselEvent::Next),
                    if t.is_rtl() { "‹" } else { "›" }
                }
            }
            div { class: "carousel__dots",
                for index in 0..state.len() {
                    button {
                        key: "{index}",
                        r#type: "button",
                        class: if index == active { "carousel__dot carousel__dot--active" } else { "carousel__dot" },
                        aria_label: dot_label(&t, index),
                        aria_current: if index == active { "true" } else { "false" },
                        onclick: move |_| driver.send(CarouselEvent::Select(index)),
                    }
                }
            }
        }
    }
}

fn dot_label(t: &crate::core::locale::LocaleState, index: usize) -> String {
    let mut args = FluentArgs::new();
    args.set("number", i64::try_from(index + 1).unwrap_or(i64::MAX));
    t.t_with("testimonials.aria.dot", &args)
}
