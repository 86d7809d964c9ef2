use dioxus::prelude::*;

use crate::components::root::use_locale;
use crate::sections::anchor::Section;

/// One feature card: translation slug plus its glyph.
struct FeatureCard {
    slug: &'static str,
    icon: &'static str,
}

const CARDS: [FeatureCard; 6] = [
    FeatureCard { slug: "design", icon: "🎨" },
    FeatureCard { slug: "speed", icon: "⚡" },
    FeatureCard { slug: "responsive", icon: "📱" },
    FeatureCard { slug: "seo", icon: "🔍" },
    FeatureCard { slug: "security", icon: "🔒" },
    FeatureCard { slug: "analytics", icon: "📊" },
];

/// Feature grid. The hovered card is highlighted; the first one starts
/// highlighted so the grid never looks inert on load.
#[component]
pub fn Features() -> Element {
    let locale = use_locale();
    let mut hovered = use_signal(|| Some(0usize));
    let t = locale.read();

    rsx! {
        section { id: Section::Features.id(), class: "features", dir: "{t.direction().as_str()}",
            header { class: "section-header",
                h2 { class: "section-title", {t.t("features.title")} }
                p { class: "section-subtitle", {t.t("features.subtitle")} }
            }
            div { class: "features__grid",
                for (index, card) in CARDS.iter().enumerate() {
                    article {
                        key: "{card.slug}",
                        class: if hovered() == Some(index) { "feature-card feature-card--active" } else { "feature-card" },
                        onmouseenter: move |_| hovered.set(Some(index)),
                        onmouseleave: move |_| hovered.set(None),
                        span { class: "feature-card__icon", aria_hidden: "true", "{card.icon}" }
                        h3 { class: "feature-card__title", {t.t(&format!("features.{}.title", card.slug))} }
                        p { class: "feature-card__body", {t.t(&format!("features.{}.description", card.slug))} }
                        a { class: "feature-card__more", href: "#{Section::Pricing.id()}", {t.t("features.learn-more")} }
                    }
                }
            }
        }
    }
}
