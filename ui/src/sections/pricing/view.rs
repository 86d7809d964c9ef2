use dioxus::prelude::*;
use fluent::FluentArgs;

use super::plans::{plans, BillingPeriod, Plan, PlanId};
use crate::components::root::use_locale;
use crate::core::locale::LocaleState;
use crate::core::platform;
use crate::core::tabs::TabState;
use crate::sections::anchor::Section;

/// Billing-period tabs plus the three plan cards.
#[component]
pub fn Pricing() -> Element {
    let locale = use_locale();
    let mut period = use_signal(|| TabState::new(BillingPeriod::default()));
    let mut selected = use_signal(|| TabState::new(PlanId::default()));
    let mut hovered = use_signal(|| Option::<PlanId>::None);
    let t = locale.read();
    let current_period = period.read().selected();

    rsx! {
        section { id: Section::Pricing.id(), class: "pricing", dir: "{t.direction().as_str()}",
            header { class: "section-header",
                span { class: "section-badge", {t.t("pricing.badge")} }
                h2 { class: "section-title", {t.t("pricing.title")} }
                p { class: "section-subtitle", {t.t("pricing.subtitle")} }
            }
            div { class: "billing-toggle", role: "tablist",
                for option in BillingPeriod::ALL {
                    button {
                        key: "{option.slug()}",
                        r#type: "button",
                        role: "tab",
                        aria_selected: "{option == current_period}",
                        class: if option == current_period { "billing-toggle__option billing-toggle__option--active" } else { "billing-toggle__option" },
                        onclick: move |_| period.with_mut(|tabs| tabs.select(option)),
                        {t.t(&option.toggle_label_key())}
                    }
                }
            }
            div { class: "pricing__plans",
                for plan in plans() {
                    PlanCard {
                        key: "{plan.id.slug()}",
                        plan: plan.clone(),
                        period: current_period,
                        selected: selected.read().is_selected(plan.id),
                        hovered: hovered() == Some(plan.id),
                        on_select: move |id| selected.with_mut(|tabs| tabs.select(id)),
                        on_hover: move |id| hovered.set(id),
                    }
                }
            }
            footer { class: "pricing__footer",
                p { class: "pricing__guarantee", {t.t("pricing.guarantee")} }
                p { class: "pricing__questions",
                    {t.t("pricing.questions")}
                    " "
                    a {
                        href: "#{Section::Faq.id()}",
                        onclick: move |evt| {
                            evt.prevent_default();
                            platform::scroll_to_section(Section::Faq.id());
                        },
                        {t.t("pricing.faq-link")}
                    }
                }
            }
        }
    }
}

#[component]
fn PlanCard(
    plan: Plan,
    period: BillingPeriod,
    selected: bool,
    hovered: bool,
    on_select: EventHandler<PlanId>,
    on_hover: EventHandler<Option<PlanId>>,
) -> Element {
    let locale = use_locale();
    let t = locale.read();
    let id = plan.id;

    let mut class = String::from("plan-card");
    if plan.recommended {
        class.push_str(" plan-card--recommended");
    }
    if selected {
        class.push_str(" plan-card--selected");
    }
    if hovered {
        class.push_str(" plan-card--hover");
    }

    rsx! {
        article {
            class: "{class}",
            onmouseenter: move |_| on_hover.call(Some(id)),
            onmouseleave: move |_| on_hover.call(None),
            onclick: move |_| on_select.call(id),
            if plan.recommended {
                span { class: "plan-card__ribbon", {t.t("pricing.recommended")} }
            }
            h3 { class: "plan-card__name", {t.t(&plan.key("name"))} }
            p { class: "plan-card__description", {t.t(&plan.key("description"))} }
            div { class: "plan-card__price",
                {price_line(&t, &plan, period)}
                if let Some(percent) = plan.savings(period) {
                    span { class: "plan-card__save", {save_badge(&t, percent)} }
                }
            }
            p { class: "plan-card__includes", {t.t("pricing.includes")} }
            ul { class: "plan-card__features",
                for key in plan.feature_keys() {
                    li { key: "{key}", class: "plan-card__feature", {t.t(&key)} }
                }
                for key in plan.limitation_keys() {
                    li { key: "{key}", class: "plan-card__limitation", {t.t(&key)} }
                }
            }
            button {
                r#type: "button",
                class: if selected { "button button--primary plan-card__button" } else { "button button--ghost plan-card__button" },
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_select.call(id);
                },
                {t.t(&plan.key("button-text"))}
            }
        }
    }
}

/// Free plans show their price label alone; paid plans get the currency and
/// the per-period suffix.
fn price_line(t: &LocaleState, plan: &Plan, period: BillingPeriod) -> Element {
    let amount = t.t(&plan.price_key(period));
    if plan.free {
        return rsx! { span { class: "plan-card__amount", "{amount}" } };
    }
    rsx! {
        span { class: "plan-card__amount", "{amount}" }
        span { class: "plan-card__currency", {t.t("pricing.currency")} }
        span { class: "plan-card__period", {t.t(&period.per_period_key())} }
    }
}

fn save_badge(t: &LocaleState, percent: u8) -> String {
    let mut args = FluentArgs::new();
    args.set("percent", i64::from(percent));
    t.t_with("pricing.save", &args)
}
