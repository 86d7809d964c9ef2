use std::rc::Rc;

use dioxus::prelude::*;

use super::root::{
    change_language, use_config, use_is_mobile, use_locale, use_pointer_down, use_scroll_lock,
    use_viewport,
};
use crate::core::locale::Language;
use crate::core::platform::{self, WindowListener};
use crate::core::tabs::TabState;
use crate::core::toggle::MenuToggle;
use crate::sections::anchor::{ScrollSpy, Section};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Fixed site header: brand, in-page links with scroll-spy, the language
/// dropdown, and the mobile overlay menu.
///
/// Both menus close on a page-level pointer press that lands outside their
/// panel and their trigger button. The mobile menu holds the page scroll lock
/// while open; the language dropdown is small enough that it does not.
#[component]
pub fn SiteNavbar() -> Element {
    let locale = use_locale();
    let config = use_config();
    let lock = use_scroll_lock();
    let is_mobile = use_is_mobile();
    let pointer = use_pointer_down();

    let mut active = use_signal(|| TabState::new(Section::Home));
    let mut hovered = use_signal(|| Option::<Section>::None);
    let scrolled = use_signal(|| false);
    let mut mobile_menu = use_signal(move || MenuToggle::with_scroll_lock(lock));
    let mut lang_menu = use_signal(MenuToggle::new);

    let mut mobile_panel = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut mobile_button = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut lang_panel = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut lang_button = use_signal(|| Option::<Rc<MountedData>>::None);

    let threshold = config.scrolled_threshold_px;
    let spy_offset = config.scroll_spy_offset_px;
    use_future(move || async move {
        let mut active = active;
        let mut scrolled = scrolled;
        let mut spy = ScrollSpy::new(threshold, spy_offset);
        let ids = Section::NAV.map(Section::id);
        platform::watch_scroll(&ids, move |sample| {
            let offsets: Vec<_> = sample
                .offsets
                .iter()
                .filter_map(|(id, top)| Section::from_id(id).map(|section| (section, *top)))
                .collect();
            let next = spy.observe(sample.y, &offsets);
            if *scrolled.peek() != spy.scrolled() {
                scrolled.set(spy.scrolled());
            }
            if let Some(section) = next {
                if !active.peek().is_selected(section) {
                    active.with_mut(|tabs| tabs.select(section));
                }
            }
        })
        .await;
    });
    use_drop(|| platform::unlisten(WindowListener::Scroll));

    // Outside-press dismissal for both menus.
    use_effect(move || {
        let Some(press) = pointer() else {
            return;
        };
        spawn(async move {
            if mobile_menu.peek().is_open() {
                let panel = platform::client_rect(mobile_panel.peek().clone()).await;
                let trigger = platform::client_rect(mobile_button.peek().clone()).await;
                if mobile_menu.with_mut(|menu| menu.dismiss_outside(press.at, &[&panel, &trigger])) {
                    tracing::debug!("mobile menu dismissed by outside press");
                }
            }
            if lang_menu.peek().is_open() {
                let panel = platform::client_rect(lang_panel.peek().clone()).await;
                let trigger = platform::client_rect(lang_button.peek().clone()).await;
                if lang_menu.with_mut(|menu| menu.dismiss_outside(press.at, &[&panel, &trigger])) {
                    tracing::debug!("language menu dismissed by outside press");
                }
            }
        });
    });

    // Leaving the mobile layout with the overlay open would strand the lock.
    let viewport = use_viewport();
    let breakpoint = config.mobile_breakpoint_px;
    use_effect(move || {
        let mobile = viewport().is_some_and(|size| size.is_mobile(breakpoint));
        if !mobile && mobile_menu.peek().is_open() {
            mobile_menu.with_mut(MenuToggle::close);
        }
    });

    let mut go_to = move |section: Section| {
        active.with_mut(|tabs| tabs.select(section));
        mobile_menu.with_mut(MenuToggle::close);
        platform::scroll_to_section(section.id());
    };

    let mut choose_language = move |language: Language| {
        change_language(locale, language);
        lang_menu.with_mut(MenuToggle::close);
    };

    let t = locale.read();
    let current = t.language();
    let mobile_open = mobile_menu.read().is_open();
    let lang_open = lang_menu.read().is_open();
    let nav_class = if scrolled() {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        // Packaged desktop builds may not ship the asset folder.
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "{nav_class}", dir: "{t.direction().as_str()}",
            div { class: "navbar__inner",
                a {
                    class: "navbar__brand",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        go_to(Section::Home);
                    },
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", {t.t("brand.name")} }
                }

                if !is_mobile {
                    nav { class: "navbar__links",
                        for section in Section::NAV {
                            a {
                                key: "{section.id()}",
                                class: link_class(active.read().is_selected(section), hovered() == Some(section)),
                                href: "#{section.id()}",
                                onmouseenter: move |_| hovered.set(Some(section)),
                                onmouseleave: move |_| hovered.set(None),
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    go_to(section);
                                },
                                {t.t(section.nav_label_key())}
                            }
                        }
                    }
                }

                div { class: "navbar__actions",
                    div { class: "navbar__locale",
                        button {
                            r#type: "button",
                            class: "navbar__locale-button lang-button",
                            aria_label: t.t("navbar.change-language"),
                            aria_expanded: "{lang_open}",
                            onmounted: move |evt| lang_button.set(Some(evt.data())),
                            onclick: move |_| lang_menu.with_mut(MenuToggle::toggle),
                            span { class: "navbar__locale-flag", "{current.flag()}" }
                            if !is_mobile {
                                span { class: "navbar__locale-name", "{current.native_name()}" }
                            }
                        }
                        if lang_open {
                            div {
                                class: "navbar__locale-menu lang-menu",
                                role: "menu",
                                onmounted: move |evt| lang_panel.set(Some(evt.data())),
                                p { class: "navbar__locale-title", {t.t("navbar.select-language")} }
                                for language in Language::ALL {
                                    button {
                                        key: "{language.code()}",
                                        r#type: "button",
                                        role: "menuitemradio",
                                        aria_checked: "{language == current}",
                                        class: if language == current {
                                            "navbar__locale-option navbar__locale-option--active"
                                        } else {
                                            "navbar__locale-option"
                                        },
                                        onclick: move |_| choose_language(language),
                                        span { class: "navbar__locale-flag", "{language.flag()}" }
                                        span { "{language.native_name()}" }
                                    }
                                }
                                div { class: "navbar__locale-footer",
                                    button {
                                        r#type: "button",
                                        class: "navbar__locale-close",
                                        onclick: move |_| lang_menu.with_mut(MenuToggle::close),
                                        {t.t("navbar.close")}
                                    }
                                    span { class: "navbar__locale-help", {t.t("navbar.help-translate")} }
                                }
                            }
                        }
                    }

                    if !is_mobile {
                        button {
                            r#type: "button",
                            class: "button button--primary navbar__cta",
                            onclick: move |_| go_to(Section::Pricing),
                            {t.t("nav.get-started")}
                        }
                    } else {
                        button {
                            r#type: "button",
                            class: "navbar__menu-button menu-button",
                            aria_label: if mobile_open { t.t("navbar.close") } else { t.t("nav.open-menu") },
                            aria_expanded: "{mobile_open}",
                            onmounted: move |evt| mobile_button.set(Some(evt.data())),
                            onclick: move |_| mobile_menu.with_mut(MenuToggle::toggle),
                            span { class: if mobile_open { "navbar__burger navbar__burger--open" } else { "navbar__burger" } }
                        }
                    }
                }
            }
        }

        if is_mobile && mobile_open {
            div {
                class: "navbar__backdrop",
                onclick: move |_| mobile_menu.with_mut(MenuToggle::close),
            }
            div {
                class: "navbar__mobile mobile-menu",
                dir: "{t.direction().as_str()}",
                onmounted: move |evt| mobile_panel.set(Some(evt.data())),
                nav { class: "navbar__mobile-links",
                    for section in Section::NAV {
                        a {
                            key: "{section.id()}",
                            class: if active.read().is_selected(section) {
                                "navbar__mobile-link navbar__mobile-link--active"
                            } else {
                                "navbar__mobile-link"
                            },
                            href: "#{section.id()}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                go_to(section);
                            },
                            {t.t(section.nav_label_key())}
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--primary navbar__mobile-cta",
                    onclick: move |_| go_to(Section::Pricing),
                    {t.t("nav.get-started")}
                }
                div { class: "navbar__mobile-languages",
                    for language in Language::ALL {
                        button {
                            key: "{language.code()}",
                            r#type: "button",
                            class: if language == current {
                                "navbar__mobile-language navbar__mobile-language--active"
                            } else {
                                "navbar__mobile-language"
                            },
                            onclick: move |_| change_language(locale, language),
                            "{language.flag()} {language.native_name()}"
                        }
                    }
                }
            }
        }
    }
}

/// The active highlight wins over hover.
fn link_class(active: bool, hovered: bool) -> &'static str {
    match (active, hovered) {
        (true, _) => "navbar__link navbar__link--active",
        (false, true) => "navbar__link navbar__link--hover",
        (false, false) => "navbar__link",
    }
}
