use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::config::LandingConfig;
use crate::core::locale::{Language, LocaleState};
use crate::core::platform::{self, DocumentBody, Viewport, WindowListener};
use crate::core::region::Point;
use crate::core::scroll_lock::ScrollLock;
use crate::i18n::Catalog;

/// Last pointer-down anywhere on the page. `seq` changes on every press so
/// repeated presses at the same spot still notify subscribers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    pub seq: u64,
    pub at: Point,
}

#[derive(Clone, Copy)]
struct ViewportState(Signal<Option<Viewport>>);

#[derive(Clone, Copy)]
struct PointerState(Signal<Option<PointerDown>>);

/// Owns every piece of page-wide state and hands it to descendants through
/// context: the locale, the config, the scroll lock, the viewport size, and
/// page-level pointer presses.
///
/// Sections must render inside a `LandingRoot`; the `use_*` hooks below
/// panic otherwise.
#[component]
pub fn LandingRoot(#[props(default)] config: LandingConfig, children: Element) -> Element {
    let default_language = config.default_language;
    let locale = use_signal(|| LocaleState::new(Rc::new(Catalog::load()), default_language));
    use_context_provider(|| locale);
    use_context_provider(|| config.clone());
    use_context_provider(|| ScrollLock::new(Rc::new(DocumentBody)));

    let viewport = use_signal(|| Option::<Viewport>::None);
    use_context_provider(|| ViewportState(viewport));
    let mut pointer = use_signal(|| Option::<PointerDown>::None);
    use_context_provider(|| PointerState(pointer));

    // Keep <html lang dir> in step with the locale.
    use_effect(move || {
        let language = locale.read().language();
        tracing::info!(%language, "locale applied");
        platform::apply_document_locale(language);
    });

    // Shared links can pick the language with `?lang=<code>`.
    use_future(move || async move {
        if let Some(code) = platform::requested_language().await {
            change_language_code(locale, &code);
        }
    });

    use_future(move || async move {
        let mut viewport = viewport;
        platform::watch_viewport(move |size| viewport.set(Some(size))).await;
    });
    use_drop(|| platform::unlisten(WindowListener::Resize));

    let current = locale.read();
    let dir = current.direction().as_str();
    let lang = current.language().code();

    rsx! {
        div {
            class: "landing-root",
            lang: "{lang}",
            dir: "{dir}",
            onmousedown: move |evt: MouseEvent| {
                let at = evt.client_coordinates();
                let last = *pointer.peek();
                let seq = last.map_or(1, |p| p.seq + 1);
                pointer.set(Some(PointerDown { seq, at: Point::new(at.x, at.y) }));
            },
            {children}
        }
    }
}

pub fn use_locale() -> Signal<LocaleState> {
    use_context::<Signal<LocaleState>>()
}

pub fn use_config() -> LandingConfig {
    use_context::<LandingConfig>()
}

pub fn use_scroll_lock() -> ScrollLock {
    use_context::<ScrollLock>()
}

/// `None` until the host reports a size.
pub fn use_viewport() -> Signal<Option<Viewport>> {
    use_context::<ViewportState>().0
}

pub fn use_pointer_down() -> Signal<Option<PointerDown>> {
    use_context::<PointerState>().0
}

/// Whether the mobile layout applies. Unknown viewports get the desktop
/// layout.
pub fn use_is_mobile() -> bool {
    let breakpoint = use_config().mobile_breakpoint_px;
    let viewport = use_viewport();
    let size = viewport();
    size.is_some_and(|v| v.is_mobile(breakpoint))
}

/// Switch to the language named by `code`. Unsupported codes are logged and
/// leave the page as it is.
pub fn change_language_code(locale: Signal<LocaleState>, code: &str) {
    match code.parse::<Language>() {
        Ok(language) => change_language(locale, language),
        Err(err) => tracing::warn!("{err}; keeping {}", locale.peek().language()),
    }
}

/// Switch the page language. The only writer of the locale signal.
pub fn change_language(mut locale: Signal<LocaleState>, language: Language) {
    if locale.peek().language() == language {
        return;
    }
    tracing::info!(%language, "switching language");
    locale.with_mut(|state| state.set_language(language));
}
