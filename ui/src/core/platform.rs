//! Host bridges: everything that has to reach outside the component tree
//! (window listeners, document attributes, smooth scrolling).
//!
//! All of it goes through `document::eval`, which both the web and desktop
//! renderers implement, so there is a single code path per bridge.

use std::rc::Rc;

use dioxus::prelude::*;
use serde::Deserialize;

use super::locale::Language;
use super::region::Rect;
use super::scroll_lock::ScrollSurface;

/// Window size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn is_mobile(&self, breakpoint_px: f64) -> bool {
        self.width < breakpoint_px
    }
}

/// One scroll notification: page offset plus the top edge of each watched
/// section (`None` when the element is not in the document).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrollSample {
    pub y: f64,
    pub offsets: Vec<(String, Option<f64>)>,
}

/// Window events the page subscribes to. Each kind keeps its handler on a
/// well-known `window` property so the matching [`unlisten`] can remove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowListener {
    Resize,
    Scroll,
}

impl WindowListener {
    fn event(self) -> &'static str {
        match self {
            WindowListener::Resize => "resize",
            WindowListener::Scroll => "scroll",
        }
    }

    fn slot(self) -> &'static str {
        match self {
            WindowListener::Resize => "__websazResize",
            WindowListener::Scroll => "__websazScroll",
        }
    }
}

/// Stream viewport sizes to `on_sample` until the calling task is dropped.
/// Sends one sample right away, then one per resize.
pub async fn watch_viewport(mut on_sample: impl FnMut(Viewport)) {
    let body = "dioxus.send({ width: window.innerWidth, height: window.innerHeight });";
    let mut eval = document::eval(&listener_script(WindowListener::Resize, body));
    loop {
        match eval.recv::<Viewport>().await {
            Ok(viewport) => on_sample(viewport),
            Err(err) => {
                tracing::warn!("viewport listener stopped: {err:?}");
                break;
            }
        }
    }
}

/// Stream scroll positions (plus section offsets for `section_ids`).
pub async fn watch_scroll(section_ids: &[&str], mut on_sample: impl FnMut(ScrollSample)) {
    let ids = serde_json::to_string(section_ids).unwrap_or_else(|_| "[]".to_string());
    let body = format!(
        "dioxus.send({{ y: window.scrollY, offsets: {ids}.map(id => {{ \
            const el = document.getElementById(id); \
            return [id, el ? el.offsetTop : null]; \
        }}) }});"
    );
    let mut eval = document::eval(&listener_script(WindowListener::Scroll, &body));
    loop {
        match eval.recv::<ScrollSample>().await {
            Ok(sample) => on_sample(sample),
            Err(err) => {
                tracing::warn!("scroll listener stopped: {err:?}");
                break;
            }
        }
    }
}

/// Remove a listener installed by [`watch_viewport`] / [`watch_scroll`].
pub fn unlisten(kind: WindowListener) {
    let slot = kind.slot();
    let event = kind.event();
    document::eval(&format!(
        "if (window.{slot}) {{ window.removeEventListener('{event}', window.{slot}); window.{slot} = undefined; }}"
    ));
}

fn listener_script(kind: WindowListener, body: &str) -> String {
    let slot = kind.slot();
    let event = kind.event();
    format!(
        "if (window.{slot}) {{ window.removeEventListener('{event}', window.{slot}); }}\n\
         window.{slot} = () => {{ {body} }};\n\
         window.addEventListener('{event}', window.{slot}, {{ passive: true }});\n\
         window.{slot}();\n\
         await new Promise(() => {{}});"
    )
}

/// Mirror the locale onto `<html lang dir>`.
pub fn apply_document_locale(language: Language) {
    document::eval(&format!(
        "document.documentElement.lang = '{}'; document.documentElement.dir = '{}';",
        language.code(),
        language.direction().as_str()
    ));
}

/// The `lang` query parameter of the page URL, if present.
pub async fn requested_language() -> Option<String> {
    let mut eval =
        document::eval("dioxus.send(new URLSearchParams(window.location.search).get('lang'));");
    eval.recv::<Option<String>>().await.ok().flatten()
}

/// Smooth-scroll to the element with `id`.
pub fn scroll_to_section(id: &str) {
    document::eval(&format!(
        "document.getElementById('{id}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    ));
}

pub fn scroll_to_top() {
    document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

/// Client rectangle of a mounted element, `None` if it is gone or the
/// renderer can't measure it.
pub async fn client_rect(element: Option<Rc<MountedData>>) -> Option<Rect> {
    let rect = element?.get_client_rect().await.ok()?;
    Some(Rect::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    ))
}

/// Locks scrolling by hiding overflow on `<body>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentBody;

impl ScrollSurface for DocumentBody {
    fn set_scroll_locked(&self, locked: bool) {
        let overflow = if locked { "hidden" } else { "" };
        document::eval(&format!("document.body.style.overflow = '{overflow}';"));
    }
}
