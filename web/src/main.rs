use dioxus::prelude::*;

use ui::{Landing, LandingRoot, SiteFooter, SiteNavbar};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Landing {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        Router::<Route> {}
    }
}

/// Page chrome around the routed body. `LandingRoot` sits above the navbar
/// so the header and every section share one locale and one scroll lock.
#[component]
fn WebLayout() -> Element {
    rsx! {
        LandingRoot {
            SiteNavbar {}
            Outlet::<Route> {}
            SiteFooter {}
        }
    }
}
