use dioxus::prelude::*;

use crate::sections::{
    CallToAction, Faq, Features, Hero, HowItWorks, Pricing, Testimonials,
};

/// Body of the landing page. The navbar and footer come from the layout so
/// platform launchers can wrap other routes with the same chrome.
#[component]
pub fn Landing() -> Element {
    #[cfg(debug_assertions)]
    tracing::debug!("landing render");

    rsx! {
        main { class: "page page-landing",
            Hero {}
            Features {}
            HowItWorks {}
            Pricing {}
            Testimonials {}
            Faq {}
            CallToAction {}
        }
    }
}
