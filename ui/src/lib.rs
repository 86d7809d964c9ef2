//! Shared UI crate for the Websaz landing page. State machines, translations
//! and every page section live here; the platform crates only launch it.

pub mod core;
pub mod i18n;
pub mod sections;
pub mod views {
    pub mod landing;
    pub use landing::Landing;
}

pub mod components {
    // Page root: locale, config, scroll lock, viewport (components/root.rs)
    pub mod root;
    pub use root::{change_language, use_locale, LandingRoot};

    // Localized site header (components/site_navbar.rs)
    pub mod site_navbar;
    pub use site_navbar::SiteNavbar;
}

pub use components::{LandingRoot, SiteNavbar};
pub use sections::SiteFooter;
pub use views::Landing;

use dioxus::prelude::manganis;

/// Shared page theme, bundled through the asset pipeline.
pub const MAIN_CSS: dioxus::prelude::Asset = dioxus::prelude::asset!("/assets/theme/main.css");
