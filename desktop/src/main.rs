#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::core::config::LandingConfig;
use ui::{Landing, LandingRoot, SiteFooter, SiteNavbar};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Landing {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

/// Overrides the config file location.
const CONFIG_ENV: &str = "WEBSAZ_CONFIG";

#[cfg(feature = "desktop")]
fn main() {
    let config = load_config();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Websaz – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .with_context(config)
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().with_context(load_config()).launch(App);
}

/// `$WEBSAZ_CONFIG`, else `landing.json` in the platform config dir. A
/// missing default file is normal; anything else that fails is logged and
/// the defaults are used.
fn load_config() -> LandingConfig {
    let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let Some(path) = explicit.clone().or_else(LandingConfig::default_path) else {
        return LandingConfig::default();
    };
    if explicit.is_none() && !path.exists() {
        return LandingConfig::default();
    }
    match LandingConfig::load(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded landing config");
            config
        }
        Err(err) => {
            tracing::warn!("{err}; using default landing config");
            LandingConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = try_use_context::<LandingConfig>().unwrap_or_default();

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        LandingRoot { config,
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Navbar and footer around the routed page body.
#[component]
fn DesktopLayout() -> Element {
    rsx! {
        SiteNavbar {}
        Outlet::<Route> {}
        SiteFooter {}
    }
}
