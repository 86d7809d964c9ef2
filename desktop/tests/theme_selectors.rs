#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the class names the shared components render keep a matching rule in the
  stylesheets desktop embeds (`ui/assets/theme/main.css` and the navbar sheet).
- Fail fast if a refactor renames a class on one side only, which would otherwise
  show up as a silent styling regression in packaged (embedded) desktop builds.

How it works:
- Both stylesheets are embedded with `include_str!` (mirrors the constants in
  `desktop/src/main.rs` and `ui/src/components/site_navbar.rs`).
- A curated list of structural selectors must be present.
- Every literal `class:` value in `ui/src` must be defined somewhere.

Extending:
- Interpolated class values (`"{class}"`) are skipped; add their pieces to
  REQUIRED_SELECTORS instead.
*/

use std::fs;
use std::path::{Path, PathBuf};

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".landing-root",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".section-header",
    // Pricing cards (class assembled at runtime)
    ".plan-card {",
    ".plan-card--recommended",
    ".plan-card--selected",
    ".plan-card--hover",
    // Carousel slide motion reads these variables
    "--slide-enter-from",
    "@keyframes carousel-enter",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 768px)",
];

const KNOWN_UNSTYLED: &[&str] = &[
    // Hook classes kept for end-to-end selectors only.
    "lang-button",
    "lang-menu",
    "menu-button",
    "mobile-menu",
];

fn defined(class: &str) -> bool {
    let selector = format!(".{class}");
    [THEME_CSS, NAVBAR_CSS].iter().any(|css| {
        css.match_indices(&selector).any(|(pos, _)| {
            let next = css[pos + selector.len()..].chars().next();
            !matches!(next, Some(c) if c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
    })
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
        } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

/// Class names from each `class:` attribute: either one string literal, or
/// every literal inside an `if .. { "a" } else { "b" }` expression (which
/// always closes with `},`).
fn literal_classes(source: &str) -> Vec<String> {
    let mut classes = Vec::new();
    for (pos, _) in source.match_indices("class:") {
        let value = source[pos + "class:".len()..].trim_start();
        let literals: Vec<&str> = if let Some(rest) = value.strip_prefix('"') {
            rest.split('"').take(1).collect()
        } else if value.starts_with("if ") {
            let expr = value.find("},").map_or(value, |end| &value[..end]);
            expr.split('"').skip(1).step_by(2).collect()
        } else {
            Vec::new()
        };
        for literal in literals.into_iter().filter(|l| !l.contains('{')) {
            classes.extend(literal.split_whitespace().map(str::to_string));
        }
    }
    classes
}

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();
    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn every_rendered_class_is_styled() {
    let ui_src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../ui/src");
    let mut missing = Vec::new();
    for file in rust_sources(&ui_src) {
        let source = fs::read_to_string(&file).unwrap_or_default();
        for class in literal_classes(&source) {
            if !KNOWN_UNSTYLED.contains(&class.as_str()) && !defined(&class) {
                missing.push(format!("{class} ({})", file.display()));
            }
        }
    }
    missing.sort();
    missing.dedup();
    assert!(
        missing.is_empty(),
        "Classes rendered without a matching rule:\n{}",
        missing.join("\n")
    );
}

#[test]
fn literal_class_scanner_handles_conditional_values() {
    let source = r#"
        div {
            class: if open {
                "faq__item faq__item--open"
            } else {
                "faq__item"
            },
            span { class: "{dynamic}" }
        }
    "#;
    let classes = literal_classes(source);
    assert_eq!(classes, ["faq__item", "faq__item--open", "faq__item"]);
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
