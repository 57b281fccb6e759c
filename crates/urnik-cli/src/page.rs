//! Turns a downloaded timetable into the editable page.
//!
//! - links are disarmed (clicking a box must hide it, not navigate)
//! - group badges (`span.layer_one`) are dropped
//! - entry backgrounds are darkened to a common lightness
//! - the wasm bundle and a stylesheet are injected into `<head>`

use crate::error::CliError;
use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, element, rewrite_str};
use std::cell::Cell;
use urnik_core::recolor_style;

/// Lightness, in percent, every entry background is set to.
pub const ENTRY_LIGHTNESS: f64 = 35.0;

/// What gets injected into the page head.
#[derive(Debug, Clone)]
pub struct PageAssets {
    /// ES module exporting the wasm-bindgen `init` (wasm-pack `--target web`).
    pub script_src: String,
    pub stylesheet: String,
    pub lightness: f64,
}

impl PageAssets {
    fn head_html(&self) -> String {
        format!(
            "<script type=\"module\">import init from \"{}\"; init();</script>\n\
             <link href=\"{}\" rel=\"stylesheet\">\n",
            escape_attr(&self.script_src),
            escape_attr(&self.stylesheet),
        )
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;")
}

/// Rewrite a timetable page. Fails only on malformed markup the rewriter
/// cannot tokenize.
pub fn rewrite_page(html: &str, assets: &PageAssets) -> Result<String, CliError> {
    let injected = Cell::new(false);
    let head_html = assets.head_html();

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("head", |el| {
                    if !injected.replace(true) {
                        el.append(&head_html, ContentType::Html);
                    }
                    Ok(())
                }),
                element!("a[href]", |el| {
                    el.remove_attribute("href");
                    Ok(())
                }),
                element!("span.layer_one", |el| {
                    el.remove();
                    Ok(())
                }),
                element!("div.entry[style]", |el| {
                    if let Some(style) = el.get_attribute("style") {
                        el.set_attribute("style", &recolor_style(&style, assets.lightness))?;
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    )?;

    if !injected.get() {
        log::warn!("page has no <head>; interaction bundle not injected");
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = include_str!("../tests/fixtures/timetable.html");

    fn assets() -> PageAssets {
        PageAssets {
            script_src: "./static/urnik_wasm.js".into(),
            stylesheet: "static/style.css".into(),
            lightness: ENTRY_LIGHTNESS,
        }
    }

    #[test]
    fn strips_every_href() {
        let out = rewrite_page(PAGE, &assets()).unwrap();
        assert!(!out.contains("href=\"/"), "{out}");
        assert_eq!(out.matches("<a").count(), PAGE.matches("<a").count());
    }

    #[test]
    fn removes_group_badges() {
        let out = rewrite_page(PAGE, &assets()).unwrap();
        assert!(!out.contains("layer_one"));
        assert!(!out.contains("RV1"));
        assert!(out.contains("Genetika"));
    }

    #[test]
    fn recolors_entries_only() {
        let out = rewrite_page(PAGE, &assets()).unwrap();
        assert!(
            out.contains("style=\"background-color: hsla(200, 50%, 35%, 1); color: black\""),
            "{out}"
        );
        assert!(out.contains("style=\"background-color: hsla(20, 70%, 35%, 0.9)\""), "{out}");
        // Not a div.entry: untouched.
        assert!(out.contains("style=\"color: hsla(0, 0%, 90%, 1)\""), "{out}");
    }

    #[test]
    fn injects_assets_once() {
        let out = rewrite_page(PAGE, &assets()).unwrap();
        assert_eq!(out.matches("<script type=\"module\">").count(), 1);
        assert!(out.contains("import init from \"./static/urnik_wasm.js\"; init();"));
        assert_eq!(
            out.matches("<link href=\"static/style.css\" rel=\"stylesheet\">").count(),
            1
        );
        let head_end = out.find("</head>").unwrap();
        assert!(out.find("<script type=\"module\">").unwrap() < head_end);
    }

    #[test]
    fn keeps_selectable_boxes() {
        let out = rewrite_page(PAGE, &assets()).unwrap();
        assert_eq!(out.matches("entry-absolute-box").count(), 3);
    }

    #[test]
    fn headless_page_is_not_an_error() {
        let out = rewrite_page("<p><a href=\"/x\">x</a></p>", &assets()).unwrap();
        assert!(!out.contains("href"), "{out}");
        assert!(!out.contains("<script"), "{out}");
        assert!(out.ends_with(">x</a></p>"), "{out}");
    }

    #[test]
    fn asset_paths_are_escaped() {
        let a = PageAssets {
            script_src: "./x\".js".into(),
            ..assets()
        };
        assert!(a.head_html().contains("./x&quot;.js"));
    }
}
