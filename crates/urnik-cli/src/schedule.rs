//! Locating a programme's timetable on the site's index page.
//!
//! The index groups programmes in collapsible panels; every programme is an
//! anchor inside `div.collapsible-body` whose text is the programme code.

use crate::error::CliError;
use lol_html::{RewriteStrSettings, element, rewrite_str, text};
use std::cell::RefCell;
use url::Url;

/// `(href, text)` of every anchor inside a collapsible panel, in page order.
fn panel_anchors(html: &str) -> Result<Vec<(String, String)>, CliError> {
    let anchors: RefCell<Vec<(String, String)>> = RefCell::new(Vec::new());

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("div.collapsible-body a", |el| {
                    let href = el.get_attribute("href").unwrap_or_default();
                    anchors.borrow_mut().push((href, String::new()));
                    Ok(())
                }),
                text!("div.collapsible-body a", |t| {
                    if let Some((_, text)) = anchors.borrow_mut().last_mut() {
                        text.push_str(t.as_str());
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    )?;

    Ok(anchors.into_inner())
}

/// Timetable URL of `program`: the site root plus the anchor's path.
pub fn program_url(base: &Url, index_html: &str, program: &str) -> Result<Url, CliError> {
    let href = panel_anchors(index_html)?
        .into_iter()
        .find(|(href, text)| !href.is_empty() && text.trim() == program)
        .map(|(href, _)| href)
        .ok_or_else(|| CliError::ProgramNotFound(program.to_string()))?;

    let target = base.join(&href)?;
    let mut url = base.clone();
    url.set_path(target.path());
    url.set_query(None);
    url.set_fragment(None);
    log::debug!("{program} → {url}");
    Ok(url)
}

/// Narrow a timetable URL to the week containing `date`.
pub fn with_day(mut url: Url, date: Option<&str>) -> Url {
    if let Some(date) = date {
        url.query_pairs_mut().append_pair("day", date);
    }
    url
}
