//! Headline extraction from news pages.
//!
//! The news page is scraped by splitting on literal markers rather than parsing
//! HTML. Each headline item looks like:
//!
//! ```text
//! <li><a href="URL">TITLE</a><cite>SOURCE&nbsp;<span>DATE</span></cite></li>
//! ```
//!
//! and the list of items follows [`DEFAULT_HEADLINE_MARKER`]. Any change to the
//! service's markup surfaces here as an empty result or a
//! [`ReportError::MalformedHeadline`].

use tracing::debug;

use crate::{
    error::{ReportError, Result},
    escape::escape_latex,
    types::HeadlineRecord,
};

/// Marker separating page chrome from the headline list.
pub const DEFAULT_HEADLINE_MARKER: &str = "</span></h3><ul>";

const LIST_CLOSE: &str = "</ul>";
const ITEM_OPEN: &str = "<li>";
const ITEM_CLOSE: &str = "</li>";
const ANCHOR_END: &str = "\">";
const TITLE_END: &str = "</a><cite>";
const SOURCE_END: &str = "&nbsp;<span>";
const DATE_END: &str = "</span></cite>";

/// Parses the headline list, returning one result per `<li>` item.
///
/// Returns an empty vector when `marker` does not occur in `html`, which callers
/// should treat as "no news" rather than an error. Titles are LaTeX-escaped;
/// source and date are kept verbatim.
pub fn parse_headline_items(html: &str, marker: &str) -> Vec<Result<HeadlineRecord>> {
    if marker.is_empty() {
        return Vec::new();
    }
    let Some(block) = html.split(marker).nth(1) else {
        debug!("Headline marker not found");
        return Vec::new();
    };
    let list = block.split_once(LIST_CLOSE).map_or(block, |(list, _)| list);

    let mut items: Vec<&str> = list.split(ITEM_CLOSE).collect();
    // Whatever follows the last closing tag is not an item.
    items.pop();

    items
        .into_iter()
        .map(|raw| parse_item(raw.replace(ITEM_OPEN, "").trim()))
        .collect()
}

/// Parses the headline list, failing on the first malformed item.
///
/// # Errors
///
/// Returns [`ReportError::MalformedHeadline`] for the first item missing a marker.
pub fn parse_headlines(html: &str, marker: &str) -> Result<Vec<HeadlineRecord>> {
    parse_headline_items(html, marker).into_iter().collect()
}

fn parse_item(raw: &str) -> Result<HeadlineRecord> {
    let malformed = |marker| ReportError::MalformedHeadline {
        marker,
        item: raw.to_string(),
    };

    let (_, anchor) = raw.split_once(ANCHOR_END).ok_or_else(|| malformed(ANCHOR_END))?;
    let (title, cite) = anchor.split_once(TITLE_END).ok_or_else(|| malformed(TITLE_END))?;
    let (source, dated) = cite.split_once(SOURCE_END).ok_or_else(|| malformed(SOURCE_END))?;
    let date = dated.split_once(DATE_END).map_or(dated, |(date, _)| date);

    Ok(HeadlineRecord::new(escape_latex(title), source, date))
}
