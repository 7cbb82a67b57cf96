// src/scrape/show.rs

use std::error::Error;

use crate::config::consts::{HOST, YEAR_NAV};
use crate::core::html::{next_tag_block_ci, slice_between_ci, strip_tags};
use crate::core::net;

/// Fetch the show page and read the most recent broadcast year from its
/// seasons/years navigation block. Used when the caller gives no upper
/// bound for the year range.
pub fn latest_year(show_id: &str) -> Result<i32, Box<dyn Error>> {
    let doc = net::http_get(HOST, &super::show_path(show_id))?;
    parse_latest_year(&doc)
}

/// The navigation lists years newest first; the first link wins.
pub fn parse_latest_year(doc: &str) -> Result<i32, Box<dyn Error>> {
    let nav = slice_between_ci(doc, YEAR_NAV, "</div>")
        .ok_or("seasons-and-year navigation not found (site format changed?)")?;

    let (a_s, a_e) =
        next_tag_block_ci(nav, "<a", "</a>", 0).ok_or("year navigation holds no links")?;
    let text = strip_tags(&nav[a_s..a_e]);

    text.parse()
        .map_err(|_| format!("year link is not a year: {text:?}").into())
}
