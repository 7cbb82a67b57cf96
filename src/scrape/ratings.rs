// src/scrape/ratings.rs

use std::error::Error;
use std::ops::RangeInclusive;

use crate::config::consts::HOST;
use crate::core::net;
use crate::progress::Progress;
use crate::table::{RatingTable, TableBuilder};

/// Fetch one episode list page per year, in ascending order, and assemble
/// the finished rating table.
///
/// Strictly sequential and blocking: one GET per year, no retry, no
/// caching. The first non-200 response or parse failure aborts the whole
/// collection with no partial output.
pub fn collect_ratings(
    show_id: &str,
    years: RangeInclusive<i32>,
    progress: Option<&mut dyn Progress>,
) -> Result<RatingTable, Box<dyn Error>> {
    collect_with(show_id, years, progress, |path| net::http_get(HOST, path))
}

// The year loop with the page fetch abstracted out, so the abort behavior
// is testable without a network.
fn collect_with<F>(
    show_id: &str,
    years: RangeInclusive<i32>,
    mut progress: Option<&mut dyn Progress>,
    mut fetch: F,
) -> Result<RatingTable, Box<dyn Error>>
where
    F: FnMut(&str) -> Result<String, Box<dyn Error>>,
{
    let total = year_count(&years);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut tb = TableBuilder::new();
    for year in years {
        let doc = fetch(&super::episodes_path(show_id, year))?;
        let ratings = super::parse_episode_ratings(&doc).map_err(|e| {
            loge!("{show_id} year {year}: {e}");
            format!("{show_id} year {year}: {e}")
        })?;

        if let Some(p) = progress.as_deref_mut() {
            p.year_done(year, ratings.len());
        }
        tb.push_year(year, ratings);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(tb.finish())
}

fn year_count(years: &RangeInclusive<i32>) -> usize {
    (*years.end() - *years.start() + 1).max(0) as usize
}
