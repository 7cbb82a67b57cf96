// src/scrape/mod.rs
mod episodes;
mod ratings;
mod show;

pub use episodes::parse_episode_ratings;
pub use ratings::collect_ratings;
pub use show::{latest_year, parse_latest_year};

use crate::config::consts::TITLE_PREFIX;

/* ---------- URL paths ---------- */

// Pure functions taking explicit parameters; no process-wide state.

/// Path of the show's landing page.
pub fn show_path(show_id: &str) -> String {
    format!("{}{}", TITLE_PREFIX, show_id)
}

/// Path of the per-year episode list endpoint.
pub fn episodes_path(show_id: &str, year: i32) -> String {
    format!("{}{}/episodes/_ajax?year={}", TITLE_PREFIX, show_id, year)
}
