// src/scrape/episodes.rs

use std::error::Error;

use crate::config::consts::{EPLIST_CONTAINER, RATING_VALUE_SPAN, RATING_WIDGET};
use crate::core::html::{element_end, inner_after_open_tag, next_tag_block_ci, strip_tags, to_lower};
use crate::core::sanitize::normalize_entities;

/// Extract the per-episode ratings from one year's episode list page,
/// in air order.
///
/// Only widgets inside the episode list container count; the pages carry
/// look-alike rating widgets in recommendation blocks further down. A
/// missing container, a widget without its rating span, or rating text
/// that does not parse is fatal: the site format changed and the whole
/// run must abort rather than produce a silently wrong table.
pub fn parse_episode_ratings(doc: &str) -> Result<Vec<f64>, Box<dyn Error>> {
    // One pass; the markup anchors are already lowercase.
    let lower = to_lower(doc);

    let list_at = lower
        .find(EPLIST_CONTAINER)
        .ok_or("episode list container not found (site format changed?)")?;
    let list_end = element_end(&lower, "div", list_at)
        .ok_or("episode list container is never closed")?;

    let mut ratings = Vec::new();
    let mut pos = list_at;

    while let Some(widget_at) = lower[pos..list_end].find(RATING_WIDGET).map(|i| i + pos) {
        let widget_end = element_end(&lower, "div", widget_at)
            .ok_or("rating widget is never closed")?;

        // The rating span must sit inside this widget's own block.
        let widget = &doc[widget_at..widget_end];
        let (sp_s, sp_e) = next_tag_block_ci(widget, RATING_VALUE_SPAN, "</span>", 0)
            .ok_or("rating widget without a rating value span")?;
        let text = strip_tags(normalize_entities(&inner_after_open_tag(&widget[sp_s..sp_e])));

        let value: f64 = text
            .parse()
            .map_err(|_| format!("malformed rating value {text:?}"))?;
        ratings.push(value);

        // A widget closing past the container would invert the next slice.
        pos = widget_end.min(list_end);
    }

    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(value: &str) -> String {
        format!(
            r#"<div class="ipl-rating-widget">
                 <span class="ipl-rating-star__rating">{value}</span>
                 <span class="ipl-rating-star__total-votes">(1,234)</span>
               </div>"#
        )
    }

    fn page(values: &[&str]) -> String {
        let widgets: String = values.iter().map(|v| widget(v)).collect();
        format!(r#"<html><div class="list detail eplist">{widgets}</div></html>"#)
    }

    #[test]
    fn parses_ratings_in_order() {
        let doc = page(&["8.1", "7.9", "9.0"]);
        assert_eq!(parse_episode_ratings(&doc).unwrap(), vec![8.1, 7.9, 9.0]);
    }

    #[test]
    fn empty_list_yields_no_ratings() {
        let doc = page(&[]);
        assert_eq!(parse_episode_ratings(&doc).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn missing_container_is_fatal() {
        let err = parse_episode_ratings("<html><body>nothing here</body></html>").unwrap_err();
        assert!(err.to_string().contains("container not found"));
    }

    #[test]
    fn malformed_value_is_fatal() {
        let doc = page(&["8.1", "N/A"]);
        let err = parse_episode_ratings(&doc).unwrap_err();
        assert!(err.to_string().contains("malformed rating"));
    }

    #[test]
    fn widgets_outside_the_container_are_ignored() {
        let doc = format!(
            r#"<html><div class="list detail eplist">{}</div>
               <div class="rec-widget">{}</div></html>"#,
            widget("8.1"),
            widget("4.2")
        );
        assert_eq!(parse_episode_ratings(&doc).unwrap(), vec![8.1]);
    }

    #[test]
    fn widget_missing_its_rating_span_is_fatal() {
        // A bare widget must not borrow the next widget's span.
        let broken = r#"<div class="ipl-rating-widget"><b>no rating</b></div>"#;
        let doc = format!(
            r#"<html><div class="list detail eplist">{broken}{}</div></html>"#,
            widget("8.0")
        );
        let err = parse_episode_ratings(&doc).unwrap_err();
        assert!(err.to_string().contains("without a rating value span"));
    }

    #[test]
    fn unclosed_container_is_fatal() {
        let doc = r#"<html><div class="list detail eplist"><div>x</div>"#;
        let err = parse_episode_ratings(doc).unwrap_err();
        assert!(err.to_string().contains("never closed"));
    }
}
