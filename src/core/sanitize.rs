// src/core/sanitize.rs

/// Replace the couple of entities the rating pages actually emit.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
