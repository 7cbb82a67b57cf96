// src/config/consts.rs

// Net config
pub const HOST: &str = "www.imdb.com";
pub const TITLE_PREFIX: &str = "/title/";

// Markup anchors on the per-year episode list page
pub const EPLIST_CONTAINER: &str = r#"class="list detail eplist""#;
pub const RATING_WIDGET: &str = r#"<div class="ipl-rating-widget""#;
pub const RATING_VALUE_SPAN: &str = r#"<span class="ipl-rating-star__rating""#;

// Markup anchor on the show page (most-recent-year discovery)
pub const YEAR_NAV: &str = r#"<div class="seasons-and-year-nav""#;

// Ratings are always colored against this fixed scale, never the
// observed min/max, so color meaning is stable across shows.
pub const RATING_SCALE_MAX: f64 = 10.0;

// Default gradient: dark low end (white value text), light high end
// (black value text). Segment starts are on the gradient's [0,1] domain,
// i.e. rating / 10.
pub const RATING_COLORS: [[u8; 4]; 5] = [
    [103, 0, 13, 255],    // deep red
    [203, 24, 29, 255],   // red
    [253, 141, 60, 255],  // orange
    [254, 217, 118, 255], // pale yellow
    [116, 196, 118, 255], // green
];
pub const RATING_SEGMENT_STARTS: [f32; 5] = [0.0, 0.5, 0.65, 0.75, 0.85];
pub const RATING_LABELS: [&str; 5] = [
    "Awful (under 5)",
    "Bad (5 to 6.5)",
    "Okay (6.5 to 7.5)",
    "Good (7.5 to 8.5)",
    "Great (8.5 and up)",
];

// Output
pub const DEFAULT_OUT_FILE: &str = "ratings.png";

// Font probe list for when --font is not given
pub const FONT_CANDIDATES: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];
