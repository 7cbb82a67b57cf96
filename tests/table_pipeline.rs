// tests/table_pipeline.rs
//
// Mock three-year scrape for show "tt0000001": parse each year's page the
// way the retriever does, assemble the table, and check the exact shape
// the padding/dropping rules must produce.

use ratemap::scrape::parse_episode_ratings;
use ratemap::table::{RatingTable, TableBuilder};

fn episode_page(values: &[&str]) -> String {
    let widgets: String = values
        .iter()
        .map(|v| {
            format!(
                r#"<div class="ipl-rating-widget">
                     <span class="ipl-rating-star__rating">{v}</span>
                     <span class="ipl-rating-star__total-votes">(99)</span>
                   </div>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><div class="list detail eplist">{widgets}</div></body></html>"#
    )
}

fn mock_three_year_table() -> RatingTable {
    let seasons: [(i32, &[&str]); 3] = [
        (2000, &["8.1", "7.9"]),
        (2001, &["9.0"]),
        (2002, &["6.4", "6.6", "7.0"]),
    ];

    let mut tb = TableBuilder::new();
    for (year, values) in seasons {
        let doc = episode_page(values);
        let ratings = parse_episode_ratings(&doc).expect("mock page parses");
        tb.push_year(year, ratings);
    }
    tb.finish()
}

#[test]
fn three_by_three_with_exactly_three_absent_cells() {
    let t = mock_three_year_table();

    assert_eq!(t.row_count(), 3);
    assert_eq!(t.col_count(), 3);
    assert_eq!(t.years(), &[2000, 2001, 2002]);

    // Present cells keep their parsed values.
    assert_eq!(t.get(0, 0), Some(8.1));
    assert_eq!(t.get(1, 0), Some(7.9));
    assert_eq!(t.get(0, 1), Some(9.0));
    assert_eq!(t.get(0, 2), Some(6.4));
    assert_eq!(t.get(1, 2), Some(6.6));
    assert_eq!(t.get(2, 2), Some(7.0));

    // The padded cells, and only these, are absent.
    assert_eq!(t.get(2, 0), None);
    assert_eq!(t.get(1, 1), None);
    assert_eq!(t.get(2, 1), None);

    let absent: usize = (0..3)
        .flat_map(|r| (0..3).map(move |c| (r, c)))
        .filter(|&(r, c)| t.get(r, c).is_none())
        .count();
    assert_eq!(absent, 3);
}

#[test]
fn episode_labels_are_one_based_and_consecutive() {
    let t = mock_three_year_table();
    let labels: Vec<usize> = (0..t.row_count()).map(|r| t.episode_label(r)).collect();
    assert_eq!(labels, vec![1, 2, 3]);
}

#[test]
fn csv_dump_distinguishes_absent_from_zero() {
    let t = mock_three_year_table();
    let csv = ratemap::csv::to_csv_string(&t.to_rows());

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Episode,2000,2001,2002");
    assert_eq!(lines[1], "1,8.1,9.0,6.4");
    assert_eq!(lines[2], "2,7.9,,6.6");
    assert_eq!(lines[3], "3,,,7.0");
}
