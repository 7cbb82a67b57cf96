// tests/render_output.rs
//
// Pixel-level checks on the rendered artifacts: the mock three-year grid
// must leave exactly its three absent cells at the background pixel, and
// the composed figure must encode as a PNG.

use image::Rgba;

use ratemap::config::options::{PanelOptions, RenderOptions};
use ratemap::render::{self, Layout};
use ratemap::runner::{default_gradient, default_legend};
use ratemap::table::{RatingTable, TableBuilder};

fn mock_table() -> RatingTable {
    let mut tb = TableBuilder::new();
    tb.push_year(2000, vec![8.1, 7.9]);
    tb.push_year(2001, vec![9.0]);
    tb.push_year(2002, vec![6.4, 6.6, 7.0]);
    tb.finish()
}

#[test]
fn exactly_the_absent_cells_render_transparent() {
    let table = mock_table();
    let opts = RenderOptions::default();
    let gradient = default_gradient().unwrap();

    let img = render::render_grid(&table, &gradient, &opts, None);
    let layout = Layout::new(table.row_count(), table.col_count(), &opts);

    for row in 0..3 {
        for col in 0..3 {
            let (x, y) = layout.cell_center(row, col);
            let px = *img.get_pixel(x, y);
            if table.get(row, col).is_some() {
                assert_ne!(px, opts.background, "cell ({row},{col}) should be colored");
            } else {
                assert_eq!(px, opts.background, "cell ({row},{col}) should be masked");
            }
        }
    }
}

#[test]
fn opaque_background_shows_through_absent_cells() {
    let table = mock_table();
    let opts = RenderOptions {
        background: Rgba([20, 20, 40, 255]),
        ..RenderOptions::default()
    };
    let img = render::render_grid(&table, &default_gradient().unwrap(), &opts, None);
    let layout = Layout::new(table.row_count(), table.col_count(), &opts);

    let (x, y) = layout.cell_center(2, 0);
    assert_eq!(*img.get_pixel(x, y), Rgba([20, 20, 40, 255]));
}

#[test]
fn composed_figure_round_trips_through_png() {
    let table = mock_table();
    let opts = RenderOptions::default();
    let grid = render::render_grid(&table, &default_gradient().unwrap(), &opts, None);
    let panel = render::render_info_panel(None, &default_legend(), &PanelOptions::default(), None);
    let fig = render::compose(&grid, &panel);

    let mut path = std::env::temp_dir();
    path.push("ratemap_render_output_test.png");
    fig.save(&path).expect("png encode");

    let back = image::open(&path).expect("png decode").to_rgba8();
    assert_eq!((back.width(), back.height()), (fig.width(), fig.height()));
    let _ = std::fs::remove_file(&path);
}
