// src/render/mod.rs
pub mod colormap;
pub mod font;
pub mod heatmap;
pub mod panel;

pub use heatmap::{render_grid, Layout};
pub use panel::{render_info_panel, LegendEntry};

use image::{imageops, RgbaImage};

/// Compose the heat-map grid and the info panel side by side on one
/// canvas, both aligned to the top edge. The spare area stays transparent.
pub fn compose(grid: &RgbaImage, panel: &RgbaImage) -> RgbaImage {
    let width = grid.width() + panel.width();
    let height = grid.height().max(panel.height());

    let mut img = RgbaImage::new(width, height);
    imageops::replace(&mut img, grid, 0, 0);
    imageops::replace(&mut img, panel, grid.width() as i64, 0);
    img
}
