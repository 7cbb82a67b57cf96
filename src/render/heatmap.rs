// src/render/heatmap.rs

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::config::consts::RATING_SCALE_MAX;
use crate::config::options::RenderOptions;
use crate::render::colormap::Gradient;
use crate::table::RatingTable;

// Breathing room between labels, titles and the grid edge.
const PAD: u32 = 8;

/// Pixel geometry of the grid figure. Exposed so callers (and tests) can
/// locate individual cells in the rendered image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub cell: u32,
    /// Top-left corner of the data grid.
    pub grid_x: u32,
    pub grid_y: u32,
    pub width: u32,
    pub height: u32,
}

impl Layout {
    pub fn new(rows: usize, cols: usize, opts: &RenderOptions) -> Self {
        let title = opts.title_px.ceil() as u32;
        let tick = opts.tick_px.ceil() as u32;

        // Left band: episode numbers plus the vertical-axis title.
        let left = title + PAD + tick * 2 + PAD;
        // Year band: axis title row plus the year labels themselves.
        let band = title + PAD + tick + PAD;
        let (top, bottom) = if opts.x_axis_top { (band, PAD) } else { (PAD, band) };

        let cell = opts.cell_size;
        Self {
            rows,
            cols,
            cell,
            grid_x: left,
            grid_y: top,
            width: left + cols as u32 * cell + PAD,
            height: top + rows as u32 * cell + bottom,
        }
    }

    /// Top-left pixel of a cell, zero-based (row, col).
    pub fn cell_origin(&self, row: usize, col: usize) -> (u32, u32) {
        (
            self.grid_x + col as u32 * self.cell,
            self.grid_y + row as u32 * self.cell,
        )
    }

    /// Center pixel of a cell.
    pub fn cell_center(&self, row: usize, col: usize) -> (u32, u32) {
        let (x, y) = self.cell_origin(row, col);
        (x + self.cell / 2, y + self.cell / 2)
    }
}

/// Fill color for a rated cell: the rating mapped onto the gradient's
/// [0, 1] domain against the fixed 0–10 scale.
pub fn cell_color(rating: f64, gradient: &Gradient) -> Rgba<u8> {
    gradient.sample((rating / RATING_SCALE_MAX) as f32)
}

/// Label color for a rated cell: low ratings sit on dark gradient colors
/// and get the first value color, high ratings the second.
pub fn value_color(rating: f64, opts: &RenderOptions) -> Rgba<u8> {
    if rating < opts.value_threshold {
        opts.value_colors[0]
    } else {
        opts.value_colors[1]
    }
}

/// One decimal, matching the precision the site publishes.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Render the rating table as an annotated heat-map grid.
///
/// Absent cells stay at the background pixel — no fill, no border, no
/// text — so "no episode" is visibly different from any rated color.
/// There is no frame around the plot area; only the per-cell grid lines
/// are drawn. Text is skipped entirely when `font` is `None` (geometry
/// and coloring do not depend on it).
pub fn render_grid(
    table: &RatingTable,
    gradient: &Gradient,
    opts: &RenderOptions,
    font: Option<&FontVec>,
) -> RgbaImage {
    let layout = Layout::new(table.row_count(), table.col_count(), opts);
    let mut img = RgbaImage::from_pixel(layout.width, layout.height, opts.background);

    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let Some(rating) = table.get(row, col) else { continue };
            let (x, y) = layout.cell_origin(row, col);
            let rect = Rect::at(x as i32, y as i32).of_size(layout.cell, layout.cell);

            draw_filled_rect_mut(&mut img, rect, cell_color(rating, gradient));
            // Grid line between cells; shared edges just overdraw.
            draw_hollow_rect_mut(&mut img, rect, opts.grid_color);

            if let Some(font) = font {
                draw_centered(
                    &mut img,
                    &format_rating(rating),
                    layout.cell_center(row, col),
                    opts.value_px,
                    value_color(rating, opts),
                    font,
                );
            }
        }
    }

    if let Some(font) = font {
        draw_axis_text(&mut img, table, &layout, opts, font);
    }

    img
}

/* ---------- text helpers ---------- */

fn draw_centered(
    img: &mut RgbaImage,
    text: &str,
    center: (u32, u32),
    px: f32,
    color: Rgba<u8>,
    font: &FontVec,
) {
    let scale = PxScale::from(px);
    let (tw, th) = text_size(scale, font, text);
    let x = center.0.saturating_sub(tw / 2);
    let y = center.1.saturating_sub(th / 2);
    draw_text_mut(img, color, x as i32, y as i32, scale, font, text);
}

fn draw_axis_text(
    img: &mut RgbaImage,
    table: &RatingTable,
    layout: &Layout,
    opts: &RenderOptions,
    font: &FontVec,
) {
    let tick = opts.tick_px.ceil() as u32;
    let title = opts.title_px.ceil() as u32;

    // Year labels, centered per column in the band above (or below) the grid.
    let tick_y = if opts.x_axis_top {
        layout.grid_y - PAD - tick / 2
    } else {
        layout.grid_y + layout.rows as u32 * layout.cell + PAD + tick / 2
    };
    for (col, year) in table.years().iter().enumerate() {
        let (cx, _) = layout.cell_center(0, col);
        draw_centered(img, &year.to_string(), (cx, tick_y), opts.tick_px, opts.tick_color, font);
    }

    // Episode numbers, right of the vertical title, one per row.
    let ep_x = layout.grid_x - PAD - tick;
    for row in 0..layout.rows {
        let (_, cy) = layout.cell_center(row, 0);
        draw_centered(
            img,
            &table.episode_label(row).to_string(),
            (ep_x, cy),
            opts.tick_px,
            opts.tick_color,
            font,
        );
    }

    // Axis titles. Horizontal text only, so the vertical axis title sits
    // at the left edge at mid-height rather than rotated.
    let grid_mid_x = layout.grid_x + layout.cols as u32 * layout.cell / 2;
    let title_y = if opts.x_axis_top {
        title / 2 + 2
    } else {
        layout.height - title / 2 - 2
    };
    draw_centered(img, &opts.x_label, (grid_mid_x, title_y), opts.title_px, opts.title_color, font);

    let grid_mid_y = layout.grid_y + layout.rows as u32 * layout.cell / 2;
    let scale = PxScale::from(opts.title_px);
    draw_text_mut(
        img,
        opts.title_color,
        2,
        grid_mid_y.saturating_sub(title / 2) as i32,
        scale,
        font,
        &opts.y_label,
    );
}
