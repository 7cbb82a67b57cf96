// src/render/panel.rs

use ab_glyph::{FontVec, PxScale};
use image::{imageops, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::config::options::PanelOptions;

const SWATCH: u32 = 16;
const ROW_GAP: u32 = 8;
const COL_GAP: u32 = 12;
const LABEL_GAP: u32 = 6;

/// One legend row: this color means this category.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub color: image::Rgba<u8>,
    pub label: String,
}

impl LegendEntry {
    pub fn new(color: image::Rgba<u8>, label: &str) -> Self {
        Self { color, label: s!(label) }
    }
}

/// Decorative companion panel: an optional backdrop image with a
/// multi-column legend overlaid near its lower half. No frame, no ticks —
/// just the picture and the key.
///
/// With a backdrop the panel adopts the backdrop's dimensions; without
/// one it is a flat `opts.background` canvas of `opts.width` x `opts.height`.
pub fn render_info_panel(
    backdrop: Option<&RgbaImage>,
    entries: &[LegendEntry],
    opts: &PanelOptions,
    font: Option<&FontVec>,
) -> RgbaImage {
    let (w, h) = match backdrop {
        Some(img) => (img.width(), img.height()),
        None => (opts.width, opts.height),
    };
    let mut img = RgbaImage::from_pixel(w, h, opts.background);
    if let Some(bd) = backdrop {
        imageops::replace(&mut img, bd, 0, 0);
    }

    if entries.is_empty() {
        return img;
    }

    let columns = opts.columns.max(1);
    let rows = entries.len().div_ceil(columns);
    let row_h = SWATCH + ROW_GAP;

    // Column width from the widest label, falling back to a rough
    // per-character estimate when no font is loaded.
    let label_w = |label: &str| -> u32 {
        match font {
            Some(f) => text_size(PxScale::from(opts.label_px), f, label).0,
            None => (label.len() as f32 * opts.label_px * 0.55) as u32,
        }
    };
    let widest = entries.iter().map(|e| label_w(&e.label)).max().unwrap_or(0);
    let col_w = SWATCH + LABEL_GAP + widest + COL_GAP;

    let block_w = col_w * columns as u32 - COL_GAP;
    let title_h = opts.title_px.ceil() as u32 + ROW_GAP;
    let block_h = title_h + rows as u32 * row_h;

    // Anchor is the block center, measured from the bottom-left like the
    // source figure's legend placement.
    let center_x = (w as f32 * opts.anchor.0) as i64;
    let center_y = (h as f32 * (1.0 - opts.anchor.1)) as i64;
    let block_x = (center_x - block_w as i64 / 2).max(0) as u32;
    let block_y = (center_y - block_h as i64 / 2).max(0) as u32;

    if let Some(f) = font {
        let (tw, _) = text_size(PxScale::from(opts.title_px), f, &opts.title);
        let tx = block_x + block_w.saturating_sub(tw) / 2;
        draw_text_mut(
            &mut img,
            opts.label_color,
            tx as i32,
            block_y as i32,
            PxScale::from(opts.title_px),
            f,
            &opts.title,
        );
    }

    for (i, entry) in entries.iter().enumerate() {
        let col = (i % columns) as u32;
        let row = (i / columns) as u32;
        let x = block_x + col * col_w;
        let y = block_y + title_h + row * row_h;

        if x + SWATCH >= w || y + SWATCH >= h {
            continue; // panel too small for this entry; skip quietly
        }

        let rect = Rect::at(x as i32, y as i32).of_size(SWATCH, SWATCH);
        draw_filled_rect_mut(&mut img, rect, entry.color);
        draw_hollow_rect_mut(&mut img, rect, opts.swatch_edge);

        if let Some(f) = font {
            let ty = y + (SWATCH.saturating_sub(opts.label_px.ceil() as u32)) / 2;
            draw_text_mut(
                &mut img,
                opts.label_color,
                (x + SWATCH + LABEL_GAP) as i32,
                ty as i32,
                PxScale::from(opts.label_px),
                f,
                &entry.label,
            );
        }
    }

    img
}
