// src/config/options.rs
use image::Rgba;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Styling for the heat-map grid. Plain values, validated only by type;
/// every knob has a stated default and is set programmatically (no env,
/// no config file).
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub cell_size: u32,
    pub grid_color: Rgba<u8>,
    /// Absent cells end up as exactly this pixel (transparent by default),
    /// so "no episode" never reads as "rated zero".
    pub background: Rgba<u8>,
    pub x_label: String,
    pub y_label: String,
    /// Year labels along the top edge; false puts them under the grid.
    pub x_axis_top: bool,
    pub value_px: f32,
    pub tick_px: f32,
    pub title_px: f32,
    /// Ratings below this use `value_colors[0]`, at or above it
    /// `value_colors[1]`.
    pub value_threshold: f64,
    pub value_colors: [Rgba<u8>; 2],
    pub tick_color: Rgba<u8>,
    pub title_color: Rgba<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: 36,
            grid_color: WHITE,
            background: TRANSPARENT,
            x_label: s!("Season"),
            y_label: s!("Episode"),
            x_axis_top: true,
            value_px: 14.0,
            tick_px: 14.0,
            title_px: 18.0,
            value_threshold: 6.5,
            value_colors: [WHITE, BLACK],
            tick_color: BLACK,
            title_color: BLACK,
        }
    }
}

/// Styling for the legend/info panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelOptions {
    /// Panel size when no backdrop image is supplied; with a backdrop the
    /// panel adopts the backdrop's dimensions.
    pub width: u32,
    pub height: u32,
    pub background: Rgba<u8>,
    pub title: String,
    pub title_px: f32,
    pub label_px: f32,
    pub label_color: Rgba<u8>,
    pub swatch_edge: Rgba<u8>,
    pub columns: usize,
    /// Legend block center as a fraction of panel width/height,
    /// measured from the bottom-left like the source figure.
    pub anchor: (f32, f32),
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            width: 360,
            height: 480,
            background: WHITE,
            title: s!("Rating Category"),
            title_px: 16.0,
            label_px: 13.0,
            label_color: BLACK,
            swatch_edge: WHITE,
            columns: 2,
            anchor: (0.5, 0.15),
        }
    }
}
