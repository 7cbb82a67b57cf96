// src/runner.rs
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use image::Rgba;

use crate::config::consts::{
    DEFAULT_OUT_FILE, RATING_COLORS, RATING_LABELS, RATING_SEGMENT_STARTS,
};
use crate::config::options::{PanelOptions, RenderOptions};
use crate::csv::to_csv_string;
use crate::progress::Progress;
use crate::render::colormap::Gradient;
use crate::render::{self, font, LegendEntry};
use crate::scrape;

/// One run's worth of settings, fully resolved by the CLI.
#[derive(Clone, Debug)]
pub struct Params {
    pub show_id: String,
    pub from_year: i32,
    /// None = discover the most recent year from the show page.
    pub to_year: Option<i32>,
    pub out: PathBuf,
    pub font: Option<PathBuf>,
    pub backdrop: Option<PathBuf>,
    pub panel: bool,
    pub csv: Option<PathBuf>,
}

impl Params {
    pub fn new(show_id: &str) -> Self {
        Self {
            show_id: s!(show_id),
            from_year: 2000,
            to_year: None,
            out: PathBuf::from(DEFAULT_OUT_FILE),
            font: None,
            backdrop: None,
            panel: true,
            csv: None,
        }
    }
}

/// What a run produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub rows: usize,
    pub cols: usize,
}

/// The whole pipeline: resolve years, fetch, assemble, render, write.
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let last = match params.to_year {
        Some(y) => y,
        None => {
            if let Some(p) = progress.as_deref_mut() {
                p.log("Looking up most recent year…");
            }
            scrape::latest_year(&params.show_id)?
        }
    };
    if last < params.from_year {
        return Err(format!("year range is empty: {}..={}", params.from_year, last).into());
    }
    logf!("{}: scraping {}..={}", params.show_id, params.from_year, last);

    // Last use of the progress sink; hand it over outright.
    let table = scrape::collect_ratings(&params.show_id, params.from_year..=last, progress)?;
    if table.is_empty() {
        return Err(format!(
            "no rated episodes found for {} in {}..={}",
            params.show_id, params.from_year, last
        )
        .into());
    }

    // Label drawing degrades gracefully when no font can be found;
    // the grid itself never depends on one.
    let font = match font::load(params.font.as_deref()) {
        Ok(f) => Some(f),
        Err(e) => {
            eprintln!("Warning: {e}; rendering without text labels");
            None
        }
    };

    let gradient = default_gradient()?;
    let opts = RenderOptions::default();
    let grid = render::render_grid(&table, &gradient, &opts, font.as_ref());

    let img = if params.panel {
        let backdrop = match &params.backdrop {
            Some(path) => Some(image::open(path)?.to_rgba8()),
            None => None,
        };
        let panel = render::render_info_panel(
            backdrop.as_ref(),
            &default_legend(),
            &PanelOptions::default(),
            font.as_ref(),
        );
        render::compose(&grid, &panel)
    } else {
        grid
    };

    let mut written = Vec::with_capacity(2);
    img.save(&params.out)?;
    written.push(params.out.clone());

    if let Some(csv_path) = &params.csv {
        fs::write(csv_path, to_csv_string(&table.to_rows()))?;
        written.push(csv_path.clone());
    }

    Ok(RunSummary {
        files_written: written,
        rows: table.row_count(),
        cols: table.col_count(),
    })
}

/* ---------- defaults from consts ---------- */

pub fn default_gradient() -> Result<Gradient, Box<dyn Error>> {
    let colors: Vec<Rgba<u8>> = RATING_COLORS.iter().map(|&c| Rgba(c)).collect();
    Gradient::from_segments(&colors, &RATING_SEGMENT_STARTS)
}

pub fn default_legend() -> Vec<LegendEntry> {
    RATING_COLORS
        .iter()
        .zip(RATING_LABELS)
        .map(|(&color, label)| LegendEntry::new(Rgba(color), label))
        .collect()
}
