// src/render/font.rs

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;

use crate::config::consts::FONT_CANDIDATES;

/// Load a TTF/OTF font, either from an explicit path or by probing a
/// short list of common system locations.
pub fn load(path: Option<&Path>) -> Result<FontVec, Box<dyn Error>> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => probe().ok_or("no usable system font found; pass --font <path>")?,
    };
    let bytes = fs::read(&path)?;
    FontVec::try_from_vec(bytes).map_err(|_| format!("not a valid font: {}", path.display()).into())
}

fn probe() -> Option<PathBuf> {
    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}
