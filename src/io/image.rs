//! Loading an exemplar from a PNG and rendering a solved (or partial) wave
//! back to one
//!
//! Colour quantisation assigns cell values deterministically: distinct RGBA
//! colours are sorted and numbered in that order, so the same PNG always
//! yields the same exemplar cell values regardless of pixel scan order.

use crate::algorithm::WfcState;
use crate::io::configuration::{CELL_VALUE_LIMIT, UNDECIDED_COLOR};
use crate::io::error::WfcError;
use crate::spatial::exemplar::Exemplar;
use crate::spatial::tile;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::collections::BTreeSet;
use std::path::Path;

/// An exemplar decoded from a PNG, together with the colour palette its cell
/// values index into
pub struct ExemplarImage {
    /// The extracted cell grid
    pub exemplar: Exemplar,
    /// `palette[cell_value]` is the RGBA colour that cell value represents
    pub palette: Vec<[u8; 4]>,
}

/// Load a PNG file and quantise it into an [`Exemplar`]
///
/// # Errors
///
/// Returns [`WfcError::ImageLoad`] if the file cannot be decoded, or
/// [`WfcError::InvalidExemplar`] if the image uses more than
/// [`CELL_VALUE_LIMIT`] distinct colours, since a cell value would then
/// overflow the 4-bit cell range.
pub fn load_exemplar_png(path: &Path) -> Result<ExemplarImage, WfcError> {
    let img = image::open(path)
        .map_err(|source| WfcError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let width = img.width() as usize;
    let height = img.height() as usize;

    let mut distinct: BTreeSet<[u8; 4]> = BTreeSet::new();
    for pixel in img.pixels() {
        distinct.insert(pixel.0);
    }

    if distinct.len() > CELL_VALUE_LIMIT as usize {
        return Err(WfcError::InvalidExemplar {
            reason: format!(
                "image uses {} distinct colours, more than the {CELL_VALUE_LIMIT}-value cell range",
                distinct.len()
            ),
        });
    }

    let palette: Vec<[u8; 4]> = distinct.into_iter().collect();
    let mut cells = Vec::with_capacity(width * height);
    for pixel in img.pixels() {
        let index = palette
            .iter()
            .position(|colour| *colour == pixel.0)
            .unwrap_or(0);
        cells.push(index as u8);
    }

    let exemplar = Exemplar::new(cells, width, height)?;
    Ok(ExemplarImage { exemplar, palette })
}

/// Render the current wave to a PNG, one pixel per output cell
///
/// A cell with exactly one allowed pattern is rendered in that pattern's
/// top-left cell colour; a still-undecided cell is rendered as
/// [`UNDECIDED_COLOR`].
///
/// # Errors
///
/// Returns [`WfcError::ImageExport`] if the image cannot be saved, or
/// [`WfcError::FileSystem`] if the parent directory cannot be created.
pub fn render_wave_png(
    state: &WfcState,
    palette: &[[u8; 4]],
    path: &Path,
) -> Result<(), WfcError> {
    let width = state.output_width() as u32;
    let height = state.output_height() as u32;
    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let allowed = state.read_cell(x as i32, y as i32);
            let colour = if let [pattern_index] = allowed[..] {
                let cell_value = state
                    .pattern_tile(pattern_index)
                    .map_or(0, |pattern| tile::unpack(pattern.tile).0);
                palette
                    .get(cell_value as usize)
                    .copied()
                    .unwrap_or(UNDECIDED_COLOR)
            } else {
                UNDECIDED_COLOR
            };
            img.put_pixel(x, y, Rgba(colour));
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| WfcError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    img.save(path).map_err(|source| WfcError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
