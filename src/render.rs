// THEORY:
// The `render` module is a debugging aid that paints an analysis onto a raster image.
// Each grid cell becomes a `cell_size` square: marker cells dark, background light.
// Every discovered cluster box is outlined in grey and the selected box in red, so an
// overlap exclusion is visible at a glance.

use crate::core_modules::bounding_box::BoundingBox;
use crate::core_modules::grid::Grid;
use crate::pipeline::{AnalysisReport, AnalyzerConfig};
use image::{ImageEncoder, Rgba, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CELL_SIZE: u32 = 8;

const BACKGROUND: Rgba<u8> = Rgba([240, 240, 240, 255]);
const MARKER: Rgba<u8> = Rgba([40, 40, 40, 255]);
const CLUSTER_OUTLINE: Rgba<u8> = Rgba([150, 150, 150, 255]);
const SELECTED_OUTLINE: Rgba<u8> = Rgba([220, 30, 30, 255]);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("grid has no cells to render")]
    EmptyGrid,

    #[error("grid of {rows}x{cols} cells is too large to render")]
    TooLarge { rows: usize, cols: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Paints `grid` and the boxes in `report` into a new image.
pub fn render_grid(
    grid: &Grid,
    config: &AnalyzerConfig,
    report: &AnalysisReport,
    cell_size: u32,
) -> Result<RgbaImage, RenderError> {
    if cell_size == 0 {
        return Err(RenderError::ZeroCellSize);
    }
    // PNG cannot encode a zero-sized image.
    if grid.height() == 0 || grid.width() == 0 {
        return Err(RenderError::EmptyGrid);
    }

    let too_large = || RenderError::TooLarge {
        rows: grid.height(),
        cols: grid.width(),
    };
    let width = u32::try_from(grid.width())
        .ok()
        .and_then(|w| w.checked_mul(cell_size))
        .ok_or_else(too_large)?;
    let height = u32::try_from(grid.height())
        .ok()
        .and_then(|h| h.checked_mul(cell_size))
        .ok_or_else(too_large)?;

    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);

    // --- 1. Cells ---
    for (cell, ch) in grid.cells() {
        if ch != config.marker {
            continue;
        }
        let x0 = cell.col as u32 * cell_size;
        let y0 = cell.row as u32 * cell_size;
        for y in y0..y0 + cell_size {
            for x in x0..x0 + cell_size {
                image.put_pixel(x, y, MARKER);
            }
        }
    }

    // --- 2. Outlines ---
    for cluster in &report.clusters {
        draw_outline(&mut image, &cluster.bounding_box, cell_size, CLUSTER_OUTLINE);
    }
    if let Some(selected) = &report.largest {
        draw_outline(&mut image, selected, cell_size, SELECTED_OUTLINE);
    }

    Ok(image)
}

/// One-pixel rectangle along the outer edge of the cells covered by `b`.
fn draw_outline(image: &mut RgbaImage, b: &BoundingBox, cell_size: u32, color: Rgba<u8>) {
    let left = b.min_col() as u32 * cell_size;
    let top = b.min_row() as u32 * cell_size;
    let right = (b.max_col() as u32 + 1) * cell_size - 1;
    let bottom = (b.max_row() as u32 + 1) * cell_size - 1;

    for x in left..=right {
        image.put_pixel(x, top, color);
        image.put_pixel(x, bottom, color);
    }
    for y in top..=bottom {
        image.put_pixel(left, y, color);
        image.put_pixel(right, y, color);
    }
}

/// Writes `image` to `path` as PNG.
pub fn save_png(path: &Path, image: &RgbaImage) -> Result<(), RenderError> {
    let output = BufWriter::new(File::create(path)?);
    let encoder = image::codecs::png::PngEncoder::new(output);

    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;

    Ok(())
}
