//! Backend seam between the painter and a concrete canvas

use std::path::Path;

use super::font::FontSelection;
use super::OutputKind;
use crate::core::{Result, Rgb, RoadmapError};

/// A drawable canvas the painter renders onto
///
/// Coordinates are surface units with the origin at the top-left corner
/// and y growing downwards; backends with other conventions convert.
pub(crate) trait Surface {
    fn kind(&self) -> OutputKind;

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, colour: Rgb) -> Result<()>;

    /// Fill a closed polygon
    fn fill_polygon(&mut self, points: &[[f32; 2]], colour: Rgb) -> Result<()>;

    /// Fill the whole surface
    fn paint(&mut self, colour: Rgb) -> Result<()>;

    /// Draw `text` with its baseline origin at (x, y)
    fn draw_text(&mut self, x: f32, y: f32, text: &str, font: &FontSelection, colour: Rgb)
        -> Result<()>;

    /// Read back one pixel as straight RGBA; vector surfaces have none
    fn pixel(&self, _x: u32, _y: u32) -> Option<[u8; 4]> {
        None
    }

    /// Flush the surface to `path`
    fn finish(self: Box<Self>, path: &Path) -> Result<()>;
}

/// Reject NaN or infinite geometry before it reaches a backend
pub(crate) fn ensure_finite(values: &[f32]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(RoadmapError::backend(format!(
            "non-finite coordinates: {:?}",
            values
        )))
    }
}

/// Normalise a rectangle with negative extents; `None` when it covers nothing
pub(crate) fn normalise_rect(x: f32, y: f32, width: f32, height: f32) -> Option<[f32; 4]> {
    let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
    let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
    if width == 0.0 || height == 0.0 {
        return None;
    }
    Some([x, y, width, height])
}
