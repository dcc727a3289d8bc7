//! Raster surface backed by a tiny-skia pixmap, saved as PNG

use std::path::Path;

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};
use tracing::trace;

use super::font::{FontSelection, PathSegment};
use super::surface::{ensure_finite, normalise_rect, Surface};
use super::OutputKind;
use crate::core::{Result, Rgb, RoadmapError};

pub(crate) struct RasterSurface {
    pixmap: Pixmap,
}

impl RasterSurface {
    /// Create a fully transparent pixmap
    pub(crate) fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            RoadmapError::backend(format!("cannot allocate a {}x{} pixmap", width, height))
        })?;
        Ok(Self { pixmap })
    }

    fn fill_path(&mut self, builder: PathBuilder, colour: Rgb) {
        // An empty or degenerate path draws nothing.
        if let Some(path) = builder.finish() {
            self.pixmap.fill_path(
                &path,
                &paint_for(colour),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}

fn paint_for(colour: Rgb) -> Paint<'static> {
    let (r, g, b) = colour.to_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;
    paint
}

impl Surface for RasterSurface {
    fn kind(&self) -> OutputKind {
        OutputKind::Raster
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, colour: Rgb) -> Result<()> {
        ensure_finite(&[x, y, width, height])?;
        let Some([x, y, width, height]) = normalise_rect(x, y, width, height) else {
            return Ok(());
        };
        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            self.pixmap
                .fill_rect(rect, &paint_for(colour), Transform::identity(), None);
        }
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[[f32; 2]], colour: Rgb) -> Result<()> {
        ensure_finite(&points.concat())?;
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        let mut builder = PathBuilder::new();
        builder.move_to(first[0], first[1]);
        for p in rest {
            builder.line_to(p[0], p[1]);
        }
        builder.close();
        self.fill_path(builder, colour);
        Ok(())
    }

    fn paint(&mut self, colour: Rgb) -> Result<()> {
        let (r, g, b) = colour.to_u8();
        self.pixmap.fill(Color::from_rgba8(r, g, b, 255));
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font: &FontSelection,
        colour: Rgb,
    ) -> Result<()> {
        ensure_finite(&[x, y, font.size])?;
        let Some(face) = &font.face else {
            trace!(text, "No font face, skipping raster text");
            return Ok(());
        };

        let mut builder = PathBuilder::new();
        let mut pen: Option<[f32; 2]> = None;
        for segment in face.outline(font.size, text, x, y) {
            let start = segment.start();
            if pen != Some(start) {
                if pen.is_some() {
                    builder.close();
                }
                builder.move_to(start[0], start[1]);
            }
            match segment {
                PathSegment::Line(_, p) => builder.line_to(p[0], p[1]),
                PathSegment::Quad(_, c, p) => builder.quad_to(c[0], c[1], p[0], p[1]),
                PathSegment::Cubic(_, c1, c2, p) => {
                    builder.cubic_to(c1[0], c1[1], c2[0], c2[1], p[0], p[1])
                }
            }
            pen = Some(segment.end());
        }
        if pen.is_some() {
            builder.close();
        }

        self.fill_path(builder, colour);
        Ok(())
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // Pixmap::pixel only checks the flat index, so x past the edge wraps.
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    fn finish(self: Box<Self>, path: &Path) -> Result<()> {
        self.pixmap.save_png(path).map_err(|e| {
            RoadmapError::backend(format!("failed to write PNG {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = RasterSurface::new(4, 4).unwrap();
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(4, 0), None);
    }

    #[test]
    fn test_pixel_past_right_edge_does_not_wrap() {
        let mut surface = RasterSurface::new(4, 4).unwrap();
        surface.fill_rect(0.0, 1.0, 1.0, 1.0, Rgb::RED).unwrap();
        assert_eq!(surface.pixel(0, 1), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(0, 4), None);
    }

    #[test]
    fn test_fill_rect() {
        let mut surface = RasterSurface::new(20, 20).unwrap();
        surface.fill_rect(5.0, 5.0, 10.0, 10.0, Rgb::RED).unwrap();
        assert_eq!(surface.pixel(10, 10), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(2, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_rect_rejects_nan() {
        let mut surface = RasterSurface::new(20, 20).unwrap();
        assert!(surface.fill_rect(f32::NAN, 0.0, 1.0, 1.0, Rgb::RED).is_err());
    }

    #[test]
    fn test_paint_covers_everything() {
        let mut surface = RasterSurface::new(3, 3).unwrap();
        surface.paint(Rgb::WHITE).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(surface.pixel(x, y), Some([255, 255, 255, 255]));
            }
        }
    }

    #[test]
    fn test_degenerate_polygon_is_noop() {
        let mut surface = RasterSurface::new(10, 10).unwrap();
        surface.fill_polygon(&[], Rgb::RED).unwrap();
        surface
            .fill_polygon(&[[1.0, 1.0], [1.0, 1.0]], Rgb::RED)
            .unwrap();
        assert_eq!(surface.pixel(1, 1), Some([0, 0, 0, 0]));
    }
}
