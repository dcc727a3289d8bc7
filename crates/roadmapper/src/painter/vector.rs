//! Vector surface backed by a single-page printpdf document
//!
//! Surface units are PDF points. The painter's top-left origin is flipped to
//! the bottom-left origin PDF uses.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Rgb as PdfRgb,
};
use tracing::{debug, warn};

use super::font::FontSelection;
use super::surface::{ensure_finite, normalise_rect, Surface};
use super::OutputKind;
use crate::core::{Result, Rgb, RoadmapError};

const MM_PER_PT: f32 = 25.4 / 72.0;

fn mm(pt: f32) -> Mm {
    Mm(pt * MM_PER_PT)
}

pub(crate) struct VectorSurface {
    document: PdfDocumentReference,
    layer: PdfLayerReference,
    width: f32,
    height: f32,
    embedded: HashMap<String, IndirectFontRef>,
    builtin: Option<IndirectFontRef>,
    /// Families drawn with Helvetica although they were measured with another face
    substituted: HashSet<String>,
}

impl VectorSurface {
    pub(crate) fn new(width: u32, height: u32, title: &str) -> Self {
        let (width, height) = (width as f32, height as f32);
        let (document, page, layer) = PdfDocument::new(title, mm(width), mm(height), "Roadmap");
        let layer = document.get_page(page).get_layer(layer);
        Self {
            document,
            layer,
            width,
            height,
            embedded: HashMap::new(),
            builtin: None,
            substituted: HashSet::new(),
        }
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(mm(x), mm(self.height - y))
    }

    fn fill_points(&self, points: &[[f32; 2]], colour: Rgb) {
        let ring = points
            .iter()
            .map(|p| (self.point(p[0], p[1]), false))
            .collect();
        self.layer.set_fill_color(pdf_colour(colour));
        self.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    /// Embed the selected face once per family, falling back to Helvetica
    fn font_ref(&mut self, font: &FontSelection) -> Result<IndirectFontRef> {
        if let Some(face) = font.face.as_ref() {
            if let Some(font_ref) = self.embedded.get(face.family()) {
                return Ok(font_ref.clone());
            }
            if face.index() == 0 && !self.substituted.contains(&font.family) {
                match self.document.add_external_font(Cursor::new(face.bytes())) {
                    Ok(font_ref) => {
                        debug!(family = face.family(), "Embedded font in PDF");
                        self.embedded
                            .insert(face.family().to_string(), font_ref.clone());
                        return Ok(font_ref);
                    }
                    Err(e) => {
                        warn!(family = face.family(), error = ?e, "Font could not be embedded")
                    }
                }
            }
        }

        if self.substituted.insert(font.family.clone()) {
            // Text was laid out with this font's metrics, so centred and
            // right-aligned runs will be offset by the width difference.
            warn!(
                font = %font.family,
                "PDF text drawn with Helvetica; placement uses the measured font's widths"
            );
        }
        self.builtin_font()
    }

    fn builtin_font(&mut self) -> Result<IndirectFontRef> {
        if let Some(font_ref) = &self.builtin {
            return Ok(font_ref.clone());
        }
        let font_ref = self
            .document
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RoadmapError::backend(format!("cannot add builtin font: {:?}", e)))?;
        self.builtin = Some(font_ref.clone());
        Ok(font_ref)
    }
}

fn pdf_colour(colour: Rgb) -> Color {
    Color::Rgb(PdfRgb::new(
        colour.red.clamp(0.0, 1.0),
        colour.green.clamp(0.0, 1.0),
        colour.blue.clamp(0.0, 1.0),
        None,
    ))
}

impl Surface for VectorSurface {
    fn kind(&self) -> OutputKind {
        OutputKind::Vector
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, colour: Rgb) -> Result<()> {
        ensure_finite(&[x, y, width, height])?;
        let Some([x, y, w, h]) = normalise_rect(x, y, width, height) else {
            return Ok(());
        };
        self.fill_points(&[[x, y], [x + w, y], [x + w, y + h], [x, y + h]], colour);
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[[f32; 2]], colour: Rgb) -> Result<()> {
        ensure_finite(&points.concat())?;
        if points.len() >= 3 {
            self.fill_points(points, colour);
        }
        Ok(())
    }

    fn paint(&mut self, colour: Rgb) -> Result<()> {
        let (w, h) = (self.width, self.height);
        self.fill_points(&[[0.0, 0.0], [w, 0.0], [w, h], [0.0, h]], colour);
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
        if text.is_empty() {
            return Ok(());
        }
        let font_ref = self.font_ref(font)?;
        self.layer.set_fill_color(pdf_colour(colour));
        self.layer
            .use_text(text, font.size, mm(x), mm(self.height - y), &font_ref);
        Ok(())
    }

    fn finish(self: Box<Self>, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.document
            .save(&mut BufWriter::new(file))
            .map_err(|e| {
                RoadmapError::backend(format!("failed to write PDF {}: {:?}", path.display(), e))
            })
    }
}
