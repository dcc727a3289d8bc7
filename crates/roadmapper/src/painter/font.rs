//! Font resolution and text metrics
//!
//! Family names are resolved against the system font database (loaded once
//! per process). Glyph layout is a plain advance-plus-kerning walk; there is
//! no shaping.

use std::path::Path;
use std::sync::Arc;

use ab_glyph::{Font, FontVec, GlyphId, OutlineCurve, PxScale, ScaleFont};
use fontdb::{Database, Family, Query};
use once_cell::sync::Lazy;
use tracing::{debug, warn};

static SYSTEM_FONTS: Lazy<Database> = Lazy::new(|| {
    let mut db = Database::new();
    db.load_system_fonts();
    debug!(faces = db.len(), "Loaded system font database");
    db
});

/// Ink and advance extents of a run of text
///
/// Coordinates are relative to the text origin on the baseline, with y
/// growing downwards, so `y_bearing` is negative for text above the
/// baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtents {
    pub x_bearing: f32,
    pub y_bearing: f32,
    pub width: f32,
    pub height: f32,
    pub x_advance: f32,
}

/// A font face loaded into memory
pub struct LoadedFont {
    family: String,
    bytes: Vec<u8>,
    index: u32,
    font: FontVec,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("family", &self.family)
            .field("index", &self.index)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// One segment of a glyph outline, in surface units with y growing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PathSegment {
    Line([f32; 2], [f32; 2]),
    Quad([f32; 2], [f32; 2], [f32; 2]),
    Cubic([f32; 2], [f32; 2], [f32; 2], [f32; 2]),
}

impl PathSegment {
    pub(crate) fn start(&self) -> [f32; 2] {
        match self {
            PathSegment::Line(p, _) | PathSegment::Quad(p, _, _) | PathSegment::Cubic(p, _, _, _) => *p,
        }
    }

    pub(crate) fn end(&self) -> [f32; 2] {
        match self {
            PathSegment::Line(_, p) | PathSegment::Quad(_, _, p) | PathSegment::Cubic(_, _, _, p) => *p,
        }
    }
}

impl LoadedFont {
    fn from_bytes(family: &str, bytes: Vec<u8>, index: u32) -> Option<Self> {
        let font = FontVec::try_from_vec_and_index(bytes.clone(), index).ok()?;
        Some(Self {
            family: family.to_string(),
            bytes,
            index,
            font,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Raw font file data, for embedding into documents
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Face index inside a font collection, 0 for plain font files
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Pixel scale for an em size, so `size` matches the PDF/CSS notion of font size
    fn scale(&self, size: f32) -> PxScale {
        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(size * self.font.height_unscaled() / units_per_em)
    }

    /// Glyph ids paired with their pen x offset from the origin
    fn layout(&self, size: f32, text: &str) -> (Vec<(GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(self.scale(size));
        let mut caret = 0.0;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            glyphs.push((id, caret));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        (glyphs, caret)
    }

    pub fn extents(&self, size: f32, text: &str) -> TextExtents {
        let scaled = self.font.as_scaled(self.scale(size));
        let (h, v) = (scaled.h_scale_factor(), scaled.v_scale_factor());
        let (glyphs, advance) = self.layout(size, text);

        let mut ink: Option<[f32; 4]> = None;
        for (id, x) in glyphs {
            let Some(outline) = self.font.outline(id) else {
                continue;
            };
            if outline.curves.is_empty() {
                continue;
            }
            // Outline bounds are y-up and ab_glyph keeps the glyph top in
            // `min.y`, so order the edges explicitly after flipping.
            let b = outline.bounds;
            let (edge_a, edge_b) = (-b.min.y * v, -b.max.y * v);
            let glyph_ink = [
                x + b.min.x.min(b.max.x) * h,
                edge_a.min(edge_b),
                x + b.min.x.max(b.max.x) * h,
                edge_a.max(edge_b),
            ];
            ink = Some(match ink {
                None => glyph_ink,
                Some(acc) => [
                    acc[0].min(glyph_ink[0]),
                    acc[1].min(glyph_ink[1]),
                    acc[2].max(glyph_ink[2]),
                    acc[3].max(glyph_ink[3]),
                ],
            });
        }

        match ink {
            Some([left, top, right, bottom]) => TextExtents {
                x_bearing: left,
                y_bearing: top,
                width: right - left,
                height: bottom - top,
                x_advance: advance,
            },
            None => TextExtents {
                x_advance: advance,
                ..TextExtents::default()
            },
        }
    }

    /// Outline segments for `text` drawn with its baseline origin at (x, y)
    pub(crate) fn outline(&self, size: f32, text: &str, x: f32, y: f32) -> Vec<PathSegment> {
        let scaled = self.font.as_scaled(self.scale(size));
        let (h, v) = (scaled.h_scale_factor(), scaled.v_scale_factor());
        let (glyphs, _) = self.layout(size, text);

        let mut segments = Vec::new();
        for (id, offset) in glyphs {
            let Some(outline) = self.font.outline(id) else {
                continue;
            };
            let map = |p: ab_glyph::Point| [x + offset + p.x * h, y - p.y * v];
            segments.extend(outline.curves.iter().map(|curve| match *curve {
                OutlineCurve::Line(a, b) => PathSegment::Line(map(a), map(b)),
                OutlineCurve::Quad(a, b, c) => PathSegment::Quad(map(a), map(b), map(c)),
                OutlineCurve::Cubic(a, b, c, d) => {
                    PathSegment::Cubic(map(a), map(b), map(c), map(d))
                }
            }));
        }
        segments
    }
}

/// The font part of the drawing context
#[derive(Debug, Clone)]
pub struct FontSelection {
    pub family: String,
    pub size: f32,
    pub face: Option<Arc<LoadedFont>>,
}

impl FontSelection {
    pub fn extents(&self, text: &str) -> TextExtents {
        match &self.face {
            Some(face) => face.extents(self.size, text),
            None => approximate_extents(self.size, text),
        }
    }
}

/// Metrics used when no font face could be loaded at all
fn approximate_extents(size: f32, text: &str) -> TextExtents {
    let advance = 0.5 * size * text.chars().count() as f32;
    if text.chars().all(char::is_whitespace) {
        return TextExtents {
            x_advance: advance,
            ..TextExtents::default()
        };
    }
    let height = 0.7 * size;
    TextExtents {
        x_bearing: 0.0,
        y_bearing: -height,
        width: advance,
        height,
        x_advance: advance,
    }
}

/// Strip a font file extension, so `arial.ttf` names the family `arial`
fn family_name(font: &str) -> &str {
    let lower = font.to_ascii_lowercase();
    for ext in [".ttf", ".otf", ".ttc", ".otc"] {
        if lower.ends_with(ext) {
            return &font[..font.len() - ext.len()];
        }
    }
    font
}

fn generic_family(name: &str) -> Option<Family<'static>> {
    match name.to_ascii_lowercase().as_str() {
        "sans-serif" | "sans" => Some(Family::SansSerif),
        "serif" => Some(Family::Serif),
        "monospace" | "mono" => Some(Family::Monospace),
        "cursive" => Some(Family::Cursive),
        "fantasy" => Some(Family::Fantasy),
        _ => None,
    }
}

fn find_face(db: &Database, font: &str) -> Option<fontdb::ID> {
    let name = family_name(font);
    if let Some(generic) = generic_family(name) {
        return db.query(&Query {
            families: &[generic],
            ..Query::default()
        });
    }

    db.query(&Query {
        families: &[Family::Name(name)],
        ..Query::default()
    })
    .or_else(|| {
        db.faces()
            .find(|face| {
                face.families.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
                    || face.post_script_name.eq_ignore_ascii_case(name)
            })
            .map(|face| face.id)
    })
}

fn load_face(db: &Database, id: fontdb::ID, family: &str) -> Option<LoadedFont> {
    db.with_face_data(id, |data, index| (data.to_vec(), index))
        .and_then(|(bytes, index)| LoadedFont::from_bytes(family, bytes, index))
}

/// Resolve a font name to a loaded face
///
/// `font` may be a path to a font file, a family name with or without a
/// font file extension, or a generic family such as `sans-serif`. Unknown
/// names fall back to the system sans-serif face, then to any face.
/// Returns `None` only when no usable font exists on the system.
pub(crate) fn resolve(font: &str) -> Option<Arc<LoadedFont>> {
    if Path::new(font).is_file() {
        match std::fs::read(font) {
            Ok(bytes) => {
                if let Some(face) = LoadedFont::from_bytes(family_name(font), bytes, 0) {
                    debug!(font, "Loaded font from file");
                    return Some(Arc::new(face));
                }
                warn!(font, "Font file could not be parsed");
            }
            Err(e) => warn!(font, error = %e, "Font file could not be read"),
        }
    }

    let db = &*SYSTEM_FONTS;
    if let Some(face) = find_face(db, font).and_then(|id| load_face(db, id, font)) {
        debug!(font, "Resolved font");
        return Some(Arc::new(face));
    }

    let fallback = db
        .query(&Query {
            families: &[Family::SansSerif],
            ..Query::default()
        })
        .or_else(|| db.faces().next().map(|face| face.id))
        .and_then(|id| load_face(db, id, font));

    match fallback {
        Some(face) => {
            warn!(font, "Font not found, using fallback face");
            Some(Arc::new(face))
        }
        None => {
            warn!(font, "No usable system font, text metrics are approximate");
            None
        }
    }
}
