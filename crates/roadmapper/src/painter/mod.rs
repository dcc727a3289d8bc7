//! Drawing surface wrapper for roadmap rendering
//!
//! [`Painter`] owns one surface (a PNG raster or a single PDF page) and a
//! drawing context holding the current colour and font. Layout code feeds it
//! geometry; the painter only draws.
//!
//! ```no_run
//! use roadmapper::{Painter, TextAlignment};
//!
//! let mut painter = Painter::new(400, 200, "roadmap.png")?;
//! painter.set_background_colour("#FFFFFF")?;
//! painter.set_font("arial.ttf", 12.0, "#000000")?;
//! painter.draw_box_with_text(
//!     20.0, 20.0, 200.0, 30.0,
//!     "Discovery", TextAlignment::Centre,
//!     "#000000", "#9FC5E8",
//! )?;
//! painter.draw_diamond(240.0, 20.0, 16.0, 16.0)?;
//! painter.save_surface()?;
//! # Ok::<(), roadmapper::RoadmapError>(())
//! ```

mod font;
mod raster;
mod surface;
mod vector;

pub use font::{FontSelection, LoadedFont, TextExtents};

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::core::{Result, Rgb, RoadmapError};
use raster::RasterSurface;
use surface::Surface;
use vector::VectorSurface;

/// File name used when the caller passes an empty one
pub const DEFAULT_OUTPUT_NAME: &str = "roadmap";

/// Kind of file the surface is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// PNG bitmap
    Raster,
    /// PDF document
    Vector,
}

impl OutputKind {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputKind::Raster => "png",
            OutputKind::Vector => "pdf",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where and in which format the surface will be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    path: PathBuf,
    kind: OutputKind,
}

impl OutputTarget {
    /// Derive the output kind from the file extension
    ///
    /// `.png` and `.pdf` match case-insensitively. An empty name becomes
    /// `roadmap`, and any name without one of those extensions is written
    /// as PNG with `.png` appended.
    ///
    /// ```
    /// use roadmapper::{OutputKind, OutputTarget};
    ///
    /// assert_eq!(OutputTarget::resolve("plan.PDF").kind(), OutputKind::Vector);
    /// assert_eq!(OutputTarget::resolve("plan").path().to_str(), Some("plan.png"));
    /// assert_eq!(OutputTarget::resolve("").path().to_str(), Some("roadmap.png"));
    /// ```
    pub fn resolve(output_file_name: &str) -> Self {
        let name = if output_file_name.is_empty() {
            DEFAULT_OUTPUT_NAME
        } else {
            output_file_name
        };

        let extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => Self {
                path: PathBuf::from(name),
                kind: OutputKind::Raster,
            },
            Some("pdf") => Self {
                path: PathBuf::from(name),
                kind: OutputKind::Vector,
            },
            _ => {
                debug!(name, "Unrecognised output extension, writing PNG");
                Self {
                    path: PathBuf::from(format!("{}.png", name)),
                    kind: OutputKind::Raster,
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> OutputKind {
        self.kind
    }
}

/// Horizontal placement of text inside a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    #[default]
    Centre,
    Left,
    Right,
}

impl TextAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlignment::Centre => "centre",
            TextAlignment::Left => "left",
            TextAlignment::Right => "right",
        }
    }
}

impl FromStr for TextAlignment {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "centre" => Ok(TextAlignment::Centre),
            "left" => Ok(TextAlignment::Left),
            "right" => Ok(TextAlignment::Right),
            _ => Err(RoadmapError::invalid_alignment(s)),
        }
    }
}

impl fmt::Display for TextAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Painter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PainterOptions {
    /// Font selected before the first `set_font` call
    pub default_font_family: String,
    pub default_font_size: f32,
    /// Gap between the box edge and left-aligned text
    pub left_text_inset: f32,
    /// Fill used by `draw_diamond`, independent of the current colour
    pub diamond_colour: Rgb,
}

impl Default for PainterOptions {
    fn default() -> Self {
        Self {
            default_font_family: "sans-serif".to_string(),
            default_font_size: 10.0,
            left_text_inset: 10.0,
            diamond_colour: Rgb::RED,
        }
    }
}

/// Current colour and font, mutated by drawing calls
#[derive(Debug, Clone)]
struct DrawingContext {
    colour: Rgb,
    font: FontSelection,
}

/// Roadmap drawing surface
///
/// Not thread-safe: one painter is driven from one thread. Saving consumes
/// the painter, so nothing can be drawn after the output is written.
pub struct Painter {
    width: u32,
    height: u32,
    output: OutputTarget,
    options: PainterOptions,
    surface: Box<dyn Surface>,
    context: DrawingContext,
    fonts: HashMap<String, Option<Arc<LoadedFont>>>,
}

impl fmt::Debug for Painter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Painter")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("output", &self.output)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl Painter {
    /// Create a painter with a `width` x `height` surface
    ///
    /// The output format follows [`OutputTarget::resolve`]. Zero-sized
    /// surfaces are rejected.
    pub fn new(width: u32, height: u32, output_file_name: &str) -> Result<Self> {
        Self::with_options(width, height, output_file_name, PainterOptions::default())
    }

    pub fn with_options(
        width: u32,
        height: u32,
        output_file_name: &str,
        options: PainterOptions,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RoadmapError::InvalidSurface { width, height });
        }

        let output = OutputTarget::resolve(output_file_name);
        let surface: Box<dyn Surface> = match output.kind() {
            OutputKind::Raster => Box::new(RasterSurface::new(width, height)?),
            OutputKind::Vector => {
                let title = output
                    .path()
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or(DEFAULT_OUTPUT_NAME);
                Box::new(VectorSurface::new(width, height, title))
            }
        };
        debug!(
            width,
            height,
            kind = %surface.kind(),
            path = %output.path().display(),
            "Created painter surface"
        );

        let mut fonts = HashMap::new();
        let face = font::resolve(&options.default_font_family);
        fonts.insert(options.default_font_family.clone(), face.clone());
        let context = DrawingContext {
            colour: Rgb::BLACK,
            font: FontSelection {
                family: options.default_font_family.clone(),
                size: options.default_font_size,
                face,
            },
        };

        Ok(Self {
            width,
            height,
            output,
            options,
            surface,
            context,
            fonts,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    pub fn current_colour(&self) -> Rgb {
        self.context.colour
    }

    pub fn current_font(&self) -> &FontSelection {
        &self.context.font
    }

    /// Parse `colour` and make it the current colour
    pub fn set_colour(&mut self, colour: &str) -> Result<()> {
        self.context.colour = Rgb::parse(colour)?;
        trace!(colour = %self.context.colour, "Set colour");
        Ok(())
    }

    /// Select a font face and size, then set `font_colour` as current colour
    pub fn set_font(&mut self, font: &str, font_size: f32, font_colour: &str) -> Result<()> {
        if !font_size.is_finite() || font_size < 0.0 {
            return Err(RoadmapError::backend(format!(
                "invalid font size {}",
                font_size
            )));
        }
        let face = self
            .fonts
            .entry(font.to_string())
            .or_insert_with(|| font::resolve(font))
            .clone();
        self.context.font = FontSelection {
            family: font.to_string(),
            size: font_size,
            face,
        };
        trace!(font, font_size, "Set font");
        self.set_colour(font_colour)
    }

    /// Fill a rectangle with the current colour
    pub fn draw_box(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        trace!(x, y, width, height, "Draw box");
        self.surface
            .fill_rect(x, y, width, height, self.context.colour)
    }

    /// Fill a box with `fill_colour` and draw `text` in it with `font_colour`
    ///
    /// Leaves `font_colour` as the current colour.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_box_with_text(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: &str,
        text_alignment: TextAlignment,
        font_colour: &str,
        fill_colour: &str,
    ) -> Result<()> {
        self.set_colour(fill_colour)?;
        self.draw_box(x, y, width, height)?;
        self.set_colour(font_colour)?;
        let (text_x, text_y) = self.display_text_position(x, y, width, height, text, text_alignment);
        self.draw_text(text_x, text_y, text)
    }

    /// Baseline origin for `text` placed inside a box
    ///
    /// Horizontally: centred, flush right, or inset from the left edge by
    /// [`PainterOptions::left_text_inset`]. Vertically the baseline sits
    /// half the text height below the box's middle.
    pub fn display_text_position(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: &str,
        alignment: TextAlignment,
    ) -> (f32, f32) {
        let (text_width, text_height) = self.text_dimension(text);

        let text_x = match alignment {
            TextAlignment::Centre => x + width / 2.0 - text_width / 2.0,
            TextAlignment::Right => x + width - text_width,
            TextAlignment::Left => x + self.options.left_text_inset,
        };
        let text_y = y + height / 2.0 + text_height / 2.0;

        (text_x, text_y)
    }

    /// Fill a diamond inscribed in the box with the configured diamond colour
    ///
    /// The current colour is neither used nor changed.
    pub fn draw_diamond(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        trace!(x, y, width, height, "Draw diamond");
        let points = [
            [x + width / 2.0, y],
            [x + width, y + height / 2.0],
            [x + width / 2.0, y + height],
            [x, y + height / 2.0],
        ];
        self.surface
            .fill_polygon(&points, self.options.diamond_colour)
    }

    /// Draw `text` with its baseline starting at (x, y)
    pub fn draw_text(&mut self, x: f32, y: f32, text: &str) -> Result<()> {
        trace!(x, y, text, "Draw text");
        self.surface
            .draw_text(x, y, text, &self.context.font, self.context.colour)
    }

    /// Ink width and height of `text` in the current font
    ///
    /// The empty string measures (0, 0).
    pub fn text_dimension(&self, text: &str) -> (f32, f32) {
        let extents = self.text_extents(text);
        (extents.width, extents.height)
    }

    pub fn text_extents(&self, text: &str) -> TextExtents {
        self.context.font.extents(text)
    }

    /// Set the current colour and paint the whole surface with it
    pub fn set_background_colour(&mut self, colour: &str) -> Result<()> {
        self.set_colour(colour)?;
        self.surface.paint(self.context.colour)
    }

    /// Read back a pixel as straight RGBA; `None` for PDF output or out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.surface.pixel(x, y)
    }

    /// Write the surface to the output file and return its path
    pub fn save_surface(self) -> Result<PathBuf> {
        let Painter {
            output, surface, ..
        } = self;
        let kind = surface.kind();
        surface.finish(output.path())?;
        info!(path = %output.path().display(), %kind, "Saved roadmap");
        Ok(output.path)
    }
}
