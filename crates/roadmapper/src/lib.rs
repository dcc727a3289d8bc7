//! Roadmapper - drawing surface and colour themes for roadmap diagrams
//!
//! Two independent building blocks for rendering a roadmap (timeline,
//! groups, tasks, milestones, markers) to PNG or PDF:
//!
//! - [`Painter`] wraps a raster or vector surface and exposes the primitive
//!   drawing operations a layout engine needs: boxes, boxes with aligned
//!   text, diamonds, free text, background fill and text measurement.
//! - [`ColourTheme`] selects one of the built-in presets and returns the
//!   fonts and colours for each roadmap component.
//!
//! # Quick Start
//!
//! ```no_run
//! use roadmapper::{ColourTheme, ComponentCategory, Painter, TextAlignment};
//!
//! let theme = ColourTheme::new("GREENTURTLE")?;
//! let task = theme.values(ComponentCategory::Task);
//! let (font, size) = (task[0].as_font().unwrap(), task[1].as_font_size().unwrap());
//! let (font_colour, fill_colour) = (task[2].as_colour().unwrap(), task[3].as_colour().unwrap());
//!
//! let mut painter = Painter::new(600, 120, "roadmap.pdf")?;
//! painter.set_background_colour("#FFFFFF")?;
//! painter.set_font(font, size as f32, font_colour)?;
//! painter.draw_box_with_text(
//!     20.0, 20.0, 300.0, 24.0,
//!     "Ship the beta", TextAlignment::Left,
//!     font_colour, fill_colour,
//! )?;
//! painter.save_surface()?;
//! # Ok::<(), roadmapper::RoadmapError>(())
//! ```

pub mod core;
pub mod painter;
pub mod theme;

pub use crate::core::*;
pub use painter::{
    OutputKind, OutputTarget, Painter, PainterOptions, TextAlignment, TextExtents,
};
pub use theme::{ColourTheme, ComponentCategory, Setting, SettingValue, ThemeName};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Result, Rgb, RoadmapError};
    pub use crate::painter::{OutputKind, Painter, PainterOptions, TextAlignment};
    pub use crate::theme::{ColourTheme, ComponentCategory, SettingValue, ThemeName};
}
