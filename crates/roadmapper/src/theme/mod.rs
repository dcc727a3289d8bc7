//! Colour themes for roadmap components
//!
//! A theme is a named, immutable set of font and colour presets covering
//! every roadmap component category. The five built-in presets live in a
//! static registry; [`ColourTheme`] selects one and answers lookups.
//!
//! ```
//! use roadmapper::{ColourTheme, SettingValue};
//!
//! let theme = ColourTheme::new("BLUEMOUNTAIN").unwrap();
//! let task = theme.get_colour_theme_settings("task").unwrap();
//! assert_eq!(
//!     task,
//!     vec![
//!         SettingValue::Font("arial.ttf"),
//!         SettingValue::FontSize(12),
//!         SettingValue::Colour("#000000"),
//!         SettingValue::Colour("#9FC5E8"),
//!     ]
//! );
//! ```

mod presets;

pub use presets::{
    DEFAULT_FONT, DEFAULT_FOOTER_FONT_SIZE, DEFAULT_GROUP_FONT_SIZE, DEFAULT_MARKER_FONT_SIZE,
    DEFAULT_MILESTONE_FONT_SIZE, DEFAULT_SUBTITLE_FONT_SIZE, DEFAULT_TASK_FONT_SIZE,
    DEFAULT_TIMELINE_FONT_SIZE, DEFAULT_TITLE_FONT_SIZE,
};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::core::{Result, RoadmapError};

/// Name of a built-in colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ThemeName {
    #[default]
    #[serde(rename = "DEFAULT")]
    Default,
    #[serde(rename = "GREYWOOF")]
    GreyWoof,
    #[serde(rename = "BLUEMOUNTAIN")]
    BlueMountain,
    #[serde(rename = "ORANGEPEEL")]
    OrangePeel,
    #[serde(rename = "GREENTURTLE")]
    GreenTurtle,
}

impl ThemeName {
    /// All built-in themes, in registry order
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Default,
        ThemeName::GreyWoof,
        ThemeName::BlueMountain,
        ThemeName::OrangePeel,
        ThemeName::GreenTurtle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Default => "DEFAULT",
            ThemeName::GreyWoof => "GREYWOOF",
            ThemeName::BlueMountain => "BLUEMOUNTAIN",
            ThemeName::OrangePeel => "ORANGEPEEL",
            ThemeName::GreenTurtle => "GREENTURTLE",
        }
    }
}

impl FromStr for ThemeName {
    type Err = RoadmapError;

    /// Theme names match exactly, e.g. `GREYWOOF`
    fn from_str(s: &str) -> Result<Self> {
        ThemeName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| RoadmapError::invalid_theme(s))
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roadmap element type used as the theme lookup key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Background,
    Title,
    Timeline,
    Marker,
    Group,
    Task,
    Milestone,
    Footer,
}

impl ComponentCategory {
    /// All categories, in the order every preset stores them
    pub const ALL: [ComponentCategory; 8] = [
        ComponentCategory::Background,
        ComponentCategory::Title,
        ComponentCategory::Timeline,
        ComponentCategory::Marker,
        ComponentCategory::Group,
        ComponentCategory::Task,
        ComponentCategory::Milestone,
        ComponentCategory::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentCategory::Background => "background",
            ComponentCategory::Title => "title",
            ComponentCategory::Timeline => "timeline",
            ComponentCategory::Marker => "marker",
            ComponentCategory::Group => "group",
            ComponentCategory::Task => "task",
            ComponentCategory::Milestone => "milestone",
            ComponentCategory::Footer => "footer",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for ComponentCategory {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        ComponentCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| RoadmapError::invalid_category(s))
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single theme attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Font family or font file name
    Font(&'static str),
    /// Font size in points
    FontSize(u32),
    /// Colour specification, parseable by [`crate::Rgb::parse`]
    Colour(&'static str),
}

impl SettingValue {
    pub fn as_font(&self) -> Option<&'static str> {
        match self {
            SettingValue::Font(font) => Some(font),
            _ => None,
        }
    }

    pub fn as_font_size(&self) -> Option<u32> {
        match self {
            SettingValue::FontSize(size) => Some(*size),
            _ => None,
        }
    }

    pub fn as_colour(&self) -> Option<&'static str> {
        match self {
            SettingValue::Colour(colour) => Some(colour),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Font(font) => f.write_str(font),
            SettingValue::FontSize(size) => write!(f, "{}", size),
            SettingValue::Colour(colour) => f.write_str(colour),
        }
    }
}

/// A named theme attribute, e.g. `task_fill_colour`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Setting {
    pub name: &'static str,
    pub value: SettingValue,
}

impl Setting {
    pub(crate) const fn font(name: &'static str, font: &'static str) -> Self {
        Self {
            name,
            value: SettingValue::Font(font),
        }
    }

    pub(crate) const fn font_size(name: &'static str, size: u32) -> Self {
        Self {
            name,
            value: SettingValue::FontSize(size),
        }
    }

    pub(crate) const fn colour(name: &'static str, colour: &'static str) -> Self {
        Self {
            name,
            value: SettingValue::Colour(colour),
        }
    }
}

#[derive(Debug)]
pub(crate) struct CategoryPreset {
    pub(crate) category: ComponentCategory,
    pub(crate) settings: &'static [Setting],
}

#[derive(Debug)]
pub(crate) struct ThemePreset {
    pub(crate) name: ThemeName,
    pub(crate) categories: [CategoryPreset; 8],
}

/// A selected colour theme
///
/// Construction validates the name once; afterwards the theme is a pure
/// lookup over static data and can be copied and shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColourTheme {
    name: ThemeName,
}

impl ColourTheme {
    /// Select a theme by its registry name, e.g. `"ORANGEPEEL"`
    pub fn new(theme_name: &str) -> Result<Self> {
        let name = theme_name.parse::<ThemeName>()?;
        debug!(theme = %name, "Selected colour theme");
        Ok(Self::from_name(name))
    }

    pub fn from_name(name: ThemeName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> ThemeName {
        self.name
    }

    /// Attribute values for a component, in attribute definition order
    ///
    /// Fails with [`RoadmapError::InvalidCategory`] for anything other than
    /// the eight known component names.
    pub fn get_colour_theme_settings(&self, roadmap_component: &str) -> Result<Vec<SettingValue>> {
        let category = roadmap_component.parse::<ComponentCategory>()?;
        Ok(self.values(category))
    }

    /// Attribute values for a component, in attribute definition order
    pub fn values(&self, category: ComponentCategory) -> Vec<SettingValue> {
        self.settings(category).iter().map(|s| s.value).collect()
    }

    /// Named attributes for a component
    pub fn settings(&self, category: ComponentCategory) -> &'static [Setting] {
        presets::preset(self.name).categories[category.index()].settings
    }

    /// Look up one attribute by name, e.g. `task_fill_colour`
    pub fn setting(&self, category: ComponentCategory, name: &str) -> Option<SettingValue> {
        self.settings(category)
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value)
    }
}
