//! Built-in colour theme presets
//!
//! Every preset lists the eight component categories in
//! [`ComponentCategory::ALL`] order, and each category carries the same
//! attribute names in the same order across presets.

use super::{CategoryPreset, ComponentCategory as C, Setting, ThemeName, ThemePreset};

pub const DEFAULT_FONT: &str = "arial.ttf";
pub const DEFAULT_TITLE_FONT_SIZE: u32 = 26;
pub const DEFAULT_SUBTITLE_FONT_SIZE: u32 = 18;
pub const DEFAULT_TIMELINE_FONT_SIZE: u32 = 12;
pub const DEFAULT_MARKER_FONT_SIZE: u32 = 12;
pub const DEFAULT_GROUP_FONT_SIZE: u32 = 12;
pub const DEFAULT_TASK_FONT_SIZE: u32 = 12;
pub const DEFAULT_MILESTONE_FONT_SIZE: u32 = 10;
pub const DEFAULT_FOOTER_FONT_SIZE: u32 = 13;

const fn background(fill: &'static str) -> [Setting; 1] {
    [Setting::colour("background_fill_colour", fill)]
}

const fn title(colour: &'static str) -> [Setting; 6] {
    [
        Setting::font("title_font", DEFAULT_FONT),
        Setting::font_size("title_font_size", DEFAULT_TITLE_FONT_SIZE),
        Setting::colour("title_font_colour", colour),
        Setting::font("subtitle_font", DEFAULT_FONT),
        Setting::font_size("subtitle_font_size", DEFAULT_SUBTITLE_FONT_SIZE),
        Setting::colour("subtitle_font_colour", colour),
    ]
}

const fn timeline(font: &'static str, fill: &'static str) -> [Setting; 4] {
    [
        Setting::font("timeline_font", DEFAULT_FONT),
        Setting::font_size("timeline_font_size", DEFAULT_TIMELINE_FONT_SIZE),
        Setting::colour("timeline_font_colour", font),
        Setting::colour("timeline_fill_colour", fill),
    ]
}

const fn marker(font: &'static str, line: &'static str) -> [Setting; 4] {
    [
        Setting::font("marker_font", DEFAULT_FONT),
        Setting::font_size("marker_font_size", DEFAULT_MARKER_FONT_SIZE),
        Setting::colour("marker_font_colour", font),
        Setting::colour("marker_line_colour", line),
    ]
}

const fn group(font: &'static str, fill: &'static str) -> [Setting; 4] {
    [
        Setting::font("group_font", DEFAULT_FONT),
        Setting::font_size("group_font_size", DEFAULT_GROUP_FONT_SIZE),
        Setting::colour("group_font_colour", font),
        Setting::colour("group_fill_colour", fill),
    ]
}

const fn task(font: &'static str, fill: &'static str) -> [Setting; 4] {
    [
        Setting::font("task_font", DEFAULT_FONT),
        Setting::font_size("task_font_size", DEFAULT_TASK_FONT_SIZE),
        Setting::colour("task_font_colour", font),
        Setting::colour("task_fill_colour", fill),
    ]
}

const fn milestone(font: &'static str, fill: &'static str) -> [Setting; 4] {
    [
        Setting::font("milestone_font", DEFAULT_FONT),
        Setting::font_size("milestone_font_size", DEFAULT_MILESTONE_FONT_SIZE),
        Setting::colour("milestone_font_colour", font),
        Setting::colour("milestone_fill_colour", fill),
    ]
}

const fn footer(font: &'static str) -> [Setting; 3] {
    [
        Setting::font("footer_font", DEFAULT_FONT),
        Setting::font_size("footer_font_size", DEFAULT_FOOTER_FONT_SIZE),
        Setting::colour("footer_font_colour", font),
    ]
}

pub(crate) static DEFAULT: ThemePreset = ThemePreset {
    name: ThemeName::Default,
    categories: [
        CategoryPreset { category: C::Background, settings: &background("#FFFFFF") },
        CategoryPreset { category: C::Title, settings: &title("#000000") },
        CategoryPreset { category: C::Timeline, settings: &timeline("#FFFFFF", "#000000") },
        CategoryPreset { category: C::Marker, settings: &marker("#000000", "#000000") },
        CategoryPreset { category: C::Group, settings: &group("#FFFFFF", "#000000") },
        CategoryPreset { category: C::Task, settings: &task("#000000", "#D9D9D9") },
        CategoryPreset { category: C::Milestone, settings: &milestone("#000000", "#000000") },
        CategoryPreset { category: C::Footer, settings: &footer("#000000") },
    ],
};

pub(crate) static GREYWOOF: ThemePreset = ThemePreset {
    name: ThemeName::GreyWoof,
    categories: [
        CategoryPreset { category: C::Background, settings: &background("#FFFFFF") },
        CategoryPreset { category: C::Title, settings: &title("#000000") },
        CategoryPreset { category: C::Timeline, settings: &timeline("#FFFFFF", "#666666") },
        CategoryPreset { category: C::Marker, settings: &marker("#000000", "#000000") },
        CategoryPreset { category: C::Group, settings: &group("#FFFFFF", "#666666") },
        CategoryPreset { category: C::Task, settings: &task("#000000", "#D9D9D9") },
        CategoryPreset { category: C::Milestone, settings: &milestone("#000000", "#B7B7B7") },
        CategoryPreset { category: C::Footer, settings: &footer("#000000") },
    ],
};

pub(crate) static BLUEMOUNTAIN: ThemePreset = ThemePreset {
    name: ThemeName::BlueMountain,
    categories: [
        CategoryPreset { category: C::Background, settings: &background("#FFFFFF") },
        CategoryPreset { category: C::Title, settings: &title("#0B5394") },
        CategoryPreset { category: C::Timeline, settings: &timeline("#FFFFFF", "#0B5394") },
        CategoryPreset { category: C::Marker, settings: &marker("#0B5394", "#0B5394") },
        CategoryPreset { category: C::Group, settings: &group("#FFFFFF", "#0B5394") },
        CategoryPreset { category: C::Task, settings: &task("#000000", "#9FC5E8") },
        CategoryPreset { category: C::Milestone, settings: &milestone("#0B5394", "#3D85C6") },
        CategoryPreset { category: C::Footer, settings: &footer("#0B5394") },
    ],
};

pub(crate) static ORANGEPEEL: ThemePreset = ThemePreset {
    name: ThemeName::OrangePeel,
    categories: [
        CategoryPreset { category: C::Background, settings: &background("#FFFFFF") },
        CategoryPreset { category: C::Title, settings: &title("#B45F06") },
        CategoryPreset { category: C::Timeline, settings: &timeline("#FFFFFF", "#B45F06") },
        CategoryPreset { category: C::Marker, settings: &marker("#B45F06", "#B45F06") },
        CategoryPreset { category: C::Group, settings: &group("#FFFFFF", "#B45F06") },
        CategoryPreset { category: C::Task, settings: &task("#000000", "#F6B26B") },
        CategoryPreset { category: C::Milestone, settings: &milestone("#B45F06", "#B45F06") },
        CategoryPreset { category: C::Footer, settings: &footer("#B45F06") },
    ],
};

pub(crate) static GREENTURTLE: ThemePreset = ThemePreset {
    name: ThemeName::GreenTurtle,
    categories: [
        CategoryPreset { category: C::Background, settings: &background("#FFFFFF") },
        CategoryPreset { category: C::Title, settings: &title("#38761D") },
        CategoryPreset { category: C::Timeline, settings: &timeline("#FFFFFF", "#38761D") },
        CategoryPreset { category: C::Marker, settings: &marker("#38761D", "#38761D") },
        CategoryPreset { category: C::Group, settings: &group("#FFFFFF", "#38761D") },
        CategoryPreset { category: C::Task, settings: &task("#000000", "#93C47D") },
        CategoryPreset { category: C::Milestone, settings: &milestone("#38761D", "#38761D") },
        CategoryPreset { category: C::Footer, settings: &footer("#38761D") },
    ],
};

/// Look up the static preset for a theme
pub(crate) fn preset(name: ThemeName) -> &'static ThemePreset {
    match name {
        ThemeName::Default => &DEFAULT,
        ThemeName::GreyWoof => &GREYWOOF,
        ThemeName::BlueMountain => &BLUEMOUNTAIN,
        ThemeName::OrangePeel => &ORANGEPEEL,
        ThemeName::GreenTurtle => &GREENTURTLE,
    }
}
