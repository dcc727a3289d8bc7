//! Theme swatch rendering
//!
//! Draws one sample of every roadmap component in a theme's fonts and
//! colours, so a theme can be previewed without a full roadmap layout.

use anyhow::{anyhow, Result};
use roadmapper::{ColourTheme, ComponentCategory, Painter, TextAlignment};
use std::path::PathBuf;
use tracing::debug;

const MARGIN: f32 = 20.0;
const ROW_HEIGHT: f32 = 24.0;
const ROW_GAP: f32 = 8.0;
const GROUP_WIDTH_RATIO: f32 = 0.2;

/// Font, size and colours for one component, taken positionally from the theme
struct ComponentStyle {
    font: &'static str,
    size: f32,
    font_colour: &'static str,
    fill_colour: Option<&'static str>,
}

impl ComponentStyle {
    fn lookup(theme: &ColourTheme, category: ComponentCategory) -> Result<Self> {
        let values = theme.values(category);
        let missing = || anyhow!("theme {} has no usable {} settings", theme.name(), category);

        let font = values.first().and_then(|v| v.as_font()).ok_or_else(missing)?;
        let size = values.get(1).and_then(|v| v.as_font_size()).ok_or_else(missing)?;
        let font_colour = values.get(2).and_then(|v| v.as_colour()).ok_or_else(missing)?;
        let fill_colour = values.get(3).and_then(|v| v.as_colour());

        Ok(Self {
            font,
            size: size as f32,
            font_colour,
            fill_colour,
        })
    }

    fn apply(&self, painter: &mut Painter) -> Result<()> {
        painter.set_font(self.font, self.size, self.font_colour)?;
        Ok(())
    }

    fn fill(&self) -> &'static str {
        self.fill_colour.unwrap_or(self.font_colour)
    }
}

/// Render a swatch of `theme` to `output` and return the written path
pub fn render_swatch(theme: &ColourTheme, output: &str, width: u32, height: u32) -> Result<PathBuf> {
    let mut painter = Painter::new(width, height, output)?;
    let width = width as f32;

    let background = theme
        .values(ComponentCategory::Background)
        .first()
        .and_then(|v| v.as_colour())
        .ok_or_else(|| anyhow!("theme {} has no background colour", theme.name()))?;
    painter.set_background_colour(background)?;

    let mut y = MARGIN;

    let title = ComponentStyle::lookup(theme, ComponentCategory::Title)?;
    title.apply(&mut painter)?;
    let heading = format!("{} theme", theme.name());
    let (_, heading_height) = painter.text_dimension(&heading);
    y += heading_height;
    painter.draw_text(MARGIN, y, &heading)?;
    y += ROW_GAP * 2.0;

    let group_width = (width - 2.0 * MARGIN) * GROUP_WIDTH_RATIO;
    let track_x = MARGIN + group_width + ROW_GAP;
    let track_width = width - MARGIN - track_x;

    let timeline = ComponentStyle::lookup(theme, ComponentCategory::Timeline)?;
    timeline.apply(&mut painter)?;
    let periods = ["Q1", "Q2", "Q3", "Q4"];
    let period_width = track_width / periods.len() as f32;
    for (i, period) in periods.iter().enumerate() {
        painter.draw_box_with_text(
            track_x + i as f32 * period_width,
            y,
            period_width,
            ROW_HEIGHT,
            period,
            TextAlignment::Centre,
            timeline.font_colour,
            timeline.fill(),
        )?;
    }
    let timeline_bottom = y + ROW_HEIGHT;
    y = timeline_bottom + ROW_GAP;

    let group = ComponentStyle::lookup(theme, ComponentCategory::Group)?;
    let task = ComponentStyle::lookup(theme, ComponentCategory::Task)?;
    let group_top = y;
    let tasks = [("Research", 0.0, 0.45), ("Build", 0.3, 0.8)];
    let group_height = tasks.len() as f32 * (ROW_HEIGHT + ROW_GAP) - ROW_GAP;

    group.apply(&mut painter)?;
    painter.draw_box_with_text(
        MARGIN,
        group_top,
        group_width,
        group_height,
        "Group",
        TextAlignment::Left,
        group.font_colour,
        group.fill(),
    )?;

    task.apply(&mut painter)?;
    for (name, start, end) in tasks {
        painter.draw_box_with_text(
            track_x + start * track_width,
            y,
            (end - start) * track_width,
            ROW_HEIGHT,
            name,
            TextAlignment::Left,
            task.font_colour,
            task.fill(),
        )?;
        y += ROW_HEIGHT + ROW_GAP;
    }

    let milestone = ComponentStyle::lookup(theme, ComponentCategory::Milestone)?;
    milestone.apply(&mut painter)?;
    let diamond = ROW_HEIGHT * 0.6;
    let milestone_x = track_x + 0.8 * track_width;
    painter.draw_diamond(milestone_x - diamond / 2.0, y, diamond, diamond)?;
    let label = "Launch";
    let (label_width, label_height) = painter.text_dimension(label);
    painter.draw_text(
        milestone_x - label_width / 2.0,
        y + diamond + label_height + 2.0,
        label,
    )?;
    y += diamond + label_height + ROW_GAP;

    let marker = ComponentStyle::lookup(theme, ComponentCategory::Marker)?;
    marker.apply(&mut painter)?;
    let marker_x = track_x + 0.6 * track_width;
    painter.draw_text(marker_x + 4.0, timeline_bottom - ROW_HEIGHT - 4.0, "Today")?;
    painter.set_colour(marker.fill())?;
    painter.draw_box(marker_x, timeline_bottom, 1.0, y - timeline_bottom)?;

    let footer = ComponentStyle::lookup(theme, ComponentCategory::Footer)?;
    footer.apply(&mut painter)?;
    painter.draw_text(MARGIN, painter.height() as f32 - MARGIN / 2.0, "Generated by roadmapper")?;

    debug!(theme = %theme.name(), content_bottom = y, "Rendered swatch");
    Ok(painter.save_surface()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmapper::ThemeName;
    use tempfile::tempdir;

    #[test]
    fn test_component_style_lookup() {
        let theme = ColourTheme::from_name(ThemeName::BlueMountain);
        let task = ComponentStyle::lookup(&theme, ComponentCategory::Task).unwrap();
        assert_eq!(task.font, "arial.ttf");
        assert_eq!(task.size, 12.0);
        assert_eq!(task.font_colour, "#000000");
        assert_eq!(task.fill(), "#9FC5E8");
    }

    #[test]
    fn test_footer_has_no_fill() {
        let theme = ColourTheme::default();
        let footer = ComponentStyle::lookup(&theme, ComponentCategory::Footer).unwrap();
        assert_eq!(footer.fill_colour, None);
        assert_eq!(footer.fill(), footer.font_colour);
    }

    #[test]
    fn test_render_swatch_for_every_theme() {
        let dir = tempdir().unwrap();
        for name in ThemeName::ALL {
            let theme = ColourTheme::from_name(name);
            let output = dir.path().join(format!("{}.png", name));
            let saved = render_swatch(&theme, output.to_str().unwrap(), 640, 320).unwrap();
            assert_eq!(saved, output);
            assert!(saved.exists());
        }
    }

    #[test]
    fn test_render_swatch_pdf() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("swatch.pdf");
        let theme = ColourTheme::from_name(ThemeName::OrangePeel);
        let saved = render_swatch(&theme, output.to_str().unwrap(), 640, 320).unwrap();
        assert!(std::fs::read(saved).unwrap().starts_with(b"%PDF"));
    }
}
