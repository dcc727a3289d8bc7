//! Command-line interface for the roadmapper utility
//!
//! Lists the built-in colour themes, prints a theme's settings for one
//! component, and renders theme swatches to PNG or PDF.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use roadmapper::core::logging::init_logging;
use roadmapper::{ColourTheme, ComponentCategory, ThemeName};
use serde::Serialize;
use tracing::info;

use crate::swatch::render_swatch;

/// Roadmapper - roadmap colour themes and drawing surface
#[derive(Parser)]
#[command(name = "roadmapper")]
#[command(about = "Inspect roadmap colour themes and render theme swatches")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the built-in colour themes
    Themes {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show a theme's settings for one roadmap component
    Settings {
        /// Theme name, e.g. BLUEMOUNTAIN
        #[arg(short, long, default_value = "DEFAULT")]
        theme: String,

        /// Component: background, title, timeline, marker, group, task, milestone or footer
        #[arg(short, long)]
        component: String,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Render a preview of a theme to PNG or PDF
    Swatch {
        /// Theme name, e.g. GREENTURTLE
        #[arg(short, long, default_value = "DEFAULT")]
        theme: String,

        /// Output file; .pdf writes a PDF, anything else a PNG
        #[arg(short, long, default_value = "swatch.png")]
        output: String,

        /// Surface width
        #[arg(long, default_value_t = 800)]
        width: u32,

        /// Surface height
        #[arg(long, default_value_t = 360)]
        height: u32,
    },
}

#[derive(Serialize)]
struct ThemeSummary {
    theme: ThemeName,
    categories: Vec<CategorySummary>,
}

#[derive(Serialize)]
struct CategorySummary {
    component: ComponentCategory,
    settings: &'static [roadmapper::Setting],
}

/// Main CLI application
#[derive(Default)]
pub struct RoadmapperApp;

impl RoadmapperApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level = std::env::var("ROADMAPPER_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());
        let log_format = std::env::var("ROADMAPPER_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Roadmapper v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Themes { json } => {
                println!("{}", self.themes_command(json)?);
                Ok(())
            }
            Commands::Settings {
                theme,
                component,
                json,
            } => {
                println!("{}", self.settings_command(&theme, &component, json)?);
                Ok(())
            }
            Commands::Swatch {
                theme,
                output,
                width,
                height,
            } => self.swatch_command(&theme, &output, width, height, cli.verbose),
        }
    }

    /// Handle the themes command
    pub fn themes_command(&self, json: bool) -> Result<String> {
        if json {
            let themes: Vec<ThemeSummary> = ThemeName::ALL
                .into_iter()
                .map(|name| {
                    let theme = ColourTheme::from_name(name);
                    ThemeSummary {
                        theme: name,
                        categories: ComponentCategory::ALL
                            .into_iter()
                            .map(|component| CategorySummary {
                                component,
                                settings: theme.settings(component),
                            })
                            .collect(),
                    }
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&themes)?);
        }

        let mut lines = vec!["Available colour themes:".to_string()];
        lines.extend(ThemeName::ALL.iter().map(|name| format!("  {}", name)));
        lines.push(String::new());
        lines.push(format!("Total: {} themes", ThemeName::ALL.len()));
        Ok(lines.join("\n"))
    }

    /// Handle the settings command
    pub fn settings_command(&self, theme: &str, component: &str, json: bool) -> Result<String> {
        let theme = ColourTheme::new(theme)?;
        let values = theme.get_colour_theme_settings(component)?;

        if json {
            return Ok(serde_json::to_string(&values)?);
        }

        let category: ComponentCategory = component.parse()?;
        let lines: Vec<String> = theme
            .settings(category)
            .iter()
            .map(|setting| format!("{:<24} {}", setting.name, setting.value))
            .collect();
        Ok(lines.join("\n"))
    }

    /// Handle the swatch command
    pub fn swatch_command(
        &self,
        theme: &str,
        output: &str,
        width: u32,
        height: u32,
        verbose: bool,
    ) -> Result<()> {
        let theme = ColourTheme::new(theme)?;
        let saved = render_swatch(&theme, output, width, height)?;
        info!(path = %saved.display(), theme = %theme.name(), "Wrote swatch");
        if verbose {
            eprintln!("Wrote {}", saved.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing_swatch_command() {
        let args = vec![
            "roadmapper",
            "swatch",
            "--theme",
            "GREYWOOF",
            "--output",
            "out.pdf",
            "--width",
            "640",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Swatch {
                theme,
                output,
                width,
                height,
            } => {
                assert_eq!(theme, "GREYWOOF");
                assert_eq!(output, "out.pdf");
                assert_eq!(width, 640);
                assert_eq!(height, 360); // default
            }
            _ => panic!("Expected Swatch command"),
        }
    }

    #[test]
    fn test_cli_parsing_settings_requires_component() {
        let args = vec!["roadmapper", "settings", "--theme", "DEFAULT"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parsing_log_flags() {
        let args = vec![
            "roadmapper",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "themes",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_verbose_flag() {
        let args = vec!["roadmapper", "--verbose", "themes"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_themes_command_human_format() {
        let output = RoadmapperApp::new().themes_command(false).unwrap();
        assert!(output.contains("BLUEMOUNTAIN"));
        assert!(output.contains("Total: 5 themes"));
    }

    #[test]
    fn test_themes_command_json_format() {
        let output = RoadmapperApp::new().themes_command(true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let themes = parsed.as_array().unwrap();
        assert_eq!(themes.len(), 5);
        assert_eq!(themes[0]["theme"], "DEFAULT");
        assert_eq!(themes[0]["categories"][0]["component"], "background");
        assert_eq!(
            themes[0]["categories"][0]["settings"][0]["name"],
            "background_fill_colour"
        );
    }

    #[test]
    fn test_settings_command_json() {
        let output = RoadmapperApp::new()
            .settings_command("BLUEMOUNTAIN", "task", true)
            .unwrap();
        assert_eq!(output, r##"["arial.ttf",12,"#000000","#9FC5E8"]"##);
    }

    #[test]
    fn test_settings_command_human() {
        let output = RoadmapperApp::new()
            .settings_command("GREENTURTLE", "footer", false)
            .unwrap();
        assert!(output.contains("footer_font_colour"));
        assert!(output.contains("#38761D"));
    }

    #[test]
    fn test_settings_command_rejects_unknown_theme() {
        let err = RoadmapperApp::new()
            .settings_command("NOPE", "task", false)
            .unwrap_err();
        assert!(err.to_string().contains("not recognised"));
    }

    #[test]
    fn test_swatch_command_writes_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("swatch.png");
        RoadmapperApp::new()
            .swatch_command("ORANGEPEEL", output.to_str().unwrap(), 400, 240, false)
            .unwrap();
        assert!(output.exists());
    }
}
