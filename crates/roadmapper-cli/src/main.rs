//! Roadmapper CLI - inspect colour themes and render theme swatches

mod cli;
mod swatch;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();
    let app = cli::RoadmapperApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
