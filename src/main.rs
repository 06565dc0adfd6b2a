//! Laser Icon CLI
//!
//! Usage:
//!   laser-icon [OPTIONS]
//!
//! Options:
//!   -s, --size <PX>             Rendered width and height
//!   -c, --color <COLOR>         Stroke color
//!   -w, --stroke-width <PX>     Stroke thickness
//!       --config <FILE>         Icon configuration (TOML format)
//!   -o, --output <FILE>         Write SVG to a file instead of stdout
//!       --standalone            Prepend an XML declaration
//!   -h, --help                  Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use laser_icon::{render, render_document, IconConfig};

#[derive(Parser)]
#[command(name = "laser-icon")]
#[command(about = "Render the laser glyph as SVG")]
struct Cli {
    /// Rendered width and height in pixels
    #[arg(short, long)]
    size: Option<f64>,

    /// Stroke color (named color or hex)
    #[arg(short, long)]
    color: Option<String>,

    /// Stroke thickness
    #[arg(short = 'w', long)]
    stroke_width: Option<f64>,

    /// Icon configuration file (TOML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Prepend an XML declaration for a self-contained .svg file
    #[arg(long)]
    standalone: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config file first, then flags on top
    let mut config = match &cli.config {
        Some(path) => match IconConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => IconConfig::default(),
    };

    if let Some(size) = cli.size {
        config = config.with_size(size);
    }
    if let Some(color) = &cli.color {
        config = config.with_color(color.clone());
    }
    if let Some(stroke_width) = cli.stroke_width {
        config = config.with_stroke_width(stroke_width);
    }

    let svg = if cli.standalone {
        render_document(&config)
    } else {
        render(&config)
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &svg) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => {
            println!("{}", svg);
        }
    }
}
