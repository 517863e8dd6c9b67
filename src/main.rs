//! Tooltip Triangle CLI
//!
//! Usage:
//!   tooltip-triangle [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --theme <FILE>     Theme file with colors and styles (TOML format)
//!   -W, --width <PX>       Bounding box width
//!   -H, --height <PX>      Bounding box height
//!   -D, --density <F>      Display density used for dp/sp lengths
//!   -s, --style <NAME>     Fallback style from the theme
//!   -n, --name <NAME>      Declaration to render (defaults to the first)
//!   -d, --debug            Print the resolved style to stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use tooltip_triangle::{
    build_shape, parse, render_with_config, select_view, RenderConfig, RenderError, Theme,
};

#[derive(Parser)]
#[command(name = "tooltip-triangle")]
#[command(about = "Render a styled tooltip triangle to SVG")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Theme file with colors and styles (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Bounding box width in device pixels
    #[arg(short = 'W', long, default_value_t = 100.0)]
    width: f64,

    /// Bounding box height in device pixels
    #[arg(short = 'H', long, default_value_t = 100.0)]
    height: f64,

    /// Display density for dp/sp lengths (overrides the theme)
    #[arg(short = 'D', long)]
    density: Option<f64>,

    /// Fallback style from the theme
    #[arg(short, long)]
    style: Option<String>,

    /// Name of the triangle declaration to render
    #[arg(short, long)]
    name: Option<String>,

    /// Debug mode: print the resolved style to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load theme
    let mut theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    if let Some(density) = cli.density {
        if !(density.is_finite() && density > 0.0) {
            eprintln!("Error: density must be a positive number, got {}", density);
            std::process::exit(1);
        }
        theme = theme.with_density(density);
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut config = RenderConfig::new()
        .with_theme(theme)
        .with_size(cli.width, cli.height);
    if let Some(style) = &cli.style {
        config = config.with_fallback_style(style);
    }
    if let Some(name) = &cli.name {
        config = config.with_target(name);
    }

    if cli.debug {
        print_debug(&source, &config);
    }

    match render_with_config(&source, config) {
        Ok(svg) => {
            print!("{}", svg);
        }
        Err(RenderError::Parse(errors)) => {
            for e in &errors {
                eprint!("{}", e.format(&source, &filename));
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_debug(source: &str, config: &RenderConfig) {
    let Ok(doc) = parse(source) else {
        return;
    };
    let Ok(decl) = select_view(&doc, config.target.as_deref()) else {
        return;
    };
    if let Ok(shape) = build_shape(decl, config) {
        let style = shape.style();
        eprintln!("=== Resolved Style ===");
        eprintln!("fill:        {}", style.fill_color);
        match style.stroke_color {
            Some(c) => eprintln!("stroke:      {}", c),
            None => eprintln!("stroke:      unset ({})", style.effective_stroke_color()),
        }
        eprintln!("width:       {}px", style.stroke_width);
        eprintln!("two-sided:   {}", style.two_sided_stroke);
        eprintln!("orientation: {:?}", style.orientation);
        eprintln!("density:     {}", config.theme.density);
        eprintln!("======================");
    }
}

fn print_intro() {
    println!(
        r#"Tooltip Triangle - render a styled tooltip triangle to SVG

USAGE:
    tooltip-triangle [OPTIONS] [FILE]
    echo '<attributes>' | tooltip-triangle

OPTIONS:
    -t, --theme      Theme with colors and styles (TOML file)
    -W, --width      Bounding box width (default 100)
    -H, --height     Bounding box height (default 100)
    -D, --density    Display density for dp/sp lengths
    -s, --style      Fallback style from the theme
    -n, --name       Declaration to render
    -d, --debug      Print the resolved style
    -h, --help       Print help

ATTRIBUTES:
    triangleColor           color      fill color (default black)
    triangleStrokeColor     color      border color
    triangleStrokeWidth     dimension  border width, 0 disables (4, 4px, 2dp)
    triangleTwoSidedStroke  boolean    border only the two slanted edges
    triangleOrientation     enum       vertical (1) or horizontal (2)
    style                   name       theme style to fall back on

QUICK START:
    echo 'triangle [triangleOrientation: horizontal]' | tooltip-triangle -W 12 -H 24 > pointer.svg"#
    );
}
