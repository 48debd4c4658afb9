//! lattice-line - print the lattice points of integer line segments.
//!
//! Run: `lattice-line line 0 0 4 2`

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use lattice_raster::config::{OutputFormat, RasterConfig, MAX_POINTS_ENV};
use lattice_raster::prelude::*;

/// lattice-line: exact integer line rasterization
#[derive(Parser, Debug)]
#[command(name = "lattice-line")]
#[command(version)]
#[command(about = "Print the lattice points of integer line segments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    format: Option<Format>,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Refuse paths with more points than this
    #[arg(long, global = true)]
    max_points: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize the segment from (X0, Y0) to (X1, Y1)
    #[command(allow_negative_numbers = true)]
    Line {
        /// Start x
        x0: i32,
        /// Start y
        y0: i32,
        /// End x
        x1: i32,
        /// End y
        y1: i32,
    },
    /// Rasterize a chain of X,Y vertices
    #[command(allow_negative_numbers = true)]
    Polyline {
        /// Vertices, e.g. `0,0 4,2 4,-3`
        #[arg(required = true, allow_hyphen_values = true)]
        vertices: Vec<Point>,
    },
    /// Print the greatest common divisor of A and B
    #[command(allow_negative_numbers = true)]
    Gcd {
        /// First value
        a: i64,
        /// Second value
        b: i64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Yaml,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Yaml => OutputFormat::Yaml,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    tracing::debug!(?config, "resolved configuration");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &cli.command {
        Command::Line { x0, y0, x1, y1 } => {
            let segment = LineSegment::from_coords(*x0, *y0, *x1, *y1);
            let path = try_rasterize_line(segment, config.max_points)?;
            write_points(&mut out, path.points(), config.format)?;
        }
        Command::Polyline { vertices } => {
            let points = try_rasterize_polyline(vertices, config.max_points)?;
            write_points(&mut out, &points, config.format)?;
        }
        Command::Gcd { a, b } => {
            writeln!(out, "{}", gcd(*a, *b))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Layers the configuration: CLI > ENV > file > defaults.
fn resolve_config(cli: &Cli) -> Result<RasterConfig> {
    let config = match &cli.config {
        Some(path) => RasterConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => dirs::config_dir()
            .map(|dir| RasterConfig::load_or_default(dir.join("lattice-line/config.yaml")))
            .unwrap_or_default(),
    };

    let env_max_points = std::env::var(MAX_POINTS_ENV).ok();
    let config = config.resolve(
        env_max_points.as_deref(),
        cli.max_points,
        cli.format.map(OutputFormat::from),
    )?;
    Ok(config)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_points(out: &mut impl Write, points: &[Point], format: OutputFormat) -> Result<()> {
    out.write_all(format.encode(points)?.as_bytes())?;
    Ok(())
}
