//! Command line driver that plots the points from a JSON file on a satellite map and saves the
//! rendered image as a PNG file.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;

use pathmap::{ImageryMode, MapOptions, MapService, PathMap, ServiceConfig};

/// Renders a satellite map with a marker for every point listed in the plot file.
#[derive(Debug, Parser)]
#[command(name = "pathmap", version, about)]
struct Args {
    /// Path to the JSON plot file with the points to mark.
    plot_file: PathBuf,

    /// File to save the rendered map to.
    #[arg(short, long, default_value = "result.png")]
    output: PathBuf,

    /// Credential for the imagery service.
    #[arg(long, env = "PATHMAP_API_KEY")]
    api_key: String,

    /// Base URL of the imagery service.
    #[arg(long, default_value = "https://maps.example.com/api/staticmap")]
    url: String,

    /// Zoom level of the rendered map.
    #[arg(long, default_value_t = pathmap::DEFAULT_ZOOM)]
    zoom: u32,

    /// Imagery to render the map with (satellite, roadmap, hybrid or terrain).
    #[arg(long, default_value = "satellite")]
    maptype: ImageryMode,

    /// Folder for the persistent imagery cache.
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

/// Contents of the plot file: a list of `[lat, lng]` points and an optional map center.
#[derive(Debug, Deserialize)]
struct PlotFile {
    points: Vec<[f64; 2]>,
    center: Option<[f64; 2]>,
}

impl PlotFile {
    /// Center falls back to the first point if not provided.
    fn center(&self) -> Option<[f64; 2]> {
        self.center.or_else(|| self.points.first().copied())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let contents = std::fs::read_to_string(&args.plot_file)
        .with_context(|| format!("failed to read {:?}", args.plot_file))?;
    let plot: PlotFile =
        serde_json::from_str(&contents).context("the plot file is not valid JSON")?;

    let Some(center) = plot.center() else {
        bail!("the plot file has no points and no center");
    };

    let mut config = ServiceConfig::new(&args.url, &args.api_key);
    if let Some(cache_dir) = &args.cache_dir {
        config = config.with_cache_path(cache_dir.clone());
    }

    let service = MapService::initialize(config)
        .await
        .context("failed to initialize the imagery service")?;

    let options = MapOptions::default()
        .with_zoom(args.zoom)
        .with_imagery(args.maptype);
    let map = PathMap::new(service, center, plot.points, options);

    map.render_to_file(&args.output)
        .await
        .context("failed to render the map")?;

    log::info!("Image saved as {}", args.output.display());

    Ok(())
}
