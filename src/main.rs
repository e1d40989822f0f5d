use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tabplot::{run_plotter, PlotterConfig};

/// Plot two numeric CSV columns on a dual-axis scatter chart.
#[derive(Parser, Debug)]
#[command(name = "tabplot", version, about)]
struct Args {
    /// CSV file to load on startup
    file: Option<PathBuf>,

    /// YAML file overriding titles, labels, colors and the preview size
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => PlotterConfig::from_yaml_path(path)?,
        None => PlotterConfig::default(),
    };

    run_plotter(cfg, args.file)?;
    Ok(())
}
