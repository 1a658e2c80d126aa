use std::path::PathBuf;

use clap::{Parser, Subcommand};

use signprotmat::config::ChartsConfig;
use signprotmat::data::interactions::Dataset;
use signprotmat::data::stats::{ChartKind, StatsData};
use signprotmat::persistence::load_state_from_path;
use signprotmat::svg_merge::merge_legend;

#[derive(Parser)]
#[command(name = "signprotmat")]
#[command(version)]
#[command(about = "Receptor / signaling-protein interaction heatmap and structure statistics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Interaction rows (JSON array of positional arrays)
    #[arg(short, long)]
    interactions: Option<PathBuf>,

    /// Structure statistics (JSON object of chart datums)
    #[arg(short, long)]
    stats: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// View state to restore on startup
    #[arg(long)]
    state: Option<PathBuf>,

    /// Statistics chart shown first (e.g. unique_class, cryst_year)
    #[arg(long)]
    chart: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a legend SVG below a chart SVG
    MergeLegend {
        /// Chart SVG file
        chart: PathBuf,
        /// Legend SVG file
        legend: PathBuf,
        /// Output SVG file
        #[arg(short, long, default_value = "merged.svg")]
        output: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> signprotmat::Result<()> {
    if let Some(Commands::MergeLegend {
        chart,
        legend,
        output,
    }) = cli.command
    {
        let chart_svg = std::fs::read_to_string(&chart)?;
        let legend_svg = std::fs::read_to_string(&legend)?;
        let merged = merge_legend(&chart_svg, &legend_svg)?;
        std::fs::write(&output, merged)?;
        log::info!("Wrote {}", output.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => ChartsConfig::from_path(path)?,
        None => ChartsConfig::default(),
    };
    if let Some(id) = &cli.chart {
        config.charts.initial = ChartKind::from_id(id)?;
    }
    let dataset = match &cli.interactions {
        Some(path) => Dataset::from_path(path)?,
        None => {
            log::warn!("No interactions file given, starting with an empty heatmap");
            Dataset::default()
        }
    };
    let stats = match &cli.stats {
        Some(path) => StatsData::from_path(path)?,
        None => StatsData::default(),
    };
    let state = cli.state.as_deref().map(load_state_from_path).transpose()?;

    signprotmat::run_charts(config, dataset, stats, state)
}
