use clap::{ArgGroup, Parser};
use gains_core::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gains-graph")]
#[command(about = "Graph metrics recorded in a Strong CSV export", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["list", "exercise"])))]
struct Cli {
    /// CSV export file path
    file: PathBuf,

    /// List exercises in the provided file
    #[arg(short, long)]
    list: bool,

    /// Exercise name to graph
    #[arg(short, long)]
    exercise: Option<String>,

    /// Metric to graph (1rm, weight, volume)
    #[arg(short, long, default_value = "1rm", value_parser = parse_metric)]
    metric: MetricKind,

    /// Chart output path (defaults to the configured output directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the chart without opening a viewer
    #[arg(long)]
    no_open: bool,

    /// Alternate configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_metric(s: &str) -> std::result::Result<MetricKind, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        gains_core::logging::init_with_level("debug");
    } else {
        gains_core::logging::init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("Run failed: {:?}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let rows = read_rows(&cli.file, &config.input)?;

    match &cli.exercise {
        Some(exercise) => cmd_graph(cli, &config, &rows, exercise),
        None => {
            cmd_list(&cli.file, &rows);
            Ok(())
        }
    }
}

fn cmd_list(file: &Path, rows: &[RawRow]) {
    let exercises = list_distinct(rows);

    if exercises.is_empty() {
        println!("No exercises found in {}", file.display());
    } else {
        let names: Vec<&str> = exercises.iter().map(String::as_str).collect();
        println!("Exercises in {}: {}", file.display(), names.join(", "));
    }
}

fn cmd_graph(cli: &Cli, config: &Config, rows: &[RawRow], exercise: &str) -> Result<()> {
    let series = filter_series(rows, exercise, cli.metric)?;
    let trend = fit(&series)?;

    println!(
        "{}: {} sets, {} trend {:+.2} per week",
        series.exercise,
        series.len(),
        cli.metric.label(),
        trend.slope_per_day() * 7.0
    );
    if series.excluded > 0 {
        println!(
            "  ({} sets left out: {} undefined)",
            series.excluded,
            cli.metric.label()
        );
    }

    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_chart_path(&config.chart.output_dir, exercise, cli.metric));
    render_svg(&series, &trend, &path, &config.chart)?;
    println!("Chart: {}", path.display());

    if config.chart.open_viewer && !cli.no_open {
        // Blocks until the system launcher hands the file off
        open::that(&path)?;
    }

    Ok(())
}

fn default_chart_path(dir: &Path, exercise: &str, metric: MetricKind) -> PathBuf {
    dir.join(format!("{}-{}.svg", slug(exercise), metric.key()))
}

/// Lowercase ASCII alphanumerics joined by single dashes
fn slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        "exercise".into()
    } else {
        words.join("-")
    }
}
