// File: crates/plotter/src/main.rs
// Summary: CLI: `render` writes both graphs once; `watch` runs the scheduler and applies stdin edits.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use integral_core::QuadratureRule;
use log::{info, warn};
use plot_core::SkiaSurface;

use plotter::app::{AppContext, Frames};
use plotter::config::Config;
use plotter::inputs::InputChange;
use plotter::output;
use plotter::scheduler::Scheduler;

#[derive(Parser)]
#[command(name = "plotter")]
#[command(about = "Plot a function next to its Riemann-sum integral")]
#[command(version)]
struct Cli {
    /// TOML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute once and write function.png / integral.png
    Render {
        #[command(flatten)]
        overrides: Overrides,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Also export both series as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Keep recomputing and rendering; read `key = value` edits from stdin
    Watch {
        #[command(flatten)]
        overrides: Overrides,

        /// Output directory for the final frames
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Stop after this long instead of at end of input
        #[arg(long)]
        duration_ms: Option<u64>,
    },
}

/// Command-line values win over the config file.
#[derive(Args, Default)]
struct Overrides {
    /// Function of x, e.g. "sin(x) * x^2"
    #[arg(short, long, allow_hyphen_values = true)]
    function: Option<String>,

    /// left | right | midpoint | trapezoidal
    #[arg(short, long)]
    rule: Option<QuadratureRule>,

    #[arg(long, allow_hyphen_values = true)]
    min_x: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    max_x: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    min_y: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    max_y: Option<String>,

    /// Number of slices (1..=5000)
    #[arg(short, long, allow_hyphen_values = true)]
    n: Option<String>,

    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    #[arg(long)]
    ratio: Option<f64>,
    #[arg(long)]
    theme: Option<String>,
}

impl Overrides {
    fn apply(self, cfg: &mut Config) {
        let inputs = &mut cfg.inputs;
        if let Some(v) = self.function { inputs.function = v; }
        if let Some(v) = self.rule { inputs.rule = v; }
        if let Some(v) = self.min_x { inputs.min_x = v; }
        if let Some(v) = self.max_x { inputs.max_x = v; }
        if let Some(v) = self.min_y { inputs.min_y = v; }
        if let Some(v) = self.max_y { inputs.max_y = v; }
        if let Some(v) = self.n { inputs.n = v; }

        let render = &mut cfg.render;
        if let Some(v) = self.width { render.width = v; }
        if let Some(v) = self.height { render.height = v; }
        if let Some(v) = self.ratio { render.device_pixel_ratio = v; }
        if let Some(v) = self.theme { render.theme = v; }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Render { overrides, out, csv } => {
            overrides.apply(&mut cfg);
            render(&cfg, &out, csv.as_deref())
        }
        Commands::Watch { overrides, out, duration_ms } => {
            overrides.apply(&mut cfg);
            watch(&cfg, &out, duration_ms.map(Duration::from_millis))
        }
    }
}

fn render(cfg: &Config, out: &Path, csv: Option<&Path>) -> Result<()> {
    let ctx = AppContext::from_config(cfg)?;
    let mut frames = Frames { function: SkiaSurface::new(), integral: SkiaSurface::new() };
    let result = ctx.run_once(&mut frames)?;

    let function_png = frames.function.encode_png()?;
    let integral_png = frames.integral.encode_png()?;
    for p in output::write_pngs(out, &function_png, &integral_png)? {
        println!("Wrote {}", p.display());
    }
    if let Some(path) = csv {
        output::write_csv_file(path, &result)?;
        println!("Wrote {}", path.display());
    }
    println!("{}", result.integral.formatted());
    Ok(())
}

fn watch(cfg: &Config, out: &Path, duration: Option<Duration>) -> Result<()> {
    let ctx = Arc::new(AppContext::from_config(cfg)?);
    let scheduler = Scheduler::start(Arc::clone(&ctx), &cfg.schedule)?;

    match duration {
        Some(d) => std::thread::sleep(d),
        None => {
            info!("reading `key = value` edits from stdin; EOF or `quit` stops");
            for line in std::io::stdin().lock().lines() {
                let line = line.context("reading stdin")?;
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if line == "quit" {
                    break;
                }
                match line.parse::<InputChange>().and_then(|c| ctx.apply_change(&c)) {
                    Ok(()) => scheduler.input_changed(),
                    Err(e) => warn!("{e:#}"),
                }
            }
        }
    }

    let frames = scheduler.shutdown()?;
    for p in output::write_pngs(out, &frames.function_png, &frames.integral_png)? {
        println!("Wrote {}", p.display());
    }
    if let Some(result) = ctx.latest() {
        println!("{}", result.integral.formatted());
    }
    Ok(())
}
