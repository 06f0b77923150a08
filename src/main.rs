//! Headless `sortviz` driver: runs one paced sort, logs every frame and
//! exits non-zero if the result fails verification.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sortviz::options::Options;
use sortviz::sort::{Algorithm, Direction};
use sortviz::{Command, Signal, Visualizer};
use web_time::Instant;

#[derive(Parser)]
#[command(
    name = "sortviz",
    about = "Step-driven sorting visualizer (headless)",
    version
)]
struct Cli {
    /// Algorithm to run: insertion, bubble, selection, merge, quick, heap.
    #[arg(long)]
    algorithm: Option<Algorithm>,
    /// Sort largest value first.
    #[arg(long)]
    descending: bool,
    /// Number of values to generate.
    #[arg(long)]
    len: Option<usize>,
    /// Seed for array generation and quick sort pivots.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML options preset.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Write the options JSON Schema to this path and exit.
    #[arg(long)]
    schema: Option<PathBuf>,
    /// Ignore the configured pacing and step as fast as possible.
    #[arg(long)]
    unpaced: bool,
}

impl Cli {
    fn options(&self) -> Result<Options> {
        let mut options = match &self.options {
            Some(path) => Options::load(path).with_context(|| {
                format!("loading options from {}", path.display())
            })?,
            None => Options::default(),
        };
        if let Some(algorithm) = self.algorithm {
            options.sort.algorithm = algorithm;
        }
        if self.descending {
            options.sort.direction = Direction::Descending;
        }
        if let Some(len) = self.len {
            options.array.len = len;
        }
        if self.seed.is_some() {
            options.array.seed = self.seed;
        }
        if self.unpaced {
            options.timing.steps_per_second = 0;
            options.timing.verify_frames_per_second = 0;
        }
        Ok(options)
    }
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
    let cli = Cli::parse();

    if let Some(path) = &cli.schema {
        Options::write_schema(path).with_context(|| {
            format!("writing schema to {}", path.display())
        })?;
        log::info!("wrote options schema to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let mut viz =
        Visualizer::new(cli.options()?).context("creating visualizer")?;
    log::info!("{}: {:?}", viz.title(), viz.current_array());

    viz.execute(Command::ToggleSorting);
    if run(&mut viz) {
        log::info!("result: {:?}", viz.current_array());
        Ok(ExitCode::SUCCESS)
    } else {
        log::error!("verification failed: {:?}", viz.current_array());
        Ok(ExitCode::FAILURE)
    }
}

/// Tick until the sweep ends. Returns the verification outcome.
fn run(viz: &mut Visualizer) -> bool {
    while let Some(wait) = viz.time_until_next_frame(Instant::now()) {
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        let Some(frame) = viz.tick(Instant::now()) else {
            continue;
        };
        match frame.signal {
            Signal::Step => log::debug!(
                "step {} {:?}: {:?}",
                viz.step_count(),
                frame.highlights.iter().collect::<Vec<_>>(),
                viz.current_array()
            ),
            Signal::SortFinished => log::info!(
                "{} finished in {} steps, verifying",
                viz.algorithm(),
                viz.step_count()
            ),
            Signal::VerifyStep => log::trace!("verify {:?}", frame.highlights),
            Signal::Verified(sorted) => return sorted,
        }
    }
    viz.last_verification().unwrap_or(false)
}
