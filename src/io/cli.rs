//! Command-line interface: load an exemplar PNG, run generation to
//! completion, and save the result

use crate::algorithm::{GenerationConfig, WfcState};
use crate::io::configuration::{
    DEFAULT_MAX_RESTARTS, DEFAULT_MAX_STEPS, DEFAULT_SEED, OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{load_exemplar_png, render_wave_png};
use crate::io::progress::StepProgress;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command-line arguments for the generator
#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Generate an arbitrarily sized raster from a small exemplar using overlapping wave function collapse"
)]
pub struct Cli {
    /// Exemplar PNG to extract patterns from
    #[arg(value_name = "EXEMPLAR")]
    pub exemplar: PathBuf,

    /// Output raster width in cells
    #[arg(long, default_value_t = 48)]
    pub width: usize,

    /// Output raster height in cells
    #[arg(long, default_value_t = 48)]
    pub height: usize,

    /// RNG seed; must be non-zero
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Maximum observe/propagate steps before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Maximum contradiction restarts before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_RESTARTS)]
    pub max_restarts: usize,

    /// Output PNG path (defaults to `<exemplar>_result.png`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the step progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Resolve the output path, defaulting to the exemplar's name with
    /// [`OUTPUT_SUFFIX`] inserted before its extension
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| default_output_path(&self.exemplar))
    }
}

fn default_output_path(exemplar: &Path) -> PathBuf {
    let stem = exemplar.file_stem().unwrap_or_default();
    let extension = exemplar.extension().unwrap_or_default();
    let name = format!(
        "{}{OUTPUT_SUFFIX}.{}",
        stem.to_string_lossy(),
        extension.to_string_lossy()
    );
    exemplar.parent().map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}

/// Load the exemplar, run generation to completion, and save the result
///
/// # Errors
///
/// Returns an error if the exemplar cannot be loaded, generation exhausts
/// its step or restart budget, or the output image cannot be saved.
pub fn run(cli: &Cli) -> Result<()> {
    let loaded = load_exemplar_png(&cli.exemplar)?;

    let config = GenerationConfig {
        output_width: cli.width,
        output_height: cli.height,
        seed: cli.seed,
        max_steps: cli.max_steps,
        max_restarts: cli.max_restarts,
    };
    let mut state = WfcState::init(&loaded.exemplar, config)?;

    let progress = (!cli.quiet).then(|| StepProgress::new(cli.max_steps));

    let result = loop {
        if state.steps() >= cli.max_steps || state.restarts() >= cli.max_restarts {
            break Err(crate::io::error::WfcError::BudgetExhausted {
                steps: state.steps(),
                restarts: state.restarts(),
            });
        }
        let outcome = state.step();
        if let Some(progress) = &progress {
            progress.tick(state.steps());
            if outcome == crate::algorithm::StepOutcome::Restart {
                progress.record_restart(state.restarts());
            }
        }
        if outcome == crate::algorithm::StepOutcome::Finished {
            break Ok(());
        }
    };

    match (&result, &progress) {
        (Ok(()), Some(progress)) => progress.finish(),
        (Err(_), Some(progress)) => progress.abandon(),
        _ => {}
    }
    result?;

    render_wave_png(&state, &loaded.palette, &cli.output_path())
}
