//! Driver: owns the wave and runs the observe/propagate loop to completion
//! or failure

use crate::algorithm::bitset::PatternSet;
use crate::algorithm::compatibility::CompatibilityIndex;
use crate::algorithm::observer::{self, Observation};
use crate::algorithm::pattern_table::{Pattern, PatternTable};
use crate::algorithm::propagation::{self, PropagationOutcome};
use crate::algorithm::rng::Xorshift32;
use crate::algorithm::wave::Wave;
use crate::io::error::WfcError;
use crate::spatial::exemplar::Exemplar;

/// Outcome of a single `step`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A cell was collapsed and its consequences propagated without contradiction
    Continue,
    /// Every cell is decided; the wave is solved
    Finished,
    /// A contradiction was found and the wave was reset
    Restart,
}

/// Generation parameters not fixed by the exemplar itself
#[derive(Clone, Copy, Debug)]
pub struct GenerationConfig {
    /// Output grid width in cells
    pub output_width: usize,
    /// Output grid height in cells
    pub output_height: usize,
    /// Initial, non-zero RNG seed
    pub seed: u32,
    /// Maximum observe/propagate steps before `run` reports an error
    pub max_steps: usize,
    /// Maximum contradiction restarts before `run` reports an error
    pub max_restarts: usize,
}

/// Owns the pattern table, compatibility index, wave, worklist, and RNG for
/// one generation run
pub struct WfcState {
    table: PatternTable,
    index: CompatibilityIndex,
    wave: Wave,
    rng: Xorshift32,
    steps: usize,
    restarts: usize,
    max_steps: usize,
    max_restarts: usize,
}

impl WfcState {
    /// Build the pattern table and compatibility index from `exemplar`, and
    /// allocate a wave of `config.output_width * config.output_height` cells
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::ZeroSeed`] if `config.seed == 0`, or
    /// [`WfcError::InvalidDimensions`] if either output dimension is zero.
    pub fn init(exemplar: &Exemplar, config: GenerationConfig) -> Result<Self, WfcError> {
        if config.output_width == 0 || config.output_height == 0 {
            return Err(WfcError::InvalidDimensions {
                width: config.output_width,
                height: config.output_height,
            });
        }

        let table = PatternTable::extract(exemplar);
        let index = CompatibilityIndex::build(&table);
        let wave = Wave::new(config.output_width, config.output_height, table.len());
        let rng = Xorshift32::new(config.seed)?;

        Ok(Self {
            table,
            index,
            wave,
            rng,
            steps: 0,
            restarts: 0,
            max_steps: config.max_steps,
            max_restarts: config.max_restarts,
        })
    }

    /// Re-initialise the wave to all-ones without rebuilding the pattern
    /// table or compatibility index
    pub fn reset(&mut self) {
        self.wave.reset();
    }

    /// Read the bitmap of pattern indices still allowed at `(x, y)`
    #[must_use]
    pub fn read_cell(&self, x: i32, y: i32) -> Vec<usize> {
        let index = self.wave.index_of(x, y);
        self.wave.cell(index).map(PatternSet::to_vec).unwrap_or_default()
    }

    /// Look up a pattern's packed tile by its dense index
    #[must_use]
    pub fn pattern_tile(&self, pattern_index: usize) -> Option<&Pattern> {
        self.table.get(pattern_index)
    }

    /// Output grid width in cells
    #[must_use]
    pub const fn output_width(&self) -> usize {
        self.wave.width()
    }

    /// Output grid height in cells
    #[must_use]
    pub const fn output_height(&self) -> usize {
        self.wave.height()
    }

    /// Number of observe/propagate steps executed so far
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Number of contradiction restarts executed so far
    #[must_use]
    pub const fn restarts(&self) -> usize {
        self.restarts
    }

    /// Execute one observe-then-propagate step
    pub fn step(&mut self) -> StepOutcome {
        self.steps += 1;

        match observer::observe(&mut self.wave, &self.table, &mut self.rng) {
            Observation::Finished => StepOutcome::Finished,
            Observation::Restart => {
                self.wave.reset();
                self.restarts += 1;
                StepOutcome::Restart
            }
            Observation::Collapsed(origin) => {
                match propagation::propagate(&mut self.wave, &self.index, origin) {
                    PropagationOutcome::Settled => StepOutcome::Continue,
                    PropagationOutcome::Restart => {
                        self.wave.reset();
                        self.restarts += 1;
                        StepOutcome::Restart
                    }
                }
            }
        }
    }

    /// Run `step` until `Finished`, or until the step or restart budget is
    /// exhausted
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::BudgetExhausted`] if neither budget allows another
    /// step before the wave reaches `Finished`.
    pub fn run(&mut self) -> Result<(), WfcError> {
        loop {
            if self.steps >= self.max_steps || self.restarts >= self.max_restarts {
                return Err(WfcError::BudgetExhausted {
                    steps: self.steps,
                    restarts: self.restarts,
                });
            }
            if self.step() == StepOutcome::Finished {
                return Ok(());
            }
        }
    }
}
