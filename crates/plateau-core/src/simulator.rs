//! The generation simulator.
//!
//! A run owns a private working copy of the caller's layer and advances it one
//! generation at a time until every element equals the maximum:
//!
//! 1. `maximum = max(layer)`; if every element equals it, stop
//! 2. `generation += 1`; odd → small step, even → large step
//! 3. the policy selects the first qualifying index and adds the step to it,
//!    or nothing happens (the generation is still counted)

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bound::generation_bound;
use crate::config::{EmptyLayer, Preprocess, SimulatorConfig};
use crate::error::{Error, Result};
use crate::policy::Policy;
use crate::step::StepSize;

/// Minimum generations to level `layer` under the canonical configuration.
///
/// # Examples
///
/// ```
/// use plateau_core::minimum_generations;
///
/// assert_eq!(minimum_generations(&[3, 3, 3, 6]), 4);
/// assert_eq!(minimum_generations(&[5]), 0);
/// ```
pub fn minimum_generations(layer: &[i64]) -> u64 {
    let working = Preprocess::DropFirst.working_copy(layer);
    Simulation::new(working, Policy::ReachOrGap).run_to_level()
}

/// What happened in one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutcome {
    /// Generation number (1-based)
    pub generation: u64,
    /// Step size applied this generation
    pub step: StepSize,
    /// Index that received the increment, `None` for a no-op generation
    pub selected: Option<usize>,
    /// Maximum the selection was made against
    pub maximum: i64,
}

/// In-progress simulation over a working layer.
#[derive(Debug, Clone)]
pub struct Simulation {
    layer: Vec<i64>,
    generation: u64,
    policy: Policy,
}

impl Simulation {
    /// Start a simulation at generation 0. Takes ownership of the working copy.
    pub fn new(layer: Vec<i64>, policy: Policy) -> Self {
        Self {
            layer,
            generation: 0,
            policy,
        }
    }

    /// Generations simulated so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current working layer.
    pub fn layer(&self) -> &[i64] {
        &self.layer
    }

    /// Current maximum, `None` for an empty layer.
    pub fn maximum(&self) -> Option<i64> {
        self.layer.iter().copied().max()
    }

    /// Every element equals the maximum (vacuously true when empty).
    pub fn is_level(&self) -> bool {
        match self.maximum() {
            Some(maximum) => self.layer.iter().all(|&value| value == maximum),
            None => true,
        }
    }

    /// Simulate one generation. Returns `None` once the layer is level.
    pub fn advance(&mut self) -> Option<StepOutcome> {
        let maximum = self.maximum()?;
        if self.layer.iter().all(|&value| value == maximum) {
            return None;
        }

        self.generation += 1;
        let step = StepSize::for_generation(self.generation);
        let selected = self.policy.select(&self.layer, maximum, step);

        // The predicate guarantees gap >= step, so this stays <= maximum.
        if let Some(index) = selected {
            self.layer[index] += step.increment();
        }

        trace!(
            generation = self.generation,
            ?step,
            ?selected,
            maximum,
            "generation simulated"
        );

        Some(StepOutcome {
            generation: self.generation,
            step,
            selected,
            maximum,
        })
    }

    /// Advance until level and return the generation count.
    pub fn run_to_level(mut self) -> u64 {
        // Only read by the assertion below.
        let bound = if cfg!(debug_assertions) {
            generation_bound(&self.layer)
        } else {
            0
        };
        while self.advance().is_some() {
            debug_assert!(
                u128::from(self.generation) <= bound,
                "generation {} exceeds bound {}",
                self.generation,
                bound
            );
        }
        debug!(
            generations = self.generation,
            policy = %self.policy,
            "layer level"
        );
        self.generation
    }
}

/// One recorded generation: the outcome plus the layer after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    #[serde(flatten)]
    pub outcome: StepOutcome,
    /// Working layer after the increment
    pub layer: Vec<i64>,
}

/// Full history of a run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    /// Working layer after preprocessing, before generation 1
    pub initial: Vec<i64>,
    /// Generations in order
    pub steps: Vec<StepRecord>,
    /// Final generation count
    pub generations: u64,
}

impl Trace {
    /// Layers after each generation.
    pub fn layers(&self) -> impl Iterator<Item = &[i64]> {
        self.steps.iter().map(|record| record.layer.as_slice())
    }

    /// Maximum used at each generation.
    pub fn maxima(&self) -> impl Iterator<Item = i64> + '_ {
        self.steps.iter().map(|record| record.outcome.maximum)
    }

    /// Generations in which no element qualified.
    pub fn idle_generations(&self) -> usize {
        self.steps
            .iter()
            .filter(|record| record.outcome.selected.is_none())
            .count()
    }
}

/// Levels layers under a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationSimulator {
    config: SimulatorConfig,
}

impl GenerationSimulator {
    /// Create a simulator with the given configuration.
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Minimum generations to level `layer`. The caller's slice is not touched.
    pub fn run(&self, layer: &[i64]) -> Result<u64> {
        Ok(self.start(layer)?.run_to_level())
    }

    /// Like [`run`](Self::run), recording every generation.
    pub fn trace(&self, layer: &[i64]) -> Result<Trace> {
        let mut sim = self.start(layer)?;
        let initial = sim.layer().to_vec();
        let mut steps = Vec::new();

        while let Some(outcome) = sim.advance() {
            steps.push(StepRecord {
                outcome,
                layer: sim.layer().to_vec(),
            });
        }

        debug!(generations = sim.generation(), policy = %self.config.policy, "trace complete");

        Ok(Trace {
            initial,
            steps,
            generations: sim.generation(),
        })
    }

    fn start(&self, layer: &[i64]) -> Result<Simulation> {
        let working = self.config.preprocess.working_copy(layer);
        if working.is_empty() && self.config.empty_layer == EmptyLayer::Reject {
            return Err(Error::InvalidInput(format!(
                "empty layer (input length {}) has no maximum",
                layer.len()
            )));
        }
        Ok(Simulation::new(working, self.config.policy))
    }
}
