//! Plateau: Generation-Minimizing Layer Leveling
//!
//! Brings every element of an integer layer up to the layer's maximum, one
//! element per generation, and reports how many generations that takes.
//!
//! # Alternating Steps
//!
//! - odd generations → small step (+1)
//! - even generations → large step (+2)
//!
//! Each generation a **usefulness predicate** scans the layer left to right and
//! the first qualifying element takes the step. If nothing qualifies the
//! generation still counts.
//!
//! # Policies
//!
//! - **reach-or-gap** (canonical): step must land exactly on the maximum or
//!   leave a residual gap (2 after a small step, 1 after a large one). The
//!   leading element of the input is dropped before simulating.
//! - **gap-threshold**: step must not exceed the gap. Empty layers are rejected.
//!
//! # Termination
//!
//! Generations ≤ 2 × Σ(max − xᵢ). See [`bound`].

pub mod bound;
mod config;
mod error;
mod policy;
mod simulator;
mod step;

pub use bound::{generation_bound, total_deficit};
pub use config::{EmptyLayer, Preprocess, SimulatorConfig};
pub use error::{Error, Result};
pub use policy::{residual_gap, Policy};
pub use simulator::{
    minimum_generations, GenerationSimulator, Simulation, StepOutcome, StepRecord, Trace,
};
pub use step::StepSize;
