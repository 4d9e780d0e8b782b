//! Alternating step sizes.
//!
//! Generations are numbered from 1. Odd generations take a small step (+1),
//! even generations take a large step (+2).

use serde::{Deserialize, Serialize};

/// Increment applied to the selected element in a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepSize {
    /// +1, applied on odd generations
    Small,
    /// +2, applied on even generations
    Large,
}

impl StepSize {
    /// Step size for a (1-based) generation number.
    pub const fn for_generation(generation: u64) -> Self {
        if generation % 2 == 1 {
            StepSize::Small
        } else {
            StepSize::Large
        }
    }

    /// Amount added to the selected element.
    pub const fn increment(self) -> i64 {
        match self {
            StepSize::Small => 1,
            StepSize::Large => 2,
        }
    }

    /// Same as [`increment`](Self::increment), in gap units.
    pub const fn distance(self) -> u64 {
        match self {
            StepSize::Small => 1,
            StepSize::Large => 2,
        }
    }
}
