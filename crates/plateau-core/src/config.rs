//! Simulator configuration.
//!
//! Two configurations are shipped:
//! - [`SimulatorConfig::canonical`]: reach-or-gap predicate, leading element
//!   dropped, empty layer converged at generation 0. This is the default.
//! - [`SimulatorConfig::gap_threshold`]: plain gap threshold on the whole
//!   layer, empty layer rejected.

use std::env::VarError;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::policy::Policy;

/// Input preprocessing applied before the working copy is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preprocess {
    /// Simulate the layer as given
    #[default]
    None,
    /// Discard the first element (no-op on an empty layer)
    DropFirst,
}

impl Preprocess {
    /// Build the private working copy for a run.
    pub fn working_copy(self, layer: &[i64]) -> Vec<i64> {
        match self {
            Preprocess::None => layer.to_vec(),
            Preprocess::DropFirst => layer.get(1..).unwrap_or_default().to_vec(),
        }
    }
}

/// What an empty working layer means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyLayer {
    /// Already level: generation 0
    #[default]
    Converged,
    /// Fail with [`Error::InvalidInput`]
    Reject,
}

/// Configuration for a [`GenerationSimulator`](crate::GenerationSimulator).
///
/// When deserialized, fields left out take the values of the named policy's
/// preset (see [`SimulatorConfig::for_policy`]), never those of another
/// preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PartialConfig", rename_all = "camelCase")]
pub struct SimulatorConfig {
    /// Usefulness predicate
    pub policy: Policy,
    /// Preprocessing of the caller's layer
    pub preprocess: Preprocess,
    /// Empty working layer handling
    pub empty_layer: EmptyLayer,
}

/// Serialized form with every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct PartialConfig {
    policy: Option<Policy>,
    preprocess: Option<Preprocess>,
    empty_layer: Option<EmptyLayer>,
}

impl From<PartialConfig> for SimulatorConfig {
    fn from(partial: PartialConfig) -> Self {
        let preset = SimulatorConfig::for_policy(partial.policy.unwrap_or_default());
        Self {
            policy: preset.policy,
            preprocess: partial.preprocess.unwrap_or(preset.preprocess),
            empty_layer: partial.empty_layer.unwrap_or(preset.empty_layer),
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

impl SimulatorConfig {
    /// The configuration of record.
    pub const fn canonical() -> Self {
        Self {
            policy: Policy::ReachOrGap,
            preprocess: Preprocess::DropFirst,
            empty_layer: EmptyLayer::Converged,
        }
    }

    /// The alternative gap-threshold configuration.
    pub const fn gap_threshold() -> Self {
        Self {
            policy: Policy::GapThreshold,
            preprocess: Preprocess::None,
            empty_layer: EmptyLayer::Reject,
        }
    }

    /// Preset for a policy: each policy carries its own preprocessing and
    /// empty-layer handling.
    pub const fn for_policy(policy: Policy) -> Self {
        match policy {
            Policy::ReachOrGap => Self::canonical(),
            Policy::GapThreshold => Self::gap_threshold(),
        }
    }

    /// Create config from environment variables, falling back to the canonical
    /// configuration.
    ///
    /// `PLATEAU_POLICY` selects a preset; the value must be exactly
    /// `reach-or-gap` or `gap-threshold`.
    pub fn from_env() -> Result<Self> {
        Self::from_policy_var(std::env::var("PLATEAU_POLICY"))
    }

    fn from_policy_var(var: std::result::Result<String, VarError>) -> Result<Self> {
        match var {
            Ok(value) => Ok(Self::for_policy(value.parse()?)),
            Err(VarError::NotPresent) => Ok(Self::canonical()),
            Err(e) => Err(Error::Config(format!("PLATEAU_POLICY: {e}"))),
        }
    }

    /// Parse a JSON config. Missing fields take the named policy's preset
    /// values; a missing policy means the canonical preset.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
