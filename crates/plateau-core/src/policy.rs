//! Usefulness predicates: which element receives this generation's increment.
//!
//! # Selection Rule
//!
//! Every policy scans the layer left to right and picks the FIRST index whose
//! gap to the current maximum qualifies for the step size:
//!
//! ```text
//! selected = min { i | qualifies(max - layer[i], step) }
//! ```
//!
//! Ties are therefore broken by lowest index. The winner determines which
//! element accumulates increments and so changes the final generation count.
//!
//! # No Overshoot
//!
//! Both predicates require `gap >= step`, so the selected element never
//! passes the maximum. The maximum is constant for the whole run.

use serde::{Deserialize, Serialize};

use crate::step::StepSize;

/// A usefulness predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Qualifies iff `gap >= step`.
    GapThreshold,
    /// Qualifies iff the step lands exactly on the maximum, or leaves a
    /// residual gap of at least [`residual_gap`] after the step.
    #[default]
    ReachOrGap,
}

/// Gap that must remain after a [`Policy::ReachOrGap`] step that does not land
/// on the maximum.
pub const fn residual_gap(step: StepSize) -> u64 {
    match step {
        StepSize::Small => 2,
        StepSize::Large => 1,
    }
}

impl Policy {
    /// Whether an element `gap` below the maximum may take `step`.
    pub const fn qualifies(self, gap: u64, step: StepSize) -> bool {
        let s = step.distance();
        match self {
            Policy::GapThreshold => gap >= s,
            // max - (v + s) >= r  <=>  gap >= s + r
            Policy::ReachOrGap => gap == s || gap >= s + residual_gap(step),
        }
    }

    /// First index (lowest wins) that qualifies for `step`, if any.
    pub fn select(self, layer: &[i64], maximum: i64, step: StepSize) -> Option<usize> {
        layer
            .iter()
            .position(|&value| self.qualifies(maximum.abs_diff(value), step))
    }

    /// Stable name, matching the serde representation.
    pub const fn name(self) -> &'static str {
        match self {
            Policy::GapThreshold => "gap-threshold",
            Policy::ReachOrGap => "reach-or-gap",
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Policy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gap-threshold" => Ok(Policy::GapThreshold),
            "reach-or-gap" => Ok(Policy::ReachOrGap),
            other => Err(crate::Error::Config(format!("unknown policy: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_threshold_table() {
        let p = Policy::GapThreshold;
        assert!(!p.qualifies(0, StepSize::Small));
        assert!(p.qualifies(1, StepSize::Small));
        assert!(p.qualifies(2, StepSize::Small));

        assert!(!p.qualifies(0, StepSize::Large));
        assert!(!p.qualifies(1, StepSize::Large));
        assert!(p.qualifies(2, StepSize::Large));
        assert!(p.qualifies(7, StepSize::Large));
    }

    #[test]
    fn reach_or_gap_table() {
        let p = Policy::ReachOrGap;
        // Small: exact landing at 1, residual >= 2 from 3 upward
        let small: Vec<bool> = (0..6).map(|g| p.qualifies(g, StepSize::Small)).collect();
        assert_eq!(small, [false, true, false, true, true, true]);

        // Large: exact landing at 2, residual >= 1 from 3 upward
        let large: Vec<bool> = (0..6).map(|g| p.qualifies(g, StepSize::Large)).collect();
        assert_eq!(large, [false, false, true, true, true, true]);
    }

    #[test]
    fn never_overshoots() {
        for policy in [Policy::GapThreshold, Policy::ReachOrGap] {
            for step in [StepSize::Small, StepSize::Large] {
                for gap in 0..50 {
                    if policy.qualifies(gap, step) {
                        assert!(gap >= step.distance(), "{policy} overshoots at gap {gap}");
                    }
                }
            }
        }
    }

    #[test]
    fn some_step_always_helps() {
        // Any element below the maximum qualifies for at least one step size.
        for policy in [Policy::GapThreshold, Policy::ReachOrGap] {
            for gap in 1..50 {
                let small = policy.qualifies(gap, StepSize::Small);
                let large = policy.qualifies(gap, StepSize::Large);
                assert!(small || large, "{policy} stalls at gap {gap}");
            }
        }
    }

    #[test]
    fn select_picks_lowest_index() {
        let layer = [6, 3, 3, 6];
        assert_eq!(Policy::GapThreshold.select(&layer, 6, StepSize::Large), Some(1));
        assert_eq!(Policy::ReachOrGap.select(&layer, 6, StepSize::Small), Some(1));
    }

    #[test]
    fn select_skips_unqualified_prefix() {
        // gap 2 cannot take a small step under ReachOrGap; gap 1 can
        let layer = [4, 5, 6];
        assert_eq!(Policy::ReachOrGap.select(&layer, 6, StepSize::Small), Some(1));
        // gap 1 cannot take a large step under either policy
        let layer = [5, 5, 6];
        assert_eq!(Policy::ReachOrGap.select(&layer, 6, StepSize::Large), None);
        assert_eq!(Policy::GapThreshold.select(&layer, 6, StepSize::Large), None);
    }

    #[test]
    fn select_handles_negative_values() {
        let layer = [-10, -3, -1];
        assert_eq!(Policy::GapThreshold.select(&layer, -1, StepSize::Large), Some(0));
        assert_eq!(Policy::ReachOrGap.select(&layer, -1, StepSize::Large), Some(0));
    }

    #[test]
    fn policy_names_round_trip() {
        for policy in [Policy::GapThreshold, Policy::ReachOrGap] {
            assert_eq!(policy.name().parse::<Policy>().unwrap(), policy);
        }
        for other in ["greedy", "a", "b", "Reach-Or-Gap", " gap-threshold"] {
            assert!(other.parse::<Policy>().is_err(), "{other:?} accepted");
        }
    }
}
