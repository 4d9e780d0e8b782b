//! Termination bound for the leveling simulation.
//!
//! # Deficit
//!
//! ```text
//! D(layer) = Σ (max(layer) - xᵢ)
//! ```
//!
//! `D` is the Lyapunov function of the simulation: it is zero exactly when the
//! layer is level, and it never increases.
//!
//! # Termination Proof
//!
//! 1. Both policies only select an element whose gap is at least the step, so
//!    no element passes the maximum and the maximum is constant.
//! 2. A generation that selects an element lowers `D` by 1 or 2.
//! 3. For any gap `d ≥ 1` at least one step size qualifies:
//!    - gap-threshold: the small step qualifies for every `d ≥ 1`
//!    - reach-or-gap: small qualifies for `d = 1` and `d ≥ 3`, large for
//!      `d ≥ 2`
//! 4. Step sizes alternate, so a no-op generation is always followed by a
//!    productive one (the layer is unchanged and still not level).
//! 5. Productive generations ≤ `D`, no-op generations ≤ productive ones
//!    ⇒ generations ≤ `2D`.

/// Sum of gaps to the maximum. Zero for an empty or level layer.
pub fn total_deficit(layer: &[i64]) -> u128 {
    let Some(maximum) = layer.iter().copied().max() else {
        return 0;
    };
    layer
        .iter()
        .map(|&value| u128::from(maximum.abs_diff(value)))
        .sum()
}

/// Upper bound on the generation count for `layer` under either policy.
pub fn generation_bound(layer: &[i64]) -> u128 {
    2 * total_deficit(layer)
}
