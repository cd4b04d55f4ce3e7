//! Shared test helpers for unit, integration, and benchmark code.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so the helpers
//! are available to unit tests, the integration-test crate, and benchmarks
//! (via the `test-utils` feature).

use crate::builder;
use crate::engine::ReactionEngine;
use crate::rule::Rule;
use crate::set::SubstanceSet;
use crate::substance::Substance;

pub fn reactant(name: &str, quantity: u32) -> Substance {
    Substance::reactant(name, quantity)
}

pub fn product(name: &str, quantity: u32) -> Substance {
    Substance::product(name, quantity)
}

/// A reactant pool from `(name, quantity)` pairs.
pub fn pool(entries: &[(&str, u32)]) -> SubstanceSet {
    entries
        .iter()
        .map(|&(name, quantity)| Substance::reactant(name, quantity))
        .collect()
}

/// One rule from one equation string.
pub fn rule(equation: &str) -> Rule {
    Rule::new(builder::build_reaction(equation))
}

/// A default-configured engine over the given equations, in order.
pub fn engine(equations: &[&str]) -> ReactionEngine {
    ReactionEngine::new(equations.iter().map(|eq| rule(eq)).collect())
}
