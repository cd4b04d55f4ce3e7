//! Retort Core -- a rule engine for chemical reaction equations.
//!
//! Reactions are production rules over multisets of named substances: given
//! equation text such as `2H2 + O2 -> 2H2O`, the crate parses it into typed
//! rules and simulates applying them to an initial substance pool, yielding
//! a final set of leftovers and newly formed products.
//!
//! # Pipeline
//!
//! 1. **Grammar** -- [`grammar::split_equations`] extracts every equation
//!    from a raw rules blob; filler text between equations is skipped.
//! 2. **Builder** -- [`builder::build_rule_set`] turns equation strings into
//!    an ordered rule list. Parsing is best-effort and never fails.
//! 3. **Engine** -- [`engine::ReactionEngine::cascade`] applies the rules to
//!    a pool, firing each as many times as the pool supports and routing
//!    intermediate products to later rules.
//!
//! # Key types
//!
//! - [`substance::Substance`] -- a named entity with an integer quantity,
//!   tagged as reactant or product.
//! - [`set::SubstanceSet`] -- the by-name keyed container used for pools,
//!   equation sides, and results (at most one entry per name).
//! - [`rule::Rule`] -- a reaction plus its triggerability predicate.
//! - [`engine::ReactionEngine`] -- owns the rule list; configured with
//!   [`engine::EngineConfig`] (trigger semantics, cascade mode).
//!
//! The cascade is single-pass and order-sensitive by default; see
//! [`engine::CascadeMode`] for the opt-in fixed-point alternative.

pub mod builder;
pub mod engine;
pub mod grammar;
#[cfg(feature = "rules-file")]
pub mod loader;
pub mod reaction;
pub mod rule;
pub mod set;
pub mod substance;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
