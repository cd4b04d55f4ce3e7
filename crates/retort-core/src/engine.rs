//! The reaction engine: fires rules against a substance pool and cascades
//! the outputs into a final system state.
//!
//! # Cascade shape
//!
//! The default cascade is a single ordered pass over the rule list. Every
//! rule except the last fires against the working pool; when it fires, its
//! outputs replace the consumed entries -- products nothing downstream can
//! consume go straight to the final state, everything else re-enters the
//! working pool as a reactant for later rules. The last rule fires directly
//! into the final state. One visit per rule per call: a substance produced
//! late never re-enables an earlier rule. Rule order is the caller's
//! equation order, so the result is order-sensitive by design.
//!
//! [`CascadeMode::FixedPoint`] is the opt-in alternative that sweeps the
//! rule list repeatedly until nothing fires or a pass cap is hit.

use crate::rule::{Rule, TriggerSemantics};
use crate::set::SubstanceSet;
use crate::substance::Substance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How the engine cascades rule firings within one simulation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadeMode {
    /// One ordered pass over the rule list, in caller order.
    SinglePass,
    /// Sweep the rule list repeatedly until no rule fires or `max_passes`
    /// sweeps have run. Rules like `A -> A` never settle, so the cap is a
    /// hard stop, not an error.
    FixedPoint { max_passes: usize },
}

impl Default for CascadeMode {
    fn default() -> Self {
        CascadeMode::SinglePass
    }
}

/// Engine behavior knobs, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub trigger: TriggerSemantics,
    pub cascade: CascadeMode,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Owns a fixed, ordered list of rules and applies them to substance pools.
#[derive(Debug, Clone)]
pub struct ReactionEngine {
    rules: Vec<Rule>,
    config: EngineConfig,
}

impl ReactionEngine {
    /// An engine with default configuration (counting trigger check,
    /// single-pass cascade).
    pub fn new(rules: Vec<Rule>) -> Self {
        Self::with_config(rules, EngineConfig::default())
    }

    pub fn with_config(rules: Vec<Rule>, config: EngineConfig) -> Self {
        Self { rules, config }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Every name required as a reactant by any rule in the set.
    fn reactant_names(&self) -> BTreeSet<&str> {
        self.rules
            .iter()
            .flat_map(|rule| rule.reactants().iter())
            .map(Substance::name)
            .collect()
    }

    // -----------------------------------------------------------------------
    // Single-rule firing
    // -----------------------------------------------------------------------

    /// The maximum whole number of simultaneous firings `pool` supports.
    ///
    /// 0 when the rule is not triggerable. Otherwise the minimum over the
    /// rule's reactants of `floor(pool_quantity / required_quantity)`. A
    /// required quantity of 0 is inert: the entry must be present for
    /// triggerability but imposes no bound.
    pub fn fire_count(&self, rule: &Rule, pool: &SubstanceSet) -> u32 {
        if !rule.is_triggerable(pool, self.config.trigger) {
            return 0;
        }
        rule.reactants()
            .iter()
            .filter(|required| required.quantity() > 0)
            .map(|required| pool.quantity(required.name()) / required.quantity())
            .min()
            // No quantity-bearing reactants: nothing to consume, so the rule
            // contributes nothing rather than firing unboundedly.
            .unwrap_or(0)
    }

    /// Fire `rule` against `pool` once, at its maximum fire count.
    ///
    /// Returns the empty set when the rule cannot fire (no partial effects).
    /// Otherwise the result holds: positive leftovers of consumed reactants,
    /// non-participating pool entries passed through unchanged, and each
    /// product scaled by the fire count as a fresh value (quantities that
    /// compute to 0 are filtered out).
    pub fn fire_once(&self, rule: &Rule, pool: &SubstanceSet) -> SubstanceSet {
        let count = self.fire_count(rule, pool);
        let mut output = SubstanceSet::new();
        if count == 0 {
            return output;
        }
        log::debug!("firing '{rule}' {count} time(s) against {pool}");

        for entry in pool.iter() {
            match rule.reactants().get(entry.name()) {
                Some(required) => {
                    // Saturating: oversized coefficients clamp instead of
                    // wrapping on degenerate input.
                    let consumed = count.saturating_mul(required.quantity());
                    let leftover = entry.quantity().saturating_sub(consumed);
                    if leftover > 0 {
                        output.insert(Substance::reactant(entry.name(), leftover));
                    }
                }
                None => {
                    output.insert(entry.clone());
                }
            }
        }

        for template in rule.reaction().products().iter() {
            let produced = template.quantity().saturating_mul(count);
            if produced > 0 {
                output.insert(template.with_quantity(produced));
            }
        }

        output
    }

    // -----------------------------------------------------------------------
    // Cascade
    // -----------------------------------------------------------------------

    /// Apply the whole rule set to `initial` and return the final system
    /// state: leftovers and newly formed products.
    ///
    /// Zero rules or an empty pool yield an empty result.
    pub fn cascade(&self, initial: &SubstanceSet) -> SubstanceSet {
        match self.config.cascade {
            CascadeMode::SinglePass => self.single_pass(initial),
            CascadeMode::FixedPoint { max_passes } => self.fixed_point(initial, max_passes),
        }
    }

    fn single_pass(&self, initial: &SubstanceSet) -> SubstanceSet {
        let mut result = SubstanceSet::new();
        let mut working = initial.clone();
        let reactant_names = self.reactant_names();
        let last = self.rules.len().checked_sub(1);

        for (index, rule) in self.rules.iter().enumerate() {
            if Some(index) == last {
                // The last rule in order fires straight into the final state,
                // with no further cascading.
                result.extend(self.fire_once(rule, &working));
                continue;
            }

            let fired = self.fire_once(rule, &working);
            if fired.is_empty() {
                // Rule did not fire; the working pool is untouched.
                continue;
            }

            let mut next = SubstanceSet::new();
            for substance in fired {
                if substance.is_product() && !reactant_names.contains(substance.name()) {
                    // No rule can consume this name: it is final output.
                    result.insert(substance);
                } else {
                    // Leftovers and consumable products re-enter the pool.
                    next.insert(substance.as_reactant());
                }
            }
            working = next;
        }

        result
    }

    fn fixed_point(&self, initial: &SubstanceSet, max_passes: usize) -> SubstanceSet {
        let mut working = initial.clone();
        let mut produced: BTreeSet<String> = BTreeSet::new();
        let mut passes = 0;

        loop {
            if passes >= max_passes {
                log::warn!(
                    "cascade stopped at the pass cap ({max_passes}) before reaching a fixed point"
                );
                break;
            }

            let mut fired_any = false;
            for rule in &self.rules {
                let fired = self.fire_once(rule, &working);
                if fired.is_empty() {
                    continue;
                }
                fired_any = true;
                let mut next = SubstanceSet::new();
                for substance in fired {
                    if substance.is_product() {
                        produced.insert(substance.name().to_string());
                    }
                    next.insert(substance.as_reactant());
                }
                working = next;
            }

            passes += 1;
            if !fired_any {
                break;
            }
        }
        log::debug!("fixed-point cascade settled after {passes} pass(es)");

        // Final classification mirrors single-pass routing: an entry is a
        // product iff some rule emitted it and no rule can consume it.
        let reactant_names = self.reactant_names();
        working
            .into_iter()
            .map(|substance| {
                if produced.contains(substance.name())
                    && !reactant_names.contains(substance.name())
                {
                    Substance::product(substance.name(), substance.quantity())
                } else {
                    substance
                }
            })
            .collect()
    }
}
