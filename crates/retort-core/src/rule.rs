//! Rules: a reaction plus the logic to test whether it can fire.

use crate::reaction::Reaction;
use crate::set::SubstanceSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How triggerability is decided against a pool.
///
/// The counting check tallies (pool entry, required reactant) name matches
/// and compares the tally to the reactant-set size. With name-keyed sets on
/// both sides the two semantics agree, but both are kept so callers who
/// depend on one formulation can say so explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerSemantics {
    /// Count satisfied (pool entry, required reactant) pairs and compare the
    /// total against the number of required reactants.
    #[default]
    Counting,
    /// Require, per reactant, a same-named pool entry with sufficient
    /// quantity.
    PerReactant,
}

/// A reaction plus its triggerability predicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    reaction: Reaction,
}

impl Rule {
    pub fn new(reaction: Reaction) -> Self {
        Self { reaction }
    }

    pub fn reaction(&self) -> &Reaction {
        &self.reaction
    }

    /// The reactant set the engine consumes quantities against.
    pub fn reactants(&self) -> &SubstanceSet {
        self.reaction.reactants()
    }

    /// True iff every reactant this rule requires is present in `pool` with
    /// at least the required quantity, judged under `semantics`.
    pub fn is_triggerable(&self, pool: &SubstanceSet, semantics: TriggerSemantics) -> bool {
        match semantics {
            TriggerSemantics::Counting => {
                let mut triggers = 0;
                for entry in pool.iter() {
                    for required in self.reactants().iter() {
                        if entry.name() == required.name()
                            && entry.quantity() >= required.quantity()
                        {
                            triggers += 1;
                        }
                    }
                }
                triggers == self.reactants().len()
            }
            TriggerSemantics::PerReactant => self.reactants().iter().all(|required| {
                pool.get(required.name())
                    .is_some_and(|entry| entry.quantity() >= required.quantity())
            }),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reaction)
    }
}
