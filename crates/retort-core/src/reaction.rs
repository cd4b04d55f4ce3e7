//! A reaction: one equation's stoichiometry.

use crate::set::SubstanceSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable pairing of required reactants and resulting products.
///
/// Deliberately carries no structural equality: two reactions built from
/// identical equation text remain distinct values, so a rule list never
/// collapses duplicate equations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    reactants: SubstanceSet,
    products: SubstanceSet,
}

impl Reaction {
    pub fn new(reactants: SubstanceSet, products: SubstanceSet) -> Self {
        Self {
            reactants,
            products,
        }
    }

    pub fn reactants(&self) -> &SubstanceSet {
        &self.reactants
    }

    pub fn products(&self) -> &SubstanceSet {
        &self.products
    }
}

impl fmt::Display for Reaction {
    /// Formats back into equation notation: `2H2 + O2 -> 2H2O`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |f: &mut fmt::Formatter<'_>, set: &SubstanceSet| -> fmt::Result {
            for (i, substance) in set.iter().enumerate() {
                if i > 0 {
                    write!(f, " + ")?;
                }
                write!(f, "{substance}")?;
            }
            Ok(())
        };
        side(f, &self.reactants)?;
        write!(f, " -> ")?;
        side(f, &self.products)
    }
}
