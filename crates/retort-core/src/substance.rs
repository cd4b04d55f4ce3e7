//! Substance value types: named chemical entities with integer quantities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named chemical entity with a whole-number quantity.
///
/// The variant records which side of an equation the substance came from:
/// reactants are consumed by a firing, products are emitted by one. Within a
/// [`SubstanceSet`](crate::set::SubstanceSet) membership is keyed by name
/// alone, so the variant and quantity never affect set membership.
///
/// Quantities are `u32`: negative amounts are unrepresentable by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Substance {
    Reactant { name: String, quantity: u32 },
    Product { name: String, quantity: u32 },
}

impl Substance {
    /// A substance on the consuming side of a reaction.
    pub fn reactant(name: impl Into<String>, quantity: u32) -> Self {
        Substance::Reactant {
            name: name.into(),
            quantity,
        }
    }

    /// A substance on the producing side of a reaction.
    pub fn product(name: impl Into<String>, quantity: u32) -> Self {
        Substance::Product {
            name: name.into(),
            quantity,
        }
    }

    /// The chemical formula as written, case-sensitive. May be empty for
    /// degenerate tokens (a stray `+` in an equation side).
    pub fn name(&self) -> &str {
        match self {
            Substance::Reactant { name, .. } | Substance::Product { name, .. } => name,
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            Substance::Reactant { quantity, .. } | Substance::Product { quantity, .. } => *quantity,
        }
    }

    pub fn set_quantity(&mut self, new_quantity: u32) {
        match self {
            Substance::Reactant { quantity, .. } | Substance::Product { quantity, .. } => {
                *quantity = new_quantity
            }
        }
    }

    /// A fresh value with the same variant and name but a new quantity.
    /// Rule firings scale product templates through this, so the template
    /// itself is never mutated and repeated firings cannot compound.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        match self {
            Substance::Reactant { name, .. } => Substance::reactant(name.clone(), quantity),
            Substance::Product { name, .. } => Substance::product(name.clone(), quantity),
        }
    }

    /// The same name and quantity re-tagged as a reactant, for feeding a
    /// rule's output back into a working pool.
    pub fn as_reactant(&self) -> Self {
        Substance::reactant(self.name(), self.quantity())
    }

    pub fn is_product(&self) -> bool {
        matches!(self, Substance::Product { .. })
    }
}

impl fmt::Display for Substance {
    /// Formats as written in an equation: `2H2O`, with the coefficient
    /// omitted when it is 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quantity() == 1 {
            write!(f, "{}", self.name())
        } else {
            write!(f, "{}{}", self.quantity(), self.name())
        }
    }
}
