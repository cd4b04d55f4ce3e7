//! A keyed substance container: at most one entry per name.

use crate::substance::Substance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A set of substances keyed by name.
///
/// The equation model treats sets of substances as by-name maps: two entries
/// with the same name are the same element regardless of quantity or
/// variant. This container makes that rule explicit -- inserting a substance
/// whose name is already present replaces the previous entry.
///
/// Iteration is in sorted name order, so a cascade over the same input
/// always visits entries in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstanceSet {
    entries: BTreeMap<String, Substance>,
}

impl SubstanceSet {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a substance, replacing any same-named entry. Returns the
    /// replaced entry, if there was one.
    pub fn insert(&mut self, substance: Substance) -> Option<Substance> {
        self.entries
            .insert(substance.name().to_string(), substance)
    }

    pub fn get(&self, name: &str) -> Option<&Substance> {
        self.entries.get(name)
    }

    /// Quantity of the named entry, or 0 when absent.
    pub fn quantity(&self, name: &str) -> u32 {
        self.entries.get(name).map(Substance::quantity).unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Substance> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substance> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<Substance> for SubstanceSet {
    fn from_iter<I: IntoIterator<Item = Substance>>(iter: I) -> Self {
        let mut set = SubstanceSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Substance> for SubstanceSet {
    fn extend<I: IntoIterator<Item = Substance>>(&mut self, iter: I) {
        for substance in iter {
            self.insert(substance);
        }
    }
}

impl IntoIterator for SubstanceSet {
    type Item = Substance;
    type IntoIter = std::collections::btree_map::IntoValues<String, Substance>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a> IntoIterator for &'a SubstanceSet {
    type Item = &'a Substance;
    type IntoIter = std::collections::btree_map::Values<'a, String, Substance>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl fmt::Display for SubstanceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, substance) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{substance}")?;
        }
        write!(f, "}}")
    }
}
