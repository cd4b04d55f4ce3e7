//! The token builder: turns equation text into substances, reactions, and
//! rules.
//!
//! Building is best-effort and never fails: text with no `->` yields a
//! reaction with two empty sides, a token with no leading digits gets the
//! default coefficient 1, and an oversized coefficient saturates. The only
//! degenerate output deliberately kept is the empty-name token produced by a
//! stray `+` -- the grammar accepts it, so the builder does too.

use crate::grammar;
use crate::reaction::Reaction;
use crate::rule::Rule;
use crate::set::SubstanceSet;
use crate::substance::Substance;

/// Split one term into its leading coefficient and name.
///
/// The coefficient is the maximal leading digit run (default 1 when empty);
/// the name is everything after it.
fn split_term(term: &str) -> (u32, &str) {
    let digits_end = term
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(term.len());
    let (digits, name) = term.split_at(digits_end);
    let quantity = if digits.is_empty() {
        1
    } else {
        // Coefficients beyond u32 saturate rather than fail the build.
        digits.parse().unwrap_or(u32::MAX)
    };
    (quantity, name.trim())
}

fn build_side(side: &str, products: bool) -> SubstanceSet {
    let stripped = side.replace("->", "");
    let stripped = stripped.trim();
    let mut set = SubstanceSet::new();
    if stripped.is_empty() {
        return set;
    }
    for term in stripped.split('+') {
        let (quantity, name) = split_term(term.trim());
        log::trace!("term '{}' -> ({quantity}, '{name}')", term.trim());
        let substance = if products {
            Substance::product(name, quantity)
        } else {
            Substance::reactant(name, quantity)
        };
        set.insert(substance);
    }
    set
}

/// Build the reactant set from a reactant-side string (the `->` marker, if
/// present, is stripped). Duplicate names collapse to one entry.
pub fn build_reactants(side: &str) -> SubstanceSet {
    build_side(side, false)
}

/// Build the product set from a product-side string.
pub fn build_products(side: &str) -> SubstanceSet {
    build_side(side, true)
}

/// Build one reaction from one equation string.
///
/// A string with no `->` yields a reaction with empty reactant and product
/// sets -- grammar failure is absorbed, not raised.
pub fn build_reaction(equation: &str) -> Reaction {
    let reactants = grammar::reactant_side(equation)
        .map(build_reactants)
        .unwrap_or_default();
    let products = grammar::product_side(equation)
        .map(build_products)
        .unwrap_or_default();
    Reaction::new(reactants, products)
}

/// Map [`build_reaction`] over a list of equation strings.
///
/// Returns a `Vec`: reactions have no structural equality, so textually
/// identical equations stay distinct entries, and the caller's order is the
/// order rules will later fire in.
pub fn build_reactions<'a>(equations: impl IntoIterator<Item = &'a str>) -> Vec<Reaction> {
    equations.into_iter().map(build_reaction).collect()
}

/// Extract every equation from a raw rules blob and build the rule list.
pub fn build_rule_set(text: &str) -> Vec<Rule> {
    grammar::split_equations(text)
        .map(|equation| Rule::new(build_reaction(equation)))
        .collect()
}
