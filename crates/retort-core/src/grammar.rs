//! The equation grammar: extracts equations and their sides from raw text.
//!
//! An equation is `term ('+' term)* '->' term ('+' term)*`, where a term is
//! an optional decimal coefficient immediately followed by an alphanumeric
//! name. Whitespace around terms, `+`, and `->` is insignificant. Anything
//! between grammar matches (typically `;`) is filler and silently skipped.

use regex::Regex;
use std::sync::LazyLock;

const TERM: &str = r"\d*[A-Za-z0-9]+\d*";

static EQUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\s*({TERM})(\s*\+\s*{TERM})*\s*->\s*({TERM})(\s*\+\s*{TERM})*\s*"
    ))
    .expect("equation pattern is valid")
});

static REACTANT_SIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\s*({TERM})(\s*\+\s*{TERM})*\s*->")).expect("reactant pattern is valid")
});

static PRODUCT_SIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"->\s*({TERM})(\s*\+\s*{TERM})*\s*")).expect("product pattern is valid")
});

/// Scan `text` for every substring matching the equation grammar.
///
/// The returned iterator is lazy and borrows `text`; call again to restart.
pub fn split_equations(text: &str) -> impl Iterator<Item = &str> {
    EQUATION.find_iter(text).map(|m| m.as_str())
}

/// The reactant side of one equation: its start through `->`, marker
/// included. `None` when the text holds no `->` (silent grammar failure).
pub fn reactant_side(equation: &str) -> Option<&str> {
    REACTANT_SIDE.find(equation).map(|m| m.as_str())
}

/// The product side of one equation: `->` through its end, marker included.
pub fn product_side(equation: &str) -> Option<&str> {
    PRODUCT_SIDE.find(equation).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_semicolon_delimited_equations() {
        let text = "2H2 + O2 -> 2H2O; N2 + 3H2 -> 2NH3";
        let equations: Vec<&str> = split_equations(text).collect();
        assert_eq!(equations.len(), 2);
        assert!(equations[0].contains("2H2O"));
        assert!(equations[1].contains("2NH3"));
    }

    #[test]
    fn arbitrary_filler_between_equations() {
        let text = "rules: 2H2 + O2 -> 2H2O !!! then C + O2 -> CO2.";
        let equations: Vec<&str> = split_equations(text).collect();
        assert_eq!(equations.len(), 2);
    }

    #[test]
    fn no_match_yields_nothing() {
        assert_eq!(split_equations("no arrows here").count(), 0);
        assert_eq!(split_equations("").count(), 0);
    }

    #[test]
    fn restartable() {
        let text = "H2 + O2 -> H2O2";
        assert_eq!(split_equations(text).count(), 1);
        assert_eq!(split_equations(text).count(), 1);
    }

    #[test]
    fn sides_of_an_equation() {
        let eq = "2H2 + O2 -> 2H2O";
        assert_eq!(reactant_side(eq), Some("2H2 + O2 ->"));
        assert_eq!(product_side(eq), Some("-> 2H2O"));
    }

    #[test]
    fn missing_arrow_fails_silently() {
        assert_eq!(reactant_side("H2O2"), None);
        assert_eq!(product_side("H2O2"), None);
    }

    #[test]
    fn whitespace_is_insignificant() {
        let text = "  2H2   +  O2->2H2O  ";
        let equations: Vec<&str> = split_equations(text).collect();
        assert_eq!(equations.len(), 1);
        assert!(reactant_side(equations[0]).is_some());
    }
}
