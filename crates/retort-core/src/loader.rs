//! Rules-file loading: reads equation text from disk and builds rules.
//!
//! Feature-gated (`rules-file`) so the core stays I/O-free by default.
//! Loading is the only fallible surface in the crate: equation text itself
//! never fails to parse (grammar mismatches are absorbed), so the error
//! enum covers file access only.

use crate::builder;
use crate::rule::Rule;
use std::path::Path;

/// Errors from loading a rules file.
#[derive(Debug, thiserror::Error)]
pub enum RulesFileError {
    /// The file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read the raw contents of a rules file.
pub fn read_rules_file(path: impl AsRef<Path>) -> Result<String, RulesFileError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Read a rules file and build its rule list, in file order.
///
/// Text matching no equation is skipped; a file with no equations yields an
/// empty list (logged, not an error).
pub fn rules_from_file(path: impl AsRef<Path>) -> Result<Vec<Rule>, RulesFileError> {
    let text = read_rules_file(&path)?;
    let rules = builder::build_rule_set(&text);
    if rules.is_empty() {
        log::warn!("no equations found in {}", path.as_ref().display());
    } else {
        log::debug!(
            "loaded {} rule(s) from {}",
            rules.len(),
            path.as_ref().display()
        );
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_rules_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2H2 + O2 -> 2H2O; N2 + 3H2 -> 2NH3").unwrap();
        let rules = rules_from_file(file.path()).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].reaction().products().quantity("H2O"), 2);
        assert_eq!(rules[1].reaction().products().quantity("NH3"), 2);
    }

    #[test]
    fn file_without_equations_yields_empty_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "nothing to see here").unwrap();
        let rules = rules_from_file(file.path()).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = rules_from_file("/definitely/not/a/rules/file.txt");
        assert!(matches!(result, Err(RulesFileError::Io(_))));
    }
}
