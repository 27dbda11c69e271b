//! Option table validation.
//!
//! [`OptionTable`] accepts anything it is given; spelling conflicts are the
//! argument matcher's concern. [`validate_table`] is an opt-in check for
//! table authors that catches structural mistakes before they reach a
//! matcher or the help renderer.
//!
//! # Examples
//!
//! ```
//! use swift_driver_core::*;
//!
//! let mut table = OptionTable::new();
//! let wmo = Generator::flag(|| ());
//! table.add_option("-whole-module-optimization", wmo.clone(), false, None, Some("WMO"));
//! table.add_alias("-wmo", wmo, false);
//! assert!(validate_table(&table).is_empty());
//!
//! // An alias whose generator is not shared with any canonical option.
//! table.add_alias("-O2", Generator::flag(|| ()), false);
//! assert_eq!(
//!     validate_table(&table),
//!     vec![ValidationError::OrphanAlias("-O2".to_string())]
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{GeneratorKind, OptionTable};

/// Option table validation findings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An entry has an empty spelling.
    #[error("option spelling cannot be empty")]
    EmptySpelling,
    /// A non-input spelling does not start with `-`.
    #[error("option spelling must start with '-': {0}")]
    MissingPrefix(String),
    /// Two entries share a spelling.
    #[error("duplicate option spelling: {0}")]
    DuplicateSpelling(String),
    /// An alias does not share its generator with any canonical option.
    #[error("alias has no canonical option: {0}")]
    OrphanAlias(String),
    /// An alias carries help metadata that would never be shown.
    #[error("alias carries help metadata: {0}")]
    AliasWithHelp(String),
}

/// Validates an option table, returning every finding in registration order.
///
/// Checks for empty spellings, missing `-` prefixes (positional input
/// entries are exempt), duplicate spellings, aliases that share no generator
/// with a canonical option, and aliases that carry a meta-variable or help
/// text.
pub fn validate_table<V>(table: &OptionTable<V>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for option in table {
        let spelling = option.spelling.as_str();
        if spelling.is_empty() {
            errors.push(ValidationError::EmptySpelling);
            continue;
        }

        if option.kind() != GeneratorKind::Input && !spelling.starts_with('-') {
            errors.push(ValidationError::MissingPrefix(spelling.to_string()));
        }

        if !seen.insert(spelling) {
            errors.push(ValidationError::DuplicateSpelling(spelling.to_string()));
        }

        if option.is_alias {
            if option.meta_var.is_some() || option.help_text.is_some() {
                errors.push(ValidationError::AliasWithHelp(spelling.to_string()));
            }
            let has_canonical = table
                .canonical()
                .any(|canonical| canonical.generator.shares_transform(&option.generator));
            if !has_canonical {
                errors.push(ValidationError::OrphanAlias(spelling.to_string()));
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Generator, StoredOption};

    #[test]
    fn test_accepts_well_formed_table() {
        let mut table = OptionTable::new();
        let help = Generator::flag(|| ());
        table.add_option("<input>", Generator::input(|_| ()), false, None, None);
        table.add_option("-help", help.clone(), false, None, Some("Display help"));
        table.add_alias("-h", help.clone(), false);
        table.add_alias("--help", help, true);

        assert!(validate_table(&table).is_empty());
    }

    #[test]
    fn test_rejects_missing_prefix_and_empty() {
        let mut table = OptionTable::new();
        table.add_option("help", Generator::flag(|| ()), false, None, None);
        table.add_option("", Generator::flag(|| ()), false, None, None);

        assert_eq!(
            validate_table(&table),
            vec![
                ValidationError::MissingPrefix("help".to_string()),
                ValidationError::EmptySpelling,
            ]
        );
    }

    #[test]
    fn test_rejects_duplicate_spelling() {
        let mut table = OptionTable::new();
        table.add_option("-o", Generator::separate(|_| ()), false, None, Some("a"));
        table.add_option("-o", Generator::joined(|_| ()), false, None, Some("b"));

        assert_eq!(
            validate_table(&table),
            vec![ValidationError::DuplicateSpelling("-o".to_string())]
        );
    }

    #[test]
    fn test_alias_of_alias_is_orphan() {
        let shared = Generator::flag(|| ());
        let mut table = OptionTable::new();
        table.add_alias("-a", shared.clone(), false);
        table.add_alias("-b", shared, false);

        assert_eq!(
            validate_table(&table),
            vec![
                ValidationError::OrphanAlias("-a".to_string()),
                ValidationError::OrphanAlias("-b".to_string()),
            ]
        );
    }

    #[test]
    fn test_rejects_alias_with_help_metadata() {
        let shared = Generator::separate(|_| ());
        let mut table = OptionTable::new();
        table.add_option("-target", shared.clone(), false, Some("<triple>"), Some("Target"));
        table.extend([StoredOption {
            spelling: "--target".to_string(),
            generator: shared,
            is_alias: true,
            is_hidden: false,
            meta_var: None,
            help_text: Some("never shown".to_string()),
        }]);

        let errors = validate_table(&table);
        assert_eq!(
            errors,
            vec![ValidationError::AliasWithHelp("--target".to_string())]
        );
        assert_eq!(errors[0].to_string(), "alias carries help metadata: --target");
    }
}
