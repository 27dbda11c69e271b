//! Option registry.
//!
//! An [`OptionTable`] is an insertion-ordered list of [`StoredOption`]s. It
//! is populated once at startup and only read afterward. The table performs
//! no deduplication or conflict detection; see
//! [`validate_table`](crate::validate_table) for opt-in structural checks.

use crate::{Generator, GeneratorKind};

/// A registered option: spelling, generator, and help metadata.
#[derive(Debug, Clone)]
pub struct StoredOption<V> {
    /// Literal spelling including its prefix (e.g. `-help`).
    pub spelling: String,
    /// How the option's argument is consumed and transformed.
    pub generator: Generator<V>,
    /// Alias entries share a canonical option's generator and are never shown in help.
    pub is_alias: bool,
    /// Hidden entries only appear in help when hidden options are requested.
    pub is_hidden: bool,
    /// Placeholder shown for the argument in help (e.g. `<file>`).
    pub meta_var: Option<String>,
    /// One-line help text.
    pub help_text: Option<String>,
}

impl<V> StoredOption<V> {
    /// Returns the consumption shape of this option's generator.
    pub fn kind(&self) -> GeneratorKind {
        self.generator.kind()
    }
}

/// Insertion-ordered option registry.
///
/// # Examples
///
/// ```
/// use swift_driver_core::{Generator, OptionTable};
///
/// let mut table = OptionTable::new();
/// table.add_option(
///     "-o",
///     Generator::separate(|path| path.to_string()),
///     false,
///     Some("<file>"),
///     Some("Write output to <file>"),
/// );
/// table.add_alias("--output", Generator::separate(|path| path.to_string()), false);
///
/// assert_eq!(table.len(), 2);
/// assert!(!table.find("-o").unwrap().is_alias);
/// assert!(table.find("--output").unwrap().is_alias);
/// ```
#[derive(Debug, Clone)]
pub struct OptionTable<V> {
    options: Vec<StoredOption<V>>,
}

impl<V> Default for OptionTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OptionTable<V> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Appends a canonical (non-alias) option.
    pub fn add_option(
        &mut self,
        spelling: &str,
        generator: Generator<V>,
        is_hidden: bool,
        meta_var: Option<&str>,
        help_text: Option<&str>,
    ) {
        self.options.push(StoredOption {
            spelling: spelling.to_string(),
            generator,
            is_alias: false,
            is_hidden,
            meta_var: meta_var.map(String::from),
            help_text: help_text.map(String::from),
        });
    }

    /// Appends an alias. Aliases carry no meta-variable or help text.
    pub fn add_alias(&mut self, spelling: &str, generator: Generator<V>, is_hidden: bool) {
        self.options.push(StoredOption {
            spelling: spelling.to_string(),
            generator,
            is_alias: true,
            is_hidden,
            meta_var: None,
            help_text: None,
        });
    }

    /// Returns the number of registered entries, aliases included.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, StoredOption<V>> {
        self.options.iter()
    }

    /// Finds an entry by exact spelling.
    ///
    /// A canonical entry wins over an alias with the same spelling; otherwise
    /// the first registered match is returned.
    pub fn find(&self, spelling: &str) -> Option<&StoredOption<V>> {
        let mut matches = self.options.iter().filter(|o| o.spelling == spelling);
        let first = matches.next()?;
        if !first.is_alias {
            return Some(first);
        }
        matches.find(|o| !o.is_alias).or(Some(first))
    }

    /// Returns canonical entries, skipping aliases.
    pub fn canonical(&self) -> impl Iterator<Item = &StoredOption<V>> {
        self.options.iter().filter(|o| !o.is_alias)
    }

    /// Returns alias entries, in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = &StoredOption<V>> {
        self.options.iter().filter(|o| o.is_alias)
    }
}

impl<V> Extend<StoredOption<V>> for OptionTable<V> {
    fn extend<I: IntoIterator<Item = StoredOption<V>>>(&mut self, iter: I) {
        self.options.extend(iter);
    }
}

impl<V> FromIterator<StoredOption<V>> for OptionTable<V> {
    fn from_iter<I: IntoIterator<Item = StoredOption<V>>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

impl<'a, V> IntoIterator for &'a OptionTable<V> {
    type Item = &'a StoredOption<V>;
    type IntoIter = std::slice::Iter<'a, StoredOption<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text() -> Generator<String> {
        Generator::separate(|s| s.to_string())
    }

    #[test]
    fn test_add_option_records_metadata() {
        let mut table = OptionTable::new();
        table.add_option("-o", text(), false, Some("<file>"), Some("Output"));

        let entry = table.find("-o").unwrap();
        assert_eq!(entry.spelling, "-o");
        assert!(!entry.is_alias);
        assert!(!entry.is_hidden);
        assert_eq!(entry.meta_var.as_deref(), Some("<file>"));
        assert_eq!(entry.help_text.as_deref(), Some("Output"));
        assert_eq!(entry.kind(), GeneratorKind::Separate);
    }

    #[test]
    fn test_add_alias_drops_help_metadata() {
        let mut table: OptionTable<String> = OptionTable::new();
        table.add_alias("--output", text(), true);

        let entry = table.find("--output").unwrap();
        assert!(entry.is_alias);
        assert!(entry.is_hidden);
        assert!(entry.meta_var.is_none());
        assert!(entry.help_text.is_none());
    }

    #[test]
    fn test_insertion_order_and_duplicates_kept() {
        let mut table = OptionTable::new();
        table.add_option("-b", text(), false, None, None);
        table.add_option("-a", text(), false, None, None);
        table.add_option("-b", text(), true, None, None);

        let spellings: Vec<&str> = table.iter().map(|o| o.spelling.as_str()).collect();
        assert_eq!(spellings, vec!["-b", "-a", "-b"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_find_prefers_canonical_over_alias() {
        let mut table = OptionTable::new();
        table.add_alias("-x", text(), false);
        table.add_option("-x", text(), false, None, Some("canonical"));

        let found = table.find("-x").unwrap();
        assert!(!found.is_alias);
        assert!(table.find("-y").is_none());
    }

    #[test]
    fn test_canonical_and_alias_partitions() {
        let mut table = OptionTable::new();
        table.add_option("-help", Generator::flag(|| ()), false, None, Some("Help"));
        table.add_alias("-h", Generator::flag(|| ()), false);
        table.add_alias("--help", Generator::flag(|| ()), false);

        assert_eq!(table.canonical().count(), 1);
        assert_eq!(table.aliases().count(), 2);
        assert_eq!((&table).into_iter().count(), 3);
    }

    #[test]
    fn test_collect_preserves_entries() {
        let mut table = OptionTable::new();
        table.add_option("-g", Generator::flag(|| ()), false, None, Some("Debug info"));
        table.add_alias("-debug", Generator::flag(|| ()), false);

        let hidden_only: OptionTable<()> = table
            .iter()
            .cloned()
            .map(|mut o| {
                o.is_hidden = true;
                o
            })
            .collect();
        assert_eq!(hidden_only.len(), 2);
        assert!(hidden_only.iter().all(|o| o.is_hidden));
        assert!(hidden_only.find("-debug").unwrap().is_alias);
    }
}
