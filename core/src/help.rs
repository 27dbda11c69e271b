//! Help text rendering for an [`OptionTable`].
//!
//! Output is a fixed banner followed by one block per visible option:
//!
//! ```text
//! OVERVIEW: Swift compiler
//!
//! USAGE: swiftc
//!
//! OPTIONS:
//!   -o <file>              Write output to <file>
//!   -v                     Show version
//! ```
//!
//! Options are sorted by spelling with leading dashes stripped and case
//! folded. Display names longer than [`HELP_COLUMN_WIDTH`] go on their own
//! line with the help text indented underneath.

use std::io::{self, Write};

use tracing::debug;

use crate::{GeneratorKind, HelpConfig, OptionTable, StoredOption};

/// Width of the display-name column.
pub const HELP_COLUMN_WIDTH: usize = 22;

/// Placeholder used when an option that takes a value has no meta-variable.
pub const DEFAULT_META_VAR: &str = "<value>";

/// Returns the key options are sorted by: leading `-` stripped, lowercased.
///
/// # Examples
///
/// ```
/// use swift_driver_core::help_sort_key;
///
/// assert_eq!(help_sort_key("-Xlinker"), "xlinker");
/// assert_eq!(help_sort_key("--help"), "help");
/// ```
pub fn help_sort_key(spelling: &str) -> String {
    spelling.trim_start_matches('-').to_lowercase()
}

/// Builds the name column for an option: spelling plus its meta-variable.
///
/// # Examples
///
/// ```
/// use swift_driver_core::{Generator, OptionTable, display_name};
///
/// let mut table = OptionTable::new();
/// let text = Generator::joined_or_separate(|s: &str| s.to_string());
/// table.add_option("-I", text, false, Some("<dir>"), Some("Add search path"));
/// let text = Generator::joined(|s: &str| s.to_string());
/// table.add_option("-l", text, false, None, Some("Link library"));
///
/// let names: Vec<String> = table.iter().map(display_name).collect();
/// assert_eq!(names, vec!["-I <dir>", "-l<value>"]);
/// ```
pub fn display_name<V>(option: &StoredOption<V>) -> String {
    let meta_var = option.meta_var.as_deref().unwrap_or(DEFAULT_META_VAR);
    match option.kind() {
        GeneratorKind::Flag | GeneratorKind::Input => option.spelling.clone(),
        GeneratorKind::Joined | GeneratorKind::CommaJoined => {
            format!("{}{meta_var}", option.spelling)
        }
        GeneratorKind::Separate | GeneratorKind::Remaining | GeneratorKind::JoinedOrSeparate => {
            format!("{} {meta_var}", option.spelling)
        }
    }
}

/// Returns the options help output lists, in print order, each paired with
/// its help text.
///
/// Aliases, options without help text, and input options are never listed.
/// Hidden options are listed only when `include_hidden` is set. The sort is
/// stable, so options with equal keys keep registration order.
pub fn visible_options<V>(
    table: &OptionTable<V>,
    include_hidden: bool,
) -> Vec<(&StoredOption<V>, &str)> {
    let mut visible: Vec<(&StoredOption<V>, &str)> = table
        .iter()
        .filter(|o| !o.is_alias)
        .filter(|o| include_hidden || !o.is_hidden)
        .filter(|o| o.kind().is_listed_in_help())
        .filter_map(|o| o.help_text.as_deref().map(|help_text| (o, help_text)))
        .collect();
    visible.sort_by_cached_key(|(o, _)| help_sort_key(&o.spelling));
    visible
}

fn format_entry(name: &str, help_text: &str) -> String {
    if name.chars().count() <= HELP_COLUMN_WIDTH {
        format!("  {name:<width$} {help_text}\n", width = HELP_COLUMN_WIDTH)
    } else {
        format!(
            "  {name}\n  {:width$} {help_text}\n",
            "",
            width = HELP_COLUMN_WIDTH
        )
    }
}

/// Renders the full help text (banner plus option list) as a string.
///
/// # Examples
///
/// ```
/// use swift_driver_core::{Generator, HelpConfig, OptionTable, render_help};
///
/// let mut table = OptionTable::new();
/// table.add_option("-v", Generator::flag(|| ()), false, None, Some("Show version"));
///
/// let help = render_help(&table, &HelpConfig::default(), false);
/// assert!(help.starts_with("OVERVIEW: Swift compiler\n"));
/// assert!(help.ends_with("  -v                     Show version\n"));
/// ```
pub fn render_help<V>(table: &OptionTable<V>, config: &HelpConfig, include_hidden: bool) -> String {
    let options = visible_options(table, include_hidden);
    debug!(
        total = table.len(),
        listed = options.len(),
        include_hidden,
        "rendering help"
    );

    let mut out = String::new();
    out.push_str(&format!("OVERVIEW: {}\n\n", config.overview));
    out.push_str(&format!("USAGE: {}\n\n", config.usage));
    out.push_str("OPTIONS:\n");

    for (option, help_text) in options {
        out.push_str(&format_entry(&display_name(option), help_text));
    }

    out
}

/// Writes the rendered help text to `out`.
///
/// # Errors
///
/// Returns any error produced by the underlying writer.
pub fn write_help<V, W: Write>(
    table: &OptionTable<V>,
    config: &HelpConfig,
    include_hidden: bool,
    out: &mut W,
) -> io::Result<()> {
    out.write_all(render_help(table, config, include_hidden).as_bytes())?;
    out.flush()
}

impl<V> OptionTable<V> {
    /// Prints help for this table to standard output using the default banner.
    ///
    /// # Errors
    ///
    /// Returns an error if standard output cannot be written.
    pub fn print_help(&self, include_hidden: bool) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_help(self, &HelpConfig::default(), include_hidden, &mut handle)
    }
}
