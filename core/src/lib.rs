//! Front-end contract of the Swift compiler driver.
//!
//! This crate defines the data the rest of the driver builds on:
//!
//! - [`Generator`]: how an option's argument text is consumed and turned
//!   into a value, with an inspectable [`GeneratorKind`].
//! - [`OptionTable`]: an insertion-ordered registry of [`StoredOption`]s.
//!   [`driver_options`] returns the driver's own table.
//! - [`render_help`]: sorted, column-aligned help text for a table, with the
//!   banner taken from a [`HelpConfig`].
//! - [`FileType`]: every file kind the driver reads or emits, with total
//!   classification predicates and a cached name lookup.
//!
//! Matching argv tokens against the table and deriving file types from paths
//! are left to callers.
//!
//! # Example
//!
//! ```
//! use swift_driver_core::*;
//!
//! let mut table = OptionTable::new();
//! table.add_option("-v", Generator::flag(|| "verbose"), false, None, Some("Show version"));
//! let output = Generator::separate(|_| "output");
//! table.add_option("-o", output, false, Some("<file>"), Some("Write output to <file>"));
//! table.add_alias("--verbose", Generator::flag(|| "verbose"), false);
//!
//! let help = render_help(&table, &HelpConfig::default(), false);
//! assert!(help.contains("  -o <file>              Write output to <file>\n"));
//! assert!(!help.contains("--verbose"));
//!
//! let object = FileType::from_name("object").unwrap();
//! assert!(object.is_after_llvm());
//! assert!(!object.is_textual());
//! ```

mod builtin;
mod config;
mod error;
mod file_type;
mod generator;
mod help;
mod table;
mod validate;

pub use builtin::{INPUT_SPELLING, OptionArgument, ParsedOption, driver_options};
pub use config::{DEFAULT_OVERVIEW, DEFAULT_USAGE, HelpConfig};
pub use error::{DriverError, Result};
pub use file_type::FileType;
pub use generator::{
    FlagTransform, Generator, GeneratorKind, ListTransform, RawArgument, TextTransform,
    split_comma_joined,
};
pub use help::{
    DEFAULT_META_VAR, HELP_COLUMN_WIDTH, display_name, help_sort_key, render_help,
    visible_options, write_help,
};
pub use table::{OptionTable, StoredOption};
pub use validate::{ValidationError, validate_table};
