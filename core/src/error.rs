//! Error types for driver contract operations.
//!
//! Name lookup itself never fails (it yields `None`); these errors cover the
//! surrounding surfaces: loading help configuration, parsing a file type
//! name through [`FromStr`](std::str::FromStr), and invoking a generator with
//! an argument of the wrong shape.

use thiserror::Error;

use crate::GeneratorKind;

/// Errors that can occur around the option registry and file type catalogue.
#[derive(Debug, Error)]
pub enum DriverError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// No file type carries the given name.
    #[error("unknown file type name: {0}")]
    UnknownFileType(String),

    /// A generator was handed an argument it does not consume.
    #[error("{kind} option cannot consume {found}")]
    ArgumentShape {
        /// Kind of the generator that was invoked.
        kind: GeneratorKind,
        /// Shape of the argument that was supplied.
        found: &'static str,
    },
}

/// Convenience alias for results with [`DriverError`].
pub type Result<T> = std::result::Result<T, DriverError>;
