//! Option generators: how an option's argument text becomes a value.
//!
//! A [`Generator`] pairs an argument-consumption shape with a transform. The
//! shape is always inspectable through [`Generator::kind`] without calling
//! the transform, which is what an argument matcher needs to decide how many
//! tokens to take.
//!
//! | Kind | Consumes |
//! |---|---|
//! | [`Flag`](GeneratorKind::Flag) | nothing |
//! | [`Joined`](GeneratorKind::Joined) | text appended to the spelling (`-Ifoo`) |
//! | [`Separate`](GeneratorKind::Separate) | the next whole token |
//! | [`Remaining`](GeneratorKind::Remaining) | every token to the end |
//! | [`CommaJoined`](GeneratorKind::CommaJoined) | next token, split on `,` |
//! | [`JoinedOrSeparate`](GeneratorKind::JoinedOrSeparate) | suffix if present, else next token |
//! | [`Input`](GeneratorKind::Input) | nothing; marks a positional input |

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Transform with no argument.
pub type FlagTransform<V> = Arc<dyn Fn() -> V + Send + Sync>;
/// Transform over a single piece of argument text.
pub type TextTransform<V> = Arc<dyn Fn(&str) -> V + Send + Sync>;
/// Transform over a sequence of argument tokens.
pub type ListTransform<V> = Arc<dyn Fn(&[String]) -> V + Send + Sync>;

/// Argument-consumption shape of a generator, without its transform.
///
/// # Examples
///
/// ```
/// use swift_driver_core::GeneratorKind;
///
/// assert!(!GeneratorKind::Flag.takes_argument());
/// assert!(GeneratorKind::JoinedOrSeparate.takes_argument());
/// assert!(!GeneratorKind::Input.is_listed_in_help());
/// assert_eq!(GeneratorKind::CommaJoined.to_string(), "comma-joined");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Presence alone produces the value.
    Flag,
    /// Value is the text appended directly to the spelling.
    Joined,
    /// Value is the next whole token.
    Separate,
    /// Value is every remaining token.
    Remaining,
    /// Value is the next token split on `,`.
    CommaJoined,
    /// Value is the suffix if present, else the next token.
    JoinedOrSeparate,
    /// Positional input; never listed in help.
    Input,
}

impl GeneratorKind {
    /// Every kind, in declaration order.
    pub const ALL: [GeneratorKind; 7] = [
        GeneratorKind::Flag,
        GeneratorKind::Joined,
        GeneratorKind::Separate,
        GeneratorKind::Remaining,
        GeneratorKind::CommaJoined,
        GeneratorKind::JoinedOrSeparate,
        GeneratorKind::Input,
    ];

    /// Returns the kebab-case label used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            GeneratorKind::Flag => "flag",
            GeneratorKind::Joined => "joined",
            GeneratorKind::Separate => "separate",
            GeneratorKind::Remaining => "remaining",
            GeneratorKind::CommaJoined => "comma-joined",
            GeneratorKind::JoinedOrSeparate => "joined-or-separate",
            GeneratorKind::Input => "input",
        }
    }

    /// Returns `true` if an occurrence of the option carries argument text.
    pub fn takes_argument(self) -> bool {
        match self {
            GeneratorKind::Flag | GeneratorKind::Input => false,
            GeneratorKind::Joined
            | GeneratorKind::Separate
            | GeneratorKind::Remaining
            | GeneratorKind::CommaJoined
            | GeneratorKind::JoinedOrSeparate => true,
        }
    }

    /// Returns `false` for kinds that help output never shows.
    pub fn is_listed_in_help(self) -> bool {
        !matches!(self, GeneratorKind::Input)
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw argument material handed to [`Generator::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawArgument<'a> {
    /// The option was present with no argument.
    None,
    /// A single piece of text (suffix, next token, or positional input).
    Text(&'a str),
    /// A sequence of tokens (remaining tokens or comma-split parts).
    Tokens(&'a [String]),
}

impl RawArgument<'_> {
    fn shape(&self) -> &'static str {
        match self {
            RawArgument::None => "no argument",
            RawArgument::Text(_) => "a text argument",
            RawArgument::Tokens(_) => "a token list",
        }
    }
}

/// Argument-consumption rule plus the transform that builds the option value.
///
/// Transforms are shared behind [`Arc`], so cloning a generator is cheap and
/// an alias can reuse its canonical option's generator as-is.
///
/// # Examples
///
/// ```
/// use swift_driver_core::{Generator, GeneratorKind, RawArgument};
///
/// let include = Generator::joined_or_separate(|path| format!("include {path}"));
/// assert_eq!(include.kind(), GeneratorKind::JoinedOrSeparate);
/// assert_eq!(
///     include.generate(RawArgument::Text("/usr/include")).unwrap(),
///     "include /usr/include"
/// );
///
/// // A flag cannot be handed text.
/// let verbose = Generator::flag(|| "verbose".to_string());
/// assert!(verbose.generate(RawArgument::Text("x")).is_err());
/// ```
pub enum Generator<V> {
    /// See [`GeneratorKind::Flag`].
    Flag(FlagTransform<V>),
    /// See [`GeneratorKind::Joined`].
    Joined(TextTransform<V>),
    /// See [`GeneratorKind::Separate`].
    Separate(TextTransform<V>),
    /// See [`GeneratorKind::Remaining`].
    Remaining(ListTransform<V>),
    /// See [`GeneratorKind::CommaJoined`].
    CommaJoined(ListTransform<V>),
    /// See [`GeneratorKind::JoinedOrSeparate`].
    JoinedOrSeparate(TextTransform<V>),
    /// See [`GeneratorKind::Input`].
    Input(TextTransform<V>),
}

impl<V> Generator<V> {
    /// Creates a [`Flag`](Generator::Flag) generator.
    pub fn flag(f: impl Fn() -> V + Send + Sync + 'static) -> Self {
        Generator::Flag(Arc::new(f))
    }

    /// Creates a [`Joined`](Generator::Joined) generator.
    pub fn joined(f: impl Fn(&str) -> V + Send + Sync + 'static) -> Self {
        Generator::Joined(Arc::new(f))
    }

    /// Creates a [`Separate`](Generator::Separate) generator.
    pub fn separate(f: impl Fn(&str) -> V + Send + Sync + 'static) -> Self {
        Generator::Separate(Arc::new(f))
    }

    /// Creates a [`Remaining`](Generator::Remaining) generator.
    pub fn remaining(f: impl Fn(&[String]) -> V + Send + Sync + 'static) -> Self {
        Generator::Remaining(Arc::new(f))
    }

    /// Creates a [`CommaJoined`](Generator::CommaJoined) generator.
    pub fn comma_joined(f: impl Fn(&[String]) -> V + Send + Sync + 'static) -> Self {
        Generator::CommaJoined(Arc::new(f))
    }

    /// Creates a [`JoinedOrSeparate`](Generator::JoinedOrSeparate) generator.
    pub fn joined_or_separate(f: impl Fn(&str) -> V + Send + Sync + 'static) -> Self {
        Generator::JoinedOrSeparate(Arc::new(f))
    }

    /// Creates an [`Input`](Generator::Input) generator.
    pub fn input(f: impl Fn(&str) -> V + Send + Sync + 'static) -> Self {
        Generator::Input(Arc::new(f))
    }

    /// Returns the consumption shape of this generator.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::Flag(_) => GeneratorKind::Flag,
            Generator::Joined(_) => GeneratorKind::Joined,
            Generator::Separate(_) => GeneratorKind::Separate,
            Generator::Remaining(_) => GeneratorKind::Remaining,
            Generator::CommaJoined(_) => GeneratorKind::CommaJoined,
            Generator::JoinedOrSeparate(_) => GeneratorKind::JoinedOrSeparate,
            Generator::Input(_) => GeneratorKind::Input,
        }
    }

    /// Returns `true` if both generators have the same kind and the same
    /// transform instance, as an alias and its canonical option do.
    ///
    /// # Examples
    ///
    /// ```
    /// use swift_driver_core::Generator;
    ///
    /// let wmo = Generator::flag(|| "wmo");
    /// let alias = wmo.clone();
    /// assert!(alias.shares_transform(&wmo));
    /// assert!(!Generator::flag(|| "wmo").shares_transform(&wmo));
    /// ```
    pub fn shares_transform(&self, other: &Generator<V>) -> bool {
        match (self, other) {
            (Generator::Flag(a), Generator::Flag(b)) => Arc::ptr_eq(a, b),
            (Generator::Joined(a), Generator::Joined(b))
            | (Generator::Separate(a), Generator::Separate(b))
            | (Generator::JoinedOrSeparate(a), Generator::JoinedOrSeparate(b))
            | (Generator::Input(a), Generator::Input(b)) => Arc::ptr_eq(a, b),
            (Generator::Remaining(a), Generator::Remaining(b))
            | (Generator::CommaJoined(a), Generator::CommaJoined(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Runs the transform on an already-resolved argument.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentShape`](DriverError::ArgumentShape) if `argument`
    /// does not match this generator's consumption shape.
    pub fn generate(&self, argument: RawArgument<'_>) -> Result<V> {
        match (self, argument) {
            (Generator::Flag(f), RawArgument::None) => Ok(f()),
            (
                Generator::Joined(f)
                | Generator::Separate(f)
                | Generator::JoinedOrSeparate(f)
                | Generator::Input(f),
                RawArgument::Text(text),
            ) => Ok(f(text)),
            (Generator::Remaining(f) | Generator::CommaJoined(f), RawArgument::Tokens(tokens)) => {
                Ok(f(tokens))
            }
            (generator, argument) => Err(DriverError::ArgumentShape {
                kind: generator.kind(),
                found: argument.shape(),
            }),
        }
    }

    /// Splits `token` on `,` and runs a comma-joined transform on the parts.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentShape`](DriverError::ArgumentShape) if this is not a
    /// [`CommaJoined`](Generator::CommaJoined) generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use swift_driver_core::Generator;
    ///
    /// let sanitizers = Generator::comma_joined(|parts| parts.to_vec());
    /// assert_eq!(
    ///     sanitizers.comma_joined_from("address,undefined").unwrap(),
    ///     vec!["address".to_string(), "undefined".to_string()]
    /// );
    /// ```
    pub fn comma_joined_from(&self, token: &str) -> Result<V> {
        match self {
            Generator::CommaJoined(f) => Ok(f(&split_comma_joined(token))),
            other => Err(DriverError::ArgumentShape {
                kind: other.kind(),
                found: "a comma-separated token",
            }),
        }
    }
}

/// Splits a comma-joined token into its parts.
///
/// Empty parts are kept, matching a literal split on `,`.
pub fn split_comma_joined(token: &str) -> Vec<String> {
    token.split(',').map(String::from).collect()
}

impl<V> Clone for Generator<V> {
    fn clone(&self) -> Self {
        match self {
            Generator::Flag(f) => Generator::Flag(Arc::clone(f)),
            Generator::Joined(f) => Generator::Joined(Arc::clone(f)),
            Generator::Separate(f) => Generator::Separate(Arc::clone(f)),
            Generator::Remaining(f) => Generator::Remaining(Arc::clone(f)),
            Generator::CommaJoined(f) => Generator::CommaJoined(Arc::clone(f)),
            Generator::JoinedOrSeparate(f) => Generator::JoinedOrSeparate(Arc::clone(f)),
            Generator::Input(f) => Generator::Input(Arc::clone(f)),
        }
    }
}

impl<V> fmt::Debug for Generator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Generator").field(&self.kind()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let generators: Vec<Generator<usize>> = vec![
            Generator::flag(|| 0),
            Generator::joined(str::len),
            Generator::separate(str::len),
            Generator::remaining(<[String]>::len),
            Generator::comma_joined(<[String]>::len),
            Generator::joined_or_separate(str::len),
            Generator::input(str::len),
        ];

        let kinds: Vec<GeneratorKind> = generators.iter().map(Generator::kind).collect();
        assert_eq!(kinds, GeneratorKind::ALL.to_vec());
    }

    #[test]
    fn test_generate_dispatches_by_shape() {
        let separate = Generator::separate(|s| s.to_uppercase());
        assert_eq!(separate.generate(RawArgument::Text("out")).unwrap(), "OUT");

        let tokens = vec!["a".to_string(), "b".to_string()];
        let remaining = Generator::remaining(|rest| rest.join(" "));
        assert_eq!(remaining.generate(RawArgument::Tokens(&tokens)).unwrap(), "a b");

        let flag = Generator::flag(|| "set".to_string());
        assert_eq!(flag.generate(RawArgument::None).unwrap(), "set");
    }

    #[test]
    fn test_generate_rejects_wrong_shape() {
        let flag = Generator::flag(|| ());
        let err = flag.generate(RawArgument::Text("x")).unwrap_err();
        assert!(matches!(
            err,
            DriverError::ArgumentShape {
                kind: GeneratorKind::Flag,
                found: "a text argument"
            }
        ));

        let joined = Generator::joined(|_| ());
        assert!(joined.generate(RawArgument::None).is_err());
        assert!(joined.generate(RawArgument::Tokens(&[])).is_err());
    }

    #[test]
    fn test_comma_joined_splits_token() {
        let generator = Generator::comma_joined(|parts| parts.len());
        assert_eq!(generator.comma_joined_from("a,b,,c").unwrap(), 4);
        assert_eq!(split_comma_joined("single"), vec!["single".to_string()]);

        let separate = Generator::separate(|_| 0);
        assert!(separate.comma_joined_from("a,b").is_err());
    }

    #[test]
    fn test_clone_shares_transform() {
        let original = Generator::joined(|s| s.len());
        let copy = original.clone();
        assert_eq!(copy.kind(), GeneratorKind::Joined);
        assert_eq!(copy.generate(RawArgument::Text("abc")).unwrap(), 3);
        assert_eq!(format!("{original:?}"), "Generator(Joined)");
    }

    #[test]
    fn test_shares_transform_requires_same_kind_and_instance() {
        let separate: Generator<usize> = Generator::separate(str::len);
        assert!(separate.shares_transform(&separate.clone()));
        assert!(!separate.shares_transform(&Generator::separate(str::len)));

        let transform = match &separate {
            Generator::Separate(f) => Arc::clone(f),
            _ => unreachable!(),
        };
        let joined = Generator::Joined(transform);
        assert!(!joined.shares_transform(&separate));
    }

    #[test]
    fn test_takes_argument_and_help_visibility() {
        for kind in GeneratorKind::ALL {
            let expected = !matches!(kind, GeneratorKind::Flag | GeneratorKind::Input);
            assert_eq!(kind.takes_argument(), expected, "{kind}");
            assert_eq!(kind.is_listed_in_help(), kind != GeneratorKind::Input);
        }
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&GeneratorKind::JoinedOrSeparate).unwrap();
        assert_eq!(json, "\"joined_or_separate\"");
    }
}
