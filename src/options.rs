//! Configuration options for TOON table parsing.
//!
//! [`ParseOptions`] is an immutable configuration value resolved once, at
//! parser construction, and passed to every parse call. There is no hidden
//! global state.
//!
//! ## Examples
//!
//! ```rust
//! use toon_tables::{parse_with_options, ParseOptions};
//!
//! // Lenient counts, semicolon comments
//! let options = ParseOptions::new()
//!     .with_comment_char(';')
//!     .with_strict_counts(false);
//!
//! let doc = parse_with_options("users[9]{id}:\n1 ; declared count ignored", options).unwrap();
//! assert_eq!(doc.table("users").unwrap().len(), 1);
//! ```

/// Configuration for TOON table parsing.
///
/// Controls comment handling, count enforcement, value coercion, and
/// dotted-name nesting.
///
/// # Examples
///
/// ```rust
/// use toon_tables::ParseOptions;
///
/// // Defaults: '#' comments, strict counts, coercion, nesting
/// let options = ParseOptions::new();
/// assert_eq!(options.comment_char, '#');
/// assert!(options.strict_counts);
///
/// // Custom configuration
/// let options = ParseOptions::new()
///     .with_coerce_values(false)
///     .with_nested_paths(false);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Character that starts a trailing comment outside quoted spans.
    pub comment_char: char,
    /// When `true`, a table's row count must match its declared `[count]`.
    pub strict_counts: bool,
    /// When `true`, cell tokens coerce to typed values; when `false`, every
    /// cell is kept as a raw string.
    pub coerce_values: bool,
    /// When `true`, dotted table names expand into a nested tree; when
    /// `false`, full dotted names stay flat keys.
    pub nested_paths: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            comment_char: '#',
            strict_counts: true,
            coerce_values: true,
            nested_paths: true,
        }
    }
}

impl ParseOptions {
    /// Creates the default options (`#` comments, strict counts, value
    /// coercion, and nested paths all enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comment character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_tables::ParseOptions;
    ///
    /// let options = ParseOptions::new().with_comment_char(';');
    /// assert_eq!(options.comment_char, ';');
    /// ```
    #[must_use]
    pub fn with_comment_char(mut self, comment_char: char) -> Self {
        self.comment_char = comment_char;
        self
    }

    /// Enables or disables strict row-count enforcement.
    #[must_use]
    pub fn with_strict_counts(mut self, strict_counts: bool) -> Self {
        self.strict_counts = strict_counts;
        self
    }

    /// Enables or disables automatic value coercion.
    ///
    /// With coercion disabled, every cell parses as a raw string, including
    /// `null`, booleans, and numbers.
    #[must_use]
    pub fn with_coerce_values(mut self, coerce_values: bool) -> Self {
        self.coerce_values = coerce_values;
        self
    }

    /// Enables or disables dotted-name nesting.
    #[must_use]
    pub fn with_nested_paths(mut self, nested_paths: bool) -> Self {
        self.nested_paths = nested_paths;
        self
    }
}
