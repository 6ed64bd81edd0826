//! Error types for TOON table parsing and serialization.
//!
//! Parsing is all-or-nothing: the first error aborts the whole parse and no
//! partial document is produced. Every parse-time variant carries the 1-based
//! line number of the offending input line, plus enough context (the raw line
//! text or the expected-vs-actual values) to fix the document by hand.
//!
//! ## Examples
//!
//! ```rust
//! use toon_tables::{parse, Error};
//!
//! let result = parse("1,Alice,admin");
//! match result {
//!     Err(Error::DataBeforeSchema { line }) => assert_eq!(line, 1),
//!     other => panic!("expected DataBeforeSchema, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors from parsing or serializing TOON tables.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A line looked like a schema declaration but did not match
    /// `name[count]{field1,field2,...}:`.
    #[error("line {line}: invalid schema syntax: {text}")]
    MalformedSchema {
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending line, verbatim.
        text: String,
    },

    /// A data row carried a different number of values than its schema
    /// declared fields.
    #[error("line {line}: field count mismatch: expected {expected} fields [{fields}], got {actual} values")]
    FieldCountMismatch {
        /// 1-based line number of the data row.
        line: usize,
        /// Number of fields the active schema declares.
        expected: usize,
        /// The declared field names, comma-joined for display.
        fields: String,
        /// Number of values actually found on the row.
        actual: usize,
    },

    /// A table's final row count did not match its declared `[count]`.
    /// Only raised when strict count enforcement is enabled.
    #[error("line {line}: row count mismatch for '{table}': declared {declared}, got {actual}")]
    RowCountMismatch {
        /// 1-based line number where the table was sealed (the next schema
        /// line, or the last line of input).
        line: usize,
        /// The table's declared name.
        table: String,
        /// Row count declared in the schema header.
        declared: usize,
        /// Number of data rows actually collected.
        actual: usize,
    },

    /// A data row appeared before any schema line was declared.
    #[error("line {line}: data row before any schema declaration")]
    DataBeforeSchema {
        /// 1-based line number of the stray data row.
        line: usize,
    },

    /// Two dotted table names require the same path segment to be both a
    /// table and an intermediate group, e.g. `a.b` alongside `a.b.c`.
    #[error("table path conflict at '{path}': a name cannot be both a table and a group")]
    PathConflict {
        /// The dotted path where the collision occurred.
        path: String,
    },

    /// IO failure in the file/reader convenience wrappers.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message, used by value conversions.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a malformed-schema error quoting the offending line.
    pub fn malformed_schema(line: usize, text: &str) -> Self {
        Error::MalformedSchema {
            line,
            text: text.to_string(),
        }
    }

    /// Creates a field-count mismatch naming the expected field list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_tables::Error;
    ///
    /// let err = Error::field_count_mismatch(3, &["id".into(), "name".into()], 1);
    /// assert!(err.to_string().contains("[id, name]"));
    /// assert!(err.to_string().contains("got 1 values"));
    /// ```
    pub fn field_count_mismatch(line: usize, fields: &[String], actual: usize) -> Self {
        Error::FieldCountMismatch {
            line,
            expected: fields.len(),
            fields: fields.join(", "),
            actual,
        }
    }

    /// Creates a row-count mismatch for a sealed table.
    pub fn row_count_mismatch(line: usize, table: &str, declared: usize, actual: usize) -> Self {
        Error::RowCountMismatch {
            line,
            table: table.to_string(),
            declared,
            actual,
        }
    }

    /// Creates a path-conflict error for a dotted-name collision.
    pub fn path_conflict(path: &str) -> Self {
        Error::PathConflict {
            path: path.to_string(),
        }
    }

    /// Creates an IO error from the convenience wrappers.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a generic message error.
    pub fn message<T: std::fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// Returns the 1-based input line this error points at, when the error
    /// originated from a specific line.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedSchema { line, .. }
            | Error::FieldCountMismatch { line, .. }
            | Error::RowCountMismatch { line, .. }
            | Error::DataBeforeSchema { line } => Some(*line),
            Error::PathConflict { .. } | Error::Io(_) | Error::Message(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
