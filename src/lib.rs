//! # toon_tables
//!
//! Parser and serializer for tabular TOON documents: schema-headed CSV
//! blocks that fold into nested trees of typed tables.
//!
//! ## What is the tabular TOON dialect?
//!
//! A compact text format for structurally-repeated configuration. One
//! schema line declares a table's name, optional expected row count, and
//! field order; CSV-style data lines follow, one record each:
//!
//! ```text
//! # user catalog
//! users[2]{id,name,role}:
//!   1,Alice,admin
//!   2,Bob,user
//!
//! endpoints.student[1]{id,apiType,name}:
//!   class-days,08,"School days"
//! ```
//!
//! Dotted table names nest (`endpoints.student` lands under an `endpoints`
//! group), trailing comments are stripped outside quotes, and cell values
//! coerce to null / bool / integer / float / string. See [`spec`] for the
//! full format reference.
//!
//! ## Key Features
//!
//! - **Terse**: repeated structure is declared once in the header, not per
//!   record as in JSON
//! - **Lossless**: uniform records round-trip through [`serialize_table`]
//!   and [`parse`] with field order and value types preserved
//! - **Checked**: declared row counts and per-row field counts are enforced
//!   with 1-based line numbers in every error
//! - **JSON bridge**: documents and rows implement serde traits, so
//!   `serde_json` converts a parsed tree straight to JSON and back
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use toon_tables::parse;
//!
//! let doc = parse(
//!     "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user\n",
//! )
//! .unwrap();
//!
//! let users = doc.table("users").unwrap();
//! assert_eq!(users.len(), 2);
//! assert_eq!(users[0].get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(users[0].get("id").and_then(|v| v.as_i64()), Some(1));
//! ```
//!
//! ### The inverse direction
//!
//! ```rust
//! use toon_tables::{row, serialize_table};
//!
//! let rows = vec![
//!     row! { "id" => 1, "name" => "Alice" },
//!     row! { "id" => 2, "name" => "Bob" },
//! ];
//! assert_eq!(
//!     serialize_table(&rows, "users"),
//!     "users[2]{id,name}:\n  1,Alice\n  2,Bob"
//! );
//! ```
//!
//! ### Options
//!
//! ```rust
//! use toon_tables::{parse_with_options, ParseOptions};
//!
//! let options = ParseOptions::new()
//!     .with_strict_counts(false)
//!     .with_nested_paths(false);
//!
//! let doc = parse_with_options("a.b[9]{id}:\n  1\n", options).unwrap();
//! // Flat keys, lenient counts
//! assert!(doc.get("a.b").is_some());
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - parse a document and walk the result tree
//! - **`custom_options.rs`** - comment characters, lenient counts, flat keys
//! - **`json_bridge.rs`** - TOON to JSON and back with `serde_json`
//!
//! Run any of them with: `cargo run --example <name>`

pub mod document;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod spec;
pub mod value;

pub use document::{Document, Node};
pub use error::{Error, Result};
pub use map::{Row, Table};
pub use options::ParseOptions;
pub use parser::Parser;
pub use ser::{serialize_document, serialize_table, serialize_tables};
pub use value::{Number, Value};

use std::fs;
use std::io;
use std::path::Path;

/// Parses a TOON document with the default options.
///
/// # Examples
///
/// ```rust
/// use toon_tables::parse;
///
/// let doc = parse("users[1]{id,name}:\n  1,Alice\n").unwrap();
/// assert_eq!(doc.table("users").unwrap().len(), 1);
/// ```
///
/// # Errors
///
/// Returns a [`Error`] carrying the 1-based line number and cause on the
/// first malformed schema, field/row count mismatch, stray data row, or
/// dotted-name conflict.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Document> {
    parse_with_options(input, ParseOptions::default())
}

/// Parses a TOON document with custom options.
///
/// # Examples
///
/// ```rust
/// use toon_tables::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_coerce_values(false);
/// let doc = parse_with_options("t[1]{n}:\n  42\n", options).unwrap();
/// // Coercion disabled: the cell stays a raw string
/// assert_eq!(
///     doc.table("t").unwrap()[0].get("n").and_then(|v| v.as_str()),
///     Some("42")
/// );
/// ```
///
/// # Errors
///
/// Same failure modes as [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Document> {
    Parser::new(options).parse(input)
}

/// Reads a TOON document from an I/O stream and parses it with the default
/// options.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use toon_tables::from_reader;
///
/// let cursor = Cursor::new(b"users[1]{id}:\n  1\n");
/// let doc = from_reader(cursor).unwrap();
/// assert!(doc.table("users").is_some());
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise the failure modes of
/// [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&input)
}

/// Reads and parses a TOON file with the default options. Pure I/O sugar
/// around [`parse`].
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise the failure
/// modes of [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Document> {
    let input = fs::read_to_string(path).map_err(|e| Error::io(&e.to_string()))?;
    parse(&input)
}

/// Serializes one table to a writer.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(mut writer: W, rows: &[Row], name: &str) -> Result<()> {
    let toon = serialize_table(rows, name);
    writer
        .write_all(toon.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Serializes one table to a file. Pure I/O sugar around
/// [`serialize_table`].
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_path<P: AsRef<Path>>(path: P, rows: &[Row], name: &str) -> Result<()> {
    fs::write(path, serialize_table(rows, name)).map_err(|e| Error::io(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_then_serialize_round_trip() {
        let rows = vec![
            row! { "id" => 1, "name" => "Alice", "active" => true },
            row! { "id" => 2, "name" => "Bob", "active" => false },
        ];
        let toon = serialize_table(&rows, "users");
        let doc = parse(&toon).unwrap();
        assert_eq!(doc.table("users").unwrap(), &rows);
    }

    #[test]
    fn from_reader_parses_stream() {
        let cursor = std::io::Cursor::new(b"users[1]{id,name}:\n  1,Alice\n".to_vec());
        let doc = from_reader(cursor).unwrap();
        assert_eq!(doc.table("users").unwrap().len(), 1);
    }

    #[test]
    fn to_writer_emits_toon_text() {
        let rows = vec![row! { "id" => 1 }];
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &rows, "users").unwrap();
        assert_eq!(buffer, b"users[1]{id}:\n  1");
    }

    #[test]
    fn parser_is_reusable_across_documents() {
        let parser = Parser::new(ParseOptions::default());
        for input in ["a[1]{x}:\n1", "b[2]{y}:\n1\n2"] {
            assert!(parser.parse(input).is_ok());
        }
    }
}
