//! TOON table parsing.
//!
//! The parser walks the input line by line, alternating between schema lines
//! and data rows:
//!
//! ```text
//! users[2]{id,name,role}:
//!   1,Alice,admin
//!   2,Bob,user
//! ```
//!
//! Each line is classified and consumed exactly once, with no backtracking:
//! comments are stripped, blank lines skipped, a schema line seals the
//! previous table (validating its declared row count) and becomes the active
//! schema, and every other non-blank line is a data row for the active
//! schema. At end of input the final table is sealed and the flat table set
//! folds into a [`Document`] tree.
//!
//! ## Usage
//!
//! Most users should use [`parse`](crate::parse) or
//! [`parse_with_options`](crate::parse_with_options) in the crate root. A
//! configured [`Parser`] is worth holding on to when parsing many documents
//! with the same options:
//!
//! ```rust
//! use toon_tables::{ParseOptions, Parser};
//!
//! let parser = Parser::new(ParseOptions::new().with_comment_char(';'));
//! let doc = parser.parse("users[1]{id,name}:\n1,Alice ; inline note").unwrap();
//! assert_eq!(doc.table("users").unwrap().len(), 1);
//! ```

use crate::document::Document;
use crate::map::{Row, Table};
use crate::{Error, ParseOptions, Result, Value};
use indexmap::IndexMap;
use log::{debug, trace};

/// The active table header while its data rows are being collected.
///
/// Transient state: created when a schema line is recognized, consumed to
/// parse the rows that follow, and discarded when the table is sealed. It
/// never appears in the output document.
#[derive(Debug)]
struct Schema {
    name: String,
    count: Option<usize>,
    fields: Vec<String>,
}

/// A configured TOON table parser.
///
/// Parsing is a pure function of the input string: all accumulator state
/// (active schema, row buffer, table set) is local to each [`parse`] call,
/// so one `Parser` can serve many threads through `&self`.
///
/// [`parse`]: Parser::parse
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParseOptions) -> Self {
        Parser { options }
    }

    /// Returns the options this parser was built with.
    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses a TOON document into a tree of named tables.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed schema line, field-count mismatch,
    /// row-count mismatch (strict mode), data row before any schema, or
    /// dotted-name path conflict. No partial document is produced.
    pub fn parse(&self, input: &str) -> Result<Document> {
        let mut tables: IndexMap<String, Table> = IndexMap::new();
        let mut active: Option<(Schema, Table)> = None;
        let mut line_no = 0;

        for raw in input.lines() {
            line_no += 1;
            let line = strip_comment(raw, self.options.comment_char).trim();
            if line.is_empty() {
                continue;
            }

            if is_schema_line(line) {
                if let Some((schema, rows)) = active.take() {
                    self.seal(schema, rows, &mut tables, line_no)?;
                }
                let schema = parse_schema(line, line_no)?;
                trace!(
                    "line {}: schema '{}' ({} fields, declared count {:?})",
                    line_no,
                    schema.name,
                    schema.fields.len(),
                    schema.count
                );
                active = Some((schema, Table::new()));
            } else if let Some((schema, rows)) = active.as_mut() {
                rows.push(self.parse_data_line(line, schema, line_no)?);
            } else {
                return Err(Error::DataBeforeSchema { line: line_no });
            }
        }

        if let Some((schema, rows)) = active.take() {
            self.seal(schema, rows, &mut tables, line_no)?;
        }

        debug!("parsed {} tables from {} input lines", tables.len(), line_no);
        Document::from_tables(tables, self.options.nested_paths)
    }

    /// Validates the declared row count and commits the table.
    ///
    /// A table with the same name as an earlier one replaces it, keeping the
    /// earlier position in document order.
    fn seal(
        &self,
        schema: Schema,
        rows: Table,
        tables: &mut IndexMap<String, Table>,
        line_no: usize,
    ) -> Result<()> {
        if self.options.strict_counts {
            if let Some(declared) = schema.count {
                if rows.len() != declared {
                    return Err(Error::row_count_mismatch(
                        line_no,
                        &schema.name,
                        declared,
                        rows.len(),
                    ));
                }
            }
        }
        trace!("table '{}' sealed with {} rows", schema.name, rows.len());
        tables.insert(schema.name, rows);
        Ok(())
    }

    /// Tokenizes one data line and zips it against the active schema.
    fn parse_data_line(&self, line: &str, schema: &Schema, line_no: usize) -> Result<Row> {
        let cells = split_cells(line);
        if cells.len() != schema.fields.len() {
            return Err(Error::field_count_mismatch(
                line_no,
                &schema.fields,
                cells.len(),
            ));
        }

        let mut row = Row::with_capacity(schema.fields.len());
        for (field, cell) in schema.fields.iter().zip(cells) {
            let value = if self.options.coerce_values {
                Value::from_token(&cell)
            } else {
                Value::String(cell)
            };
            row.insert(field.clone(), value);
        }
        Ok(row)
    }
}

/// Cuts a trailing comment off `line`.
///
/// The comment character only starts a comment outside an open double-quote
/// span, so quoted cell values may contain it.
fn strip_comment(line: &str, comment_char: char) -> &str {
    if !line.contains(comment_char) {
        return line;
    }
    let mut in_quotes = false;
    for (i, ch) in line.char_indices() {
        if ch == '"' {
            in_quotes = !in_quotes;
        }
        if ch == comment_char && !in_quotes {
            return &line[..i];
        }
    }
    line
}

/// A line is a schema declaration iff it contains both `{` and `}:` after
/// comment removal and trimming. Everything else non-blank is a data row.
fn is_schema_line(line: &str) -> bool {
    line.contains('{') && line.contains("}:")
}

/// Parses `name[count]{field1,field2,...}:` into a [`Schema`].
///
/// The count is optional; text after the closing `}:` is ignored. The field
/// list must be non-empty with no empty and no duplicate names.
fn parse_schema(line: &str, line_no: usize) -> Result<Schema> {
    let malformed = || Error::malformed_schema(line_no, line);

    let (head, rest) = line.split_once('{').ok_or_else(malformed)?;
    let (field_list, tail) = rest.split_once('}').ok_or_else(malformed)?;
    if !tail.starts_with(':') {
        return Err(malformed());
    }

    let (name, count) = match head.split_once('[') {
        Some((name, count_part)) => {
            let digits = count_part.strip_suffix(']').ok_or_else(malformed)?;
            let count = digits.parse::<usize>().map_err(|_| malformed())?;
            (name, Some(count))
        }
        None => (head, None),
    };
    if name.is_empty() || !name.bytes().all(is_name_byte) {
        return Err(malformed());
    }

    if field_list.trim().is_empty() {
        return Err(malformed());
    }
    let fields: Vec<String> = field_list.split(',').map(|f| f.trim().to_string()).collect();
    for (i, field) in fields.iter().enumerate() {
        if field.is_empty() || fields[..i].contains(field) {
            return Err(malformed());
        }
    }

    Ok(Schema {
        name: name.to_string(),
        count,
        fields,
    })
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'.' || b == b'_' || b == b'-'
}

/// Splits one data line into trimmed cell tokens.
///
/// Commas separate cells unless inside an open double-quote span; a
/// backslash escapes the next character into the token literally; quote
/// characters toggle quoted mode and are dropped from the token. A line
/// ending in a comma yields one additional empty trailing cell.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for ch in line.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() || line.ends_with(',') {
        cells.push(current.trim().to_string());
    }
    cells
}
