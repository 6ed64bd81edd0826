//! TOON table serialization.
//!
//! The structural inverse of parsing: an ordered slice of uniform rows
//! becomes one schema line followed by one data line per row.
//!
//! ```rust
//! use toon_tables::{row, serialize_table};
//!
//! let rows = vec![
//!     row! { "id" => 1, "name" => "Alice", "role" => "admin" },
//!     row! { "id" => 2, "name" => "Bob", "role" => "user" },
//! ];
//!
//! let toon = serialize_table(&rows, "users");
//! assert_eq!(toon, "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user");
//! ```
//!
//! The field list is taken from the first row alone; uniformity across the
//! remaining rows is the caller's contract. A field missing from a later row
//! encodes as `null`.

use crate::document::Document;
use crate::map::Row;
use crate::Value;

/// Serializes one table as a schema line plus indented data lines.
///
/// Cell encoding is the inverse of parse-time coercion: `null` and missing
/// fields emit the literal `null`; booleans and numbers emit their decimal
/// text (floats keep a decimal point so they re-parse as floats); strings
/// containing a comma or double quote are wrapped in quotes with internal
/// quotes backslash-escaped; an array becomes one quoted, comma-joined cell.
///
/// An empty `rows` slice serializes to the empty string.
#[must_use]
pub fn serialize_table(rows: &[Row], name: &str) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let fields: Vec<&String> = first.keys().collect();

    let mut out = String::with_capacity(32 + rows.len() * 24);
    out.push_str(name);
    out.push('[');
    out.push_str(&rows.len().to_string());
    out.push_str("]{");
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(field);
    }
    out.push_str("}:");

    for row in rows {
        out.push_str("\n  ");
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            encode_cell(&mut out, row.get(field));
        }
    }
    out
}

/// Serializes several tables as self-contained blocks separated by one blank
/// line. Tables with no rows are skipped.
///
/// # Examples
///
/// ```rust
/// use toon_tables::{row, serialize_tables};
///
/// let users = vec![row! { "id" => 1 }];
/// let tags = vec![row! { "tag" => "alpha" }];
///
/// let toon = serialize_tables([("users", &users[..]), ("tags", &tags[..])]);
/// assert_eq!(toon, "users[1]{id}:\n  1\n\ntags[1]{tag}:\n  alpha");
/// ```
#[must_use]
pub fn serialize_tables<I, N, R>(tables: I) -> String
where
    I: IntoIterator<Item = (N, R)>,
    N: AsRef<str>,
    R: AsRef<[Row]>,
{
    let blocks: Vec<String> = tables
        .into_iter()
        .map(|(name, rows)| serialize_table(rows.as_ref(), name.as_ref()))
        .filter(|block| !block.is_empty())
        .collect();
    blocks.join("\n\n")
}

/// Serializes a whole parsed document back to TOON text, flattening nested
/// branches into dotted table names.
#[must_use]
pub fn serialize_document(document: &Document) -> String {
    serialize_tables(document.tables())
}

fn encode_cell(out: &mut String, value: Option<&Value>) {
    match value {
        None | Some(Value::Null) => out.push_str("null"),
        Some(Value::Bool(b)) => out.push_str(if *b { "true" } else { "false" }),
        Some(Value::Number(n)) => out.push_str(&n.to_string()),
        Some(Value::String(s)) => write_string(out, s),
        Some(array @ Value::Array(_)) => {
            // Display joins the elements with commas; the quotes keep the
            // joined form a single cell.
            out.push('"');
            out.push_str(&array.to_string());
            out.push('"');
        }
    }
}

fn write_string(out: &mut String, s: &str) {
    if s.contains(',') || s.contains('"') {
        out.push('"');
        for ch in s.chars() {
            if ch == '"' {
                out.push_str("\\\"");
            } else {
                out.push(ch);
            }
        }
        out.push('"');
    } else {
        out.push_str(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    #[test]
    fn empty_rows_serialize_to_empty_string() {
        assert_eq!(serialize_table(&[], "users"), "");
    }

    #[test]
    fn header_derives_from_first_row() {
        let rows = vec![
            row! { "id" => 1, "name" => "Alice" },
            row! { "id" => 2, "name" => "Bob" },
        ];
        let toon = serialize_table(&rows, "users");
        assert!(toon.starts_with("users[2]{id,name}:"));
    }

    #[test]
    fn missing_field_encodes_as_null() {
        let rows = vec![row! { "id" => 1, "name" => "Alice" }, row! { "id" => 2 }];
        let toon = serialize_table(&rows, "users");
        assert!(toon.ends_with("\n  2,null"));
    }

    #[test]
    fn strings_with_commas_or_quotes_are_quoted() {
        let rows = vec![row! {
            "plain" => "hello",
            "comma" => "a,b",
            "quote" => "say \"hi\"",
        }];
        let toon = serialize_table(&rows, "t");
        assert!(toon.contains("hello,\"a,b\",\"say \\\"hi\\\"\""));
    }

    #[test]
    fn null_bool_and_numbers_encode_plain() {
        let rows = vec![row! {
            "n" => Value::Null,
            "b" => false,
            "i" => -3,
            "f" => 2.5,
        }];
        let toon = serialize_table(&rows, "t");
        assert!(toon.ends_with("\n  null,false,-3,2.5"));
    }

    #[test]
    fn whole_floats_keep_decimal_point() {
        let rows = vec![row! { "f" => 4.0 }];
        let toon = serialize_table(&rows, "t");
        assert!(toon.ends_with("\n  4.0"));
    }

    #[test]
    fn array_cell_joins_inside_quotes() {
        let rows = vec![row! {
            "id" => 1,
            "tags" => Value::Array(vec![Value::from("a"), Value::from("b")]),
        }];
        let toon = serialize_table(&rows, "t");
        assert!(toon.ends_with("\n  1,\"a,b\""));
    }

    #[test]
    fn multi_table_blocks_separated_by_blank_line() {
        let users = vec![row! { "id" => 1 }];
        let empty: Vec<Row> = vec![];
        let tags = vec![row! { "tag" => "alpha" }];

        let toon = serialize_tables([
            ("users", &users[..]),
            ("skipped", &empty[..]),
            ("tags", &tags[..]),
        ]);
        assert_eq!(toon, "users[1]{id}:\n  1\n\ntags[1]{tag}:\n  alpha");
    }
}
