//! TOON Table Format Reference
//!
//! This module documents the tabular TOON dialect as implemented by this
//! library. It contains no code.
//!
//! # Overview
//!
//! The format exists to let humans author and diff large amounts of
//! structurally-repeated configuration (parameter lists, endpoint catalogs)
//! far more tersely than JSON, while round-tripping losslessly to and from a
//! JSON-like tree. One schema line declares a table's name, optional
//! expected row count, and field order; CSV-style data lines follow, one
//! record each.
//!
//! ```text
//! # user catalog
//! users[3]{id,name,role,active}:
//!   1,Alice,admin,true
//!   2,Bob,user,true
//!   3,Charlie,guest,false
//!
//! endpoints.student[2]{id,apiType,name}:
//!   class-days,08,"School days"
//!   school-status,62,"School status"
//! ```
//!
//! # Grammar
//!
//! ```text
//! document   := (comment-line | blank-line | schema-line | data-line)*
//! schema-line:= NAME ('[' DIGITS ']')? '{' FIELD (',' FIELD)* '}' ':'
//! data-line  := FIELD-TOKEN (',' FIELD-TOKEN)*
//! NAME       := [A-Za-z0-9._-]+
//! comment    := (unquoted) COMMENT_CHAR .* to end of line, stripped before classification
//! ```
//!
//! A line is a schema line iff, after comment removal and trimming, it
//! contains both `{` and the substring `}:`. Every other non-blank line is a
//! data row belonging to the most recently declared schema; a data row with
//! no active schema is an error.
//!
//! # Comments
//!
//! The comment character (default `#`, configurable) starts a comment only
//! outside an open double-quote span, so `"a#b",2` keeps its `#` while
//! `1,Alice # note` drops everything from the `#` on.
//!
//! # Data rows
//!
//! Commas separate cells unless inside an open double-quote span. A
//! backslash escapes the next character literally. Double quotes toggle
//! quoted mode and are not part of the cell. Cells are trimmed of
//! surrounding whitespace; a line ending in a comma carries one final empty
//! cell. The cell count must equal the schema's field count exactly.
//!
//! # Cell values
//!
//! With coercion enabled (the default), each tokenized cell maps to a typed
//! value in priority order, first match wins:
//!
//! | Token | Value |
//! |-------|-------|
//! | (empty) | null |
//! | bounded by `"` on both ends | string, `\"` unescaped |
//! | `null` | null |
//! | `true` / `false` | boolean |
//! | `-?\d+` | integer (overflowing `i64` becomes a big integer) |
//! | `-?\d+\.\d+` | float |
//! | anything else | string |
//!
//! Plain quotes are consumed during tokenizing, so the quoted-string rule
//! applies to quotes that reached the token through escapes (`\"42\"`);
//! a simply-quoted numeric cell like `"42"` still coerces to a number.
//! With coercion disabled every cell is a raw string.
//!
//! # Row counts
//!
//! A schema may declare an expected row count, `users[3]{...}:`. Under
//! strict counts (the default) the collected row count must match exactly
//! when the table is sealed — at the next schema line or at end of input —
//! or the whole parse fails. With strict counts disabled the declaration is
//! ignored.
//!
//! # Dotted names
//!
//! Dots in a table name express hierarchy: `endpoints.student` and
//! `endpoints.teacher` produce one `endpoints` group holding two tables.
//! A name that would need to be both a table and a group (`a.b` alongside
//! `a.b.c`) is a path conflict and fails the parse. With nesting disabled,
//! full dotted names stay flat keys.
//!
//! # Serialization
//!
//! The inverse direction emits `name[count]{fields}:` with the field list
//! taken from the first record, then one two-space-indented data line per
//! record. Strings containing a comma or quote are wrapped in quotes with
//! internal quotes escaped as `\"`; arrays join their elements inside one
//! quoted cell; multiple tables are separated by a single blank line.
