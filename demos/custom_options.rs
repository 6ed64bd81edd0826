//! Customizing parse behavior: comment characters, lenient counts, raw
//! strings, and flat keys.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use toon_tables::{parse_with_options, ParseOptions};

fn main() -> Result<(), Box<dyn Error>> {
    // Semicolon comments
    let options = ParseOptions::new().with_comment_char(';');
    let doc = parse_with_options("users[1]{id,note}:\n  1,a#b ; the # is data\n", options)?;
    println!(
        "note: {:?}",
        doc.table("users").unwrap()[0].get("note").unwrap()
    );

    // Lenient counts: the declared [5] is ignored
    let options = ParseOptions::new().with_strict_counts(false);
    let doc = parse_with_options("users[5]{id}:\n  1\n  2\n", options)?;
    println!("rows despite [5]: {}", doc.table("users").unwrap().len());

    // Coercion off: every cell is a raw string
    let options = ParseOptions::new().with_coerce_values(false);
    let doc = parse_with_options("t[1]{n,b}:\n  42,true\n", options)?;
    println!("raw cells: {:?}", doc.table("t").unwrap()[0]);

    // Nesting off: dotted names stay flat keys
    let options = ParseOptions::new().with_nested_paths(false);
    let doc = parse_with_options("endpoints.student[1]{id}:\n  1\n", options)?;
    println!("flat key present: {}", doc.get("endpoints.student").is_some());

    Ok(())
}
