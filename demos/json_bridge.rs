//! Converting between TOON tables and JSON with serde_json.
//!
//! Run with: cargo run --example json_bridge

use std::error::Error;
use toon_tables::{parse, serialize_table, Row};

fn main() -> Result<(), Box<dyn Error>> {
    // TOON -> JSON
    let doc = parse(
        "users[2]{id,name,active}:\n  1,Alice,true\n  2,Bob,false\n\
         endpoints.student[1]{id,apiType}:\n  class-days,8\n",
    )?;
    let json = serde_json::to_string_pretty(&doc)?;
    println!("as JSON:\n{json}\n");

    // JSON -> TOON
    let records = r#"[
        {"id": 1, "name": "Alice", "score": 9.5},
        {"id": 2, "name": "Bob", "score": null}
    ]"#;
    let rows: Vec<Row> = serde_json::from_str(records)?;
    println!("as TOON:\n{}", serialize_table(&rows, "players"));

    Ok(())
}
