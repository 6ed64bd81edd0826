//! Parse a TOON document and walk the result tree.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use toon_tables::{parse, row, serialize_table};

fn main() -> Result<(), Box<dyn Error>> {
    let toon = "\
# user catalog
users[2]{id,name,role}:
  1,Alice,admin
  2,Bob,user

endpoints.student[1]{id,apiType,name}:
  class-days,8,\"School days\"
";

    let doc = parse(toon)?;

    let users = doc.table("users").expect("users table");
    for user in users {
        println!(
            "user {}: {} ({})",
            user.get("id").and_then(|v| v.as_i64()).unwrap_or(0),
            user.get("name").and_then(|v| v.as_str()).unwrap_or("?"),
            user.get("role").and_then(|v| v.as_str()).unwrap_or("?"),
        );
    }

    // Dotted names fold into branches
    let student = doc.table("endpoints.student").expect("student table");
    println!(
        "endpoint: {}",
        student[0].get("name").and_then(|v| v.as_str()).unwrap_or("?")
    );

    // And the inverse direction
    let rows = vec![
        row! { "id" => 1, "name" => "Alice" },
        row! { "id" => 2, "name" => "Bob" },
    ];
    println!("\nserialized:\n{}", serialize_table(&rows, "users"));

    Ok(())
}
