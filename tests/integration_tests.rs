use toon_tables::{
    parse, parse_with_options, row, serialize_document, serialize_table, serialize_tables, Error,
    Number, ParseOptions, Row, Value,
};

const CATALOG: &str = "\
# user data
users[3]{id,name,role,active}:
  1,Alice,admin,true
  2,Bob,user,true
  3,Charlie,guest,false

# product data
products[2]{id,name,price,description}:
  101,Laptop,999,\"15 inch, 16GB RAM\"
  102,Mouse,25,\"Wireless, ergonomic\"

endpoints.student[2]{id,apiType,name}:
  class-days,08,school-days
  school-status,62,school-status

endpoints.teacher[1]{id,apiType,name}:
  teacher-position,22,teacher-position
";

#[test]
fn test_full_document() {
    let doc = parse(CATALOG).unwrap();

    let users = doc.table("users").unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0].get("id"), Some(&Value::Number(Number::Integer(1))));
    assert_eq!(users[0].get("name").and_then(|v| v.as_str()), Some("Alice"));
    assert_eq!(users[2].get("active"), Some(&Value::Bool(false)));

    let products = doc.table("products").unwrap();
    assert_eq!(
        products[0].get("description").and_then(|v| v.as_str()),
        Some("15 inch, 16GB RAM")
    );

    assert_eq!(doc.table("endpoints.student").unwrap().len(), 2);
    assert_eq!(doc.table("endpoints.teacher").unwrap().len(), 1);
}

#[test]
fn test_field_order_follows_schema() {
    let doc = parse("t[1]{z,a,m}:\n  1,2,3\n").unwrap();
    let fields: Vec<String> = doc.table("t").unwrap()[0].keys().cloned().collect();
    assert_eq!(fields, vec!["z", "a", "m"]);
}

#[test]
fn test_blank_lines_and_comment_lines_are_skipped() {
    let input = "\n\n# heading\n\nusers[1]{id}:\n\n# between\n  1\n\n";
    let doc = parse(input).unwrap();
    assert_eq!(doc.table("users").unwrap().len(), 1);
}

#[test]
fn test_trailing_comment_on_data_line() {
    let doc = parse("users[1]{id,name,role}:\n  1,Alice,admin # trusted user\n").unwrap();
    let row = &doc.table("users").unwrap()[0];
    assert_eq!(row.get("role").and_then(|v| v.as_str()), Some("admin"));
}

#[test]
fn test_custom_comment_char() {
    let options = ParseOptions::new().with_comment_char(';');
    let doc = parse_with_options("users[1]{id,note}:\n  1,a#b ; comment\n", options).unwrap();
    let row = &doc.table("users").unwrap()[0];
    // '#' is just data now
    assert_eq!(row.get("note").and_then(|v| v.as_str()), Some("a#b"));
}

#[test]
fn test_row_count_mismatch_is_fatal() {
    let input = "users[2]{id}:\n  1\n  2\n  3\n";
    match parse(input) {
        Err(Error::RowCountMismatch {
            table,
            declared,
            actual,
            ..
        }) => {
            assert_eq!(table, "users");
            assert_eq!(declared, 2);
            assert_eq!(actual, 3);
        }
        other => panic!("expected RowCountMismatch, got {:?}", other),
    }
}

#[test]
fn test_lenient_counts() {
    let options = ParseOptions::new().with_strict_counts(false);
    let doc = parse_with_options("users[2]{id}:\n  1\n  2\n  3\n", options).unwrap();
    assert_eq!(doc.table("users").unwrap().len(), 3);
}

#[test]
fn test_row_count_checked_at_next_schema_line() {
    let input = "a[1]{x}:\n  1\n  2\nb[1]{y}:\n  1\n";
    let err = parse(input).unwrap_err();
    assert_eq!(err.line(), Some(4));
    assert!(matches!(err, Error::RowCountMismatch { .. }));
}

#[test]
fn test_field_count_mismatch_names_expected_fields() {
    let err = parse("users{id,name,role}:\n  1,Alice\n").unwrap_err();
    match &err {
        Error::FieldCountMismatch {
            line,
            expected,
            fields,
            actual,
        } => {
            assert_eq!(*line, 2);
            assert_eq!(*expected, 3);
            assert_eq!(fields, "id, name, role");
            assert_eq!(*actual, 2);
        }
        other => panic!("expected FieldCountMismatch, got {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("[id, name, role]"));
    assert!(message.contains("got 2 values"));
}

#[test]
fn test_malformed_schema_quotes_the_line() {
    let err = parse("users[two]{id}:\n").unwrap_err();
    assert_eq!(err, Error::malformed_schema(1, "users[two]{id}:"));
    assert!(err.to_string().contains("users[two]{id}:"));
}

#[test]
fn test_data_before_schema_reports_real_line() {
    // Comments and blanks do not count as a schema
    let err = parse("# header\n\n1,Alice\n").unwrap_err();
    assert_eq!(err, Error::DataBeforeSchema { line: 3 });
}

#[test]
fn test_nested_tree_navigation() {
    let doc = parse(CATALOG).unwrap();
    let endpoints = doc.get("endpoints").unwrap().as_branch().unwrap();
    let names: Vec<&String> = endpoints.keys().collect();
    assert_eq!(names, vec!["student", "teacher"]);
    assert!(endpoints.get("student").unwrap().is_table());
}

#[test]
fn test_flat_mode_keeps_dotted_keys() {
    let options = ParseOptions::new().with_nested_paths(false);
    let doc = parse_with_options(CATALOG, options).unwrap();
    assert!(doc.get("endpoints").is_none());
    assert!(doc.get("endpoints.student").unwrap().is_table());
    assert!(doc.get("endpoints.teacher").unwrap().is_table());
}

#[test]
fn test_path_conflict_fails_fast() {
    let input = "a.b[1]{x}:\n  1\na.b.c[1]{y}:\n  2\n";
    let err = parse(input).unwrap_err();
    assert_eq!(err, Error::path_conflict("a.b"));

    // Flat mode has no tree, so the same names coexist
    let options = ParseOptions::new().with_nested_paths(false);
    let doc = parse_with_options(input, options).unwrap();
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_coercion_disabled_keeps_raw_strings() {
    let options = ParseOptions::new().with_coerce_values(false);
    let doc = parse_with_options("t[1]{a,b,c,d}:\n  1,true,null,2.5\n", options).unwrap();
    let row = &doc.table("t").unwrap()[0];
    for field in ["a", "b", "c", "d"] {
        assert!(row.get(field).unwrap().is_string(), "{field} should be raw");
    }
    assert_eq!(row.get("c").and_then(|v| v.as_str()), Some("null"));
}

#[test]
fn test_duplicate_table_name_last_block_wins() {
    let doc = parse("t[1]{a}:\n  1\nt[1]{a}:\n  2\n").unwrap();
    let table = doc.table("t").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].get("a").and_then(|v| v.as_i64()), Some(2));
}

#[test]
fn test_empty_table_is_kept() {
    let doc = parse("empty{id}:\nusers[1]{id}:\n  1\n").unwrap();
    assert_eq!(doc.table("empty").unwrap().len(), 0);
    assert_eq!(doc.table("users").unwrap().len(), 1);
}

#[test]
fn test_declared_count_checked_against_empty_table() {
    let err = parse("empty[2]{id}:\n").unwrap_err();
    assert!(matches!(
        err,
        Error::RowCountMismatch {
            declared: 2,
            actual: 0,
            ..
        }
    ));
}

#[test]
fn test_trailing_comma_yields_null_cell() {
    let doc = parse("t[1]{a,b}:\n  1,\n").unwrap();
    let row = &doc.table("t").unwrap()[0];
    assert_eq!(row.get("a").and_then(|v| v.as_i64()), Some(1));
    assert_eq!(row.get("b"), Some(&Value::Null));
}

#[test]
fn test_big_integer_cells() {
    let doc = parse("ids[1]{id}:\n  123456789012345678901234567890\n").unwrap();
    let row = &doc.table("ids").unwrap()[0];
    match row.get("id") {
        Some(Value::Number(Number::Big(b))) => {
            assert_eq!(b.to_string(), "123456789012345678901234567890");
        }
        other => panic!("expected big integer, got {:?}", other),
    }
}

#[test]
fn test_empty_document_parses_to_empty_tree() {
    let doc = parse("").unwrap();
    assert!(doc.is_empty());
    let doc = parse("# only comments\n\n").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_serialize_document_flattens_dotted_names() {
    let doc = parse(CATALOG).unwrap();
    let toon = serialize_document(&doc);
    assert!(toon.contains("endpoints.student[2]{id,apiType,name}:"));
    assert!(toon.contains("endpoints.teacher[1]{id,apiType,name}:"));

    // And the flattened form parses back to the same tree
    let doc_back = parse(&toon).unwrap();
    assert_eq!(doc, doc_back);
}

#[test]
fn test_serialize_tables_multi_block() {
    let users = vec![row! { "id" => 1, "name" => "Alice" }];
    let products = vec![row! { "id" => 101, "name" => "Laptop" }];

    let toon = serialize_tables([("users", &users[..]), ("products", &products[..])]);
    let blocks: Vec<&str> = toon.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].starts_with("users[1]"));
    assert!(blocks[1].starts_with("products[1]"));
}

#[test]
fn test_json_bridge_to_json() {
    let doc = parse(CATALOG).unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["users"][0]["name"], "Alice");
    assert_eq!(json["users"][0]["id"], 1);
    assert_eq!(json["users"][2]["active"], false);
    assert_eq!(json["endpoints"]["teacher"][0]["id"], "teacher-position");
    assert_eq!(json["endpoints"]["teacher"][0]["apiType"], 22);
}

#[test]
fn test_json_bridge_from_json() {
    let json = r#"[
        {"id": 1, "name": "Alice", "score": null},
        {"id": 2, "name": "Bob", "score": 9.5}
    ]"#;
    let rows: Vec<Row> = serde_json::from_str(json).unwrap();
    let toon = serialize_table(&rows, "players");

    let doc = parse(&toon).unwrap();
    let players = doc.table("players").unwrap();
    assert_eq!(players[0].get("score"), Some(&Value::Null));
    assert_eq!(players[1].get("score").and_then(|v| v.as_f64()), Some(9.5));
}
