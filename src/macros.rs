/// Builds a [`Row`](crate::Row) from `"field" => value` pairs.
///
/// Values go through [`Value::from`](crate::Value), so primitives, strings,
/// and already-built [`Value`](crate::Value)s all work. Field order is the
/// written order, which matters: the serializer derives a table's header
/// from its first row.
///
/// # Examples
///
/// ```rust
/// use toon_tables::{row, serialize_table};
///
/// let rows = vec![
///     row! { "id" => 1, "name" => "Alice", "active" => true },
///     row! { "id" => 2, "name" => "Bob", "active" => false },
/// ];
/// assert!(serialize_table(&rows, "users").starts_with("users[2]{id,name,active}:"));
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::new()
    };

    ($($field:literal => $value:expr),+ $(,)?) => {{
        let mut row = $crate::Row::new();
        $(
            row.insert($field.to_string(), $crate::Value::from($value));
        )+
        row
    }};
}
