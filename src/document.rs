//! Parsed document tree.
//!
//! A parse produces a [`Document`]: an ordered map from path segments to
//! [`Node`]s, where a node is either a leaf [`Table`] or a branch holding
//! further nodes. Dotted table names (`endpoints.student`) fold into
//! branches; with nesting disabled, the full dotted names stay flat keys.
//!
//! The leaf/branch split is deliberate: a dotted path uniquely identifies
//! one table, and a name that would need to be both a table and a group
//! (`a.b` alongside `a.b.c`) is rejected with [`Error::PathConflict`]
//! instead of silently overwriting either.
//!
//! ## Examples
//!
//! ```rust
//! use toon_tables::parse;
//!
//! let doc = parse(
//!     "endpoints.student[1]{id,name}:\n  class-days,Days\n\
//!      endpoints.teacher[1]{id,name}:\n  position,Position\n",
//! )
//! .unwrap();
//!
//! let student = doc.table("endpoints.student").unwrap();
//! assert_eq!(student[0].get("id").and_then(|v| v.as_str()), Some("class-days"));
//!
//! // The tree is navigable node by node as well
//! let endpoints = doc.get("endpoints").unwrap().as_branch().unwrap();
//! assert_eq!(endpoints.len(), 2);
//! ```

use crate::map::Table;
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One node of the document tree: a table, or a group of named child nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A leaf: the rows of one table.
    Table(Table),
    /// An intermediate group created by a dotted-name segment.
    Branch(IndexMap<String, Node>),
}

impl Node {
    /// Returns `true` if the node is a table.
    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Node::Table(_))
    }

    /// Returns `true` if the node is a branch.
    #[inline]
    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    /// If the node is a table, returns its rows. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Node::Table(table) => Some(table),
            Node::Branch(_) => None,
        }
    }

    /// If the node is a branch, returns its children. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_branch(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Branch(children) => Some(children),
            Node::Table(_) => None,
        }
    }
}

/// The result of a parse: named tables, nested or flat.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: IndexMap<String, Node>,
}

impl Document {
    /// Builds a document from a flat `name -> rows` map.
    ///
    /// With `nested` enabled, dotted names fold into branch nodes; otherwise
    /// each full name becomes a flat key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathConflict`] when two dotted names require the
    /// same path segment to be both a table and a group.
    pub fn from_tables(tables: IndexMap<String, Table>, nested: bool) -> Result<Self> {
        let mut root = IndexMap::with_capacity(tables.len());
        if nested {
            for (name, table) in tables {
                insert_nested(&mut root, &name, table)?;
            }
        } else {
            for (name, table) in tables {
                root.insert(name, Node::Table(table));
            }
        }
        Ok(Document { root })
    }

    /// Returns the top-level node named `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.root.get(key)
    }

    /// Looks up a table by its (possibly dotted) name.
    ///
    /// Works in both modes: a flat document resolves the full name directly,
    /// a nested document walks the branches segment by segment.
    #[must_use]
    pub fn table(&self, path: &str) -> Option<&Table> {
        if let Some(Node::Table(table)) = self.root.get(path) {
            return Some(table);
        }
        let mut segments = path.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            node = node.as_branch()?.get(segment)?;
        }
        node.as_table()
    }

    /// Returns the number of top-level nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns `true` if the document holds no tables at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns an iterator over the top-level `(name, node)` pairs, in
    /// document order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.root.iter()
    }

    /// Flattens the tree back into `(dotted name, rows)` pairs, depth-first
    /// in document order. The inverse of the nested fold.
    #[must_use]
    pub fn tables(&self) -> Vec<(String, &Table)> {
        let mut out = Vec::new();
        collect_tables(None, &self.root, &mut out);
        out
    }
}

fn insert_nested(root: &mut IndexMap<String, Node>, name: &str, table: Table) -> Result<()> {
    let mut segments: Vec<&str> = name.split('.').collect();
    let leaf = segments.pop().unwrap_or(name);

    let mut walked = String::new();
    let mut current = root;
    for segment in segments {
        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(segment);

        let node = current
            .entry(segment.to_string())
            .or_insert_with(|| Node::Branch(IndexMap::new()));
        match node {
            Node::Branch(children) => current = children,
            Node::Table(_) => return Err(Error::path_conflict(&walked)),
        }
    }

    if matches!(current.get(leaf), Some(Node::Branch(_))) {
        return Err(Error::path_conflict(name));
    }
    current.insert(leaf.to_string(), Node::Table(table));
    Ok(())
}

fn collect_tables<'a>(
    prefix: Option<&str>,
    nodes: &'a IndexMap<String, Node>,
    out: &mut Vec<(String, &'a Table)>,
) {
    for (name, node) in nodes {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        match node {
            Node::Table(table) => out.push((path, table)),
            Node::Branch(children) => collect_tables(Some(&path), children, out),
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Table(table) => table.serialize(serializer),
            Node::Branch(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (name, node) in children {
                    map.serialize_entry(name, node)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.root.len()))?;
        for (name, node) in &self.root {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}
