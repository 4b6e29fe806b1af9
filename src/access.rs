//! Path accessor module
//!
//! Reads and writes values inside nested JSON data using a dotted/bracketed
//! path such as `a[0].b` or `.user.name`.
//! Only existing keys are traversed; intermediate structure is never created.

use serde_json::{Map, Value};

/// Tokenized path into nested data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Tokenize a path string
    ///
    /// `[k]` is rewritten as `.k`, one leading `.` is stripped, then the
    /// result is split on `.`.
    pub fn parse(path: &str) -> Self {
        let rewritten = path.replace('[', ".").replace(']', "");
        let trimmed = rewritten.strip_prefix('.').unwrap_or(&rewritten);

        Self {
            segments: trimmed.split('.').map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Split off the first segment, returning it and the remaining path
    pub fn split_first(&self) -> Option<(&str, &[String])> {
        self.segments
            .split_first()
            .map(|(head, rest)| (head.as_str(), rest))
    }

    /// Resolve this path against `root`
    pub fn resolve<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        descend(root, &self.segments)
    }

    /// Resolve this path against a mapping, treating the map as the root node
    pub fn resolve_in_map<'v>(&self, root: &'v Map<String, Value>) -> Option<&'v Value> {
        let (head, rest) = self.split_first()?;
        descend(root.get(head)?, rest)
    }

    /// Overwrite the value at this path if every segment already exists
    pub fn assign<'v>(&self, root: &'v mut Value, value: Value) -> Option<&'v Value> {
        let (last, parents) = self.segments.split_last()?;

        let mut parent = root;
        for segment in parents {
            parent = child_mut(parent, segment)?;
        }

        let slot = child_mut(parent, last)?;
        *slot = value;
        Some(slot)
    }
}

/// Read the value at `path`, or `None` if any segment is missing
pub fn get<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    Path::parse(path).resolve(root)
}

/// Write `value` at `path` and return the written value
///
/// Nothing is written when the path does not already exist.
pub fn set<'v>(root: &'v mut Value, path: &str, value: Value) -> Option<&'v Value> {
    Path::parse(path).assign(root, value)
}

/// Walk `segments` down from `node`
pub(crate) fn descend<'v>(node: &'v Value, segments: &[String]) -> Option<&'v Value> {
    segments
        .iter()
        .try_fold(node, |current, segment| child(current, segment))
}

fn child<'v>(node: &'v Value, key: &str) -> Option<&'v Value> {
    match node {
        Value::Object(map) => map.get(key),
        Value::Array(items) => index(key).and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'v>(node: &'v mut Value, key: &str) -> Option<&'v mut Value> {
    match node {
        Value::Object(map) => map.get_mut(key),
        Value::Array(items) => index(key).and_then(|i| items.get_mut(i)),
        _ => None,
    }
}

/// Array position named by `key`, in canonical decimal form only
///
/// `"+1"` and `"01"` are not keys of a sequence.
fn index(key: &str) -> Option<usize> {
    key.parse::<usize>().ok().filter(|i| i.to_string() == key)
}
