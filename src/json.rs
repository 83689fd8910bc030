//! Ordered JSON tree and textual writer.
//!
//! The export schema uses repeated keys — many `element` entries under one
//! parent, many `page` entries under the document — so the assembled tree
//! is an insertion-ordered multimap rather than a standard JSON object.
//! Repeated names are valid JSON grammar (RFC 8259 does not require
//! uniqueness), and [`write`] emits them verbatim in insertion order.
//!
//! Consumers that need unique names can normalize through [`Node::to_strict`],
//! which collapses repeated keys into arrays as a [`serde_json::Value`].

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// A scalar or subtree value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating-point scalar; non-finite values write as `null`
    Float(f64),
    /// String scalar
    Str(String),
    /// Nested node
    Node(Node),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Int(v.into())
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Node> for Value {
    fn from(v: Node) -> Self {
        Value::Node(v)
    }
}

/// An insertion-ordered JSON node that permits repeated keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    entries: Vec<(String, Value)>,
}

impl Node {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/value entry. Existing entries with the same key are
    /// kept; the new entry lands after them.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Append a child node under `key`.
    pub fn add_child(&mut self, key: impl Into<String>, child: Node) {
        self.entries.push((key.into(), Value::Node(child)));
    }

    /// First value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// All child nodes stored under `key`, in insertion order.
    pub fn children<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Node> {
        self.entries.iter().filter_map(move |(k, v)| match v {
            Value::Node(n) if k == key => Some(n),
            _ => None,
        })
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries, counting repeats.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the node has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalize to a standard JSON value: keys that repeat within one node
    /// become arrays of their values, singular keys stay scalar. Sibling
    /// order is preserved.
    pub fn to_strict(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (key, value) in &self.entries {
            let strict = strict_value(value);
            match map.entry(key.clone()) {
                serde_json::map::Entry::Vacant(slot) => {
                    slot.insert(strict);
                }
                serde_json::map::Entry::Occupied(mut slot) => match slot.get_mut() {
                    serde_json::Value::Array(arr) => arr.push(strict),
                    existing => {
                        let first = existing.take();
                        *existing = serde_json::Value::Array(vec![first, strict]);
                    }
                },
            }
        }
        serde_json::Value::Object(map)
    }
}

fn strict_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::Node(n) => n.to_strict(),
    }
}

/// Serialize a node tree to JSON text.
///
/// Output is deterministic: sibling entries appear in insertion order and
/// scalar formatting has one spelling per value.
pub fn write(node: &Node, format: JsonFormat) -> String {
    let mut out = String::new();
    match format {
        JsonFormat::Pretty => write_node_pretty(node, 0, &mut out),
        JsonFormat::Compact => write_node_compact(node, &mut out),
    }
    out
}

fn write_node_pretty(node: &Node, indent: usize, out: &mut String) {
    if node.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    let inner = indent + 1;
    for (i, (key, value)) in node.entries.iter().enumerate() {
        push_indent(inner, out);
        write_string(key, out);
        out.push_str(": ");
        match value {
            Value::Node(child) => write_node_pretty(child, inner, out),
            scalar => write_scalar(scalar, out),
        }
        if i + 1 < node.entries.len() {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(indent, out);
    out.push('}');
}

fn write_node_compact(node: &Node, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in node.entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(key, out);
        out.push(':');
        match value {
            Value::Node(child) => write_node_compact(child, out),
            scalar => write_scalar(scalar, out),
        }
    }
    out.push('}');
}

fn push_indent(indent: usize, out: &mut String) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}

fn write_scalar(value: &Value, out: &mut String) {
    match value {
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Float(f) => write_float(*f, out),
        Value::Str(s) => write_string(s, out),
        Value::Node(_) => unreachable!("nodes are written structurally"),
    }
}

fn write_float(f: f64, out: &mut String) {
    if !f.is_finite() {
        out.push_str("null");
    } else if f == f.trunc() && f.abs() < 1e15 {
        out.push_str(&format!("{}", f as i64));
    } else {
        out.push_str(&format!("{f}"));
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
