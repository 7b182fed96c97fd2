//! Typed JSON-path probing over a parsed body.
//!
//! Every probe is result-or-absent: a missing segment, an index past the end,
//! or a value of the wrong JSON type all yield `None`.

use serde_json::Value;

/// One step of a path into a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seg<'a> {
    Key(&'a str),
    Index(usize),
}

/// Walk `path` from `root`.
pub fn value_at<'v>(root: &'v Value, path: &[Seg<'_>]) -> Option<&'v Value> {
    path.iter().try_fold(root, |node, seg| match seg {
        Seg::Key(k) => node.as_object()?.get(*k),
        Seg::Index(i) => node.as_array()?.get(*i),
    })
}

/// Any JSON number, as `f64`.
pub fn f64_at(root: &Value, path: &[Seg<'_>]) -> Option<f64> {
    value_at(root, path)?.as_f64()
}

/// A JSON integer that fits in `i64`. Fractional numbers (including `256.0`) are absent.
pub fn i64_at(root: &Value, path: &[Seg<'_>]) -> Option<i64> {
    value_at(root, path)?.as_i64()
}

pub fn str_at<'v>(root: &'v Value, path: &[Seg<'_>]) -> Option<&'v str> {
    value_at(root, path)?.as_str()
}

pub fn array_at<'v>(root: &'v Value, path: &[Seg<'_>]) -> Option<&'v [Value]> {
    value_at(root, path)?.as_array().map(Vec::as_slice)
}

/// Human-readable JSON type name, for log lines.
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
