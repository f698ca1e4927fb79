//! Core value model for [`crate::series::Series`].
//!
//! A series is kind-homogeneous: every element shares one [`ElementKind`],
//! established at ingestion time. Elements are stored as [`Value`], a closed
//! tagged union over the supported kinds.

use std::fmt;

/// Logical kind of the elements stored in a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Int64 => "int64",
            ElementKind::Float64 => "float64",
            ElementKind::Bool => "bool",
            ElementKind::Utf8 => "utf8",
        };
        f.write_str(name)
    }
}

/// A single typed element value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> ElementKind {
        match self {
            Value::Int64(_) => ElementKind::Int64,
            Value::Float64(_) => ElementKind::Float64,
            Value::Bool(_) => ElementKind::Bool,
            Value::Utf8(_) => ElementKind::Utf8,
        }
    }

    /// Narrow to `i64`. Returns `None` if this value holds a different kind.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Narrow to `f64`. Returns `None` if this value holds a different kind.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Narrow to `bool`. Returns `None` if this value holds a different kind.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Narrow to `&str`. Returns `None` if this value holds a different kind.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_string())
    }
}

/// A concrete Rust type that can be ingested into a series.
///
/// The kind tag is known statically, so typed ingestion via
/// [`crate::series::Series::set_data`] establishes the series kind even for an
/// empty input sequence.
pub trait Element: Into<Value> {
    /// Kind tag shared by every value of this type.
    const KIND: ElementKind;
}

impl Element for i64 {
    const KIND: ElementKind = ElementKind::Int64;
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Float64;
}

impl Element for bool {
    const KIND: ElementKind = ElementKind::Bool;
}

impl Element for String {
    const KIND: ElementKind = ElementKind::Utf8;
}

impl Element for &str {
    const KIND: ElementKind = ElementKind::Utf8;
}
