use std::collections::BTreeMap;
use std::fmt;

use crate::dump::{self, FormatOptions};

/// An ordered sequence of values. Insertion order is preserved and
/// duplicates are allowed.
pub type Array = Vec<Value>;

/// A mapping from string keys to values, ordered by lexicographic byte
/// order of the key. Keys are unique.
pub type Object = BTreeMap<String, Value>;

/// A dynamically-typed JSON value.
///
/// Every value holds exactly one of the six JSON kinds. The heap-backed
/// kinds (string, array, object) exclusively own their payload; cloning a
/// value deep-copies it and dropping a value releases it.
///
/// ```
/// use jsonval::{json, Value};
///
/// let value = json!({"a": 1.0, "b": [true, "x"]});
/// assert!(value.is::<jsonval::Object>());
/// assert_eq!(value["a"].cast::<f64>().unwrap(), 1.0);
/// assert_eq!(value["b"][1].cast::<String>().unwrap(), "x");
/// assert!(value["c"].is::<jsonval::Null>());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. All numeric types are represented uniformly as a 64-bit
    /// float; there is no separate integer kind and integers beyond 2^53
    /// are not guaranteed to round-trip exactly.
    Number(f64),
    /// An owned UTF-8 string.
    String(String),
    /// An ordered sequence of values.
    Array(Array),
    /// A key-ordered mapping from strings to values.
    Object(Object),
}

/// The active-variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The absence of a value.
    Null,
    /// A boolean.
    Bool,
    /// A number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

impl Kind {
    /// A stable, human-readable name for this kind.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl Value {
    /// Returns the discriminant of the currently active variant.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// A stable, human-readable name for the active variant.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean payload if this value is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric payload if this value is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string payload if this value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the element sequence if this value is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the key-ordered entries if this value is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Takes the value out, leaving `Null` in its place.
    ///
    /// ```
    /// use jsonval::Value;
    ///
    /// let mut a = Value::from("text");
    /// let b = a.take();
    /// assert!(a.is_null());
    /// assert_eq!(b.as_str(), Some("text"));
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl fmt::Display for Value {
    /// Renders the minified textual form of the value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dump::dump_to(f, self, &FormatOptions::minified())
    }
}
