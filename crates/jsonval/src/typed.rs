//! The compile-time eligibility predicate and the type-checked access
//! layer built on it.
//!
//! [`JsonType`] is the closed set of host types that may be stored into
//! or recovered from a [`Value`]. [`ToJson`] is the open extension hook
//! by which arbitrary user types opt into value construction.

use std::collections::BTreeMap;

use crate::error::TypeError;
use crate::value::{Kind, Value};

mod sealed {
    use std::collections::BTreeMap;

    pub trait Sealed {}

    impl Sealed for super::Null {}
    impl Sealed for bool {}
    impl Sealed for String {}
    impl Sealed for super::Value {}
    impl<T: Sealed> Sealed for Vec<T> {}
    impl<T: Sealed> Sealed for BTreeMap<String, T> {}
}

/// The explicit null marker, usable wherever a concrete type argument is
/// required: `value.is::<Null>()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null;

/// A host type that is legally representable as JSON.
///
/// The set of implementors is closed: booleans, all native numeric types,
/// [`String`], [`Null`], [`Value`] itself, and `Vec`/`BTreeMap<String, _>`
/// of eligible element types. Passing any other type to
/// [`Value::is`]/[`Value::cast`] is a compile-time error:
///
/// ```compile_fail
/// struct NotJson;
///
/// let value = jsonval::Value::Null;
/// value.is::<NotJson>();
/// ```
pub trait JsonType: sealed::Sealed + Sized {
    /// Whether `value` currently holds this type, recursing into
    /// container elements.
    #[doc(hidden)]
    fn is_type(value: &Value) -> bool;

    /// Converts `value` into this type, failing with a [`TypeError`] on
    /// any kind mismatch.
    #[doc(hidden)]
    fn from_value(value: &Value) -> Result<Self, TypeError>;
}

impl JsonType for Null {
    fn is_type(value: &Value) -> bool {
        value.is_null()
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::Null => Ok(Null),
            other => Err(TypeError::new(Kind::Null, other.kind())),
        }
    }
}

impl JsonType for bool {
    fn is_type(value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(TypeError::new(Kind::Bool, other.kind())),
        }
    }
}

impl JsonType for String {
    fn is_type(value: &Value) -> bool {
        matches!(value, Value::String(_))
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(TypeError::new(Kind::String, other.kind())),
        }
    }
}

impl JsonType for Value {
    fn is_type(_value: &Value) -> bool {
        true
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        Ok(value.clone())
    }
}

macro_rules! impl_json_type_for_number {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl JsonType for $ty {
            fn is_type(value: &Value) -> bool {
                matches!(value, Value::Number(_))
            }

            // The stored f64 is narrowed or widened with `as` semantics:
            // conversions to integers saturate at the target bounds and
            // NaN becomes zero.
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss,
                clippy::cast_lossless
            )]
            fn from_value(value: &Value) -> Result<Self, TypeError> {
                match value {
                    Value::Number(n) => Ok(*n as $ty),
                    other => Err(TypeError::new(Kind::Number, other.kind())),
                }
            }
        }
    )*};
}

impl_json_type_for_number!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: JsonType> JsonType for Vec<T> {
    fn is_type(value: &Value) -> bool {
        match value {
            Value::Array(elements) => elements.iter().all(T::is_type),
            _ => false,
        }
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::Array(elements) => elements.iter().map(T::from_value).collect(),
            other => Err(TypeError::new(Kind::Array, other.kind())),
        }
    }
}

impl<T: JsonType> JsonType for BTreeMap<String, T> {
    fn is_type(value: &Value) -> bool {
        match value {
            Value::Object(entries) => entries.values().all(T::is_type),
            _ => false,
        }
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::Object(entries) => entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), T::from_value(value)?)))
                .collect(),
            other => Err(TypeError::new(Kind::Object, other.kind())),
        }
    }
}

impl Value {
    /// Whether this value currently holds `T`.
    ///
    /// Scalar types check the active variant. `Value` itself is always
    /// true. Container types first check the variant, then recursively
    /// check every element; an empty array or object holds any element
    /// type vacuously.
    #[must_use]
    pub fn is<T: JsonType>(&self) -> bool {
        T::is_type(self)
    }

    /// Converts this value into `T`, failing with a [`TypeError`] if the
    /// active variant, or any nested element's variant, does not match.
    ///
    /// Strings are returned as owned copies, numbers are narrowed or
    /// widened from the stored 64-bit float, and containers are rebuilt
    /// recursively. A failed cast leaves the value unchanged.
    pub fn cast<T: JsonType>(&self) -> Result<T, TypeError> {
        T::from_value(self)
    }

    /// Converts this value into `T`, substituting `default` on any
    /// mismatch instead of failing.
    #[must_use]
    pub fn cast_or<T: JsonType>(&self, default: T) -> T {
        T::from_value(self).unwrap_or(default)
    }
}

/// The extension hook: a user type participates in value construction by
/// producing its own [`Value`] tree.
///
/// ```
/// use jsonval::{json, ToJson, Value};
///
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl ToJson for Point {
///     fn to_json(&self) -> Value {
///         json!({"x": self.x, "y": self.y})
///     }
/// }
///
/// let value = Point { x: 1.0, y: 2.0 }.to_json();
/// assert_eq!(value["y"].cast::<f64>().unwrap(), 2.0);
/// ```
pub trait ToJson {
    fn to_json(&self) -> Value;
}

impl ToJson for Value {
    fn to_json(&self) -> Value {
        self.clone()
    }
}

impl ToJson for Null {
    fn to_json(&self) -> Value {
        Value::Null
    }
}

impl ToJson for bool {
    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToJson for str {
    fn to_json(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToJson for String {
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

macro_rules! impl_to_json_for_number {
    ($($ty:ty),* $(,)?) => {$(
        impl ToJson for $ty {
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn to_json(&self) -> Value {
                Value::Number(*self as f64)
            }
        }
    )*};
}

impl_to_json_for_number!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: ToJson + ?Sized> ToJson for &T {
    fn to_json(&self) -> Value {
        (**self).to_json()
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: ToJson> ToJson for BTreeMap<String, T> {
    fn to_json(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> Value {
        match self {
            Some(inner) => inner.to_json(),
            None => Value::Null,
        }
    }
}
