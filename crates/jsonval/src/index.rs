//! Safe key/index lookup that yields null on any miss.

use std::ops;

use crate::value::Value;

static NULL: Value = Value::Null;

mod private {
    pub trait Sealed {}

    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: Sealed + ?Sized> Sealed for &T {}
}

/// A type usable to look up an element of a [`Value`]: a string key for
/// objects or a `usize` position for arrays.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value>;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Array(elements) => elements.get(*self),
            _ => None,
        }
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Object(entries) => entries.get(self),
            _ => None,
        }
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(value)
    }
}

impl<T: ValueIndex + ?Sized> ValueIndex for &T {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        (**self).index_into(value)
    }
}

impl Value {
    /// Looks up an array element or object entry, returning `None` when
    /// the receiver has the wrong kind, the index is out of bounds, or
    /// the key is absent. A read-only probe; the receiver is never
    /// mutated.
    #[must_use]
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }
}

impl<I: ValueIndex> ops::Index<I> for Value {
    type Output = Value;

    /// Like [`Value::get`], but a miss yields a null value instead of a
    /// panic.
    fn index(&self, index: I) -> &Value {
        index.index_into(self).unwrap_or(&NULL)
    }
}
