//! Constructors from native host types.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::typed::Null;
use crate::value::Value;

impl From<Null> for Value {
    fn from(_: Null) -> Self {
        Value::Null
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Value {
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn from(n: $ty) -> Self {
                Value::Number(n as f64)
            }
        }
    )*};
}

impl_from_number!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::String(s.into_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Value::Array(elements.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(elements: &[T]) -> Self {
        Value::Array(elements.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Value::Object(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;

    #[test]
    fn scalars() {
        assert_eq!(Value::from(Null), Value::Null);
        assert_eq!(Value::from(()), Value::Null);
        assert_eq!(Value::from(false), Value::Bool(false));
        assert_eq!(Value::from(2_u8), Value::Number(2.0));
        assert_eq!(Value::from(-7_i64), Value::Number(-7.0));
        assert_eq!(Value::from(1.25_f32), Value::Number(1.25));
        assert_eq!(Value::from("abc"), Value::String("abc".into()));
        assert_eq!(Value::from(String::from("abc")), Value::String("abc".into()));
        assert_eq!(
            Value::from(Cow::Borrowed("abc")),
            Value::String("abc".into())
        );
        assert_eq!(
            Value::from(Cow::<str>::Owned(String::from("abc"))),
            Value::String("abc".into())
        );
    }

    #[test]
    fn containers_convert_deeply() {
        let value = Value::from(vec![vec![1, 2], vec![3]]);
        assert_eq!(value, json!([[1, 2], [3]]));

        let slice: &[&str] = &["x", "y"];
        assert_eq!(Value::from(slice), json!(["x", "y"]));

        let mut entries = BTreeMap::new();
        entries.insert("a".to_owned(), vec![true]);
        assert_eq!(Value::from(entries), json!({"a": [true]}));
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), json!("x"));
    }

    #[test]
    fn collect_into_array_and_object() {
        let array: Value = (1..=3).collect();
        assert_eq!(array, json!([1, 2, 3]));

        let object: Value = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(object, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn duplicate_keys_collapse() {
        let object: Value = [("k", 1), ("k", 2)].into_iter().collect();
        assert_eq!(object, json!({"k": 2}));
    }
}
