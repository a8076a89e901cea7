//! # jsonval
//!
//! A dynamically-typed JSON value representation with a statically-checked
//! access layer.
//!
//! [`Value`] is a closed six-way sum type (null, boolean, number, string,
//! array, object). The generic accessors [`Value::is`], [`Value::cast`] and
//! [`Value::cast_or`] are gated by the [`JsonType`] bound, so requesting a
//! type that is not legal JSON fails at compile time, while kind mismatches
//! against the stored data surface as [`TypeError`] at run time.
//!
//! ```
//! use jsonval::{json, parse, Null};
//!
//! let value = parse(r#"{"name": "OAuth Dancer", "verified": false, "ids": [1, 2]}"#).unwrap();
//! assert_eq!(value["name"].cast::<String>().unwrap(), "OAuth Dancer");
//! assert!(!value["verified"].cast::<bool>().unwrap());
//! assert_eq!(value["ids"].cast::<Vec<u32>>().unwrap(), vec![1, 2]);
//! assert!(value["missing"].is::<Null>());
//! assert_eq!(value["missing"].cast_or(String::from("fallback")), "fallback");
//!
//! let literal = json!({"ids": [1, 2], "name": "OAuth Dancer", "verified": false});
//! assert_eq!(value, literal);
//! ```

mod dump;
mod error;
mod from;
mod impls;
mod index;
mod macros;
mod parse;
mod typed;
mod value;

pub use dump::{dump, dump_to, dump_with, FormatOptions};
pub use error::{ParseError, ParseErrorKind, TypeError};
pub use index::ValueIndex;
pub use parse::{parse, parse_reader};
pub use typed::{JsonType, Null, ToJson};
pub use value::{Array, Kind, Object, Value};
