//! Self-contained JSON codec.
//!
//! Zero-dependency recursive-descent parsing and minified serialization,
//! built around an insertion-ordered value model. This crate is the wire
//! boundary of the dinetab service: request bodies come in through
//! [`parse_object`], response payloads go out through [`to_string`].
//!
//! # Example
//!
//! ```
//! use json_codec::{parse_object, to_string, JsonValue, Serialize};
//!
//! let payload = parse_object(r#"{"table":"7","items":[{"code":"BEV-01"}]}"#).unwrap();
//! assert_eq!(payload.get("table").and_then(|v| v.as_str()), Some("7"));
//!
//! let reply = payload.get("items").cloned().unwrap();
//! assert_eq!(to_string(&reply), r#"[{"code":"BEV-01"}]"#);
//! ```
//!
//! Every entry point is a pure function over its input; the codec holds no
//! state between calls, so concurrent use needs no synchronization. There
//! is no recursion-depth guard: nesting costs call stack, which matters
//! for untrusted input.

pub mod de;
pub mod error;
pub mod macros;
mod object;
mod parser;
pub mod ser;
mod serializer;
mod value;

pub use de::{Deserialize, from_str};
pub use error::{JsonError, Result};
pub use object::JsonObject;
pub use parser::{parse, parse_object};
pub use ser::{Serialize, to_string};
pub use value::{JsonValue, Number};
