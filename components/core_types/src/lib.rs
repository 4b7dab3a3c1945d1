//! Core JavaScript value types and error handling.
//!
//! This crate is the host object model the abstract operations are written
//! against: language values, objects with identity, property keys, symbols,
//! and the recoverable error type.
//!
//! # Overview
//!
//! - [`JsValue`] - ECMAScript language values
//! - [`JsObject`] - Shared object handle compared by identity
//! - [`WeakObject`] - Non-owning object handle
//! - [`PropertyKey`] - String or Symbol property key
//! - [`SymbolValue`] / [`WellKnownSymbol`] - Symbols and the well-known table
//! - [`JsError`] / [`ErrorKind`] - Recoverable, typed JavaScript errors
//!
//! # Examples
//!
//! ```
//! use core_types::{JsError, JsObject, JsValue, ValueType};
//!
//! let obj = JsObject::ordinary(None);
//! obj.set("answer", JsValue::number(42.0));
//! assert_eq!(obj.get(&"answer".into()), JsValue::number(42.0));
//! assert_eq!(JsValue::from(obj).value_type(), ValueType::Object);
//!
//! let error = JsError::type_error("undefined is not a function");
//! assert!(error.is_type_error());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod object;
mod property_key;
mod symbol;
mod value;

pub use error::{ErrorKind, JsError, JsResult};
pub use object::{FunctionData, JsObject, NativeFunction, ObjectData, ObjectKind, Property, WeakObject};
pub use property_key::PropertyKey;
pub use symbol::{SymbolValue, WellKnownSymbol};
pub use value::{number_to_string, JsValue, ValueType};
