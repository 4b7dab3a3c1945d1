//! JavaScript language values.
//!
//! This module provides the `JsValue` enum that represents every
//! ECMAScript language value the abstract operations consume and produce.

use std::fmt;

use crate::object::JsObject;
use crate::symbol::SymbolValue;

/// The ECMAScript language type of a value, as returned by `Type(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// The Undefined type
    Undefined,
    /// The Null type
    Null,
    /// The Boolean type
    Boolean,
    /// The String type
    String,
    /// The Symbol type
    Symbol,
    /// The Number type
    Number,
    /// The Object type (callable or not)
    Object,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Undefined => "Undefined",
            ValueType::Null => "Null",
            ValueType::Boolean => "Boolean",
            ValueType::String => "String",
            ValueType::Symbol => "Symbol",
            ValueType::Number => "Number",
            ValueType::Object => "Object",
        };
        f.write_str(name)
    }
}

/// JavaScript value representation
///
/// Primitives are stored inline; objects are shared handles compared by
/// identity.
///
/// `PartialEq` follows SameValue: `NaN` equals `NaN`, `+0` and `-0` differ,
/// and objects are equal only to themselves.
///
/// # Examples
///
/// ```
/// use core_types::{JsValue, ValueType};
///
/// let number = JsValue::number(42.0);
/// assert_eq!(number.value_type(), ValueType::Number);
/// assert_eq!(JsValue::number(f64::NAN), JsValue::number(f64::NAN));
/// assert_ne!(JsValue::number(0.0), JsValue::number(-0.0));
/// ```
#[derive(Debug, Clone, Default)]
pub enum JsValue {
    /// undefined
    #[default]
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// String value
    String(String),
    /// Symbol value
    Symbol(SymbolValue),
    /// Object (including function objects)
    Object(JsObject),
}

impl JsValue {
    /// Create undefined value
    pub fn undefined() -> Self {
        JsValue::Undefined
    }

    /// Create null value
    pub fn null() -> Self {
        JsValue::Null
    }

    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        JsValue::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        JsValue::Number(v)
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        JsValue::String(s.into())
    }

    /// Create a symbol value
    pub fn symbol(sym: SymbolValue) -> Self {
        JsValue::Symbol(sym)
    }

    /// `Type(x)`
    pub fn value_type(&self) -> ValueType {
        match self {
            JsValue::Undefined => ValueType::Undefined,
            JsValue::Null => ValueType::Null,
            JsValue::Boolean(_) => ValueType::Boolean,
            JsValue::Number(_) => ValueType::Number,
            JsValue::String(_) => ValueType::String,
            JsValue::Symbol(_) => ValueType::Symbol,
            JsValue::Object(_) => ValueType::Object,
        }
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, JsValue::Null)
    }

    /// Check if value is undefined or null
    pub fn is_nullish(&self) -> bool {
        matches!(self, JsValue::Undefined | JsValue::Null)
    }

    /// Check if value is an object
    pub fn is_object(&self) -> bool {
        matches!(self, JsValue::Object(_))
    }

    /// Get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            JsValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            JsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as symbol
    pub fn as_symbol(&self) -> Option<&SymbolValue> {
        match self {
            JsValue::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Get as object handle
    pub fn as_object(&self) -> Option<&JsObject> {
        match self {
            JsValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// SameValue(x, y)
    pub fn same_value(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Number(a), JsValue::Number(b)) => {
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b && a.is_sign_negative() == b.is_sign_negative()
                }
            }
            _ => self.same_value_non_number(other),
        }
    }

    /// SameValueZero(x, y)
    ///
    /// Like SameValue but treats `+0` and `-0` as equal.
    pub fn same_value_zero(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Number(a), JsValue::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            _ => self.same_value_non_number(other),
        }
    }

    fn same_value_non_number(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_value(other)
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(s.to_string())
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(s)
    }
}

impl From<SymbolValue> for JsValue {
    fn from(sym: SymbolValue) -> Self {
        JsValue::Symbol(sym)
    }
}

impl From<JsObject> for JsValue {
    fn from(obj: JsObject) -> Self {
        JsValue::Object(obj)
    }
}

/// Number::toString(x) for radix 10.
///
/// Shortest round-tripping digits in the ECMAScript layout: `NaN`,
/// `Infinity`, `-0` prints as `0`, exponents switch in at 1e21 and 1e-7.
///
/// ```
/// use core_types::number_to_string;
///
/// assert_eq!(number_to_string(42.0), "42");
/// assert_eq!(number_to_string(-0.0), "0");
/// assert_eq!(number_to_string(0.1), "0.1");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mut buffer = ryu_js::Buffer::new();
    buffer.format_finite(n).to_string()
}
