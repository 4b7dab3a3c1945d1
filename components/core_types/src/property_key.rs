//! Property keys: the String-or-Symbol values objects are keyed by.

use std::fmt;

use crate::symbol::{SymbolValue, WellKnownSymbol};
use crate::value::JsValue;

/// A property key, either a String or a Symbol.
///
/// Every other language value has to go through ToPropertyKey first;
/// `TryFrom<&JsValue>` only accepts values that already are keys.
///
/// # Examples
///
/// ```
/// use core_types::{JsValue, PropertyKey};
///
/// assert!(PropertyKey::try_from(&JsValue::string("length")).is_ok());
/// assert!(PropertyKey::try_from(&JsValue::number(0.0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// String-keyed property
    String(String),
    /// Symbol-keyed property
    Symbol(SymbolValue),
}

impl PropertyKey {
    /// The key as a language value.
    pub fn to_value(&self) -> JsValue {
        match self {
            PropertyKey::String(s) => JsValue::String(s.clone()),
            PropertyKey::Symbol(sym) => JsValue::Symbol(sym.clone()),
        }
    }

    /// Returns the string if this is a String key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }

    /// The array index this key names: a canonical numeric string below
    /// 2^32 - 1. `"01"` and `"4294967295"` are ordinary keys.
    pub fn as_array_index(&self) -> Option<u32> {
        let s = self.as_str()?;
        let index: u32 = s.parse().ok()?;
        (index != u32::MAX && index.to_string() == s).then_some(index)
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::String(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::String(s)
    }
}

impl From<SymbolValue> for PropertyKey {
    fn from(sym: SymbolValue) -> Self {
        PropertyKey::Symbol(sym)
    }
}

impl From<WellKnownSymbol> for PropertyKey {
    fn from(wk: WellKnownSymbol) -> Self {
        PropertyKey::Symbol(wk.symbol())
    }
}

impl TryFrom<&JsValue> for PropertyKey {
    type Error = ();

    fn try_from(value: &JsValue) -> Result<Self, Self::Error> {
        match value {
            JsValue::String(s) => Ok(PropertyKey::String(s.clone())),
            JsValue::Symbol(sym) => Ok(PropertyKey::Symbol(sym.clone())),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => f.write_str(s),
            PropertyKey::Symbol(sym) => write!(f, "[{}]", sym.descriptive_string()),
        }
    }
}
