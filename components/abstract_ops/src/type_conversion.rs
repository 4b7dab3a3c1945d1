//! ## [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The conversion operations are polymorphic: they accept any language value
//! and either produce the requested type or fail with a TypeError. Objects
//! are first reduced to primitives through `@@toPrimitive` or the
//! `valueOf`/`toString` pair.

use core_types::{
    number_to_string, JsError, JsObject, JsResult, JsValue, Property, PropertyKey, WellKnownSymbol,
};
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::intrinsics::{intrinsic, Intrinsic};
use crate::math::{abs, floor, min, sign};
use crate::meta::{assert, make_slots, set_slot};
use crate::objects::{call, get, get_method};

/// Slot holding the primitive of a Boolean wrapper object.
pub const BOOLEAN_DATA: &str = "[[BooleanData]]";
/// Slot holding the primitive of a Number wrapper object.
pub const NUMBER_DATA: &str = "[[NumberData]]";
/// Slot holding the primitive of a String wrapper object.
pub const STRING_DATA: &str = "[[StringData]]";
/// Slot holding the primitive of a Symbol wrapper object.
pub const SYMBOL_DATA: &str = "[[SymbolData]]";

/// 2^53 - 1, the largest length ToLength produces.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// The hint passed to ToPrimitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    /// `"string"`
    String,
    /// `"number"`
    Number,
}

impl PreferredType {
    fn hint(preferred_type: Option<PreferredType>) -> &'static str {
        match preferred_type {
            None => "default",
            Some(PreferredType::String) => "string",
            Some(PreferredType::Number) => "number",
        }
    }
}

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// Converts `input` to a non-Object value. An object's own
/// `@@toPrimitive` method wins; otherwise OrdinaryToPrimitive runs with the
/// hint defaulting to Number.
pub fn to_primitive(input: &JsValue, preferred_type: Option<PreferredType>) -> JsResult<JsValue> {
    let JsValue::Object(obj) = input else {
        return Ok(input.clone());
    };
    if let Some(exotic_to_prim) = get_method(input, WellKnownSymbol::ToPrimitive)? {
        let hint = JsValue::string(PreferredType::hint(preferred_type));
        let result = exotic_to_prim.call(input, &[hint])?;
        if result.is_object() {
            return Err(JsError::type_error("@@toPrimitive returned an object"));
        }
        return Ok(result);
    }
    ordinary_to_primitive(obj, preferred_type.unwrap_or(PreferredType::Number))
}

/// ### [7.1.1.1 OrdinaryToPrimitive ( O, hint )](https://tc39.es/ecma262/#sec-ordinarytoprimitive)
///
/// Tries `toString` then `valueOf` for a String hint, the reverse for
/// Number. The first callable method that returns a primitive wins.
pub fn ordinary_to_primitive(o: &JsObject, hint: PreferredType) -> JsResult<JsValue> {
    let method_names = match hint {
        PreferredType::String => ["toString", "valueOf"],
        PreferredType::Number => ["valueOf", "toString"],
    };
    let this = JsValue::Object(o.clone());
    for name in method_names {
        let method = get(o, name);
        if method.as_object().is_some_and(JsObject::is_callable) {
            let result = call(&method, &this, &[])?;
            if !result.is_object() {
                return Ok(result);
            }
        }
    }
    Err(JsError::type_error("Cannot convert object to primitive value"))
}

/// ### [7.1.2 ToBoolean ( argument )](https://tc39.es/ecma262/#sec-toboolean)
///
/// `false` for `undefined`, `null`, `false`, `+0`, `-0`, `NaN` and the empty
/// string; `true` for every other value, including every object and symbol.
pub fn to_boolean(argument: &JsValue) -> bool {
    match argument {
        JsValue::Undefined | JsValue::Null => false,
        JsValue::Boolean(b) => *b,
        JsValue::Number(n) => !(*n == 0.0 || n.is_nan()),
        JsValue::String(s) => !s.is_empty(),
        JsValue::Symbol(_) | JsValue::Object(_) => true,
    }
}

/// ### [7.1.4 ToNumber ( argument )](https://tc39.es/ecma262/#sec-tonumber)
pub fn to_number(argument: &JsValue) -> JsResult<f64> {
    match argument {
        JsValue::Undefined => Ok(f64::NAN),
        JsValue::Null => Ok(0.0),
        JsValue::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        JsValue::Number(n) => Ok(*n),
        JsValue::String(s) => Ok(string_to_number(s)),
        JsValue::Symbol(_) => Err(JsError::type_error("Cannot convert a Symbol value to a number")),
        JsValue::Object(_) => {
            let prim = to_primitive(argument, Some(PreferredType::Number))?;
            to_number(&prim)
        }
    }
}

/// WhiteSpace and LineTerminator code points.
fn is_trimmable(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// The digits are read exactly and rounded to a Number once.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return f64::NAN;
    }
    if let Ok(n) = u128::from_str_radix(digits, radix) {
        return n as f64;
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .and_then(|n| n.to_f64())
        .unwrap_or(f64::INFINITY)
}

/// StrUnsignedDecimalLiteral without the `Infinity` alternative.
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(at) => (&s[..at], Some(&s[at + 1..])),
        None => (s, None),
    };
    let mut parts = mantissa.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }
    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

/// ### [7.1.4.1.1 StringToNumber ( str )](https://tc39.es/ecma262/#sec-stringtonumber)
///
/// ```
/// use abstract_ops::type_conversion::string_to_number;
///
/// assert_eq!(string_to_number("  42\n"), 42.0);
/// assert_eq!(string_to_number(""), 0.0);
/// assert_eq!(string_to_number("0x1F"), 31.0);
/// assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
/// assert!(string_to_number("12px").is_nan());
/// ```
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_trimmable);
    if s.is_empty() {
        return 0.0;
    }
    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|p| s.strip_prefix(p)) {
            return parse_radix(digits, radix);
        }
    }
    let (negative, unsigned) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else if is_decimal_literal(unsigned) {
        unsigned.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        return f64::NAN;
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// The integer part of a Number: NaN becomes +0, zeros and infinities are
/// preserved, everything else is truncated towards zero.
pub fn integer_part(number: f64) -> f64 {
    if number.is_nan() {
        return 0.0;
    }
    if number == 0.0 || number.is_infinite() {
        return number;
    }
    sign(number) * floor(abs(number))
}

/// ### [ToInteger ( argument )](https://262.ecma-international.org/8.0/#sec-tointeger)
pub fn to_integer(argument: &JsValue) -> JsResult<f64> {
    Ok(integer_part(to_number(argument)?))
}

/// ### [7.1.20 ToLength ( argument )](https://tc39.es/ecma262/#sec-tolength)
///
/// Clamps to the range `+0..=2^53-1`.
pub fn to_length(argument: &JsValue) -> JsResult<f64> {
    let len = to_integer(argument)?;
    if len <= 0.0 {
        return Ok(0.0);
    }
    Ok(min(&[len, MAX_SAFE_INTEGER]))
}

/// ### [7.1.17 ToString ( argument )](https://tc39.es/ecma262/#sec-tostring)
pub fn to_string(argument: &JsValue) -> JsResult<String> {
    match argument {
        JsValue::Undefined => Ok("undefined".to_string()),
        JsValue::Null => Ok("null".to_string()),
        JsValue::Boolean(b) => Ok(b.to_string()),
        JsValue::Number(n) => Ok(number_to_string(*n)),
        JsValue::String(s) => Ok(s.clone()),
        JsValue::Symbol(_) => Err(JsError::type_error("Cannot convert a Symbol value to a string")),
        JsValue::Object(_) => {
            let prim = to_primitive(argument, Some(PreferredType::String))?;
            to_string(&prim)
        }
    }
}

/// ### [7.1.18 ToObject ( argument )](https://tc39.es/ecma262/#sec-toobject)
///
/// Objects are returned as they are. Primitives are wrapped in a fresh
/// object carrying the primitive in its `[[BooleanData]]`, `[[NumberData]]`,
/// `[[StringData]]` or `[[SymbolData]]` slot. A String wrapper also gets
/// the read-only `length` and index properties, counted in code points.
pub fn to_object(argument: &JsValue) -> JsResult<JsObject> {
    let (proto, slot) = match argument {
        JsValue::Undefined | JsValue::Null => {
            return Err(JsError::type_error(format!(
                "Cannot convert {} to object",
                to_string(argument)?
            )))
        }
        JsValue::Object(obj) => return Ok(obj.clone()),
        JsValue::Boolean(_) => (Intrinsic::BooleanPrototype, BOOLEAN_DATA),
        JsValue::Number(_) => (Intrinsic::NumberPrototype, NUMBER_DATA),
        JsValue::String(_) => (Intrinsic::StringPrototype, STRING_DATA),
        JsValue::Symbol(_) => (Intrinsic::SymbolPrototype, SYMBOL_DATA),
    };
    let wrapper = JsObject::ordinary(Some(intrinsic(proto)));
    make_slots(&wrapper, &[slot]);
    set_slot(&wrapper, slot, argument.clone());
    if let JsValue::String(s) = argument {
        define_string_properties(&wrapper, s);
    }
    Ok(wrapper)
}

/// The String exotic own properties: a read-only enumerable property per
/// code point and a frozen `length`.
fn define_string_properties(wrapper: &JsObject, s: &str) {
    let mut length = 0;
    for (index, c) in s.chars().enumerate() {
        let element = Property {
            value: JsValue::String(c.to_string()),
            writable: false,
            enumerable: true,
            configurable: false,
        };
        let defined = wrapper.define_own_property(index.to_string().into(), element);
        assert(defined, "string index property could not be defined");
        length = index + 1;
    }
    let defined = wrapper.define_own_property(
        "length".into(),
        Property::frozen(JsValue::Number(length as f64)),
    );
    assert(defined, "string length could not be defined");
}

/// ### [7.1.19 ToPropertyKey ( argument )](https://tc39.es/ecma262/#sec-topropertykey)
pub fn to_property_key(argument: &JsValue) -> JsResult<PropertyKey> {
    match to_primitive(argument, Some(PreferredType::String))? {
        JsValue::Symbol(sym) => Ok(PropertyKey::Symbol(sym)),
        key => Ok(PropertyKey::String(to_string(&key)?)),
    }
}
