//! ## [7.2 Testing and Comparison Operations](https://tc39.es/ecma262/#sec-testing-and-comparison-operations)

use core_types::{JsObject, JsValue, ValueType};

/// ### [6.1 Type ( x )](https://tc39.es/ecma262/#sec-ecmascript-language-types)
///
/// Callable objects are still `Object`.
pub fn type_of(x: &JsValue) -> ValueType {
    x.value_type()
}

/// ### [7.2.3 IsCallable ( argument )](https://tc39.es/ecma262/#sec-iscallable)
pub fn is_callable(argument: &JsValue) -> bool {
    argument.as_object().is_some_and(JsObject::is_callable)
}

/// ### [7.2.4 IsConstructor ( argument )](https://tc39.es/ecma262/#sec-isconstructor)
///
/// True only for function objects that carry `[[Construct]]`, not for
/// every callable.
pub fn is_constructor(argument: &JsValue) -> bool {
    argument.as_object().is_some_and(JsObject::is_constructor)
}

/// ### [7.2.2 IsArray ( argument )](https://tc39.es/ecma262/#sec-isarray)
pub fn is_array(argument: &JsValue) -> bool {
    argument.as_object().is_some_and(JsObject::is_array)
}

/// ### [7.2.7 IsPropertyKey ( argument )](https://tc39.es/ecma262/#sec-ispropertykey)
pub fn is_property_key(argument: &JsValue) -> bool {
    matches!(argument, JsValue::String(_) | JsValue::Symbol(_))
}

/// ### [7.2.10 SameValue ( x, y )](https://tc39.es/ecma262/#sec-samevalue)
pub fn same_value(x: &JsValue, y: &JsValue) -> bool {
    x.same_value(y)
}

/// ### [7.2.11 SameValueZero ( x, y )](https://tc39.es/ecma262/#sec-samevaluezero)
pub fn same_value_zero(x: &JsValue, y: &JsValue) -> bool {
    x.same_value_zero(y)
}
