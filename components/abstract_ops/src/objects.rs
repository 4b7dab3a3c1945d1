//! ## [7.3 Operations on Objects](https://tc39.es/ecma262/#sec-operations-on-objects)
//!
//! Property access, calls and object creation. Property keys are typed, so
//! the "Assert: IsPropertyKey(P)" steps hold by construction, as does
//! "Assert: Type(O) is Object" wherever `O` is taken as a [`JsObject`].

use core_types::{
    JsError, JsObject, JsResult, JsValue, ObjectKind, Property, PropertyKey, WellKnownSymbol,
};
use tracing::trace;

use crate::intrinsics::{intrinsic, Intrinsic};
use crate::meta::{assert, make_slots};

/// The largest length an Array can have.
pub const MAX_ARRAY_LENGTH: f64 = 4_294_967_295.0;

/// ### [7.3.14 Call ( F, V \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-call)
///
/// Fails with a TypeError if `f` is not callable.
pub fn call(f: &JsValue, this: &JsValue, args: &[JsValue]) -> JsResult<JsValue> {
    match f {
        JsValue::Object(func) if func.is_callable() => func.call(this, args),
        _ => Err(JsError::type_error(format!(
            "{} is not a function",
            f.value_type()
        ))),
    }
}

/// ### [7.3.21 Invoke ( V, P \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-invoke)
pub fn invoke(v: &JsValue, key: impl Into<PropertyKey>, args: &[JsValue]) -> JsResult<JsValue> {
    let key = key.into();
    let func = get_v(v, key.clone())?;
    if !func.as_object().is_some_and(JsObject::is_callable) {
        return Err(JsError::type_error(format!("{key} is not a function")));
    }
    call(&func, v, args)
}

/// The object whose properties a primitive's property lookups see.
fn lookup_base(v: &JsValue) -> JsResult<JsObject> {
    let proto = match v {
        JsValue::Undefined | JsValue::Null => {
            return Err(JsError::type_error(format!(
                "Cannot read properties of {}",
                v.value_type()
            )))
        }
        JsValue::Object(obj) => return Ok(obj.clone()),
        JsValue::Boolean(_) => Intrinsic::BooleanPrototype,
        JsValue::Number(_) => Intrinsic::NumberPrototype,
        JsValue::String(_) => Intrinsic::StringPrototype,
        JsValue::Symbol(_) => Intrinsic::SymbolPrototype,
    };
    Ok(intrinsic(proto))
}

/// The own `length` and index properties a String value's wrapper would
/// have. Both count code points.
pub(crate) fn string_own_property(s: &str, key: &PropertyKey) -> Option<JsValue> {
    if key.as_str() == Some("length") {
        return Some(JsValue::Number(s.chars().count() as f64));
    }
    let index = key.as_array_index()?;
    s.chars()
        .nth(index as usize)
        .map(|c| JsValue::String(c.to_string()))
}

/// ### [7.3.3 GetV ( V, P )](https://tc39.es/ecma262/#sec-getv)
///
/// Property lookup on any value. Primitives are not wrapped: a string
/// answers `length` and its indices itself, and every other key is looked
/// up on the matching prototype, which with data properties only gives
/// the same answer as the wrapper would.
///
/// ```
/// use abstract_ops::objects::get_v;
/// use core_types::JsValue;
///
/// let s = JsValue::string("abc");
/// assert_eq!(get_v(&s, "length").unwrap(), JsValue::number(3.0));
/// assert_eq!(get_v(&s, "1").unwrap(), JsValue::string("b"));
/// ```
pub fn get_v(v: &JsValue, key: impl Into<PropertyKey>) -> JsResult<JsValue> {
    let key = key.into();
    if let JsValue::String(s) = v {
        if let Some(value) = string_own_property(s, &key) {
            return Ok(value);
        }
    }
    Ok(lookup_base(v)?.get(&key))
}

/// ### [7.3.2 Get ( O, P )](https://tc39.es/ecma262/#sec-get-o-p)
pub fn get(o: &JsObject, key: impl Into<PropertyKey>) -> JsValue {
    o.get(&key.into())
}

/// ### [7.3.11 GetMethod ( V, P )](https://tc39.es/ecma262/#sec-getmethod)
///
/// `Ok(None)` when the property is `undefined` or `null`; a TypeError when
/// it is anything else that is not callable.
pub fn get_method(v: &JsValue, key: impl Into<PropertyKey>) -> JsResult<Option<JsObject>> {
    let key = key.into();
    match get_v(v, key.clone())? {
        JsValue::Undefined | JsValue::Null => Ok(None),
        JsValue::Object(func) if func.is_callable() => Ok(Some(func)),
        _ => Err(JsError::type_error(format!("{key} is not a function"))),
    }
}

/// ### [7.3.12 HasProperty ( O, P )](https://tc39.es/ecma262/#sec-hasproperty)
pub fn has_property(o: &JsObject, key: impl Into<PropertyKey>) -> bool {
    o.has_property(&key.into())
}

/// ### [7.3.5 CreateDataProperty ( O, P, V )](https://tc39.es/ecma262/#sec-createdataproperty)
///
/// Returns false if the property could not be defined.
pub fn create_data_property(o: &JsObject, key: impl Into<PropertyKey>, value: JsValue) -> bool {
    o.define_own_property(key.into(), Property::data(value))
}

/// ### [7.3.7 CreateDataPropertyOrThrow ( O, P, V )](https://tc39.es/ecma262/#sec-createdatapropertyorthrow)
pub fn create_data_property_or_throw(
    o: &JsObject,
    key: impl Into<PropertyKey>,
    value: JsValue,
) -> JsResult<()> {
    let key = key.into();
    if create_data_property(o, key.clone(), value) {
        Ok(())
    } else {
        Err(JsError::type_error(format!("Cannot define property {key}")))
    }
}

/// ### [10.4.2.2 ArrayCreate ( length \[ , proto \] )](https://tc39.es/ecma262/#sec-arraycreate)
///
/// `length` must be a non-negative integer; lengths above 2^32 - 1 are a
/// RangeError. `proto` defaults to `%ArrayPrototype%`.
pub fn array_create(length: f64, proto: Option<&JsObject>) -> JsResult<JsObject> {
    assert(
        length >= 0.0 && length.fract() == 0.0,
        "array length is not a non-negative integer",
    );
    if length > MAX_ARRAY_LENGTH {
        return Err(JsError::range_error("Invalid array length"));
    }
    let proto = match proto {
        Some(proto) => proto.clone(),
        None => intrinsic(Intrinsic::ArrayPrototype),
    };
    let array = JsObject::with_kind(Some(proto), ObjectKind::Array);
    let defined = array.define_own_property(
        "length".into(),
        Property {
            value: JsValue::Number(length),
            writable: true,
            enumerable: false,
            configurable: false,
        },
    );
    assert(defined, "array length could not be defined");
    Ok(array)
}

/// ### [10.1.12 OrdinaryObjectCreate ( proto \[ , additionalInternalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinaryobjectcreate)
///
/// The new object always gets a slot bag, possibly empty, so it can never
/// be given a second one.
pub fn object_create(proto: Option<JsObject>, slots: &[&str]) -> JsObject {
    let obj = JsObject::ordinary(proto);
    make_slots(&obj, slots);
    obj
}

/// ### [10.1.14 GetPrototypeFromConstructor ( constructor, intrinsicDefaultProto )](https://tc39.es/ecma262/#sec-getprototypefromconstructor)
///
/// Falls back to `default_proto` when `constructor.prototype` is not an
/// object.
pub fn get_prototype_from_constructor(
    constructor: &JsObject,
    default_proto: Intrinsic,
) -> JsResult<JsObject> {
    if !constructor.is_constructor() {
        return Err(JsError::type_error("Given a non-constructor"));
    }
    match get(constructor, "prototype") {
        JsValue::Object(proto) => Ok(proto),
        _ => Ok(intrinsic(default_proto)),
    }
}

/// ### [10.1.13 OrdinaryCreateFromConstructor ( constructor, intrinsicDefaultProto \[ , internalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinarycreatefromconstructor)
pub fn ordinary_create_from_constructor(
    constructor: &JsObject,
    default_proto: Intrinsic,
    slots: &[&str],
) -> JsResult<JsObject> {
    let proto = get_prototype_from_constructor(constructor, default_proto)?;
    Ok(object_create(Some(proto), slots))
}

/// ### [7.3.22 SpeciesConstructor ( O, defaultConstructor )](https://tc39.es/ecma262/#sec-speciesconstructor)
///
/// ```
/// use abstract_ops::intrinsics::{intrinsic, Intrinsic};
/// use abstract_ops::objects::{array_create, species_constructor};
///
/// let array_ctor = intrinsic(Intrinsic::Array);
/// let array = array_create(0.0, None).unwrap();
/// let ctor = species_constructor(&array, &intrinsic(Intrinsic::Object)).unwrap();
/// assert!(ctor.ptr_eq(&array_ctor));
/// ```
pub fn species_constructor(o: &JsObject, default_constructor: &JsObject) -> JsResult<JsObject> {
    let c = match get(o, "constructor") {
        JsValue::Undefined => return Ok(default_constructor.clone()),
        JsValue::Object(c) => c,
        _ => return Err(JsError::type_error("object.constructor is not an object")),
    };
    match get(&c, WellKnownSymbol::Species) {
        JsValue::Undefined | JsValue::Null => Ok(default_constructor.clone()),
        JsValue::Object(s) if s.is_constructor() => {
            trace!("species constructor found");
            Ok(s)
        }
        _ => Err(JsError::type_error("object.constructor[Symbol.species] is not a constructor")),
    }
}
