//! Well-known intrinsic objects.
//!
//! Every thread gets its own realm, built the first time any intrinsic is
//! requested. Built-in behaviours only look other intrinsics up when they
//! run, never while the realm is being built.

use std::collections::HashMap;
use std::fmt;

use core_types::{
    number_to_string, JsError, JsObject, JsResult, JsValue, ObjectKind, Property, PropertyKey,
    SymbolValue, ValueType, WellKnownSymbol,
};
use tracing::debug;

use crate::iteration::{create_iterator_object, ArrayIterator, StringIterator};
use crate::meta::{
    assert, assertion_failure, define_built_in_data_property, get_slot, has_slot, make_slots,
    set_slot,
};
use crate::objects::{array_create, create_data_property_or_throw, MAX_ARRAY_LENGTH};
use crate::type_conversion::{
    to_boolean, to_number, to_object, to_property_key, to_string, BOOLEAN_DATA, NUMBER_DATA,
    STRING_DATA, SYMBOL_DATA,
};

/// A well-known intrinsic object, named as `%Name%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// `%Object%`
    Object,
    /// `%ObjectPrototype%`
    ObjectPrototype,
    /// `%ObjProto_toString%`
    ObjProtoToString,
    /// `%Function%`
    Function,
    /// `%FunctionPrototype%`
    FunctionPrototype,
    /// `%Array%`
    Array,
    /// `%ArrayPrototype%`
    ArrayPrototype,
    /// `%String%`
    String,
    /// `%StringPrototype%`
    StringPrototype,
    /// `%Boolean%`
    Boolean,
    /// `%BooleanPrototype%`
    BooleanPrototype,
    /// `%Number%`
    Number,
    /// `%NumberPrototype%`
    NumberPrototype,
    /// `%Symbol%`
    Symbol,
    /// `%SymbolPrototype%`
    SymbolPrototype,
    /// `%IteratorPrototype%`
    IteratorPrototype,
}

impl Intrinsic {
    /// Every intrinsic in the table.
    pub const ALL: [Intrinsic; 16] = [
        Intrinsic::Object,
        Intrinsic::ObjectPrototype,
        Intrinsic::ObjProtoToString,
        Intrinsic::Function,
        Intrinsic::FunctionPrototype,
        Intrinsic::Array,
        Intrinsic::ArrayPrototype,
        Intrinsic::String,
        Intrinsic::StringPrototype,
        Intrinsic::Boolean,
        Intrinsic::BooleanPrototype,
        Intrinsic::Number,
        Intrinsic::NumberPrototype,
        Intrinsic::Symbol,
        Intrinsic::SymbolPrototype,
        Intrinsic::IteratorPrototype,
    ];

    /// The `%Name%` this intrinsic is known by.
    pub fn name(self) -> &'static str {
        match self {
            Intrinsic::Object => "%Object%",
            Intrinsic::ObjectPrototype => "%ObjectPrototype%",
            Intrinsic::ObjProtoToString => "%ObjProto_toString%",
            Intrinsic::Function => "%Function%",
            Intrinsic::FunctionPrototype => "%FunctionPrototype%",
            Intrinsic::Array => "%Array%",
            Intrinsic::ArrayPrototype => "%ArrayPrototype%",
            Intrinsic::String => "%String%",
            Intrinsic::StringPrototype => "%StringPrototype%",
            Intrinsic::Boolean => "%Boolean%",
            Intrinsic::BooleanPrototype => "%BooleanPrototype%",
            Intrinsic::Number => "%Number%",
            Intrinsic::NumberPrototype => "%NumberPrototype%",
            Intrinsic::Symbol => "%Symbol%",
            Intrinsic::SymbolPrototype => "%SymbolPrototype%",
            Intrinsic::IteratorPrototype => "%IteratorPrototype%",
        }
    }

    /// Look an intrinsic up by its `%Name%`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|which| which.name() == name)
    }
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

struct Realm {
    objects: HashMap<Intrinsic, JsObject>,
}

thread_local! {
    static REALM: Realm = Realm::new();
}

/// The intrinsic object `which` of this thread's realm.
pub fn intrinsic(which: Intrinsic) -> JsObject {
    REALM.with(|realm| realm.get(which))
}

/// Look an intrinsic up by its `%Name%`, e.g. `"%ArrayPrototype%"`.
///
/// ```
/// use abstract_ops::intrinsics::get_intrinsic;
///
/// assert!(get_intrinsic("%ArrayPrototype%").unwrap().is_array());
/// assert!(get_intrinsic("%Nonsense%").is_none());
/// ```
pub fn get_intrinsic(name: &str) -> Option<JsObject> {
    Intrinsic::from_name(name).map(intrinsic)
}

/// ### [10.3.4 CreateBuiltinFunction ( behaviour, length, name, ... )](https://tc39.es/ecma262/#sec-createbuiltinfunction)
///
/// A non-constructor function object whose `[[Prototype]]` is
/// `%FunctionPrototype%`.
pub fn create_builtin_function<F>(behaviour: F, length: u32, name: &str) -> JsObject
where
    F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
{
    builtin(
        &intrinsic(Intrinsic::FunctionPrototype),
        false,
        length,
        name,
        behaviour,
    )
}

/// `length` and `name` of a built-in function: read-only, configurable.
fn function_attribute(value: JsValue) -> Property {
    Property {
        value,
        writable: false,
        enumerable: false,
        configurable: true,
    }
}

fn builtin<F>(
    function_prototype: &JsObject,
    constructor: bool,
    length: u32,
    name: &str,
    behaviour: F,
) -> JsObject
where
    F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
{
    let func = JsObject::function(Some(function_prototype.clone()), constructor, behaviour);
    let defined = func.define_own_property(
        "length".into(),
        function_attribute(JsValue::Number(f64::from(length))),
    ) && func.define_own_property("name".into(), function_attribute(JsValue::string(name)));
    assert(defined, "built-in function attributes could not be defined");
    func
}

fn method<F>(
    target: &JsObject,
    function_prototype: &JsObject,
    key: impl Into<PropertyKey>,
    name: &str,
    length: u32,
    behaviour: F,
) -> JsObject
where
    F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
{
    let func = builtin(function_prototype, false, length, name, behaviour);
    define_built_in_data_property(target, key, func.clone().into());
    func
}

/// `constructor.prototype` is frozen, `prototype.constructor` is a normal
/// built-in data property.
fn link_constructor(constructor: &JsObject, prototype: &JsObject) {
    let defined =
        constructor.define_own_property("prototype".into(), Property::frozen(prototype.clone().into()));
    assert(defined, "constructor prototype could not be defined");
    define_built_in_data_property(prototype, "constructor", constructor.clone().into());
}

fn wrapper_prototype(object_prototype: &JsObject, slot: &str, value: JsValue) -> JsObject {
    let proto = JsObject::ordinary(Some(object_prototype.clone()));
    make_slots(&proto, &[slot]);
    set_slot(&proto, slot, value);
    proto
}

/// The primitive behind `this`, unwrapping wrapper objects through `slot`.
fn this_primitive(this: &JsValue, slot: &str, expected: ValueType) -> JsResult<JsValue> {
    let value = match this {
        JsValue::Object(obj) if has_slot(obj, slot) => get_slot(obj, slot).into_value(),
        other => other.clone(),
    };
    if value.value_type() == expected {
        Ok(value)
    } else {
        Err(JsError::type_error(format!("this is not a {expected}")))
    }
}

fn this_symbol_value(this: &JsValue) -> JsResult<SymbolValue> {
    match this_primitive(this, SYMBOL_DATA, ValueType::Symbol)? {
        JsValue::Symbol(sym) => Ok(sym),
        _ => Err(JsError::type_error("this is not a Symbol")),
    }
}

/// ### [20.1.3.6 Object.prototype.toString ( )](https://tc39.es/ecma262/#sec-object.prototype.tostring)
fn object_prototype_to_string(this: &JsValue) -> JsResult<JsValue> {
    let o = match this {
        JsValue::Undefined => return Ok(JsValue::string("[object Undefined]")),
        JsValue::Null => return Ok(JsValue::string("[object Null]")),
        v => to_object(v)?,
    };
    let builtin_tag = if o.is_array() {
        "Array"
    } else if o.is_callable() {
        "Function"
    } else if has_slot(&o, BOOLEAN_DATA) {
        "Boolean"
    } else if has_slot(&o, NUMBER_DATA) {
        "Number"
    } else if has_slot(&o, STRING_DATA) {
        "String"
    } else {
        "Object"
    };
    let tag = match o.get(&WellKnownSymbol::ToStringTag.into()) {
        JsValue::String(tag) => tag,
        _ => builtin_tag.to_string(),
    };
    Ok(JsValue::String(format!("[object {tag}]")))
}

/// ### [23.1.1.1 Array ( ...values )](https://tc39.es/ecma262/#sec-array)
fn array_constructor(args: &[JsValue]) -> JsResult<JsValue> {
    let proto = intrinsic(Intrinsic::ArrayPrototype);
    if let [JsValue::Number(len)] = args {
        let len = *len;
        if len < 0.0 || len.fract() != 0.0 || len > MAX_ARRAY_LENGTH || len.is_nan() {
            return Err(JsError::range_error("Invalid array length"));
        }
        return array_create(len, Some(&proto)).map(Into::into);
    }
    let array = array_create(args.len() as f64, Some(&proto))?;
    for (index, value) in args.iter().enumerate() {
        create_data_property_or_throw(&array, index.to_string(), value.clone())?;
    }
    Ok(array.into())
}

impl Realm {
    fn new() -> Self {
        let object_prototype = JsObject::ordinary(None);
        let function_prototype =
            JsObject::function(Some(object_prototype.clone()), false, |_, _| Ok(JsValue::Undefined));
        let fp = &function_prototype;

        // Object
        let object = builtin(fp, true, 1, "Object", |_, args| match args.first() {
            None | Some(JsValue::Undefined) | Some(JsValue::Null) => Ok(JsObject::ordinary(Some(
                intrinsic(Intrinsic::ObjectPrototype),
            ))
            .into()),
            Some(value) => to_object(value).map(Into::into),
        });
        link_constructor(&object, &object_prototype);
        let obj_proto_to_string = method(&object_prototype, fp, "toString", "toString", 0, |this, _| {
            object_prototype_to_string(this)
        });
        method(&object_prototype, fp, "valueOf", "valueOf", 0, |this, _| {
            to_object(this).map(Into::into)
        });
        method(&object_prototype, fp, "hasOwnProperty", "hasOwnProperty", 1, |this, args| {
            let key = to_property_key(args.first().unwrap_or(&JsValue::Undefined))?;
            let o = to_object(this)?;
            Ok(JsValue::Boolean(o.has_own_property(&key)))
        });

        // Function
        let function = builtin(fp, true, 1, "Function", |_, _| {
            Err(JsError::type_error("Dynamic function creation is not supported"))
        });
        link_constructor(&function, fp);
        method(fp, fp, "call", "call", 1, |this, args| {
            let (this_arg, rest) = match args.split_first() {
                Some((first, rest)) => (first.clone(), rest),
                None => (JsValue::Undefined, args),
            };
            match this {
                JsValue::Object(func) if func.is_callable() => func.call(&this_arg, rest),
                _ => Err(JsError::type_error("Function.prototype.call called on a non-function")),
            }
        });

        // Array
        let array_prototype = JsObject::with_kind(Some(object_prototype.clone()), ObjectKind::Array);
        let defined = array_prototype.define_own_property(
            "length".into(),
            Property {
                value: JsValue::Number(0.0),
                writable: true,
                enumerable: false,
                configurable: false,
            },
        );
        assert(defined, "Array.prototype.length could not be defined");
        let array = builtin(fp, true, 1, "Array", |_, args| array_constructor(args));
        link_constructor(&array, &array_prototype);
        let defined = array.define_own_property(
            WellKnownSymbol::Species.into(),
            function_attribute(array.clone().into()),
        );
        assert(defined, "Array[@@species] could not be defined");
        let values = method(&array_prototype, fp, "values", "values", 0, |this, _| {
            let o = to_object(this)?;
            Ok(create_iterator_object(ArrayIterator::new(o)).into())
        });
        define_built_in_data_property(&array_prototype, WellKnownSymbol::Iterator, values.into());
        method(&array_prototype, fp, "keys", "keys", 0, |this, _| {
            let o = to_object(this)?;
            Ok(create_iterator_object(ArrayIterator::keys(o)).into())
        });
        method(&array_prototype, fp, "entries", "entries", 0, |this, _| {
            let o = to_object(this)?;
            Ok(create_iterator_object(ArrayIterator::entries(o)).into())
        });

        // String
        let string_prototype = wrapper_prototype(&object_prototype, STRING_DATA, JsValue::string(""));
        let defined = string_prototype
            .define_own_property("length".into(), Property::frozen(JsValue::Number(0.0)));
        assert(defined, "String.prototype.length could not be defined");
        let string = builtin(fp, true, 1, "String", |_, args| match args.first() {
            None => Ok(JsValue::string("")),
            Some(JsValue::Symbol(sym)) => Ok(JsValue::String(sym.descriptive_string())),
            Some(value) => to_string(value).map(JsValue::String),
        });
        link_constructor(&string, &string_prototype);
        for name in ["toString", "valueOf"] {
            method(&string_prototype, fp, name, name, 0, |this, _| {
                this_primitive(this, STRING_DATA, ValueType::String)
            });
        }
        method(
            &string_prototype,
            fp,
            WellKnownSymbol::Iterator,
            "[Symbol.iterator]",
            0,
            |this, _| {
                if this.is_nullish() {
                    return Err(JsError::type_error(
                        "String.prototype[Symbol.iterator] called on null or undefined",
                    ));
                }
                let s = to_string(this)?;
                Ok(create_iterator_object(StringIterator::new(s)).into())
            },
        );

        // Boolean
        let boolean_prototype =
            wrapper_prototype(&object_prototype, BOOLEAN_DATA, JsValue::boolean(false));
        let boolean = builtin(fp, true, 1, "Boolean", |_, args| {
            Ok(JsValue::Boolean(to_boolean(args.first().unwrap_or(&JsValue::Undefined))))
        });
        link_constructor(&boolean, &boolean_prototype);
        method(&boolean_prototype, fp, "toString", "toString", 0, |this, _| {
            let b = this_primitive(this, BOOLEAN_DATA, ValueType::Boolean)?;
            to_string(&b).map(JsValue::String)
        });
        method(&boolean_prototype, fp, "valueOf", "valueOf", 0, |this, _| {
            this_primitive(this, BOOLEAN_DATA, ValueType::Boolean)
        });

        // Number
        let number_prototype =
            wrapper_prototype(&object_prototype, NUMBER_DATA, JsValue::number(0.0));
        let number = builtin(fp, true, 1, "Number", |_, args| match args.first() {
            None => Ok(JsValue::number(0.0)),
            Some(value) => to_number(value).map(JsValue::Number),
        });
        link_constructor(&number, &number_prototype);
        method(&number_prototype, fp, "toString", "toString", 1, |this, args| {
            let n = this_primitive(this, NUMBER_DATA, ValueType::Number)?;
            let radix = match args.first() {
                None | Some(JsValue::Undefined) => 10.0,
                Some(radix) => to_number(radix)?,
            };
            if radix != 10.0 {
                return Err(JsError::range_error("Only radix 10 is supported"));
            }
            Ok(JsValue::String(number_to_string(n.as_number().unwrap_or(f64::NAN))))
        });
        method(&number_prototype, fp, "valueOf", "valueOf", 0, |this, _| {
            this_primitive(this, NUMBER_DATA, ValueType::Number)
        });

        // Symbol
        let symbol_prototype = JsObject::ordinary(Some(object_prototype.clone()));
        let symbol = builtin(fp, true, 0, "Symbol", |_, args| {
            let description = match args.first() {
                None | Some(JsValue::Undefined) => None,
                Some(value) => Some(to_string(value)?),
            };
            Ok(SymbolValue::new(description.as_deref()).into())
        });
        link_constructor(&symbol, &symbol_prototype);
        method(&symbol_prototype, fp, "toString", "toString", 0, |this, _| {
            Ok(JsValue::String(this_symbol_value(this)?.descriptive_string()))
        });
        method(&symbol_prototype, fp, "valueOf", "valueOf", 0, |this, _| {
            this_symbol_value(this).map(JsValue::Symbol)
        });
        let defined = symbol_prototype.define_own_property(
            WellKnownSymbol::ToStringTag.into(),
            function_attribute(JsValue::string("Symbol")),
        );
        assert(defined, "Symbol.prototype[@@toStringTag] could not be defined");

        // %IteratorPrototype%
        let iterator_prototype = JsObject::ordinary(Some(object_prototype.clone()));
        method(
            &iterator_prototype,
            fp,
            WellKnownSymbol::Iterator,
            "[Symbol.iterator]",
            0,
            |this, _| Ok(this.clone()),
        );

        let objects = HashMap::from([
            (Intrinsic::Object, object),
            (Intrinsic::ObjectPrototype, object_prototype),
            (Intrinsic::ObjProtoToString, obj_proto_to_string),
            (Intrinsic::Function, function),
            (Intrinsic::FunctionPrototype, function_prototype),
            (Intrinsic::Array, array),
            (Intrinsic::ArrayPrototype, array_prototype),
            (Intrinsic::String, string),
            (Intrinsic::StringPrototype, string_prototype),
            (Intrinsic::Boolean, boolean),
            (Intrinsic::BooleanPrototype, boolean_prototype),
            (Intrinsic::Number, number),
            (Intrinsic::NumberPrototype, number_prototype),
            (Intrinsic::Symbol, symbol),
            (Intrinsic::SymbolPrototype, symbol_prototype),
            (Intrinsic::IteratorPrototype, iterator_prototype),
        ]);
        debug!(intrinsics = objects.len(), "realm initialized");
        Realm { objects }
    }

    fn get(&self, which: Intrinsic) -> JsObject {
        self.objects
            .get(&which)
            .cloned()
            .unwrap_or_else(|| assertion_failure(format!("realm has no {which}")))
    }
}
