//! Contract compliance tests for core_types
//!
//! These tests pin the surface the abstract operations rely on.

use core_types::{
    ErrorKind, JsError, JsObject, JsResult, JsValue, PropertyKey, SymbolValue, ValueType,
    WeakObject, WellKnownSymbol,
};

#[cfg(test)]
mod value_contract_tests {
    use super::*;

    /// Contract: the seven language types are all representable
    #[test]
    fn test_value_has_all_language_types() {
        let values = [
            JsValue::Undefined,
            JsValue::Null,
            JsValue::Boolean(true),
            JsValue::Number(0.0),
            JsValue::String(String::new()),
            JsValue::Symbol(SymbolValue::new(None)),
            JsValue::Object(JsObject::ordinary(None)),
        ];
        let types: Vec<ValueType> = values.iter().map(JsValue::value_type).collect();
        assert_eq!(
            types,
            vec![
                ValueType::Undefined,
                ValueType::Null,
                ValueType::Boolean,
                ValueType::Number,
                ValueType::String,
                ValueType::Symbol,
                ValueType::Object,
            ]
        );
    }

    /// Contract: only Strings and Symbols are property keys
    #[test]
    fn test_property_key_conversion() {
        assert!(PropertyKey::try_from(&JsValue::string("")).is_ok());
        assert!(PropertyKey::try_from(&JsValue::symbol(SymbolValue::new(None))).is_ok());
        for v in [
            JsValue::number(0.0),
            JsValue::boolean(true),
            JsValue::Undefined,
            JsValue::Null,
            JsValue::Object(JsObject::ordinary(None)),
        ] {
            assert!(PropertyKey::try_from(&v).is_err());
        }
    }

    /// Contract: a property key converts back to the value it came from
    #[test]
    fn test_property_key_to_value() {
        let sym = WellKnownSymbol::Species.symbol();
        assert_eq!(PropertyKey::from(sym.clone()).to_value(), JsValue::symbol(sym));
    }
}

#[cfg(test)]
mod object_contract_tests {
    use super::*;

    /// Contract: identity must survive the weak round trip
    #[test]
    fn test_weak_round_trip_preserves_identity() {
        let obj = JsObject::ordinary(None);
        let weak: WeakObject = obj.downgrade();
        let back = weak.upgrade().unwrap();
        assert!(back.ptr_eq(&obj));
        assert_eq!(back.identity(), obj.identity());
    }

    /// Contract: calling a non-function is a TypeError, never a panic
    #[test]
    fn test_call_on_ordinary_object_is_type_error() {
        let result: JsResult<JsValue> = JsObject::ordinary(None).call(&JsValue::Undefined, &[]);
        assert!(matches!(
            result,
            Err(JsError {
                kind: ErrorKind::TypeError,
                ..
            })
        ));
    }
}
