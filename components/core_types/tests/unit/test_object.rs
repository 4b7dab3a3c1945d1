//! Unit tests for JsObject

use core_types::{JsObject, JsValue, Property, PropertyKey, SymbolValue, WellKnownSymbol};

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_string_keyed_get() {
        let o = JsObject::ordinary(None);
        o.set("key1", JsValue::string("value1"));
        o.set("long key", JsValue::string("long value"));

        assert_eq!(o.get(&"key1".into()), JsValue::string("value1"));
        assert_eq!(o.get(&"long key".into()), JsValue::string("long value"));
        assert_eq!(o.get(&"not there".into()), JsValue::Undefined);
    }

    #[test]
    fn test_symbol_keyed_get() {
        let o = JsObject::ordinary(None);
        let symbol = SymbolValue::new(None);
        let not_there = SymbolValue::new(None);
        o.set(symbol.clone(), JsValue::string("value!"));

        assert_eq!(o.get(&symbol.into()), JsValue::string("value!"));
        assert_eq!(o.get(&not_there.into()), JsValue::Undefined);
    }

    #[test]
    fn test_has_property_walks_chain() {
        let proto = JsObject::ordinary(None);
        proto.set(WellKnownSymbol::Iterator, JsValue::Null);
        let o = JsObject::ordinary(Some(proto));

        let key = PropertyKey::from(WellKnownSymbol::Iterator);
        assert!(o.has_property(&key));
        assert!(!o.has_own_property(&key));
    }

    #[test]
    fn test_set_updates_existing_preserving_attributes() {
        let o = JsObject::ordinary(None);
        o.define_own_property("m".into(), Property::hidden(JsValue::number(1.0)));
        assert!(o.set("m", JsValue::number(2.0)));

        let prop = o.get_own_property(&"m".into()).unwrap();
        assert_eq!(prop.value, JsValue::number(2.0));
        assert!(!prop.enumerable);
    }

    #[test]
    fn test_own_property_keys() {
        let o = JsObject::ordinary(None);
        o.set("a", JsValue::Null);
        o.set("b", JsValue::Null);
        let mut keys: Vec<String> = o
            .own_property_keys()
            .iter()
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_delete() {
        let o = JsObject::ordinary(None);
        o.set("gone", JsValue::Null);
        assert!(o.delete(&"gone".into()));
        assert!(!o.has_own_property(&"gone".into()));
        assert!(o.delete(&"never".into()));
    }
}

#[cfg(test)]
mod function_tests {
    use super::*;

    #[test]
    fn test_callable_and_constructor_flags() {
        let f = JsObject::function(None, false, |_, _| Ok(JsValue::Undefined));
        let c = JsObject::function(None, true, |_, _| Ok(JsValue::Undefined));
        let o = JsObject::ordinary(None);

        assert!(f.is_callable() && !f.is_constructor());
        assert!(c.is_callable() && c.is_constructor());
        assert!(!o.is_callable() && !o.is_constructor());
    }

    #[test]
    fn test_call_receives_this_and_args() {
        let f = JsObject::function(None, false, |this, args| {
            Ok(JsValue::number(
                this.as_number().unwrap_or(0.0) + args.len() as f64,
            ))
        });
        let result = f
            .call(&JsValue::number(10.0), &[JsValue::Null, JsValue::Null])
            .unwrap();
        assert_eq!(result, JsValue::number(12.0));
    }

    #[test]
    fn test_call_propagates_errors() {
        let f = JsObject::function(None, false, |_, _| {
            Err(core_types::JsError::range_error("boom"))
        });
        let err = f.call(&JsValue::Undefined, &[]).unwrap_err();
        assert_eq!(err.message, "boom");
    }
}
