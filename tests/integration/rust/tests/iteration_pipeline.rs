//! Iteration across component boundaries
//!
//! Host-built values from `core_types` are consumed through the iterator
//! protocol in `abstract_ops`, both through the Rust adapter and by driving
//! `next` by hand.

use abstract_ops::intrinsics::{create_builtin_function, intrinsic, Intrinsic};
use abstract_ops::iteration::{create_iterator_object, iterate, ArrayIterator, StringIterator};
use abstract_ops::objects::{array_create, call, create_data_property_or_throw, invoke};
use abstract_ops::type_conversion::{to_number, to_string};
use abstract_ops::{get_iterator, iterator_step, iterator_value, IteratorValues};
use core_types::{JsObject, JsResult, JsValue, WellKnownSymbol};

fn collect(source: &JsValue) -> JsResult<Vec<JsValue>> {
    iterate(source)?.collect()
}

fn numbers(values: &[f64]) -> JsObject {
    let array = array_create(0.0, None).unwrap();
    for (i, n) in values.iter().enumerate() {
        create_data_property_or_throw(&array, i.to_string(), JsValue::number(*n)).unwrap();
    }
    array
}

#[test]
fn test_sum_of_array() {
    let array = numbers(&[1.5, 2.5, 6.0]);
    let sum = collect(&array.into())
        .unwrap()
        .iter()
        .map(|v| to_number(v).unwrap())
        .sum::<f64>();
    assert_eq!(sum, 10.0);
}

#[test]
fn test_string_iterates_by_code_point() {
    let values = collect(&JsValue::string("a\u{1F600}b")).unwrap();
    assert_eq!(
        values,
        vec![
            JsValue::string("a"),
            JsValue::string("\u{1F600}"),
            JsValue::string("b"),
        ]
    );
}

#[test]
fn test_entries_pairs_are_arrays() {
    let array = numbers(&[7.0]);
    let entries = invoke(&array.into(), "entries", &[]).unwrap();
    let pairs = collect(&entries).unwrap();
    assert_eq!(pairs.len(), 1);
    let pair = pairs[0].as_object().unwrap();
    assert!(pair.is_array());
    assert_eq!(pair.get(&"0".into()), JsValue::number(0.0));
    assert_eq!(pair.get(&"1".into()), JsValue::number(7.0));
}

#[test]
fn test_iterator_of_iterator_is_itself() {
    let iterator = create_iterator_object(StringIterator::new("xy".to_string()));
    let again = get_iterator(&iterator).unwrap();
    assert!(again.ptr_eq(&iterator));
}

#[test]
fn test_rust_adapter_over_keys() {
    let array = numbers(&[9.0, 9.0, 9.0]);
    let keys: Vec<JsValue> = IteratorValues::new(ArrayIterator::keys(array))
        .collect::<JsResult<_>>()
        .unwrap();
    assert_eq!(
        keys,
        vec![JsValue::number(0.0), JsValue::number(1.0), JsValue::number(2.0)]
    );
}

#[test]
fn test_user_iterable_built_from_builtins() {
    // An object whose @@iterator hands out a fresh array iterator over a
    // list captured at construction.
    let backing = numbers(&[3.0, 4.0]);
    let source = JsObject::ordinary(Some(intrinsic(Intrinsic::ObjectPrototype)));
    source.set(
        WellKnownSymbol::Iterator,
        create_builtin_function(
            move |_, _| Ok(create_iterator_object(ArrayIterator::new(backing.clone())).into()),
            0,
            "[Symbol.iterator]",
        )
        .into(),
    );

    let iterator = get_iterator(&source).unwrap();
    let step = iterator_step(&iterator, None).unwrap().unwrap();
    assert_eq!(iterator_value(&step), JsValue::number(3.0));

    let rest = collect(&source.into()).unwrap();
    assert_eq!(rest, vec![JsValue::number(3.0), JsValue::number(4.0)]);
}

#[test]
fn test_array_constructor_then_to_string() {
    let array = call(
        &intrinsic(Intrinsic::Array).into(),
        &JsValue::Undefined,
        &[JsValue::string("a")],
    )
    .unwrap();
    assert_eq!(to_string(&array).unwrap(), "[object Array]");
}
