//! Contract compliance tests for abstract_ops
//!
//! Exercises the public surface the way a host would: slots on arbitrary
//! objects, iteration of host-defined iterables, jobs on a caller-owned
//! scheduler.

use std::cell::Cell;
use std::rc::Rc;

use abstract_ops::intrinsics::create_builtin_function;
use abstract_ops::iteration::{create_iter_result_object, ListIterator};
use abstract_ops::{
    enqueue_job, get_iterator, get_slot, has_slot, iterator_complete, iterator_step,
    iterator_value, make_slots, set_slot, IteratorValues, SlotValue,
};
use async_runtime::{EventLoop, SCRIPT_JOBS};
use core_types::{JsObject, JsValue, WellKnownSymbol};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// `{ [Symbol.iterator]() { return hook() } }`
fn iterable_with_hook<F>(hook: F) -> JsObject
where
    F: Fn() -> JsValue + 'static,
{
    let o = JsObject::ordinary(None);
    o.set(
        WellKnownSymbol::Iterator,
        create_builtin_function(move |_, _| Ok(hook()), 0, "[Symbol.iterator]").into(),
    );
    o
}

#[cfg(test)]
mod slot_contract_tests {
    use super::*;

    #[test]
    fn test_slot_scenario() {
        init_tracing();
        let o = JsObject::ordinary(None);
        make_slots(&o, &["[[A]]", "[[B]]"]);
        set_slot(&o, "[[A]]", JsValue::number(1.0));
        assert_eq!(get_slot(&o, "[[A]]"), SlotValue::Value(JsValue::number(1.0)));
        assert_eq!(get_slot(&o, "[[B]]"), SlotValue::Unset);
        assert!(!has_slot(&o, "[[C]]"));
    }

    #[test]
    #[should_panic(expected = "assertion failure")]
    fn test_second_make_slots() {
        let o = JsObject::ordinary(None);
        make_slots(&o, &["[[A]]"]);
        make_slots(&o, &["[[B]]"]);
    }

    #[test]
    #[should_panic(expected = "assertion failure")]
    fn test_read_without_bag() {
        get_slot(&JsObject::ordinary(None), "[[A]]");
    }

    #[test]
    #[should_panic(expected = "assertion failure")]
    fn test_write_without_bag() {
        set_slot(&JsObject::ordinary(None), "[[A]]", JsValue::Null);
    }

    #[test]
    #[should_panic(expected = "assertion failure")]
    fn test_read_unknown_name() {
        let o = JsObject::ordinary(None);
        make_slots(&o, &["[[A]]"]);
        get_slot(&o, "[[Z]]");
    }

    #[test]
    #[should_panic(expected = "assertion failure")]
    fn test_write_unknown_name() {
        let o = JsObject::ordinary(None);
        make_slots(&o, &["[[A]]"]);
        set_slot(&o, "[[Z]]", JsValue::Null);
    }

    #[test]
    fn test_slots_are_per_object() {
        let a = JsObject::ordinary(None);
        let b = JsObject::ordinary(None);
        make_slots(&a, &["[[X]]"]);
        make_slots(&b, &["[[X]]"]);
        set_slot(&a, "[[X]]", JsValue::string("a"));
        assert!(get_slot(&b, "[[X]]").is_unset());
    }
}

#[cfg(test)]
mod iterator_contract_tests {
    use super::*;

    #[test]
    fn test_completion_and_value_of_step_results() {
        let empty = JsObject::ordinary(None);
        assert!(!iterator_complete(&empty));
        assert_eq!(iterator_value(&empty), JsValue::Undefined);

        let truthy = JsObject::ordinary(None);
        truthy.set("done", JsValue::number(1.0));
        assert!(iterator_complete(&truthy));

        let with_value = create_iter_result_object(JsValue::string("x"), false);
        assert_eq!(iterator_value(&with_value), JsValue::string("x"));
    }

    #[test]
    fn test_stepping_scenario() {
        init_tracing();
        let source = iterable_with_hook(|| {
            abstract_ops::iteration::create_iterator_object(ListIterator::new(vec![
                JsValue::number(1.0),
                JsValue::number(2.0),
            ]))
            .into()
        });
        let iterator = get_iterator(&source).unwrap();
        let first = iterator_step(&iterator, None).unwrap().unwrap();
        assert_eq!(iterator_value(&first), JsValue::number(1.0));
        let second = iterator_step(&iterator, None).unwrap().unwrap();
        assert_eq!(iterator_value(&second), JsValue::number(2.0));
        assert!(iterator_step(&iterator, None).unwrap().is_none());
    }

    #[test]
    fn test_missing_hook_is_type_error() {
        let err = get_iterator(&JsObject::ordinary(None)).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn test_hook_returning_primitive_is_type_error() {
        let source = iterable_with_hook(|| JsValue::number(42.0));
        assert!(get_iterator(&source).unwrap_err().is_type_error());
    }

    #[test]
    fn test_step_result_must_be_object() {
        let iterator = JsObject::ordinary(None);
        iterator.set(
            "next",
            create_builtin_function(|_, _| Ok(JsValue::boolean(true)), 0, "next").into(),
        );
        assert!(iterator_step(&iterator, None).unwrap_err().is_type_error());
    }

    #[test]
    fn test_adapter_stops_after_error() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let iterator = JsObject::ordinary(None);
        iterator.set(
            "next",
            create_builtin_function(
                move |_, _| {
                    counter.set(counter.get() + 1);
                    Ok(JsValue::Null)
                },
                0,
                "next",
            )
            .into(),
        );
        let mut values = IteratorValues::new(iterator);
        assert!(values.next().unwrap().is_err());
        assert!(values.next().is_none());
        assert_eq!(calls.get(), 1);
    }
}

#[cfg(test)]
mod job_contract_tests {
    use super::*;

    #[test]
    fn test_jobs_drain_in_order_on_event_loop() {
        init_tracing();
        let event_loop = EventLoop::new();
        let total = Rc::new(Cell::new(0.0));
        for n in [1.0, 2.0, 3.0] {
            let total = total.clone();
            let job = create_builtin_function(
                move |_, args| {
                    total.set(total.get() * 10.0 + args[0].as_number().unwrap_or(0.0));
                    Ok(JsValue::Undefined)
                },
                1,
                "job",
            );
            enqueue_job(&event_loop, SCRIPT_JOBS, &job.into(), vec![JsValue::number(n)]);
        }
        assert_eq!(total.get(), 0.0);
        assert_eq!(event_loop.run_until_done().unwrap(), 3);
        assert_eq!(total.get(), 123.0);
    }
}
