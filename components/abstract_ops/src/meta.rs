//! Meta-level operations: things the specification only describes in prose.
//!
//! Assertions and internal-slot bookkeeping live here. Both treat misuse as
//! a bug in the calling code and panic rather than returning an error;
//! [`has_slot`] is the one probe that is safe to call speculatively.

use std::cell::RefCell;
use std::fmt::Display;

use core_types::{JsObject, JsValue, Property, PropertyKey};

use crate::slots::{SlotRegistry, SlotValue};

thread_local! {
    static SLOTS: RefCell<SlotRegistry> = RefCell::new(SlotRegistry::new());
}

/// Abort with a specification-level assertion failure.
#[track_caller]
pub fn assertion_failure(what: impl Display) -> ! {
    panic!("Specification-level assertion failure: {what}")
}

/// [Algorithm conventions: Assert](https://tc39.es/ecma262/#sec-algorithm-conventions)
///
/// ```should_panic
/// abstract_ops::meta::assert(1 + 1 == 3, "arithmetic");
/// ```
#[track_caller]
pub fn assert(condition: bool, what: &str) {
    if !condition {
        assertion_failure(what);
    }
}

/// Create the internal slots `names` on `obj`, each unset.
///
/// Panics if `obj` already has slots.
#[track_caller]
pub fn make_slots(obj: &JsObject, names: &[&str]) {
    if let Err(err) = SLOTS.with(|slots| slots.borrow_mut().create(obj, names)) {
        assertion_failure(err);
    }
}

/// Read the internal slot `name` of `obj`.
///
/// Panics if `obj` has no slots or no slot called `name`.
#[track_caller]
pub fn get_slot(obj: &JsObject, name: &str) -> SlotValue {
    SLOTS
        .with(|slots| slots.borrow().get(obj, name))
        .unwrap_or_else(|err| assertion_failure(err))
}

/// Overwrite the internal slot `name` of `obj`.
///
/// Panics if `obj` has no slots or no slot called `name`.
#[track_caller]
pub fn set_slot(obj: &JsObject, name: &str, value: impl Into<SlotValue>) {
    let value = value.into();
    if let Err(err) = SLOTS.with(|slots| slots.borrow_mut().set(obj, name, value)) {
        assertion_failure(err);
    }
}

/// Returns true if `obj` has an internal slot called `name`. Never panics.
pub fn has_slot(obj: &JsObject, name: &str) -> bool {
    SLOTS.with(|slots| slots.borrow().has(obj, name))
}

/// Drop slot bags whose objects have been collected from this thread's
/// table, returning how many were removed.
pub fn prune_slots() -> usize {
    SLOTS.with(|slots| slots.borrow_mut().prune())
}

/// [Standard built-in objects](https://tc39.es/ecma262/#sec-ecmascript-standard-built-in-objects):
/// define `key` as `{ [[Writable]]: true, [[Enumerable]]: false, [[Configurable]]: true }`.
pub fn define_built_in_data_property(obj: &JsObject, key: impl Into<PropertyKey>, value: JsValue) {
    let defined = obj.define_own_property(key.into(), Property::hidden(value));
    assert(defined, "built-in data property could not be defined");
}
