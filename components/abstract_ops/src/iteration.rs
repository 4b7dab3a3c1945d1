//! ## [7.4 Operations on Iterator Objects](https://tc39.es/ecma262/#sec-operations-on-iterator-objects)
//!
//! Iteration is expressed through two capabilities. An [`Iterable`] can hand
//! out an iterator; an [`IteratorProtocol`] produces step results when asked.
//! Host objects have both through their `@@iterator` and `next` methods, and
//! Rust producers can be exposed to host code with
//! [`create_iterator_object`].
//!
//! One iterator is obtained per traversal and it alone owns the cursor. The
//! free functions here are stateless go-betweens: they validate step results
//! and interpret them, nothing more.
//!
//! ```
//! use abstract_ops::iteration::{create_iterator_object, iterate, ListIterator};
//! use core_types::JsValue;
//!
//! let iterator = create_iterator_object(ListIterator::new(vec![
//!     JsValue::number(1.0),
//!     JsValue::number(2.0),
//! ]));
//! let values: Vec<JsValue> = iterate(&JsValue::from(iterator))
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(values, vec![JsValue::number(1.0), JsValue::number(2.0)]);
//! ```

use std::cell::Cell;
use std::iter::FusedIterator;
use std::rc::Rc;

use core_types::{
    number_to_string, JsError, JsObject, JsResult, JsValue, PropertyKey, WellKnownSymbol,
};
use tracing::trace;

use crate::intrinsics::{create_builtin_function, intrinsic, Intrinsic};
use crate::meta::define_built_in_data_property;
use crate::objects::{array_create, create_data_property, get, get_method, invoke};
use crate::type_conversion::{to_boolean, to_length};

/// Something that can be asked for the next step result.
///
/// `next` returns the raw step result; [`iterator_next`] is what checks that
/// it is an object.
pub trait IteratorProtocol {
    /// Advance, optionally passing `value` to the producer.
    fn next(&self, value: Option<JsValue>) -> JsResult<JsValue>;
}

/// Something an iterator can be obtained from.
pub trait Iterable {
    /// The iterator handed out.
    type Iter: IteratorProtocol;

    /// Obtain a fresh iterator.
    fn get_iterator(&self) -> JsResult<Self::Iter>;
}

/// A host iterator: its `next` method is invoked with the object as `this`.
/// A missing or uncallable `next` is a TypeError.
impl IteratorProtocol for JsObject {
    fn next(&self, value: Option<JsValue>) -> JsResult<JsValue> {
        let args: Vec<JsValue> = value.into_iter().collect();
        invoke(&JsValue::Object(self.clone()), "next", &args)
    }
}

/// Any value with a callable `@@iterator` method that returns an object.
impl Iterable for JsValue {
    type Iter = JsObject;

    fn get_iterator(&self) -> JsResult<JsObject> {
        let method = get_method(self, WellKnownSymbol::Iterator)?.ok_or_else(|| {
            JsError::type_error(format!("{} is not iterable", self.value_type()))
        })?;
        match method.call(self, &[])? {
            JsValue::Object(iterator) => Ok(iterator),
            _ => Err(JsError::type_error(
                "Result of the Symbol.iterator method is not an object",
            )),
        }
    }
}

impl Iterable for JsObject {
    type Iter = JsObject;

    fn get_iterator(&self) -> JsResult<JsObject> {
        JsValue::Object(self.clone()).get_iterator()
    }
}

/// ### [7.4.3 GetIterator ( obj, kind )](https://tc39.es/ecma262/#sec-getiterator)
pub fn get_iterator<T: Iterable + ?Sized>(source: &T) -> JsResult<T::Iter> {
    source.get_iterator()
}

/// ### [7.4.4 IteratorNext ( iteratorRecord \[ , value \] )](https://tc39.es/ecma262/#sec-iteratornext)
///
/// Fails with a TypeError if the step result is not an object.
pub fn iterator_next<I: IteratorProtocol + ?Sized>(
    iterator: &I,
    value: Option<JsValue>,
) -> JsResult<JsObject> {
    match iterator.next(value)? {
        JsValue::Object(result) => Ok(result),
        other => Err(JsError::type_error(format!(
            "Iterator result {} is not an object",
            other.value_type()
        ))),
    }
}

/// ### [7.4.5 IteratorComplete ( iterResult )](https://tc39.es/ecma262/#sec-iteratorcomplete)
///
/// `done` goes through ToBoolean, so `1` completes and a missing `done`
/// does not.
pub fn iterator_complete(iter_result: &JsObject) -> bool {
    to_boolean(&get(iter_result, "done"))
}

/// ### [7.4.6 IteratorValue ( iterResult )](https://tc39.es/ecma262/#sec-iteratorvalue)
///
/// A missing `value` reads as `undefined`.
pub fn iterator_value(iter_result: &JsObject) -> JsValue {
    get(iter_result, "value")
}

/// ### [7.4.7 IteratorStep ( iteratorRecord )](https://tc39.es/ecma262/#sec-iteratorstep)
///
/// `Ok(None)` once the iterator reports completion. Nothing stops a caller
/// from stepping again afterwards; what happens then is up to the iterator.
pub fn iterator_step<I: IteratorProtocol + ?Sized>(
    iterator: &I,
    value: Option<JsValue>,
) -> JsResult<Option<JsObject>> {
    let result = iterator_next(iterator, value)?;
    if iterator_complete(&result) {
        return Ok(None);
    }
    Ok(Some(result))
}

/// ### [7.4.14 CreateIterResultObject ( value, done )](https://tc39.es/ecma262/#sec-createiterresultobject)
pub fn create_iter_result_object(value: JsValue, done: bool) -> JsObject {
    let obj = JsObject::ordinary(Some(intrinsic(Intrinsic::ObjectPrototype)));
    create_data_property(&obj, "value", value);
    create_data_property(&obj, "done", JsValue::Boolean(done));
    obj
}

/// Expose a Rust producer as a host iterator object.
///
/// The object inherits from `%IteratorPrototype%`, so its `@@iterator`
/// returns itself, and has an own `next` method that forwards to
/// `producer`.
pub fn create_iterator_object<P: IteratorProtocol + 'static>(producer: P) -> JsObject {
    let producer = Rc::new(producer);
    let iterator = JsObject::ordinary(Some(intrinsic(Intrinsic::IteratorPrototype)));
    let next = create_builtin_function(
        move |_, args| producer.next(args.first().cloned()),
        0,
        "next",
    );
    define_built_in_data_property(&iterator, "next", next.into());
    iterator
}

/// Pulls values lazily until the iterator completes or fails.
///
/// After the end signal or the first error the adapter yields nothing more
/// and stops calling the iterator.
pub struct IteratorValues<I> {
    iterator: I,
    finished: bool,
}

impl<I: IteratorProtocol> IteratorValues<I> {
    /// Drive `iterator` from its current position.
    pub fn new(iterator: I) -> Self {
        IteratorValues {
            iterator,
            finished: false,
        }
    }

    /// The underlying iterator.
    pub fn into_inner(self) -> I {
        self.iterator
    }
}

impl<I: IteratorProtocol> Iterator for IteratorValues<I> {
    type Item = JsResult<JsValue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match iterator_step(&self.iterator, None) {
            Ok(Some(result)) => Some(Ok(iterator_value(&result))),
            Ok(None) => {
                trace!("iteration complete");
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<I: IteratorProtocol> FusedIterator for IteratorValues<I> {}

/// Obtain an iterator from `source` and wrap it for `for`-loop consumption.
pub fn iterate<T: Iterable + ?Sized>(source: &T) -> JsResult<IteratorValues<T::Iter>> {
    Ok(IteratorValues::new(get_iterator(source)?))
}

/// A producer over a fixed list of values.
#[derive(Debug)]
pub struct ListIterator {
    values: Vec<JsValue>,
    index: Cell<usize>,
}

impl ListIterator {
    /// Iterate over `values` in order.
    pub fn new(values: Vec<JsValue>) -> Self {
        ListIterator {
            values,
            index: Cell::new(0),
        }
    }
}

impl IteratorProtocol for ListIterator {
    fn next(&self, _value: Option<JsValue>) -> JsResult<JsValue> {
        let index = self.index.get();
        let result = match self.values.get(index) {
            Some(value) => {
                self.index.set(index + 1);
                create_iter_result_object(value.clone(), false)
            }
            None => create_iter_result_object(JsValue::Undefined, true),
        };
        Ok(result.into())
    }
}

/// Kind of array iterator (keys, values, or entries)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorKind {
    /// Iterate over keys (indices)
    Keys,
    /// Iterate over values
    Values,
    /// Iterate over [key, value] pairs
    Entries,
}

/// ### [23.1.5.1 CreateArrayIterator ( array, kind )](https://tc39.es/ecma262/#sec-createarrayiterator)
///
/// Reads `length` afresh on every step, so elements appended during
/// iteration are visited. Once exhausted it stays exhausted.
#[derive(Debug)]
pub struct ArrayIterator {
    array: JsObject,
    index: Cell<f64>,
    exhausted: Cell<bool>,
    kind: IteratorKind,
}

impl ArrayIterator {
    /// Create a new array iterator for values
    pub fn new(array: JsObject) -> Self {
        Self::with_kind(array, IteratorKind::Values)
    }

    /// Create an iterator for keys
    pub fn keys(array: JsObject) -> Self {
        Self::with_kind(array, IteratorKind::Keys)
    }

    /// Create an iterator for entries
    pub fn entries(array: JsObject) -> Self {
        Self::with_kind(array, IteratorKind::Entries)
    }

    fn with_kind(array: JsObject, kind: IteratorKind) -> Self {
        ArrayIterator {
            array,
            index: Cell::new(0.0),
            exhausted: Cell::new(false),
            kind,
        }
    }
}

impl IteratorProtocol for ArrayIterator {
    fn next(&self, _value: Option<JsValue>) -> JsResult<JsValue> {
        if self.exhausted.get() {
            return Ok(create_iter_result_object(JsValue::Undefined, true).into());
        }
        let len = to_length(&get(&self.array, "length"))?;
        let index = self.index.get();
        if index >= len {
            self.exhausted.set(true);
            return Ok(create_iter_result_object(JsValue::Undefined, true).into());
        }
        self.index.set(index + 1.0);

        let key = PropertyKey::from(number_to_string(index));
        let result = match self.kind {
            IteratorKind::Keys => JsValue::Number(index),
            IteratorKind::Values => get(&self.array, key),
            IteratorKind::Entries => {
                let entry = array_create(2.0, None)?;
                create_data_property(&entry, "0", JsValue::Number(index));
                create_data_property(&entry, "1", get(&self.array, key));
                entry.into()
            }
        };
        Ok(create_iter_result_object(result, false).into())
    }
}

/// ### [22.1.5.1 CreateStringIterator ( string )](https://tc39.es/ecma262/#sec-createstringiterator)
///
/// Yields one code point at a time.
#[derive(Debug)]
pub struct StringIterator {
    string: String,
    position: Cell<usize>,
}

impl StringIterator {
    /// Create a new string iterator
    pub fn new(string: String) -> Self {
        StringIterator {
            string,
            position: Cell::new(0),
        }
    }
}

impl IteratorProtocol for StringIterator {
    fn next(&self, _value: Option<JsValue>) -> JsResult<JsValue> {
        let position = self.position.get();
        let result = match self.string[position..].chars().next() {
            Some(c) => {
                self.position.set(position + c.len_utf8());
                create_iter_result_object(JsValue::String(c.to_string()), false)
            }
            None => create_iter_result_object(JsValue::Undefined, true),
        };
        Ok(result.into())
    }
}
