//! ECMAScript abstract operations.
//!
//! Small, individually testable building blocks named after the operations
//! in the language specification, written against the host object model in
//! `core_types`.
//!
//! # Overview
//!
//! - [`meta`] - assertions and emulated internal slots ([`slots`] holds the
//!   side table itself)
//! - [`iteration`] - the iterator protocol: obtaining, stepping and
//!   interpreting iterators
//! - [`type_conversion`] - ToBoolean, ToNumber, ToString, ToObject, ...
//! - [`testing`] - Type, IsCallable, SameValue, ...
//! - [`objects`] - Get, Call, Invoke, ArrayCreate, SpeciesConstructor, ...
//! - [`intrinsics`] - the per-thread realm of well-known objects
//! - [`jobs`] - EnqueueJob on a host-supplied scheduler
//! - [`math`] and [`date_time`] - numeric helpers and date arithmetic
//!
//! # Errors
//!
//! Two tiers. Contract violations (reading a slot that was never created,
//! enqueueing an uncallable job) panic with a message containing
//! "Specification-level assertion failure"; they are bugs in the caller.
//! Protocol errors that well-formed callers must be ready for (a value
//! that is not iterable, a step result that is not an object) come back as
//! [`core_types::JsError`].
//!
//! # Examples
//!
//! ```
//! use abstract_ops::iteration::{get_iterator, iterator_step, iterator_value};
//! use abstract_ops::meta::{get_slot, has_slot, make_slots, set_slot};
//! use abstract_ops::objects::array_create;
//! use core_types::JsValue;
//!
//! let o = array_create(0.0, None).unwrap();
//! make_slots(&o, &["[[Tag]]"]);
//! set_slot(&o, "[[Tag]]", JsValue::string("tagged"));
//! assert_eq!(get_slot(&o, "[[Tag]]").into_value(), JsValue::string("tagged"));
//! assert!(!has_slot(&o, "[[Other]]"));
//!
//! o.set("0", JsValue::number(10.0));
//! let iterator = get_iterator(&o).unwrap();
//! let step = iterator_step(&iterator, None).unwrap().unwrap();
//! assert_eq!(iterator_value(&step), JsValue::number(10.0));
//! assert!(iterator_step(&iterator, None).unwrap().is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod date_time;
pub mod intrinsics;
pub mod iteration;
pub mod jobs;
pub mod math;
pub mod meta;
pub mod objects;
pub mod slots;
pub mod testing;
pub mod type_conversion;

pub use intrinsics::{intrinsic, Intrinsic};
pub use iteration::{
    get_iterator, iterator_complete, iterator_next, iterator_step, iterator_value, Iterable,
    IteratorProtocol, IteratorValues,
};
pub use jobs::{enqueue_job, enqueue_native_job};
pub use meta::{assert, get_slot, has_slot, make_slots, set_slot};
pub use slots::{SlotError, SlotRegistry, SlotValue};
