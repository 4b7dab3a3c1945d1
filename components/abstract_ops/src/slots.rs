//! Internal slot emulation.
//!
//! Host objects have no notion of internal slots, so slot state lives in a
//! side table keyed by object identity. Each entry holds only a weak handle
//! to its subject: the table never keeps an object alive, and entries for
//! collected objects are dropped lazily.
//!
//! Slot values are held strongly. A slot whose value refers back to its own
//! subject keeps that subject alive for as long as the entry exists.

use std::collections::HashMap;
use std::fmt;

use core_types::{JsObject, JsValue, WeakObject};
use thiserror::Error;
use tracing::{debug, trace};

/// Entries are pruned once the table reaches this size, then whenever it
/// doubles past the live count.
const MIN_PRUNE_THRESHOLD: usize = 64;

/// The value held in an internal slot.
///
/// Slots start out [`SlotValue::Unset`]; the sentinel is distinct from every
/// language value, including `undefined`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SlotValue {
    /// The slot has not been written since it was created
    #[default]
    Unset,
    /// The slot holds a language value
    Value(JsValue),
}

impl SlotValue {
    /// Returns true for the unset sentinel.
    pub fn is_unset(&self) -> bool {
        matches!(self, SlotValue::Unset)
    }

    /// The held value, if the slot has been written.
    pub fn as_value(&self) -> Option<&JsValue> {
        match self {
            SlotValue::Unset => None,
            SlotValue::Value(v) => Some(v),
        }
    }

    /// The held value, reading an unset slot as `undefined`.
    pub fn into_value(self) -> JsValue {
        match self {
            SlotValue::Unset => JsValue::Undefined,
            SlotValue::Value(v) => v,
        }
    }
}

impl From<JsValue> for SlotValue {
    fn from(v: JsValue) -> Self {
        SlotValue::Value(v)
    }
}

impl From<JsObject> for SlotValue {
    fn from(obj: JsObject) -> Self {
        SlotValue::Value(JsValue::Object(obj))
    }
}

impl From<f64> for SlotValue {
    fn from(n: f64) -> Self {
        SlotValue::Value(JsValue::Number(n))
    }
}

impl From<bool> for SlotValue {
    fn from(b: bool) -> Self {
        SlotValue::Value(JsValue::Boolean(b))
    }
}

/// Misuse of the slot table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// `create` was called twice for one subject
    #[error("internal slots have already been created for this object")]
    AlreadyInitialized,
    /// The subject never had slots created
    #[error("no internal slots have been created for this object")]
    NoSlots,
    /// The subject has slots, but not this one
    #[error("object has no internal slot named {0}")]
    UnknownSlot(String),
}

struct SlotEntry {
    subject: WeakObject,
    slots: HashMap<String, SlotValue>,
}

impl SlotEntry {
    fn belongs_to(&self, subject: &JsObject) -> bool {
        self.subject.is_alive() && self.subject.refers_to(subject)
    }
}

/// Side table associating a bag of named slots with objects.
///
/// # Examples
///
/// ```
/// use abstract_ops::slots::{SlotRegistry, SlotValue};
/// use core_types::{JsObject, JsValue};
///
/// let mut registry = SlotRegistry::new();
/// let o = JsObject::ordinary(None);
///
/// registry.create(&o, &["[[a]]", "[[b]]"]).unwrap();
/// registry.set(&o, "[[a]]", JsValue::number(1.0).into()).unwrap();
///
/// assert_eq!(registry.get(&o, "[[a]]").unwrap(), SlotValue::Value(JsValue::number(1.0)));
/// assert!(registry.get(&o, "[[b]]").unwrap().is_unset());
/// assert!(!registry.has(&o, "[[c]]"));
/// ```
pub struct SlotRegistry {
    entries: HashMap<usize, SlotEntry>,
    prune_at: usize,
}

impl SlotRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        SlotRegistry {
            entries: HashMap::new(),
            prune_at: MIN_PRUNE_THRESHOLD,
        }
    }

    fn entry(&self, subject: &JsObject) -> Option<&SlotEntry> {
        self.entries
            .get(&subject.identity())
            .filter(|entry| entry.belongs_to(subject))
    }

    fn entry_mut(&mut self, subject: &JsObject) -> Option<&mut SlotEntry> {
        self.entries
            .get_mut(&subject.identity())
            .filter(|entry| entry.belongs_to(subject))
    }

    /// Give `subject` a fresh bag with every name unset.
    ///
    /// Duplicate names collapse into one slot.
    pub fn create(&mut self, subject: &JsObject, names: &[&str]) -> Result<(), SlotError> {
        if self.entry(subject).is_some() {
            return Err(SlotError::AlreadyInitialized);
        }
        if self.entries.len() >= self.prune_at {
            self.prune();
            self.prune_at = (self.entries.len() * 2).max(MIN_PRUNE_THRESHOLD);
        }
        let slots = names
            .iter()
            .map(|name| (name.to_string(), SlotValue::Unset))
            .collect();
        self.entries.insert(
            subject.identity(),
            SlotEntry {
                subject: subject.downgrade(),
                slots,
            },
        );
        debug!(slots = ?names, "created internal slots");
        Ok(())
    }

    /// Read a slot.
    pub fn get(&self, subject: &JsObject, name: &str) -> Result<SlotValue, SlotError> {
        let entry = self.entry(subject).ok_or(SlotError::NoSlots)?;
        entry
            .slots
            .get(name)
            .cloned()
            .ok_or_else(|| SlotError::UnknownSlot(name.to_string()))
    }

    /// Overwrite a slot.
    pub fn set(&mut self, subject: &JsObject, name: &str, value: SlotValue) -> Result<(), SlotError> {
        let entry = self.entry_mut(subject).ok_or(SlotError::NoSlots)?;
        match entry.slots.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SlotError::UnknownSlot(name.to_string())),
        }
    }

    /// Returns true if `subject` has a slot called `name`. Never fails.
    pub fn has(&self, subject: &JsObject, name: &str) -> bool {
        self.entry(subject)
            .is_some_and(|entry| entry.slots.contains_key(name))
    }

    /// Drop every entry whose subject has been collected.
    ///
    /// # Returns
    ///
    /// The number of entries removed.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.subject.is_alive());
        let removed = before - self.entries.len();
        trace!(removed, remaining = self.entries.len(), "pruned slot table");
        removed
    }

    /// Number of entries, including ones whose subject is gone but which
    /// have not been pruned yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SlotRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}
