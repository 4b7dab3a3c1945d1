//! Host object model.
//!
//! Objects are reference-counted cells. A `JsObject` is a cheap handle whose
//! equality is identity; a `WeakObject` observes an object without keeping
//! it alive, which is what side tables keyed by object identity need.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{JsError, JsResult};
use crate::property_key::PropertyKey;
use crate::value::JsValue;

/// Native behaviour of a function object: `(this, arguments) -> completion`.
pub type NativeFunction = Rc<dyn Fn(&JsValue, &[JsValue]) -> JsResult<JsValue>>;

/// A data property and its attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// `[[Value]]`
    pub value: JsValue,
    /// `[[Writable]]`
    pub writable: bool,
    /// `[[Enumerable]]`
    pub enumerable: bool,
    /// `[[Configurable]]`
    pub configurable: bool,
}

impl Property {
    /// `{ [[Value]]: value, [[Writable]]: true, [[Enumerable]]: true, [[Configurable]]: true }`
    pub fn data(value: JsValue) -> Self {
        Property {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// A writable, configurable, non-enumerable property, the shape used for
    /// built-in methods.
    pub fn hidden(value: JsValue) -> Self {
        Property {
            value,
            writable: true,
            enumerable: false,
            configurable: true,
        }
    }

    /// A property with every attribute false.
    pub fn frozen(value: JsValue) -> Self {
        Property {
            value,
            writable: false,
            enumerable: false,
            configurable: false,
        }
    }
}

/// Internal function data
#[derive(Clone)]
pub struct FunctionData {
    /// The function implementation
    pub call: NativeFunction,
    /// Whether the function has a `[[Construct]]` internal method
    pub constructor: bool,
}

impl fmt::Debug for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionData")
            .field("constructor", &self.constructor)
            .finish_non_exhaustive()
    }
}

/// What sort of object this is, beyond its properties.
#[derive(Debug, Clone)]
pub enum ObjectKind {
    /// An ordinary object
    Ordinary,
    /// An Array exotic object
    Array,
    /// A function object
    Function(FunctionData),
}

/// Internal object data
#[derive(Debug)]
pub struct ObjectData {
    /// Own properties
    pub properties: HashMap<PropertyKey, Property>,
    /// `[[Prototype]]`
    pub prototype: Option<JsObject>,
    /// `[[Extensible]]`
    pub extensible: bool,
    /// Exotic behaviour, if any
    pub kind: ObjectKind,
}

/// A handle to a host object.
///
/// # Examples
///
/// ```
/// use core_types::{JsObject, JsValue};
///
/// let proto = JsObject::ordinary(None);
/// proto.set("inherited", JsValue::number(1.0));
///
/// let obj = JsObject::ordinary(Some(proto));
/// assert_eq!(obj.get(&"inherited".into()), JsValue::number(1.0));
/// assert!(!obj.has_own_property(&"inherited".into()));
/// ```
#[derive(Clone)]
pub struct JsObject {
    inner: Rc<RefCell<ObjectData>>,
}

impl JsObject {
    /// Create an object of the given kind.
    pub fn with_kind(prototype: Option<JsObject>, kind: ObjectKind) -> Self {
        JsObject {
            inner: Rc::new(RefCell::new(ObjectData {
                properties: HashMap::new(),
                prototype,
                extensible: true,
                kind,
            })),
        }
    }

    /// Create an ordinary object.
    pub fn ordinary(prototype: Option<JsObject>) -> Self {
        Self::with_kind(prototype, ObjectKind::Ordinary)
    }

    /// Create a function object backed by a native closure.
    pub fn function<F>(prototype: Option<JsObject>, constructor: bool, func: F) -> Self
    where
        F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
    {
        Self::with_kind(
            prototype,
            ObjectKind::Function(FunctionData {
                call: Rc::new(func),
                constructor,
            }),
        )
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &JsObject) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Address of the object, stable for as long as any strong or weak
    /// handle to it exists.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.inner) as *const () as usize
    }

    /// Create a weak handle that does not keep the object alive.
    pub fn downgrade(&self) -> WeakObject {
        WeakObject {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// `[[GetPrototypeOf]]`
    pub fn prototype(&self) -> Option<JsObject> {
        self.inner.borrow().prototype.clone()
    }

    /// `[[SetPrototypeOf]]` (ordinary). Returns false if the object is not
    /// extensible or the new prototype would create a cycle.
    pub fn set_prototype(&self, prototype: Option<JsObject>) -> bool {
        let current = self.prototype();
        let unchanged = match (&current, &prototype) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return true;
        }
        if !self.is_extensible() {
            return false;
        }
        let mut p = prototype.clone();
        while let Some(candidate) = p {
            if candidate.ptr_eq(self) {
                return false;
            }
            p = candidate.prototype();
        }
        self.inner.borrow_mut().prototype = prototype;
        true
    }

    /// `[[IsExtensible]]`
    pub fn is_extensible(&self) -> bool {
        self.inner.borrow().extensible
    }

    /// `[[PreventExtensions]]`
    pub fn prevent_extensions(&self) {
        self.inner.borrow_mut().extensible = false;
    }

    /// `[[GetOwnProperty]]`
    pub fn get_own_property(&self, key: &PropertyKey) -> Option<Property> {
        self.inner.borrow().properties.get(key).cloned()
    }

    /// Returns true if the object has an own property named `key`.
    pub fn has_own_property(&self, key: &PropertyKey) -> bool {
        self.inner.borrow().properties.contains_key(key)
    }

    /// `[[DefineOwnProperty]]` for data properties.
    ///
    /// A non-configurable property only accepts a redefinition that keeps it
    /// non-configurable, keeps its enumerability, and does not make a
    /// read-only property writable or change its value. Arrays additionally
    /// keep `length` one past their highest index.
    pub fn define_own_property(&self, key: PropertyKey, desc: Property) -> bool {
        if !self.is_array() {
            return self.ordinary_define_own_property(key, desc);
        }
        if key.as_str() == Some("length") {
            return self.array_set_length(desc);
        }
        let Some(index) = key.as_array_index() else {
            return self.ordinary_define_own_property(key, desc);
        };
        let length = self.get_own_property(&PropertyKey::from("length"));
        let (old_len, length_writable) = match &length {
            Some(prop) => (prop.value.as_number().unwrap_or(0.0), prop.writable),
            None => (0.0, true),
        };
        let index = f64::from(index);
        if index >= old_len && !length_writable {
            return false;
        }
        if !self.ordinary_define_own_property(key, desc) {
            return false;
        }
        if index >= old_len {
            let mut data = self.inner.borrow_mut();
            if let Some(prop) = data.properties.get_mut(&PropertyKey::from("length")) {
                prop.value = JsValue::Number(index + 1.0);
            }
        }
        true
    }

    fn ordinary_define_own_property(&self, key: PropertyKey, desc: Property) -> bool {
        let mut data = self.inner.borrow_mut();
        let current = data.properties.get(&key).cloned();
        match current {
            None if !data.extensible => false,
            Some(current) if !current.configurable => {
                if desc.configurable || desc.enumerable != current.enumerable {
                    return false;
                }
                if !current.writable && (desc.writable || !desc.value.same_value(&current.value)) {
                    return false;
                }
                data.properties.insert(key, desc);
                true
            }
            _ => {
                data.properties.insert(key, desc);
                true
            }
        }
    }

    /// ArraySetLength, minus the RangeError: a length that is not a valid
    /// uint32 is simply rejected. Shrinking deletes elements from the top
    /// down and stops at the first one that cannot be deleted.
    fn array_set_length(&self, desc: Property) -> bool {
        let new_len = match desc.value.as_number() {
            Some(n) if n >= 0.0 && n <= f64::from(u32::MAX) && n.fract() == 0.0 => n,
            _ => return false,
        };
        let length_key = PropertyKey::from("length");
        let current = self.get_own_property(&length_key);
        let old_len = current
            .as_ref()
            .and_then(|prop| prop.value.as_number())
            .unwrap_or(0.0);
        if new_len < old_len {
            // Validate the redefinition before deleting any element.
            let acceptable = match &current {
                Some(cur) => {
                    cur.writable
                        && (cur.configurable
                            || (!desc.configurable && desc.enumerable == cur.enumerable))
                }
                None => self.is_extensible(),
            };
            if !acceptable {
                return false;
            }
            let mut doomed: Vec<(u32, PropertyKey)> = self
                .own_property_keys()
                .into_iter()
                .filter_map(|k| k.as_array_index().map(|i| (i, k)))
                .filter(|(i, _)| f64::from(*i) >= new_len)
                .collect();
            doomed.sort_by(|a, b| b.0.cmp(&a.0));
            for (index, key) in doomed {
                if !self.delete(&key) {
                    let stuck = Property {
                        value: JsValue::Number(f64::from(index) + 1.0),
                        ..desc
                    };
                    let restored = self.ordinary_define_own_property(length_key, stuck);
                    assert!(restored, "array length could not be restored");
                    return false;
                }
            }
        }
        self.ordinary_define_own_property(
            length_key,
            Property {
                value: JsValue::Number(new_len),
                ..desc
            },
        )
    }

    /// The `length` of an Array exotic object; 0 for anything else.
    pub fn array_length(&self) -> u32 {
        if !self.is_array() {
            return 0;
        }
        self.get_own_property(&PropertyKey::from("length"))
            .and_then(|prop| prop.value.as_number())
            .map_or(0, |n| n as u32)
    }

    /// `[[Delete]]`
    pub fn delete(&self, key: &PropertyKey) -> bool {
        let mut data = self.inner.borrow_mut();
        let configurable = data.properties.get(key).map(|prop| prop.configurable);
        match configurable {
            None => true,
            Some(true) => {
                data.properties.remove(key);
                true
            }
            Some(false) => false,
        }
    }

    /// `[[Get]]`: walks the prototype chain; missing properties read as
    /// `undefined`.
    pub fn get(&self, key: &PropertyKey) -> JsValue {
        let mut current = Some(self.clone());
        while let Some(obj) = current {
            if let Some(prop) = obj.get_own_property(key) {
                return prop.value;
            }
            current = obj.prototype();
        }
        JsValue::Undefined
    }

    /// `[[HasProperty]]`: own or inherited.
    pub fn has_property(&self, key: &PropertyKey) -> bool {
        let mut current = Some(self.clone());
        while let Some(obj) = current {
            if obj.has_own_property(key) {
                return true;
            }
            current = obj.prototype();
        }
        false
    }

    /// `[[Set]]` with the object itself as receiver.
    ///
    /// Fails (returns false) when the property, own or inherited, is
    /// read-only, or when it would have to be created on a non-extensible
    /// object.
    pub fn set(&self, key: impl Into<PropertyKey>, value: JsValue) -> bool {
        let key = key.into();
        if let Some(own) = self.get_own_property(&key) {
            if !own.writable {
                return false;
            }
            return self.define_own_property(key, Property { value, ..own });
        }
        let mut proto = self.prototype();
        while let Some(obj) = proto {
            if let Some(inherited) = obj.get_own_property(&key) {
                if !inherited.writable {
                    return false;
                }
                break;
            }
            proto = obj.prototype();
        }
        self.define_own_property(key, Property::data(value))
    }

    /// All own property keys, unordered.
    pub fn own_property_keys(&self) -> Vec<PropertyKey> {
        self.inner.borrow().properties.keys().cloned().collect()
    }

    /// Returns true if this is a function object.
    pub fn is_callable(&self) -> bool {
        matches!(self.inner.borrow().kind, ObjectKind::Function(_))
    }

    /// Returns true if this function object has `[[Construct]]`.
    pub fn is_constructor(&self) -> bool {
        matches!(
            &self.inner.borrow().kind,
            ObjectKind::Function(FunctionData {
                constructor: true,
                ..
            })
        )
    }

    /// Returns true if this is an Array exotic object.
    pub fn is_array(&self) -> bool {
        matches!(self.inner.borrow().kind, ObjectKind::Array)
    }

    /// `[[Call]]`
    ///
    /// The closure is cloned out of the cell before it runs, so the callee
    /// is free to read and mutate this very object.
    pub fn call(&self, this: &JsValue, args: &[JsValue]) -> JsResult<JsValue> {
        let func = match &self.inner.borrow().kind {
            ObjectKind::Function(data) => Rc::clone(&data.call),
            _ => return Err(JsError::type_error("object is not a function")),
        };
        func(this, args)
    }
}

impl PartialEq for JsObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for JsObject {}

impl fmt::Debug for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.inner.try_borrow() {
            Ok(data) => match data.kind {
                ObjectKind::Ordinary => "Ordinary",
                ObjectKind::Array => "Array",
                ObjectKind::Function(_) => "Function",
            },
            Err(_) => "<borrowed>",
        };
        write!(f, "JsObject({kind}@{:#x})", self.identity())
    }
}

/// A non-owning handle to a host object.
#[derive(Clone)]
pub struct WeakObject {
    inner: Weak<RefCell<ObjectData>>,
}

impl WeakObject {
    /// Returns the object if it is still alive.
    pub fn upgrade(&self) -> Option<JsObject> {
        self.inner.upgrade().map(|inner| JsObject { inner })
    }

    /// Returns true if the object is still alive.
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Returns true if this handle observes `obj`.
    pub fn refers_to(&self, obj: &JsObject) -> bool {
        std::ptr::eq(self.inner.as_ptr(), Rc::as_ptr(&obj.inner))
    }
}

impl fmt::Debug for WeakObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeakObject(alive: {})", self.is_alive())
    }
}
