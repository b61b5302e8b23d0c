//! Instances: a class handle plus the per-instance key/value backing store.

use std::collections::BTreeMap;
use std::rc::Rc;

use quipu_core::Value;

use crate::class::Class;
use crate::errors::AccessorError;

/// Named constructor arguments.
pub type ArgMap = BTreeMap<String, Value>;

/// A constructed object.
///
/// All state lives in the backing store: declared fields and ad-hoc keys
/// captured at construction share the same map, keyed by name. The
/// `*_raw` operations are the store surface the host framework exposes;
/// generated accessors go through [`Instance::call`] instead.
pub struct Instance {
    class: Rc<Class>,
    store: BTreeMap<String, Value>,
}

impl Instance {
    pub(crate) fn bare(class: Rc<Class>) -> Self {
        Self {
            class,
            store: BTreeMap::new(),
        }
    }

    /// Return the class this instance was constructed from.
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Invoke the method `name` from the class's method table.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value, AccessorError> {
        let Some(method) = self.class.method(name).cloned() else {
            return Err(AccessorError::UnknownMethod {
                class: self.class.name().to_string(),
                method: name.to_string(),
            });
        };
        method.invoke(self, args)
    }

    /// Return true if the backing store holds `key`.
    pub fn has_raw(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    /// Read `key` directly from the backing store.
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.store.get(key)
    }

    /// Write `key` directly into the backing store.
    pub fn set_raw(&mut self, key: impl Into<String>, value: Value) {
        self.store.insert(key.into(), value);
    }

    /// Iterate over the backing store's keys, in sorted order.
    pub fn raw_keys(&self) -> impl Iterator<Item = &str> {
        self.store.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calling_an_unknown_method_reports_class_and_name() {
        let class = Rc::new(Class::new("Empty"));
        let mut instance = class.instantiate(&ArgMap::new()).expect("construct");

        let err = instance.call("missing", &[]).expect_err("must fail");
        assert!(matches!(
            err,
            AccessorError::UnknownMethod { ref class, ref method }
                if class == "Empty" && method == "missing"
        ));
    }

    #[test]
    fn raw_store_roundtrips() {
        let class = Rc::new(Class::new("Bag"));
        let mut instance = class.instantiate(&ArgMap::new()).expect("construct");

        assert!(!instance.has_raw("k"));
        instance.set_raw("k", Value::Str("v".to_string()));
        assert!(instance.has_raw("k"));
        assert_eq!(instance.get_raw("k"), Some(&Value::Str("v".to_string())));
        assert_eq!(instance.raw_keys().collect::<Vec<_>>(), vec!["k"]);
    }
}
