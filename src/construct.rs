//! Two-phase construction: declared-field population, then unknown-key capture.
//!
//! The legacy behavior being emulated favors acceptance over validation:
//! constructor arguments that match no declared field are still written into
//! the instance's backing store, so construction never fails merely because
//! the caller supplied an extra key.

use crate::class::{BuildHook, Class};
use crate::host;

/// The build hook every class starts with: populate each declared field
/// whose name appears in the constructor arguments.
///
/// Read-only and write-only fields are initializable here like any other;
/// mode restrictions apply to the public accessor surface, not to
/// construction.
pub(crate) fn default_build_hook() -> BuildHook {
    BuildHook::new(|receiver, args| {
        let declared: Vec<String> = receiver
            .class()
            .fields()
            .map(|spec| spec.name.clone())
            .collect();
        for name in declared {
            if let Some(value) = args.get(&name) {
                receiver.set_raw(name, value.clone());
            }
        }
        Ok(())
    })
}

/// Wrap the class's construction hook so that, after normal field
/// population, argument keys not yet retrievable on the instance are written
/// directly into its backing store.
///
/// Installed once per class; subsequent calls are no-ops.
pub fn ensure_capture_hook(class: &mut Class) {
    if class.captures_unknown_args() {
        return;
    }
    host::install_build_hook(class, |original, receiver, args| {
        original.run(receiver, args)?;
        for (key, value) in args {
            if !receiver.has_raw(key) {
                tracing::trace!(key = %key, "capturing undeclared constructor argument");
                receiver.set_raw(key.clone(), value.clone());
            }
        }
        Ok(())
    });
    class.mark_captures_unknown_args();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::AccessorMode;
    use crate::instance::ArgMap;
    use quipu_core::Value;
    use std::rc::Rc;

    #[test]
    fn capture_hook_absorbs_undeclared_keys() {
        let mut class = Class::new("C");
        host::declare_field(&mut class, "foo", AccessorMode::ReadWrite).expect("declare");
        ensure_capture_hook(&mut class);
        // Second installation is a no-op, not a double wrap.
        ensure_capture_hook(&mut class);

        let class = Rc::new(class);
        let mut args = ArgMap::new();
        args.insert("foo".to_string(), Value::Int(1));
        args.insert("bar".to_string(), Value::Int(2));
        let instance = class.instantiate(&args).expect("construct");

        assert_eq!(instance.get_raw("foo"), Some(&Value::Int(1)));
        assert_eq!(instance.get_raw("bar"), Some(&Value::Int(2)));
    }

    #[test]
    fn declared_fields_are_not_double_written() {
        let mut class = Class::new("C");
        host::declare_field(&mut class, "foo", AccessorMode::ReadWrite).expect("declare");
        ensure_capture_hook(&mut class);

        let class = Rc::new(class);
        let mut args = ArgMap::new();
        args.insert("foo".to_string(), Value::Int(1));
        let instance = class.instantiate(&args).expect("construct");

        assert_eq!(instance.raw_keys().collect::<Vec<_>>(), vec!["foo"]);
    }
}
