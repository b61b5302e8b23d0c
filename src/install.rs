//! The symbol installer: controlled mutation of a class's method table.
//!
//! Three installation behaviors, per the legacy library being emulated:
//! insert-if-absent (never clobber an author's method), fresh overwrite
//! (policy/delegate plumbing only), and around-wrapping an existing method.

use quipu_core::Value;

use crate::class::{Class, Method};
use crate::errors::AccessorError;
use crate::instance::Instance;

/// How the installer treats an existing method of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    /// Install only if the class does not already define the method.
    IfAbsent,
    /// Install unconditionally, displacing any existing method.
    Fresh,
}

/// Outcome of an installation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installed {
    /// The method was added under a previously unused name.
    Added,
    /// An existing method kept its place (`IfAbsent` on an occupied name).
    SkippedExisting,
    /// An existing method was displaced (`Fresh` on an occupied name).
    Replaced,
}

/// Install `method` under `name` in the class's own method table.
///
/// `IfAbsent` on an occupied name is not an error: the existing method wins
/// and [`Installed::SkippedExisting`] is returned.
pub fn install(
    class: &mut Class,
    name: &str,
    method: Method,
    mode: InstallMode,
) -> Result<Installed, AccessorError> {
    if name.is_empty() {
        return Err(AccessorError::Installation {
            class: class.name().to_string(),
            name: name.to_string(),
            reason: "method name is empty".to_string(),
        });
    }
    let occupied = class.has_method(name);
    if mode == InstallMode::IfAbsent && occupied {
        tracing::debug!(class = class.name(), method = name, "keeping existing method");
        return Ok(Installed::SkippedExisting);
    }
    class.methods_mut().insert(name.to_string(), method);
    Ok(if occupied {
        Installed::Replaced
    } else {
        Installed::Added
    })
}

/// Replace the method `name` with a wrapper around its current implementation.
///
/// The wrapper receives the original callable plus the receiver and call
/// arguments; the result is installed under the same name. Wrapping an
/// absent method is an installation error.
pub fn install_around<W>(class: &mut Class, name: &str, wrapper: W) -> Result<(), AccessorError>
where
    W: Fn(&Method, &mut Instance, &[Value]) -> Result<Value, AccessorError> + 'static,
{
    let Some(original) = class.method(name).cloned() else {
        return Err(AccessorError::Installation {
            class: class.name().to_string(),
            name: name.to_string(),
            reason: "no existing method to wrap".to_string(),
        });
    };
    let wrapped = Method::new(move |receiver, args| wrapper(&original, receiver, args));
    class.methods_mut().insert(name.to_string(), wrapped);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::ArgMap;
    use std::rc::Rc;

    fn constant(value: i64) -> Method {
        Method::new(move |_receiver, _args| Ok(Value::Int(value)))
    }

    #[test]
    fn if_absent_keeps_the_first_method() {
        let mut class = Class::new("C");
        assert_eq!(
            install(&mut class, "m", constant(1), InstallMode::IfAbsent).expect("install"),
            Installed::Added
        );
        assert_eq!(
            install(&mut class, "m", constant(2), InstallMode::IfAbsent).expect("install"),
            Installed::SkippedExisting
        );

        let class = Rc::new(class);
        let mut instance = class.instantiate(&ArgMap::new()).expect("construct");
        assert_eq!(instance.call("m", &[]).expect("call"), Value::Int(1));
    }

    #[test]
    fn fresh_displaces_the_existing_method() {
        let mut class = Class::new("C");
        install(&mut class, "m", constant(1), InstallMode::Fresh).expect("install");
        assert_eq!(
            install(&mut class, "m", constant(2), InstallMode::Fresh).expect("install"),
            Installed::Replaced
        );

        let class = Rc::new(class);
        let mut instance = class.instantiate(&ArgMap::new()).expect("construct");
        assert_eq!(instance.call("m", &[]).expect("call"), Value::Int(2));
    }

    #[test]
    fn around_wraps_and_keeps_the_original_callable() {
        let mut class = Class::new("C");
        install(&mut class, "m", constant(10), InstallMode::Fresh).expect("install");
        install_around(&mut class, "m", |original, receiver, args| {
            let inner = original.invoke(receiver, args)?;
            match inner {
                Value::Int(i) => Ok(Value::Int(i + 1)),
                other => Ok(other),
            }
        })
        .expect("wrap");

        let class = Rc::new(class);
        let mut instance = class.instantiate(&ArgMap::new()).expect("construct");
        assert_eq!(instance.call("m", &[]).expect("call"), Value::Int(11));
    }

    #[test]
    fn around_on_an_absent_method_is_an_installation_error() {
        let mut class = Class::new("C");
        let err = install_around(&mut class, "missing", |original, receiver, args| {
            original.invoke(receiver, args)
        })
        .expect_err("must fail");
        assert!(matches!(err, AccessorError::Installation { .. }));
    }

    #[test]
    fn empty_method_names_are_rejected() {
        let mut class = Class::new("C");
        let err = install(&mut class, "", constant(0), InstallMode::Fresh).expect_err("must fail");
        assert!(matches!(err, AccessorError::Installation { .. }));
    }
}
