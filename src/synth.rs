//! Accessor synthesis: the public entry points of the engine.
//!
//! For each requested field the synthesizer resolves public method names
//! through the class's naming policy, declares backing storage through the
//! host seam, wraps the delegate writer with packing and combined
//! read/write semantics, and installs the public-facing method(s) without
//! ever clobbering a method the class author defined first.

use quipu_core::{Value, conventions};

use crate::class::{AccessorMode, Class, Method};
use crate::construct;
use crate::errors::AccessorError;
use crate::host;
use crate::install::{self, InstallMode};
use crate::instance::Instance;
use crate::naming::BestPractice;
use crate::pack;

/// Generate read-write accessors for each named field.
///
/// Under identity naming each field gets a single combined method (read on
/// zero arguments, write otherwise); under a policy that resolves distinct
/// reader/writer names, two separate methods are installed.
#[tracing::instrument(skip_all, fields(class = class.name(), field_count = fields.len()))]
pub fn mk_accessors(class: &mut Class, fields: &[&str]) -> Result<(), AccessorError> {
    for field in fields {
        synthesize(class, field, AccessorMode::ReadWrite)?;
    }
    Ok(())
}

/// Generate read-only accessors for each named field.
///
/// No public writer is installed; the field remains initializable at
/// construction and through the imperative [`set`] entry point.
#[tracing::instrument(skip_all, fields(class = class.name(), field_count = fields.len()))]
pub fn mk_ro_accessors(class: &mut Class, fields: &[&str]) -> Result<(), AccessorError> {
    for field in fields {
        synthesize(class, field, AccessorMode::ReadOnly)?;
    }
    Ok(())
}

/// Generate write-only accessors for each named field.
///
/// No public reader is installed, and the field's delegate reader denies
/// access, so the value cannot be read back through the method surface.
#[tracing::instrument(skip_all, fields(class = class.name(), field_count = fields.len()))]
pub fn mk_wo_accessors(class: &mut Class, fields: &[&str]) -> Result<(), AccessorError> {
    for field in fields {
        synthesize(class, field, AccessorMode::WriteOnly)?;
    }
    Ok(())
}

/// Switch the class to `get_`/`set_` naming for accessors generated from
/// this point on.
///
/// Replaces any prior policy unconditionally. Call it before the
/// `mk_*_accessors` calls it is meant to affect; methods that were already
/// installed keep their names.
pub fn follow_best_practice(class: &mut Class) {
    class.set_naming(BestPractice);
}

/// Imperative write: pack `values` and store them under `field`.
///
/// At least one value is required. The packed (stored) value is returned.
/// Works on any declared field regardless of accessor mode; mode
/// restrictions apply to the public method surface only.
pub fn set(instance: &mut Instance, field: &str, values: &[Value]) -> Result<Value, AccessorError> {
    let packed = pack::pack(field, values)?;
    instance.call(&conventions::delegate_writer_name(field), &[packed])
}

/// Imperative read: fetch one or more fields.
///
/// One name returns that field's value; several names return an ordered
/// list matching the request count. Reads go through the delegate readers,
/// so write-only fields are denied here too.
pub fn get(instance: &mut Instance, fields: &[&str]) -> Result<Value, AccessorError> {
    match fields {
        [] => Err(AccessorError::Arity {
            target: "get".to_string(),
        }),
        [field] => instance.call(&conventions::delegate_reader_name(field), &[]),
        many => {
            let mut values = Vec::with_capacity(many.len());
            for field in many {
                values.push(instance.call(&conventions::delegate_reader_name(field), &[])?);
            }
            Ok(Value::List(values))
        }
    }
}

/// Synthesize the accessor surface for one field.
fn synthesize(class: &mut Class, field: &str, mode: AccessorMode) -> Result<(), AccessorError> {
    let reader = (mode != AccessorMode::WriteOnly).then(|| class.naming().reader_name(field));
    let writer = (mode != AccessorMode::ReadOnly).then(|| class.naming().writer_name(field));

    host::declare_field(class, field, mode)?;
    wrap_delegate_writer(class, field)?;
    construct::ensure_capture_hook(class);

    match (reader, writer) {
        // Reader and writer resolve to the same name: one combined method.
        // The wrapped delegate writer already reads on zero arguments.
        (Some(reader), Some(writer)) if reader == writer => {
            install::install(class, &reader, writer_passthrough(field), InstallMode::IfAbsent)?;
        }
        (reader, writer) => {
            if let Some(reader) = reader {
                install::install(class, &reader, reader_passthrough(field), InstallMode::IfAbsent)?;
            }
            if let Some(writer) = writer {
                install::install(class, &writer, writer_passthrough(field), InstallMode::IfAbsent)?;
            }
        }
    }
    Ok(())
}

/// Wrap `_set_qp_<field>` with strict packing, then with
/// read-current-value-on-zero-arguments semantics.
fn wrap_delegate_writer(class: &mut Class, field: &str) -> Result<(), AccessorError> {
    let target = field.to_string();
    install::install_around(
        class,
        &conventions::delegate_writer_name(field),
        move |original, receiver, args| {
            let packed = pack::pack(&target, args)?;
            original.invoke(receiver, &[packed])
        },
    )?;

    let reader_delegate = conventions::delegate_reader_name(field);
    install::install_around(
        class,
        &conventions::delegate_writer_name(field),
        move |original, receiver, args| {
            if args.is_empty() {
                receiver.call(&reader_delegate, &[])
            } else {
                original.invoke(receiver, args)
            }
        },
    )
}

/// Public reader body: dispatch to the field's delegate reader.
fn reader_passthrough(field: &str) -> Method {
    let delegate = conventions::delegate_reader_name(field);
    Method::new(move |receiver, _args| receiver.call(&delegate, &[]))
}

/// Public writer (and combined accessor) body: dispatch to the wrapped
/// delegate writer.
fn writer_passthrough(field: &str) -> Method {
    let delegate = conventions::delegate_writer_name(field);
    Method::new(move |receiver, args| receiver.call(&delegate, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::ArgMap;
    use std::rc::Rc;

    #[test]
    fn redeclaring_a_field_is_idempotent_for_the_public_surface() {
        let mut class = Class::new("C");
        mk_accessors(&mut class, &["foo"]).expect("first");
        mk_accessors(&mut class, &["foo"]).expect("second");

        let class = Rc::new(class);
        let mut instance = class.instantiate(&ArgMap::new()).expect("construct");
        instance.call("foo", &[Value::Int(3)]).expect("write");
        assert_eq!(instance.call("foo", &[]).expect("read"), Value::Int(3));
    }

    #[test]
    fn distinct_names_install_two_independent_methods() {
        let mut class = Class::new("C");
        follow_best_practice(&mut class);
        mk_accessors(&mut class, &["foo"]).expect("mk");

        assert!(class.has_method("get_foo"));
        assert!(class.has_method("set_foo"));
        assert!(!class.has_method("foo"));
    }
}
