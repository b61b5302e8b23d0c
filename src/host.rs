//! Host object-framework seam: field declaration and construction-hook wiring.
//!
//! The synthesizer only touches storage through this surface. Declaring a
//! field registers its [`FieldSpec`] and installs the private delegate pair
//! (`_get_qp_<field>` / `_set_qp_<field>`) that all generated accessors
//! dispatch through.

use quipu_core::{Value, conventions};

use crate::class::{AccessorMode, BuildHook, Class, FieldSpec, Method};
use crate::errors::{AccessorError, HostError};
use crate::install::{self, InstallMode};
use crate::instance::{ArgMap, Instance};

/// Declare the private backing slot for `field` and install its delegate
/// reader/writer pair.
///
/// Re-declaring a field is allowed: the delegate pair is freshly installed
/// each time. Public accessor methods are governed separately by the
/// installer's `IfAbsent` rule.
pub fn declare_field(class: &mut Class, field: &str, mode: AccessorMode) -> Result<(), AccessorError> {
    if field.is_empty() {
        return Err(declare_error(class, field, "field name is empty"));
    }
    if conventions::is_reserved_name(field) {
        return Err(declare_error(class, field, "field name collides with a reserved delegate prefix"));
    }

    class.declare_field_spec(FieldSpec {
        name: field.to_string(),
        mode,
    });
    install::install(
        class,
        &conventions::delegate_reader_name(field),
        delegate_reader(field, mode),
        InstallMode::Fresh,
    )?;
    install::install(
        class,
        &conventions::delegate_writer_name(field),
        delegate_writer(field),
        InstallMode::Fresh,
    )?;
    Ok(())
}

/// Wrap the class's construction hook.
///
/// The wrapper receives the original hook plus the instance and argument
/// map, and replaces the hook in place (around semantics).
pub fn install_build_hook<W>(class: &mut Class, wrapper: W)
where
    W: Fn(&BuildHook, &mut Instance, &ArgMap) -> Result<(), AccessorError> + 'static,
{
    let original = class.build_hook().clone();
    class.set_build_hook(BuildHook::new(move |receiver, args| {
        wrapper(&original, receiver, args)
    }));
}

fn declare_error(class: &Class, field: &str, reason: &str) -> AccessorError {
    AccessorError::Host(HostError::DeclareField {
        class: class.name().to_string(),
        name: field.to_string(),
        reason: reason.to_string(),
    })
}

/// Delegate reader: return the stored value (`Nil` when unset).
///
/// Write-only fields get a reader that always denies; it exists so the
/// wrapped writer has a dispatch target, but end users cannot read through it.
fn delegate_reader(field: &str, mode: AccessorMode) -> Method {
    let name = field.to_string();
    match mode {
        AccessorMode::WriteOnly => Method::new(move |_receiver, _args| {
            Err(AccessorError::AccessDenied {
                field: name.clone(),
            })
        }),
        _ => Method::new(move |receiver, _args| {
            Ok(receiver.get_raw(&name).cloned().unwrap_or(Value::Nil))
        }),
    }
}

/// Delegate writer: store the (already packed) single argument raw.
fn delegate_writer(field: &str) -> Method {
    let name = field.to_string();
    Method::new(move |receiver, args| {
        let value = args.first().cloned().unwrap_or(Value::Nil);
        receiver.set_raw(name.clone(), value.clone());
        Ok(value)
    })
}
