//! Class descriptors: the method table, the field table, the naming policy,
//! and the construction hook.
//!
//! A [`Class`] is mutated only during its definition phase (through
//! `&mut Class`). Once definition is complete it is frozen behind an
//! [`Rc`] and instances are created with [`Class::instantiate`].

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use quipu_core::Value;

use crate::construct;
use crate::errors::AccessorError;
use crate::instance::{ArgMap, Instance};
use crate::naming::{IdentityNaming, NamingPolicy};

/// Access mode requested for a generated accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorMode {
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

/// A declared field and the access mode it was declared with.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub mode: AccessorMode,
}

type MethodFn = dyn Fn(&mut Instance, &[Value]) -> Result<Value, AccessorError>;

/// A callable installed in a class's method table.
///
/// Methods are cheap to clone (shared behind [`Rc`]) so the installer can
/// wrap an existing method while the wrapped original stays callable.
#[derive(Clone)]
pub struct Method(Rc<MethodFn>);

impl Method {
    /// Wrap a closure as an installable method.
    pub fn new(f: impl Fn(&mut Instance, &[Value]) -> Result<Value, AccessorError> + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the method on `receiver` with positional `args`.
    pub fn invoke(&self, receiver: &mut Instance, args: &[Value]) -> Result<Value, AccessorError> {
        (self.0)(receiver, args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method")
    }
}

type BuildHookFn = dyn Fn(&mut Instance, &ArgMap) -> Result<(), AccessorError>;

/// Hook run after instance allocation to populate state from the
/// constructor's named arguments.
#[derive(Clone)]
pub struct BuildHook(Rc<BuildHookFn>);

impl BuildHook {
    /// Wrap a closure as a construction hook.
    pub fn new(f: impl Fn(&mut Instance, &ArgMap) -> Result<(), AccessorError> + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Run the hook against a freshly allocated instance.
    pub fn run(&self, receiver: &mut Instance, args: &ArgMap) -> Result<(), AccessorError> {
        (self.0)(receiver, args)
    }
}

/// A class descriptor: named method table plus field table, naming policy,
/// and construction hook.
pub struct Class {
    name: String,
    methods: BTreeMap<String, Method>,
    fields: BTreeMap<String, FieldSpec>,
    naming: Rc<dyn NamingPolicy>,
    build_hook: BuildHook,
    captures_unknown_args: bool,
}

impl Class {
    /// Create an empty class with identity naming and the default build hook
    /// (populate declared fields from constructor arguments).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: BTreeMap::new(),
            fields: BTreeMap::new(),
            naming: Rc::new(IdentityNaming),
            build_hook: construct::default_build_hook(),
            captures_unknown_args: false,
        }
    }

    /// Return the class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a method in the class's own method table.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    /// Return true if the class's own method table defines `name`.
    ///
    /// This is the check the installer's `IfAbsent` mode relies on.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Iterate over installed method names, in sorted order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub(crate) fn methods_mut(&mut self) -> &mut BTreeMap<String, Method> {
        &mut self.methods
    }

    /// Look up a declared field.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Iterate over declared fields, in sorted name order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    pub(crate) fn declare_field_spec(&mut self, spec: FieldSpec) {
        self.fields.insert(spec.name.clone(), spec);
    }

    /// Return the class's current naming policy.
    pub fn naming(&self) -> &dyn NamingPolicy {
        &*self.naming
    }

    /// Replace the naming policy unconditionally.
    ///
    /// The don't-overwrite rule applies only to accessor methods; policies
    /// are always installed fresh. Methods generated under the previous
    /// policy keep their names.
    pub fn set_naming(&mut self, policy: impl NamingPolicy + 'static) {
        self.naming = Rc::new(policy);
    }

    /// Return the current construction hook.
    pub fn build_hook(&self) -> &BuildHook {
        &self.build_hook
    }

    pub(crate) fn set_build_hook(&mut self, hook: BuildHook) {
        self.build_hook = hook;
    }

    pub(crate) fn captures_unknown_args(&self) -> bool {
        self.captures_unknown_args
    }

    pub(crate) fn mark_captures_unknown_args(&mut self) {
        self.captures_unknown_args = true;
    }

    /// Allocate an instance and run the construction hook over `args`.
    pub fn instantiate(self: &Rc<Self>, args: &ArgMap) -> Result<Instance, AccessorError> {
        tracing::debug!(class = %self.name, arg_count = args.len(), "instantiating");
        let mut instance = Instance::bare(Rc::clone(self));
        let hook = self.build_hook.clone();
        hook.run(&mut instance, args)?;
        Ok(instance)
    }
}
