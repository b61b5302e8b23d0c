#![forbid(unsafe_code)]
//! Quipu: runtime accessor generation for a small dynamic class system.
//!
//! Given a class descriptor and a list of field names, quipu synthesizes
//! read/write, read-only, or write-only accessor methods into the class's
//! method table, following a pluggable per-class naming policy, and makes
//! construction permissive: constructor arguments that match no declared
//! field are captured into the instance's backing store instead of being
//! rejected.
//!
//! The observable behavior reproduces a legacy CRUD-accessor library:
//! multi-argument writer calls pack into a single ordered sequence, reader
//! and writer collapse into one combined method when their names coincide,
//! and generated methods never overwrite methods the class author installed
//! first.
//!
//! ## Examples
//! ```rust
//! use std::collections::BTreeMap;
//! use std::rc::Rc;
//! use quipu::{mk_accessors, Class, Value};
//!
//! let mut class = Class::new("Point");
//! mk_accessors(&mut class, &["x", "y"]).unwrap();
//! let class = Rc::new(class);
//!
//! let mut args = BTreeMap::new();
//! args.insert("x".to_string(), Value::Int(1));
//! let mut point = class.instantiate(&args).unwrap();
//!
//! assert_eq!(point.call("x", &[]).unwrap(), Value::Int(1));
//! point.call("y", &[Value::Int(2), Value::Int(3)]).unwrap();
//! assert_eq!(
//!     point.call("y", &[]).unwrap(),
//!     Value::List(vec![Value::Int(2), Value::Int(3)]),
//! );
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`; failures are
//!   surfaced as [`AccessorError`], never panics.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod class;
pub mod construct;
pub mod errors;
pub mod host;
pub mod install;
pub mod instance;
pub mod naming;
pub mod pack;
pub mod synth;

pub use class::{AccessorMode, BuildHook, Class, FieldSpec, Method};
pub use errors::{AccessorError, HostError};
pub use install::{InstallMode, Installed, install, install_around};
pub use instance::{ArgMap, Instance};
pub use naming::{BestPractice, IdentityNaming, NamingPolicy};
pub use synth::{follow_best_practice, get, mk_accessors, mk_ro_accessors, mk_wo_accessors, set};

pub use quipu_core::Value;
