//! Pluggable field-to-method naming policies.

use quipu_core::conventions;

/// Map a field name to its public reader/writer method names.
///
/// Policies are pure: the same field always resolves to the same names. A
/// class holds exactly one policy at a time; replacing it never renames
/// methods that were already installed.
pub trait NamingPolicy {
    /// Return the public reader method name for `field`.
    fn reader_name(&self, field: &str) -> String;

    /// Return the public writer method name for `field`.
    fn writer_name(&self, field: &str) -> String;
}

/// Default policy: reader and writer both share the field's own name.
///
/// Under this policy a read-write field gets a single combined accessor
/// method (read on zero arguments, write otherwise).
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNaming;

impl NamingPolicy for IdentityNaming {
    fn reader_name(&self, field: &str) -> String {
        field.to_string()
    }

    fn writer_name(&self, field: &str) -> String {
        field.to_string()
    }
}

/// Best-practice policy: `get_<field>` readers and `set_<field>` writers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestPractice;

impl NamingPolicy for BestPractice {
    fn reader_name(&self, field: &str) -> String {
        format!("{}{field}", conventions::BEST_PRACTICE_READER_PREFIX)
    }

    fn writer_name(&self, field: &str) -> String {
        format!("{}{field}", conventions::BEST_PRACTICE_WRITER_PREFIX)
    }
}
