//! Shared engine conventions (well-known method-name spellings).

/// Prefix of the private delegate reader installed for every declared field.
pub const DELEGATE_READER_PREFIX: &str = "_get_qp_";

/// Prefix of the private delegate writer installed for every declared field.
pub const DELEGATE_WRITER_PREFIX: &str = "_set_qp_";

/// Reader prefix used by the best-practice naming policy.
pub const BEST_PRACTICE_READER_PREFIX: &str = "get_";

/// Writer prefix used by the best-practice naming policy.
pub const BEST_PRACTICE_WRITER_PREFIX: &str = "set_";

/// Return the delegate reader method name for `field`.
pub fn delegate_reader_name(field: &str) -> String {
    format!("{DELEGATE_READER_PREFIX}{field}")
}

/// Return the delegate writer method name for `field`.
pub fn delegate_writer_name(field: &str) -> String {
    format!("{DELEGATE_WRITER_PREFIX}{field}")
}

/// Return true if `name` is reserved for the engine's private delegates.
///
/// Fields may not be declared under these spellings; the delegate pair for a
/// field would otherwise collide with the field's own storage.
pub fn is_reserved_name(name: &str) -> bool {
    name.starts_with(DELEGATE_READER_PREFIX) || name.starts_with(DELEGATE_WRITER_PREFIX)
}
