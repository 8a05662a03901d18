//! Declared record schema.
//!
//! A `RecordType` is the frozen result of one type definition: its name,
//! its parent in the inheritance chain, and the fields it declares itself.
//! Everything a record type inherits is resolved on demand by walking the
//! chain from the root downwards; nothing is copied into the leaf.
//!
//! In general:
//! - `model` defines *what exists*
//! - `record` defines *what is stored*

mod field;
mod record_type;


pub use field::{FieldDecl, FieldDescriptor, Precondition};
pub use record_type::{RecordType, RecordTypeBuilder, ResolvedField};

use crate::{DESCRIPTOR_SUFFIX, RESERVED_PREFIX};

/// Hidden storage key a field's value lives under (`__<name>`).
#[must_use]
pub fn storage_key(field: &str) -> String {
    format!("{RESERVED_PREFIX}{field}")
}

/// Hidden key a field's descriptor lives under (`__<name>__field`).
#[must_use]
pub fn descriptor_key(field: &str) -> String {
    format!("{RESERVED_PREFIX}{field}{DESCRIPTOR_SUFFIX}")
}

/// Whether a declared name belongs to the reserved member namespace.
#[must_use]
pub fn is_reserved_name(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}
