//! Core runtime for IcyRecord: declared record types, write-once record
//! instances, the validating constructor, rendering, and the observability
//! boundary.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod model;
pub mod obs;
pub mod record;
pub mod render;
pub mod snapshot;
pub mod traits;
pub mod value;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// CONSTANTS
///

/// Prefix marking the reserved member namespace. Declared names carrying it
/// are never turned into record fields.
pub const RESERVED_PREFIX: &str = "__";

/// Suffix appended to a field's storage key to form its descriptor key.
pub const DESCRIPTOR_SUFFIX: &str = "__field";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or render internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        args,
        model::{FieldDecl, FieldDescriptor, RecordType},
        record::{Args, Record},
        traits::{FieldValue, RecordKind},
        value::{Kind, Value},
    };
}
