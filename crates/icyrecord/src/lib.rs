//! ## Crate layout
//! - `core`: runtime record types, instances, validation, and rendering.
//! - `macros`: `#[derive(Record)]` for typed record structs (feature `derive`).
//!
//! The `prelude` module carries the vocabulary needed to declare, construct,
//! and read records.

pub use icyrecord_core as core;
#[cfg(feature = "derive")]
pub use icyrecord_derive as macros;

pub use icyrecord_core::{args, error, model, obs, record, render, snapshot, traits, value};

// export so generated code resolves `::icyrecord` inside this crate too
extern crate self as icyrecord;

/// re-exports
///
/// generated code and downstream crates can use these without adding the
/// dependencies to their own Cargo.toml
pub mod __reexports {
    pub use serde;
    pub use tracing;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Errors
//

pub use icyrecord_core::Error;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        args,
        error::{DefinitionError, ErrorClass, RecordError},
        model::{FieldDecl, FieldDescriptor, RecordType},
        record::{Args, Record},
        traits::{FieldValue as _, RecordKind},
        value::{Kind, Value},
    };
    #[cfg(feature = "derive")]
    pub use icyrecord_derive::Record;
}
