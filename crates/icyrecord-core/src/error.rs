use derive_more::Display;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    DefinitionError(#[from] DefinitionError),

    #[error(transparent)]
    RecordError(#[from] RecordError),
}

///
/// ErrorClass
///
/// Stable classification of record failures.
/// Callers match on the class instead of the message text.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum ErrorClass {
    Access,
    Arity,
    Definition,
    Precondition,
    Type,
}

///
/// DefinitionError
///
/// Raised while declaring a record type. A type that fails to build never
/// becomes visible to callers.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum DefinitionError {
    #[error("record type '{record}' declares field '{field}' more than once")]
    DuplicateField { record: String, field: String },

    #[error("record type '{record}' declares a field with an empty name")]
    EmptyName { record: String },

    #[error("record type name must not be empty")]
    EmptyTypeName,

    #[error("record type '{record}' cannot declare '{field}': names starting with '__' are reserved")]
    ReservedName { record: String, field: String },
}

impl DefinitionError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        ErrorClass::Definition
    }
}

///
/// RecordError
///
/// Construction and attribute-access failures. Every variant names the
/// record type it was raised against; none of them are retryable.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum RecordError {
    #[error("{record}: more attributes provided ({supplied} supplied, {expected} declared)")]
    ExtraAttribute {
        record: String,
        expected: usize,
        supplied: usize,
    },

    #[error("{record}: missing attribute ({supplied} supplied, {expected} declared)")]
    MissingAttribute {
        record: String,
        expected: usize,
        supplied: usize,
    },

    #[error("{record}: precondition for '{field}' has been violated")]
    PreconditionViolated { record: String, field: String },

    #[error("{record}: attribute '{field}' is read-only and cannot be set")]
    ReadOnlyViolation { record: String, field: String },

    #[error("{record}: invalid type for '{field}' (expected {expected}, got {actual})")]
    TypeMismatch {
        record: String,
        field: String,
        expected: String,
        actual: String,
    },

    #[error("{record}: attribute '{field}' has not been initialized")]
    UninitializedAccess { record: String, field: String },

    #[error("{record}: no field named '{field}'")]
    UnknownField { record: String, field: String },
}

impl RecordError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::ExtraAttribute { .. } | Self::MissingAttribute { .. } => ErrorClass::Arity,
            Self::PreconditionViolated { .. } => ErrorClass::Precondition,
            Self::TypeMismatch { .. } | Self::UnknownField { .. } => ErrorClass::Type,
            Self::ReadOnlyViolation { .. } | Self::UninitializedAccess { .. } => {
                ErrorClass::Access
            }
        }
    }

    /// Name of the record type the error was raised against.
    #[must_use]
    pub fn record(&self) -> &str {
        match self {
            Self::ExtraAttribute { record, .. }
            | Self::MissingAttribute { record, .. }
            | Self::PreconditionViolated { record, .. }
            | Self::ReadOnlyViolation { record, .. }
            | Self::TypeMismatch { record, .. }
            | Self::UninitializedAccess { record, .. }
            | Self::UnknownField { record, .. } => record,
        }
    }

    /// Field involved in the failure, if the failure is field-specific.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ExtraAttribute { .. } | Self::MissingAttribute { .. } => None,
            Self::PreconditionViolated { field, .. }
            | Self::ReadOnlyViolation { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::UninitializedAccess { field, .. }
            | Self::UnknownField { field, .. } => Some(field),
        }
    }
}

///
/// TESTS
///
