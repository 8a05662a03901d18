//! Validating constructor.
//!
//! Construction is all-or-nothing: arity, then per-argument type and
//! precondition checks in supply order, and only then the writes. No
//! partially initialised instance is ever handed back.

use crate::{
    error::RecordError,
    model::{RecordType, ResolvedField},
    obs::sink::{self, RecordEvent},
    record::{Args, Record},
    value::Value,
};

impl RecordType {
    ///
    /// construct
    ///
    /// Build an instance from keyword arguments. Every resolved field must be
    /// supplied exactly once, with a value of exactly the declared kind that
    /// satisfies the field's precondition.
    ///
    pub fn construct(&self, args: Args) -> Result<Record, RecordError> {
        if let Err(err) = self.validate_args(&args) {
            sink::record(RecordEvent::Rejected {
                record: self.name(),
                class: err.class(),
                field: err.field(),
            });

            return Err(err);
        }

        let mut record = Record::allocate(self);
        for (field, value) in args {
            record.set(&field, value)?;
        }

        sink::record(RecordEvent::Constructed {
            record: self.name(),
            fields: record.values().count(),
        });

        Ok(record)
    }

    /// Run every construction check without building an instance.
    pub fn validate_args(&self, args: &Args) -> Result<(), RecordError> {
        let fields = self.resolve_fields();

        check_arity(self, fields.len(), args.len())?;

        for (name, value) in args.iter() {
            let field = fields
                .iter()
                .find(|f| f.name == name)
                .ok_or_else(|| RecordError::UnknownField {
                    record: self.name().to_string(),
                    field: name.to_string(),
                })?;

            check_value(self, field, value)?;
        }

        Ok(())
    }
}

fn check_arity(ty: &RecordType, expected: usize, supplied: usize) -> Result<(), RecordError> {
    let record = ty.name().to_string();

    if supplied < expected {
        return Err(RecordError::MissingAttribute {
            record,
            expected,
            supplied,
        });
    }
    if supplied > expected {
        return Err(RecordError::ExtraAttribute {
            record,
            expected,
            supplied,
        });
    }

    Ok(())
}

// check_value
// exact kind first, precondition second
fn check_value(
    ty: &RecordType,
    field: &ResolvedField<'_>,
    value: &Value,
) -> Result<(), RecordError> {
    if let Some(expected) = field.kind {
        let actual = value.kind();

        if actual != *expected {
            return Err(RecordError::TypeMismatch {
                record: ty.name().to_string(),
                field: field.name.to_string(),
                expected: expected.label(),
                actual: actual.label(),
            });
        }
    }

    if let Some(descriptor) = field.descriptor
        && !descriptor.check(value)
    {
        return Err(RecordError::PreconditionViolated {
            record: ty.name().to_string(),
            field: field.name.to_string(),
        });
    }

    Ok(())
}
