mod args;
mod construct;


use crate::{
    error::RecordError,
    model::{RecordType, storage_key},
    obs::sink::{self, RecordEvent},
    traits::FieldValue,
    value::Value,
};
use serde::{Serialize, Serializer, ser::SerializeMap};

// re-exports
pub use args::Args;

///
/// Slot
/// Hidden storage for one field; `None` until the field is first written.
///

#[derive(Clone, Debug, PartialEq)]
struct Slot {
    field: String,
    value: Option<Value>,
}

///
/// Record
///
/// One instance of a record type. Holds one slot per resolved field and
/// lets every slot be written exactly once.
///
/// Instances only escape `RecordType::construct` fully populated, so every
/// public write after construction fails.
///

#[derive(Clone, Debug)]
pub struct Record {
    ty: RecordType,
    slots: Vec<Slot>,
}

impl Record {
    // allocate
    // empty instance with one unset slot per resolved field
    fn allocate(ty: &RecordType) -> Self {
        let slots = ty
            .resolve_fields()
            .iter()
            .map(|f| Slot {
                field: f.name.to_string(),
                value: None,
            })
            .collect();

        Self {
            ty: ty.clone(),
            slots,
        }
    }

    #[must_use]
    pub const fn record_type(&self) -> &RecordType {
        &self.ty
    }

    /// Read a field through its public name.
    pub fn get(&self, field: &str) -> Result<&Value, RecordError> {
        self.slot(field)?
            .value
            .as_ref()
            .ok_or_else(|| RecordError::UninitializedAccess {
                record: self.ty.name().to_string(),
                field: field.to_string(),
            })
    }

    /// Read a field and convert it to a Rust type.
    pub fn get_as<T: FieldValue>(&self, field: &str) -> Result<T, RecordError> {
        let value = self.get(field)?;

        T::from_value(value).ok_or_else(|| RecordError::TypeMismatch {
            record: self.ty.name().to_string(),
            field: field.to_string(),
            expected: T::kind().map_or_else(|| "Value".to_string(), |k| k.label()),
            actual: value.kind().label(),
        })
    }

    ///
    /// set
    ///
    /// Write a field through its public name. Succeeds only while the slot
    /// is empty; presence of a value is what makes the field read-only.
    ///
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        let record = self.ty.name().to_string();
        let slot = self.slot_mut(field)?;

        if slot.value.is_some() {
            sink::record(RecordEvent::WriteRejected {
                record: &record,
                field,
            });

            return Err(RecordError::ReadOnlyViolation {
                record,
                field: field.to_string(),
            });
        }
        slot.value = Some(value.into());

        Ok(())
    }

    #[must_use]
    pub fn is_set(&self, field: &str) -> bool {
        self.slot(field).is_ok_and(|slot| slot.value.is_some())
    }

    /// Populated fields in resolved order, keyed by public name.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.value.as_ref().map(|v| (slot.field.as_str(), v)))
    }

    /// Populated fields keyed by their hidden storage key (`__<name>`).
    pub fn storage(&self) -> impl Iterator<Item = (String, &Value)> {
        self.values().map(|(field, v)| (storage_key(field), v))
    }

    /// Copy the stored values back out as keyword arguments.
    #[must_use]
    pub fn to_args(&self) -> Args {
        self.values()
            .map(|(field, v)| (field.to_string(), v.clone()))
            .collect()
    }

    fn slot(&self, field: &str) -> Result<&Slot, RecordError> {
        self.slots
            .iter()
            .find(|slot| slot.field == field)
            .ok_or_else(|| self.unknown_field(field))
    }

    fn slot_mut(&mut self, field: &str) -> Result<&mut Slot, RecordError> {
        let ty = &self.ty;

        self.slots
            .iter_mut()
            .find(|slot| slot.field == field)
            .ok_or_else(|| RecordError::UnknownField {
                record: ty.name().to_string(),
                field: field.to_string(),
            })
    }

    fn unknown_field(&self, field: &str) -> RecordError {
        RecordError::UnknownField {
            record: self.ty.name().to_string(),
            field: field.to_string(),
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.ty.same_type(&other.ty) && self.slots == other.slots
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (field, value) in self.values() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}
