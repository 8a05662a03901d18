//! Serializable description of a record type's resolved schema.

use crate::model::RecordType;
use serde::Serialize;

///
/// SchemaSnapshot
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SchemaSnapshot {
    pub name: String,
    /// Root-most type first.
    pub lineage: Vec<String>,
    pub fields: Vec<FieldSnapshot>,
}

///
/// FieldSnapshot
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldSnapshot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub has_precondition: bool,
    pub declared_in: String,
}

impl RecordType {
    #[must_use]
    pub fn snapshot(&self) -> SchemaSnapshot {
        let fields = self
            .resolve_fields()
            .into_iter()
            .map(|f| FieldSnapshot {
                name: f.name.to_string(),
                kind: f.kind.map(|k| k.label()),
                label: f.label().map(ToString::to_string),
                has_precondition: f.descriptor.is_some_and(|d| d.has_precondition()),
                declared_in: f.declared_in.name().to_string(),
            })
            .collect();

        SchemaSnapshot {
            name: self.name().to_string(),
            lineage: self
                .lineage()
                .into_iter()
                .map(|ty| ty.name().to_string())
                .collect(),
            fields,
        }
    }
}

///
/// TESTS
///
