use crate::{
    error::DefinitionError,
    model::{FieldDecl, FieldDescriptor, is_reserved_name, storage_key},
    obs::sink::{self, RecordEvent},
    value::Kind,
};
use std::{collections::HashSet, fmt, sync::Arc};

///
/// RecordType
///
/// Shared handle to one frozen record type definition.
/// Cloning the handle never copies the definition; two handles are the same
/// type only if they point at the same definition.
///

#[derive(Clone)]
pub struct RecordType(Arc<RecordTypeDef>);

struct RecordTypeDef {
    name: String,
    parent: Option<RecordType>,
    fields: Vec<FieldDecl>,
}

impl RecordType {
    pub fn builder(name: impl Into<String>) -> RecordTypeBuilder {
        RecordTypeBuilder::new(name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.0.parent.as_ref()
    }

    /// Fields declared directly on this type, in declaration order.
    #[must_use]
    pub fn own_fields(&self) -> &[FieldDecl] {
        &self.0.fields
    }

    /// Identity comparison.
    #[must_use]
    pub fn same_type(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// True if `other` appears anywhere in this type's chain, itself included.
    #[must_use]
    pub fn is_subtype_of(&self, other: &Self) -> bool {
        self.lineage().into_iter().any(|ty| ty.same_type(other))
    }

    /// Inheritance chain from the root-most declared type down to `self`.
    #[must_use]
    pub fn lineage(&self) -> Vec<&Self> {
        let mut chain = Vec::new();
        let mut cursor = Some(self);

        while let Some(ty) = cursor {
            chain.push(ty);
            cursor = ty.parent();
        }
        chain.reverse();

        chain
    }

    ///
    /// resolve_fields
    ///
    /// Merge every level's declarations root → leaf.
    ///
    /// A name keeps the position of its first declaration. A later level
    /// redeclaring it always replaces the declared kind (an untyped
    /// redeclaration drops the type check). The descriptor is replaced only
    /// when the redeclaration supplies one; otherwise it is inherited.
    ///
    /// Recomputed on every call.
    ///
    #[must_use]
    pub fn resolve_fields(&self) -> Vec<ResolvedField<'_>> {
        let mut resolved: Vec<ResolvedField<'_>> = Vec::new();

        for level in self.lineage() {
            for decl in level.own_fields() {
                if let Some(existing) = resolved.iter_mut().find(|f| f.name == decl.name()) {
                    existing.kind = decl.kind();
                    if decl.descriptor().is_some() {
                        existing.descriptor = decl.descriptor();
                    }
                    existing.declared_in = level;
                } else {
                    resolved.push(ResolvedField {
                        name: decl.name(),
                        kind: decl.kind(),
                        descriptor: decl.descriptor(),
                        declared_in: level,
                    });
                }
            }
        }

        resolved
    }

    /// Complete field name → declared kind mapping, inherited fields included.
    #[must_use]
    pub fn complete_attributes(&self) -> Vec<(&str, Option<&Kind>)> {
        self.resolve_fields()
            .into_iter()
            .map(|f| (f.name, f.kind))
            .collect()
    }

    /// Number of fields an instance must be constructed with.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.resolve_fields().len()
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.lineage()
            .into_iter()
            .any(|ty| ty.own_fields().iter().any(|f| f.name() == name))
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.name())
            .field("parent", &self.parent().map(Self::name))
            .field("fields", &self.own_fields())
            .finish()
    }
}

///
/// ResolvedField
/// One field of the complete, inheritance-merged field list.
///

#[derive(Clone, Copy, Debug)]
pub struct ResolvedField<'a> {
    pub name: &'a str,
    pub kind: Option<&'a Kind>,
    pub descriptor: Option<&'a FieldDescriptor>,
    /// Lowest level of the chain that (re)declared this name.
    pub declared_in: &'a RecordType,
}

impl ResolvedField<'_> {
    #[must_use]
    pub fn storage_key(&self) -> String {
        storage_key(self.name)
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.descriptor.map(FieldDescriptor::label)
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        self.kind.is_some_and(Kind::is_text)
    }
}

///
/// RecordTypeBuilder
///
/// The one place a record type is defined. Declared names are checked once
/// here; the resulting type is immutable.
///

#[derive(Debug)]
pub struct RecordTypeBuilder {
    name: String,
    parent: Option<RecordType>,
    fields: Vec<FieldDecl>,
}

impl RecordTypeBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn extends(mut self, parent: &RecordType) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    #[must_use]
    pub fn field(self, name: impl Into<String>, kind: Kind) -> Self {
        self.decl(FieldDecl::typed(name, kind))
    }

    #[must_use]
    pub fn untyped(self, name: impl Into<String>) -> Self {
        self.decl(FieldDecl::untyped(name))
    }

    #[must_use]
    pub fn field_with(
        self,
        name: impl Into<String>,
        kind: Kind,
        descriptor: FieldDescriptor,
    ) -> Self {
        self.decl(FieldDecl::typed(name, kind).with_descriptor(descriptor))
    }

    #[must_use]
    pub fn decl(mut self, decl: FieldDecl) -> Self {
        self.fields.push(decl);
        self
    }

    pub fn build(self) -> Result<RecordType, DefinitionError> {
        self.validate()?;

        let ty = RecordType(Arc::new(RecordTypeDef {
            name: self.name,
            parent: self.parent,
            fields: self.fields,
        }));

        sink::record(RecordEvent::TypeDefined {
            record: ty.name(),
            parent: ty.parent().map(RecordType::name),
            fields: ty.own_fields().len(),
        });

        Ok(ty)
    }

    fn validate(&self) -> Result<(), DefinitionError> {
        if self.name.is_empty() {
            return Err(DefinitionError::EmptyTypeName);
        }

        let mut seen = HashSet::new();
        for decl in &self.fields {
            let field = decl.name();

            if field.is_empty() {
                return Err(DefinitionError::EmptyName {
                    record: self.name.clone(),
                });
            }
            if is_reserved_name(field) {
                return Err(DefinitionError::ReservedName {
                    record: self.name.clone(),
                    field: field.to_string(),
                });
            }
            if !seen.insert(field) {
                return Err(DefinitionError::DuplicateField {
                    record: self.name.clone(),
                    field: field.to_string(),
                });
            }
        }

        Ok(())
    }
}
