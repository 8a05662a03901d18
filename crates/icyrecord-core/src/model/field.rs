use crate::{
    model::{descriptor_key, storage_key},
    traits::FieldValue,
    value::{Kind, Value},
};
use std::{fmt, sync::Arc};

///
/// Precondition
/// Predicate over a candidate field value; must hold for construction to succeed.
///

pub type Precondition = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

///
/// FieldDescriptor
///
/// Human-readable label plus an optional precondition, attached to a field
/// at declaration time.
///

#[derive(Clone)]
pub struct FieldDescriptor {
    label: String,
    precondition: Option<Precondition>,
}

impl FieldDescriptor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            precondition: None,
        }
    }

    /// Attach a predicate over the raw field value.
    #[must_use]
    pub fn with_precondition<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.precondition = Some(Arc::new(f));
        self
    }

    /// Attach a predicate over the typed field value.
    ///
    /// Values that do not convert to `T` fail the precondition.
    #[must_use]
    pub fn with_typed_precondition<T, F>(self, f: F) -> Self
    where
        T: FieldValue,
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.with_precondition(move |value| T::from_value(value).is_some_and(|v| f(&v)))
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn precondition(&self) -> Option<&Precondition> {
        self.precondition.as_ref()
    }

    #[must_use]
    pub const fn has_precondition(&self) -> bool {
        self.precondition.is_some()
    }

    /// Evaluate the precondition; a descriptor without one accepts everything.
    #[must_use]
    pub fn check(&self, value: &Value) -> bool {
        self.precondition.as_ref().is_none_or(|p| p(value))
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("label", &self.label)
            .field("precondition", &self.precondition.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

///
/// FieldDecl
///
/// One field as declared directly on a record type.
/// `kind: None` declares an untyped field that accepts any value.
///

#[derive(Clone, Debug)]
pub struct FieldDecl {
    name: String,
    kind: Option<Kind>,
    descriptor: Option<FieldDescriptor>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, kind: Option<Kind>) -> Self {
        Self {
            name: name.into(),
            kind,
            descriptor: None,
        }
    }

    pub fn typed(name: impl Into<String>, kind: Kind) -> Self {
        Self::new(name, Some(kind))
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    #[must_use]
    pub fn with_descriptor(mut self, descriptor: FieldDescriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> Option<&Kind> {
        self.kind.as_ref()
    }

    #[must_use]
    pub const fn descriptor(&self) -> Option<&FieldDescriptor> {
        self.descriptor.as_ref()
    }

    #[must_use]
    pub fn storage_key(&self) -> String {
        storage_key(&self.name)
    }

    #[must_use]
    pub fn descriptor_key(&self) -> String {
        descriptor_key(&self.name)
    }
}
