mod kind;

#[cfg(test)]
mod tests;

use crate::record::Record;
use serde::{Serialize, Serializer};
use std::{fmt, sync::Arc};

// re-exports
pub use kind::Kind;

///
/// Value
///
/// Dynamically typed field value.
///
/// Null    → explicit absence; only accepted by untyped fields.
/// Record  → a nested, fully constructed record instance.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Float(f64),
    Int(i64),
    /// Ordered list of values. Items are not type-checked.
    List(Vec<Self>),
    Null,
    #[serde(serialize_with = "serialize_record")]
    Record(Arc<Record>),
    Text(String),
    Uint(u64),
}

impl Value {
    /// Runtime type tag of this value, compared by identity against the
    /// declared kind of a field.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Blob(_) => Kind::Blob,
            Self::Bool(_) => Kind::Bool,
            Self::Float(_) => Kind::Float,
            Self::Int(_) => Kind::Int,
            Self::List(_) => Kind::List,
            Self::Null => Kind::Null,
            Self::Record(record) => Kind::Record(record.record_type().clone()),
            Self::Text(_) => Kind::Text,
            Self::Uint(_) => Kind::Uint,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_uint(&self) -> Option<u64> {
        match self {
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    // fmt_item
    // list items quote their text so `['a', 1]` stays unambiguous
    fn fmt_item(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "'{s}'"),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob(bytes) => {
                f.write_str("0x")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Self::Bool(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_item(f)?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("null"),
            Self::Record(record) => write!(f, "{record}"),
            Self::Text(s) => f.write_str(s),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

fn serialize_record<S: Serializer>(record: &Arc<Record>, serializer: S) -> Result<S::Ok, S::Error> {
    record.as_ref().serialize(serializer)
}

///
/// CONVERSIONS
///

// impl_value_from
macro_rules! impl_value_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from!(
    bool => Bool,
    f32 => Float,
    f64 => Float,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    String => Text,
);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Self::Record(Arc::new(v))
    }
}

impl From<Arc<Record>> for Value {
    fn from(v: Arc<Record>) -> Self {
        Self::Record(v)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}
