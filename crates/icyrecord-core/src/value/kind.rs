use crate::model::RecordType;
use std::{fmt, mem};

///
/// Kind
///
/// Declared type of a field. Matching is exact: a value is accepted only
/// when its own kind equals the declared kind. `Int` does not accept `Bool`
/// or `Uint`, and a record kind only accepts instances of that very type,
/// never of a type derived from it.
///

#[derive(Clone, Debug)]
#[remain::sorted]
pub enum Kind {
    Blob,
    Bool,
    Float,
    Int,
    List,
    Null,
    Record(RecordType),
    Text,
    Uint,
}

impl Kind {
    /// Text fields render with a quoted placeholder.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Record(a), Self::Record(b)) => a.same_type(b),
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

impl Eq for Kind {}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob => f.write_str("Blob"),
            Self::Bool => f.write_str("Bool"),
            Self::Float => f.write_str("Float"),
            Self::Int => f.write_str("Int"),
            Self::List => f.write_str("List"),
            Self::Null => f.write_str("Null"),
            Self::Record(ty) => write!(f, "Record({})", ty.name()),
            Self::Text => f.write_str("Text"),
            Self::Uint => f.write_str("Uint"),
        }
    }
}
