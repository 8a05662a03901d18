use crate::{
    error::RecordError,
    model::RecordType,
    record::{Args, Record},
    value::{Kind, Value},
};

/// ============================================================================
/// FIELD VALUES
/// ============================================================================

///
/// FieldValue
///
/// Conversion between a Rust type and a dynamic field value.
/// `kind() == None` declares the field untyped.
///

pub trait FieldValue: Sized {
    fn kind() -> Option<Kind>;

    fn to_value(&self) -> Value;

    fn into_value(self) -> Value {
        self.to_value()
    }

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for String {
    fn kind() -> Option<Kind> {
        Some(Kind::Text)
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_text().map(ToString::to_string)
    }
}

impl FieldValue for f32 {
    fn kind() -> Option<Kind> {
        Some(Kind::Float)
    }

    fn to_value(&self) -> Value {
        Value::Float((*self).into())
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_value(value: &Value) -> Option<Self> {
        value.as_float().map(|v| v as Self)
    }
}

impl FieldValue for f64 {
    fn kind() -> Option<Kind> {
        Some(Kind::Float)
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn kind() -> Option<Kind> {
        Some(Kind::List)
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(FieldValue::into_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::List(items) = value else {
            return None;
        };

        items.iter().map(T::from_value).collect()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn kind() -> Option<Kind> {
        None
    }

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn into_value(self) -> Value {
        self.map_or(Value::Null, FieldValue::into_value)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl FieldValue for Value {
    fn kind() -> Option<Kind> {
        None
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn into_value(self) -> Value {
        self
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

// impl_field_value
#[macro_export]
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl $crate::traits::FieldValue for $type {
                fn kind() -> ::std::option::Option<$crate::value::Kind> {
                    ::std::option::Option::Some($crate::value::Kind::$variant)
                }

                fn to_value(&self) -> $crate::value::Value {
                    $crate::value::Value::$variant((*self).into())
                }

                fn from_value(value: &$crate::value::Value) -> ::std::option::Option<Self> {
                    match value {
                        $crate::value::Value::$variant(v) => (*v).try_into().ok(),
                        _ => ::std::option::Option::None,
                    }
                }
            }
        )*
    };
}

impl_field_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    bool => Bool,
);

/// ============================================================================
/// TYPED RECORDS
/// ============================================================================

///
/// RecordKind
///
/// A Rust struct backed by a record type. Usually derived with
/// `#[derive(Record)]`; the derive builds the record type once per process.
///

pub trait RecordKind: Sized {
    fn record_type() -> RecordType;

    fn into_args(self) -> Args;

    fn from_record(record: &Record) -> Result<Self, RecordError>;

    /// Run the struct through the validating constructor.
    fn create(self) -> Result<Record, RecordError> {
        Self::record_type().construct(self.into_args())
    }

    /// Construct from keyword arguments and read the typed struct back out.
    fn from_args(args: Args) -> Result<Self, RecordError> {
        let record = Self::record_type().construct(args)?;

        Self::from_record(&record)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widths_share_one_kind() {
        assert_eq!(i8::kind(), Some(Kind::Int));
        assert_eq!(u16::kind(), Some(Kind::Uint));
        assert_eq!(7i32.to_value(), Value::Int(7));
        assert_eq!(u8::from_value(&Value::Uint(300)), None);
        assert_eq!(u8::from_value(&Value::Uint(200)), Some(200));
        assert_eq!(i64::from_value(&Value::Uint(1)), None);
    }

    mod newtype {
        // no imports: the macro must resolve everything through `$crate`

        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub struct Cents(pub i64);

        impl From<Cents> for i64 {
            fn from(c: Cents) -> Self {
                c.0
            }
        }

        impl From<i64> for Cents {
            fn from(v: i64) -> Self {
                Self(v)
            }
        }

        crate::impl_field_value!(Cents => Int);
    }

    #[test]
    fn exported_macro_is_path_independent() {
        use newtype::Cents;

        assert_eq!(Cents::kind(), Some(Kind::Int));
        assert_eq!(Cents(250).to_value(), Value::Int(250));
        assert_eq!(Cents::from_value(&Value::Int(9)), Some(Cents(9)));
        assert_eq!(Cents::from_value(&Value::Uint(9)), None);
    }

    #[test]
    fn option_is_untyped_and_maps_null() {
        assert_eq!(Option::<i64>::kind(), None);
        assert_eq!(None::<i64>.to_value(), Value::Null);
        assert_eq!(Option::<i64>::from_value(&Value::Null), Some(None));
        assert_eq!(Option::<i64>::from_value(&Value::Int(4)), Some(Some(4)));
        assert_eq!(Option::<i64>::from_value(&Value::Bool(true)), None);
    }

    #[test]
    fn vec_round_trips_through_list() {
        let names = vec!["a".to_string(), "b".to_string()];
        let value = names.clone().into_value();

        assert_eq!(value.kind(), Kind::List);
        assert_eq!(Vec::<String>::from_value(&value), Some(names));
        assert_eq!(
            Vec::<String>::from_value(&Value::List(vec![Value::Int(1)])),
            None
        );
    }
}
