//! The closed set of values the dumper accepts.

use serde::Serialize;
use serde_json::Value;

use crate::error::DumpError;

/// A value that can be written to a dump file.
///
/// Every variant has exactly one text form (see [`coerce`](crate::core::coerce)).
/// `Unset` stands in for "no value given" and is distinct from `Null`,
/// `Integer(0)` and `Text("")`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoggableValue {
    #[default]
    Unset,
    Null,
    Bool(bool),
    Integer(i64),
    /// Only for unsigned values above `i64::MAX`; smaller ones are `Integer`.
    Unsigned(u64),
    Float(f64),
    Text(String),
    Sequence(Vec<LoggableValue>),
    /// Fields in insertion order.
    Record(Vec<(String, LoggableValue)>),
}

impl LoggableValue {
    /// Build a record from `(name, value)` pairs, keeping their order.
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<LoggableValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        LoggableValue::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Convert any serializable value. Structs become records with fields in
    /// declaration order.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, DumpError> {
        let json = serde_json::to_value(value)?;
        Ok(json.into())
    }
}

impl From<&str> for LoggableValue {
    fn from(value: &str) -> Self {
        LoggableValue::Text(value.to_string())
    }
}

impl From<String> for LoggableValue {
    fn from(value: String) -> Self {
        LoggableValue::Text(value)
    }
}

impl From<bool> for LoggableValue {
    fn from(value: bool) -> Self {
        LoggableValue::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LoggableValue {
                fn from(value: $ty) -> Self {
                    LoggableValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for LoggableValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(LoggableValue::Unsigned(value), LoggableValue::Integer)
    }
}

impl From<usize> for LoggableValue {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target.
        LoggableValue::from(value as u64)
    }
}

impl From<f32> for LoggableValue {
    fn from(value: f32) -> Self {
        // Go through the shortest f32 text so 0.1f32 stays 0.1, not 0.10000000149011612.
        let widened = value.to_string().parse().unwrap_or(f64::from(value));
        LoggableValue::Float(widened)
    }
}

impl From<f64> for LoggableValue {
    fn from(value: f64) -> Self {
        LoggableValue::Float(value)
    }
}

impl<T: Into<LoggableValue>> From<Vec<T>> for LoggableValue {
    fn from(items: Vec<T>) -> Self {
        LoggableValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<LoggableValue>> From<Option<T>> for LoggableValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(LoggableValue::Null, Into::into)
    }
}

impl From<Value> for LoggableValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => LoggableValue::Null,
            Value::Bool(b) => LoggableValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    LoggableValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    LoggableValue::Unsigned(u)
                } else {
                    LoggableValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => LoggableValue::Text(s),
            Value::Array(items) => {
                LoggableValue::Sequence(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => LoggableValue::Record(
                map.into_iter()
                    .map(|(name, value)| (name, value.into()))
                    .collect(),
            ),
        }
    }
}
