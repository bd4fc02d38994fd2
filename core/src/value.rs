//! CQL value type and conversions

use std::collections::HashMap;

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Utc};
#[cfg(feature = "uuid")]
use uuid::Uuid;

use crate::error::{CqlError, Result};

/// A value bound to, or read from, a CQL statement
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CqlValue {
    #[default]
    Null,
    Boolean(bool),
    TinyInt(i8),
    SmallInt(i16),
    Int(i32),
    BigInt(i64),
    Float(f32),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
    /// Milliseconds since the Unix epoch
    Timestamp(i64),
    /// `list<...>` / `set<...>` values, also the bound value of `IN ?`
    List(Vec<CqlValue>),
    Map(Vec<(CqlValue, CqlValue)>),
    #[cfg(feature = "uuid")]
    Uuid(Uuid),
}

impl CqlValue {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the CQL type family, used in mapping errors
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::TinyInt(_) => "tinyint",
            Self::SmallInt(_) => "smallint",
            Self::Int(_) => "int",
            Self::BigInt(_) => "bigint",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
            Self::Timestamp(_) => "timestamp",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            #[cfg(feature = "uuid")]
            Self::Uuid(_) => "uuid",
        }
    }
}

//------------------------------------------------------------------------------
// Rust -> CqlValue
//------------------------------------------------------------------------------

macro_rules! impl_from_primitive {
    ($($t:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$t> for CqlValue {
                #[inline]
                fn from(value: $t) -> Self {
                    CqlValue::$variant(value)
                }
            }
        )+
    };
}

impl_from_primitive!(
    bool => Boolean,
    i8 => TinyInt,
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    f32 => Float,
    f64 => Double,
    String => Text,
    Vec<u8> => Blob,
);

impl From<u8> for CqlValue {
    fn from(value: u8) -> Self {
        CqlValue::SmallInt(i16::from(value))
    }
}

impl From<u16> for CqlValue {
    fn from(value: u16) -> Self {
        CqlValue::Int(i32::from(value))
    }
}

impl From<u32> for CqlValue {
    fn from(value: u32) -> Self {
        CqlValue::BigInt(i64::from(value))
    }
}

impl From<&str> for CqlValue {
    fn from(value: &str) -> Self {
        CqlValue::Text(value.to_string())
    }
}

impl From<&String> for CqlValue {
    fn from(value: &String) -> Self {
        CqlValue::Text(value.clone())
    }
}

impl From<&[u8]> for CqlValue {
    fn from(value: &[u8]) -> Self {
        CqlValue::Blob(value.to_vec())
    }
}

impl<T: Into<CqlValue>> From<Option<T>> for CqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CqlValue::Null, Into::into)
    }
}

macro_rules! impl_from_list {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<Vec<$t>> for CqlValue {
                fn from(value: Vec<$t>) -> Self {
                    CqlValue::List(value.into_iter().map(Into::into).collect())
                }
            }
        )+
    };
}

impl_from_list!(bool, i16, i32, i64, f32, f64, String, &str, CqlValue);

#[cfg(feature = "uuid")]
impl From<Uuid> for CqlValue {
    fn from(value: Uuid) -> Self {
        CqlValue::Uuid(value)
    }
}

#[cfg(feature = "uuid")]
impl From<Vec<Uuid>> for CqlValue {
    fn from(value: Vec<Uuid>) -> Self {
        CqlValue::List(value.into_iter().map(CqlValue::Uuid).collect())
    }
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> From<DateTime<Tz>> for CqlValue {
    fn from(value: DateTime<Tz>) -> Self {
        CqlValue::Timestamp(value.timestamp_millis())
    }
}

//------------------------------------------------------------------------------
// CqlValue -> Rust
//------------------------------------------------------------------------------

/// Conversion from a row value into a Rust type
pub trait FromCqlValue: Sized {
    fn from_cql(value: CqlValue) -> Result<Self>;
}

fn mismatch<T>(expected: &str, value: &CqlValue) -> Result<T> {
    Err(CqlError::Mapping(format!(
        "expected {expected}, found {}",
        value.type_name()
    )))
}

impl FromCqlValue for CqlValue {
    #[inline]
    fn from_cql(value: CqlValue) -> Result<Self> {
        Ok(value)
    }
}

impl FromCqlValue for bool {
    fn from_cql(value: CqlValue) -> Result<Self> {
        match value {
            CqlValue::Boolean(b) => Ok(b),
            other => mismatch("boolean", &other),
        }
    }
}

fn widen(value: CqlValue, expected: &str) -> Result<i64> {
    match value {
        CqlValue::TinyInt(i) => Ok(i64::from(i)),
        CqlValue::SmallInt(i) => Ok(i64::from(i)),
        CqlValue::Int(i) => Ok(i64::from(i)),
        CqlValue::BigInt(i) => Ok(i),
        other => mismatch(expected, &other),
    }
}

macro_rules! impl_from_cql_integer {
    ($($t:ty),+ $(,)?) => {
        $(
            impl FromCqlValue for $t {
                fn from_cql(value: CqlValue) -> Result<Self> {
                    let wide = widen(value, stringify!($t))?;
                    <$t>::try_from(wide).map_err(|_| {
                        CqlError::Mapping(format!("{wide} out of range for {}", stringify!($t)))
                    })
                }
            }
        )+
    };
}

impl_from_cql_integer!(i8, i16, i32, u8, u16, u32);

/// Timestamps read as milliseconds since the Unix epoch.
impl FromCqlValue for i64 {
    fn from_cql(value: CqlValue) -> Result<Self> {
        match value {
            CqlValue::Timestamp(ms) => Ok(ms),
            other => widen(other, "i64"),
        }
    }
}

impl FromCqlValue for f32 {
    fn from_cql(value: CqlValue) -> Result<Self> {
        match value {
            CqlValue::Float(f) => Ok(f),
            other => mismatch("float", &other),
        }
    }
}

impl FromCqlValue for f64 {
    fn from_cql(value: CqlValue) -> Result<Self> {
        match value {
            CqlValue::Double(f) => Ok(f),
            CqlValue::Float(f) => Ok(f64::from(f)),
            other => mismatch("double", &other),
        }
    }
}

impl FromCqlValue for String {
    fn from_cql(value: CqlValue) -> Result<Self> {
        match value {
            CqlValue::Text(s) => Ok(s),
            other => mismatch("text", &other),
        }
    }
}

impl FromCqlValue for Vec<u8> {
    fn from_cql(value: CqlValue) -> Result<Self> {
        match value {
            CqlValue::Blob(b) => Ok(b),
            other => mismatch("blob", &other),
        }
    }
}

impl<T: FromCqlValue> FromCqlValue for Option<T> {
    fn from_cql(value: CqlValue) -> Result<Self> {
        match value {
            CqlValue::Null => Ok(None),
            other => T::from_cql(other).map(Some),
        }
    }
}

macro_rules! impl_from_cql_list {
    ($($t:ty),+ $(,)?) => {
        $(
            impl FromCqlValue for Vec<$t> {
                fn from_cql(value: CqlValue) -> Result<Self> {
                    match value {
                        CqlValue::List(items) => items.into_iter().map(<$t>::from_cql).collect(),
                        CqlValue::Null => Ok(Vec::new()),
                        other => mismatch("list", &other),
                    }
                }
            }
        )+
    };
}

impl_from_cql_list!(bool, i16, i32, i64, f32, f64, String, CqlValue);

impl FromCqlValue for HashMap<String, CqlValue> {
    fn from_cql(value: CqlValue) -> Result<Self> {
        match value {
            CqlValue::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok((String::from_cql(k)?, v)))
                .collect(),
            CqlValue::Null => Ok(HashMap::new()),
            other => mismatch("map", &other),
        }
    }
}

#[cfg(feature = "uuid")]
impl FromCqlValue for Uuid {
    fn from_cql(value: CqlValue) -> Result<Self> {
        match value {
            CqlValue::Uuid(u) => Ok(u),
            CqlValue::Text(s) => {
                Uuid::parse_str(&s).map_err(|e| CqlError::Mapping(e.to_string()))
            }
            other => mismatch("uuid", &other),
        }
    }
}

#[cfg(feature = "chrono")]
impl FromCqlValue for DateTime<Utc> {
    fn from_cql(value: CqlValue) -> Result<Self> {
        match value {
            CqlValue::Timestamp(ms) => DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| CqlError::Mapping(format!("timestamp {ms} out of range"))),
            other => mismatch("timestamp", &other),
        }
    }
}
