use std::fmt;

use arrow::datatypes::DataType;
use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::Decimal;

/// A single decoded cell.
///
/// Which variant is produced depends only on the column's data type,
/// never on the field it ends up in.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int32(i32),
    Int64(i64),
    /// Days since the unix epoch, as stored.
    Date32(i32),
    String(String),
    Timestamp(DateTime<Tz>),
    Decimal(Decimal),
    /// Raw time of day in the column's unit.
    Time32(i32),
    /// Raw time of day in the column's unit.
    Time64(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Int32,
    Int64,
    Date32,
    String,
    Timestamp,
    Decimal,
    Time32,
    Time64,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int32(_) => ValueKind::Int32,
            Value::Int64(_) => ValueKind::Int64,
            Value::Date32(_) => ValueKind::Date32,
            Value::String(_) => ValueKind::String,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::Time32(_) => ValueKind::Time32,
            Value::Time64(_) => ValueKind::Time64,
        }
    }
}

impl ValueKind {
    /// The kind of value a column of `data_type` decodes to, `None` if the
    /// decoder does not support it.
    pub fn of(data_type: &DataType) -> Option<Self> {
        let kind = match data_type {
            DataType::Date32 => ValueKind::Date32,
            DataType::Utf8 | DataType::LargeUtf8 => ValueKind::String,
            DataType::Timestamp(_, _) => ValueKind::Timestamp,
            DataType::Int32 => ValueKind::Int32,
            DataType::Int64 => ValueKind::Int64,
            DataType::Time32(_) => ValueKind::Time32,
            DataType::Time64(_) => ValueKind::Time64,
            DataType::Decimal128(_, _) => ValueKind::Decimal,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Date32 => "date32",
            ValueKind::String => "string",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Decimal => "decimal",
            ValueKind::Time32 => "time32",
            ValueKind::Time64 => "time64",
        };
        f.write_str(name)
    }
}
