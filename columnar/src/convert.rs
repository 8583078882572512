use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::{ConvertError, Decimal, Value, ValueKind};

/// Days between 0001-01-01 and 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// A field type that a decoded [`Value`] can be assigned to.
///
/// `accepts` must return true for exactly the kinds `from_value` converts
/// without a [`ConvertError::Mismatch`]; the record builder relies on it to
/// reject a binding before decoding any row.
pub trait FromValue: Sized {
    fn accepts(kind: ValueKind) -> bool;
    fn from_value(value: Value) -> Result<Self, ConvertError>;
}

fn mismatch<T>(value: &Value) -> ConvertError {
    ConvertError::Mismatch {
        expected: std::any::type_name::<T>(),
        found: value.kind(),
    }
}

impl FromValue for Value {
    fn accepts(_: ValueKind) -> bool {
        true
    }

    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Ok(value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn accepts(kind: ValueKind) -> bool {
        T::accepts(kind)
    }

    fn from_value(value: Value) -> Result<Self, ConvertError> {
        T::from_value(value).map(Some)
    }
}

impl FromValue for i32 {
    fn accepts(kind: ValueKind) -> bool {
        matches!(kind, ValueKind::Int32 | ValueKind::Date32 | ValueKind::Time32)
    }

    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Int32(v) | Value::Date32(v) | Value::Time32(v) => Ok(v),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for i64 {
    fn accepts(kind: ValueKind) -> bool {
        matches!(kind, ValueKind::Int64 | ValueKind::Time64 | ValueKind::Int32)
    }

    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Int64(v) | Value::Time64(v) => Ok(v),
            Value::Int32(v) => Ok(v.into()),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for String {
    fn accepts(kind: ValueKind) -> bool {
        kind == ValueKind::String
    }

    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for Decimal {
    fn accepts(kind: ValueKind) -> bool {
        kind == ValueKind::Decimal
    }

    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Decimal(d) => Ok(d),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for DateTime<Tz> {
    fn accepts(kind: ValueKind) -> bool {
        kind == ValueKind::Timestamp
    }

    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Timestamp(ts) => Ok(ts),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for DateTime<Utc> {
    fn accepts(kind: ValueKind) -> bool {
        kind == ValueKind::Timestamp
    }

    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Timestamp(ts) => Ok(ts.with_timezone(&Utc)),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for NaiveDate {
    fn accepts(kind: ValueKind) -> bool {
        kind == ValueKind::Date32
    }

    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Date32(days) => days
                .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
                .and_then(NaiveDate::from_num_days_from_ce_opt)
                .ok_or_else(|| ConvertError::OutOfRange {
                    expected: std::any::type_name::<Self>(),
                    value: days.to_string(),
                }),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}
