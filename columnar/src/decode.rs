//! Per-cell decoding of Arrow columns into [`Value`]s.
//!
//! The branch taken is chosen by the column's [`DataType`] alone. A
//! [`ColumnReader`] does the type dispatch and timezone lookup once so that
//! decoding many rows of the same column only pays for the cell read.

use arrow::array::{Array, LargeStringArray, PrimitiveArray, StringArray};
use arrow::datatypes::{
    ArrowPrimitiveType, DataType, Date32Type, Decimal128Type, Int32Type, Int64Type, Time32MillisecondType,
    Time32SecondType, Time64MicrosecondType, Time64NanosecondType, TimeUnit,
    TimestampMicrosecondType, TimestampMillisecondType, TimestampNanosecondType,
    TimestampSecondType,
};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::{Decimal, DecodeError, Value};

/// Decode the cell at `row` of `column`.
///
/// Resolves the column's type (and timezone, for timestamps) on every call;
/// use [`ColumnReader`] when decoding more than one row.
pub fn decode(column: &dyn Array, row: usize) -> Result<Value, DecodeError> {
    ColumnReader::try_new(column)?.value(row)
}

/// A column whose type has been checked, ready to decode any of its rows.
pub struct ColumnReader<'a> {
    array: &'a dyn Array,
    cells: Cells<'a>,
}

enum Cells<'a> {
    Date32(&'a [i32]),
    Utf8(&'a StringArray),
    LargeUtf8(&'a LargeStringArray),
    Timestamp {
        raw: &'a [i64],
        unit: TimeUnit,
        zone: Tz,
    },
    Int32(&'a [i32]),
    Int64(&'a [i64]),
    Time32(&'a [i32]),
    Time64(&'a [i64]),
    Decimal128 {
        raw: &'a [i128],
        scale: i8,
    },
}

impl<'a> ColumnReader<'a> {
    pub fn try_new(array: &'a dyn Array) -> Result<Self, DecodeError> {
        let data_type = array.data_type();
        let cells = match data_type {
            DataType::Date32 => Cells::Date32(values::<Date32Type>(array)?),
            DataType::Utf8 => Cells::Utf8(downcast::<StringArray>(array)?),
            DataType::LargeUtf8 => Cells::LargeUtf8(downcast::<LargeStringArray>(array)?),
            DataType::Timestamp(unit, tz) => {
                let raw = match unit {
                    TimeUnit::Second => values::<TimestampSecondType>(array)?,
                    TimeUnit::Millisecond => values::<TimestampMillisecondType>(array)?,
                    TimeUnit::Microsecond => values::<TimestampMicrosecondType>(array)?,
                    TimeUnit::Nanosecond => values::<TimestampNanosecondType>(array)?,
                };
                Cells::Timestamp {
                    raw,
                    unit: *unit,
                    zone: resolve_zone(tz.as_deref()),
                }
            }
            DataType::Int32 => Cells::Int32(values::<Int32Type>(array)?),
            DataType::Int64 => Cells::Int64(values::<Int64Type>(array)?),
            DataType::Time32(TimeUnit::Second) => Cells::Time32(values::<Time32SecondType>(array)?),
            DataType::Time32(TimeUnit::Millisecond) => {
                Cells::Time32(values::<Time32MillisecondType>(array)?)
            }
            DataType::Time64(TimeUnit::Microsecond) => {
                Cells::Time64(values::<Time64MicrosecondType>(array)?)
            }
            DataType::Time64(TimeUnit::Nanosecond) => {
                Cells::Time64(values::<Time64NanosecondType>(array)?)
            }
            DataType::Decimal128(_, scale) => Cells::Decimal128 {
                raw: values::<Decimal128Type>(array)?,
                scale: *scale,
            },
            _ => return Err(DecodeError::UnsupportedType(data_type.clone())),
        };
        Ok(Self { array, cells })
    }

    pub fn data_type(&self) -> &DataType {
        self.array.data_type()
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Decode the cell at `row`.
    ///
    /// Null cells decode to the zero value of their type, except for
    /// `Date32` which has no zero and fails with [`DecodeError::NullValue`].
    pub fn value(&self, row: usize) -> Result<Value, DecodeError> {
        let len = self.array.len();
        if row >= len {
            return Err(DecodeError::RowOutOfBounds { row, len });
        }
        let null = self.array.is_null(row);
        let value = match &self.cells {
            Cells::Date32(raw) => {
                if null {
                    return Err(DecodeError::NullValue(self.data_type().clone()));
                }
                Value::Date32(raw[row])
            }
            Cells::Utf8(array) => Value::String(if null {
                String::new()
            } else {
                array.value(row).to_string()
            }),
            Cells::LargeUtf8(array) => Value::String(if null {
                String::new()
            } else {
                array.value(row).to_string()
            }),
            Cells::Timestamp { raw, unit, zone } => {
                let value = if null { 0 } else { raw[row] };
                let instant = instant(value, *unit)
                    .ok_or(DecodeError::TimestampOutOfRange { value, unit: *unit })?;
                Value::Timestamp(instant.with_timezone(zone))
            }
            Cells::Int32(raw) => Value::Int32(if null { 0 } else { raw[row] }),
            Cells::Int64(raw) => Value::Int64(if null { 0 } else { raw[row] }),
            Cells::Time32(raw) => Value::Time32(if null { 0 } else { raw[row] }),
            Cells::Time64(raw) => Value::Time64(if null { 0 } else { raw[row] }),
            Cells::Decimal128 { raw, scale } => {
                Value::Decimal(Decimal::new(if null { 0 } else { raw[row] }, *scale))
            }
        };
        Ok(value)
    }
}

fn downcast<'a, A: Array + 'static>(array: &'a dyn Array) -> Result<&'a A, DecodeError> {
    array
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| DecodeError::Downcast(array.data_type().clone()))
}

fn values<'a, T: ArrowPrimitiveType>(array: &'a dyn Array) -> Result<&'a [T::Native], DecodeError> {
    let array = downcast::<PrimitiveArray<T>>(array)?;
    let values: &'a [T::Native] = array.values();
    Ok(values)
}

fn instant(value: i64, unit: TimeUnit) -> Option<DateTime<Utc>> {
    match unit {
        TimeUnit::Second => DateTime::from_timestamp(value, 0),
        TimeUnit::Millisecond => DateTime::from_timestamp_millis(value),
        TimeUnit::Microsecond => DateTime::from_timestamp_micros(value),
        TimeUnit::Nanosecond => Some(DateTime::from_timestamp_nanos(value)),
    }
}

/// Resolve a column's timezone name, falling back to UTC when it is absent,
/// empty or unknown.
pub fn resolve_zone(name: Option<&str>) -> Tz {
    match name {
        None | Some("") => Tz::UTC,
        Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            warn!(timezone = name, "unknown timestamp timezone, falling back to UTC");
            Tz::UTC
        }),
    }
}
