use arrow::datatypes::{DataType, TimeUnit};
use thiserror::Error;

use crate::ValueKind;

/// Failure to decode a single cell of a column.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("null value in non-nullable `{0}` cell")]
    NullValue(DataType),
    #[error("unsupported column type `{0}`")]
    UnsupportedType(DataType),
    #[error("timestamp `{value}` ({unit:?}) is out of range")]
    TimestampOutOfRange { value: i64, unit: TimeUnit },
    #[error("row {row} out of bounds for column of length {len}")]
    RowOutOfBounds { row: usize, len: usize },
    #[error("column declared as `{0}` does not hold matching data")]
    Downcast(DataType),
}

/// Failure to move a decoded [`Value`](crate::Value) into a field's static type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("cannot assign {found} value to field of type `{expected}`")]
    Mismatch {
        expected: &'static str,
        found: ValueKind,
    },
    #[error("`{value}` does not fit in `{expected}`")]
    OutOfRange {
        expected: &'static str,
        value: String,
    },
}

#[derive(Error, Debug)]
pub enum ColumnarError {
    #[error("row {row}: cannot decode column `{column}` into `{field}`")]
    Decode {
        row: usize,
        field: &'static str,
        column: String,
        #[source]
        source: DecodeError,
    },
    #[error("row {row}: cannot assign column `{column}` to `{field}`")]
    Convert {
        row: usize,
        field: &'static str,
        column: String,
        #[source]
        source: ConvertError,
    },
    #[error("field `{field}` of type `{expected}` cannot hold column `{column}` of type `{found}`")]
    TypeMismatch {
        field: &'static str,
        column: String,
        found: DataType,
        expected: &'static str,
    },
    #[error("cannot read column `{column}` for `{field}`")]
    Column {
        field: &'static str,
        column: String,
        #[source]
        source: DecodeError,
    },
    #[error("column `{column}` bound to `{field}` is missing from the batch")]
    MissingColumn { field: &'static str, column: String },
}
