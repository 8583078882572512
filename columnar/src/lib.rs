//! Decode Arrow [`RecordBatch`]es into plain Rust structs, one per row.
//!
//! ## Container
//!
//! - `#[columnar]` implements [`FromRecordBatch`] for a struct with named fields. The struct must implement [`Default`].
//! - `#[columnar(bind_all)]` binds every field without a `columnar` attribute to the column with the same name as the field
//!
//! ## Field Attributes
//!
//! - `#[columnar(column = "name")]`: fill the field from the column called `name`
//! - `#[columnar(skip)]`: never bind the field, even with `bind_all`
//!
//! Fields that are not bound keep their default value. The field type must implement [`FromValue`].
//!
//! ## Decoding
//!
//! Which [`Value`] a cell decodes to depends only on the column's data type:
//!
//! | column type              | value                 | null cell          |
//! |--------------------------|-----------------------|--------------------|
//! | `Date32`                 | [`Value::Date32`]     | [`DecodeError::NullValue`] |
//! | `Utf8`, `LargeUtf8`      | [`Value::String`]     | empty string       |
//! | `Timestamp(unit, tz)`    | [`Value::Timestamp`]  | unix epoch         |
//! | `Int32`, `Int64`         | [`Value::Int32`], [`Value::Int64`] | `0`   |
//! | `Time32`, `Time64`       | [`Value::Time32`], [`Value::Time64`] | `0` |
//! | `Decimal128(_, scale)`   | [`Value::Decimal`]    | `0` at `scale`     |
//!
//! Any other column type fails with [`DecodeError::UnsupportedType`].
//!
//! ## Failures
//!
//! By default a field that cannot be filled is left at its default and the rest of the batch is still
//! decoded. [`DecodeOptions::fail_fast`] returns the first failure instead, and
//! [`RecordBuilder::build_with_report`] tells what happened to every field of every row.
//!
//! ```rust, ignore
//! use columnar_record::{columnar, from_record_batch};
//!
//! #[columnar]
//! #[derive(Debug, Default)]
//! struct Trade {
//!     #[columnar(column = "trade_id")]
//!     id: i64,
//!     #[columnar(column = "symbol")]
//!     symbol: String,
//!     #[columnar(column = "price")]
//!     price: Decimal,
//! }
//!
//! let trades: Vec<Trade> = from_record_batch(&batch);
//! ```

extern crate self as columnar_record;

mod err;
pub use err::{ColumnarError, ConvertError, DecodeError};
mod value;
pub use value::{Value, ValueKind};
mod decimal;
pub use decimal::Decimal;
mod decode;
pub use decode::{decode, resolve_zone, ColumnReader};
mod convert;
pub use convert::FromValue;
mod shape;
pub use shape::{FieldBinding, FromRecordBatch, Shape, ShapeBuilder};
mod options;
pub use options::{DecodeOptions, DecodePolicy};
mod report;
pub use report::{Decoded, FailReason, FieldOutcome, FieldReport, RowReport, SkipReason};
mod builder;
pub use builder::{from_record_batch, RecordBuilder};

pub use arrow::record_batch::RecordBatch;
pub use columnar_record_derive::*;

#[cfg(feature = "bench")]
extern crate lazy_static;
