use std::fmt::Display;

use arrow::datatypes::DataType;
use serde::{Serialize, Serializer};

use crate::{ConvertError, DecodeError};

/// What happened to one bound field while building one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldOutcome {
    Decoded,
    Skipped(SkipReason),
    Failed(FailReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// No column with the bound name exists in the batch.
    MissingColumn,
    /// The column exists but has no physical data (`DataType::Null`).
    NoData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FailReason {
    Decode(#[serde(serialize_with = "display")] DecodeError),
    Convert(#[serde(serialize_with = "display")] ConvertError),
    TypeMismatch {
        #[serde(serialize_with = "display")]
        found: DataType,
        expected: &'static str,
    },
    MissingColumn,
}

fn display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub field: &'static str,
    pub column: String,
    pub outcome: FieldOutcome,
}

/// Per-field outcomes for one output record, in binding order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowReport {
    pub row: usize,
    pub fields: Vec<FieldReport>,
}

impl RowReport {
    pub(crate) fn new(row: usize, capacity: usize) -> Self {
        Self {
            row,
            fields: Vec::with_capacity(capacity),
        }
    }

    /// True if no field failed. Skipped fields do not count.
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&FieldReport, &FailReason)> {
        self.fields.iter().filter_map(|f| match &f.outcome {
            FieldOutcome::Failed(reason) => Some((f, reason)),
            _ => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&FieldReport, SkipReason)> {
        self.fields.iter().filter_map(|f| match f.outcome {
            FieldOutcome::Skipped(reason) => Some((f, reason)),
            _ => None,
        })
    }

    pub fn outcome(&self, field: &str) -> Option<&FieldOutcome> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| &f.outcome)
    }
}

/// A built record together with how each of its fields was filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub record: T,
    pub report: RowReport,
}
